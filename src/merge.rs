//! Re-fingerprinting of artifacts produced by merge tasks.
//!
//! A fingerprint resolved from naming templates is wrong for a concatenated
//! artifact: the host fills the template placeholder before the merge step
//! runs, so the token never reflects the merged bytes. This observer hashes
//! the artifact after the merge completes and renames it in place, recording
//! every rename so the separator normaliser can find the affected paths at
//! build completion.

use std::cell::RefCell;
use std::collections::BTreeSet;

use anyhow::Result;

use crate::config::FingerprintConfig;
use crate::fingerprint::content_fingerprint;
use crate::host::{MergeObserver, MergeTask};

/// Post-merge hook that corrects fingerprints on merged artifacts.
///
/// Holds the merge rename ledger for one build: the set of public paths of
/// artifacts renamed by this observer, consumed once at build completion and
/// never persisted.
pub struct MergeRefingerprinter {
  delimiter: String,
  length: usize,
  ledger: RefCell<BTreeSet<String>>,
}

impl MergeRefingerprinter {
  /// Create a re-fingerprinter with an empty rename ledger.
  pub fn new(config: &FingerprintConfig) -> Self {
    Self {
      delimiter: config.resolved_delimiter(),
      length: config.fingerprint_length(),
      ledger: RefCell::new(BTreeSet::new()),
    }
  }

  /// Public paths of artifacts renamed during this build.
  pub fn renamed_paths(&self) -> BTreeSet<String> {
    self.ledger.borrow().clone()
  }

  /// Whether the given public path was renamed by this observer.
  pub fn was_renamed(&self, public_path: &str) -> bool {
    self.ledger.borrow().contains(public_path)
  }
}

impl MergeObserver for MergeRefingerprinter {
  fn merge_completed(&self, task: &mut MergeTask) -> Result<()> {
    // A merge task must yield exactly one merged artifact; an empty list is
    // a host-contract violation, not grounds to abort the build.
    let Some(artifact) = task.assets.last().cloned() else {
      tracing::warn!("merge task completed with an empty artifact list; skipping re-fingerprint");
      return Ok(());
    };

    let content = artifact.read()?;
    let token = format!(
      "{}{}",
      self.delimiter,
      content_fingerprint(&content, self.length)
    );
    let file_name = match artifact.extension() {
      Some(extension) => format!("{}{token}.{extension}", artifact.name_without_extension()),
      None => format!("{}{token}", artifact.name_without_extension()),
    };

    let renamed = artifact.rename(&file_name)?;
    let public_path = renamed.public_path();
    tracing::debug!(path = %public_path, "re-fingerprinted merged artifact");

    task.assets.pop();
    task.assets.push(renamed);
    self.ledger.borrow_mut().insert(public_path);
    Ok(())
  }
}
