//! The host's in-memory set of compilation assets.

use std::collections::BTreeMap;

use crate::host::Artifact;

/// Ordered mapping from public path to emitted artifact.
///
/// Mirrors the host's compilation asset table; the engine only re-keys
/// entries, it never creates or destroys artifacts here.
#[derive(Debug, Default)]
pub struct AssetSet {
  entries: BTreeMap<String, Artifact>,
}

impl AssetSet {
  /// Create an empty asset set.
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert an artifact under an explicit public path.
  pub fn insert(&mut self, public_path: impl Into<String>, artifact: Artifact) {
    self.entries.insert(public_path.into(), artifact);
  }

  /// Insert an artifact under its own public path.
  pub fn record(&mut self, artifact: Artifact) {
    self.entries.insert(artifact.public_path(), artifact);
  }

  /// Remove and return the artifact stored under `public_path`.
  pub fn remove(&mut self, public_path: &str) -> Option<Artifact> {
    self.entries.remove(public_path)
  }

  /// Whether an artifact is recorded under `public_path`.
  pub fn contains(&self, public_path: &str) -> bool {
    self.entries.contains_key(public_path)
  }

  /// Iterate over the recorded public paths in sorted order.
  pub fn paths(&self) -> impl Iterator<Item = &String> {
    self.entries.keys()
  }

  /// Number of recorded assets.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the set holds no assets.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
