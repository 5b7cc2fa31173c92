//! Build-session wiring across the host lifecycle.
//!
//! A [`BuildSession`] owns the engine state for exactly one build and
//! receives its context explicitly at construction, rather than reading
//! ambient globals. The host drives it at three totally ordered points:
//! [`BuildSession::configure`] before compilation,
//! [`BuildSession::register`] while assembling its task collection, and
//! [`BuildSession::build_completed`] once artifacts and the manifest file
//! exist on disk.

use std::path::PathBuf;
use std::rc::Rc;

use crate::config::FingerprintConfig;
use crate::host::{AssetSet, MediaDirs, OutputConfig, TaskCollection};
use crate::manifest::ManifestNormalizer;
use crate::merge::MergeRefingerprinter;
use crate::naming::NamingTemplates;
use crate::paths::normalize_separators;

/// Host-supplied build context: where artifacts are served from and where
/// the manifest lives.
#[derive(Debug, Clone)]
pub struct BuildContext {
  /// Root directory the host serves emitted artifacts from.
  pub public_path: PathBuf,
  /// Manifest file name below the public path.
  pub manifest_name: String,
  /// Output directories for media asset classes.
  pub media_dirs: MediaDirs,
}

impl BuildContext {
  /// Create a context with default media directories.
  pub fn new(public_path: impl Into<PathBuf>, manifest_name: impl Into<String>) -> Self {
    Self {
      public_path: public_path.into(),
      manifest_name: manifest_name.into(),
      media_dirs: MediaDirs::default(),
    }
  }

  /// Full path of the manifest file.
  pub fn manifest_path(&self) -> PathBuf {
    self.public_path.join(&self.manifest_name)
  }
}

/// Fingerprinting engine for a single build.
pub struct BuildSession {
  context: BuildContext,
  templates: NamingTemplates,
  normalizer: ManifestNormalizer,
  refingerprinter: Rc<MergeRefingerprinter>,
}

impl BuildSession {
  /// Create a session from the host context and registered configuration.
  pub fn new(context: BuildContext, config: FingerprintConfig) -> Self {
    Self {
      templates: NamingTemplates::new(&config),
      normalizer: ManifestNormalizer::new(&config),
      refingerprinter: Rc::new(MergeRefingerprinter::new(&config)),
      context,
    }
  }

  /// Inject fingerprinted naming templates into the host's output
  /// configuration. Invoked before compilation; safe to invoke again.
  pub fn configure(&self, output: &mut OutputConfig) {
    self
      .templates
      .apply_output_naming(output, &self.context.media_dirs);
  }

  /// Attach the merge re-fingerprinter to the host's task collection.
  pub fn register(&self, tasks: &mut TaskCollection) {
    tasks.observe(self.refingerprinter.clone());
  }

  /// Reconcile the manifest and the in-memory asset set after the host has
  /// fully materialised a build.
  ///
  /// Manifest I/O failures are reported once and do not fail the build; the
  /// manifest is regenerated wholesale on the next run. Separator
  /// normalisation still proceeds so merged artifacts stay addressable.
  /// Tolerates being invoked repeatedly under watch-mode rebuilds.
  pub fn build_completed(&self, assets: &mut AssetSet) {
    let manifest_path = self.context.manifest_path();
    if let Err(err) = self.normalizer.normalize_file(&manifest_path) {
      tracing::error!(
        path = %manifest_path.display(),
        error = %err,
        "failed to normalise build manifest"
      );
    }

    normalize_separators(assets, &self.refingerprinter.renamed_paths());
  }
}
