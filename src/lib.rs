#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod fingerprint;
pub mod host;
pub mod manifest;
pub mod merge;
pub mod naming;
pub mod paths;
pub mod session;

pub use config::FingerprintConfig;
pub use fingerprint::content_fingerprint;
pub use host::{
  Artifact, AssetClass, AssetSet, FileNaming, MediaDirs, MergeObserver, MergeTask, OutputConfig,
  OutputRule, StylesheetExtraction, TaskCollection,
};
pub use manifest::ManifestNormalizer;
pub use merge::MergeRefingerprinter;
pub use naming::NamingTemplates;
pub use session::{BuildContext, BuildSession};
