//! Adapter types for the host build tool.
//!
//! The engine never inspects host internals; it consumes the build tool
//! through this small surface: a mutable output configuration, a collection
//! of merge tasks with explicit post-merge observers, and the in-memory set
//! of compilation assets. Hosts map their own structures onto these types
//! once, which keeps the fingerprinting stages free of runtime type
//! inspection.

mod assets;
mod output;
mod tasks;

pub use assets::AssetSet;
pub use output::{
  AssetClass, FileNaming, MediaDirs, OutputConfig, OutputRule, StylesheetExtraction,
};
pub use tasks::{Artifact, MergeObserver, MergeTask, TaskCollection};
