//! Mutable view of the host's output naming configuration.

use std::fmt;

/// Category of emitted artifact, each carrying its own naming template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
  /// Primary script bundles.
  Script,
  /// Secondary, lazily loaded script chunks.
  Chunk,
  /// Extracted stylesheets.
  Stylesheet,
  /// Raster and vector images referenced from stylesheets.
  Image,
  /// Web font files.
  Font,
  /// Cursor files.
  Cursor,
}

/// A stylesheet-extraction plugin instance registered with the host.
///
/// Only the mutable filename template is of interest here; everything else
/// about the plugin stays with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetExtraction {
  /// Output filename template for the extracted stylesheet.
  pub filename: String,
}

impl StylesheetExtraction {
  /// Create an extraction instance with the given filename template.
  pub fn new(filename: impl Into<String>) -> Self {
    Self {
      filename: filename.into(),
    }
  }
}

/// How an output rule names the files it emits.
pub enum FileNaming {
  /// A static template resolved by the host.
  Template(String),
  /// A function from the source file path to the emitted name template.
  Function(Box<dyn Fn(&str) -> String + Send + Sync>),
}

impl FileNaming {
  /// Resolve the emitted name template for a given source path.
  pub fn emitted_name(&self, source_path: &str) -> String {
    match self {
      Self::Template(template) => template.clone(),
      Self::Function(naming) => naming(source_path),
    }
  }
}

impl fmt::Debug for FileNaming {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
      Self::Function(_) => f.debug_tuple("Function").field(&"<fn>").finish(),
    }
  }
}

/// An output rule covering one asset class.
#[derive(Debug)]
pub struct OutputRule {
  /// Asset class the rule applies to.
  pub class: AssetClass,
  /// Naming strategy for files emitted by this rule.
  pub naming: FileNaming,
}

impl OutputRule {
  /// Create a rule with a static naming template.
  pub fn with_template(class: AssetClass, template: impl Into<String>) -> Self {
    Self {
      class,
      naming: FileNaming::Template(template.into()),
    }
  }
}

/// Output directories for media asset classes, relative to the public root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDirs {
  /// Directory receiving emitted image files.
  pub images: String,
  /// Directory receiving emitted font files.
  pub fonts: String,
}

impl Default for MediaDirs {
  fn default() -> Self {
    Self {
      images: "images".to_string(),
      fonts: "fonts".to_string(),
    }
  }
}

/// The host's output configuration, mutated in place before compilation.
#[derive(Debug, Default)]
pub struct OutputConfig {
  /// Primary output filename template.
  pub filename: String,
  /// Chunk filename template, optionally carrying a directory prefix.
  pub chunk_filename: Option<String>,
  /// Whether the host extracts the runtime into a separate chunk.
  pub runtime_chunk: bool,
  /// Stylesheet-extraction plugin instances registered with the host.
  pub stylesheets: Vec<StylesheetExtraction>,
  /// Output rules for media asset classes.
  pub rules: Vec<OutputRule>,
}
