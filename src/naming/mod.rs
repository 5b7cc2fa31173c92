//! Naming templates injecting fingerprint placeholders per asset class.
//!
//! Templates use host placeholder syntax: `[name]` for the logical name and
//! `[contenthash:N]` for a fingerprint of `N` characters, both resolved by
//! the host when it emits files. The content hash is used for every asset
//! class so that names stay correct for artifacts whose bytes are finalised
//! late, such as merged bundles.

mod media;

use crate::config::FingerprintConfig;
use crate::host::{AssetClass, FileNaming, MediaDirs, OutputConfig};

/// Per-asset-class output naming templates for one build.
///
/// Constructed once from the registered configuration right before the host
/// compiles, applied into the host's output configuration, never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct NamingTemplates {
  delimiter: String,
  length: usize,
}

impl NamingTemplates {
  /// Build templates from the registered configuration.
  pub fn new(config: &FingerprintConfig) -> Self {
    Self {
      delimiter: config.resolved_delimiter(),
      length: config.fingerprint_length(),
    }
  }

  /// Filename template for primary scripts and script chunks.
  pub fn script(&self) -> String {
    format!("[name]{}[contenthash:{}].js", self.delimiter, self.length)
  }

  /// The fingerprinted tail appended to stylesheet templates.
  pub fn stylesheet_token(&self) -> String {
    format!("[contenthash:{}].css", self.length)
  }

  /// Static template for cursor files.
  pub fn cursor(&self) -> String {
    format!("[name]{}[contenthash:{}].[ext]", self.delimiter, self.length)
  }

  /// Merge fingerprinted naming into the host's output configuration.
  ///
  /// Mutates in place and is safe to call repeatedly with an unchanged
  /// configuration: values are only reassigned when they differ, since a
  /// reassignment can retrigger invalidation in the host.
  pub fn apply_output_naming(&self, output: &mut OutputConfig, media_dirs: &MediaDirs) {
    self.apply_script_naming(output);
    self.apply_stylesheet_naming(output);
    self.apply_media_naming(output, media_dirs);
  }

  fn apply_script_naming(&self, output: &mut OutputConfig) {
    let script = self.script();

    // A host-configured chunk directory must survive; dropping it silently
    // would scatter chunks into the output root.
    let chunk = match &output.chunk_filename {
      Some(existing) if !output.runtime_chunk => match existing.rsplit_once('/') {
        Some((directory, _)) => format!("{directory}/{script}"),
        None => script.clone(),
      },
      _ => script.clone(),
    };

    output.filename = script;
    output.chunk_filename = Some(chunk);
  }

  fn apply_stylesheet_naming(&self, output: &mut OutputConfig) {
    let token = self.stylesheet_token();

    for sheet in &mut output.stylesheets {
      if sheet.filename.contains(&token) {
        continue;
      }

      let base = sheet
        .filename
        .rsplit_once('.')
        .map(|(base, _)| base)
        .unwrap_or(sheet.filename.as_str());
      let filename = format!("{base}{}{token}", self.delimiter);

      if sheet.filename != filename {
        sheet.filename = filename;
      }
    }
  }

  fn apply_media_naming(&self, output: &mut OutputConfig, media_dirs: &MediaDirs) {
    for rule in &mut output.rules {
      match rule.class {
        AssetClass::Image => {
          rule.naming = media::image_namer(&media_dirs.images, &self.delimiter, self.length);
        }
        AssetClass::Font => {
          rule.naming = media::font_namer(&media_dirs.fonts, &self.delimiter, self.length);
        }
        AssetClass::Cursor => {
          rule.naming = FileNaming::Template(self.cursor());
        }
        _ => {}
      }
    }
  }
}
