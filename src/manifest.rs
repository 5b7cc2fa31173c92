//! Build-manifest normalisation: stable keys, fingerprinted values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::FingerprintConfig;

/// Strips fingerprint segments from manifest keys while leaving the
/// fingerprinted values untouched.
///
/// The strip pattern matches exactly `length` lowercase-hex characters
/// immediately after the resolved delimiter, immediately before the final
/// extension (or before `.map` for source maps). A key without such a
/// segment never matches, so re-applying the normaliser to an already
/// normalised manifest is a no-op.
pub struct ManifestNormalizer {
  strip: Regex,
  strip_map: Regex,
}

impl ManifestNormalizer {
  /// Build the strip patterns for the registered configuration.
  pub fn new(config: &FingerprintConfig) -> Self {
    let delimiter = regex::escape(&config.resolved_delimiter());
    let length = config.fingerprint_length();

    let strip = Regex::new(&format!(r"{delimiter}[a-f0-9]{{{length}}}\.([^.]+)$"))
      .expect("invalid fingerprint strip pattern");
    let strip_map = Regex::new(&format!(r"{delimiter}[a-f0-9]{{{length}}}\.([^.]+)\.map$"))
      .expect("invalid source-map strip pattern");

    Self { strip, strip_map }
  }

  /// Remove the fingerprint segment from a single manifest key.
  ///
  /// Keys without a well-formed fingerprint pass through unchanged; that is
  /// the expected case for assets never assigned one.
  pub fn strip_key(&self, key: &str) -> String {
    if key.ends_with(".map") {
      self.strip_map.replace(key, ".${1}.map").into_owned()
    } else {
      self.strip.replace(key, ".${1}").into_owned()
    }
  }

  /// Normalise every entry, returning the mapping in sorted key order.
  pub fn normalize_entries(&self, entries: BTreeMap<String, String>) -> BTreeMap<String, String> {
    entries
      .into_iter()
      .map(|(key, value)| (self.strip_key(&key), value))
      .collect()
  }

  /// Load, normalise and rewrite the manifest file at `path`.
  ///
  /// The file is read and written wholesale, with two-space indentation and
  /// sorted keys so repeated builds produce diff-stable output.
  pub fn normalize_file(&self, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read manifest at {}", path.display()))?;
    let entries: BTreeMap<String, String> = serde_json::from_str(&content)
      .with_context(|| format!("failed to parse manifest at {}", path.display()))?;

    let normalized = self.normalize_entries(entries);
    let serialized =
      serde_json::to_string_pretty(&normalized).context("failed to serialise manifest")?;
    fs::write(path, serialized)
      .with_context(|| format!("failed to write manifest at {}", path.display()))?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn normalizer() -> ManifestNormalizer {
    ManifestNormalizer::new(&FingerprintConfig::default())
  }

  #[test]
  fn strips_the_fingerprint_before_the_final_extension() {
    assert_eq!(normalizer().strip_key("app.a1b2c3.js"), "app.js");
  }

  #[test]
  fn keeps_the_map_suffix_while_stripping() {
    assert_eq!(normalizer().strip_key("app.a1b2c3.js.map"), "app.js.map");
  }

  #[test]
  fn leaves_keys_without_a_fingerprint_alone() {
    assert_eq!(normalizer().strip_key("vendor.js"), "vendor.js");
    assert_eq!(normalizer().strip_key("images/logo.png"), "images/logo.png");
  }

  #[test]
  fn requires_lowercase_hex_of_the_configured_length() {
    // Wrong length, uppercase and non-hex segments are logical names, not
    // fingerprints.
    assert_eq!(normalizer().strip_key("app.a1b2.js"), "app.a1b2.js");
    assert_eq!(normalizer().strip_key("app.A1B2C3.js"), "app.A1B2C3.js");
    assert_eq!(normalizer().strip_key("app.bundle.js"), "app.bundle.js");
  }

  #[test]
  fn honours_a_custom_delimiter_and_length() {
    let config = FingerprintConfig {
      length: 8,
      delimiter: "-".to_string(),
      ..FingerprintConfig::default()
    };
    let normalizer = ManifestNormalizer::new(&config);

    assert_eq!(normalizer.strip_key("app-deadbeef.js"), "app.js");
    assert_eq!(normalizer.strip_key("app.deadbeef.js"), "app.deadbeef.js");
  }

  #[test]
  fn stripping_is_idempotent() {
    let normalizer = normalizer();
    let once = normalizer.strip_key("app.a1b2c3.js");

    assert_eq!(normalizer.strip_key(&once), once);
  }

  #[test]
  fn normalises_the_manifest_file_with_sorted_keys() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("manifest.json");
    fs::write(
      &path,
      r#"{"vendor.js":"vendor.js","app.a1b2c3.js":"app.a1b2c3.js","app.a1b2c3.js.map":"app.a1b2c3.js.map"}"#,
    )?;

    normalizer().normalize_file(&path)?;

    let written = fs::read_to_string(&path)?;
    assert_eq!(
      written,
      "{\n  \"app.js\": \"app.a1b2c3.js\",\n  \"app.js.map\": \"app.a1b2c3.js.map\",\n  \"vendor.js\": \"vendor.js\"\n}"
    );
    Ok(())
  }

  #[test]
  fn renormalising_a_normalised_manifest_changes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("manifest.json");
    fs::write(&path, r#"{"app.a1b2c3.js":"app.a1b2c3.js"}"#)?;

    let normalizer = normalizer();
    normalizer.normalize_file(&path)?;
    let first = fs::read_to_string(&path)?;
    normalizer.normalize_file(&path)?;
    let second = fs::read_to_string(&path)?;

    assert_eq!(first, second);
    Ok(())
  }

  #[test]
  fn missing_manifest_reports_an_error() {
    let dir = tempdir().unwrap();
    let result = normalizer().normalize_file(&dir.path().join("absent.json"));

    assert!(result.is_err());
  }
}
