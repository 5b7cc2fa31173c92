//! Fingerprint configuration consumed from the host's plugin registration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Fingerprint length used when none is configured or the configured value is invalid.
pub const DEFAULT_LENGTH: usize = 6;

/// Delimiter used when the configured delimiter sanitises to nothing.
pub const DEFAULT_DELIMITER: &str = ".";

/// Options controlling how fingerprints are derived and embedded in filenames.
///
/// Registered once per build; re-registration replaces the previous value
/// wholesale. Invalid values never fail the build: a zero `length` and an
/// unusable `delimiter` both fall back to their defaults, since asset naming
/// must not block compilation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
  /// Number of fingerprint characters embedded in filenames.
  pub length: usize,
  /// Raw separator placed between a logical name and its fingerprint.
  pub delimiter: String,
  /// Asset-class names to skip. Reserved; not consulted by any stage yet.
  pub exclude: Vec<String>,
}

impl Default for FingerprintConfig {
  fn default() -> Self {
    Self {
      length: DEFAULT_LENGTH,
      delimiter: DEFAULT_DELIMITER.to_string(),
      exclude: Vec::new(),
    }
  }
}

impl FingerprintConfig {
  /// Read configuration from a JSON file, falling back to defaults when the
  /// file is absent or unparseable.
  pub fn discover(path: &Path) -> Self {
    Self::from_path(path).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// The configured delimiter filtered to the permitted character set.
  ///
  /// Only periods, hyphens and underscores survive; an empty result yields
  /// [`DEFAULT_DELIMITER`].
  pub fn resolved_delimiter(&self) -> String {
    let filtered: String = self
      .delimiter
      .chars()
      .filter(|c| matches!(c, '.' | '-' | '_'))
      .collect();

    if filtered.is_empty() {
      DEFAULT_DELIMITER.to_string()
    } else {
      filtered
    }
  }

  /// The effective fingerprint length, coercing zero to [`DEFAULT_LENGTH`].
  pub fn fingerprint_length(&self) -> usize {
    if self.length == 0 {
      DEFAULT_LENGTH
    } else {
      self.length
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keeps_permitted_delimiter_characters() {
    let config = FingerprintConfig {
      delimiter: "$.#-_".to_string(),
      ..FingerprintConfig::default()
    };

    assert_eq!(config.resolved_delimiter(), ".-_");
  }

  #[test]
  fn falls_back_when_delimiter_sanitises_to_nothing() {
    let config = FingerprintConfig {
      delimiter: "$$$".to_string(),
      ..FingerprintConfig::default()
    };

    assert_eq!(config.resolved_delimiter(), ".");
  }

  #[test]
  fn coerces_zero_length_to_default() {
    let config = FingerprintConfig {
      length: 0,
      ..FingerprintConfig::default()
    };

    assert_eq!(config.fingerprint_length(), DEFAULT_LENGTH);
  }

  #[test]
  fn deserialises_with_defaults_for_missing_fields() {
    let config: FingerprintConfig = serde_json::from_str(r#"{"length": 8}"#).unwrap();

    assert_eq!(config.length, 8);
    assert_eq!(config.delimiter, ".");
    assert!(config.exclude.is_empty());
  }
}
