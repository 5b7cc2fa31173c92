//! Content fingerprints embedded in emitted artifact names.

use sha2::{Digest, Sha256};

/// Derive a lowercase-hex fingerprint of `length` characters from `content`.
///
/// The fingerprint is a truncated SHA-256 digest, so identical bytes always
/// produce identical tokens and any content change alters the token with
/// overwhelming probability. Lengths beyond the full digest are clamped.
pub fn content_fingerprint(content: &[u8], length: usize) -> String {
  let digest = Sha256::digest(content);
  let mut encoded = hex::encode(digest);
  encoded.truncate(length);
  encoded
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncates_to_requested_length() {
    assert_eq!(content_fingerprint(b"bundle", 6).len(), 6);
    assert_eq!(content_fingerprint(b"bundle", 12).len(), 12);
  }

  #[test]
  fn is_deterministic_for_identical_content() {
    assert_eq!(
      content_fingerprint(b"same bytes", 8),
      content_fingerprint(b"same bytes", 8)
    );
  }

  #[test]
  fn matches_known_sha256_prefix() {
    // SHA-256 of the empty input starts with e3b0c442.
    assert_eq!(content_fingerprint(b"", 8), "e3b0c442");
  }

  #[test]
  fn produces_lowercase_hex_only() {
    let token = content_fingerprint(b"mixed case check", 32);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  }

  #[test]
  fn clamps_length_beyond_digest_size() {
    assert_eq!(content_fingerprint(b"short digest", 200).len(), 64);
  }
}
