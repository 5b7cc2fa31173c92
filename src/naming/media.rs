//! File-naming functions for image and font output rules.
//!
//! First-party media files are renamed with an embedded fingerprint under a
//! class-specific output directory. Files sourced from vendor trees keep
//! their own names under a `vendor/` prefix and carry the fingerprint as a
//! query suffix instead, so vendored assets are cache-busted without being
//! renamed.

use std::sync::OnceLock;

use regex::Regex;

use crate::host::FileNaming;

const VENDOR_ROOTS: [&str; 2] = ["node_modules", "bower_components"];

fn image_segment_strip() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"((.*(node_modules|bower_components))|images|image|img|assets)/")
      .expect("invalid image segment pattern")
  })
}

fn font_segment_strip() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"((.*(node_modules|bower_components))|fonts|font|assets)/")
      .expect("invalid font segment pattern")
  })
}

fn is_vendor_source(source_path: &str) -> bool {
  VENDOR_ROOTS.iter().any(|root| source_path.contains(root))
}

fn media_namer(
  dir: &str,
  strip: &'static Regex,
  delimiter: &str,
  length: usize,
) -> FileNaming {
  let dir = dir.to_string();
  let delimiter = delimiter.to_string();

  FileNaming::Function(Box::new(move |source_path| {
    if !is_vendor_source(source_path) {
      return format!("{dir}/[name]{delimiter}[contenthash:{length}].[ext]");
    }

    let normalized = source_path.replace('\\', "/");
    let stripped = strip.replace_all(&normalized, "");
    format!("{dir}/vendor/{stripped}?[contenthash:{length}]")
  }))
}

/// Naming function for image-class output rules.
pub(crate) fn image_namer(dir: &str, delimiter: &str, length: usize) -> FileNaming {
  media_namer(dir, image_segment_strip(), delimiter, length)
}

/// Naming function for font-class output rules.
pub(crate) fn font_namer(dir: &str, delimiter: &str, length: usize) -> FileNaming {
  media_namer(dir, font_segment_strip(), delimiter, length)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_party_images_are_renamed_with_a_fingerprint() {
    let naming = image_namer("images", ".", 6);

    assert_eq!(
      naming.emitted_name("resources/images/logo.png"),
      "images/[name].[contenthash:6].[ext]"
    );
  }

  #[test]
  fn vendored_images_keep_their_name_under_a_vendor_prefix() {
    let naming = image_namer("images", ".", 6);

    assert_eq!(
      naming.emitted_name("project/node_modules/widget/images/icon.png"),
      "images/vendor/widget/icon.png?[contenthash:6]"
    );
  }

  #[test]
  fn vendored_paths_with_backslashes_are_normalised() {
    let naming = font_namer("fonts", ".", 6);

    assert_eq!(
      naming.emitted_name(r"deps\bower_components\face\fonts\face.woff"),
      "fonts/vendor/face/face.woff?[contenthash:6]"
    );
  }

  #[test]
  fn font_strip_does_not_touch_image_segments() {
    let naming = font_namer("fonts", ".", 6);

    assert_eq!(
      naming.emitted_name("node_modules/pkg/images/face.woff"),
      "fonts/vendor/pkg/images/face.woff?[contenthash:6]"
    );
  }
}
