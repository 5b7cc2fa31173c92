//! Canonicalising path separators for merged artifacts.

use std::collections::BTreeSet;

use crate::host::AssetSet;

/// Re-key renamed merge artifacts under forward-slash public paths.
///
/// Only paths recorded in the merge rename ledger are touched: the merge
/// step is the one stage that records platform-native separators, and
/// rewriting unrelated host entries is not this engine's business.
pub fn normalize_separators(assets: &mut AssetSet, renamed: &BTreeSet<String>) {
  let denormalized: Vec<String> = assets
    .paths()
    .filter(|path| path.contains('\\') && renamed.contains(path.as_str()))
    .cloned()
    .collect();

  for path in denormalized {
    if let Some(artifact) = assets.remove(&path) {
      assets.insert(path.replace('\\', "/"), artifact);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::host::Artifact;

  fn artifact(path: &str) -> Artifact {
    Artifact::new("public", format!("public/{path}"))
  }

  #[test]
  fn rekeys_ledger_entries_with_backslashes() {
    let mut assets = AssetSet::new();
    assets.insert(r"js\bundle.a1b2c3.js", artifact("bundle.a1b2c3.js"));

    let renamed = BTreeSet::from([r"js\bundle.a1b2c3.js".to_string()]);
    normalize_separators(&mut assets, &renamed);

    assert!(assets.contains("js/bundle.a1b2c3.js"));
    assert!(!assets.contains(r"js\bundle.a1b2c3.js"));
  }

  #[test]
  fn ignores_backslashed_paths_outside_the_ledger() {
    let mut assets = AssetSet::new();
    assets.insert(r"js\other.js", artifact("other.js"));

    normalize_separators(&mut assets, &BTreeSet::new());

    assert!(assets.contains(r"js\other.js"));
  }

  #[test]
  fn leaves_forward_slash_entries_untouched() {
    let mut assets = AssetSet::new();
    assets.insert("js/bundle.a1b2c3.js", artifact("bundle.a1b2c3.js"));

    let renamed = BTreeSet::from(["js/bundle.a1b2c3.js".to_string()]);
    normalize_separators(&mut assets, &renamed);

    assert_eq!(assets.len(), 1);
    assert!(assets.contains("js/bundle.a1b2c3.js"));
  }
}
