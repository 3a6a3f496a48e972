use std::{borrow::Cow, path::Path};

use sugar_path::SugarPath;

pub trait PathExt {
  fn to_slash_string(&self) -> String;

  /// `self` relative to `base`, slash separated. Used for stable module keys.
  fn relative_key(&self, base: &Path) -> String;

  fn extension_str(&self) -> Option<Cow<str>>;
}

impl PathExt for Path {
  fn to_slash_string(&self) -> String {
    self.to_slash_lossy().into_owned()
  }

  fn relative_key(&self, base: &Path) -> String {
    if self.is_absolute() && self.starts_with(base) {
      self.relative(base).to_slash_string()
    } else {
      self.to_slash_string()
    }
  }

  fn extension_str(&self) -> Option<Cow<str>> {
    self.extension().map(|ext| ext.to_string_lossy())
  }
}

#[test]
fn test_relative_key() {
  use std::path::PathBuf;

  let cwd = PathBuf::from("/project");
  assert_eq!(cwd.join("src").join("index.ts").relative_key(&cwd), "src/index.ts");
  assert_eq!(Path::new("/elsewhere/a.js").relative_key(&cwd), "/elsewhere/a.js");
}
