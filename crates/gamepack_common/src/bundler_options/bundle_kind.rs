use std::{fmt::Display, str::FromStr};

use gamepack_error::BundlerError;

/// Kind of game bundle, i.e. which adapter narrows the runtime to the public surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BundleKind {
  /// Initializes itself internally and cannot be reset.
  #[default]
  Standard,
}

impl FromStr for BundleKind {
  type Err = BundlerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "standard" => Ok(Self::Standard),
      _ => Err(BundlerError::UnsupportedBundleKind(s.to_string())),
    }
  }
}

impl Display for BundleKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Standard => write!(f, "standard"),
    }
  }
}

#[test]
fn test_bundle_kind_from_str() {
  assert_eq!("standard".parse::<BundleKind>().unwrap(), BundleKind::Standard);
  assert_eq!("STANDARD".parse::<BundleKind>().unwrap(), BundleKind::Standard);
  assert!(matches!(
    "deluxe".parse::<BundleKind>(),
    Err(BundlerError::UnsupportedBundleKind(kind)) if kind == "deluxe"
  ));
}
