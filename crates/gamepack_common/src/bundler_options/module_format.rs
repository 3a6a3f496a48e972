use std::{fmt::Display, str::FromStr};

use gamepack_error::BundlerError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuleFormat {
  #[default]
  Cjs,
  Esm,
  Umd,
}

impl ModuleFormat {
  #[inline]
  pub fn keep_esm_import_export_syntax(&self) -> bool {
    matches!(self, Self::Esm)
  }

  /// UMD artifacts expose their exports under a global name outside module systems.
  #[inline]
  pub fn requires_global_name(&self) -> bool {
    matches!(self, Self::Umd)
  }
}

impl FromStr for ModuleFormat {
  type Err = BundlerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let format = s.to_ascii_lowercase();
    match format.as_str() {
      "cjs" => Ok(Self::Cjs),
      "esm" => Ok(Self::Esm),
      "umd" => Ok(Self::Umd),
      _ => Err(BundlerError::UnsupportedModuleFormat(format)),
    }
  }
}

impl Display for ModuleFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Cjs => write!(f, "cjs"),
      Self::Esm => write!(f, "esm"),
      Self::Umd => write!(f, "umd"),
    }
  }
}

#[test]
fn test_module_format_from_str() {
  assert_eq!("cjs".parse::<ModuleFormat>().unwrap(), ModuleFormat::Cjs);
  assert_eq!("ESM".parse::<ModuleFormat>().unwrap(), ModuleFormat::Esm);
  assert_eq!("Umd".parse::<ModuleFormat>().unwrap(), ModuleFormat::Umd);
  assert!(matches!(
    "IIFE".parse::<ModuleFormat>(),
    Err(BundlerError::UnsupportedModuleFormat(format)) if format == "iife"
  ));
  assert_eq!(ModuleFormat::Umd.to_string(), "umd");
}
