use std::path::PathBuf;

use crate::ModuleFormat;

/// What the engine needs to emit the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
  pub file: PathBuf,
  pub format: ModuleFormat,
  /// Global export name, only for formats that need one.
  pub name: Option<String>,
  /// Text placed verbatim at the top of the artifact.
  pub banner: Option<String>,
}
