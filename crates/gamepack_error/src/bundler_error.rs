use std::path::PathBuf;

/// Failures raised by configuration resolution and bundle assembly.
/// Engine, compiler and minifier failures are not wrapped and pass through as-is.
#[derive(Debug, thiserror::Error)]
pub enum BundlerError {
  /// The package descriptor could not be found at the search directory nor relative to the working directory.
  #[error("Could not resolve package descriptor at {}", .0.display())]
  ConfigResolution(PathBuf),
  /// A mandatory configuration field is missing or empty.
  #[error("{0} must be defined.")]
  ConfigValidation(&'static str),
  #[error("Illegal bundle type: {0}")]
  UnsupportedBundleKind(String),
  #[error("Illegal module format: {0}")]
  UnsupportedModuleFormat(String),
}
