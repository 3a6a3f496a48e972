use std::fmt::Display;

/// Non-fatal diagnostics. They are returned to the caller, which decides whether to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
  /// `game.gameVersion` was set by the user and replaced by the package version.
  IgnoredGameVersion { value: String },
  /// A bare import could not be resolved and is left to the host environment.
  UnresolvedImport { specifier: String, importer: String },
}

impl Display for BuildWarning {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::IgnoredGameVersion { value } => write!(
        f,
        "game.gameVersion is derived from the package version, the configured value '{value}' is ignored."
      ),
      Self::UnresolvedImport { specifier, importer } => write!(
        f,
        "'{specifier}' is imported by {importer}, but could not be resolved - treating it as an external dependency."
      ),
    }
  }
}
