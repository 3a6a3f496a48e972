use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
  NotFound(String),
  /// A Node.js builtin such as `fs`. The `node:` prefix is stripped.
  Builtin(String),
  /// The package was found but refused the request, e.g. a subpath missing from `exports`.
  Failed { specifier: String, reason: String },
}

impl Display for ResolveError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::NotFound(specifier) => write!(f, "Cannot find module '{specifier}'"),
      Self::Builtin(specifier) => write!(f, "'{specifier}' is a Node.js builtin module"),
      Self::Failed { specifier, reason } => write!(f, "Failed to resolve '{specifier}': {reason}"),
    }
  }
}

impl std::error::Error for ResolveError {}
