use std::ops::{Deref, DerefMut};

use crate::BundlerError;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// The first error that is a [`BundlerError`], if any.
  pub fn bundler_error(&self) -> Option<&BundlerError> {
    self.0.iter().find_map(|error| error.downcast_ref::<BundlerError>())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl std::fmt::Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<BundlerError> for BuildError {
  fn from(error: BundlerError) -> Self {
    Self(vec![error.into()])
  }
}

impl From<std::io::Error> for BuildError {
  fn from(error: std::io::Error) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_bundler_error_downcast() {
  let error: BuildError = BundlerError::UnsupportedModuleFormat("amd".to_string()).into();
  assert!(matches!(error.bundler_error(), Some(BundlerError::UnsupportedModuleFormat(format)) if format == "amd"));

  let error: BuildError = anyhow::anyhow!("unrelated").into();
  assert!(error.bundler_error().is_none());
}
