mod build_error;
mod bundler_error;
mod build_warning;

pub use crate::{
  build_error::{BuildError, BuildResult},
  build_warning::BuildWarning,
  bundler_error::BundlerError,
};
