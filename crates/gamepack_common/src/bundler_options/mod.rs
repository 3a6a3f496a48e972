pub mod bundle_config;
pub mod bundle_kind;
pub mod game_metadata;
pub mod loaded_configuration;
pub mod module_format;
pub mod output_options;

use std::path::PathBuf;

use crate::PartialBundleConfig;

/// Options accepted by `bundle` and `get_config`. Every field is optional.
#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  /// Directory searched for user configuration and the package descriptor.
  /// Defaults to the current working directory.
  pub config_location: Option<PathBuf>,
  /// Overrides applied on top of the discovered configuration.
  pub bundler: Option<PartialBundleConfig>,
}
