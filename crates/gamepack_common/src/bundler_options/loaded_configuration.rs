use serde::{Deserialize, Serialize};

use crate::{BundleConfig, GameMetadata, PartialBundleConfig, PartialGameMetadata};

/// Fully resolved configuration handed to every downstream step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedConfiguration {
  pub bundler: BundleConfig,
  pub game: GameMetadata,
}

/// Configuration as discovered on disk (`regal.json` or the `regal` key of `package.json`),
/// with package metadata merged into `game`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
  pub game: Option<PartialGameMetadata>,
  pub bundler: Option<PartialBundleConfig>,
}
