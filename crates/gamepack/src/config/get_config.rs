use std::path::{Path, PathBuf};

use gamepack_common::{BundlerOptions, LoadedConfiguration, UserConfig};
use gamepack_error::{BuildResult, BuildWarning};
use sugar_path::SugarPath;

use super::{
  discovery::ConfigDiscovery,
  fill_in_options::fill_in_options,
  load_user_config::{load_user_config, LoadUserConfigReturn},
  package_loader::PackageLoader,
};

#[derive(Debug, Clone)]
pub struct LoadConfigOutput {
  pub config: LoadedConfiguration,
  /// Absolute directory the configuration was searched from.
  pub config_location: PathBuf,
  pub warnings: Vec<BuildWarning>,
}

/// Programmatic options win over the discovered configuration, which wins over defaults.
///
/// Overrides are overlaid on the discovered configuration before defaulting runs, so they feed
/// the computed fields: an overriding `input.file` also decides the `input.ts` default.
pub fn get_config(
  discovery: &dyn ConfigDiscovery,
  package_loader: &dyn PackageLoader,
  options: BundlerOptions,
  cwd: &Path,
) -> BuildResult<LoadConfigOutput> {
  let BundlerOptions { config_location, bundler: overrides } = options;
  let config_location = config_location.unwrap_or_else(|| cwd.to_path_buf());

  let LoadUserConfigReturn { config, warnings } =
    load_user_config(discovery, package_loader, &config_location, cwd)?;

  let bundler = match (config.bundler, overrides) {
    (Some(discovered), Some(overrides)) => Some(discovered.overlay(overrides)),
    (discovered, overrides) => overrides.or(discovered),
  };

  let config_location = cwd.join(config_location).normalize();
  let config = fill_in_options(&config_location, UserConfig { game: config.game, bundler })?;

  Ok(LoadConfigOutput { config, config_location, warnings })
}

#[test]
fn test_overrides_win_and_feed_defaults() {
  use std::sync::Arc;

  use gamepack_common::{PartialBundleConfig, PartialInputConfig, PartialOutputConfig};
  use gamepack_fs::{FileSystem, MemoryFileSystem};

  use crate::{FsConfigDiscovery, FsPackageLoader};

  let fs: Arc<dyn FileSystem> = Arc::new(MemoryFileSystem::new(&[(
    "/work/game/package.json",
    r#"{
      "name": "basic",
      "version": "1.0.0",
      "regal": { "bundler": { "output": { "format": "umd", "minify": true } } }
    }"#,
  )]));
  let discovery = FsConfigDiscovery::new(Arc::clone(&fs));
  let loader = FsPackageLoader::new(Arc::clone(&fs));

  let options = BundlerOptions {
    config_location: Some(PathBuf::from("game")),
    bundler: Some(PartialBundleConfig {
      input: Some(PartialInputConfig { file: Some(PathBuf::from("src/main.js")), ts: None }),
      output: Some(PartialOutputConfig { minify: Some(false), ..Default::default() }),
    }),
  };
  let LoadConfigOutput { config, config_location, warnings } =
    get_config(&discovery, &loader, options, Path::new("/work")).unwrap();

  assert_eq!(config_location, PathBuf::from("/work/game"));
  assert!(warnings.is_empty());
  assert_eq!(config.game.name, "basic");
  assert_eq!(config.game.game_version.as_deref(), Some("1.0.0"));
  assert_eq!(config.bundler.input.file, PathBuf::from("/work/game/src/main.js"));
  assert!(!config.bundler.input.ts);
  assert_eq!(config.bundler.output.format, "umd");
  assert!(!config.bundler.output.minify);
  assert_eq!(config.bundler.output.file, PathBuf::from("/work/game/basic.game-bundle.js"));
}

#[test]
fn test_override_entry_decides_ts_default() {
  use std::sync::Arc;

  use gamepack_common::{PartialBundleConfig, PartialInputConfig};
  use gamepack_fs::{FileSystem, MemoryFileSystem};

  use crate::{FsConfigDiscovery, FsPackageLoader};

  let fs: Arc<dyn FileSystem> = Arc::new(MemoryFileSystem::new(&[(
    "/work/package.json",
    r#"{
      "name": "basic",
      "version": "1.0.0",
      "regal": { "bundler": { "input": { "file": "src/main.js" } } }
    }"#,
  )]));
  let discovery = FsConfigDiscovery::new(Arc::clone(&fs));
  let loader = FsPackageLoader::new(Arc::clone(&fs));

  let options = BundlerOptions {
    config_location: None,
    bundler: Some(PartialBundleConfig {
      input: Some(PartialInputConfig { file: Some(PathBuf::from("src/index.ts")), ts: None }),
      output: None,
    }),
  };
  let LoadConfigOutput { config, .. } =
    get_config(&discovery, &loader, options, Path::new("/work")).unwrap();

  assert_eq!(config.bundler.input.file, PathBuf::from("/work/src/index.ts"));
  assert!(config.bundler.input.ts);
}
