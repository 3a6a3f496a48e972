use std::{path::PathBuf, sync::Arc};

use gamepack_common::BundlerOptions;
use gamepack_engine::{BundleOutput, Bundler, InputOptions};
use gamepack_error::BuildResult;
use gamepack_fs::{FileSystem, OsFileSystem};
use tracing::{info, warn};

use crate::{
  config::{
    discovery::{ConfigDiscovery, FsConfigDiscovery},
    get_config::{get_config as resolve_config, LoadConfigOutput},
    package_loader::{FsPackageLoader, PackageLoader},
  },
  output_options::build_output_options,
  stages::build_stages,
};

/// Resolves the configuration of a game and bundles it.
///
/// ```ignore
/// let output = GameBundler::new()?.bundle(BundlerOptions::default()).await?;
/// ```
pub struct GameBundler {
  fs: Arc<dyn FileSystem>,
  discovery: Arc<dyn ConfigDiscovery>,
  package_loader: Arc<dyn PackageLoader>,
  /// Base for relative config locations, defaults to the process working directory.
  cwd: PathBuf,
}

impl GameBundler {
  /// Fails when the process working directory can not be read.
  pub fn new() -> BuildResult<Self> {
    let cwd = std::env::current_dir()
      .map_err(|err| anyhow::anyhow!("Could not read the current working directory: {err}"))?;
    Ok(Self::with_file_system(Arc::new(OsFileSystem), cwd))
  }

  pub fn with_file_system(fs: Arc<dyn FileSystem>, cwd: PathBuf) -> Self {
    Self {
      discovery: Arc::new(FsConfigDiscovery::new(Arc::clone(&fs))),
      package_loader: Arc::new(FsPackageLoader::new(Arc::clone(&fs))),
      fs,
      cwd,
    }
  }

  #[must_use]
  pub fn with_config_discovery(mut self, discovery: Arc<dyn ConfigDiscovery>) -> Self {
    self.discovery = discovery;
    self
  }

  #[must_use]
  pub fn with_package_loader(mut self, package_loader: Arc<dyn PackageLoader>) -> Self {
    self.package_loader = package_loader;
    self
  }

  pub fn get_config(&self, options: BundlerOptions) -> BuildResult<LoadConfigOutput> {
    resolve_config(self.discovery.as_ref(), self.package_loader.as_ref(), options, &self.cwd)
  }

  /// Writes exactly one file, `config.bundler.output.file`.
  pub async fn bundle(&self, options: BundlerOptions) -> BuildResult<BundleOutput> {
    let LoadConfigOutput { config, config_location, mut warnings } = self.get_config(options)?;
    let plugins = build_stages(&config, &config_location)?;

    let bundler = Bundler::with_file_system(
      InputOptions { input: config.bundler.input.file.clone(), cwd: config_location, plugins },
      Arc::clone(&self.fs),
    );
    let build = bundler.build().await?;

    let output_options = build_output_options(&config)?;
    let output = build.write(&output_options)?;

    warnings.extend(output.warnings);
    for warning in &warnings {
      warn!("{warning}");
    }
    info!("Created a game bundle for '{}' at {}", config.game.name, output_options.file.display());

    Ok(BundleOutput { assets: output.assets, warnings })
  }
}

/// [`GameBundler::bundle`] on the OS file system.
pub async fn bundle(options: BundlerOptions) -> BuildResult<BundleOutput> {
  GameBundler::new()?.bundle(options).await
}

/// [`GameBundler::get_config`] on the OS file system.
pub fn get_config(options: BundlerOptions) -> BuildResult<LoadConfigOutput> {
  GameBundler::new()?.get_config(options)
}

#[test]
fn test_new_uses_the_process_working_directory() {
  let bundler = GameBundler::new().unwrap();
  assert_eq!(bundler.cwd, std::env::current_dir().unwrap());
}
