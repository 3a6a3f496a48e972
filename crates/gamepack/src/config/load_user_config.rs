use std::path::Path;

use gamepack_common::{PackageDescriptor, PartialGameMetadata, UserConfig};
use gamepack_error::{BuildResult, BuildWarning, BundlerError};

use super::{discovery::ConfigDiscovery, package_loader::PackageLoader};

pub struct LoadUserConfigReturn {
  pub config: UserConfig,
  pub warnings: Vec<BuildWarning>,
}

/// Discovered configuration with the package metadata merged into `game`. Discovery starts
/// from `config_location` resolved against `cwd`.
/// Descriptive keys the configuration already defines are kept, `gameVersion` always
/// comes from the package.
pub fn load_user_config(
  discovery: &dyn ConfigDiscovery,
  package_loader: &dyn PackageLoader,
  config_location: &Path,
  cwd: &Path,
) -> BuildResult<LoadUserConfigReturn> {
  let mut config =
    discovery.search(&cwd.join(config_location))?.map(|found| found.config).unwrap_or_default();
  let package = load_package(package_loader, config_location, cwd)?;

  let mut warnings = vec![];
  let game = merge_package_metadata(config.game.take().unwrap_or_default(), &package, &mut warnings);
  config.game = Some(game);

  Ok(LoadUserConfigReturn { config, warnings })
}

/// `<config_location>/package.json`, falling back to the same path resolved against `cwd`.
fn load_package(
  package_loader: &dyn PackageLoader,
  config_location: &Path,
  cwd: &Path,
) -> BuildResult<PackageDescriptor> {
  let package_path = config_location.join("package.json");
  if let Some(package) = package_loader.load(&package_path)? {
    return Ok(package);
  }

  let fallback = cwd.join(&package_path);
  if fallback != package_path {
    if let Some(package) = package_loader.load(&fallback)? {
      return Ok(package);
    }
  }

  Err(BundlerError::ConfigResolution(package_path).into())
}

fn merge_package_metadata(
  mut game: PartialGameMetadata,
  package: &PackageDescriptor,
  warnings: &mut Vec<BuildWarning>,
) -> PartialGameMetadata {
  game.name = game.name.or_else(|| package.name.clone());
  game.author = game.author.or_else(|| package.author());
  game.description = game.description.or_else(|| package.description.clone());
  game.homepage = game.homepage.or_else(|| package.homepage.clone());
  game.repository = game.repository.or_else(|| package.repository());

  if let Some(value) = game.game_version.take() {
    warnings.push(BuildWarning::IgnoredGameVersion { value });
  }
  game.game_version.clone_from(&package.version);

  game
}

#[test]
fn test_load_user_config() {
  use std::sync::Arc;

  use gamepack_fs::{FileSystem, MemoryFileSystem};

  use crate::{FsConfigDiscovery, FsPackageLoader};

  let fs: Arc<dyn FileSystem> = Arc::new(MemoryFileSystem::new(&[
    (
      "/game/package.json",
      r#"{
        "name": "pkg-name",
        "version": "2.0.0",
        "author": "Pkg Author",
        "description": "From the package",
        "regal": {
          "game": { "name": "My Game", "description": "From the config", "gameVersion": "9.9.9" }
        }
      }"#,
    ),
    ("/work/rel/package.json", r#"{ "name": "relative", "version": "0.1.0" }"#),
  ]));
  let discovery = FsConfigDiscovery::new(Arc::clone(&fs));
  let loader = FsPackageLoader::new(Arc::clone(&fs));

  let LoadUserConfigReturn { config, warnings } =
    load_user_config(&discovery, &loader, Path::new("/game"), Path::new("/work")).unwrap();
  let game = config.game.unwrap();
  assert_eq!(game.name.as_deref(), Some("My Game"));
  assert_eq!(game.author.as_deref(), Some("Pkg Author"));
  assert_eq!(game.description.as_deref(), Some("From the config"));
  assert_eq!(game.homepage, None);
  assert_eq!(game.game_version.as_deref(), Some("2.0.0"));
  assert_eq!(warnings, vec![BuildWarning::IgnoredGameVersion { value: "9.9.9".to_string() }]);

  // A relative location is retried against the working directory.
  let LoadUserConfigReturn { config, warnings } =
    load_user_config(&discovery, &loader, Path::new("rel"), Path::new("/work")).unwrap();
  let game = config.game.unwrap();
  assert_eq!(game.name.as_deref(), Some("relative"));
  assert_eq!(game.game_version.as_deref(), Some("0.1.0"));
  assert!(warnings.is_empty());

  let err = load_user_config(&discovery, &loader, Path::new("/missing"), Path::new("/work"))
    .err()
    .unwrap();
  assert!(matches!(
    err.bundler_error(),
    Some(BundlerError::ConfigResolution(path)) if path == Path::new("/missing/package.json")
  ));
}
