use std::{
  fmt::Debug,
  path::{Path, PathBuf},
  sync::Arc,
};

use gamepack_common::UserConfig;
use gamepack_error::BuildResult;
use gamepack_fs::FileSystem;
use serde_json::Value;
use tracing::debug;

/// Key of `package.json` holding the configuration, also the stem of the dedicated file.
const CONFIG_NAME: &str = "regal";
const PACKAGE_JSON: &str = "package.json";
const CONFIG_FILE: &str = "regal.json";

#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredConfig {
  /// File the configuration was read from.
  pub path: PathBuf,
  pub config: UserConfig,
}

/// Finds the configuration closest to a directory.
pub trait ConfigDiscovery: Debug + Send + Sync {
  fn search(&self, dir: &Path) -> BuildResult<Option<DiscoveredConfig>>;
}

/// Walks from `dir` up to the root. In each directory the `regal` key of `package.json`
/// is checked first, then `regal.json`. The first hit wins.
pub struct FsConfigDiscovery {
  fs: Arc<dyn FileSystem>,
}

impl Debug for FsConfigDiscovery {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FsConfigDiscovery").finish_non_exhaustive()
  }
}

impl FsConfigDiscovery {
  pub fn new(fs: Arc<dyn FileSystem>) -> Self {
    Self { fs }
  }

  fn read_json(&self, path: &Path) -> BuildResult<Option<Value>> {
    if !self.fs.is_file(path) {
      return Ok(None);
    }
    let content = self.fs.read_to_string(path)?;
    let value = serde_json::from_str(&content)
      .map_err(|err| anyhow::anyhow!("Could not parse {}: {err}", path.display()))?;
    Ok(Some(value))
  }
}

impl ConfigDiscovery for FsConfigDiscovery {
  fn search(&self, dir: &Path) -> BuildResult<Option<DiscoveredConfig>> {
    for dir in dir.ancestors() {
      let package_json = dir.join(PACKAGE_JSON);
      if let Some(Value::Object(mut package)) = self.read_json(&package_json)? {
        if let Some(config) = package.remove(CONFIG_NAME) {
          return found(package_json, config);
        }
      }

      let config_file = dir.join(CONFIG_FILE);
      if let Some(config) = self.read_json(&config_file)? {
        return found(config_file, config);
      }
    }

    debug!("No configuration found from {}", dir.display());
    Ok(None)
  }
}

fn found(path: PathBuf, config: Value) -> BuildResult<Option<DiscoveredConfig>> {
  let config = serde_json::from_value::<UserConfig>(config)
    .map_err(|err| anyhow::anyhow!("Invalid configuration in {}: {err}", path.display()))?;
  debug!("Loaded configuration from {}", path.display());
  Ok(Some(DiscoveredConfig { path, config }))
}

#[test]
fn test_discovery_precedence() {
  use gamepack_fs::MemoryFileSystem;

  let fs = Arc::new(MemoryFileSystem::new(&[
    ("/games/package.json", r#"{ "regal": { "game": { "name": "outer" } } }"#),
    ("/games/inner/package.json", r#"{ "name": "inner-pkg", "version": "1.0.0" }"#),
    ("/games/inner/regal.json", r#"{ "game": { "name": "inner" } }"#),
    ("/games/both/package.json", r#"{ "regal": { "game": { "name": "from-package" } } }"#),
    ("/games/both/regal.json", r#"{ "game": { "name": "from-file" } }"#),
    ("/games/plain/package.json", r#"{ "name": "plain" }"#),
  ]));
  let discovery = FsConfigDiscovery::new(fs);
  let name_at = |dir: &str| {
    discovery.search(Path::new(dir)).unwrap().map(|found| {
      (found.path.to_string_lossy().into_owned(), found.config.game.and_then(|game| game.name))
    })
  };

  assert_eq!(
    name_at("/games/inner"),
    Some(("/games/inner/regal.json".to_string(), Some("inner".to_string())))
  );
  assert_eq!(
    name_at("/games/both"),
    Some(("/games/both/package.json".to_string(), Some("from-package".to_string())))
  );
  assert_eq!(
    name_at("/games/plain"),
    Some(("/games/package.json".to_string(), Some("outer".to_string())))
  );
  assert_eq!(name_at("/elsewhere"), None);
}

#[test]
fn test_discovery_reports_broken_config() {
  use gamepack_fs::MemoryFileSystem;

  let fs = Arc::new(MemoryFileSystem::new(&[("/game/regal.json", "{ \"game\": ")]));
  let err = FsConfigDiscovery::new(fs).search(Path::new("/game")).unwrap_err();
  assert!(err.to_string().contains("Could not parse /game/regal.json"));
}
