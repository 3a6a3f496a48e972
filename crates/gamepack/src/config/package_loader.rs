use std::{fmt::Debug, path::Path, sync::Arc};

use gamepack_common::PackageDescriptor;
use gamepack_error::BuildResult;
use gamepack_fs::FileSystem;

/// Reads a `package.json`. `Ok(None)` when there is nothing at `path`.
pub trait PackageLoader: Debug + Send + Sync {
  fn load(&self, path: &Path) -> BuildResult<Option<PackageDescriptor>>;
}

pub struct FsPackageLoader {
  fs: Arc<dyn FileSystem>,
}

impl Debug for FsPackageLoader {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FsPackageLoader").finish_non_exhaustive()
  }
}

impl FsPackageLoader {
  pub fn new(fs: Arc<dyn FileSystem>) -> Self {
    Self { fs }
  }
}

impl PackageLoader for FsPackageLoader {
  fn load(&self, path: &Path) -> BuildResult<Option<PackageDescriptor>> {
    if !self.fs.is_file(path) {
      return Ok(None);
    }
    let content = self.fs.read_to_string(path)?;
    let package = serde_json::from_str(&content)
      .map_err(|err| anyhow::anyhow!("Could not parse {}: {err}", path.display()))?;
    Ok(Some(package))
  }
}

#[test]
fn test_fs_package_loader() {
  use gamepack_fs::MemoryFileSystem;

  let fs = Arc::new(MemoryFileSystem::new(&[
    ("/game/package.json", r#"{ "name": "basic", "version": "1.0.0" }"#),
    ("/broken/package.json", "{"),
  ]));
  let loader = FsPackageLoader::new(fs);

  let package = loader.load(Path::new("/game/package.json")).unwrap().unwrap();
  assert_eq!(package.name.as_deref(), Some("basic"));
  assert_eq!(package.version.as_deref(), Some("1.0.0"));
  assert!(loader.load(Path::new("/missing/package.json")).unwrap().is_none());
  assert!(loader.load(Path::new("/broken/package.json")).is_err());
}
