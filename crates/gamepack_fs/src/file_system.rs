use std::{io, path::Path};

use oxc_resolver::FileSystem as OxcResolverFileSystem;

/// File access used by config discovery, module loading and artifact emission.
/// Reading and metadata come from the resolver's file system, so module resolution sees the same files.
pub trait FileSystem: Send + Sync + OxcResolverFileSystem {
  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn is_file(&self, path: &Path) -> bool;

  fn is_dir(&self, path: &Path) -> bool;

  fn exists(&self, path: &Path) -> bool {
    self.is_file(path) || self.is_dir(path)
  }
}
