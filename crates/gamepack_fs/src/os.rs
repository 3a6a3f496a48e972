use std::{
  io,
  path::{Path, PathBuf},
};

use oxc_resolver::{FileMetadata, FileSystem as OxcResolverFileSystem};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    std::fs::write(path, content)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
  }

  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }
}

impl OxcResolverFileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    let metadata = std::fs::metadata(path)?;
    Ok(FileMetadata::new(metadata.is_file(), metadata.is_dir(), false))
  }

  fn symlink_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    let metadata = std::fs::symlink_metadata(path)?;
    Ok(FileMetadata::new(metadata.is_file(), metadata.is_dir(), metadata.file_type().is_symlink()))
  }

  fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
    std::fs::read_link(path)
  }
}
