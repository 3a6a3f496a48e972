use std::{
  io,
  path::{Path, PathBuf},
};

use dashmap::{DashMap, DashSet};
use oxc_resolver::{FileMetadata, FileSystem as OxcResolverFileSystem};

use crate::FileSystem;

/// In-memory file system. Directories exist implicitly as ancestors of files, or explicitly through `create_dir_all`.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
  files: DashMap<PathBuf, String>,
  dirs: DashSet<PathBuf>,
}

impl MemoryFileSystem {
  pub fn new<P: AsRef<Path>, C: AsRef<str>>(data: &[(P, C)]) -> Self {
    let fs = Self::default();
    for (path, content) in data {
      fs.add_file(path.as_ref(), content.as_ref());
    }
    fs
  }

  pub fn add_file(&self, path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
      self.add_dirs(parent);
    }
    self.files.insert(path.to_path_buf(), content.to_string());
  }

  fn add_dirs(&self, path: &Path) {
    for ancestor in path.ancestors() {
      if !self.dirs.insert(ancestor.to_path_buf()) {
        break;
      }
    }
  }
}

fn not_found(path: &Path) -> io::Error {
  io::Error::new(io::ErrorKind::NotFound, format!("{} does not exist", path.display()))
}

impl FileSystem for MemoryFileSystem {
  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    if path.parent().is_some_and(|parent| !parent.as_os_str().is_empty() && !self.is_dir(parent)) {
      return Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("parent directory of {} does not exist", path.display()),
      ));
    }
    let content = String::from_utf8(content.to_vec())
      .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    self.files.insert(path.to_path_buf(), content);
    Ok(())
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    if self.is_file(path) {
      return Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("{} is a file", path.display()),
      ));
    }
    self.add_dirs(path);
    Ok(())
  }

  fn is_file(&self, path: &Path) -> bool {
    self.files.contains_key(path)
  }

  fn is_dir(&self, path: &Path) -> bool {
    self.dirs.contains(path)
  }
}

/// There are no symlinks in memory, every path is its own real path.
impl OxcResolverFileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.files.get(path).map(|content| content.value().clone()).ok_or_else(|| not_found(path))
  }

  fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    if self.is_file(path) {
      Ok(FileMetadata::new(true, false, false))
    } else if self.is_dir(path) {
      Ok(FileMetadata::new(false, true, false))
    } else {
      Err(not_found(path))
    }
  }

  fn symlink_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    self.metadata(path)
  }

  fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
    Err(io::Error::new(io::ErrorKind::InvalidInput, format!("{} is not a symlink", path.display())))
  }
}

#[test]
fn test_memory_file_system() {
  let fs = MemoryFileSystem::new(&[("/game/src/index.ts", "export {};")]);

  assert!(fs.is_file(Path::new("/game/src/index.ts")));
  assert!(fs.is_dir(Path::new("/game/src")));
  assert!(fs.is_dir(Path::new("/game")));
  assert!(!fs.exists(Path::new("/game/package.json")));
  assert_eq!(fs.read_to_string(Path::new("/game/src/index.ts")).unwrap(), "export {};");

  fs.write(Path::new("/game/out.js"), b"1;").unwrap();
  assert_eq!(fs.read_to_string(Path::new("/game/out.js")).unwrap(), "1;");
  assert!(fs.write(Path::new("/missing/out.js"), b"1;").is_err());

  assert!(fs.metadata(Path::new("/game")).is_ok());
  assert!(fs.metadata(Path::new("/game/src/missing.ts")).is_err());
}
