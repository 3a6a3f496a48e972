use std::{
  io,
  path::{Path, PathBuf},
  sync::Arc,
};

use gamepack_fs::FileSystem;
use itertools::Itertools;
use oxc_resolver::{
  FileMetadata, FileSystem as OxcResolverFileSystem, FsCache, ResolveError as OxcResolveError,
  ResolveOptions as OxcResolverOptions, ResolverGeneric,
};

use crate::{is_node_builtin_module, ResolveError};

#[derive(Debug, Clone)]
pub struct ResolveOptions {
  /// Tried in order when a request has no matching file.
  pub extensions: Vec<String>,
  /// `package.json` fields consulted in order when a package has no `exports`.
  pub main_fields: Vec<String>,
  /// Conditions matched against `exports`, besides `import` and `default`.
  pub condition_names: Vec<String>,
  /// Report Node.js builtins as `ResolveError::Builtin` instead of looking them up.
  pub builtin_modules: bool,
}

impl Default for ResolveOptions {
  fn default() -> Self {
    Self {
      extensions: [".mjs", ".js", ".ts", ".tsx", ".json"].map(String::from).to_vec(),
      main_fields: vec!["module".to_string(), "main".to_string()],
      condition_names: vec!["node".to_string()],
      builtin_modules: true,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveReturn {
  pub path: PathBuf,
}

/// The build's file system as seen by the resolver cache.
#[derive(Clone)]
struct SharedFileSystem(Arc<dyn FileSystem>);

impl OxcResolverFileSystem for SharedFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.0.read_to_string(path)
  }

  fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    self.0.metadata(path)
  }

  fn symlink_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    self.0.symlink_metadata(path)
  }

  fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
    self.0.read_link(path)
  }
}

pub struct Resolver {
  cwd: PathBuf,
  builtin_modules: bool,
  import_resolver: ResolverGeneric<FsCache<SharedFileSystem>>,
}

impl Resolver {
  pub fn new(options: ResolveOptions, cwd: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
    let condition_names = ["import", "default"]
      .into_iter()
      .map(String::from)
      .chain(options.condition_names)
      .unique()
      .collect();

    let resolve_options = OxcResolverOptions {
      main_fields: options.main_fields,
      condition_names,
      extensions: options.extensions,
      // TypeScript sources import their siblings with the extension of the emitted file.
      extension_alias: vec![
        (".js".to_string(), [".js", ".ts", ".tsx"].map(String::from).to_vec()),
        (".mjs".to_string(), [".mjs", ".mts"].map(String::from).to_vec()),
      ],
      builtin_modules: false,
      ..Default::default()
    };

    let import_resolver =
      ResolverGeneric::new_with_cache(Arc::new(FsCache::new(SharedFileSystem(fs))), resolve_options);

    Self { cwd, builtin_modules: options.builtin_modules, import_resolver }
  }

  pub fn cwd(&self) -> &PathBuf {
    &self.cwd
  }

  pub fn resolve(
    &self,
    importer: Option<&Path>,
    specifier: &str,
  ) -> Result<ResolveReturn, ResolveError> {
    if self.builtin_modules && is_node_builtin_module(specifier) {
      let name = specifier.strip_prefix("node:").unwrap_or(specifier);
      return Err(ResolveError::Builtin(name.to_string()));
    }

    let dir = importer
      .and_then(|importer| importer.parent())
      .filter(|inner| inner.components().next().is_some())
      .unwrap_or(self.cwd.as_path());

    match self.import_resolver.resolve(dir, specifier) {
      Ok(resolution) => Ok(ResolveReturn { path: resolution.full_path() }),
      Err(OxcResolveError::NotFound(_)) => Err(ResolveError::NotFound(specifier.to_string())),
      Err(err) => {
        Err(ResolveError::Failed { specifier: specifier.to_string(), reason: err.to_string() })
      }
    }
  }
}

impl std::fmt::Debug for Resolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Resolver").field("cwd", &self.cwd).finish_non_exhaustive()
  }
}

#[test]
fn test_resolve_relative_and_packages() {
  use gamepack_fs::MemoryFileSystem;

  let fs = MemoryFileSystem::new(&[
    ("/game/src/index.ts", ""),
    ("/game/src/rooms/index.ts", ""),
    ("/game/src/items.ts", ""),
    ("/game/src/data.json", "{}"),
    ("/game/node_modules/regal/package.json", r#"{ "main": "dist/regal.cjs.js" }"#),
    ("/game/node_modules/regal/dist/regal.cjs.js", ""),
    ("/game/node_modules/@scope/util/index.js", ""),
  ]);
  let resolver = Resolver::new(ResolveOptions::default(), PathBuf::from("/game"), Arc::new(fs));
  let importer = Path::new("/game/src/index.ts");
  let resolve = |specifier: &str| resolver.resolve(Some(importer), specifier).map(|ret| ret.path);

  assert_eq!(resolve("./items"), Ok(PathBuf::from("/game/src/items.ts")));
  assert_eq!(resolve("./items.js"), Ok(PathBuf::from("/game/src/items.ts")));
  assert_eq!(resolve("./rooms"), Ok(PathBuf::from("/game/src/rooms/index.ts")));
  assert_eq!(resolve("./data.json"), Ok(PathBuf::from("/game/src/data.json")));
  assert_eq!(resolve("regal"), Ok(PathBuf::from("/game/node_modules/regal/dist/regal.cjs.js")));
  assert_eq!(resolve("@scope/util"), Ok(PathBuf::from("/game/node_modules/@scope/util/index.js")));
  assert_eq!(resolve("./missing"), Err(ResolveError::NotFound("./missing".to_string())));
  assert_eq!(resolve("lodash"), Err(ResolveError::NotFound("lodash".to_string())));
  assert_eq!(resolve("node:path"), Err(ResolveError::Builtin("path".to_string())));
}

#[test]
fn test_resolve_package_exports() {
  use gamepack_fs::MemoryFileSystem;

  let fs = MemoryFileSystem::new(&[
    ("/game/src/index.js", ""),
    (
      "/game/node_modules/regal/package.json",
      r#"{ "exports": { ".": { "import": "./dist/regal.esm.js", "require": "./dist/regal.cjs.js" } } }"#,
    ),
    ("/game/node_modules/regal/dist/regal.esm.js", ""),
    ("/game/node_modules/regal/dist/regal.cjs.js", ""),
  ]);
  let resolver = Resolver::new(ResolveOptions::default(), PathBuf::from("/game"), Arc::new(fs));
  let importer = Some(Path::new("/game/src/index.js"));

  assert_eq!(
    resolver.resolve(importer, "regal").map(|ret| ret.path),
    Ok(PathBuf::from("/game/node_modules/regal/dist/regal.esm.js"))
  );
  assert!(matches!(
    resolver.resolve(importer, "regal/internal"),
    Err(ResolveError::Failed { specifier, .. }) if specifier == "regal/internal"
  ));
}
