use std::{
  borrow::Cow,
  path::{Path, PathBuf},
  sync::{Arc, OnceLock},
};

use gamepack_common::ResolvedId;
use gamepack_plugin::{HookResolveIdArgs, HookResolveIdReturn, Plugin, PluginContext};
use gamepack_resolver::{ResolveError, ResolveOptions, Resolver};
use tracing::debug;

/// Node-style resolution of files and `node_modules` packages.
/// Builtins stay external, anything else unresolved is left to later stages.
#[derive(Debug)]
pub struct NodeResolvePlugin {
  cwd: PathBuf,
  options: ResolveOptions,
  /// Created on first use, over the file system of the build.
  resolver: OnceLock<Resolver>,
}

impl NodeResolvePlugin {
  pub fn new(cwd: &Path) -> Self {
    Self::with_options(cwd, ResolveOptions::default())
  }

  pub fn with_options(cwd: &Path, options: ResolveOptions) -> Self {
    Self { cwd: cwd.to_path_buf(), options, resolver: OnceLock::new() }
  }

  fn resolver(&self, ctx: &PluginContext) -> &Resolver {
    self.resolver.get_or_init(|| {
      Resolver::new(self.options.clone(), self.cwd.clone(), Arc::clone(&ctx.fs))
    })
  }
}

impl Plugin for NodeResolvePlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("node-resolve")
  }

  fn resolve_id(&self, ctx: &PluginContext, args: &HookResolveIdArgs) -> HookResolveIdReturn {
    let importer = args.importer.filter(|importer| !importer.starts_with('\0')).map(Path::new);

    match self.resolver(ctx).resolve(importer, args.specifier) {
      Ok(resolved) => Ok(Some(ResolvedId::new(resolved.path.to_string_lossy().into_owned()))),
      Err(ResolveError::Builtin(name)) => Ok(Some(ResolvedId::external(name))),
      Err(err @ ResolveError::NotFound(_)) => {
        debug!("{err}");
        Ok(None)
      }
      Err(err @ ResolveError::Failed { .. }) => Err(anyhow::Error::new(err).into()),
    }
  }
}

#[test]
fn test_node_resolve() {
  use gamepack_fs::MemoryFileSystem;

  let ctx = PluginContext {
    fs: Arc::new(MemoryFileSystem::new(&[
      ("/game/src/index.ts", ""),
      ("/game/src/rooms.ts", ""),
      ("/game/node_modules/regal/package.json", r#"{ "module": "dist/regal.esm.js" }"#),
      ("/game/node_modules/regal/dist/regal.esm.js", ""),
      (
        "/game/node_modules/sealed/package.json",
        r#"{ "exports": { ".": { "import": "./index.mjs", "require": "./index.cjs" } } }"#,
      ),
      ("/game/node_modules/sealed/index.mjs", ""),
      ("/game/node_modules/sealed/index.cjs", ""),
    ])),
    cwd: PathBuf::from("/game"),
  };
  let plugin = NodeResolvePlugin::new(&ctx.cwd);
  let resolve = |specifier: &str, importer: Option<&str>| {
    plugin.resolve_id(&ctx, &HookResolveIdArgs { specifier, importer, is_entry: importer.is_none() })
  };

  let entry = resolve("/game/src/index.ts", None).unwrap().unwrap();
  assert_eq!(entry.id.as_str(), "/game/src/index.ts");

  let importer = Some("/game/src/index.ts");
  assert_eq!(resolve("./rooms", importer).unwrap().unwrap().id.as_str(), "/game/src/rooms.ts");
  assert_eq!(
    resolve("regal", importer).unwrap().unwrap().id.as_str(),
    "/game/node_modules/regal/dist/regal.esm.js"
  );
  // Virtual importers resolve from the working directory.
  assert_eq!(
    resolve("regal", Some("\0virtual:_bundle")).unwrap().unwrap().id.as_str(),
    "/game/node_modules/regal/dist/regal.esm.js"
  );

  let builtin = resolve("node:fs", importer).unwrap().unwrap();
  assert!(builtin.is_external);
  assert_eq!(builtin.id.as_str(), "fs");

  assert_eq!(
    resolve("sealed", importer).unwrap().unwrap().id.as_str(),
    "/game/node_modules/sealed/index.mjs"
  );
  assert!(resolve("sealed/hidden", importer).is_err());

  assert!(resolve("./missing", importer).unwrap().is_none());
}
