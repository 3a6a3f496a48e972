use std::sync::Arc;

use gamepack_common::OutputOptions;
use gamepack_error::{BuildResult, BuildWarning};
use gamepack_fs::{FileSystem, OsFileSystem};
use gamepack_plugin::{PluginContext, PluginDriver, SharedPluginDriver};

use crate::{
  generate_stage::GenerateStage,
  scan_stage::{ScanStage, ScanStageOutput},
  types::{
    bundle_output::BundleOutput, input_options::InputOptions, IndexModules, ModuleIdx,
    SharedInputOptions,
  },
};

/// Builds the module graph of a single entry. `build` can run once per output, like
///
/// ```ignore
/// let build = Bundler::new(input_options).build().await?;
/// build.write(&output_options)?;
/// ```
pub struct Bundler {
  fs: Arc<dyn FileSystem>,
  options: SharedInputOptions,
  plugin_driver: SharedPluginDriver,
}

impl Bundler {
  pub fn new(options: InputOptions) -> Self {
    Self::with_file_system(options, Arc::new(OsFileSystem))
  }

  pub fn with_file_system(options: InputOptions, fs: Arc<dyn FileSystem>) -> Self {
    let ctx = PluginContext { fs: Arc::clone(&fs), cwd: options.cwd.clone() };
    let plugin_driver = PluginDriver::new_shared(options.plugins.clone(), ctx);
    Self { fs, options: Arc::new(options), plugin_driver }
  }

  pub async fn build(&self) -> BuildResult<Build> {
    self.plugin_driver.build_start()?;

    let ScanStageOutput { modules, entry, warnings } = ScanStage::new(
      Arc::clone(&self.fs),
      Arc::clone(&self.options),
      Arc::clone(&self.plugin_driver),
    )
    .scan()
    .await?;

    Ok(Build {
      fs: Arc::clone(&self.fs),
      plugin_driver: Arc::clone(&self.plugin_driver),
      modules,
      entry,
      warnings,
    })
  }
}

/// A scanned module graph, ready to be emitted.
pub struct Build {
  fs: Arc<dyn FileSystem>,
  plugin_driver: SharedPluginDriver,
  modules: IndexModules,
  entry: ModuleIdx,
  warnings: Vec<BuildWarning>,
}

impl Build {
  /// Ids of every module in the graph, relative to the cwd.
  pub fn module_ids(&self) -> Vec<&str> {
    self.modules.iter().map(|module| module.stable_id()).collect()
  }

  pub fn warnings(&self) -> &[BuildWarning] {
    &self.warnings
  }

  pub fn generate(&self, options: &OutputOptions) -> BuildResult<BundleOutput> {
    let asset = GenerateStage::new(&self.modules, self.entry, &self.plugin_driver, options).generate()?;
    Ok(BundleOutput { assets: vec![asset], warnings: self.warnings.clone() })
  }

  pub fn write(&self, options: &OutputOptions) -> BuildResult<BundleOutput> {
    let output = self.generate(options)?;

    for asset in &output.assets {
      if let Some(dir) = asset.file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        self.fs.create_dir_all(dir)?;
      }
      self.fs.write(&asset.file, asset.content_as_bytes()).map_err(|err| {
        anyhow::anyhow!("Could not write the bundle to {}: {err}", asset.file.display())
      })?;
    }

    Ok(output)
  }
}

#[tokio::test]
async fn test_build_module_graph() {
  use std::path::{Path, PathBuf};

  use gamepack_common::ModuleFormat;
  use gamepack_fs::MemoryFileSystem;

  let fs: Arc<dyn FileSystem> = Arc::new(MemoryFileSystem::new(&[
    ("/game/src/index.js", "import { greet } from './greet';\nimport { on } from 'regal';\nexport default greet(on);\n"),
    ("/game/src/greet.js", "export function greet(value) {\n  return `hello ${value}`;\n}\n"),
  ]));
  let bundler = Bundler::with_file_system(
    InputOptions { input: PathBuf::from("/game/src/index.js"), cwd: PathBuf::from("/game"), plugins: vec![] },
    Arc::clone(&fs),
  );

  let build = bundler.build().await.unwrap();
  let mut ids = build.module_ids();
  ids.sort_unstable();
  assert_eq!(ids, vec!["external:regal", "src/greet.js", "src/index.js"]);
  assert!(matches!(
    build.warnings(),
    [BuildWarning::UnresolvedImport { specifier, importer }] if specifier == "regal" && importer == "src/index.js"
  ));

  let output = build
    .write(&OutputOptions {
      file: PathBuf::from("/game/dist/game.js"),
      format: ModuleFormat::Cjs,
      name: None,
      banner: Some("/* banner */".to_string()),
    })
    .unwrap();
  let code = fs.read_to_string(Path::new("/game/dist/game.js")).unwrap();
  assert_eq!(code, output.assets[0].content);
  assert!(code.starts_with("/* banner */\n'use strict';"));
  assert!(code.contains("__modules[\"src/greet.js\"] = function (module, exports) {"));
  assert!(code.contains("const greet = __import_0.greet;"));
  assert!(code.contains("module.exports = require(\"regal\");"));
  assert!(code.contains("const __default = greet(on);"));
  assert!(code.ends_with("module.exports = __toCommonJS(__require(\"src/index.js\"));\n"));
  // Dependencies are registered before their importers.
  assert!(code.find("\"src/greet.js\"").unwrap() < code.find("\"src/index.js\"] =").unwrap());
}

#[tokio::test]
async fn test_unresolvable_entry_and_relative_import() {
  use std::path::PathBuf;

  use gamepack_fs::MemoryFileSystem;

  let fs: Arc<dyn FileSystem> =
    Arc::new(MemoryFileSystem::new(&[("/game/src/index.js", "import './missing';\n")]));

  let missing_entry = Bundler::with_file_system(
    InputOptions { input: PathBuf::from("/game/src/nope.js"), cwd: PathBuf::from("/game"), plugins: vec![] },
    Arc::clone(&fs),
  );
  let err = missing_entry.build().await.err().unwrap();
  assert!(err.to_string().contains("Could not resolve entry module"));

  let missing_import = Bundler::with_file_system(
    InputOptions { input: PathBuf::from("/game/src/index.js"), cwd: PathBuf::from("/game"), plugins: vec![] },
    fs,
  );
  let err = missing_import.build().await.err().unwrap();
  assert!(err.to_string().contains("Could not resolve './missing' from src/index.js."));
}
