mod ast_scanner;
mod module_loader;
mod module_task;

use std::sync::Arc;

use gamepack_common::ResolvedId;
use gamepack_error::BuildResult;
use gamepack_fs::FileSystem;
use gamepack_plugin::SharedPluginDriver;

use self::module_loader::{ModuleLoader, ModuleLoaderOutput};
use crate::{types::SharedInputOptions, utils::resolve_id::resolve_id};

pub type ScanStageOutput = ModuleLoaderOutput;

pub struct ScanStage {
  fs: Arc<dyn FileSystem>,
  options: SharedInputOptions,
  plugin_driver: SharedPluginDriver,
}

impl ScanStage {
  pub fn new(
    fs: Arc<dyn FileSystem>,
    options: SharedInputOptions,
    plugin_driver: SharedPluginDriver,
  ) -> Self {
    Self { fs, options, plugin_driver }
  }

  pub async fn scan(&self) -> BuildResult<ScanStageOutput> {
    let entry = self.resolve_user_defined_entry()?;

    let module_loader = ModuleLoader::new(
      Arc::clone(&self.fs),
      Arc::clone(&self.plugin_driver),
      self.options.cwd.clone(),
    );

    module_loader.fetch_all_modules(entry).await
  }

  fn resolve_user_defined_entry(&self) -> BuildResult<ResolvedId> {
    let specifier = self.options.input.to_string_lossy();
    let resolved =
      resolve_id(&self.plugin_driver, self.fs.as_ref(), &self.options.cwd, &specifier, None)?;

    match resolved {
      Some(resolved) if resolved.is_external => {
        Err(anyhow::anyhow!("Failed to resolve {specifier:?} - entry can't be external"))?
      }
      Some(resolved) => Ok(resolved),
      None => Err(anyhow::anyhow!("Could not resolve entry module {specifier:?}."))?,
    }
  }
}
