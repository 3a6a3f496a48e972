mod formats;
mod module_finalizer;
mod runtime;
mod sort_modules;

use gamepack_common::{ModuleFormat, OutputAsset, OutputOptions};
use gamepack_error::BuildResult;
use gamepack_plugin::PluginDriver;
use gamepack_utils::{concat_string, indexmap::FxIndexMap};
use tracing::debug;

use self::{
  formats::{cjs::render_cjs, esm::render_esm, umd::render_umd, GenerateContext},
  module_finalizer::{finalize_external_module, finalize_normal_module, ModuleFinalizerContext},
  runtime::RUNTIME_CODE,
  sort_modules::sort_modules,
};
use crate::types::{module::Module, IndexModules, ModuleIdx};

pub struct GenerateStage<'a> {
  modules: &'a IndexModules,
  entry: ModuleIdx,
  plugin_driver: &'a PluginDriver,
  options: &'a OutputOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(
    modules: &'a IndexModules,
    entry: ModuleIdx,
    plugin_driver: &'a PluginDriver,
    options: &'a OutputOptions,
  ) -> Self {
    Self { modules, entry, plugin_driver, options }
  }

  pub fn generate(&self) -> BuildResult<OutputAsset> {
    let format = self.options.format;
    let sorted_modules = sort_modules(self.modules, self.entry);

    let externals = sorted_modules
      .iter()
      .filter(|idx| matches!(self.modules[**idx], Module::External(_)))
      .enumerate()
      .map(|(index, idx)| (*idx, format!("__external_{index}")))
      .collect::<FxIndexMap<_, _>>();

    let finalizer_ctx = ModuleFinalizerContext { modules: self.modules, externals: &externals, format };
    let module_sources = sorted_modules
      .iter()
      .map(|idx| match &self.modules[*idx] {
        Module::Normal(module) => finalize_normal_module(&finalizer_ctx, module),
        Module::External(module) => finalize_external_module(&finalizer_ctx, module),
      })
      .collect::<Vec<_>>();

    let ctx = GenerateContext {
      modules: self.modules,
      entry: self.entry,
      externals: &externals,
      name: self.options.name.as_deref(),
    };
    let source_joiner = match format {
      ModuleFormat::Cjs => render_cjs(&ctx, RUNTIME_CODE, &module_sources),
      ModuleFormat::Esm => render_esm(&ctx, RUNTIME_CODE, &module_sources),
      ModuleFormat::Umd => render_umd(&ctx, RUNTIME_CODE, &module_sources)?,
    };

    debug!(
      "Rendered {} modules ({} external) as {format}",
      module_sources.len(),
      externals.len()
    );

    let code = self.plugin_driver.render_chunk(source_joiner.join(), format)?;
    let content = match &self.options.banner {
      Some(banner) => concat_string!(banner, "\n", code),
      None => code,
    };

    Ok(OutputAsset { file: self.options.file.clone(), content })
  }
}
