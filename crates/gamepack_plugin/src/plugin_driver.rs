use std::sync::Arc;

use gamepack_common::{ModuleDefFormat, ModuleFormat, ResolvedId};
use gamepack_error::{BuildError, BuildResult};
use tracing::debug;

use crate::{
  HookLoadArgs, HookLoadOutput, HookRenderChunkArgs, HookResolveIdArgs, HookTransformArgs,
  PluginContext, SharedPlugin,
};

pub type SharedPluginDriver = Arc<PluginDriver>;

/// Runs plugin hooks in the order the plugins were given.
#[derive(Debug)]
pub struct PluginDriver {
  plugins: Vec<SharedPlugin>,
  ctx: PluginContext,
}

impl PluginDriver {
  pub fn new_shared(plugins: Vec<SharedPlugin>, ctx: PluginContext) -> SharedPluginDriver {
    Arc::new(Self { plugins, ctx })
  }

  pub fn context(&self) -> &PluginContext {
    &self.ctx
  }

  pub fn plugin_names(&self) -> Vec<String> {
    self.plugins.iter().map(|plugin| plugin.name().into_owned()).collect()
  }

  pub fn build_start(&self) -> BuildResult<()> {
    for plugin in &self.plugins {
      plugin.build_start(&self.ctx).map_err(|err| in_plugin(err, plugin, "buildStart"))?;
    }
    Ok(())
  }

  /// First plugin returning an id wins.
  pub fn resolve_id(&self, args: &HookResolveIdArgs) -> BuildResult<Option<ResolvedId>> {
    for plugin in &self.plugins {
      if let Some(resolved) =
        plugin.resolve_id(&self.ctx, args).map_err(|err| in_plugin(err, plugin, "resolveId"))?
      {
        debug!("`{}` resolved {:?} to {:?}", plugin.name(), args.specifier, resolved.id);
        return Ok(Some(resolved));
      }
    }
    Ok(None)
  }

  /// First plugin returning code wins.
  pub fn load(&self, args: &HookLoadArgs) -> BuildResult<Option<HookLoadOutput>> {
    for plugin in &self.plugins {
      if let Some(output) =
        plugin.load(&self.ctx, args).map_err(|err| in_plugin(err, plugin, "load"))?
      {
        return Ok(Some(output));
      }
    }
    Ok(None)
  }

  /// Every plugin sees the code produced by the previous one.
  pub fn transform(
    &self,
    id: &str,
    code: String,
    module_def_format: ModuleDefFormat,
  ) -> BuildResult<(String, ModuleDefFormat)> {
    let mut code = code;
    let mut module_def_format = module_def_format;
    for plugin in &self.plugins {
      let args = HookTransformArgs { id, code: &code, module_def_format };
      if let Some(output) =
        plugin.transform(&self.ctx, &args).map_err(|err| in_plugin(err, plugin, "transform"))?
      {
        if let Some(format) = output.module_def_format {
          module_def_format = format;
        }
        if let Some(transformed) = output.code {
          code = transformed;
        }
      }
    }
    Ok((code, module_def_format))
  }

  pub fn render_chunk(&self, code: String, format: ModuleFormat) -> BuildResult<String> {
    let mut code = code;
    for plugin in &self.plugins {
      let args = HookRenderChunkArgs { code: &code, format };
      if let Some(output) = plugin
        .render_chunk(&self.ctx, &args)
        .map_err(|err| in_plugin(err, plugin, "renderChunk"))?
      {
        code = output.code;
      }
    }
    Ok(code)
  }
}

fn in_plugin(err: BuildError, plugin: &SharedPlugin, hook: &str) -> BuildError {
  let name = plugin.name();
  err
    .0
    .into_iter()
    .map(|err| err.context(format!("[plugin {name}] {hook} failed")))
    .collect::<Vec<_>>()
    .into()
}

#[test]
fn test_hook_ordering() {
  use std::{borrow::Cow, path::PathBuf};

  use gamepack_fs::MemoryFileSystem;

  use crate::{
    HookLoadReturn, HookRenderChunkOutput, HookRenderChunkReturn, HookTransformOutput,
    HookTransformReturn, Plugin,
  };

  #[derive(Debug)]
  struct Suffix(&'static str);

  impl Plugin for Suffix {
    fn name(&self) -> Cow<'static, str> {
      Cow::Borrowed(self.0)
    }

    fn load(&self, _ctx: &PluginContext, args: &HookLoadArgs) -> HookLoadReturn {
      let code = format!("/* {} loaded {} */", self.0, args.id);
      Ok(Some(HookLoadOutput { code, ..Default::default() }))
    }

    fn transform(&self, _ctx: &PluginContext, args: &HookTransformArgs) -> HookTransformReturn {
      let code = Some(format!("{}{}", args.code, self.0));
      Ok(Some(HookTransformOutput { code, module_def_format: None }))
    }

    fn render_chunk(
      &self,
      _ctx: &PluginContext,
      args: &HookRenderChunkArgs,
    ) -> HookRenderChunkReturn {
      Ok(Some(HookRenderChunkOutput { code: format!("{}-{}", args.code, self.0) }))
    }
  }

  let ctx = PluginContext { fs: Arc::new(MemoryFileSystem::default()), cwd: PathBuf::from("/") };
  let plugins: Vec<SharedPlugin> = vec![Arc::new(Suffix("a")), Arc::new(Suffix("b"))];
  let driver = PluginDriver::new_shared(plugins, ctx);

  let loaded = driver.load(&HookLoadArgs { id: "x" }).unwrap().unwrap();
  assert_eq!(loaded.code, "/* a loaded x */");

  let (code, format) = driver.transform("x", String::new(), ModuleDefFormat::Unknown).unwrap();
  assert_eq!(code, "ab");
  assert_eq!(format, ModuleDefFormat::Unknown);

  assert_eq!(driver.render_chunk("c".to_string(), ModuleFormat::Cjs).unwrap(), "c-a-b");
  assert_eq!(driver.plugin_names(), vec!["a", "b"]);
}
