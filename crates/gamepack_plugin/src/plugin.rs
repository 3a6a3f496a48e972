use std::{borrow::Cow, fmt::Debug, sync::Arc};

use gamepack_common::ResolvedId;
use gamepack_error::BuildResult;

use crate::{
  HookLoadArgs, HookLoadOutput, HookRenderChunkArgs, HookRenderChunkOutput, HookResolveIdArgs,
  HookTransformArgs, HookTransformOutput, PluginContext,
};

pub type HookNoopReturn = BuildResult<()>;
pub type HookResolveIdReturn = BuildResult<Option<ResolvedId>>;
pub type HookLoadReturn = BuildResult<Option<HookLoadOutput>>;
pub type HookTransformReturn = BuildResult<Option<HookTransformOutput>>;
pub type HookRenderChunkReturn = BuildResult<Option<HookRenderChunkOutput>>;

pub type SharedPlugin = Arc<dyn Plugin>;

/// A bundling stage. Every hook is optional, returning `Ok(None)` defers to the next plugin.
pub trait Plugin: Debug + Send + Sync + 'static {
  fn name(&self) -> Cow<'static, str>;

  fn build_start(&self, _ctx: &PluginContext) -> HookNoopReturn {
    Ok(())
  }

  fn resolve_id(&self, _ctx: &PluginContext, _args: &HookResolveIdArgs) -> HookResolveIdReturn {
    Ok(None)
  }

  fn load(&self, _ctx: &PluginContext, _args: &HookLoadArgs) -> HookLoadReturn {
    Ok(None)
  }

  fn transform(&self, _ctx: &PluginContext, _args: &HookTransformArgs) -> HookTransformReturn {
    Ok(None)
  }

  fn render_chunk(
    &self,
    _ctx: &PluginContext,
    _args: &HookRenderChunkArgs,
  ) -> HookRenderChunkReturn {
    Ok(None)
  }
}
