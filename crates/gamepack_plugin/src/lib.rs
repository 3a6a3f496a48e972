mod plugin;
mod plugin_context;
mod plugin_driver;
mod types;

pub use crate::{
  plugin::{
    HookLoadReturn, HookNoopReturn, HookRenderChunkReturn, HookResolveIdReturn,
    HookTransformReturn, Plugin, SharedPlugin,
  },
  plugin_context::PluginContext,
  plugin_driver::{PluginDriver, SharedPluginDriver},
  types::{
    hook_load_args::HookLoadArgs, hook_load_output::HookLoadOutput,
    hook_render_chunk_args::HookRenderChunkArgs, hook_render_chunk_output::HookRenderChunkOutput,
    hook_resolve_id_args::HookResolveIdArgs, hook_transform_args::HookTransformArgs,
    hook_transform_output::HookTransformOutput,
  },
};
