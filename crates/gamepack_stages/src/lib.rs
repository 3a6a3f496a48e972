//! Built-in bundling stages. Each one is a [`gamepack_plugin::Plugin`].

mod commonjs;
mod insert;
mod json;
mod minify;
mod node_resolve;
mod typescript;
mod virtual_module;

pub use crate::{
  commonjs::CommonJsPlugin, insert::InsertPlugin, json::JsonPlugin, minify::MinifyPlugin,
  node_resolve::NodeResolvePlugin, typescript::TypeScriptPlugin, virtual_module::VirtualPlugin,
};

#[cfg(test)]
fn test_context() -> gamepack_plugin::PluginContext {
  use std::{path::PathBuf, sync::Arc};

  gamepack_plugin::PluginContext {
    fs: Arc::new(gamepack_fs::MemoryFileSystem::default()),
    cwd: PathBuf::from("/game"),
  }
}
