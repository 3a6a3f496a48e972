use std::{path::PathBuf, sync::Arc};

use gamepack_fs::FileSystem;

/// Shared state every hook receives.
#[derive(Clone)]
pub struct PluginContext {
  pub fs: Arc<dyn FileSystem>,
  pub cwd: PathBuf,
}

impl std::fmt::Debug for PluginContext {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PluginContext").field("cwd", &self.cwd).finish_non_exhaustive()
  }
}
