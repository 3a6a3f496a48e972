use std::path::PathBuf;

use gamepack_plugin::SharedPlugin;

#[derive(Debug, Clone)]
pub struct InputOptions {
  /// The single entry module.
  pub input: PathBuf,
  /// Base of relative specifiers without an importer and of the module ids printed in the bundle.
  pub cwd: PathBuf,
  /// Stages, run in order.
  pub plugins: Vec<SharedPlugin>,
}
