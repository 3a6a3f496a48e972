use std::path::Path;

use gamepack_common::{ModuleDefFormat, ResolvedId};
use gamepack_error::BuildResult;
use gamepack_fs::FileSystem;
use gamepack_plugin::{HookLoadArgs, HookLoadOutput, PluginDriver};

/// Loads through the `load` hooks, falling back to the file system for real paths.
pub fn load_source(
  plugin_driver: &PluginDriver,
  fs: &dyn FileSystem,
  resolved_id: &ResolvedId,
) -> BuildResult<(String, ModuleDefFormat)> {
  if let Some(HookLoadOutput { code, module_def_format }) =
    plugin_driver.load(&HookLoadArgs { id: &resolved_id.id })?
  {
    return Ok((code, module_def_format.unwrap_or_default()));
  }

  if resolved_id.is_virtual() {
    Err(anyhow::anyhow!("no stage provides the virtual module {:?}", resolved_id.id.as_str()))?;
  }

  Ok((fs.read_to_string(Path::new(resolved_id.id.as_str()))?, ModuleDefFormat::Unknown))
}
