use std::path::{Path, PathBuf};

use gamepack_common::ResolvedId;
use gamepack_error::BuildResult;
use gamepack_fs::FileSystem;
use gamepack_plugin::{HookResolveIdArgs, PluginDriver};
use sugar_path::SugarPath;

/// Extensions tried when no stage resolves a relative specifier.
const FALLBACK_EXTENSIONS: [&str; 2] = [".js", ".mjs"];

#[inline]
pub fn is_relative_or_absolute(specifier: &str) -> bool {
  specifier.starts_with("./") || specifier.starts_with("../") || Path::new(specifier).is_absolute()
}

/// Asks the `resolve_id` hooks first, then looks the specifier up as a plain file.
/// `Ok(None)` means nothing could resolve it, the caller decides whether that is fatal.
pub fn resolve_id(
  plugin_driver: &PluginDriver,
  fs: &dyn FileSystem,
  cwd: &Path,
  specifier: &str,
  importer: Option<&str>,
) -> BuildResult<Option<ResolvedId>> {
  let args = HookResolveIdArgs { specifier, importer, is_entry: importer.is_none() };
  if let Some(resolved) = plugin_driver.resolve_id(&args)? {
    return Ok(Some(resolved));
  }

  if !is_relative_or_absolute(specifier) {
    return Ok(None);
  }

  let base = importer
    .filter(|importer| !importer.starts_with('\0'))
    .and_then(|importer| Path::new(importer).parent())
    .unwrap_or(cwd);
  let path = base.join(specifier).normalize();

  let resolved = std::iter::once(path.clone())
    .chain(FALLBACK_EXTENSIONS.iter().map(|ext| {
      let mut with_ext = path.clone().into_os_string();
      with_ext.push(ext);
      PathBuf::from(with_ext)
    }))
    .find(|candidate| fs.is_file(candidate));

  Ok(resolved.map(|path| ResolvedId::new(path.to_string_lossy().into_owned())))
}
