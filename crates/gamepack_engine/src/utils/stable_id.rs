use std::path::Path;

use gamepack_utils::path_ext::PathExt;

/// Printable id of a module: virtual ids lose their `\0` marker, paths become relative to `cwd`.
pub fn stable_id(id: &str, cwd: &Path) -> String {
  match id.strip_prefix('\0') {
    Some(virtual_id) => virtual_id.to_string(),
    None => Path::new(id).relative_key(cwd),
  }
}

#[test]
fn test_stable_id() {
  let cwd = Path::new("/game");
  assert_eq!(stable_id("/game/src/index.ts", cwd), "src/index.ts");
  assert_eq!(stable_id("\0virtual:_bundle", cwd), "virtual:_bundle");
  assert_eq!(stable_id("/elsewhere/lib.js", cwd), "/elsewhere/lib.js");
}
