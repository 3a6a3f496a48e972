const NODE_BUILTIN_MODULES: [&str; 37] = [
  "assert",
  "async_hooks",
  "buffer",
  "child_process",
  "cluster",
  "console",
  "constants",
  "crypto",
  "dgram",
  "diagnostics_channel",
  "dns",
  "domain",
  "events",
  "fs",
  "http",
  "http2",
  "https",
  "inspector",
  "module",
  "net",
  "os",
  "path",
  "perf_hooks",
  "process",
  "punycode",
  "querystring",
  "readline",
  "repl",
  "stream",
  "string_decoder",
  "timers",
  "tls",
  "tty",
  "url",
  "util",
  "vm",
  "zlib",
];

/// `fs`, `fs/promises` and `node:fs` are all builtins.
pub fn is_node_builtin_module(specifier: &str) -> bool {
  if specifier.starts_with("node:") {
    return true;
  }
  let root = specifier.split('/').next().unwrap_or(specifier);
  NODE_BUILTIN_MODULES.contains(&root)
}

#[test]
fn test_is_node_builtin_module() {
  assert!(is_node_builtin_module("fs"));
  assert!(is_node_builtin_module("fs/promises"));
  assert!(is_node_builtin_module("node:test"));
  assert!(!is_node_builtin_module("regal"));
  assert!(!is_node_builtin_module("./fs"));
}
