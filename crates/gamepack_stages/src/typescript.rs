use std::{borrow::Cow, path::Path};

use gamepack_common::ModuleDefFormat;
use gamepack_ecmascript::{ESTarget, EcmaCompiler};
use gamepack_plugin::{
  HookTransformArgs, HookTransformOutput, HookTransformReturn, Plugin, PluginContext,
};

const TS_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".mts", ".cts"];

/// Strips TypeScript syntax, keeping ES module syntax. Every module is transpiled from scratch.
#[derive(Debug)]
pub struct TypeScriptPlugin {
  target: ESTarget,
}

impl TypeScriptPlugin {
  pub fn new(target: ESTarget) -> Self {
    Self { target }
  }
}

impl Plugin for TypeScriptPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("typescript")
  }

  fn transform(&self, _ctx: &PluginContext, args: &HookTransformArgs) -> HookTransformReturn {
    if !is_typescript_file(args.id) {
      return Ok(None);
    }

    let code = EcmaCompiler::transpile_typescript(args.code, Path::new(args.id), self.target)?;
    Ok(Some(HookTransformOutput { code: Some(code), module_def_format: Some(ModuleDefFormat::Esm) }))
  }
}

fn is_typescript_file(id: &str) -> bool {
  !id.ends_with(".d.ts") && TS_EXTENSIONS.iter().any(|ext| id.ends_with(ext))
}

#[test]
fn test_is_typescript_file() {
  assert!(is_typescript_file("/game/src/index.ts"));
  assert!(is_typescript_file("/game/src/view.tsx"));
  assert!(!is_typescript_file("/game/src/types.d.ts"));
  assert!(!is_typescript_file("/game/src/index.js"));
}

#[test]
fn test_typescript_plugin() {
  let ctx = crate::test_context();
  let plugin = TypeScriptPlugin::new(ESTarget::ESNext);

  let args = HookTransformArgs {
    id: "/game/src/stats.ts",
    code: "export const hp: number = 3;\n",
    module_def_format: ModuleDefFormat::Unknown,
  };
  let output = plugin.transform(&ctx, &args).unwrap().unwrap();
  assert_eq!(output.module_def_format, Some(ModuleDefFormat::Esm));
  assert!(output.code.unwrap().contains("export const hp = 3;"));

  // The same id with new code is transpiled again.
  let args = HookTransformArgs { code: "export const hp: number = 4;\n", ..args };
  assert!(plugin.transform(&ctx, &args).unwrap().unwrap().code.unwrap().contains("export const hp = 4;"));

  let js = HookTransformArgs { id: "/game/src/index.js", ..args };
  assert!(plugin.transform(&ctx, &js).unwrap().is_none());
}
