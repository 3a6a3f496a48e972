use std::borrow::Cow;

use gamepack_common::ModuleDefFormat;
use gamepack_ecmascript::{EcmaCompiler, SourceType};
use gamepack_plugin::{
  HookTransformArgs, HookTransformOutput, HookTransformReturn, Plugin, PluginContext,
};
use oxc::{
  ast::ast,
  ast_visit::{walk, Visit},
};

/// Flags modules using `require`, `module.exports` or `exports.*` as CommonJS, so their
/// `require("…")` calls are bundled. ES module syntax in the same file keeps working.
#[derive(Debug, Default)]
pub struct CommonJsPlugin;

impl Plugin for CommonJsPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("commonjs")
  }

  fn transform(&self, _ctx: &PluginContext, args: &HookTransformArgs) -> HookTransformReturn {
    if args.module_def_format.is_commonjs() || !is_script_file(args.id) {
      return Ok(None);
    }

    let ast = EcmaCompiler::parse(args.code, SourceType::mjs())
      .map_err(|err| anyhow::anyhow!("Failed to parse {}: {err}", args.id))?;
    let mut detector = CommonJsDetector::default();
    detector.visit_program(ast.program());

    if !detector.uses_commonjs {
      return Ok(None);
    }
    Ok(Some(HookTransformOutput { code: None, module_def_format: Some(ModuleDefFormat::Cjs) }))
  }
}

fn is_script_file(id: &str) -> bool {
  [".js", ".cjs", ".mjs", ".jsx"].iter().any(|ext| id.ends_with(ext))
}

#[derive(Default)]
struct CommonJsDetector {
  uses_commonjs: bool,
}

impl<'ast> Visit<'ast> for CommonJsDetector {
  fn visit_call_expression(&mut self, expr: &ast::CallExpression<'ast>) {
    if matches!(&expr.callee, ast::Expression::Identifier(callee) if callee.name.as_str() == "require") {
      self.uses_commonjs = true;
      return;
    }
    walk::walk_call_expression(self, expr);
  }

  fn visit_static_member_expression(&mut self, expr: &ast::StaticMemberExpression<'ast>) {
    if let ast::Expression::Identifier(object) = &expr.object {
      let (object, property) = (object.name.as_str(), expr.property.name.as_str());
      if object == "exports" || (object == "module" && property == "exports") {
        self.uses_commonjs = true;
        return;
      }
    }
    walk::walk_static_member_expression(self, expr);
  }
}

#[test]
fn test_commonjs_detection() {
  let plugin = CommonJsPlugin;
  let ctx = crate::test_context();
  let format_of = |code: &str| {
    plugin
      .transform(
        &ctx,
        &HookTransformArgs { id: "/game/src/index.js", code, module_def_format: ModuleDefFormat::Unknown },
      )
      .unwrap()
      .and_then(|output| output.module_def_format)
  };

  assert_eq!(format_of("const { Game } = require(\"regal\");"), Some(ModuleDefFormat::Cjs));
  assert_eq!(format_of("module.exports = 1;"), Some(ModuleDefFormat::Cjs));
  assert_eq!(format_of("exports.answer = 42;"), Some(ModuleDefFormat::Cjs));
  assert_eq!(
    format_of("import { on } from \"regal\";\nconst Game = require(\"regal\").Game;"),
    Some(ModuleDefFormat::Cjs)
  );
  assert_eq!(format_of("export const answer = 42;"), None);
  assert_eq!(format_of("const module = {}; module.id = 1;"), None);
}
