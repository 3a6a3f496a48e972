use std::borrow::Cow;

use gamepack_common::ModuleFormat;
use gamepack_ecmascript::{EcmaCompiler, SourceType};
use gamepack_plugin::{
  HookRenderChunkArgs, HookRenderChunkOutput, HookRenderChunkReturn, Plugin, PluginContext,
};
use gamepack_utils::concat_string;

/// Minifies the rendered chunk. The preamble is kept verbatim on top of the minified code.
#[derive(Debug, Default)]
pub struct MinifyPlugin {
  preamble: Option<String>,
}

impl MinifyPlugin {
  pub fn new(preamble: Option<String>) -> Self {
    Self { preamble }
  }
}

impl Plugin for MinifyPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("minify")
  }

  fn render_chunk(&self, _ctx: &PluginContext, args: &HookRenderChunkArgs) -> HookRenderChunkReturn {
    let source_type =
      if args.format.keep_esm_import_export_syntax() { SourceType::mjs() } else { SourceType::cjs() };
    let minified = EcmaCompiler::minify(args.code, source_type)?;

    let code = match &self.preamble {
      Some(preamble) => concat_string!(preamble, "\n", minified),
      None => minified,
    };
    Ok(Some(HookRenderChunkOutput { code }))
  }
}

#[test]
fn test_minify_keeps_preamble() {
  let plugin = MinifyPlugin::new(Some("/* header */".to_string()));
  let ctx = crate::test_context();
  let code = "function add(first, second) {\n  return first + second;\n}\nmodule.exports = add;\n";

  let output =
    plugin.render_chunk(&ctx, &HookRenderChunkArgs { code, format: ModuleFormat::Cjs }).unwrap().unwrap();
  assert!(output.code.starts_with("/* header */\n"));
  assert!(output.code.len() < code.len() + "/* header */\n".len());
  assert!(output.code.contains("module.exports"));
}

#[test]
fn test_minify_esm_chunk() {
  let plugin = MinifyPlugin::default();
  let ctx = crate::test_context();
  let code = "const answer = 42;\nexport { answer as default };\n";

  let output =
    plugin.render_chunk(&ctx, &HookRenderChunkArgs { code, format: ModuleFormat::Esm }).unwrap().unwrap();
  assert!(output.code.contains("export"));
}
