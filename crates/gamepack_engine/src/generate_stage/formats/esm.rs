use gamepack_common::SourceJoiner;
use gamepack_utils::{
  concat_string,
  ecmascript::{is_validate_binding_name, to_string_literal},
};
use itertools::Itertools;

use super::GenerateContext;
use crate::types::module::Module;

/// Externals are imported as namespaces, the entry exports are re-exported statically:
///
/// ```js
/// import * as __external_0 from "regal";
/// <runtime>
/// <modules>
/// const __entry = __require("src/index.ts");
/// export default __entry.default;
/// ```
pub fn render_esm<'code>(
  ctx: &GenerateContext<'_>,
  runtime: &'code str,
  module_sources: &'code [String],
) -> SourceJoiner<'code> {
  let mut source_joiner = SourceJoiner::default();

  let imports = ctx
    .external_bindings()
    .map(|(name, binding)| {
      concat_string!("import * as ", binding, " from ", to_string_literal(name), ";")
    })
    .join("\n");
  if !imports.is_empty() {
    source_joiner.append_source(imports);
  }

  source_joiner.append_source(runtime);
  for source in module_sources {
    source_joiner.append_source(source.as_str());
  }

  source_joiner.append_source(concat_string!("const __entry = ", ctx.require_entry(), ";"));
  source_joiner.append_source(render_entry_exports(ctx));

  source_joiner
}

fn render_entry_exports(ctx: &GenerateContext<'_>) -> String {
  let entry = match &ctx.modules[ctx.entry] {
    Module::Normal(module) if module.scan_result.has_module_syntax => module,
    // `module.exports` of a CommonJS entry is its default export.
    _ => return "export default __entry;\n".to_string(),
  };

  let mut exports = String::new();
  let export_names = entry.scan_result.export_names().collect::<Vec<_>>();
  if export_names.contains(&"default") {
    exports.push_str("export default __entry.default;\n");
  }
  let named = export_names.into_iter().filter(|name| is_validate_binding_name(name)).join(", ");
  if !named.is_empty() {
    exports.push_str(&concat_string!("export const { ", named, " } = __entry;\n"));
  }
  exports
}
