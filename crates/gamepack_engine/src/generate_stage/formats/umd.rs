use gamepack_common::SourceJoiner;
use gamepack_error::BuildResult;
use gamepack_utils::{
  concat_string,
  ecmascript::{legitimize_identifier_name, property_access_str, to_string_literal},
};
use itertools::Itertools;

use super::GenerateContext;

/// The factory receives the externals and returns the entry exports:
///
/// ```js
/// (function (global, factory) {
///   typeof exports === 'object' && typeof module !== 'undefined' ? module.exports = factory(require("regal")) :
///   typeof define === 'function' && define.amd ? define(["regal"], factory) :
///   (global = typeof globalThis !== 'undefined' ? globalThis : global || self, global.Game = factory(global.regal));
/// })(this, (function (__external_0) { 'use strict';
/// <runtime>
/// <modules>
/// return __toCommonJS(__require("src/index.ts"));
/// }));
/// ```
pub fn render_umd<'code>(
  ctx: &GenerateContext<'_>,
  runtime: &'code str,
  module_sources: &'code [String],
) -> BuildResult<SourceJoiner<'code>> {
  let Some(name) = ctx.name else {
    return Err(anyhow::anyhow!("You must supply output.name for UMD bundles.").into());
  };

  let externals = ctx.external_bindings().collect::<Vec<_>>();
  let cjs_deps = externals
    .iter()
    .map(|(specifier, _)| concat_string!("require(", to_string_literal(specifier), ")"))
    .join(", ");
  let amd_deps = externals.iter().map(|(specifier, _)| to_string_literal(specifier)).join(", ");
  let global_deps = externals
    .iter()
    .map(|(specifier, _)| property_access_str("global", &legitimize_identifier_name(specifier)))
    .join(", ");
  let factory_params = externals.iter().map(|(_, binding)| *binding).join(", ");

  let mut source_joiner = SourceJoiner::default();

  source_joiner.append_source(concat_string!(
    "(function (global, factory) {\n",
    "  typeof exports === 'object' && typeof module !== 'undefined' ? module.exports = factory(",
    cjs_deps,
    ") :\n",
    "  typeof define === 'function' && define.amd ? define([",
    amd_deps,
    "], factory) :\n",
    "  (global = typeof globalThis !== 'undefined' ? globalThis : global || self, ",
    property_access_str("global", name),
    " = factory(",
    global_deps,
    "));\n",
    "})(this, (function (",
    factory_params,
    ") { 'use strict';\n"
  ));
  source_joiner.append_source(runtime);
  for source in module_sources {
    source_joiner.append_source(source.as_str());
  }
  source_joiner.append_source(concat_string!(
    "return __toCommonJS(",
    ctx.require_entry(),
    ");\n}));\n"
  ));

  Ok(source_joiner)
}
