use gamepack_common::SourceJoiner;
use gamepack_utils::concat_string;

use super::GenerateContext;

/// ```js
/// 'use strict';
/// <runtime>
/// <modules>
/// module.exports = __toCommonJS(__require("src/index.ts"));
/// ```
pub fn render_cjs<'code>(
  ctx: &GenerateContext<'_>,
  runtime: &'code str,
  module_sources: &'code [String],
) -> SourceJoiner<'code> {
  let mut source_joiner = SourceJoiner::default();

  source_joiner.append_source("'use strict';\n");
  source_joiner.append_source(runtime);
  for source in module_sources {
    source_joiner.append_source(source.as_str());
  }
  source_joiner.append_source(concat_string!(
    "module.exports = __toCommonJS(",
    ctx.require_entry(),
    ");\n"
  ));

  source_joiner
}
