use gamepack_common::ModuleFormat;
use gamepack_utils::{
  concat_string,
  ecmascript::{property_access_str, property_key_str, to_string_literal},
  indexmap::FxIndexMap,
};
use itertools::Itertools;
use string_wizard::MagicString;

use crate::types::{
  module::{ExternalModule, NormalModule},
  scan_result::{EditContent, ExportedValue, ImportedName},
  ImportRecordIdx, IndexModules, ModuleIdx,
};

pub struct ModuleFinalizerContext<'a> {
  pub modules: &'a IndexModules,
  /// Binding the host value of each external is available under, in chunk order.
  pub externals: &'a FxIndexMap<ModuleIdx, String>,
  pub format: ModuleFormat,
}

impl ModuleFinalizerContext<'_> {
  fn record_target_key(&self, module: &NormalModule, record: ImportRecordIdx) -> String {
    let target = module.import_records[record].resolved_module();
    to_string_literal(self.modules[target].stable_id())
  }
}

fn import_binding_name(record: ImportRecordIdx) -> String {
  format!("__import_{}", record.index())
}

fn render_imported(binding: &str, name: &ImportedName) -> String {
  match name {
    ImportedName::Default => property_access_str(binding, "default"),
    ImportedName::Namespace => binding.to_string(),
    ImportedName::Named(name) => property_access_str(binding, name),
  }
}

/// Wraps the module in a registry entry. Module syntax is replaced by registry calls:
///
/// ```js
/// import { on } from "regal";
/// export const answer = 42;
/// ```
///
/// becomes
///
/// ```js
/// __modules["src/index.js"] = function (module, exports) {
/// __export(exports, { answer: () => answer });
/// const __import_0 = __toESM(__require("external:regal"));
/// const on = __import_0.on;
/// const answer = 42;
/// };
/// ```
///
/// Imported bindings are copied once the dependency has run, they do not follow later reassignments.
pub fn finalize_normal_module(ctx: &ModuleFinalizerContext, module: &NormalModule) -> String {
  let scan_result = &module.scan_result;
  let mut prologue = String::new();

  if scan_result.has_module_syntax {
    let getters = scan_result
      .exports
      .iter()
      .map(|(exported, value)| {
        let value = match value {
          ExportedValue::Local(local) => local.clone(),
          ExportedValue::Imported { record, name } => {
            render_imported(&import_binding_name(*record), name)
          }
        };
        concat_string!(property_key_str(exported), ": () => ", value)
      })
      .join(", ");
    if getters.is_empty() {
      prologue.push_str("__export(exports, {});\n");
    } else {
      prologue.push_str(&concat_string!("__export(exports, { ", getters, " });\n"));
    }
  }

  for hoisted in &scan_result.hoisted_imports {
    let binding = import_binding_name(hoisted.record);
    let key = ctx.record_target_key(module, hoisted.record);
    prologue.push_str(&concat_string!("const ", binding, " = __toESM(__require(", key, "));\n"));
    for (local, imported) in &hoisted.bindings {
      prologue.push_str(&concat_string!("const ", local, " = ", render_imported(&binding, imported), ";\n"));
    }
    if hoisted.re_export_all {
      prologue.push_str(&concat_string!("__reExport(exports, ", binding, ");\n"));
    }
  }

  let mut magic_string = MagicString::new(module.source.as_str());
  for edit in &scan_result.edits {
    let (start, end) = (edit.span.start as usize, edit.span.end as usize);
    let content = match &edit.content {
      EditContent::Text(text) => text.clone(),
      EditContent::Require(record) => {
        concat_string!("__toCommonJS(__require(", ctx.record_target_key(module, *record), "))")
      }
    };
    if start == end {
      magic_string.append_left(start, content);
    } else if content.is_empty() {
      magic_string.remove(start, end);
    } else {
      magic_string.update(start, end, content);
    }
  }
  let body = magic_string.to_string();

  concat_string!(
    "// ",
    module.stable_id,
    "\n__modules[",
    to_string_literal(&module.stable_id),
    "] = function (module, exports) {\n",
    prologue,
    body.trim_end(),
    "\n};"
  )
}

/// Externals are registry entries too, so importers do not care where a module comes from.
pub fn finalize_external_module(ctx: &ModuleFinalizerContext, module: &ExternalModule) -> String {
  let binding = ctx.externals.get(&module.idx).map_or("undefined", String::as_str);
  let value = match ctx.format {
    ModuleFormat::Cjs => concat_string!("require(", to_string_literal(&module.name), ")"),
    ModuleFormat::Esm => concat_string!("__namespace(", binding, ")"),
    ModuleFormat::Umd => binding.to_string(),
  };
  concat_string!(
    "__modules[",
    to_string_literal(&module.stable_id),
    "] = function (module) {\nmodule.exports = ",
    value,
    ";\n};"
  )
}

#[test]
fn test_finalize_normal_module_applies_edits() {
  use arcstr::ArcStr;
  use gamepack_common::ModuleDefFormat;
  use oxc::span::Span;
  use oxc_index::IndexVec;

  use crate::types::{
    import_record::{ImportKind, RawImportRecord},
    scan_result::{Edit, ScanResult},
  };

  let source = "const a = require('./a');\nexport default a + 1";
  let dep = ModuleIdx::from_usize(1);
  let scan_result = ScanResult {
    has_module_syntax: true,
    hoisted_imports: vec![],
    exports: vec![("default".to_string(), ExportedValue::Local("__default".to_string()))],
    edits: vec![
      Edit { span: Span::new(10, 24), content: EditContent::Require(ImportRecordIdx::from_usize(0)) },
      Edit { span: Span::new(26, 41), content: EditContent::Text("const __default = ".to_string()) },
      Edit { span: Span::new(46, 46), content: EditContent::Text(";".to_string()) },
    ],
  };
  let entry = NormalModule {
    idx: ModuleIdx::from_usize(0),
    id: ArcStr::from("/game/src/index.js"),
    stable_id: "src/index.js".to_string(),
    source: ArcStr::from(source),
    module_def_format: ModuleDefFormat::Cjs,
    scan_result,
    import_records: IndexVec::from_vec(vec![
      RawImportRecord::new(ArcStr::from("./a"), ImportKind::Require).into_resolved(dep),
    ]),
  };

  let mut modules = IndexModules::new();
  modules.push(ExternalModule::new(ModuleIdx::from_usize(0), ArcStr::from("unused")).into());
  modules.push(ExternalModule::new(dep, ArcStr::from("a")).into());
  let externals = FxIndexMap::default();
  let ctx = ModuleFinalizerContext { modules: &modules, externals: &externals, format: ModuleFormat::Cjs };

  let code = finalize_normal_module(&ctx, &entry);
  assert!(code.starts_with("// src/index.js\n__modules[\"src/index.js\"] = function (module, exports) {\n"));
  assert!(code.contains("const a = __toCommonJS(__require(\"external:a\"));\n"));
  assert!(code.ends_with("const __default = a + 1;\n};"));
}
