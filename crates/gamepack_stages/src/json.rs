use std::borrow::Cow;

use gamepack_common::ModuleDefFormat;
use gamepack_plugin::{
  HookTransformArgs, HookTransformOutput, HookTransformReturn, Plugin, PluginContext,
};
use gamepack_utils::{
  concat_string,
  ecmascript::{is_validate_binding_name, property_key_str},
};
use serde_json::Value;

/// Turns `.json` files into ES modules. Top-level keys that are valid binding names
/// are also exported by name.
#[derive(Debug)]
pub struct JsonPlugin {
  exclude: Vec<String>,
}

impl JsonPlugin {
  /// Files whose path contains any of the `exclude` segments are left alone.
  pub fn new(exclude: Vec<String>) -> Self {
    Self { exclude }
  }

  fn is_excluded(&self, id: &str) -> bool {
    let normalized = id.replace('\\', "/");
    self
      .exclude
      .iter()
      .any(|segment| normalized.split('/').any(|component| component == segment.as_str()))
  }
}

impl Default for JsonPlugin {
  fn default() -> Self {
    Self::new(vec!["node_modules".to_string()])
  }
}

impl Plugin for JsonPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("json")
  }

  fn transform(&self, _ctx: &PluginContext, args: &HookTransformArgs) -> HookTransformReturn {
    if !args.id.ends_with(".json") || self.is_excluded(args.id) {
      return Ok(None);
    }

    let value: Value = serde_json::from_str(args.code)
      .map_err(|err| anyhow::anyhow!("Could not parse JSON file {}: {err}", args.id))?;

    Ok(Some(HookTransformOutput {
      code: Some(json_to_esm(&value)),
      module_def_format: Some(ModuleDefFormat::Esm),
    }))
  }
}

fn json_to_esm(value: &Value) -> String {
  let Value::Object(object) = value else {
    return concat_string!("export default ", value.to_string(), ";\n");
  };

  let mut code = String::new();
  let mut properties = Vec::with_capacity(object.len());
  for (key, value) in object {
    if is_validate_binding_name(key) {
      code.push_str(&concat_string!("export const ", key, " = ", value.to_string(), ";\n"));
      properties.push(key.clone());
    } else {
      properties.push(concat_string!(property_key_str(key), ": ", value.to_string()));
    }
  }

  if properties.is_empty() {
    code.push_str("export default {};\n");
  } else {
    code.push_str(&concat_string!("export default {\n  ", properties.join(",\n  "), "\n};\n"));
  }
  code
}

#[test]
fn test_json_to_esm() {
  use serde_json::json;

  let code = json_to_esm(&json!({ "title": "Quest", "max-hp": 10, "default": true }));
  assert_eq!(
    code,
    "export const title = \"Quest\";\nexport default {\n  title,\n  \"max-hp\": 10,\n  default: true\n};\n"
  );
  assert_eq!(json_to_esm(&json!([1, 2])), "export default [1,2];\n");
  assert_eq!(json_to_esm(&json!({})), "export default {};\n");
}

#[test]
fn test_json_plugin_skips_excluded_and_other_files() {
  let plugin = JsonPlugin::default();
  let ctx = crate::test_context();
  let transform = |id: &str, code: &str| {
    plugin.transform(&ctx, &HookTransformArgs { id, code, module_def_format: ModuleDefFormat::Unknown })
  };

  let output = transform("/game/src/data.json", r#"{ "hp": 3 }"#).unwrap().unwrap();
  assert_eq!(output.module_def_format, Some(ModuleDefFormat::Esm));
  assert!(output.code.unwrap().starts_with("export const hp = 3;"));

  assert!(transform("/game/node_modules/pkg/data.json", "{}").unwrap().is_none());
  assert!(transform("/game/src/index.js", "{").unwrap().is_none());
  assert!(transform("/game/src/broken.json", "{").is_err());
}
