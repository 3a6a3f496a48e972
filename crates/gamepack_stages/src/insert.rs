use std::{
  borrow::Cow,
  path::{Path, PathBuf},
};

use gamepack_plugin::{
  HookTransformArgs, HookTransformOutput, HookTransformReturn, Plugin, PluginContext,
};
use gamepack_utils::concat_string;

/// Appends generated code to the transformed output of a single module.
#[derive(Debug)]
pub struct InsertPlugin {
  include: PathBuf,
  code: String,
}

impl InsertPlugin {
  pub fn append(include: PathBuf, code: String) -> Self {
    Self { include, code }
  }
}

impl Plugin for InsertPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("insert")
  }

  fn transform(&self, _ctx: &PluginContext, args: &HookTransformArgs) -> HookTransformReturn {
    if Path::new(args.id) != self.include.as_path() {
      return Ok(None);
    }

    let separator = if args.code.ends_with('\n') { "" } else { "\n" };
    Ok(Some(HookTransformOutput {
      code: Some(concat_string!(args.code, separator, self.code)),
      module_def_format: None,
    }))
  }
}

#[test]
fn test_insert_only_touches_included_module() {
  use gamepack_common::ModuleDefFormat;

  let plugin = InsertPlugin::append(PathBuf::from("/game/src/index.js"), "footer();\n".to_string());
  let ctx = crate::test_context();
  let transform = |id: &str, code: &str| {
    plugin
      .transform(&ctx, &HookTransformArgs { id, code, module_def_format: ModuleDefFormat::Unknown })
      .unwrap()
      .and_then(|output| output.code)
  };

  assert_eq!(transform("/game/src/index.js", "main();").as_deref(), Some("main();\nfooter();\n"));
  assert_eq!(transform("/game/src/index.js", "main();\n").as_deref(), Some("main();\nfooter();\n"));
  assert_eq!(transform("/game/src/other.js", "main();"), None);
}
