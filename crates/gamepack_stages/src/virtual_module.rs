use std::borrow::Cow;

use gamepack_common::{ModuleDefFormat, ResolvedId};
use gamepack_plugin::{
  HookLoadArgs, HookLoadOutput, HookLoadReturn, HookResolveIdArgs, HookResolveIdReturn, Plugin,
  PluginContext,
};
use gamepack_utils::{concat_string, indexmap::FxIndexMap};

const VIRTUAL_PREFIX: &str = "\0virtual:";

/// Serves in-memory ES modules under bare specifiers, e.g. `import makeBundle from "_bundle"`.
#[derive(Debug, Default)]
pub struct VirtualPlugin {
  modules: FxIndexMap<String, String>,
}

impl VirtualPlugin {
  pub fn new(modules: impl IntoIterator<Item = (String, String)>) -> Self {
    Self { modules: modules.into_iter().collect() }
  }
}

impl Plugin for VirtualPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("virtual")
  }

  fn resolve_id(&self, _ctx: &PluginContext, args: &HookResolveIdArgs) -> HookResolveIdReturn {
    if self.modules.contains_key(args.specifier) {
      return Ok(Some(ResolvedId::new(concat_string!(VIRTUAL_PREFIX, args.specifier))));
    }
    Ok(None)
  }

  fn load(&self, _ctx: &PluginContext, args: &HookLoadArgs) -> HookLoadReturn {
    let Some(code) = args.id.strip_prefix(VIRTUAL_PREFIX).and_then(|name| self.modules.get(name))
    else {
      return Ok(None);
    };
    Ok(Some(HookLoadOutput { code: code.clone(), module_def_format: Some(ModuleDefFormat::Esm) }))
  }
}

#[test]
fn test_virtual_module() {
  let plugin = VirtualPlugin::new([("_bundle".to_string(), "export default 1;".to_string())]);
  let ctx = crate::test_context();

  let resolved = plugin
    .resolve_id(&ctx, &HookResolveIdArgs { specifier: "_bundle", importer: None, is_entry: false })
    .unwrap()
    .unwrap();
  assert_eq!(resolved.id.as_str(), "\0virtual:_bundle");
  assert!(resolved.is_virtual());

  let loaded = plugin.load(&ctx, &HookLoadArgs { id: &resolved.id }).unwrap().unwrap();
  assert_eq!(loaded.code, "export default 1;");
  assert_eq!(loaded.module_def_format, Some(ModuleDefFormat::Esm));

  let other = HookResolveIdArgs { specifier: "regal", importer: None, is_entry: false };
  assert!(plugin.resolve_id(&ctx, &other).unwrap().is_none());
  assert!(plugin.load(&ctx, &HookLoadArgs { id: "/game/src/index.js" }).unwrap().is_none());
}
