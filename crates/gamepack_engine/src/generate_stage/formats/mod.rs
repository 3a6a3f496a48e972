pub mod cjs;
pub mod esm;
pub mod umd;

use gamepack_utils::{ecmascript::to_string_literal, indexmap::FxIndexMap};

use crate::types::{module::Module, IndexModules, ModuleIdx};

/// Everything a format needs to wrap the rendered modules.
pub struct GenerateContext<'a> {
  pub modules: &'a IndexModules,
  pub entry: ModuleIdx,
  pub externals: &'a FxIndexMap<ModuleIdx, String>,
  /// Global name for formats that assign one.
  pub name: Option<&'a str>,
}

impl GenerateContext<'_> {
  /// `__require("<entry>")`
  pub fn require_entry(&self) -> String {
    format!("__require({})", to_string_literal(self.modules[self.entry].stable_id()))
  }

  /// `(name, binding)` of every external, in chunk order.
  pub fn external_bindings(&self) -> impl Iterator<Item = (&str, &str)> {
    self.externals.iter().filter_map(|(idx, binding)| match &self.modules[*idx] {
      Module::External(module) => Some((module.name.as_str(), binding.as_str())),
      Module::Normal(_) => None,
    })
  }
}
