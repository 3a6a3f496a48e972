use rustc_hash::FxHashSet;

use crate::types::{module::Module, IndexModules, ModuleIdx};

/// Dependencies come before their importers, in import order, starting from `entry`.
pub fn sort_modules(modules: &IndexModules, entry: ModuleIdx) -> Vec<ModuleIdx> {
  fn visit(
    modules: &IndexModules,
    idx: ModuleIdx,
    visited: &mut FxHashSet<ModuleIdx>,
    sorted: &mut Vec<ModuleIdx>,
  ) {
    if !visited.insert(idx) {
      return;
    }
    if let Module::Normal(module) = &modules[idx] {
      for record in &module.import_records {
        visit(modules, record.resolved_module(), visited, sorted);
      }
    }
    sorted.push(idx);
  }

  let mut visited = FxHashSet::default();
  let mut sorted = Vec::with_capacity(modules.len());
  visit(modules, entry, &mut visited, &mut sorted);
  sorted
}
