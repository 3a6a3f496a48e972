/// How a module defines its exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuleDefFormat {
  /// Decided from the module syntax: ES module syntax, or a plain script.
  #[default]
  Unknown,
  /// `require`, `module.exports` and `exports`. Only set by a stage that handles CommonJS interop.
  Cjs,
  Esm,
}

impl ModuleDefFormat {
  pub fn is_commonjs(&self) -> bool {
    matches!(self, Self::Cjs)
  }
}
