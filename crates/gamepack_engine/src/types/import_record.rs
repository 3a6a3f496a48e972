use std::fmt::{Debug, Display};

use arcstr::ArcStr;

use super::ModuleIdx;

pub type RawImportRecord = ImportRecord<()>;
pub type ResolvedImportRecord = ImportRecord<ModuleIdx>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ImportKind {
  /// `import foo from 'foo'`, `export { foo } from 'foo'`
  Import,
  /// `require('foo')` in a CommonJS module
  Require,
}

impl Display for ImportKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Import => write!(f, "import-statement"),
      Self::Require => write!(f, "require-call"),
    }
  }
}

#[derive(Debug)]
pub struct ImportRecord<State: Debug> {
  pub state: State,
  /// `./lib.js` in `import { foo } from './lib.js';`
  pub specifier: ArcStr,
  pub kind: ImportKind,
}

impl RawImportRecord {
  pub fn new(specifier: ArcStr, kind: ImportKind) -> Self {
    Self { state: (), specifier, kind }
  }

  pub fn into_resolved(self, resolved_module: ModuleIdx) -> ResolvedImportRecord {
    ResolvedImportRecord { state: resolved_module, specifier: self.specifier, kind: self.kind }
  }
}

impl ResolvedImportRecord {
  pub fn resolved_module(&self) -> ModuleIdx {
    self.state
  }
}
