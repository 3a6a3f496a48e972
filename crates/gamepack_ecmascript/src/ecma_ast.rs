use std::fmt::Debug;

use arcstr::ArcStr;
use oxc::{allocator::Allocator, ast::ast::Program, span::SourceType};
use self_cell::self_cell;

pub struct ProgramOwner {
  pub source: ArcStr,
  pub allocator: Allocator,
}

self_cell!(
  /// Keeps a `Program<'ast>` together with the source text and arena it borrows from.
  pub struct ProgramCell {
    owner: ProgramOwner,

    #[covariant]
    dependent: Program,
  }
);

/// A parsed module.
pub struct EcmaAst {
  pub(crate) program: ProgramCell,
  pub(crate) source_type: SourceType,
}

impl EcmaAst {
  pub fn source(&self) -> &ArcStr {
    &self.program.borrow_owner().source
  }

  pub fn source_type(&self) -> SourceType {
    self.source_type
  }

  pub fn program(&self) -> &Program {
    self.program.borrow_dependent()
  }
}

impl Debug for EcmaAst {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EcmaAst").field("source", &self.source()).finish_non_exhaustive()
  }
}
