use oxc::span::Span;

use super::ImportRecordIdx;

/// What the finalizer needs to turn a module into a registry entry.
#[derive(Debug, Default)]
pub struct ScanResult {
  /// Whether the module has `import` or `export` statements.
  pub has_module_syntax: bool,
  /// Statements with a source, in source order. They run before the module body.
  pub hoisted_imports: Vec<HoistedImport>,
  /// `exported name -> value` of the module's own exports.
  pub exports: Vec<(String, ExportedValue)>,
  /// Source rewrites, sorted by position and never overlapping.
  pub edits: Vec<Edit>,
}

#[derive(Debug)]
pub struct HoistedImport {
  pub record: ImportRecordIdx,
  /// `(local, imported)` pairs.
  pub bindings: Vec<(String, ImportedName)>,
  /// `export * from '...'`
  pub re_export_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedName {
  Default,
  Namespace,
  Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportedValue {
  /// A binding declared in the module.
  Local(String),
  /// `export { foo } from '...'` and `export * as foo from '...'`
  Imported { record: ImportRecordIdx, name: ImportedName },
}

#[derive(Debug)]
pub struct Edit {
  pub span: Span,
  pub content: EditContent,
}

#[derive(Debug)]
pub enum EditContent {
  Text(String),
  /// A `require('...')` call, replaced by the registry lookup of the record.
  Require(ImportRecordIdx),
}

impl ScanResult {
  pub fn export_names(&self) -> impl Iterator<Item = &str> {
    self.exports.iter().map(|(exported, _)| exported.as_str())
  }
}
