mod impl_visit;

use arcstr::ArcStr;
use gamepack_common::ModuleDefFormat;
use oxc::{
  ast::ast,
  ast_visit::Visit,
  span::{GetSpan, Span},
};
use oxc_index::IndexVec;

use crate::types::{
  import_record::{ImportKind, RawImportRecord},
  scan_result::{Edit, EditContent, ExportedValue, HoistedImport, ImportedName, ScanResult},
  ImportRecordIdx,
};

/// Local name given to `export default <expression>`.
const DEFAULT_EXPORT_NAME: &str = "__default";

pub struct AstScannerReturn {
  pub result: ScanResult,
  pub import_records: IndexVec<ImportRecordIdx, RawImportRecord>,
}

/// Collects the module syntax of a program and the source edits that replace it.
/// `require` calls are only collected for CommonJS modules.
pub struct AstScanner {
  module_def_format: ModuleDefFormat,
  result: ScanResult,
  import_records: IndexVec<ImportRecordIdx, RawImportRecord>,
}

impl AstScanner {
  pub fn new(module_def_format: ModuleDefFormat) -> Self {
    Self { module_def_format, result: ScanResult::default(), import_records: IndexVec::new() }
  }

  pub fn scan(mut self, program: &ast::Program<'_>) -> AstScannerReturn {
    for stmt in &program.body {
      self.scan_statement(stmt);
    }

    if self.module_def_format.is_commonjs() {
      self.visit_program(program);
    }

    self.result.edits.sort_by_key(|edit| (edit.span.start, edit.span.end));
    AstScannerReturn { result: self.result, import_records: self.import_records }
  }

  fn scan_statement(&mut self, stmt: &ast::Statement<'_>) {
    match stmt {
      ast::Statement::ImportDeclaration(decl) => self.scan_import_decl(decl),
      ast::Statement::ExportNamedDeclaration(decl) => self.scan_export_named_decl(decl),
      ast::Statement::ExportDefaultDeclaration(decl) => self.scan_export_default_decl(decl),
      ast::Statement::ExportAllDeclaration(decl) => self.scan_export_all_decl(decl),
      _ => return,
    }
    self.result.has_module_syntax = true;
  }

  fn scan_import_decl(&mut self, decl: &ast::ImportDeclaration<'_>) {
    self.remove(decl.span);
    if decl.import_kind.is_type() {
      return;
    }

    let record = self.add_import_record(decl.source.value.as_str(), ImportKind::Import);
    let bindings = decl
      .specifiers
      .iter()
      .flatten()
      .filter_map(|spec| match spec {
        ast::ImportDeclarationSpecifier::ImportSpecifier(spec) => (!spec.import_kind.is_type())
          .then(|| (spec.local.name.to_string(), imported_name(&spec.imported))),
        ast::ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => {
          Some((spec.local.name.to_string(), ImportedName::Default))
        }
        ast::ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => {
          Some((spec.local.name.to_string(), ImportedName::Namespace))
        }
      })
      .collect();

    self.result.hoisted_imports.push(HoistedImport { record, bindings, re_export_all: false });
  }

  fn scan_export_named_decl(&mut self, decl: &ast::ExportNamedDeclaration<'_>) {
    if decl.export_kind.is_type() {
      self.remove(decl.span);
      return;
    }

    if let Some(source) = &decl.source {
      // export { foo as bar } from '...'
      self.remove(decl.span);
      let record = self.add_import_record(source.value.as_str(), ImportKind::Import);
      for spec in decl.specifiers.iter().filter(|spec| !spec.export_kind.is_type()) {
        self.add_export(
          spec.exported.name().as_str(),
          ExportedValue::Imported { record, name: imported_name(&spec.local) },
        );
      }
      self.result.hoisted_imports.push(HoistedImport {
        record,
        bindings: vec![],
        re_export_all: false,
      });
    } else if let Some(declaration) = &decl.declaration {
      // export const foo = 1, export function foo() {}
      self.remove(Span::new(decl.span.start, declaration.span().start));
      match declaration {
        ast::Declaration::VariableDeclaration(var_decl) => {
          for declarator in &var_decl.declarations {
            for ident in declarator.id.get_binding_identifiers() {
              self.add_local_export(ident.name.as_str());
            }
          }
        }
        ast::Declaration::FunctionDeclaration(func) => {
          if let Some(id) = &func.id {
            self.add_local_export(id.name.as_str());
          }
        }
        ast::Declaration::ClassDeclaration(class) => {
          if let Some(id) = &class.id {
            self.add_local_export(id.name.as_str());
          }
        }
        _ => {}
      }
    } else {
      // export { foo as bar }
      self.remove(decl.span);
      for spec in decl.specifiers.iter().filter(|spec| !spec.export_kind.is_type()) {
        self.add_export(
          spec.exported.name().as_str(),
          ExportedValue::Local(spec.local.name().to_string()),
        );
      }
    }
  }

  fn scan_export_default_decl(&mut self, decl: &ast::ExportDefaultDeclaration<'_>) {
    let declaration_span = decl.declaration.span();
    let prefix = Span::new(decl.span.start, declaration_span.start);

    let named_declaration = match &decl.declaration {
      ast::ExportDefaultDeclarationKind::FunctionDeclaration(func) => Some(func.id.as_ref()),
      ast::ExportDefaultDeclarationKind::ClassDeclaration(class) => Some(class.id.as_ref()),
      ast::ExportDefaultDeclarationKind::TSInterfaceDeclaration(_) => {
        self.remove(decl.span);
        return;
      }
      _ => None,
    };

    if let Some(Some(id)) = named_declaration {
      // export default function foo() {}
      self.remove(prefix);
      self.add_export("default", ExportedValue::Local(id.name.to_string()));
    } else {
      // export default 1 + 1, export default class {}
      self.replace(prefix, format!("const {DEFAULT_EXPORT_NAME} = "));
      if decl.span.end == declaration_span.end {
        self.replace(Span::new(decl.span.end, decl.span.end), ";".to_string());
      }
      self.add_local_export_as("default", DEFAULT_EXPORT_NAME);
    }
  }

  fn scan_export_all_decl(&mut self, decl: &ast::ExportAllDeclaration<'_>) {
    self.remove(decl.span);
    if decl.export_kind.is_type() {
      return;
    }

    let record = self.add_import_record(decl.source.value.as_str(), ImportKind::Import);
    match &decl.exported {
      // export * as ns from '...'
      Some(exported) => {
        self.add_export(
          exported.name().as_str(),
          ExportedValue::Imported { record, name: ImportedName::Namespace },
        );
        self.result.hoisted_imports.push(HoistedImport {
          record,
          bindings: vec![],
          re_export_all: false,
        });
      }
      None => {
        self.result.hoisted_imports.push(HoistedImport {
          record,
          bindings: vec![],
          re_export_all: true,
        });
      }
    }
  }

  fn add_import_record(&mut self, specifier: &str, kind: ImportKind) -> ImportRecordIdx {
    self.import_records.push(RawImportRecord::new(ArcStr::from(specifier), kind))
  }

  fn add_export(&mut self, exported: &str, value: ExportedValue) {
    self.result.exports.push((exported.to_string(), value));
  }

  fn add_local_export(&mut self, name: &str) {
    self.add_local_export_as(name, name);
  }

  fn add_local_export_as(&mut self, exported: &str, local: &str) {
    self.add_export(exported, ExportedValue::Local(local.to_string()));
  }

  fn remove(&mut self, span: Span) {
    self.replace(span, String::new());
  }

  fn replace(&mut self, span: Span, text: String) {
    self.result.edits.push(Edit { span, content: EditContent::Text(text) });
  }
}

fn imported_name(name: &ast::ModuleExportName<'_>) -> ImportedName {
  let name = name.name();
  if name.as_str() == "default" {
    ImportedName::Default
  } else {
    ImportedName::Named(name.to_string())
  }
}
