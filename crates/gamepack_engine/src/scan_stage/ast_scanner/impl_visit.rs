use oxc::{
  ast::ast,
  ast_visit::{walk, Visit},
};

use super::AstScanner;
use crate::types::{
  import_record::ImportKind,
  scan_result::{Edit, EditContent},
};

impl<'ast> Visit<'ast> for AstScanner {
  fn visit_call_expression(&mut self, expr: &ast::CallExpression<'ast>) {
    if let Some(specifier) = as_require_call(expr) {
      let record = self.add_import_record(specifier, ImportKind::Require);
      self.result.edits.push(Edit { span: expr.span, content: EditContent::Require(record) });
      return;
    }
    walk::walk_call_expression(self, expr);
  }
}

/// `require('foo')` with a single string literal argument.
fn as_require_call<'a>(expr: &'a ast::CallExpression<'_>) -> Option<&'a str> {
  let ast::Expression::Identifier(callee) = &expr.callee else {
    return None;
  };
  if callee.name.as_str() != "require" {
    return None;
  }
  match &expr.arguments[..] {
    [ast::Argument::StringLiteral(request)] => Some(request.value.as_str()),
    _ => None,
  }
}
