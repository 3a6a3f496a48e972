use oxc::syntax::identifier;

use crate::concat_string;

const RESERVED_WORDS: [&str; 46] = [
  "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
  "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "implements",
  "import", "in", "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
  "public", "return", "static", "super", "switch", "this", "throw", "true", "try", "typeof", "var",
  "void", "while", "with", "yield",
];

pub fn is_validate_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// Whether `name` can be declared with `const name = ...` in strict mode code.
pub fn is_validate_binding_name(name: &str) -> bool {
  is_validate_identifier_name(name) && !RESERVED_WORDS.contains(&name)
}

/// `obj.prop` when `prop` is a valid identifier, `obj["prop"]` otherwise.
pub fn property_access_str(obj: &str, prop: &str) -> String {
  if is_validate_identifier_name(prop) {
    concat_string!(obj, ".", prop)
  } else {
    concat_string!(obj, "[", to_string_literal(prop), "]")
  }
}

/// Key usable on the left side of `key: value` in an object literal.
pub fn property_key_str(prop: &str) -> String {
  if is_validate_identifier_name(prop) { prop.to_string() } else { to_string_literal(prop) }
}

pub fn to_string_literal(value: &str) -> String {
  serde_json::Value::String(value.to_string()).to_string()
}

/// Turns an arbitrary string such as a package specifier into a usable binding name.
/// `@scope/some-pkg` becomes `scope_somePkg`.
pub fn legitimize_identifier_name(name: &str) -> String {
  let mut legitimized = String::with_capacity(name.len());
  let mut upper_next = false;
  for char in name.chars() {
    if char == '-' {
      upper_next = !legitimized.is_empty();
    } else if char.is_ascii_alphanumeric() || char == '_' || char == '$' {
      if upper_next {
        legitimized.extend(char.to_uppercase());
        upper_next = false;
      } else {
        legitimized.push(char);
      }
    } else if !legitimized.is_empty() && !legitimized.ends_with('_') {
      legitimized.push('_');
      upper_next = false;
    }
  }

  if legitimized.is_empty() || legitimized.starts_with(|c: char| c.is_ascii_digit()) {
    legitimized.insert(0, '_');
  }
  legitimized
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("foo"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name("😈"));
}

#[test]
fn test_is_validate_binding_name() {
  assert!(is_validate_binding_name("bundledGame"));
  assert!(!is_validate_binding_name("default"));
  assert!(!is_validate_binding_name("class"));
  assert!(!is_validate_binding_name("some-key"));
}

#[test]
fn test_property_access_str() {
  assert_eq!(property_access_str("ns", "Game"), "ns.Game");
  assert_eq!(property_access_str("ns", "some-key"), "ns[\"some-key\"]");
  assert_eq!(property_key_str("a b"), "\"a b\"");
}

#[test]
fn test_legitimize_identifier_name() {
  assert_eq!(legitimize_identifier_name("regal"), "regal");
  assert_eq!(legitimize_identifier_name("some-pkg"), "somePkg");
  assert_eq!(legitimize_identifier_name("@scope/some-pkg"), "scope_somePkg");
  assert_eq!(legitimize_identifier_name("3d"), "_3d");
}
