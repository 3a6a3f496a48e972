const RESERVED_WINDOWS_NAMES: [&str; 22] = [
  "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
  "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Strips characters that are illegal in file names on common platforms.
/// Reserved names such as `..` or `con` sanitize to an empty string.
pub fn sanitize_file_name(str: &str) -> String {
  let mut sanitized = String::with_capacity(str.len());
  for char in str.chars() {
    if char.is_control() || matches!(char, '/' | '?' | '<' | '>' | '\\' | ':' | '*' | '|' | '"') {
      continue;
    }
    sanitized.push(char);
  }

  let trimmed_len = sanitized.trim_end_matches(&['.', ' '][..]).len();
  sanitized.truncate(trimmed_len);

  let lower = sanitized.to_ascii_lowercase();
  let stem = lower.split('.').next().unwrap_or_default();
  if sanitized.chars().all(|c| c == '.') || RESERVED_WINDOWS_NAMES.contains(&stem) {
    return String::new();
  }

  while sanitized.len() > 255 {
    sanitized.pop();
  }
  sanitized
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("my-cool-game"), "my-cool-game");
  assert_eq!(sanitize_file_name("a/b:c*d?"), "abcd");
  assert_eq!(sanitize_file_name("\0name."), "name");
  assert_eq!(sanitize_file_name(".."), "");
  assert_eq!(sanitize_file_name("con"), "");
  assert_eq!(sanitize_file_name(&"x".repeat(300)).len(), 255);
}
