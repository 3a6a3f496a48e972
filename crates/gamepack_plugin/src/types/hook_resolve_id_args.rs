#[derive(Debug)]
pub struct HookResolveIdArgs<'a> {
  pub specifier: &'a str,
  /// `None` for the entry.
  pub importer: Option<&'a str>,
  pub is_entry: bool,
}
