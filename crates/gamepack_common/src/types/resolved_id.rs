use arcstr::ArcStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedId {
  /// Absolute path for files, the specifier itself for externals, `\0`-prefixed for virtual modules.
  pub id: ArcStr,
  pub is_external: bool,
}

impl ResolvedId {
  pub fn new(id: impl Into<ArcStr>) -> Self {
    Self { id: id.into(), is_external: false }
  }

  pub fn external(id: impl Into<ArcStr>) -> Self {
    Self { id: id.into(), is_external: true }
  }

  pub fn is_virtual(&self) -> bool {
    self.id.starts_with('\0')
  }
}
