use arcstr::ArcStr;
use gamepack_common::ModuleDefFormat;
use oxc_index::IndexVec;

use super::{
  import_record::ResolvedImportRecord,
  scan_result::ScanResult,
  ImportRecordIdx, ModuleIdx,
};

#[derive(Debug)]
pub struct NormalModule {
  pub idx: ModuleIdx,
  /// Resolved id: an absolute path, or a `\0` prefixed virtual id.
  pub id: ArcStr,
  /// `id` relative to the cwd, printed as the registry key of the module.
  pub stable_id: String,
  /// Code after every `transform` hook ran.
  pub source: ArcStr,
  pub module_def_format: ModuleDefFormat,
  pub scan_result: ScanResult,
  pub import_records: IndexVec<ImportRecordIdx, ResolvedImportRecord>,
}

#[derive(Debug)]
pub struct ExternalModule {
  pub idx: ModuleIdx,
  /// The specifier left to the host, e.g. `regal` or `fs`.
  pub name: ArcStr,
  pub stable_id: String,
}

impl ExternalModule {
  pub fn new(idx: ModuleIdx, name: ArcStr) -> Self {
    let stable_id = format!("external:{name}");
    Self { idx, name, stable_id }
  }
}

#[derive(Debug)]
pub enum Module {
  Normal(Box<NormalModule>),
  External(Box<ExternalModule>),
}

impl Module {
  pub fn idx(&self) -> ModuleIdx {
    match self {
      Self::Normal(v) => v.idx,
      Self::External(v) => v.idx,
    }
  }

  pub fn id(&self) -> &str {
    match self {
      Self::Normal(v) => &v.id,
      Self::External(v) => &v.name,
    }
  }

  pub fn stable_id(&self) -> &str {
    match self {
      Self::Normal(v) => &v.stable_id,
      Self::External(v) => &v.stable_id,
    }
  }

  pub fn as_normal(&self) -> Option<&NormalModule> {
    match self {
      Self::Normal(v) => Some(v),
      Self::External(_) => None,
    }
  }

  pub fn as_external(&self) -> Option<&ExternalModule> {
    match self {
      Self::External(v) => Some(v),
      Self::Normal(_) => None,
    }
  }
}

impl From<NormalModule> for Module {
  fn from(module: NormalModule) -> Self {
    Self::Normal(Box::new(module))
  }
}

impl From<ExternalModule> for Module {
  fn from(module: ExternalModule) -> Self {
    Self::External(Box::new(module))
  }
}
