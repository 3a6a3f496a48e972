use gamepack_common::ResolvedId;
use gamepack_error::BuildWarning;
use oxc_index::IndexVec;

use super::{import_record::RawImportRecord, module::NormalModule, ImportRecordIdx};

pub struct NormalModuleTaskResult {
  /// `import_records` is filled by the loader.
  pub module: NormalModule,
  pub raw_import_records: IndexVec<ImportRecordIdx, RawImportRecord>,
  pub resolved_deps: IndexVec<ImportRecordIdx, ResolvedId>,
  pub warnings: Vec<BuildWarning>,
}

pub enum ModuleLoaderMsg {
  NormalModuleDone(Box<NormalModuleTaskResult>),
  BuildErrors(Vec<anyhow::Error>),
}
