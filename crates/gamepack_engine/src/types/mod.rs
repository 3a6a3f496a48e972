pub mod bundle_output;
pub mod import_record;
pub mod input_options;
pub mod module;
pub mod module_loader_msg;
pub mod scan_result;

use std::sync::Arc;

use oxc_index::IndexVec;

use self::{input_options::InputOptions, module::Module};

oxc_index::define_index_type! {
  pub struct ModuleIdx = u32;
}

oxc_index::define_index_type! {
  pub struct ImportRecordIdx = u32;
}

pub type IndexModules = IndexVec<ModuleIdx, Module>;
pub type SharedInputOptions = Arc<InputOptions>;
