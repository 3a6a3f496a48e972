use gamepack_common::ModuleDefFormat;

#[derive(Debug, Default)]
pub struct HookLoadOutput {
  pub code: String,
  pub module_def_format: Option<ModuleDefFormat>,
}
