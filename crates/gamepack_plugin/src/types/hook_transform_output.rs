use gamepack_common::ModuleDefFormat;

#[derive(Debug, Default)]
pub struct HookTransformOutput {
  /// `None` keeps the code produced by previous hooks.
  pub code: Option<String>,
  pub module_def_format: Option<ModuleDefFormat>,
}
