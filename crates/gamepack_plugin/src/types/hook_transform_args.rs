use gamepack_common::ModuleDefFormat;

#[derive(Debug)]
pub struct HookTransformArgs<'a> {
  pub id: &'a str,
  pub code: &'a str,
  /// Format decided by earlier `load`/`transform` hooks.
  pub module_def_format: ModuleDefFormat,
}
