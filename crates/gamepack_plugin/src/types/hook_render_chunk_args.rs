use gamepack_common::ModuleFormat;

#[derive(Debug)]
pub struct HookRenderChunkArgs<'a> {
  pub code: &'a str,
  pub format: ModuleFormat,
}
