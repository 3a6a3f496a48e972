#[derive(Debug)]
pub struct HookRenderChunkOutput {
  pub code: String,
}
