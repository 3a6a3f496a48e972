use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub file: PathBuf,
  pub content: String,
}

impl OutputAsset {
  pub fn content_as_bytes(&self) -> &[u8] {
    self.content.as_bytes()
  }
}
