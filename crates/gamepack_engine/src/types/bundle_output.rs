use gamepack_common::OutputAsset;
use gamepack_error::BuildWarning;

#[derive(Debug, Default)]
pub struct BundleOutput {
  pub assets: Vec<OutputAsset>,
  pub warnings: Vec<BuildWarning>,
}
