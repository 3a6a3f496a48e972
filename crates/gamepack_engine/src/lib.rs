mod bundler;
mod generate_stage;
mod scan_stage;
mod types;
mod utils;

pub use crate::{
  bundler::{Build, Bundler},
  types::{bundle_output::BundleOutput, input_options::InputOptions},
};
