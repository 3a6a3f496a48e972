mod adapter;
mod api;
mod codegen;
mod config;
mod output_options;
mod stages;

pub use crate::{
  adapter::{select_adapter, STANDARD_ADAPTER},
  api::{bundle, get_config, GameBundler},
  codegen::{
    footer::{footer, make_bundle_footer, FooterStyle},
    header::header,
  },
  config::{
    discovery::{ConfigDiscovery, DiscoveredConfig, FsConfigDiscovery},
    get_config::LoadConfigOutput,
    package_loader::{FsPackageLoader, PackageLoader},
  },
  output_options::build_output_options,
  stages::build_stages,
};
pub use gamepack_common::*;
pub use gamepack_engine::BundleOutput;
pub use gamepack_error::{BuildError, BuildResult, BuildWarning, BundlerError};
