mod bundler_options;
mod types;

pub use bundler_options::{
  bundle_config::{
    BundleConfig, InputConfig, OutputConfig, PartialBundleConfig, PartialInputConfig,
    PartialOutputConfig,
  },
  bundle_kind::BundleKind,
  game_metadata::{GameMetadata, PartialGameMetadata},
  loaded_configuration::{LoadedConfiguration, UserConfig},
  module_format::ModuleFormat,
  output_options::OutputOptions,
  BundlerOptions,
};

pub use crate::types::{
  module_def_format::ModuleDefFormat,
  output_asset::OutputAsset,
  package_descriptor::{PackageDescriptor, Person, Repository},
  resolved_id::ResolvedId,
  source::Source,
  source_joiner::SourceJoiner,
};
