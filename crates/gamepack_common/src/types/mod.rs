pub mod module_def_format;
pub mod output_asset;
pub mod package_descriptor;
pub mod resolved_id;
pub mod source;
pub mod source_joiner;
