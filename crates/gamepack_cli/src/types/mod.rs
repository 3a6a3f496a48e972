pub mod bundle_kind;
pub mod module_format;
