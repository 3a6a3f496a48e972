pub mod discovery;
pub mod fill_in_options;
pub mod get_config;
pub mod load_user_config;
pub mod package_loader;
