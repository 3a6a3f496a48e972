pub mod load_source;
pub mod resolve_id;
pub mod stable_id;
