// A wrapper around the `oxc_resolver` crate reading through `gamepack_fs::FileSystem`.

mod builtin_modules;
mod error;
mod resolver;

pub use crate::{
  builtin_modules::is_node_builtin_module,
  error::ResolveError,
  resolver::{ResolveOptions, ResolveReturn, Resolver},
};
