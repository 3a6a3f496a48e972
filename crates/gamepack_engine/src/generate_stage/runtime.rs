/// Module registry and interop helpers every chunk starts with.
///
/// - `__require(id)` evaluates a registered module once and returns its `module.exports`.
/// - `__export` defines getters for ES exports and marks the object with `__esModule`.
/// - `__toESM` gives CommonJS exports a namespace shape with a `default`.
/// - `__toCommonJS` unwraps an ES module that only has a default export, as `require` of it expects.
/// - `__namespace` wraps a native namespace object of an external in the esm format.
pub const RUNTIME_CODE: &str = include_str!("runtime.js");
