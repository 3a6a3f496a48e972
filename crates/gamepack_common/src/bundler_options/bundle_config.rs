use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleConfig {
  pub input: InputConfig,
  pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputConfig {
  /// Absolute path of the entry file.
  pub file: PathBuf,
  /// Whether the entry has to be compiled from TypeScript.
  pub ts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
  /// Absolute path of the emitted bundle.
  pub file: PathBuf,
  /// Kind of game bundle. Validated when the stages are assembled.
  pub bundle: String,
  /// Module format. Validated when the output options are built.
  pub format: String,
  pub minify: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialBundleConfig {
  pub input: Option<PartialInputConfig>,
  pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialInputConfig {
  pub file: Option<PathBuf>,
  pub ts: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialOutputConfig {
  pub file: Option<PathBuf>,
  pub bundle: Option<String>,
  pub format: Option<String>,
  pub minify: Option<bool>,
}

impl PartialBundleConfig {
  /// Field-by-field overlay, values in `overrides` win.
  #[must_use]
  pub fn overlay(self, overrides: Self) -> Self {
    Self {
      input: overlay_with(self.input, overrides.input, PartialInputConfig::overlay),
      output: overlay_with(self.output, overrides.output, PartialOutputConfig::overlay),
    }
  }
}

impl PartialInputConfig {
  #[must_use]
  pub fn overlay(self, overrides: Self) -> Self {
    Self { file: overrides.file.or(self.file), ts: overrides.ts.or(self.ts) }
  }
}

impl PartialOutputConfig {
  #[must_use]
  pub fn overlay(self, overrides: Self) -> Self {
    Self {
      file: overrides.file.or(self.file),
      bundle: overrides.bundle.or(self.bundle),
      format: overrides.format.or(self.format),
      minify: overrides.minify.or(self.minify),
    }
  }
}

fn overlay_with<T>(base: Option<T>, overrides: Option<T>, overlay: impl FnOnce(T, T) -> T) -> Option<T> {
  match (base, overrides) {
    (Some(base), Some(overrides)) => Some(overlay(base, overrides)),
    (base, overrides) => overrides.or(base),
  }
}

#[test]
fn test_overlay_is_shallow_per_sub_object() {
  let discovered = PartialBundleConfig {
    input: Some(PartialInputConfig { file: Some("src/main.js".into()), ts: None }),
    output: Some(PartialOutputConfig {
      format: Some("umd".to_string()),
      minify: Some(true),
      ..Default::default()
    }),
  };
  let overrides = PartialBundleConfig {
    input: None,
    output: Some(PartialOutputConfig { minify: Some(false), ..Default::default() }),
  };

  let merged = discovered.overlay(overrides);
  assert_eq!(merged.input.unwrap().file, Some(PathBuf::from("src/main.js")));
  let output = merged.output.unwrap();
  assert_eq!(output.format.as_deref(), Some("umd"));
  assert_eq!(output.minify, Some(false));
}
