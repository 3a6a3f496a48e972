use gamepack_common::{LoadedConfiguration, ModuleFormat, OutputOptions};
use gamepack_error::BuildResult;

use crate::codegen::header::header;

/// Global name UMD bundles are exposed under.
const UMD_NAME: &str = "Game";

/// The minifier keeps the header as its preamble, so there is no banner when minifying.
pub fn build_output_options(config: &LoadedConfiguration) -> BuildResult<OutputOptions> {
  let output = &config.bundler.output;
  let format = output.format.parse::<ModuleFormat>()?;

  Ok(OutputOptions {
    file: output.file.clone(),
    format,
    name: format.requires_global_name().then(|| UMD_NAME.to_string()),
    banner: (!output.minify).then(|| header(config)),
  })
}

#[test]
fn test_build_output_options() {
  use std::path::PathBuf;

  use gamepack_common::{BundleConfig, GameMetadata, InputConfig, OutputConfig};
  use gamepack_error::BundlerError;

  let config_with = |format: &str, minify: bool| LoadedConfiguration {
    bundler: BundleConfig {
      input: InputConfig { file: PathBuf::from("/game/src/index.ts"), ts: true },
      output: OutputConfig {
        file: PathBuf::from("/game/basic.game-bundle.js"),
        bundle: "standard".to_string(),
        format: format.to_string(),
        minify,
      },
    },
    game: GameMetadata {
      name: "basic".to_string(),
      author: Some("Bob Basic".to_string()),
      headline: None,
      description: None,
      homepage: None,
      repository: None,
      options: None,
      game_version: Some("1.0.0".to_string()),
    },
  };

  let config = config_with("cjs", false);
  let options = build_output_options(&config).unwrap();
  assert_eq!(options.file, PathBuf::from("/game/basic.game-bundle.js"));
  assert_eq!(options.format, ModuleFormat::Cjs);
  assert_eq!(options.name, None);
  assert_eq!(options.banner, Some(header(&config)));

  let options = build_output_options(&config_with("UMD", true)).unwrap();
  assert_eq!(options.format, ModuleFormat::Umd);
  assert_eq!(options.name.as_deref(), Some("Game"));
  assert_eq!(options.banner, None);

  assert_eq!(build_output_options(&config_with("Esm", false)).unwrap().format, ModuleFormat::Esm);

  let err = build_output_options(&config_with("AMD", false)).unwrap_err();
  assert!(matches!(err.bundler_error(), Some(BundlerError::UnsupportedModuleFormat(format)) if format == "amd"));
  assert_eq!(err.to_string(), "Illegal module format: amd");
}
