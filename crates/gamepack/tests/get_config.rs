use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use gamepack::{
  BundleConfig, BundlerError, BundlerOptions, BuildWarning, GameBundler, InputConfig,
  LoadConfigOutput, OutputConfig, PartialBundleConfig, PartialOutputConfig,
};
use gamepack_fs::MemoryFileSystem;

fn bundler_with(files: &[(&str, &str)]) -> GameBundler {
  GameBundler::with_file_system(Arc::new(MemoryFileSystem::new(files)), PathBuf::from("/work"))
}

fn options_at(dir: &str) -> BundlerOptions {
  BundlerOptions { config_location: Some(PathBuf::from(dir)), bundler: None }
}

#[test]
fn loads_the_basic_configuration() {
  let bundler = bundler_with(&[
    ("/games/basic/package.json", r#"{ "name": "basic", "author": "Bob Basic" }"#),
    ("/games/basic/src/index.ts", ""),
  ]);

  let LoadConfigOutput { config, warnings, .. } = bundler.get_config(options_at("/games/basic")).unwrap();

  assert_eq!(
    config.bundler,
    BundleConfig {
      input: InputConfig { file: PathBuf::from("/games/basic/src/index.ts"), ts: true },
      output: OutputConfig {
        file: PathBuf::from("/games/basic/basic.game-bundle.js"),
        bundle: "standard".to_string(),
        format: "cjs".to_string(),
        minify: false,
      },
    }
  );
  assert_eq!(config.game.name, "basic");
  assert_eq!(config.game.author.as_deref(), Some("Bob Basic"));
  assert_eq!(config.game.game_version, None);
  assert!(warnings.is_empty());
}

#[test]
fn config_file_wins_over_package_metadata() {
  let bundler = bundler_with(&[
    (
      "/games/quest/package.json",
      r#"{
        "name": "quest-pkg",
        "version": "3.1.4",
        "author": { "name": "Pat", "email": "pat@example.com" },
        "homepage": "https://example.com/quest",
        "repository": { "type": "git", "url": "https://github.com/pat/quest" }
      }"#,
    ),
    (
      "/games/quest/regal.json",
      r#"{
        "game": {
          "name": "The Quest",
          "headline": "A quest",
          "homepage": "https://quest.example.com",
          "gameVersion": "0.0.1",
          "options": { "debug": true }
        },
        "bundler": { "output": { "format": "esm", "minify": true } }
      }"#,
    ),
  ]);

  let LoadConfigOutput { config, warnings, .. } = bundler.get_config(options_at("/games/quest")).unwrap();
  let game = &config.game;

  assert_eq!(game.name, "The Quest");
  assert_eq!(game.headline.as_deref(), Some("A quest"));
  assert_eq!(game.author.as_deref(), Some("Pat <pat@example.com>"));
  assert_eq!(game.homepage.as_deref(), Some("https://quest.example.com"));
  assert_eq!(game.repository.as_deref(), Some("https://github.com/pat/quest"));
  assert_eq!(game.game_version.as_deref(), Some("3.1.4"));
  assert_eq!(game.options.as_ref().and_then(|options| options.get("debug")), Some(&serde_json::Value::Bool(true)));
  assert_eq!(warnings, vec![BuildWarning::IgnoredGameVersion { value: "0.0.1".to_string() }]);

  assert_eq!(config.bundler.output.file, PathBuf::from("/games/quest/the-quest.game-bundle.js"));
  assert_eq!(config.bundler.output.format, "esm");
  assert!(config.bundler.output.minify);
}

#[test]
fn programmatic_options_win() {
  let bundler = bundler_with(&[(
    "/games/basic/package.json",
    r#"{ "name": "basic", "regal": { "bundler": { "output": { "format": "umd", "minify": true } } } }"#,
  )]);

  let options = BundlerOptions {
    config_location: Some(PathBuf::from("/games/basic")),
    bundler: Some(PartialBundleConfig {
      input: None,
      output: Some(PartialOutputConfig { format: Some("cjs".to_string()), ..Default::default() }),
    }),
  };
  let config = bundler.get_config(options).unwrap().config;

  assert_eq!(config.bundler.output.format, "cjs");
  assert!(config.bundler.output.minify);
}

#[test]
fn relative_location_defaults_to_working_directory() {
  let bundler = bundler_with(&[("/work/package.json", r#"{ "name": "here", "version": "1.0.0" }"#)]);

  let output = bundler.get_config(BundlerOptions::default()).unwrap();
  assert_eq!(output.config_location, Path::new("/work"));
  assert_eq!(output.config.bundler.input.file, PathBuf::from("/work/src/index.ts"));
  assert_eq!(output.config.game.game_version.as_deref(), Some("1.0.0"));
}

#[test]
fn missing_name_is_a_validation_error() {
  let bundler = bundler_with(&[("/games/nameless/package.json", r#"{ "version": "1.0.0" }"#)]);

  let err = bundler.get_config(options_at("/games/nameless")).unwrap_err();
  assert!(matches!(err.bundler_error(), Some(BundlerError::ConfigValidation(_))));
  assert_eq!(err.to_string(), "game.name must be defined.");
}

#[test]
fn missing_package_descriptor_is_a_resolution_error() {
  let bundler = bundler_with(&[("/games/lonely/regal.json", r#"{ "game": { "name": "lonely" } }"#)]);

  let err = bundler.get_config(options_at("/games/lonely")).unwrap_err();
  assert!(matches!(
    err.bundler_error(),
    Some(BundlerError::ConfigResolution(path)) if path == Path::new("/games/lonely/package.json")
  ));
}
