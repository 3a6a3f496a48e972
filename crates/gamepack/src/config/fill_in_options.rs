use std::path::{Path, PathBuf};

use gamepack_common::{
  BundleConfig, BundleKind, GameMetadata, InputConfig, LoadedConfiguration, ModuleFormat,
  OutputConfig, PartialGameMetadata, PartialInputConfig, PartialOutputConfig, UserConfig,
};
use gamepack_error::{BuildResult, BundlerError};
use gamepack_utils::{concat_string, sanitize_file_name::sanitize_file_name, slugify::slugify};
use sugar_path::SugarPath;

const JS_EXTENSIONS: [&str; 4] = ["js", "mjs", "cjs", "jsx"];
const OUTPUT_FILE_SUFFIX: &str = ".game-bundle.js";
/// Stem used when the game name sanitizes to nothing.
const FALLBACK_FILE_STEM: &str = "game";

/// Completes a user configuration. `config_location` must be absolute, every relative path
/// is anchored there.
pub fn fill_in_options(config_location: &Path, user_config: UserConfig) -> BuildResult<LoadedConfiguration> {
  let game = resolve_game(user_config.game.unwrap_or_default())?;

  let bundler = user_config.bundler.unwrap_or_default();
  let PartialInputConfig { file: input_file, ts } = bundler.input.unwrap_or_default();
  let PartialOutputConfig { file: output_file, bundle, format, minify } =
    bundler.output.unwrap_or_default();

  let ts = ts.unwrap_or_else(|| default_ts(input_file.as_deref()));
  let input = InputConfig { file: resolve_input_file(config_location, input_file, ts), ts };
  let output = OutputConfig {
    file: resolve_output_file(config_location, output_file, &game.name),
    bundle: bundle.unwrap_or_else(|| BundleKind::default().to_string()),
    format: format.unwrap_or_else(|| ModuleFormat::default().to_string()),
    minify: minify.unwrap_or(false),
  };

  Ok(LoadedConfiguration { bundler: BundleConfig { input, output }, game })
}

fn resolve_game(game: PartialGameMetadata) -> BuildResult<GameMetadata> {
  let Some(name) = game.name.filter(|name| !name.trim().is_empty()) else {
    return Err(BundlerError::ConfigValidation("game.name").into());
  };

  Ok(GameMetadata {
    name,
    author: game.author,
    headline: game.headline,
    description: game.description,
    homepage: game.homepage,
    repository: game.repository,
    options: game.options,
    game_version: game.game_version,
  })
}

/// An explicit JavaScript entry means there is nothing to compile.
fn default_ts(input_file: Option<&Path>) -> bool {
  let is_js = input_file
    .and_then(|file| file.extension())
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| JS_EXTENSIONS.contains(&ext));
  !is_js
}

fn resolve_input_file(config_location: &Path, file: Option<PathBuf>, ts: bool) -> PathBuf {
  let file = file.unwrap_or_else(|| {
    let entry = if ts { "index.ts" } else { "index.js" };
    Path::new("src").join(entry)
  });
  config_location.join(file).normalize()
}

fn resolve_output_file(config_location: &Path, file: Option<PathBuf>, game_name: &str) -> PathBuf {
  let file = file.unwrap_or_else(|| PathBuf::from(default_output_file_name(game_name)));
  config_location.join(file).normalize()
}

fn default_output_file_name(game_name: &str) -> String {
  let stem = sanitize_file_name(&slugify(game_name));
  let stem = if stem.is_empty() { FALLBACK_FILE_STEM } else { stem.as_str() };
  concat_string!(stem, OUTPUT_FILE_SUFFIX)
}

#[cfg(test)]
fn user_config(json: &str) -> UserConfig {
  serde_json::from_str(json).unwrap()
}

#[test]
fn test_requires_game_name() {
  let location = Path::new("/game");
  for json in [r"{}", r#"{ "game": {} }"#, r#"{ "game": { "name": "  " } }"#] {
    let err = fill_in_options(location, user_config(json)).unwrap_err();
    assert!(matches!(err.bundler_error(), Some(BundlerError::ConfigValidation("game.name"))));
    assert_eq!(err.to_string(), "game.name must be defined.");
  }
}

#[test]
fn test_defaults() {
  let config =
    fill_in_options(Path::new("/game"), user_config(r#"{ "game": { "name": "basic", "author": "Bob Basic" } }"#))
      .unwrap();

  assert_eq!(
    config.bundler,
    BundleConfig {
      input: InputConfig { file: PathBuf::from("/game/src/index.ts"), ts: true },
      output: OutputConfig {
        file: PathBuf::from("/game/basic.game-bundle.js"),
        bundle: "standard".to_string(),
        format: "cjs".to_string(),
        minify: false,
      },
    }
  );
  assert_eq!(config.game.author.as_deref(), Some("Bob Basic"));
}

#[test]
fn test_ts_follows_input_file() {
  let fill = |json: &str| fill_in_options(Path::new("/game"), user_config(json)).unwrap().bundler.input;

  let input = fill(r#"{ "game": { "name": "g" }, "bundler": { "input": { "file": "lib/main.js" } } }"#);
  assert_eq!(input, InputConfig { file: PathBuf::from("/game/lib/main.js"), ts: false });

  let input = fill(r#"{ "game": { "name": "g" }, "bundler": { "input": { "file": "lib/main.mjs" } } }"#);
  assert!(!input.ts);

  let input = fill(r#"{ "game": { "name": "g" }, "bundler": { "input": { "file": "lib/main.tsx" } } }"#);
  assert!(input.ts);

  let input = fill(r#"{ "game": { "name": "g" }, "bundler": { "input": { "ts": false } } }"#);
  assert_eq!(input, InputConfig { file: PathBuf::from("/game/src/index.js"), ts: false });

  let input = fill(r#"{ "game": { "name": "g" }, "bundler": { "input": { "file": "/abs/game.js" } } }"#);
  assert_eq!(input.file, PathBuf::from("/abs/game.js"));
}

#[test]
fn test_output_file_name() {
  assert_eq!(default_output_file_name("My Cool Game"), "my-cool-game.game-bundle.js");
  assert_eq!(default_output_file_name("???"), "game.game-bundle.js");

  let config = fill_in_options(
    Path::new("/game"),
    user_config(r#"{ "game": { "name": "g" }, "bundler": { "output": { "file": "dist/out.js", "format": "UMD" } } }"#),
  )
  .unwrap();
  assert_eq!(config.bundler.output.file, PathBuf::from("/game/dist/out.js"));
  // Validated later, when the output options are built.
  assert_eq!(config.bundler.output.format, "UMD");
}
