use gamepack_common::LoadedConfiguration;

const ATTRIBUTION: &str = "Powered by the Regal Framework (https://github.com/regal/regal).";

/// Comment block placed on top of the artifact.
///
/// ```text
/// /**
/// * basic 1.0.0
/// * by Bob Basic
/// *
/// * Powered by the Regal Framework (https://github.com/regal/regal).
/// */
/// ```
pub fn header(config: &LoadedConfiguration) -> String {
  let game = &config.game;
  let mut header = String::from("/**\n* ");
  header.push_str(&game.name);
  if let Some(version) = &game.game_version {
    header.push(' ');
    header.push_str(version);
  }
  header.push('\n');
  if let Some(author) = &game.author {
    header.push_str("* by ");
    header.push_str(author);
    header.push('\n');
  }
  header.push_str("*\n* ");
  header.push_str(ATTRIBUTION);
  header.push_str("\n*/");
  header
}

#[test]
fn test_header() {
  use std::path::PathBuf;

  use gamepack_common::{BundleConfig, GameMetadata, InputConfig, OutputConfig};

  let mut config = LoadedConfiguration {
    bundler: BundleConfig {
      input: InputConfig { file: PathBuf::from("/game/src/index.ts"), ts: true },
      output: OutputConfig {
        file: PathBuf::from("/game/basic.game-bundle.js"),
        bundle: "standard".to_string(),
        format: "cjs".to_string(),
        minify: false,
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

  assert_eq!(
    header(&config),
    "/**\n* basic 1.0.0\n* by Bob Basic\n*\n* Powered by the Regal Framework (https://github.com/regal/regal).\n*/"
  );

  config.game.author = None;
  config.game.game_version = None;
  assert_eq!(
    header(&config),
    "/**\n* basic\n*\n* Powered by the Regal Framework (https://github.com/regal/regal).\n*/"
  );
}
