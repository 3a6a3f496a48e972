use gamepack_common::LoadedConfiguration;
use gamepack_error::BuildResult;
use gamepack_utils::concat_string;

/// How the footer pulls in the runtime and exposes the bundled game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterStyle {
  /// `import`/`export`, for entries compiled from TypeScript.
  Module,
  /// `require`/`module.exports`, for plain JavaScript entries.
  Script,
}

impl FooterStyle {
  pub fn for_input(ts: bool) -> Self {
    if ts { Self::Module } else { Self::Script }
  }
}

/// Code appended to the entry module: initializes the game with `metadata` (a JSON object)
/// and exports the adapted game as the module's default value.
pub fn footer(style: FooterStyle, metadata: &str) -> String {
  let init = concat_string!(
    "\n/* Initialize game */\nGame.init(",
    metadata,
    ");\n/* Generate bundle */\nconst bundledGame = makeBundle(Game);\n"
  );

  match style {
    FooterStyle::Module => concat_string!(
      "\nimport { Game } from \"regal\";\nimport makeBundle from \"_bundle\";\n",
      init,
      "\nexport { bundledGame as default };\n"
    ),
    FooterStyle::Script => concat_string!(
      "\nconst Game = require(\"regal\").Game;\nconst makeBundle = require(\"_bundle\");\n",
      init,
      "\nmodule.exports = bundledGame;\n"
    ),
  }
}

pub fn make_bundle_footer(config: &LoadedConfiguration) -> BuildResult<String> {
  let metadata = serde_json::to_string_pretty(&config.game)
    .map_err(|err| anyhow::anyhow!("Could not serialize the game metadata: {err}"))?;
  Ok(footer(FooterStyle::for_input(config.bundler.input.ts), &metadata))
}

#[test]
fn test_footer_styles() {
  let module = footer(FooterStyle::Module, "{}");
  assert!(module.contains("import { Game } from \"regal\";\nimport makeBundle from \"_bundle\";"));
  assert!(module.contains("Game.init({});"));
  assert!(module.contains("const bundledGame = makeBundle(Game);"));
  assert!(module.ends_with("export { bundledGame as default };\n"));
  assert!(!module.contains("require("));

  let script = footer(FooterStyle::Script, "{}");
  assert!(script.contains("const Game = require(\"regal\").Game;\nconst makeBundle = require(\"_bundle\");"));
  assert!(script.contains("Game.init({});"));
  assert!(script.ends_with("module.exports = bundledGame;\n"));
  assert!(!script.contains("import "));

  assert_eq!(FooterStyle::for_input(true), FooterStyle::Module);
  assert_eq!(FooterStyle::for_input(false), FooterStyle::Script);
}
