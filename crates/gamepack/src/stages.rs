use std::{path::Path, sync::Arc};

use gamepack_common::LoadedConfiguration;
use gamepack_ecmascript::ESTarget;
use gamepack_error::BuildResult;
use gamepack_plugin::SharedPlugin;
use gamepack_stages::{
  CommonJsPlugin, InsertPlugin, JsonPlugin, MinifyPlugin, NodeResolvePlugin, TypeScriptPlugin,
  VirtualPlugin,
};
use gamepack_utils::concat_string;

use crate::{adapter::select_adapter, codegen::footer::make_bundle_footer, codegen::header::header};

/// Specifier the footer imports the adapter factory from.
const BUNDLE_MODULE: &str = "_bundle";

/// Stages handed to the engine, in hook order:
///
/// `[typescript] insert virtual node-resolve json [commonjs] [minify]`
///
/// `typescript` only for TypeScript entries, `commonjs` only for JavaScript ones.
pub fn build_stages(config: &LoadedConfiguration, config_location: &Path) -> BuildResult<Vec<SharedPlugin>> {
  let adapter = select_adapter(&config.bundler.output.bundle)?;
  let footer = make_bundle_footer(config)?;

  let mut stages: Vec<SharedPlugin> = vec![
    Arc::new(InsertPlugin::append(config.bundler.input.file.clone(), footer)),
    Arc::new(VirtualPlugin::new([(
      BUNDLE_MODULE.to_string(),
      concat_string!("export default ", adapter, ";\n"),
    )])),
    Arc::new(NodeResolvePlugin::new(config_location)),
    Arc::new(JsonPlugin::default()),
  ];

  if config.bundler.input.ts {
    stages.insert(0, Arc::new(TypeScriptPlugin::new(ESTarget::ESNext)));
  } else {
    stages.push(Arc::new(CommonJsPlugin));
  }

  if config.bundler.output.minify {
    stages.push(Arc::new(MinifyPlugin::new(Some(header(config)))));
  }

  Ok(stages)
}

#[cfg(test)]
fn stage_names(config: &LoadedConfiguration) -> Vec<String> {
  build_stages(config, Path::new("/game"))
    .unwrap()
    .iter()
    .map(|stage| stage.name().into_owned())
    .collect()
}

#[cfg(test)]
fn test_config(ts: bool, minify: bool) -> LoadedConfiguration {
  use std::path::PathBuf;

  use gamepack_common::{BundleConfig, GameMetadata, InputConfig, OutputConfig};

  LoadedConfiguration {
    bundler: BundleConfig {
      input: InputConfig { file: PathBuf::from("/game/src/index.ts"), ts },
      output: OutputConfig {
        file: PathBuf::from("/game/basic.game-bundle.js"),
        bundle: "standard".to_string(),
        format: "cjs".to_string(),
        minify,
      },
    },
    game: GameMetadata {
      name: "basic".to_string(),
      author: None,
      headline: None,
      description: None,
      homepage: None,
      repository: None,
      options: None,
      game_version: None,
    },
  }
}

#[test]
fn test_stage_order() {
  assert_eq!(stage_names(&test_config(true, false)), ["typescript", "insert", "virtual", "node-resolve", "json"]);
  assert_eq!(stage_names(&test_config(false, false)), ["insert", "virtual", "node-resolve", "json", "commonjs"]);
  assert_eq!(
    stage_names(&test_config(false, true)),
    ["insert", "virtual", "node-resolve", "json", "commonjs", "minify"]
  );
  assert_eq!(
    stage_names(&test_config(true, true)),
    ["typescript", "insert", "virtual", "node-resolve", "json", "minify"]
  );
}

#[test]
fn test_unknown_bundle_kind() {
  use gamepack_error::BundlerError;

  let mut config = test_config(true, false);
  config.bundler.output.bundle = "Deluxe".to_string();
  let err = build_stages(&config, Path::new("/game")).unwrap_err();
  assert!(matches!(err.bundler_error(), Some(BundlerError::UnsupportedBundleKind(kind)) if kind == "Deluxe"));
}
