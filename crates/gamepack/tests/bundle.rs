use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use gamepack::{
  header, BuildWarning, BundlerError, BundlerOptions, GameBundler, PartialBundleConfig,
  PartialInputConfig, PartialOutputConfig,
};
use gamepack_fs::{FileSystem, MemoryFileSystem, OxcResolverFileSystem};

const TS_GAME: &str = r#"import { onStartCommand, onPlayerCommand, on, noop } from "regal";

interface State {
  num: number;
}

const init = on<State>("INIT", game => {
  game.output.write("Game initialized to zero.");
  game.state.num = 0;
});

onStartCommand(init);
onPlayerCommand((cmd: string) => game => {
  game.output.write(`Command not recognized: '${cmd}'.`);
  return noop;
});
"#;

const JS_GAME: &str = r#"const regal = require("regal");
const { describe } = require("./describe");

const init = regal.on("INIT", game => {
  game.output.write(describe(game));
});

regal.onStartCommand(init);
"#;

const JS_HELPER: &str = "exports.describe = game => `Game at ${game.state.num}.`;\n";

struct Fixture {
  fs: Arc<MemoryFileSystem>,
  bundler: GameBundler,
}

fn fixture<P: AsRef<Path>, C: AsRef<str>>(files: &[(P, C)]) -> Fixture {
  let fs = Arc::new(MemoryFileSystem::new(files));
  let bundler = GameBundler::with_file_system(Arc::clone(&fs) as Arc<dyn FileSystem>, PathBuf::from("/"));
  Fixture { fs, bundler }
}

fn ts_game(dir: &str, regal_config: &str) -> Vec<(String, String)> {
  vec![
    (
      format!("{dir}/package.json"),
      format!(r#"{{ "name": "basic", "version": "1.0.0", "author": "Bob Basic", "regal": {regal_config} }}"#),
    ),
    (format!("{dir}/src/index.ts"), TS_GAME.to_string()),
  ]
}

fn at(dir: &str) -> BundlerOptions {
  BundlerOptions { config_location: Some(PathBuf::from(dir)), bundler: None }
}

fn read(fs: &MemoryFileSystem, path: &str) -> String {
  fs.read_to_string(Path::new(path)).unwrap()
}

#[tokio::test]
async fn bundles_a_typescript_game() {
  let Fixture { fs, bundler } = fixture(&ts_game("/games/basic", "{}"));

  let output = bundler.bundle(at("/games/basic")).await.unwrap();
  let code = read(&fs, "/games/basic/basic.game-bundle.js");
  let config = bundler.get_config(at("/games/basic")).unwrap().config;

  assert_eq!(output.assets.len(), 1);
  assert_eq!(output.assets[0].content, code);
  assert!(code.starts_with(&format!("{}\n'use strict';", header(&config))));

  // Types are stripped and the footer is appended to the entry.
  assert!(!code.contains("interface State"));
  assert!(code.contains("__modules[\"src/index.ts\"] = function (module, exports) {"));
  assert!(code.contains("Game.init({\n  \"name\": \"basic\",\n  \"author\": \"Bob Basic\",\n  \"gameVersion\": \"1.0.0\"\n});"));
  assert!(code.contains("const bundledGame = makeBundle(Game);"));
  assert!(code.contains("__export(exports, { default: () => bundledGame });"));

  // The adapter comes from a virtual module, the runtime stays external.
  assert!(code.contains("__modules[\"virtual:_bundle\"]"));
  assert!(code.contains("postOptionCommand: game.postOptionCommand.bind(game)"));
  assert!(code.contains("module.exports = require(\"regal\");"));
  assert!(code.ends_with("module.exports = __toCommonJS(__require(\"src/index.ts\"));\n"));

  assert_eq!(
    output.warnings,
    vec![BuildWarning::UnresolvedImport { specifier: "regal".to_string(), importer: "src/index.ts".to_string() }]
  );
}

#[tokio::test]
async fn bundles_a_javascript_game() {
  let Fixture { fs, bundler } = fixture(&[
    ("/games/js/package.json", r#"{ "name": "js-basic", "version": "1.0.0" }"#),
    ("/games/js/src/index.js", JS_GAME),
    ("/games/js/src/describe.js", JS_HELPER),
  ]);

  let options = BundlerOptions {
    config_location: Some(PathBuf::from("/games/js")),
    bundler: Some(PartialBundleConfig {
      input: Some(PartialInputConfig { file: None, ts: Some(false) }),
      output: None,
    }),
  };
  bundler.bundle(options).await.unwrap();
  let code = read(&fs, "/games/js/js-basic.game-bundle.js");

  assert!(code.contains("const Game = __toCommonJS(__require(\"external:regal\")).Game;"));
  assert!(code.contains("const makeBundle = __toCommonJS(__require(\"virtual:_bundle\"));"));
  assert!(code.contains("const { describe } = __toCommonJS(__require(\"src/describe.js\"));"));
  assert!(code.contains("module.exports = bundledGame;"));
  assert!(code.find("__modules[\"src/describe.js\"]").unwrap() < code.find("__modules[\"src/index.js\"]").unwrap());
}

#[tokio::test]
async fn javascript_layout_needs_ts_disabled() {
  let Fixture { bundler, .. } = fixture(&[
    ("/games/js/package.json", r#"{ "name": "js-basic", "version": "1.0.0" }"#),
    ("/games/js/src/index.js", JS_GAME),
  ]);

  let err = bundler.bundle(at("/games/js")).await.unwrap_err();
  assert!(err.to_string().contains("Could not resolve entry module \"/games/js/src/index.ts\""));
}

#[tokio::test]
async fn bundles_as_esm() {
  let Fixture { fs, bundler } = fixture(&ts_game("/games/esm", r#"{ "bundler": { "output": { "format": "ESM" } } }"#));

  bundler.bundle(at("/games/esm")).await.unwrap();
  let code = read(&fs, "/games/esm/basic.game-bundle.js");

  assert!(code.contains("import * as __external_0 from \"regal\";"));
  assert!(code.contains("module.exports = __namespace(__external_0);"));
  assert!(code.contains("const __entry = __require(\"src/index.ts\");"));
  assert!(code.ends_with("export default __entry.default;\n"));
}

#[tokio::test]
async fn bundles_as_umd() {
  let Fixture { fs, bundler } = fixture(&ts_game("/games/umd", r#"{ "bundler": { "output": { "format": "umd" } } }"#));

  bundler.bundle(at("/games/umd")).await.unwrap();
  let code = read(&fs, "/games/umd/basic.game-bundle.js");

  assert!(code.contains("global.Game = factory(global.regal)"));
  assert!(code.contains("define([\"regal\"], factory)"));
  assert!(code.contains("})(this, (function (__external_0) { 'use strict';"));
  assert!(code.ends_with("return __toCommonJS(__require(\"src/index.ts\"));\n}));\n"));
}

#[tokio::test]
async fn minified_bundle_keeps_the_header() {
  let Fixture { fs, bundler } =
    fixture(&ts_game("/games/min", r#"{ "bundler": { "output": { "minify": true, "file": "dist/game.min.js" } } }"#));

  bundler.bundle(at("/games/min")).await.unwrap();
  let code = read(&fs, "/games/min/dist/game.min.js");
  let config = bundler.get_config(at("/games/min")).unwrap().config;
  let header = header(&config);

  assert!(code.starts_with(&format!("{header}\n")));
  assert_eq!(code.matches("Powered by the Regal Framework").count(), 1);
  assert!(code.contains("postPlayerCommand"));
}

#[tokio::test]
async fn bundles_concurrently() {
  let mut files = ts_game("/games/one", "{}");
  files.extend(ts_game("/games/two", r#"{ "bundler": { "output": { "format": "esm" } } }"#));
  let Fixture { fs, bundler } = fixture(&files);

  let (one, two) = tokio::join!(bundler.bundle(at("/games/one")), bundler.bundle(at("/games/two")));
  one.unwrap();
  two.unwrap();

  assert!(read(&fs, "/games/one/basic.game-bundle.js").contains("module.exports = __toCommonJS("));
  assert!(read(&fs, "/games/two/basic.game-bundle.js").contains("export default __entry.default;"));
}

#[tokio::test]
async fn rejects_unknown_format_and_bundle_kind() {
  let Fixture { fs, bundler } = fixture(&ts_game("/games/bad", "{}"));

  let with_output = |output: PartialOutputConfig| BundlerOptions {
    config_location: Some(PathBuf::from("/games/bad")),
    bundler: Some(PartialBundleConfig { input: None, output: Some(output) }),
  };

  let err = bundler
    .bundle(with_output(PartialOutputConfig { format: Some("AMD".to_string()), ..Default::default() }))
    .await
    .unwrap_err();
  assert!(matches!(err.bundler_error(), Some(BundlerError::UnsupportedModuleFormat(format)) if format == "amd"));

  let err = bundler
    .bundle(with_output(PartialOutputConfig { bundle: Some("deluxe".to_string()), ..Default::default() }))
    .await
    .unwrap_err();
  assert!(matches!(err.bundler_error(), Some(BundlerError::UnsupportedBundleKind(kind)) if kind == "deluxe"));

  assert!(!fs.exists(Path::new("/games/bad/basic.game-bundle.js")));
}

#[tokio::test]
async fn missing_entry_fails_the_build() {
  let Fixture { bundler, .. } = fixture(&[("/games/empty/package.json", r#"{ "name": "empty" }"#)]);

  let err = bundler.bundle(at("/games/empty")).await.unwrap_err();
  assert!(err.to_string().contains("Could not resolve entry module"));
}

#[tokio::test]
async fn writes_to_the_os_file_system() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::create_dir_all(dir.path().join("src")).unwrap();
  std::fs::write(dir.path().join("package.json"), r#"{ "name": "On Disk", "version": "0.2.0" }"#).unwrap();
  std::fs::write(dir.path().join("src/index.js"), "module.exports = {};\n").unwrap();

  let options = BundlerOptions {
    config_location: Some(dir.path().to_path_buf()),
    bundler: Some(PartialBundleConfig {
      input: Some(PartialInputConfig { file: Some(PathBuf::from("src/index.js")), ts: None }),
      output: None,
    }),
  };
  let output = gamepack::bundle(options).await.unwrap();

  let file = dir.path().join("on-disk.game-bundle.js");
  assert_eq!(output.assets[0].file, file);
  let code = std::fs::read_to_string(file).unwrap();
  assert!(code.starts_with("/**\n* On Disk 0.2.0\n*\n*"));
  assert!(code.contains("module.exports = bundledGame;"));
}
