use gamepack_common::BundleKind;
use gamepack_error::BuildResult;

/// Exposes the five public game operations, each bound to the runtime.
/// The bundle initializes itself internally and cannot be reset.
pub const STANDARD_ADAPTER: &str = "function (game) {
  return {
    getMetadataCommand: game.getMetadataCommand.bind(game),
    postPlayerCommand: game.postPlayerCommand.bind(game),
    postStartCommand: game.postStartCommand.bind(game),
    postUndoCommand: game.postUndoCommand.bind(game),
    postOptionCommand: game.postOptionCommand.bind(game)
  };
}";

/// Source of the factory narrowing the runtime to the surface of `bundle`. Case-insensitive.
pub fn select_adapter(bundle: &str) -> BuildResult<&'static str> {
  match bundle.parse::<BundleKind>()? {
    BundleKind::Standard => Ok(STANDARD_ADAPTER),
  }
}

#[test]
fn test_select_adapter() {
  use gamepack_error::BundlerError;

  assert_eq!(select_adapter("Standard").unwrap(), STANDARD_ADAPTER);

  let err = select_adapter("deluxe").unwrap_err();
  assert!(matches!(err.bundler_error(), Some(BundlerError::UnsupportedBundleKind(kind)) if kind == "deluxe"));
  assert_eq!(err.to_string(), "Illegal bundle type: deluxe");
}

#[test]
fn test_standard_adapter_surface() {
  let operations = [
    "getMetadataCommand",
    "postPlayerCommand",
    "postStartCommand",
    "postUndoCommand",
    "postOptionCommand",
  ];
  for operation in operations {
    assert!(STANDARD_ADAPTER.contains(&format!("{operation}: game.{operation}.bind(game)")));
  }
  assert_eq!(STANDARD_ADAPTER.matches(".bind(game)").count(), operations.len());
  assert!(!STANDARD_ADAPTER.contains("init"));
  assert!(!STANDARD_ADAPTER.contains("reset"));
}
