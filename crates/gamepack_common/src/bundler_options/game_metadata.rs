use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resolved game metadata, serialized into the bundle footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetadata {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub headline: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub homepage: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repository: Option<String>,
  /// Game runtime options, passed through untouched.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<Map<String, Value>>,
  /// Always the package version.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub game_version: Option<String>,
}

/// Game metadata as written by the user.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialGameMetadata {
  pub name: Option<String>,
  pub author: Option<String>,
  pub headline: Option<String>,
  pub description: Option<String>,
  pub homepage: Option<String>,
  pub repository: Option<String>,
  pub options: Option<Map<String, Value>>,
  pub game_version: Option<String>,
}

#[test]
fn test_game_metadata_serializes_camel_case_without_absent_fields() {
  let metadata = GameMetadata {
    name: "basic".to_string(),
    author: Some("Bob Basic".to_string()),
    headline: None,
    description: None,
    homepage: None,
    repository: None,
    options: None,
    game_version: Some("1.0.0".to_string()),
  };

  assert_eq!(
    serde_json::to_string(&metadata).unwrap(),
    r#"{"name":"basic","author":"Bob Basic","gameVersion":"1.0.0"}"#
  );
}
