use serde::Deserialize;

/// The subset of `package.json` that feeds game metadata.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageDescriptor {
  pub name: Option<String>,
  pub version: Option<String>,
  pub author: Option<Person>,
  pub description: Option<String>,
  pub homepage: Option<String>,
  pub repository: Option<Repository>,
}

/// `"Name <email> (url)"` or `{ "name", "email", "url" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Person {
  Text(String),
  Detailed { name: String, email: Option<String>, url: Option<String> },
}

/// `"owner/repo"`, a url, or `{ "type", "url" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Repository {
  Text(String),
  Detailed {
    #[serde(rename = "type")]
    kind: Option<String>,
    url: String,
  },
}

impl Person {
  pub fn to_display_string(&self) -> String {
    match self {
      Self::Text(text) => text.clone(),
      Self::Detailed { name, email, url } => {
        let mut person = name.clone();
        if let Some(email) = email {
          person.push_str(&format!(" <{email}>"));
        }
        if let Some(url) = url {
          person.push_str(&format!(" ({url})"));
        }
        person
      }
    }
  }
}

impl Repository {
  pub fn url(&self) -> &str {
    match self {
      Self::Text(url) | Self::Detailed { url, .. } => url,
    }
  }
}

impl PackageDescriptor {
  pub fn author(&self) -> Option<String> {
    self.author.as_ref().map(Person::to_display_string)
  }

  pub fn repository(&self) -> Option<String> {
    self.repository.as_ref().map(|repository| repository.url().to_string())
  }
}

#[test]
fn test_package_descriptor_shapes() {
  let pkg: PackageDescriptor = serde_json::from_str(
    r#"{
      "name": "my-game",
      "version": "1.2.3",
      "author": { "name": "Joe", "email": "joe@example.com" },
      "repository": { "type": "git", "url": "https://github.com/joe/my-game" },
      "dependencies": { "regal": "^1.0.0" }
    }"#,
  )
  .unwrap();

  assert_eq!(pkg.author().as_deref(), Some("Joe <joe@example.com>"));
  assert_eq!(pkg.repository().as_deref(), Some("https://github.com/joe/my-game"));
  assert_eq!(pkg.version.as_deref(), Some("1.2.3"));

  let pkg: PackageDescriptor =
    serde_json::from_str(r#"{ "author": "Joe Cowman", "repository": "joe/my-game" }"#).unwrap();
  assert_eq!(pkg.author().as_deref(), Some("Joe Cowman"));
  assert_eq!(pkg.repository().as_deref(), Some("joe/my-game"));
}
