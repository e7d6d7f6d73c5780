//! Template manifest types and parsing

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed file name of the manifest inside every template directory
pub const MANIFEST_FILE: &str = "template.yaml";

/// A placeholder declared by a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Name used inside `${NAME}` and `%NAME%`
    pub name: String,

    /// Value offered when the user enters nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// The value ends up in file or directory names
    #[serde(default, alias = "isPath")]
    pub is_path: bool,

    /// An empty value is rejected
    #[serde(default)]
    pub required: bool,
}

impl Token {
    /// Default value, treating an empty string as "no default"
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}

/// Per-template manifest (`<library>/<template>/template.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    #[serde(default)]
    pub name: String,

    /// Description of what the template provides
    #[serde(default)]
    pub description: String,

    /// Minimum tool version the template was written for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Placeholders to collect values for, in prompt order
    #[serde(default)]
    pub tokens: Vec<Token>,

    /// Shown after the template is chosen
    #[serde(default, alias = "preMessage")]
    pub pre_message: String,

    /// Shown after the project is created
    #[serde(default, alias = "postMessage")]
    pub post_message: String,

    /// Top-level entry names that are never copied
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Directory the manifest was loaded from
    #[serde(skip)]
    pub source_dir: PathBuf,
}

impl TemplateManifest {
    /// Whether a top-level entry is excluded from copying
    pub fn is_ignored(&self, entry_name: &str) -> bool {
        entry_name == MANIFEST_FILE || self.ignore.iter().any(|i| i == entry_name)
    }
}

/// Parse manifest bytes. Unknown fields are ignored, missing ones default to empty.
pub fn parse_manifest(bytes: &[u8]) -> Result<TemplateManifest, ManifestError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_yaml_manifest() {
        let manifest = parse_manifest(
            br#"
name: HTML
description: Barebones HTML project
version: 0.1.0
tokens:
  - name: TITLE
    default: Hello world
  - name: MODULE
    is_path: true
    required: true
pre_message: Just a barebones project.
post_message: Open index.html in a browser.
ignore:
  - node_modules
  - .git
"#,
        )
        .unwrap();

        assert_eq!(manifest.name, "HTML");
        assert_eq!(manifest.version.as_deref(), Some("0.1.0"));
        assert_eq!(manifest.tokens.len(), 2);
        assert_eq!(manifest.tokens[0].default_value(), Some("Hello world"));
        assert!(!manifest.tokens[0].is_path);
        assert!(manifest.tokens[1].is_path);
        assert!(manifest.tokens[1].required);
        assert_eq!(manifest.pre_message, "Just a barebones project.");
        assert_eq!(manifest.post_message, "Open index.html in a browser.");
        assert_eq!(manifest.ignore, vec!["node_modules", ".git"]);
        assert_eq!(manifest.source_dir, PathBuf::new());
    }

    #[test]
    fn test_parse_json_manifest_with_camel_case_fields() {
        let manifest = parse_manifest(
            br#"{
  "name": "HTML",
  "description": "Barebones HTML Project",
  "tokens": [{ "name": "TITLE", "default": "Hello", "isPath": true }],
  "preMessage": "pre",
  "postMessage": "post"
}"#,
        )
        .unwrap();

        assert_eq!(manifest.tokens[0].name, "TITLE");
        assert!(manifest.tokens[0].is_path);
        assert_eq!(manifest.pre_message, "pre");
        assert_eq!(manifest.post_message, "post");
        assert!(manifest.ignore.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let manifest = parse_manifest(b"name: Bare").unwrap();
        assert_eq!(manifest.description, "");
        assert!(manifest.tokens.is_empty());
        assert!(manifest.ignore.is_empty());
        assert_eq!(manifest.pre_message, "");
        assert_eq!(manifest.version, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let manifest = parse_manifest(b"name: X\nauthor: someone\nextra: [1, 2]").unwrap();
        assert_eq!(manifest.name, "X");
    }

    #[test]
    fn test_malformed_manifest_is_error() {
        assert!(parse_manifest(b"name: [unclosed").is_err());
        assert!(parse_manifest(b"tokens: not-a-list").is_err());
    }

    #[test]
    fn test_empty_default_means_no_default() {
        let token = Token {
            name: "A".into(),
            default: Some(String::new()),
            ..Token::default()
        };
        assert_eq!(token.default_value(), None);
    }

    #[test]
    fn test_manifest_file_always_ignored() {
        let manifest = TemplateManifest {
            ignore: vec!["node_modules".into()],
            ..TemplateManifest::default()
        };
        assert!(manifest.is_ignored(MANIFEST_FILE));
        assert!(manifest.is_ignored("node_modules"));
        assert!(!manifest.is_ignored("src"));
    }
}
