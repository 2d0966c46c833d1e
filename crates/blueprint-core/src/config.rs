//! Application configuration.

use crate::component::ComponentNode;
use crate::errors::Result;
use crate::naming::sanitize_name;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme colors applied to the generated app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#007AFF".to_string(),
            secondary_color: "#34C759".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#333333".to_string(),
        }
    }
}

/// Screen orientation lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    Both,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::Both => "both",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-project application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Display name.
    pub name: String,
    /// Reverse-domain package identifier.
    pub package_name: String,
    /// Semantic version string.
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash_screen: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    /// Permission identifiers, deduplicated, in the order first given.
    #[serde(default)]
    pub permissions: IndexSet<String>,
    #[serde(default)]
    pub orientation: Orientation,
    pub min_sdk_version: u32,
    pub target_sdk_version: u32,
}

impl AppConfig {
    /// File- and package-safe form of the project name.
    pub fn sanitized_name(&self) -> String {
        sanitize_name(&self.name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "My App".to_string(),
            package_name: "com.mycompany.myapp".to_string(),
            version: "1.0.0".to_string(),
            description: "A new mobile app built with drag and drop".to_string(),
            icon: None,
            splash_screen: None,
            theme: Theme::default(),
            permissions: IndexSet::from(["INTERNET".to_string()]),
            orientation: Orientation::Portrait,
            min_sdk_version: 21,
            target_sdk_version: 33,
        }
    }
}

/// A fresh configuration for a new project.
pub fn default_config() -> AppConfig {
    AppConfig::default()
}

/// A component tree together with its configuration, as saved by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub components: Vec<ComponentNode>,
    pub config: AppConfig,
}

impl ProjectDocument {
    /// Decode a project from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_fresh() {
        let mut first = default_config();
        first.name = "Changed".to_string();
        first.permissions.insert("CAMERA".to_string());

        let second = default_config();
        assert_eq!(second.name, "My App");
        assert_eq!(second.permissions.len(), 1);
        assert_eq!(second.min_sdk_version, 21);
        assert_eq!(second.target_sdk_version, 33);
    }

    #[test]
    fn test_config_roundtrip_camel_case() {
        let json = r##"{
            "name": "My App",
            "packageName": "com.x.y",
            "version": "1.0.0",
            "description": "demo",
            "theme": {
                "primaryColor": "#000",
                "secondaryColor": "#111",
                "backgroundColor": "#fff",
                "textColor": "#222"
            },
            "permissions": ["INTERNET", "CAMERA", "INTERNET"],
            "orientation": "landscape",
            "minSdkVersion": 21,
            "targetSdkVersion": 33
        }"##;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.package_name, "com.x.y");
        assert_eq!(config.orientation, Orientation::Landscape);
        assert_eq!(config.theme.background_color, "#fff");
        assert_eq!(
            config.permissions.iter().collect::<Vec<_>>(),
            vec!["INTERNET", "CAMERA"]
        );
        assert_eq!(config.sanitized_name(), "My_App");

        let out = serde_json::to_value(&config).unwrap();
        assert_eq!(out["minSdkVersion"], 21);
        assert!(out.get("icon").is_none());
    }

    #[test]
    fn test_project_document_missing_config_fails() {
        assert!(ProjectDocument::from_json(r#"{"components": []}"#).is_err());
    }
}
