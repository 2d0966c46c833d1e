//! Build request configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Target platform of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
    Both,
}

impl Platform {
    pub fn includes_android(self) -> bool {
        matches!(self, Platform::Android | Platform::Both)
    }

    pub fn includes_ios(self) -> bool {
        matches!(self, Platform::Ios | Platform::Both)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Both => "both",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debug or release build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    #[default]
    Debug,
    Release,
}

impl BuildType {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }
}

/// Signing credentials for release builds.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signing {
    pub keystore: String,
    pub alias: String,
    pub password: String,
}

impl fmt::Debug for Signing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signing")
            .field("keystore", &self.keystore)
            .field("alias", &self.alias)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What to build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub build_type: BuildType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing: Option<Signing>,
}

/// Pacing of the simulated stages.
///
/// Each stage waits `stage_delay` plus a random extra of up to
/// `stage_jitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSettings {
    pub stage_delay: Duration,
    pub stage_jitter: Duration,
}

impl BuildSettings {
    /// No waiting between stages.
    pub fn instant() -> Self {
        Self {
            stage_delay: Duration::ZERO,
            stage_jitter: Duration::ZERO,
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            stage_delay: Duration::from_millis(1000),
            stage_jitter: Duration::from_millis(2000),
        }
    }
}
