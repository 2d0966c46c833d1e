//! Build-instructions document produced by a successful simulated build.

use crate::config::{BuildConfig, BuildType};
use blueprint_codegen::generators::templates::BUILD_INSTRUCTIONS;
use blueprint_codegen::{Result, TemplateEngine};
use blueprint_core::AppConfig;
use serde_json::json;

/// File name of the instructions document for a project.
pub fn instructions_name(config: &AppConfig) -> String {
    format!("{}_build_instructions.md", config.sanitized_name())
}

/// Render the build-instructions document.
pub fn render_instructions(config: &AppConfig, build: &BuildConfig) -> Result<String> {
    let platform = build.platform;

    let mut prerequisites = vec![
        "- Node.js (v16 or later)".to_string(),
        "- Expo CLI (`npm install -g @expo/cli`)".to_string(),
    ];
    if platform.includes_android() {
        prerequisites.push("- Android Studio with Android SDK".to_string());
    }
    if platform.includes_ios() {
        prerequisites.push("- Xcode (macOS only)".to_string());
    }

    let mut steps = vec![
        "Install dependencies: `npm install`".to_string(),
        "Configure app.json with your credentials".to_string(),
    ];
    if platform.includes_android() {
        steps.push("Build Android APK: `expo build:android`".to_string());
    }
    if platform.includes_ios() {
        steps.push("Build iOS app: `expo build:ios`".to_string());
    }
    let steps: Vec<String> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();

    let release = if build.build_type == BuildType::Release {
        let mut lines = vec![
            String::new(),
            "## Release Build".to_string(),
            "- Ensure all assets are optimized".to_string(),
            "- Update version number in app.json".to_string(),
        ];
        if let Some(signing) = &build.signing {
            lines.push(format!(
                "- Sign with keystore `{}` (alias `{}`)",
                signing.keystore, signing.alias
            ));
        }
        lines.push("- Test thoroughly before publishing".to_string());
        lines.push(String::new());
        lines.join("\n")
    } else {
        String::new()
    };

    TemplateEngine::new()?.render(
        BUILD_INSTRUCTIONS,
        &json!({
            "name": config.name,
            "platform": platform.as_str(),
            "build_type": build.build_type.as_str(),
            "prerequisites": prerequisites.join("\n"),
            "steps": steps.join("\n"),
            "release": release,
        }),
    )
}
