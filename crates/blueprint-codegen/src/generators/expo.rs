//! React Native project generator targeting Expo.

use super::templates::{self, TemplateEngine};
use super::{paths, FileSet, ProjectGenerator};
use crate::error::Result;
use crate::imports::{collect_imports, import_statement};
use crate::lower::lower;
use crate::printer::print;
use blueprint_core::{quote, AppConfig, ComponentNode};
use serde_json::json;

/// Indent level of the component tree inside the root view of `App.tsx`.
const TREE_LEVEL: usize = 3;

const TYPES_STUB: &str = r#"export interface AppProps {
  // Add your app-specific types here
}

export interface ComponentProps {
  children?: React.ReactNode;
  style?: any;
}
"#;

const PRIMITIVES_MODULE: &str = r#"import React from 'react';
import { Text as NativeText, TouchableOpacity } from 'react-native';
import type { StyleProp, TextStyle } from 'react-native';

export {
  View as Container,
  Text,
  TextInput,
  Image,
  ScrollView as ScrollContainer,
  TouchableOpacity as Pressable,
} from 'react-native';

export interface ButtonProps {
  children?: React.ReactNode;
  style?: StyleProp<TextStyle>;
  onPress?: () => void;
}

export function Button({ children, style, onPress }: ButtonProps) {
  return (
    <TouchableOpacity onPress={onPress}>
      <NativeText style={style}>{children}</NativeText>
    </TouchableOpacity>
  );
}
"#;

/// Expo / React Native project generator.
pub struct ExpoGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ExpoGenerator<'a> {
    /// Create a generator with the project templates loaded.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Generate the entry module.
    pub fn generate_entry(&self, tree: &[ComponentNode], config: &AppConfig) -> String {
        let mut lines = Vec::new();

        lines.push("import React from 'react';".to_string());
        lines.push("import { StatusBar } from 'expo-status-bar';".to_string());
        lines.push("import { StyleSheet, View } from 'react-native';".to_string());
        if let Some(statement) = import_statement(&collect_imports(tree)) {
            lines.push(statement);
        }
        lines.push(String::new());

        lines.push("export default function App() {".to_string());
        lines.push("  return (".to_string());
        lines.push("    <View style={styles.container}>".to_string());
        lines.push("      <StatusBar style=\"auto\" />".to_string());
        let body = print(&lower(tree), TREE_LEVEL);
        if !body.is_empty() {
            lines.push(body);
        }
        lines.push("    </View>".to_string());
        lines.push("  );".to_string());
        lines.push("}".to_string());
        lines.push(String::new());

        lines.push("const styles = StyleSheet.create({".to_string());
        lines.push("  container: {".to_string());
        lines.push("    flex: 1,".to_string());
        lines.push(format!(
            "    backgroundColor: {},",
            quote(&config.theme.background_color)
        ));
        lines.push("  },".to_string());
        lines.push("});".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    /// Generate `package.json`.
    pub fn generate_package(&self, config: &AppConfig) -> Result<String> {
        let package = json!({
            "name": config.sanitized_name(),
            "version": config.version,
            "description": config.description,
            "main": "node_modules/expo/AppEntry.js",
            "scripts": {
                "start": "expo start",
                "android": "expo start --android",
                "ios": "expo start --ios",
                "web": "expo start --web",
                "build": "expo build:android",
                "build:ios": "expo build:ios"
            },
            "dependencies": {
                "expo": "~49.0.0",
                "expo-status-bar": "~1.6.0",
                "react": "18.2.0",
                "react-native": "0.72.6",
                "@expo/vector-icons": "^13.0.0"
            },
            "devDependencies": {
                "@babel/core": "^7.20.0",
                "@types/react": "~18.2.14",
                "typescript": "^5.1.3"
            },
            "keywords": ["expo", "react-native", "mobile-app"],
            "license": "MIT"
        });
        Ok(serde_json::to_string_pretty(&package)?)
    }

    /// Generate the Expo `app.json` manifest.
    pub fn generate_manifest(&self, config: &AppConfig) -> Result<String> {
        let background = &config.theme.background_color;
        let manifest = json!({
            "expo": {
                "name": config.name,
                "slug": config.sanitized_name(),
                "version": config.version,
                "orientation": config.orientation,
                "icon": config.icon.as_deref().unwrap_or("./assets/icon.png"),
                "userInterfaceStyle": "light",
                "splash": {
                    "image": config.splash_screen.as_deref().unwrap_or("./assets/splash.png"),
                    "resizeMode": "contain",
                    "backgroundColor": background
                },
                "assetBundlePatterns": ["**/*"],
                "ios": {
                    "supportsTablet": true,
                    "bundleIdentifier": config.package_name
                },
                "android": {
                    "adaptiveIcon": {
                        "foregroundImage": "./assets/adaptive-icon.png",
                        "backgroundColor": background
                    },
                    "package": config.package_name,
                    "versionCode": 1,
                    "permissions": config.permissions
                },
                "web": {
                    "favicon": "./assets/favicon.png"
                }
            }
        });
        Ok(serde_json::to_string_pretty(&manifest)?)
    }

    /// Generate the project README.
    pub fn generate_readme(&self, config: &AppConfig) -> Result<String> {
        let permission_list = config
            .permissions
            .iter()
            .map(|p| format!("- {}", p))
            .collect::<Vec<_>>()
            .join("\n");

        self.engine.render(
            templates::README,
            &json!({
                "name": config.name,
                "description": config.description,
                "package_name": config.package_name,
                "version": config.version,
                "orientation": config.orientation,
                "min_sdk_version": config.min_sdk_version,
                "target_sdk_version": config.target_sdk_version,
                "theme": config.theme,
                "permission_list": permission_list,
            }),
        )
    }

    /// Generate the theme and spacing constants module.
    pub fn generate_theme(&self, config: &AppConfig) -> Result<String> {
        self.engine
            .render(templates::THEME, &json!({ "theme": config.theme }))
    }
}

impl<'a> ProjectGenerator for ExpoGenerator<'a> {
    fn generate(&self, tree: &[ComponentNode], config: &AppConfig) -> Result<FileSet> {
        let mut files = FileSet::new();

        files.insert(paths::ENTRY, self.generate_entry(tree, config));
        files.insert(paths::PACKAGE, self.generate_package(config)?);
        files.insert(paths::MANIFEST, self.generate_manifest(config)?);
        files.insert(paths::README, self.generate_readme(config)?);
        files.insert(paths::TYPES, TYPES_STUB);
        files.insert(paths::THEME, self.generate_theme(config)?);
        files.insert(paths::PRIMITIVES, PRIMITIVES_MODULE);

        for (path, content) in files.iter() {
            tracing::debug!(path, bytes = content.len(), "generated file");
        }

        Ok(files)
    }
}
