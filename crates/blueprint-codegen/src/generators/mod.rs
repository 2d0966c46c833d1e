//! Project generators.

mod expo;
pub mod templates;

pub use expo::ExpoGenerator;
pub use templates::TemplateEngine;

use crate::error::Result;
use blueprint_core::{AppConfig, ComponentNode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Relative paths of the files every generated project contains.
pub mod paths {
    pub const ENTRY: &str = "App.tsx";
    pub const PACKAGE: &str = "package.json";
    pub const MANIFEST: &str = "app.json";
    pub const README: &str = "README.md";
    pub const TYPES: &str = "types/index.ts";
    pub const THEME: &str = "constants/Theme.ts";
    pub const PRIMITIVES: &str = "components/primitives.tsx";
}

/// Common trait for project generators.
pub trait ProjectGenerator {
    /// Generate the full project for a tree and configuration.
    fn generate(&self, tree: &[ComponentNode], config: &AppConfig) -> Result<FileSet>;
}

/// Generated project output: relative path to file content.
///
/// Iteration is in path order, so identical input always yields an
/// identical sequence of files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileSet {
    files: BTreeMap<String, String>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Content of a file, if generated.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Relative paths, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// `(path, content)` pairs, sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Assemble the Expo project for a tree and configuration.
pub fn assemble(tree: &[ComponentNode], config: &AppConfig) -> Result<FileSet> {
    ExpoGenerator::new()?.generate(tree, config)
}
