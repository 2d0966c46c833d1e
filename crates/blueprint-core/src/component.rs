//! The component tree authored in the editor.
//!
//! This is a pure data model. The editor owns all mutation; the exporter
//! only reads it.

use crate::errors::{CoreError, Result};
use crate::style::{StyleMap, StyleValue};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Abstract category of a UI node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Container,
    Text,
    Button,
    TextInput,
    Image,
    ScrollableContainer,
    Pressable,
    Header,
    Footer,
    Card,
    Toggle,
    Slider,
    Icon,
    /// A kind the exporter has no entry for. The name is kept verbatim.
    Other(String),
}

impl ComponentKind {
    /// Canonical kebab-case name.
    pub fn name(&self) -> &str {
        match self {
            Self::Container => "container",
            Self::Text => "text",
            Self::Button => "button",
            Self::TextInput => "text-input",
            Self::Image => "image",
            Self::ScrollableContainer => "scrollable-container",
            Self::Pressable => "pressable",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Card => "card",
            Self::Toggle => "toggle",
            Self::Slider => "slider",
            Self::Icon => "icon",
            Self::Other(name) => name,
        }
    }

    /// Parse a kind name. Accepts the canonical names and the editor's
    /// palette names (`View`, `ScrollView`, `TouchableOpacity`, ...) and the
    /// primitive names `Container`, `ScrollContainer` and `Pressable`.
    pub fn parse(name: &str) -> Self {
        match name {
            "container" | "Container" | "View" => Self::Container,
            "text" | "Text" => Self::Text,
            "button" | "Button" => Self::Button,
            "text-input" | "TextInput" => Self::TextInput,
            "image" | "Image" => Self::Image,
            "scrollable-container" | "ScrollContainer" | "ScrollView" => Self::ScrollableContainer,
            "pressable" | "Pressable" | "TouchableOpacity" => Self::Pressable,
            "header" | "Header" => Self::Header,
            "footer" | "Footer" => Self::Footer,
            "card" | "Card" => Self::Card,
            "toggle" | "Switch" => Self::Toggle,
            "slider" | "Slider" => Self::Slider,
            "icon" | "Icon" => Self::Icon,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for ComponentKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for ComponentKind {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<ComponentKind> for String {
    fn from(value: ComponentKind) -> Self {
        match value {
            ComponentKind::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

/// Shorthand properties that double as style entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shorthand {
    BackgroundColor,
    Color,
    FontSize,
    Padding,
    Margin,
    BorderRadius,
}

impl Shorthand {
    /// All shorthands, in the order they are folded into a resolved style.
    pub const ALL: [Shorthand; 6] = [
        Shorthand::BackgroundColor,
        Shorthand::Color,
        Shorthand::FontSize,
        Shorthand::Padding,
        Shorthand::Margin,
        Shorthand::BorderRadius,
    ];

    /// The style key this shorthand writes.
    pub fn key(self) -> &'static str {
        match self {
            Shorthand::BackgroundColor => "backgroundColor",
            Shorthand::Color => "color",
            Shorthand::FontSize => "fontSize",
            Shorthand::Padding => "padding",
            Shorthand::Margin => "margin",
            Shorthand::BorderRadius => "borderRadius",
        }
    }
}

/// Properties of a component node.
///
/// Known semantic keys are typed fields. Anything else lands in `extra` so
/// that documents written by newer editors still round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProps {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub on_press: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<StyleValue>,

    /// Raw style entries edited directly by the user.
    #[serde(default, deserialize_with = "lenient_style", skip_serializing_if = "IndexMap::is_empty")]
    pub style: StyleMap,

    /// Properties without a defined meaning.
    #[serde(flatten)]
    pub extra: IndexMap<String, StyleValue>,
}

impl ComponentProps {
    /// Get a shorthand value. Null counts as absent.
    pub fn shorthand(&self, which: Shorthand) -> Option<&StyleValue> {
        let slot = match which {
            Shorthand::BackgroundColor => &self.background_color,
            Shorthand::Color => &self.color,
            Shorthand::FontSize => &self.font_size,
            Shorthand::Padding => &self.padding,
            Shorthand::Margin => &self.margin,
            Shorthand::BorderRadius => &self.border_radius,
        };
        slot.as_ref().filter(|v| !v.is_null())
    }

    /// Set a shorthand value.
    pub fn set_shorthand(&mut self, which: Shorthand, value: impl Into<StyleValue>) {
        let slot = match which {
            Shorthand::BackgroundColor => &mut self.background_color,
            Shorthand::Color => &mut self.color,
            Shorthand::FontSize => &mut self.font_size,
            Shorthand::Padding => &mut self.padding,
            Shorthand::Margin => &mut self.margin,
            Shorthand::BorderRadius => &mut self.border_radius,
        };
        *slot = Some(value.into());
    }

    /// Replace the nested style from a JSON object typed into the editor.
    ///
    /// A payload that does not parse as a JSON object is dropped and the
    /// previous style is kept. Returns whether the edit was applied.
    pub fn apply_style_json(&mut self, raw: &str) -> bool {
        match serde_json::from_str::<StyleMap>(raw) {
            Ok(style) => {
                self.style = style;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed style edit");
                false
            }
        }
    }
}

/// Accept any JSON value for a content property. Strings are kept as is,
/// null is absent, and anything else keeps its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Accept any JSON value for the nested style. Anything but an object is
/// dropped.
fn lenient_style<'de, D>(deserializer: D) -> std::result::Result<StyleMap, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| {
                serde_json::from_value::<StyleValue>(value)
                    .ok()
                    .map(|value| (key, value))
            })
            .collect()),
        Value::Null => Ok(StyleMap::new()),
        other => {
            tracing::warn!(value = %other, "ignoring non-object style");
            Ok(StyleMap::new())
        }
    }
}

/// Editor canvas position. Ignored by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Editor canvas size. Ignored by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// One UI element in the authored tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Opaque identifier, unique across the tree.
    pub id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: ComponentKind,
    #[serde(default, rename = "props", alias = "properties")]
    pub properties: ComponentProps,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl ComponentNode {
    /// Create a node with no properties or children.
    pub fn new(id: impl Into<String>, kind: impl Into<ComponentKind>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            properties: ComponentProps::default(),
            children: Vec::new(),
            position: None,
            size: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.properties.text = Some(text.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.properties.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.properties.source = Some(source.into());
        self
    }

    /// Set a shorthand style property.
    pub fn with_shorthand(mut self, which: Shorthand, value: impl Into<StyleValue>) -> Self {
        self.properties.set_shorthand(which, value);
        self
    }

    /// Add a raw nested style entry.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.properties.style.insert(key.into(), value.into());
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Visit this node and its descendants in pre-order.
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a ComponentNode),
    {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ComponentNode::count).sum::<usize>()
    }
}

/// Visit every node of a forest in pre-order.
pub fn walk_forest<'a, F>(nodes: &'a [ComponentNode], visit: &mut F)
where
    F: FnMut(&'a ComponentNode),
{
    for node in nodes {
        node.walk(visit);
    }
}

/// Check that no two nodes in the forest share an id.
pub fn validate_unique_ids(nodes: &[ComponentNode]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut duplicate = None;
    walk_forest(nodes, &mut |node| {
        if duplicate.is_none() && !seen.insert(node.id.as_str()) {
            duplicate = Some(node.id.clone());
        }
    });
    match duplicate {
        Some(id) => Err(CoreError::DuplicateId { id }),
        None => Ok(()),
    }
}
