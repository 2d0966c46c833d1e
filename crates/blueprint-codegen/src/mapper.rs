//! Maps abstract component kinds onto target primitives.

use blueprint_core::ComponentKind;
use std::fmt;

/// A concrete element the generated code can instantiate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    Container,
    Text,
    Button,
    TextInput,
    Image,
    ScrollContainer,
    Pressable,
    /// Emitted under its own name with no import.
    Passthrough(String),
}

impl Primitive {
    /// Primitives that come from the generated primitives module.
    pub const IMPORTABLE: [Primitive; 7] = [
        Primitive::Container,
        Primitive::Text,
        Primitive::Button,
        Primitive::TextInput,
        Primitive::Image,
        Primitive::ScrollContainer,
        Primitive::Pressable,
    ];

    /// Tag name used in generated source.
    pub fn name(&self) -> &str {
        match self {
            Primitive::Container => "Container",
            Primitive::Text => "Text",
            Primitive::Button => "Button",
            Primitive::TextInput => "TextInput",
            Primitive::Image => "Image",
            Primitive::ScrollContainer => "ScrollContainer",
            Primitive::Pressable => "Pressable",
            Primitive::Passthrough(name) => name,
        }
    }

    pub fn is_importable(&self) -> bool {
        !matches!(self, Primitive::Passthrough(_))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a kind is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveSpec {
    pub primitive: Primitive,
    /// Structural kinds that are expected to wrap children.
    pub wraps_children: bool,
    /// Whether a `text` property becomes the element's literal content.
    pub accepts_text: bool,
}

impl PrimitiveSpec {
    fn wrapping(primitive: Primitive) -> Self {
        Self { primitive, wraps_children: true, accepts_text: false }
    }

    fn leaf(primitive: Primitive, accepts_text: bool) -> Self {
        Self { primitive, wraps_children: false, accepts_text }
    }
}

/// Look up the primitive and emission flags for a kind.
///
/// Header, footer, and card are visual specializations of a container and
/// icon is a glyph rendered as text. Toggle and slider pass through under
/// the editor's palette names. An unrecognized name that matches a known
/// kind or primitive is mapped as that kind; anything else passes through
/// verbatim.
pub fn map_kind(kind: &ComponentKind) -> PrimitiveSpec {
    match kind {
        ComponentKind::Container
        | ComponentKind::Header
        | ComponentKind::Footer
        | ComponentKind::Card => PrimitiveSpec::wrapping(Primitive::Container),
        ComponentKind::ScrollableContainer => PrimitiveSpec::wrapping(Primitive::ScrollContainer),
        ComponentKind::Pressable => PrimitiveSpec::wrapping(Primitive::Pressable),
        ComponentKind::Text => PrimitiveSpec::leaf(Primitive::Text, true),
        ComponentKind::Button => PrimitiveSpec::leaf(Primitive::Button, true),
        ComponentKind::TextInput => PrimitiveSpec::leaf(Primitive::TextInput, false),
        ComponentKind::Image => PrimitiveSpec::leaf(Primitive::Image, false),
        ComponentKind::Icon => PrimitiveSpec::leaf(Primitive::Text, false),
        ComponentKind::Toggle => {
            PrimitiveSpec::leaf(Primitive::Passthrough("Switch".to_string()), false)
        }
        ComponentKind::Slider => {
            PrimitiveSpec::leaf(Primitive::Passthrough("Slider".to_string()), false)
        }
        ComponentKind::Other(name) => match ComponentKind::parse(name) {
            ComponentKind::Other(_) => {
                PrimitiveSpec::leaf(Primitive::Passthrough(name.clone()), false)
            }
            known => map_kind(&known),
        },
    }
}
