//! Merges shorthand properties with a node's nested style.

use blueprint_core::{ComponentNode, Shorthand, StyleMap};

/// The per-node result of style resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNode<'a> {
    /// Flat style record. Insertion order follows the nested style, with
    /// shorthands that introduce new keys appended after it.
    pub style: StyleMap,
    /// Literal text content.
    pub text: Option<&'a str>,
    /// Input placeholder.
    pub placeholder: Option<&'a str>,
    /// Image source URI.
    pub source: Option<&'a str>,
}

/// Resolve a node's style record and content properties.
///
/// Shorthands win over nested style entries on key collision. An overwritten
/// key keeps its position. Absent keys stay absent; no defaults are applied.
pub fn resolve(node: &ComponentNode) -> ResolvedNode<'_> {
    let props = &node.properties;
    let mut style = props.style.clone();

    for shorthand in Shorthand::ALL {
        if let Some(value) = props.shorthand(shorthand) {
            style.insert(shorthand.key().to_string(), value.clone());
        }
    }

    ResolvedNode {
        style,
        text: props.text.as_deref(),
        placeholder: props.placeholder.as_deref(),
        source: props.source.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{ComponentKind, StyleValue};

    #[test]
    fn test_shorthand_wins_over_style() {
        let node = ComponentNode::new("n", ComponentKind::Container)
            .with_style("padding", 8)
            .with_shorthand(Shorthand::Padding, 4);

        let resolved = resolve(&node);
        assert_eq!(resolved.style["padding"], StyleValue::from(4));
        assert_eq!(resolved.style.len(), 1);
    }

    #[test]
    fn test_order_nested_first_then_new_shorthands() {
        let node = ComponentNode::new("n", ComponentKind::Text)
            .with_style("textAlign", "center")
            .with_style("fontSize", 10)
            .with_shorthand(Shorthand::Color, "#333")
            .with_shorthand(Shorthand::FontSize, 24);

        let resolved = resolve(&node);
        let keys: Vec<_> = resolved.style.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["textAlign", "fontSize", "color"]);
        assert_eq!(resolved.style["fontSize"], StyleValue::from(24));
    }

    #[test]
    fn test_absent_everything_is_empty() {
        let node = ComponentNode::new("n", ComponentKind::Image);
        let resolved = resolve(&node);
        assert!(resolved.style.is_empty());
        assert!(resolved.text.is_none());
        assert!(resolved.source.is_none());
    }

    #[test]
    fn test_content_props_are_not_style() {
        let node = ComponentNode::new("n", ComponentKind::TextInput)
            .with_placeholder("Search")
            .with_text("value");

        let resolved = resolve(&node);
        assert!(resolved.style.is_empty());
        assert_eq!(resolved.placeholder, Some("Search"));
        assert_eq!(resolved.text, Some("value"));
    }

    #[test]
    fn test_zero_shorthand_is_kept() {
        let node = ComponentNode::new("n", ComponentKind::Card).with_shorthand(Shorthand::Margin, 0);
        assert_eq!(resolve(&node).style["margin"], StyleValue::from(0));
    }
}
