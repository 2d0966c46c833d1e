//! Lowers component nodes into printable elements.

use crate::mapper::map_kind;
use crate::printer::{object_key, AttrValue, Body, PrintNode};
use crate::resolver::resolve;
use blueprint_core::{quote, ComponentKind, ComponentNode, StyleMap};

/// Lower sibling nodes, preserving order.
pub fn lower(nodes: &[ComponentNode]) -> Vec<PrintNode> {
    nodes.iter().map(lower_node).collect()
}

/// Lower a single node and its descendants.
pub fn lower_node(node: &ComponentNode) -> PrintNode {
    let resolved = resolve(node);
    let spec = map_kind(&node.kind);

    let mut element = PrintNode::new(spec.primitive.name());

    if !resolved.style.is_empty() {
        element = element.with_attr("style", AttrValue::Expression(style_object(&resolved.style)));
    }

    match (&node.kind, resolved.placeholder, resolved.source) {
        (ComponentKind::TextInput, Some(placeholder), _) => {
            element = element.with_attr("placeholder", AttrValue::Literal(placeholder.to_string()));
        }
        (ComponentKind::Image, _, Some(source)) => {
            element = element.with_attr(
                "source",
                AttrValue::Expression(format!("{{uri: {}}}", quote(source))),
            );
        }
        _ => {}
    }

    let body = if !node.children.is_empty() {
        if !spec.wraps_children {
            tracing::debug!(
                id = %node.id,
                kind = %node.kind,
                "emitting children under a non-structural primitive"
            );
        }
        Body::Children(lower(&node.children))
    } else {
        match resolved.text {
            Some(text) if spec.accepts_text => Body::Text(text.to_string()),
            _ => Body::Empty,
        }
    };

    element.with_body(body)
}

/// Serialize a resolved style as an inline object literal.
fn style_object(style: &StyleMap) -> String {
    let pairs: Vec<String> = style
        .iter()
        .map(|(key, value)| format!("{}: {}", object_key(key), value.to_js_literal()))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::print;
    use blueprint_core::Shorthand;

    #[test]
    fn test_text_input_self_closes_with_placeholder() {
        let node = ComponentNode::new("in", ComponentKind::TextInput).with_placeholder("Add a new task...");
        assert_eq!(
            print(&lower(&[node]), 0),
            r#"<TextInput placeholder="Add a new task..." />"#
        );
    }

    #[test]
    fn test_placeholder_ignored_on_other_kinds() {
        let node = ComponentNode::new("t", ComponentKind::Text).with_placeholder("nope");
        assert_eq!(print(&lower(&[node]), 0), "<Text />");
    }

    #[test]
    fn test_image_source() {
        let node = ComponentNode::new("img", ComponentKind::Image)
            .with_source("https://example.com/a.png")
            .with_style("width", "100%");
        assert_eq!(
            print(&lower(&[node]), 0),
            r#"<Image style={{width: "100%"}} source={{uri: "https://example.com/a.png"}} />"#
        );
    }

    #[test]
    fn test_container_wraps_indented_child() {
        let node = ComponentNode::new("root", ComponentKind::Container)
            .with_child(ComponentNode::new("t", ComponentKind::Text).with_text("Hello"));

        let out = print(&lower(&[node]), 1);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec![
            "  <Container>",
            "    <Text>{\"Hello\"}</Text>",
            "  </Container>",
        ]);
    }

    #[test]
    fn test_children_take_precedence_over_text() {
        let node = ComponentNode::new("b", ComponentKind::Button)
            .with_text("ignored")
            .with_child(ComponentNode::new("i", ComponentKind::Icon).with_text("★"));

        let out = print(&lower(&[node]), 0);
        assert_eq!(out, "<Button>\n  <Text />\n</Button>");
    }

    #[test]
    fn test_header_text_is_not_content() {
        let node = ComponentNode::new("h", ComponentKind::Header)
            .with_text("Todo List")
            .with_shorthand(Shorthand::Padding, 20);
        assert_eq!(print(&lower(&[node]), 0), "<Container style={{padding: 20}} />");
    }

    #[test]
    fn test_unknown_kind_passes_through() {
        let node = ComponentNode::new("m", ComponentKind::Other("MapView".to_string()))
            .with_style("flex", 1);
        assert_eq!(print(&lower(&[node]), 0), "<MapView style={{flex: 1}} />");
    }

    #[test]
    fn test_style_serialization_order_and_literals() {
        let node = ComponentNode::new("b", ComponentKind::Button)
            .with_text("Add Task")
            .with_style("textAlign", "center")
            .with_style("fontWeight", "bold")
            .with_shorthand(Shorthand::BackgroundColor, "#34C759")
            .with_shorthand(Shorthand::Padding, 12);

        assert_eq!(
            print(&lower(&[node]), 0),
            r##"<Button style={{textAlign: "center", fontWeight: "bold", backgroundColor: "#34C759", padding: 12}}>{"Add Task"}</Button>"##
        );
    }
}
