//! Printable element tree and the indenting printer over it.
//!
//! Semantic decisions (which tag, which attributes, whether text becomes
//! content) happen while lowering the component tree into [`PrintNode`]s.
//! This module only deals with syntax: quoting, indentation, and closing
//! tags.

use blueprint_core::quote;

/// Indentation unit for generated markup.
pub const INDENT: &str = "  ";

/// An element ready to be printed.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintNode {
    pub tag: String,
    pub attrs: Vec<Attribute>,
    pub body: Body,
}

/// One element attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

/// Attribute value forms.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A string printed as `name="..."`.
    Literal(String),
    /// An expression printed as `name={...}`.
    Expression(String),
}

/// What an element contains.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Self-closing.
    Empty,
    /// Literal text content on the same line.
    Text(String),
    /// Nested elements, one level deeper.
    Children(Vec<PrintNode>),
}

impl PrintNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.push(Attribute {
            name: name.into(),
            value,
        });
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }
}

/// Render sibling nodes at `level`, joined by newlines.
///
/// Output depends only on the input: no trailing newline, no sorting.
pub fn print(nodes: &[PrintNode], level: usize) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        print_node(node, level, &mut lines);
    }
    lines.join("\n")
}

fn print_node(node: &PrintNode, level: usize, lines: &mut Vec<String>) {
    let pad = INDENT.repeat(level);
    let attrs = render_attrs(&node.attrs);

    match &node.body {
        Body::Children(children) if !children.is_empty() => {
            lines.push(format!("{}<{}{}>", pad, node.tag, attrs));
            for child in children {
                print_node(child, level + 1, lines);
            }
            lines.push(format!("{}</{}>", pad, node.tag));
        }
        Body::Text(text) => {
            lines.push(format!(
                "{}<{}{}>{{{}}}</{}>",
                pad,
                node.tag,
                attrs,
                quote(text),
                node.tag
            ));
        }
        _ => lines.push(format!("{}<{}{} />", pad, node.tag, attrs)),
    }
}

fn render_attrs(attrs: &[Attribute]) -> String {
    let mut out = String::new();
    for attr in attrs {
        out.push(' ');
        out.push_str(&attr.name);
        out.push('=');
        match &attr.value {
            AttrValue::Literal(s) => out.push_str(&quote(s)),
            AttrValue::Expression(expr) => {
                out.push('{');
                out.push_str(expr);
                out.push('}');
            }
        }
    }
    out
}

/// Render an object literal key, quoting it when it is not an identifier.
pub fn object_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if is_ident {
        key.to_string()
    } else {
        quote(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_with_attrs() {
        let node = PrintNode::new("TextInput")
            .with_attr("placeholder", AttrValue::Literal("Add a new task...".to_string()));
        assert_eq!(
            print(&[node], 0),
            r#"<TextInput placeholder="Add a new task..." />"#
        );
    }

    #[test]
    fn test_text_body() {
        let node = PrintNode::new("Text").with_body(Body::Text("Say \"hi\"".to_string()));
        assert_eq!(print(&[node], 1), r#"  <Text>{"Say \"hi\""}</Text>"#);
    }

    #[test]
    fn test_nested_indentation() {
        let tree = PrintNode::new("Container")
            .with_attr("style", AttrValue::Expression("{padding: 4}".to_string()))
            .with_body(Body::Children(vec![
                PrintNode::new("Text").with_body(Body::Text("A".to_string())),
                PrintNode::new("Image"),
            ]));

        let expected = [
            "    <Container style={{padding: 4}}>",
            "      <Text>{\"A\"}</Text>",
            "      <Image />",
            "    </Container>",
        ]
        .join("\n");
        assert_eq!(print(&[tree], 2), expected);
    }

    #[test]
    fn test_empty_children_self_close() {
        let node = PrintNode::new("Container").with_body(Body::Children(vec![]));
        assert_eq!(print(&[node], 0), "<Container />");
    }

    #[test]
    fn test_siblings_no_trailing_newline() {
        let out = print(&[PrintNode::new("A"), PrintNode::new("B")], 0);
        assert_eq!(out, "<A />\n<B />");
        assert_eq!(print(&[], 3), "");
    }

    #[test]
    fn test_object_key() {
        assert_eq!(object_key("padding"), "padding");
        assert_eq!(object_key("_x1"), "_x1");
        assert_eq!(object_key("my-key"), "\"my-key\"");
        assert_eq!(object_key("1st"), "\"1st\"");
    }
}
