//! Markup tree node types.
//!
//! The parsed representation of an HTML string: a tree of [`Element`] and
//! [`Text`] nodes rooted at a [`Document`] (the `<body>` equivalent). The
//! tree is read-only during conversion; traversal is always document order
//! (pre-order, children left-to-right).

mod document;
mod element;
mod text;

pub use document::Document;
pub use element::Element;
pub use text::Text;

/// Node in a markup tree - either Element or Text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    /// Create a text node from a string.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }

    /// Create an element node.
    pub fn element(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }

    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Append this node's flattened text content to `out`.
    ///
    /// For text nodes this is the content itself; for elements it is all
    /// descendant text in document order, ignoring tag structure.
    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&t.content),
            Node::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }
}
