//! Element type - a markup element with tag, attributes and children.

use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};

use super::Node;

/// Markup element with an ordered list of child nodes.
///
/// The tag name is always lowercase; the parser normalizes it on the way
/// in, and programmatic construction goes through [`Element::new`] which
/// does the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Element attributes in document order.
    pub attrs: Attrs,
    /// Child nodes in document order.
    pub children: SmallVec<[Node; 8]>,
}

impl Element {
    /// Create an empty element with the given tag name (lowercased).
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    /// Builder: add an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Builder: append a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append a text child.
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(Node::text(content))
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// The element's flattened text content: all descendant text
    /// concatenated in document order, ignoring descendant tag structure.
    pub fn flattened_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Iterate over direct children that are themselves elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_lowercased() {
        let elem = Element::new("DIV");
        assert_eq!(elem.tag, "div");
    }

    #[test]
    fn test_flattened_text_ignores_structure() {
        let elem = Element::new("p")
            .with_text("one ")
            .with_child(Node::element(Element::new("b").with_text("two")))
            .with_text(" three");
        assert_eq!(elem.flattened_text(), "one two three");
    }

    #[test]
    fn test_attr_lookup() {
        let elem = Element::new("a").with_attr("href", "https://x.com");
        assert_eq!(elem.attr("href"), Some("https://x.com"));
        assert_eq!(elem.attr("target"), None);
    }
}
