//! Document type - the root container for a parsed markup tree.

use super::Node;

/// Root of a markup tree: the ordered children of the `<body>` equivalent.
///
/// There is no explicit body element in the model; the document holds the
/// top-level nodes directly, which is what the converter walks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level nodes in document order.
    pub children: Vec<Node>,
}

impl Document {
    /// Create a document from top-level nodes.
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Check if the document has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The document's linear text content: all text nodes concatenated in
    /// document order.
    pub fn flattened_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}
