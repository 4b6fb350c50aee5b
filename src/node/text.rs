//! Text node type.

/// Text content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Raw character content, possibly empty.
    pub content: String,
}

impl Text {
    /// Create a new text node.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check if the content is only whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.content.trim().is_empty()
    }
}
