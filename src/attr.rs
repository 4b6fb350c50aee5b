//! Attribute storage for markup elements.
//!
//! Attributes are plain key-value pairs. The converter only ever consults
//! `href` (on anchors), but the storage stays generic so the parser can
//! carry everything the source markup declared.

/// Element attributes as simple key-value pairs.
///
/// A `Vec` of pairs rather than a map: attribute counts are tiny, document
/// order is preserved, and lookup is a linear scan.
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on [`Attrs`].
pub trait AttrsExt {
    /// Get an attribute value by name.
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists.
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update).
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Remove an attribute by name, returning the old value if present.
    fn remove_attr(&mut self, name: &str) -> Option<String>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_operations() {
        let mut attrs: Attrs = Vec::new();

        attrs.set_attr("href", "https://example.com");
        attrs.set_attr("title", "Example");
        assert_eq!(attrs.len(), 2);

        assert_eq!(attrs.get_attr("href"), Some("https://example.com"));
        assert_eq!(attrs.get_attr("title"), Some("Example"));
        assert_eq!(attrs.get_attr("class"), None);

        assert!(attrs.has_attr("href"));
        assert!(!attrs.has_attr("class"));

        // Update existing
        attrs.set_attr("href", "https://example.org");
        assert_eq!(attrs.get_attr("href"), Some("https://example.org"));
        assert_eq!(attrs.len(), 2);

        let removed = attrs.remove_attr("title");
        assert_eq!(removed.as_deref(), Some("Example"));
        assert!(!attrs.has_attr("title"));
        assert_eq!(attrs.len(), 1);
    }
}
