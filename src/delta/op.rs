//! Insert operations.

use serde::{Deserialize, Serialize};

use super::Attributes;

/// One insert operation: a span of text (or an explicit line terminator)
/// with optional formatting.
///
/// Serializes as `{"insert": "..."}` or
/// `{"insert": "...", "attributes": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Op {
    pub insert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Op {
    /// Plain insertion with no formatting.
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            insert: text.into(),
            attributes: None,
        }
    }

    /// Formatted insertion.
    pub fn insert_with(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            insert: text.into(),
            attributes: Some(attributes),
        }
    }

    /// Bare line break, the terminator emitted for `<p>` and `<br>`.
    pub fn newline() -> Self {
        Self::insert("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_op_omits_attributes() {
        let json = serde_json::to_string(&Op::insert("Hello")).unwrap();
        assert_eq!(json, r#"{"insert":"Hello"}"#);
    }

    #[test]
    fn test_formatted_op() {
        let op = Op::insert_with("Hi", Attributes::bold());
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"insert":"Hi","attributes":{"bold":true}}"#);
    }

    #[test]
    fn test_newline() {
        assert_eq!(Op::newline().insert, "\n");
        assert!(Op::newline().attributes.is_none());
    }
}
