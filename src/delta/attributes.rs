//! Formatting attributes carried by an operation.
//!
//! The attribute set is the subset of Quill's format keys this converter
//! can produce. Serialization order is fixed by the struct layout, so two
//! conversions of the same markup serialize byte-identically - the
//! idempotency check in [`crate::sync`] compares serialized strings and
//! depends on this.

use serde::{Deserialize, Serialize};

/// List style for a line terminator. Only bulleted lists are produced;
/// `<ol>` has no rule and falls through to generic descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
}

/// Formatting attributes attached to an insert operation.
///
/// Absent keys are omitted from the serialized form; an all-`None` value
/// never appears on an [`crate::delta::Op`] (the converter attaches
/// `Some(attributes)` only when it has something to say).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<u8>,
}

impl Attributes {
    /// `{bold: true}`
    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Self::default()
        }
    }

    /// `{italic: true}`
    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Self::default()
        }
    }

    /// `{underline: true}`
    pub fn underline() -> Self {
        Self {
            underline: Some(true),
            ..Self::default()
        }
    }

    /// `{link: url}`
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            link: Some(url.into()),
            ..Self::default()
        }
    }

    /// `{list: "bullet"}`
    pub fn bullet() -> Self {
        Self {
            list: Some(ListKind::Bullet),
            ..Self::default()
        }
    }

    /// `{header: level}` - level is 1 through 6.
    pub fn header(level: u8) -> Self {
        debug_assert!((1..=6).contains(&level));
        Self {
            header: Some(level),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_key_serialization() {
        let json = serde_json::to_string(&Attributes::bold()).unwrap();
        assert_eq!(json, r#"{"bold":true}"#);

        let json = serde_json::to_string(&Attributes::link("http://x.com")).unwrap();
        assert_eq!(json, r#"{"link":"http://x.com"}"#);

        let json = serde_json::to_string(&Attributes::bullet()).unwrap();
        assert_eq!(json, r#"{"list":"bullet"}"#);

        let json = serde_json::to_string(&Attributes::header(3)).unwrap();
        assert_eq!(json, r#"{"header":3}"#);
    }

    #[test]
    fn test_roundtrip() {
        let attrs = Attributes::underline();
        let json = serde_json::to_string(&attrs).unwrap();
        let back: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
        assert_eq!(back.bold, None);
    }
}
