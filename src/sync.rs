//! Keeping a stored document's delta field in step with its content.
//!
//! This is the plumbing around the converter: whenever a document's
//! content field is written, [`sync_document`] derives the delta and
//! merge-writes it back through a [`DocumentStore`]. The flow is
//! idempotent - the serialized operations are compared against the
//! previously stored value, and an unchanged document is never rewritten
//! (rewriting would re-trigger the caller's change notification).
//!
//! Conversion failures are isolated: they are recorded in a dedicated
//! error field on the document and reported via [`SyncOutcome::Failed`],
//! never propagated as an `Err`. Only store I/O failures surface as
//! errors.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::convert::convert_with;
use crate::error::DeltaResult;
use crate::parse::{HtmlParser, MarkupParser};

/// A document's fields, JSON-shaped.
pub type Fields = serde_json::Map<String, Value>;

/// Field read by the sync flow: an array whose first element carries the
/// markup string in its `value` property.
pub const CONTENT_FIELD: &str = "content";

/// Field written on success: the JSON-serialized operation array.
pub const DELTA_FIELD: &str = "content_delta";

/// Field written on conversion failure: a human-readable message.
pub const ERROR_FIELD: &str = "conversion_error";

// =============================================================================
// Store
// =============================================================================

/// Merge-write access to a document store.
///
/// `merge` updates only the given fields, leaving the rest of the
/// document intact.
pub trait DocumentStore {
    fn merge(&self, id: &str, fields: Fields) -> DeltaResult<()>;
}

/// In-process store: a lock-guarded map of document id to fields.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<FxHashMap<String, Fields>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a document's fields, if the document exists.
    pub fn document(&self, id: &str) -> Option<Fields> {
        self.docs.read().get(id).cloned()
    }
}

impl DocumentStore for MemoryStore {
    fn merge(&self, id: &str, fields: Fields) -> DeltaResult<()> {
        let mut docs = self.docs.write();
        docs.entry(id.to_owned()).or_default().extend(fields);
        Ok(())
    }
}

// =============================================================================
// Sync flow
// =============================================================================

/// What a sync pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No usable content field; nothing read, nothing written.
    Skipped,
    /// The stored delta already matches; nothing written.
    Unchanged,
    /// The delta field was merge-written.
    Updated,
    /// Conversion failed; the message was recorded in the error field.
    Failed(String),
}

/// Sync one document using the built-in parser.
pub fn sync_document<S: DocumentStore>(
    store: &S,
    id: &str,
    fields: &Fields,
) -> DeltaResult<SyncOutcome> {
    sync_document_with(&HtmlParser, store, id, fields)
}

/// Sync one document using an injected parser.
///
/// `fields` is the document state after the triggering write; the markup
/// is expected at `content[0].value`. Any other shape means the write was
/// not a content change and the pass is skipped.
pub fn sync_document_with<P, S>(
    parser: &P,
    store: &S,
    id: &str,
    fields: &Fields,
) -> DeltaResult<SyncOutcome>
where
    P: MarkupParser,
    S: DocumentStore,
{
    let Some(html) = content_value(fields) else {
        debug!(doc = id, "no usable content field, skipping");
        return Ok(SyncOutcome::Skipped);
    };

    let serialized = match convert_with(parser, html).and_then(|delta| delta.ops_json()) {
        Ok(serialized) => serialized,
        Err(err) => {
            warn!(doc = id, error = %err, "conversion failed");
            let message = format!("failed to convert: {err}");
            let mut patch = Fields::new();
            patch.insert(ERROR_FIELD.to_owned(), Value::String(message.clone()));
            store.merge(id, patch)?;
            return Ok(SyncOutcome::Failed(message));
        }
    };

    if fields.get(DELTA_FIELD).and_then(Value::as_str) == Some(serialized.as_str()) {
        debug!(doc = id, "stored delta is up to date");
        return Ok(SyncOutcome::Unchanged);
    }

    let mut patch = Fields::new();
    patch.insert(DELTA_FIELD.to_owned(), Value::String(serialized));
    store.merge(id, patch)?;
    info!(doc = id, "delta field updated");
    Ok(SyncOutcome::Updated)
}

/// Extract the markup string from `content[0].value`, if present.
fn content_value(fields: &Fields) -> Option<&str> {
    fields
        .get(CONTENT_FIELD)?
        .as_array()?
        .first()?
        .get("value")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeltaError;
    use crate::node::Document;
    use serde_json::json;

    fn content_fields(html: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert(
            CONTENT_FIELD.to_owned(),
            json!([{ "value": html }]),
        );
        fields
    }

    #[test]
    fn test_skips_unusable_content_shapes() {
        let store = MemoryStore::new();
        let shapes = [
            json!({}),
            json!({ "content": "not an array" }),
            json!({ "content": [] }),
            json!({ "content": [{ "value": 42 }] }),
            json!({ "content": [{ "other": "x" }] }),
        ];
        for shape in shapes {
            let fields = shape.as_object().unwrap().clone();
            let outcome = sync_document(&store, "doc-1", &fields).unwrap();
            assert_eq!(outcome, SyncOutcome::Skipped, "shape: {shape}");
        }
        assert!(store.document("doc-1").is_none());
    }

    #[test]
    fn test_updates_delta_field() {
        let store = MemoryStore::new();
        let fields = content_fields("<p>Hello</p>");

        let outcome = sync_document(&store, "doc-1", &fields).unwrap();
        assert_eq!(outcome, SyncOutcome::Updated);

        let doc = store.document("doc-1").unwrap();
        assert_eq!(
            doc.get(DELTA_FIELD).and_then(Value::as_str),
            Some(r#"[{"insert":"Hello"},{"insert":"\n"}]"#)
        );
        assert!(doc.get(ERROR_FIELD).is_none());
    }

    #[test]
    fn test_unchanged_when_stored_delta_matches() {
        let store = MemoryStore::new();
        let mut fields = content_fields("<p>Hello</p>");
        fields.insert(
            DELTA_FIELD.to_owned(),
            Value::String(r#"[{"insert":"Hello"},{"insert":"\n"}]"#.to_owned()),
        );

        let outcome = sync_document(&store, "doc-1", &fields).unwrap();
        assert_eq!(outcome, SyncOutcome::Unchanged);
        // Nothing was written, so the store never saw the document.
        assert!(store.document("doc-1").is_none());
    }

    #[test]
    fn test_stale_stored_delta_is_rewritten() {
        let store = MemoryStore::new();
        let mut fields = content_fields("<p>New</p>");
        fields.insert(
            DELTA_FIELD.to_owned(),
            Value::String(r#"[{"insert":"Old"},{"insert":"\n"}]"#.to_owned()),
        );

        let outcome = sync_document(&store, "doc-1", &fields).unwrap();
        assert_eq!(outcome, SyncOutcome::Updated);
        let doc = store.document("doc-1").unwrap();
        assert_eq!(
            doc.get(DELTA_FIELD).and_then(Value::as_str),
            Some(r#"[{"insert":"New"},{"insert":"\n"}]"#)
        );
    }

    #[test]
    fn test_conversion_failure_is_isolated() {
        struct RejectingParser;
        impl MarkupParser for RejectingParser {
            fn parse(&self, _html: &str) -> DeltaResult<Document> {
                Err(DeltaError::parse("bad markup"))
            }
        }

        let store = MemoryStore::new();
        let fields = content_fields("<p>x</p>");

        // Failure is reported through the outcome, not as Err.
        let outcome =
            sync_document_with(&RejectingParser, &store, "doc-1", &fields).unwrap();
        let SyncOutcome::Failed(message) = outcome else {
            panic!("expected failure outcome");
        };
        assert!(message.contains("bad markup"));

        let doc = store.document("doc-1").unwrap();
        assert!(doc
            .get(ERROR_FIELD)
            .and_then(Value::as_str)
            .unwrap()
            .contains("bad markup"));
        assert!(doc.get(DELTA_FIELD).is_none());
    }

    #[test]
    fn test_merge_preserves_other_fields() {
        let store = MemoryStore::new();
        let mut seed = Fields::new();
        seed.insert("title".to_owned(), json!("My article"));
        store.merge("doc-1", seed).unwrap();

        let fields = content_fields("<p>body</p>");
        sync_document(&store, "doc-1", &fields).unwrap();

        let doc = store.document("doc-1").unwrap();
        assert_eq!(doc.get("title"), Some(&json!("My article")));
        assert!(doc.get(DELTA_FIELD).is_some());
    }

    #[test]
    fn test_repeated_sync_converges() {
        let store = MemoryStore::new();
        let mut fields = content_fields("<h1>T</h1>");

        assert_eq!(
            sync_document(&store, "doc-1", &fields).unwrap(),
            SyncOutcome::Updated
        );

        // Simulate the trigger firing again on the document it just wrote.
        let written = store.document("doc-1").unwrap();
        fields.insert(
            DELTA_FIELD.to_owned(),
            written.get(DELTA_FIELD).unwrap().clone(),
        );
        assert_eq!(
            sync_document(&store, "doc-1", &fields).unwrap(),
            SyncOutcome::Unchanged
        );
    }
}
