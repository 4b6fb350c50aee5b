//! html-delta - HTML to Quill-style Delta conversion
//!
//! Converts a markup string into a flat, ordered sequence of insert-only
//! rich-text operations ("Delta" format). The converter walks the parsed
//! tree depth-first with per-tag rules, propagates formatting attributes,
//! and terminates block elements with explicit line-break operations.
//!
//! ## Modules
//! - `node`: markup tree types (`Document`, `Element`, `Node`, `Text`)
//! - `attr`: element attribute storage
//! - `parse`: the markup-parser capability (`MarkupParser`, `HtmlParser`)
//! - `delta`: output types (`Delta`, `Op`, `Attributes`)
//! - `convert`: the tree-to-delta conversion itself
//! - `sync`: idempotent persistence of deltas alongside source content
//! - `error`: error types
//!
//! ## Usage
//!
//! ```
//! use html_delta::convert;
//!
//! let delta = convert("<p>Hello</p>");
//! assert_eq!(delta.ops_json().unwrap(), r#"[{"insert":"Hello"},{"insert":"\n"}]"#);
//! ```
//!
//! Conversion is pure and deterministic: no I/O, no shared state, and the
//! same input always serializes byte-identically. That determinism is
//! what lets the `sync` module compare serialized operations to decide
//! whether a stored document needs rewriting.

/// Element attribute storage
pub mod attr;

/// Tree-to-delta conversion
pub mod convert;

/// Delta output types
pub mod delta;

/// Error types
pub mod error;

/// Markup tree node types
pub mod node;

/// Markup parsing capability
pub mod parse;

/// Prelude for common imports
pub mod prelude;

/// Idempotent delta persistence
pub mod sync;

// =============================================================================
// Re-exports
// =============================================================================

pub use attr::{Attrs, AttrsExt};
pub use convert::{convert, convert_document, convert_with};
pub use delta::{Attributes, Delta, ListKind, Op};
pub use error::{DeltaError, DeltaResult};
pub use node::{Document, Element, Node, Text};
pub use parse::{HtmlParser, MarkupParser};
pub use sync::{sync_document, sync_document_with, DocumentStore, MemoryStore, SyncOutcome};
