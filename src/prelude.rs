//! Prelude module for common imports.
//!
//! ```
//! use html_delta::prelude::*;
//! ```

// Node types
pub use crate::node::{Document, Element, Node, Text};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Delta types
pub use crate::delta::{Attributes, Delta, ListKind, Op};

// Conversion
pub use crate::convert::{convert, convert_document, convert_with};

// Parsing
pub use crate::parse::{HtmlParser, MarkupParser};

// Sync
pub use crate::sync::{
    sync_document, sync_document_with, DocumentStore, Fields, MemoryStore, SyncOutcome,
};

// Error
pub use crate::error::{DeltaError, DeltaResult};
