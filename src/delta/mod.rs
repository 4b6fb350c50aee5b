//! Delta output model.
//!
//! A [`Delta`] is an ordered sequence of insert-only operations, each
//! optionally carrying formatting attributes. It is the sole result of
//! conversion: the caller owns it, the converter retains nothing.

mod attributes;
mod op;

pub use attributes::{Attributes, ListKind};
pub use op::Op;

use serde::{Deserialize, Serialize};

use crate::error::{DeltaError, DeltaResult};

/// An ordered sequence of insert operations.
///
/// Invariant: concatenating every op's `insert` string in sequence order
/// reconstructs the linear text content of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub ops: Vec<Op>,
}

impl Delta {
    /// Create a delta from a sequence of operations.
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the delta holds no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The linear text content: every op's `insert` string concatenated
    /// in sequence order.
    pub fn text(&self) -> String {
        self.ops.iter().map(|op| op.insert.as_str()).collect()
    }

    /// Serialize the operation sequence (not the wrapper) to a JSON
    /// array string. This is the form stored and compared by the sync
    /// layer, so it must be byte-deterministic for identical input.
    pub fn ops_json(&self) -> DeltaResult<String> {
        serde_json::to_string(&self.ops).map_err(DeltaError::serialize)
    }
}
