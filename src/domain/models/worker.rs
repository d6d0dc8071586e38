//! Worker directory entity.
//!
//! Workers are owned by an external directory; the engine only consumes a
//! worker's identity for grouping and its display attributes for reports.

use serde::{Deserialize, Serialize};

/// A worker as resolved from the external directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Directory identifier. Ordering on this id is the tie-break rule for
    /// best-worker selection.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Worker {
    /// Display name used by the presentation layer.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
