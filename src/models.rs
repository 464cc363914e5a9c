//! Frontend Models
//!
//! Data structures matching the remote todo API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned note identifier.
///
/// The API reports `_id` either as a JSON number or as a string, so both
/// shapes are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Number(i64),
    Text(String),
}

impl NoteId {
    /// Numeric coercion of the identifier.
    ///
    /// Text ids coerce like a browser's `Number(...)`: surrounding whitespace
    /// is ignored, an empty string is zero, anything else non-numeric is `None`.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            NoteId::Number(n) => Some(*n as f64),
            NoteId::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
                }
            }
        }
    }

    /// True when `self` is a numeric id equal to the coerced `other`.
    ///
    /// A stored `Text` id never matches, even if it looks numeric.
    pub fn matches_coerced(&self, other: &NoteId) -> bool {
        match (self, other.coerce_number()) {
            (NoteId::Number(n), Some(coerced)) => (*n as f64) == coerced,
            _ => false,
        }
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Number(n) => write!(f, "{}", n),
            NoteId::Text(s) => f.write_str(s),
        }
    }
}

/// A single to-do entry as kept in local state
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub value: String,
    pub is_complete: bool,
}

/// Note record as listed by the server
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRecord {
    pub value: String,
    #[serde(rename = "_id")]
    pub id: NoteId,
    #[serde(default)]
    pub checked: bool,
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        Note {
            id: record.id,
            value: record.value,
            is_complete: record.checked,
        }
    }
}

/// Response to a create request. Every field is optional: a rejected create
/// answers with an error body instead of a record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedRecord {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(rename = "_id", default)]
    pub id: Option<NoteId>,
    #[serde(default)]
    pub checked: bool,
}

impl CreatedRecord {
    /// Translate into the local shape; `None` if the record lacks an id or a value
    pub fn into_note(self) -> Option<Note> {
        let value = self.value.filter(|v| !v.is_empty())?;
        Some(Note {
            id: self.id?,
            value,
            is_complete: self.checked,
        })
    }
}

/// Completion counts over all notes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub not_completed: usize,
}

impl Statistics {
    pub fn summary(&self) -> String {
        format!("{} total, {} completed, {} open", self.total, self.completed, self.not_completed)
    }
}
