//! # Notes
//!
//! A note is either inline text or a cross-reference to a shared note
//! record. A note carrying neither is incomplete.

use serde::{Deserialize, Serialize};

use crate::children::Children;
use crate::citation::Citation;
use crate::custom_tag::CustomTag;

/// A note attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Cross-reference to a note record, e.g. `@N1@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    /// Inline note text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Citations supporting the note.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub citations: Children<Citation>,
    /// User-defined tags.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub custom_tags: Children<CustomTag>,
}

impl Note {
    /// An inline note.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A reference to a shared note record.
    pub fn reference(xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::default()
        }
    }
}
