//! # Citations
//!
//! A citation either points at a source record (`WithSource`) or carries
//! a free-text description of an unrecorded source (`WithoutSource`).
//! Certainty, when given, is the quality-of-data assessment `0` through
//! `3`.

use serde::{Deserialize, Serialize};

use crate::children::Children;
use crate::custom_tag::CustomTag;
use crate::note::Note;

/// Highest valid certainty assessment.
pub const MAX_CERTAINTY: u8 = 3;

/// A source citation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Citation {
    /// Citation referencing a source record.
    WithSource {
        /// Cross-reference to the source record.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_xref: Option<String>,
        /// Page or location within the source.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        where_in_source: Option<String>,
        /// The event type recorded in the source.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_cited: Option<String>,
        /// Quality-of-data assessment, `0`..=`3`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        certainty: Option<String>,
        /// Notes on the citation.
        #[serde(default, skip_serializing_if = "Children::is_absent")]
        notes: Children<Note>,
        /// User-defined tags.
        #[serde(default, skip_serializing_if = "Children::is_absent")]
        custom_tags: Children<CustomTag>,
    },
    /// Citation describing a source that has no source record.
    WithoutSource {
        /// Free-text description of the source.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// Notes on the citation.
        #[serde(default, skip_serializing_if = "Children::is_absent")]
        notes: Children<Note>,
        /// User-defined tags.
        #[serde(default, skip_serializing_if = "Children::is_absent")]
        custom_tags: Children<CustomTag>,
    },
}

impl Citation {
    /// A citation of the given source record with absent child collections.
    pub fn with_source(source_xref: impl Into<String>) -> Self {
        Self::WithSource {
            source_xref: Some(source_xref.into()),
            where_in_source: None,
            event_cited: None,
            certainty: None,
            notes: Children::absent(),
            custom_tags: Children::absent(),
        }
    }

    /// A citation with a free-text description and absent child collections.
    pub fn without_source(description: impl Into<String>) -> Self {
        Self::WithoutSource {
            description: Some(description.into()),
            notes: Children::absent(),
            custom_tags: Children::absent(),
        }
    }

    /// The citation's notes.
    pub fn notes(&self) -> &Children<Note> {
        match self {
            Self::WithSource { notes, .. } | Self::WithoutSource { notes, .. } => notes,
        }
    }

    /// The citation's custom tags.
    pub fn custom_tags(&self) -> &Children<CustomTag> {
        match self {
            Self::WithSource { custom_tags, .. } | Self::WithoutSource { custom_tags, .. } => {
                custom_tags
            }
        }
    }
}

/// Parse a certainty assessment. Returns `None` for anything other than
/// `0`, `1`, `2` or `3` (surrounding whitespace allowed).
pub fn parse_certainty(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|c| *c <= MAX_CERTAINTY)
}
