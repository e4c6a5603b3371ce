//! # Record Kinds
//!
//! Explicit tag for every validatable record type. Findings carry the
//! kind of their subject so reporters can group and filter without
//! inspecting the record itself.

use serde::{Deserialize, Serialize};

/// The kind of a validatable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A person record owning names, citations and notes.
    Individual,
    /// One name of an individual.
    PersonalName,
    /// A phonetic or romanized variation of a personal name.
    PersonalNameVariation,
    /// A source citation, with or without a source record.
    Citation,
    /// A note, either inline text or a reference to a note record.
    Note,
    /// A user-defined tag outside the standard vocabulary.
    CustomTag,
}

impl RecordKind {
    /// All record kinds, in declaration order.
    pub const ALL: [RecordKind; 6] = [
        Self::Individual,
        Self::PersonalName,
        Self::PersonalNameVariation,
        Self::Citation,
        Self::Note,
        Self::CustomTag,
    ];

    /// Snake-case name, also used as the root segment of subject paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::PersonalName => "personal_name",
            Self::PersonalNameVariation => "personal_name_variation",
            Self::Citation => "citation",
            Self::Note => "note",
            Self::CustomTag => "custom_tag",
        }
    }

    /// Human-readable name used in finding messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::PersonalName => "personal name",
            Self::PersonalNameVariation => "personal name variation",
            Self::Citation => "citation",
            Self::Note => "note",
            Self::CustomTag => "custom tag",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
