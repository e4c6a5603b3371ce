//! # Personal Names
//!
//! A personal name carries the full name as written (`basic`, e.g.
//! `John /Smith/`) plus optional broken-out parts. Phonetic and romanized
//! variations of the name are themselves records with the same parts.

use serde::{Deserialize, Serialize};

use crate::children::Children;
use crate::citation::Citation;
use crate::custom_tag::CustomTag;
use crate::note::Note;

/// One name of an individual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonalName {
    /// The name as written, with the surname delimited by slashes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<String>,
    /// Given name(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    /// Nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Name prefix, e.g. `Dr.`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Name suffix, e.g. `Jr.`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Surname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Surname prefix, e.g. `van der`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname_prefix: Option<String>,
    /// Citations supporting the name.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub citations: Children<Citation>,
    /// User-defined tags.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub custom_tags: Children<CustomTag>,
    /// Notes on the name.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub notes: Children<Note>,
    /// Phonetic variations.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub phonetic: Children<PersonalNameVariation>,
    /// Romanized variations.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub romanized: Children<PersonalNameVariation>,
}

impl PersonalName {
    /// A name with the given basic form and all child collections absent.
    pub fn new(basic: impl Into<String>) -> Self {
        Self {
            basic: Some(basic.into()),
            ..Self::default()
        }
    }
}

/// A phonetic or romanized variation of a personal name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonalNameVariation {
    /// The variation as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Method of variation, e.g. `hangul` or `romaji`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_type: Option<String>,
    /// Given name(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    /// Nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Name prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Name suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Surname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Surname prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname_prefix: Option<String>,
    /// Citations supporting the variation.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub citations: Children<Citation>,
    /// Notes on the variation.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub notes: Children<Note>,
    /// User-defined tags.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub custom_tags: Children<CustomTag>,
}

impl PersonalNameVariation {
    /// A variation with the given text and type, all child collections absent.
    pub fn new(variation: impl Into<String>, variation_type: impl Into<String>) -> Self {
        Self {
            variation: Some(variation.into()),
            variation_type: Some(variation_type.into()),
            ..Self::default()
        }
    }
}
