//! # Individuals
//!
//! The person record at the root of a name tree.

use serde::{Deserialize, Serialize};

use crate::children::Children;
use crate::citation::Citation;
use crate::custom_tag::CustomTag;
use crate::name::PersonalName;
use crate::note::Note;

/// A person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Individual {
    /// Cross-reference identifier, e.g. `@I1@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    /// Names of the individual, preferred name first.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub names: Children<PersonalName>,
    /// Citations supporting the individual.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub citations: Children<Citation>,
    /// Notes on the individual.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub notes: Children<Note>,
    /// User-defined tags.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub custom_tags: Children<CustomTag>,
}

impl Individual {
    /// An individual with the given xref and all child collections absent.
    pub fn new(xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::default()
        }
    }
}
