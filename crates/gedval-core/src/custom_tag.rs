//! # Custom Tags
//!
//! User-defined tags that fall outside the standard vocabulary. A custom
//! tag may nest further custom tags.

use serde::{Deserialize, Serialize};

use crate::children::Children;

/// A user-defined tag with an optional value and nested children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomTag {
    /// The tag name, e.g. `_MILT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Line value following the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Cross-reference identifier, when the tag points at another record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    /// Nested custom tags.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub children: Children<CustomTag>,
}

impl CustomTag {
    /// A custom tag with the given name and no value.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
