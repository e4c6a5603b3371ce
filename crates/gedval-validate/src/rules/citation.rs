use gedval_core::citation::parse_certainty;
use gedval_core::{Citation, RecordKind};

use super::Validate;
use crate::context::RuleContext;
use crate::finding::FindingKind;

impl Validate for Citation {
    const KIND: RecordKind = RecordKind::Citation;

    fn validate(&mut self, cx: &mut RuleContext<'_>) {
        match self {
            Citation::WithSource {
                source_xref,
                where_in_source,
                event_cited,
                certainty,
                notes,
                custom_tags,
            } => {
                cx.must_have_value("source_xref", source_xref.as_deref());
                cx.must_have_value_or_be_omitted("where_in_source", where_in_source.as_deref());
                cx.must_have_value_or_be_omitted("event_cited", event_cited.as_deref());
                cx.must_have_value_or_be_omitted("certainty", certainty.as_deref());
                cx.must_be_well_formed_xref("source_xref", source_xref.as_deref());
                check_certainty(cx, certainty.as_deref());
                cx.check_children("notes", notes);
                cx.check_children("custom_tags", custom_tags);
            }
            Citation::WithoutSource {
                description,
                notes,
                custom_tags,
            } => {
                cx.must_have_value("description", description.as_deref());
                cx.check_children("notes", notes);
                cx.check_children("custom_tags", custom_tags);
            }
        }
    }
}

/// Certainty is a quality-of-data assessment `0` through `3`. Blank values
/// are already reported by the presence check.
fn check_certainty(cx: &mut RuleContext<'_>, certainty: Option<&str>) {
    let Some(value) = certainty.filter(|v| !v.trim().is_empty()) else {
        return;
    };
    if parse_certainty(value).is_none() {
        cx.add_error(
            FindingKind::InvalidValue,
            Some("certainty"),
            format!("certainty on citation must be 0, 1, 2 or 3, found {value:?}"),
        );
    }
}
