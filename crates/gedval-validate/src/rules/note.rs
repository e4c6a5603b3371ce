use gedval_core::{Note, RecordKind};

use super::Validate;
use crate::context::RuleContext;
use crate::finding::FindingKind;

impl Validate for Note {
    const KIND: RecordKind = RecordKind::Note;

    fn validate(&mut self, cx: &mut RuleContext<'_>) {
        cx.must_have_value_or_be_omitted("xref", self.xref.as_deref());
        cx.must_have_value_or_be_omitted("text", self.text.as_deref());
        cx.must_be_well_formed_xref("xref", self.xref.as_deref());
        if self.xref.is_none() && self.text.is_none() {
            cx.add_error(
                FindingKind::MissingRequiredValue,
                Some("text"),
                "note has neither text nor a cross-reference",
            );
        }
        cx.check_children("citations", &mut self.citations);
        cx.check_children("custom_tags", &mut self.custom_tags);
    }
}
