use gedval_core::{Individual, RecordKind};

use super::Validate;
use crate::context::RuleContext;

impl Validate for Individual {
    const KIND: RecordKind = RecordKind::Individual;

    fn validate(&mut self, cx: &mut RuleContext<'_>) {
        cx.must_have_value("xref", self.xref.as_deref());
        cx.must_be_well_formed_xref("xref", self.xref.as_deref());

        cx.check_children("names", &mut self.names);
        cx.check_children("citations", &mut self.citations);
        cx.check_children("notes", &mut self.notes);
        cx.check_children("custom_tags", &mut self.custom_tags);
    }
}
