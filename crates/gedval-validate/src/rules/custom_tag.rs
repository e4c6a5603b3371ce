use gedval_core::{CustomTag, RecordKind};

use super::Validate;
use crate::context::RuleContext;

impl Validate for CustomTag {
    const KIND: RecordKind = RecordKind::CustomTag;

    fn validate(&mut self, cx: &mut RuleContext<'_>) {
        cx.must_have_value("tag", self.tag.as_deref());
        cx.must_have_value_or_be_omitted("value", self.value.as_deref());
        cx.must_have_value_or_be_omitted("xref", self.xref.as_deref());
        cx.must_be_well_formed_xref("xref", self.xref.as_deref());
        cx.check_children("children", &mut self.children);
    }
}
