use gedval_core::{PersonalNameVariation, RecordKind};

use super::Validate;
use crate::context::RuleContext;

impl Validate for PersonalNameVariation {
    const KIND: RecordKind = RecordKind::PersonalNameVariation;

    fn validate(&mut self, cx: &mut RuleContext<'_>) {
        cx.must_have_value("variation", self.variation.as_deref());

        cx.must_have_value_or_be_omitted("variation_type", self.variation_type.as_deref());
        cx.must_have_value_or_be_omitted("given", self.given.as_deref());
        cx.must_have_value_or_be_omitted("nickname", self.nickname.as_deref());
        cx.must_have_value_or_be_omitted("prefix", self.prefix.as_deref());
        cx.must_have_value_or_be_omitted("suffix", self.suffix.as_deref());
        cx.must_have_value_or_be_omitted("surname", self.surname.as_deref());
        cx.must_have_value_or_be_omitted("surname_prefix", self.surname_prefix.as_deref());

        cx.check_children("citations", &mut self.citations);
        cx.check_children("notes", &mut self.notes);
        cx.check_children("custom_tags", &mut self.custom_tags);
    }
}
