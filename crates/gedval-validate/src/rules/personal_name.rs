use gedval_core::{PersonalName, RecordKind};

use super::Validate;
use crate::context::RuleContext;
use crate::finding::FindingKind;

impl Validate for PersonalName {
    const KIND: RecordKind = RecordKind::PersonalName;

    fn validate(&mut self, cx: &mut RuleContext<'_>) {
        cx.must_have_value("basic", self.basic.as_deref());

        cx.must_have_value_or_be_omitted("given", self.given.as_deref());
        cx.must_have_value_or_be_omitted("nickname", self.nickname.as_deref());
        cx.must_have_value_or_be_omitted("prefix", self.prefix.as_deref());
        cx.must_have_value_or_be_omitted("suffix", self.suffix.as_deref());
        cx.must_have_value_or_be_omitted("surname", self.surname.as_deref());
        cx.must_have_value_or_be_omitted("surname_prefix", self.surname_prefix.as_deref());

        check_surname_delimiters(cx, self.basic.as_deref());

        cx.check_children("citations", &mut self.citations);
        cx.check_children("custom_tags", &mut self.custom_tags);
        cx.check_children("notes", &mut self.notes);
        cx.check_children("phonetic", &mut self.phonetic);
        cx.check_children("romanized", &mut self.romanized);
    }
}

/// The surname inside a basic name is enclosed in a pair of slashes
/// (`John /Smith/ Jr.`). An odd number of slashes leaves it unterminated.
fn check_surname_delimiters(cx: &mut RuleContext<'_>, basic: Option<&str>) {
    let Some(basic) = basic else {
        return;
    };
    if basic.matches('/').count() % 2 != 0 {
        cx.add_warning(
            FindingKind::InvalidValue,
            Some("basic"),
            format!("basic name {basic:?} has an unterminated surname delimiter"),
        );
    }
}
