//! # Rule Context
//!
//! The shared state a rule set works against while validating one record:
//! the run configuration, the finding collector and the path of the record
//! currently being validated. Every rule set builds on the same primitives
//! defined here, so field and collection handling is identical for every
//! record type.
//!
//! ## Primitives
//!
//! - [`must_have_value`](RuleContext::must_have_value): absent or blank is
//!   an error.
//! - [`must_have_value_or_be_omitted`](RuleContext::must_have_value_or_be_omitted):
//!   absent is fine, blank is an error.
//! - [`must_be_well_formed_xref`](RuleContext::must_be_well_formed_xref):
//!   a present cross-reference must look like `@ID@`.
//! - [`ensure_collection_present`](RuleContext::ensure_collection_present):
//!   the only place the autorepair-vs-error decision for absent
//!   collections is made.
//! - [`check_children`](RuleContext::check_children): presence, duplicate
//!   removal and recursion for one child collection.
//!
//! ## Collection States
//!
//! ```text
//! ABSENT ──(autorepair)──▶ EMPTY ──(children validated)──▶ done
//! ABSENT ──(strict)──────▶ done (ERROR, children unvalidated)
//! ABSENT ──(init off)────▶ done (silent)
//! ```

use std::hash::Hash;

use gedval_core::{Children, RecordKind};

use crate::config::ValidatorConfig;
use crate::duplicate::remove_duplicate_children;
use crate::finding::{FindingKind, Findings, SubjectPath, SubjectRef};
use crate::rules::Validate;

/// Validation state for the record currently being visited.
pub struct RuleContext<'a> {
    config: &'a ValidatorConfig,
    findings: &'a mut Findings,
    path: SubjectPath,
    kind: RecordKind,
}

impl<'a> RuleContext<'a> {
    /// A context positioned at the root of a run.
    pub fn new(config: &'a ValidatorConfig, findings: &'a mut Findings, root: RecordKind) -> Self {
        Self {
            config,
            findings,
            path: SubjectPath::root(root),
            kind: root,
        }
    }

    /// Reference to the current record, optionally narrowed to a field.
    pub fn subject(&self, field: Option<&'static str>) -> SubjectRef {
        SubjectRef {
            kind: self.kind,
            path: self.path.clone(),
            field,
        }
    }

    // ── Reporting ────────────────────────────────────────────────────

    /// Report an error against the current record.
    pub fn add_error(
        &mut self,
        kind: FindingKind,
        field: Option<&'static str>,
        message: impl Into<String>,
    ) {
        let subject = self.subject(field);
        self.findings.add_error(subject, kind, message);
    }

    /// Report a warning against the current record.
    pub fn add_warning(
        &mut self,
        kind: FindingKind,
        field: Option<&'static str>,
        message: impl Into<String>,
    ) {
        let subject = self.subject(field);
        self.findings.add_warning(subject, kind, message);
    }

    /// Report an informational finding against the current record.
    pub fn add_info(
        &mut self,
        kind: FindingKind,
        field: Option<&'static str>,
        message: impl Into<String>,
    ) {
        let subject = self.subject(field);
        self.findings.add_info(subject, kind, message);
    }

    // ── Field primitives ─────────────────────────────────────────────

    /// The field is required: absent or blank is an error.
    pub fn must_have_value(&mut self, field: &'static str, value: Option<&str>) {
        if value.map_or(true, is_blank) {
            let message = format!(
                "{} on {} is required but has no value",
                humanize(field),
                self.kind.display_name()
            );
            self.add_error(FindingKind::MissingRequiredValue, Some(field), message);
        }
    }

    /// The field is optional: absent is fine, present but blank is an error.
    pub fn must_have_value_or_be_omitted(&mut self, field: &'static str, value: Option<&str>) {
        if value.is_some_and(is_blank) {
            let message = format!(
                "{} on {} is present but blank",
                humanize(field),
                self.kind.display_name()
            );
            self.add_error(FindingKind::BlankOptionalValue, Some(field), message);
        }
    }

    /// A non-blank cross-reference must be enclosed in `@` delimiters.
    /// Absent and blank values are left to the presence primitives.
    pub fn must_be_well_formed_xref(&mut self, field: &'static str, value: Option<&str>) {
        let Some(xref) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return;
        };
        if !is_well_formed_xref(xref) {
            let message = format!(
                "{} on {} is not a well-formed cross-reference: {xref:?}",
                humanize(field),
                self.kind.display_name()
            );
            self.add_error(FindingKind::InvalidValue, Some(field), message);
        }
    }

    // ── Collection primitives ────────────────────────────────────────

    /// Make sure a child collection exists before its children are checked.
    ///
    /// Returns `true` when the collection is present afterwards. An absent
    /// collection is materialized (INFO) under autorepair, reported (ERROR)
    /// otherwise, and silently skipped when collection initialization is
    /// disabled.
    pub fn ensure_collection_present<T>(
        &mut self,
        field: &'static str,
        children: &mut Children<T>,
    ) -> bool {
        if !children.is_absent() {
            return true;
        }
        if !self.config.collection_initialization {
            return false;
        }
        let kind = self.kind.display_name();
        if self.config.autorepair {
            children.get_or_create();
            tracing::debug!(field, path = %self.path, "materialized absent collection");
            let message = format!("{field} collection for {kind} was absent - autorepaired");
            self.add_info(FindingKind::NullCollection, Some(field), message);
            true
        } else {
            let message = format!("{field} collection for {kind} is absent");
            self.add_error(FindingKind::NullCollection, Some(field), message);
            false
        }
    }

    /// Check one child collection: ensure it is present, remove duplicates
    /// under autorepair, then validate every surviving child.
    ///
    /// Repairing children can make siblings equal (an absent collection on
    /// one becomes the empty collection the other already had), so under
    /// autorepair duplicates are removed again once the children are done.
    pub fn check_children<T>(&mut self, field: &'static str, children: &mut Children<T>)
    where
        T: Validate + Eq + Hash,
    {
        if !self.ensure_collection_present(field, children) {
            return;
        }
        self.drop_duplicates(field, children);
        if let Some(items) = children.get_mut() {
            for (index, child) in items.iter_mut().enumerate() {
                self.descend(field, index, Some(child));
            }
        }
        self.drop_duplicates(field, children);
    }

    fn drop_duplicates<T: Eq + Hash>(&mut self, field: &'static str, children: &mut Children<T>) {
        if !self.config.autorepair {
            return;
        }
        let removed = remove_duplicate_children(children);
        if removed > 0 {
            tracing::debug!(field, removed, path = %self.path, "removed duplicate children");
            let noun = if removed == 1 { "entry" } else { "entries" };
            let message = format!("{removed} duplicate {field} {noun} found and removed");
            self.add_info(FindingKind::DuplicateRemoved, Some(field), message);
        }
    }

    // ── Recursion ────────────────────────────────────────────────────

    /// Validate a subject at the current position. A missing subject yields
    /// one NULL_SUBJECT error and nothing else.
    pub fn visit<R: Validate>(&mut self, subject: Option<&mut R>) {
        match subject {
            Some(record) => record.validate(self),
            None => {
                let message = format!("{} was null - cannot validate", R::KIND.display_name());
                self.add_error(FindingKind::NullSubject, None, message);
            }
        }
    }

    /// Validate a child found at `field[index]` of the current record.
    pub fn descend<R: Validate>(&mut self, field: &'static str, index: usize, child: Option<&mut R>) {
        let parent = self.kind;
        self.path.push(field, index);
        self.kind = R::KIND;
        self.visit(child);
        self.kind = parent;
        self.path.pop();
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_well_formed_xref(xref: &str) -> bool {
    xref.len() > 2
        && xref.starts_with('@')
        && xref.ends_with('@')
        && !xref[1..xref.len() - 1].contains('@')
}

fn humanize(field: &str) -> String {
    field.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;
    use gedval_core::CustomTag;

    fn run<F: FnOnce(&mut RuleContext<'_>)>(config: ValidatorConfig, f: F) -> Findings {
        let mut findings = Findings::new();
        let mut cx = RuleContext::new(&config, &mut findings, RecordKind::PersonalName);
        f(&mut cx);
        findings
    }

    #[test]
    fn test_must_have_value() {
        let findings = run(ValidatorConfig::default(), |cx| {
            cx.must_have_value("basic", None);
            cx.must_have_value("basic", Some("  "));
            cx.must_have_value("basic", Some("John /Smith/"));
        });
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| f.kind == FindingKind::MissingRequiredValue && f.severity == Severity::Error));
        assert_eq!(findings.as_slice()[0].subject.field, Some("basic"));
    }

    #[test]
    fn test_must_have_value_or_be_omitted() {
        let absent = run(ValidatorConfig::default(), |cx| {
            cx.must_have_value_or_be_omitted("surname", None)
        });
        assert!(absent.is_empty());

        let blank = run(ValidatorConfig::default(), |cx| {
            cx.must_have_value_or_be_omitted("surname", Some(" \t"))
        });
        assert_eq!(blank.len(), 1);
        let finding = &blank.as_slice()[0];
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.kind, FindingKind::BlankOptionalValue);
        assert_eq!(finding.message, "surname on personal name is present but blank");

        let filled = run(ValidatorConfig::default(), |cx| {
            cx.must_have_value_or_be_omitted("surname", Some("Smith"))
        });
        assert!(filled.is_empty());
    }

    #[test]
    fn test_well_formed_xref() {
        let findings = run(ValidatorConfig::default(), |cx| {
            cx.must_be_well_formed_xref("xref", Some("@I1@"));
            cx.must_be_well_formed_xref("xref", None);
            cx.must_be_well_formed_xref("xref", Some(""));
            cx.must_be_well_formed_xref("xref", Some("I1"));
            cx.must_be_well_formed_xref("xref", Some("@@"));
            cx.must_be_well_formed_xref("xref", Some("@I@1@"));
        });
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.kind == FindingKind::InvalidValue));
    }

    #[test]
    fn test_absent_collection_repaired() {
        let mut tags: Children<CustomTag> = Children::absent();
        let findings = run(ValidatorConfig::default(), |cx| {
            assert!(cx.ensure_collection_present("custom_tags", &mut tags));
        });
        assert!(tags.get().is_some_and(|t| t.is_empty()));
        assert_eq!(findings.len(), 1);
        let finding = &findings.as_slice()[0];
        assert_eq!(finding.severity, Severity::Info);
        assert_eq!(finding.kind, FindingKind::NullCollection);
        assert_eq!(finding.subject.field, Some("custom_tags"));
    }

    #[test]
    fn test_absent_collection_reported_in_strict_mode() {
        let mut tags: Children<CustomTag> = Children::absent();
        let findings = run(ValidatorConfig::strict(), |cx| {
            assert!(!cx.ensure_collection_present("custom_tags", &mut tags));
        });
        assert!(tags.is_absent());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings.as_slice()[0].severity, Severity::Error);
        assert_eq!(findings.as_slice()[0].kind, FindingKind::NullCollection);
    }

    #[test]
    fn test_absent_collection_skipped_without_initialization() {
        for autorepair in [true, false] {
            let config = ValidatorConfig::default()
                .with_autorepair(autorepair)
                .with_collection_initialization(false);
            let mut tags: Children<CustomTag> = Children::absent();
            let findings = run(config, |cx| {
                assert!(!cx.ensure_collection_present("custom_tags", &mut tags));
            });
            assert!(tags.is_absent());
            assert!(findings.is_empty());
        }
    }

    #[test]
    fn test_present_collection_untouched() {
        let mut tags = Children::from(vec![CustomTag::new("_A")]);
        let findings = run(ValidatorConfig::strict(), |cx| {
            assert!(cx.ensure_collection_present("custom_tags", &mut tags));
        });
        assert!(findings.is_empty());
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_check_children_dedups_and_descends() {
        let mut tags = Children::from(vec![
            CustomTag::new("_A"),
            CustomTag::new("_B"),
            CustomTag::new("_A"),
        ]);
        let findings = run(ValidatorConfig::default(), |cx| {
            cx.check_children("custom_tags", &mut tags);
        });
        assert_eq!(tags.len(), 2);

        let dup: Vec<_> = findings.by_kind(FindingKind::DuplicateRemoved).collect();
        assert_eq!(dup.len(), 1);
        assert_eq!(dup[0].message, "1 duplicate custom_tags entry found and removed");
        assert_eq!(dup[0].subject.kind, RecordKind::PersonalName);

        // Each surviving tag had its nested collection repaired at its own path.
        let repaired: Vec<String> = findings
            .by_kind(FindingKind::NullCollection)
            .map(|f| f.subject.path.to_string())
            .collect();
        assert_eq!(
            repaired,
            vec![
                "personal_name.custom_tags[0]".to_string(),
                "personal_name.custom_tags[1]".to_string(),
            ]
        );
    }

    #[test]
    fn test_check_children_merges_siblings_equal_after_repair() {
        let mut tags = Children::from(vec![
            CustomTag::new("_A"),
            CustomTag {
                children: Children::empty(),
                ..CustomTag::new("_A")
            },
        ]);
        let findings = run(ValidatorConfig::default(), |cx| {
            cx.check_children("custom_tags", &mut tags);
        });
        assert_eq!(tags.len(), 1);
        assert_eq!(findings.by_kind(FindingKind::DuplicateRemoved).count(), 1);
    }

    #[test]
    fn test_check_children_strict_leaves_duplicates() {
        let mut tags = Children::from(vec![
            CustomTag::new("_A").with_value("x"),
            CustomTag::new("_A").with_value("x"),
        ]);
        let findings = run(ValidatorConfig::strict(), |cx| {
            cx.check_children("custom_tags", &mut tags);
        });
        assert_eq!(tags.len(), 2);
        assert_eq!(findings.by_kind(FindingKind::DuplicateRemoved).count(), 0);
    }

    #[test]
    fn test_check_children_strict_absent_skips_recursion() {
        let mut tags: Children<CustomTag> = Children::absent();
        let findings = run(ValidatorConfig::strict(), |cx| {
            cx.check_children("custom_tags", &mut tags);
        });
        assert_eq!(findings.len(), 1);
        assert!(tags.is_absent());
    }

    #[test]
    fn test_visit_null_subject() {
        let findings = run(ValidatorConfig::default(), |cx| {
            cx.visit::<CustomTag>(None);
        });
        assert_eq!(findings.len(), 1);
        let finding = &findings.as_slice()[0];
        assert_eq!(finding.kind, FindingKind::NullSubject);
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.message, "custom tag was null - cannot validate");
    }

    #[test]
    fn test_descend_restores_position() {
        let findings = run(ValidatorConfig::default(), |cx| {
            cx.descend::<CustomTag>("custom_tags", 3, None);
            cx.must_have_value("basic", None);
        });
        let finding = &findings.as_slice()[0];
        assert_eq!(finding.subject.kind, RecordKind::CustomTag);
        assert_eq!(finding.subject.path.to_string(), "personal_name.custom_tags[3]");
        let after = &findings.as_slice()[1];
        assert_eq!(after.subject.kind, RecordKind::PersonalName);
        assert_eq!(after.subject.to_string(), "personal_name.basic");
    }
}
