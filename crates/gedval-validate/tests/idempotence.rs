//! Property tests over generated name trees: a second autorepair run has
//! nothing left to repair and only ever shrinks the set of non-INFO
//! findings, and strict runs never touch the tree.

use std::collections::HashMap;

use gedval_core::{Children, Citation, CustomTag, Note, PersonalName, PersonalNameVariation};
use gedval_validate::{validate, FindingKind, Findings, Severity, ValidatorConfig};
use proptest::prelude::*;

/// Small value pool so duplicates and blanks are frequent.
fn text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("  ".to_string())),
        Just(Some("a".to_string())),
        Just(Some("b".to_string())),
        Just(Some("@X1@".to_string())),
    ]
}

fn children<T, S>(item: S) -> impl Strategy<Value = Children<T>>
where
    T: Clone + std::fmt::Debug,
    S: Strategy<Value = T>,
{
    prop_oneof![
        Just(Children::absent()),
        prop::collection::vec(item, 0..4).prop_map(Children::from),
    ]
}

fn note() -> impl Strategy<Value = Note> {
    (text(), text(), children((text(), text()).prop_map(|(tag, value)| CustomTag {
        tag,
        value,
        ..CustomTag::default()
    })))
        .prop_map(|(xref, text, custom_tags)| Note {
            xref,
            text,
            custom_tags,
            ..Note::default()
        })
}

fn citation() -> impl Strategy<Value = Citation> {
    prop_oneof![
        (text(), text(), prop::option::of("[0-5]"), children(note())).prop_map(
            |(source_xref, where_in_source, certainty, notes)| Citation::WithSource {
                source_xref,
                where_in_source,
                event_cited: None,
                certainty,
                notes,
                custom_tags: Children::absent(),
            }
        ),
        (text(), children(note())).prop_map(|(description, notes)| Citation::WithoutSource {
            description,
            notes,
            custom_tags: Children::empty(),
        }),
    ]
}

fn variation() -> impl Strategy<Value = PersonalNameVariation> {
    (text(), text(), text(), children(citation()), children(note())).prop_map(
        |(variation, variation_type, surname, citations, notes)| PersonalNameVariation {
            variation,
            variation_type,
            surname,
            citations,
            notes,
            ..PersonalNameVariation::default()
        },
    )
}

fn personal_name() -> impl Strategy<Value = PersonalName> {
    let basic = prop_oneof![
        text(),
        Just(Some("John /Smith/".to_string())),
        Just(Some("John /Smith".to_string())),
    ];
    (
        basic,
        text(),
        text(),
        children(citation()),
        children(note()),
        children(variation()),
        children(variation()),
    )
        .prop_map(
            |(basic, given, surname, citations, notes, phonetic, romanized)| PersonalName {
                basic,
                given,
                surname,
                citations,
                notes,
                phonetic,
                romanized,
                ..PersonalName::default()
            },
        )
}

type Key = (Severity, FindingKind, Option<&'static str>, String);

fn non_info(findings: &Findings) -> HashMap<Key, usize> {
    let mut counts = HashMap::new();
    for f in findings.iter().filter(|f| f.severity != Severity::Info) {
        *counts
            .entry((f.severity, f.kind, f.subject.field, f.message.clone()))
            .or_insert(0) += 1;
    }
    counts
}

proptest! {
    /// A second autorepair run repairs nothing and reports no non-INFO
    /// finding the first run did not already report.
    #[test]
    fn second_autorepair_run_adds_nothing(mut name in personal_name()) {
        let first = validate(ValidatorConfig::default(), Some(&mut name));
        let second = validate(ValidatorConfig::default(), Some(&mut name));

        prop_assert_eq!(second.infos().count(), 0, "repair on second run: {:?}", second);

        let before = non_info(&first);
        for (key, count) in non_info(&second) {
            let seen = before.get(&key).copied().unwrap_or(0);
            prop_assert!(count <= seen, "new finding on second run: {:?}", key);
        }
    }

    /// Autorepair leaves every collection of the root present.
    #[test]
    fn autorepair_materializes_root_collections(mut name in personal_name()) {
        validate(ValidatorConfig::default(), Some(&mut name));
        prop_assert!(!name.citations.is_absent());
        prop_assert!(!name.custom_tags.is_absent());
        prop_assert!(!name.notes.is_absent());
        prop_assert!(!name.phonetic.is_absent());
        prop_assert!(!name.romanized.is_absent());
    }

    /// Strict runs report but never repair.
    #[test]
    fn strict_run_never_mutates(mut name in personal_name()) {
        let before = name.clone();
        let findings = validate(ValidatorConfig::strict(), Some(&mut name));
        prop_assert_eq!(&name, &before);
        prop_assert_eq!(findings.count(Severity::Info), 0);
    }

    /// Equal input yields equal findings, in the same order.
    #[test]
    fn runs_are_deterministic(name in personal_name()) {
        let mut a = name.clone();
        let mut b = name;
        let first = validate(ValidatorConfig::default(), Some(&mut a));
        let second = validate(ValidatorConfig::default(), Some(&mut b));
        prop_assert_eq!(first.as_slice(), second.as_slice());
        prop_assert_eq!(a, b);
    }
}
