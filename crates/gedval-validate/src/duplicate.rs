//! # Duplicate Handler
//!
//! Removes structurally equal entries from a child collection in place.
//! The first occurrence of each value survives and survivors keep their
//! relative order. Runs in one pass with a hash set of seen entries.
//!
//! Duplicate removal is a repair, not a validation rule: the engine only
//! calls it when autorepair is enabled, and strict runs leave duplicates
//! in place without reporting them.

use std::collections::HashSet;
use std::hash::Hash;

use gedval_core::Children;

/// Remove duplicates from `items`, keeping first occurrences in order.
/// Returns the number of entries removed.
pub fn remove_duplicates<T: Eq + Hash>(items: &mut Vec<T>) -> usize {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(items.len());
        items.iter().map(|item| seen.insert(item)).collect()
    };
    let before = items.len();
    let mut keep = keep.into_iter();
    // `retain` visits every element exactly once, in order.
    items.retain(|_| keep.next().unwrap_or(true));
    before - items.len()
}

/// Remove duplicates from a child collection. Absent collections are left
/// untouched and report zero removals.
pub fn remove_duplicate_children<T: Eq + Hash>(children: &mut Children<T>) -> usize {
    children.get_mut().map_or(0, remove_duplicates)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output holds each distinct input value once, in first-seen order.
        #[test]
        fn keeps_first_occurrences_in_order(input in prop::collection::vec(0u8..8, 0..40)) {
            let mut items = input.clone();
            let removed = remove_duplicates(&mut items);

            let mut expected = Vec::new();
            for v in &input {
                if !expected.contains(v) {
                    expected.push(*v);
                }
            }
            prop_assert_eq!(&items, &expected);
            prop_assert_eq!(removed, input.len() - expected.len());
        }

        /// A second pass never removes anything.
        #[test]
        fn second_pass_is_noop(input in prop::collection::vec(0u8..8, 0..40)) {
            let mut items = input;
            remove_duplicates(&mut items);
            prop_assert_eq!(remove_duplicates(&mut items), 0);
        }
    }
}
