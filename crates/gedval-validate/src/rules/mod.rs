//! # Rule Sets
//!
//! One rule set per record type, each implementing [`Validate`]. Rule sets
//! are thin: they call the [`RuleContext`] primitives in a fixed order so
//! findings for one record always come out in the same sequence:
//!
//! 1. required fields
//! 2. optional fields
//! 3. record-specific format rules
//! 4. child collections, in declaration order
//!
//! Dispatch is static. The engine never inspects a record's type at
//! runtime; [`Validate::KIND`] tags findings with the record kind.

mod citation;
mod custom_tag;
mod individual;
mod name_variation;
mod note;
mod personal_name;

use gedval_core::RecordKind;

use crate::context::RuleContext;

/// A record type the engine can validate.
pub trait Validate {
    /// Kind reported on findings about this record.
    const KIND: RecordKind;

    /// Apply this record type's rules, reporting into `cx` and recursing
    /// into children through [`RuleContext::check_children`].
    fn validate(&mut self, cx: &mut RuleContext<'_>);
}
