//! # gedval-core — Record Model for Genealogical Validation
//!
//! Defines the hierarchical record model that the validation engine in
//! `gedval-validate` walks: individuals, personal names, name variations,
//! citations, notes and custom tags. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Tri-state child collections.** A child collection is either
//!    absent (never materialized), present and empty, or present with
//!    entries. [`Children<T>`] makes the three states explicit so no
//!    consumer can confuse "absent" with "empty".
//!
//! 2. **Exclusive ownership.** A record owns its children. The record graph
//!    is a tree by construction, so traversal needs no cycle detection.
//!
//! 3. **Structural equality.** Every record derives `Eq` and `Hash`. Two
//!    child records are duplicates exactly when they are structurally equal.
//!
//! 4. **Explicit kinds.** [`RecordKind`] tags every record type for
//!    reporting without runtime type inspection.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gedval-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod children;
pub mod citation;
pub mod custom_tag;
pub mod error;
pub mod individual;
pub mod kind;
pub mod name;
pub mod note;

pub use children::{Children, CollectionState};
pub use citation::Citation;
pub use custom_tag::CustomTag;
pub use error::GedvalError;
pub use individual::Individual;
pub use kind::RecordKind;
pub use name::{PersonalName, PersonalNameVariation};
pub use note::Note;
