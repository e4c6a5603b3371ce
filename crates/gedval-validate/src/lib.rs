//! # gedval-validate — Validation & Autorepair Engine
//!
//! Walks a `gedval-core` record tree, enforces field-presence and format
//! rules, optionally repairs recoverable defects, removes duplicate child
//! entries and collects severity-tagged findings bound to the record that
//! produced them.
//!
//! ## Components
//!
//! - [`finding`]: the append-only finding collector and subject references.
//! - [`duplicate`]: order-preserving duplicate removal.
//! - [`config`]: autorepair and collection initialization settings.
//! - [`context`]: the generic primitives every rule set is built from.
//! - [`rules`]: one [`Validate`] implementation per record type.
//! - [`validator`]: the orchestrator that owns a run's collector.
//!
//! ## Run Semantics
//!
//! A run never fails. Every defect becomes a finding and traversal always
//! continues; a missing subject only cuts short its own subtree. Callers
//! that want a hard failure use [`Findings::into_result`].
//!
//! ```
//! use gedval_core::PersonalName;
//! use gedval_validate::{validate, Severity, ValidatorConfig};
//!
//! let mut name = PersonalName::new("John /Smith/");
//! let findings = validate(ValidatorConfig::default(), Some(&mut name));
//! assert_eq!(findings.count(Severity::Error), 0);
//! assert!(name.citations.get().is_some());
//! ```

pub mod config;
pub mod context;
pub mod duplicate;
pub mod finding;
pub mod rules;
pub mod validator;

pub use config::{ConfigError, ValidatorConfig};
pub use context::RuleContext;
pub use duplicate::{remove_duplicate_children, remove_duplicates};
pub use finding::{
    Finding, FindingKind, Findings, Severity, SubjectPath, SubjectRef, ValidationError,
};
pub use rules::Validate;
pub use validator::{validate, Validator};
