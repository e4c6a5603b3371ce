//! # Findings
//!
//! Severity-tagged validation outcomes, each bound to the record instance
//! that produced it.
//!
//! ## Subject Identity
//!
//! A finding cannot borrow its subject: the engine mutates the record graph
//! while findings accumulate. Instead every finding carries a
//! [`SubjectRef`]: the subject's [`RecordKind`], its structural path from
//! the run root (`individual.names[0].phonetic[1]`) and, for field- and
//! collection-level findings, the field name. Paths are stable for a given
//! input graph, so repeated runs over equal input produce equal subjects.
//!
//! ## Ordering
//!
//! Findings are append-only. The ordinal assigned at insertion is the
//! iteration order for reporting. Findings are never deduplicated,
//! mutated or removed during a run.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use gedval_core::{GedvalError, RecordKind};

// ─── Severity & Kind ─────────────────────────────────────────────────

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Informational: typically a defect that was autorepaired.
    Info,
    /// Suspicious data that is not strictly invalid.
    Warning,
    /// Invalid data that was not repaired.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// What kind of defect a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingKind {
    /// The subject itself was missing.
    NullSubject,
    /// A required field was absent or blank.
    MissingRequiredValue,
    /// An optional field was present but blank.
    BlankOptionalValue,
    /// A child collection was absent (repaired when severity is Info).
    NullCollection,
    /// Duplicate children were removed.
    DuplicateRemoved,
    /// A field value is present but malformed.
    InvalidValue,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NullSubject => "NULL_SUBJECT",
            Self::MissingRequiredValue => "MISSING_REQUIRED_VALUE",
            Self::BlankOptionalValue => "BLANK_OPTIONAL_VALUE",
            Self::NullCollection => "NULL_COLLECTION",
            Self::DuplicateRemoved => "DUPLICATE_REMOVED",
            Self::InvalidValue => "INVALID_VALUE",
        };
        f.write_str(s)
    }
}

// ─── Subject Paths ───────────────────────────────────────────────────

/// Structural path from the run root to a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectPath {
    root: RecordKind,
    segments: Vec<(&'static str, usize)>,
}

impl SubjectPath {
    /// The path of a run root.
    pub fn root(kind: RecordKind) -> Self {
        Self {
            root: kind,
            segments: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, field: &'static str, index: usize) {
        self.segments.push((field, index));
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for SubjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root.as_str())?;
        for (field, index) in &self.segments {
            write!(f, ".{field}[{index}]")?;
        }
        Ok(())
    }
}

impl Serialize for SubjectPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reference to the record (and optionally the field) a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SubjectRef {
    /// Kind of the subject record.
    pub kind: RecordKind,
    /// Location of the subject record within the validated graph.
    pub path: SubjectPath,
    /// Field of the subject the finding is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl fmt::Display for SubjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{}.{field}", self.path),
            None => write!(f, "{}", self.path),
        }
    }
}

// ─── Finding ─────────────────────────────────────────────────────────

/// One reported validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Position in the run's insertion order.
    pub ordinal: usize,
    /// Severity of the outcome.
    pub severity: Severity,
    /// Defect category.
    pub kind: FindingKind,
    /// Human-readable description.
    pub message: String,
    /// The record instance that produced the finding.
    pub subject: SubjectRef,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.subject, self.message)
    }
}

// ─── Collector ───────────────────────────────────────────────────────

/// Append-only collector for the findings of one validation run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Findings {
    entries: Vec<Finding>,
}

impl Findings {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn add_error(&mut self, subject: SubjectRef, kind: FindingKind, message: impl Into<String>) {
        self.push(Severity::Error, subject, kind, message.into());
    }

    /// Record a warning.
    pub fn add_warning(
        &mut self,
        subject: SubjectRef,
        kind: FindingKind,
        message: impl Into<String>,
    ) {
        self.push(Severity::Warning, subject, kind, message.into());
    }

    /// Record an informational finding.
    pub fn add_info(&mut self, subject: SubjectRef, kind: FindingKind, message: impl Into<String>) {
        self.push(Severity::Info, subject, kind, message.into());
    }

    fn push(&mut self, severity: Severity, subject: SubjectRef, kind: FindingKind, message: String) {
        tracing::trace!(%severity, %kind, subject = %subject, "{message}");
        self.entries.push(Finding {
            ordinal: self.entries.len(),
            severity,
            kind,
            message,
            subject,
        });
    }

    /// All findings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.entries.iter()
    }

    /// All findings as a slice.
    pub fn as_slice(&self) -> &[Finding] {
        &self.entries
    }

    /// Total number of findings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|f| f.severity == severity).count()
    }

    /// Findings with the given severity, in insertion order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.entries.iter().filter(move |f| f.severity == severity)
    }

    /// Error findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Error)
    }

    /// Warning findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Warning)
    }

    /// Informational findings.
    pub fn infos(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Info)
    }

    /// Findings of the given kind, in insertion order.
    pub fn by_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.entries.iter().filter(move |f| f.kind == kind)
    }

    /// Whether any error was found.
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|f| f.severity == Severity::Error)
    }

    /// Reject the run if it produced any error finding.
    pub fn into_result(self) -> Result<Findings, ValidationError> {
        let Some(first) = self.errors().next().map(ToString::to_string) else {
            return Ok(self);
        };
        Err(ValidationError::Rejected {
            errors: self.count(Severity::Error),
            first,
            findings: self,
        })
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// A run rejected because it produced error findings.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// At least one error finding was collected.
    #[error("{errors} validation error(s), first: {first}")]
    Rejected {
        /// Number of error findings.
        errors: usize,
        /// The first error finding, rendered.
        first: String,
        /// Every finding of the rejected run.
        findings: Findings,
    },
}

impl From<ValidationError> for GedvalError {
    fn from(err: ValidationError) -> Self {
        GedvalError::Validation(err.to_string())
    }
}
