//! # Validation Orchestrator
//!
//! Entry point for validation runs. A [`Validator`] owns the configuration
//! and the finding collector of its latest run; each call to
//! [`Validator::validate`] is one run that walks one record tree
//! depth-first, dispatching to the record type's rule set and recursing
//! through child collections.
//!
//! A `Validator` may be reused for several trees. Every call starts a new
//! collector, so ordinals always count from zero within a run.

use crate::config::ValidatorConfig;
use crate::context::RuleContext;
use crate::finding::{Findings, Severity};
use crate::rules::Validate;

/// Drives validation runs and holds the findings of the latest one.
#[derive(Debug, Default)]
pub struct Validator {
    config: ValidatorConfig,
    findings: Findings,
}

impl Validator {
    /// A validator with a fresh collector.
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            findings: Findings::new(),
        }
    }

    /// Run validation over one record tree, repairing it in place where the
    /// configuration allows. Findings of any earlier run are discarded. A
    /// `None` subject yields a single NULL_SUBJECT error.
    pub fn validate<R: Validate>(&mut self, subject: Option<&mut R>) -> &Findings {
        let kind = R::KIND;
        let span = tracing::debug_span!(
            "validate",
            kind = %kind,
            autorepair = self.config.autorepair,
            collection_initialization = self.config.collection_initialization,
        );
        let _enter = span.enter();

        self.findings = Findings::new();
        let mut cx = RuleContext::new(&self.config, &mut self.findings, kind);
        cx.visit(subject);

        tracing::debug!(
            errors = self.findings.count(Severity::Error),
            warnings = self.findings.count(Severity::Warning),
            infos = self.findings.count(Severity::Info),
            "validation complete"
        );
        &self.findings
    }

    /// Findings of the latest run.
    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    /// Hand over the findings of the latest run.
    pub fn into_findings(self) -> Findings {
        self.findings
    }
}

/// Validate one record tree with a fresh collector.
pub fn validate<R: Validate>(config: ValidatorConfig, subject: Option<&mut R>) -> Findings {
    let mut validator = Validator::new(config);
    validator.validate(subject);
    validator.into_findings()
}
