//! Issues emitted by the validation pipeline.
//!
//! Issues are data, never control flow. Every code has a fixed severity;
//! `IssueCode::severity` is the only place that mapping lives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much an issue counts against the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Fails the verdict in `fail` mode
    Error,
    /// Reported only, never affects `ok`
    Warn,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mnemonic for every kind of issue the validator can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    DuplicateClaimId,
    FactNotFalsifiable,
    FactNoEvidence,
    FactHasDependsOn,
    FactHasAssumptions,
    InferenceNoBasis,
    InvalidSourceType,
    ConfidenceExceedsCeiling,
    UnknownDependency,
    DependencyCycle,
}

impl IssueCode {
    /// Severity attached to this code.
    pub fn severity(&self) -> Severity {
        match self {
            IssueCode::InvalidSourceType => Severity::Warn,
            _ => Severity::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::DuplicateClaimId => "DUPLICATE_CLAIM_ID",
            IssueCode::FactNotFalsifiable => "FACT_NOT_FALSIFIABLE",
            IssueCode::FactNoEvidence => "FACT_NO_EVIDENCE",
            IssueCode::FactHasDependsOn => "FACT_HAS_DEPENDS_ON",
            IssueCode::FactHasAssumptions => "FACT_HAS_ASSUMPTIONS",
            IssueCode::InferenceNoBasis => "INFERENCE_NO_BASIS",
            IssueCode::InvalidSourceType => "INVALID_SOURCE_TYPE",
            IssueCode::ConfidenceExceedsCeiling => "CONFIDENCE_EXCEEDS_CEILING",
            IssueCode::UnknownDependency => "UNKNOWN_DEPENDENCY",
            IssueCode::DependencyCycle => "DEPENDENCY_CYCLE",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in a claim list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub severity: Severity,

    /// Claim the issue is attributed to
    pub claim_id: String,

    /// Human-readable explanation
    pub message: String,
}

impl Issue {
    /// Create an issue; severity is derived from the code.
    pub fn new(code: IssueCode, claim_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            claim_id: claim_id.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.severity, self.code, self.claim_id, self.message
        )
    }
}
