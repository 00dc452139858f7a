//! # claimgate-core
//!
//! Deterministic semantic validation ("Gate 2") for evidentiary claims.
//!
//! Given a list of claims that already passed structural checks, this
//! crate answers:
//! - Are FACTs falsifiable, evidenced and free-standing?
//! - Do INFERENCEs cite a basis?
//! - Are declared confidences within their source ceilings?
//! - Is the `depends_on` graph acyclic and free of dangling references?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces the same issues in the same order
//! 2. **Stateless**: Every call builds its own graph and visit tables
//! 3. **Never aborts**: Problems are reported as issues, not errors
//! 4. **No I/O**: `validate` is pure; file loading lives in [`ClaimSet`]
//!
//! ## Example
//!
//! ```rust
//! use claimgate_core::{validate, Claim, IssueCode, Mode};
//!
//! let claims = vec![
//!     Claim::fact("f1").with_falsifiable(true).with_evidence(["lab-report"]),
//!     Claim::inference("i1").with_depends_on(["f1", "ghost"]),
//! ];
//!
//! let result = validate(&claims, Mode::Fail);
//! assert!(!result.ok);
//! assert!(result.has_code(IssueCode::UnknownDependency));
//! ```

pub mod aggregator;
pub mod claim;
pub mod config;
pub mod cycles;
pub mod graph;
pub mod issue;
pub mod payload;
pub mod rules;
pub mod schema;

// Re-export main types at crate root
pub use aggregator::{Aggregator, ValidationResult};
pub use claim::{Claim, ClaimType, SourceType};
pub use config::{CeilingPolicy, ConfigError, Mode, ValidatorConfig};
pub use cycles::CycleDetector;
pub use graph::ClaimGraph;
pub use issue::{Issue, IssueCode, Severity};
pub use payload::ClaimSet;
pub use rules::{ClaimRule, RuleChecker};
pub use schema::{is_valid_payload, validate_payload_schema, SchemaError, CLAIMS_SCHEMA_JSON};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur before semantic validation runs.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Failed to read payload: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Payload rejected by schema: {}", .0.join("; "))]
    Schema(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validate a claim list with the default policy and the given mode.
///
/// This is the main entry point for Gate 2.
///
/// # Arguments
///
/// * `claims` - Claims in input order, duplicates allowed
/// * `mode` - `Mode::Fail` lets ERROR issues fail the verdict; `Mode::Advisory` never fails
///
/// # Returns
///
/// A `ValidationResult` with `ok` and every issue found, in emission order.
pub fn validate(claims: &[Claim], mode: Mode) -> ValidationResult {
    validate_with_config(claims, &ValidatorConfig::with_mode(mode))
}

/// Validate a claim list with an explicit configuration.
///
/// Never fails. A configuration that does not pass
/// [`ValidatorConfig::validate`] (for example a NaN or out-of-range
/// ceiling) is logged and its ceilings are replaced by
/// [`CeilingPolicy::default`]; the mode is kept. Use [`check_payload`] to
/// have a bad configuration rejected instead.
pub fn validate_with_config(claims: &[Claim], config: &ValidatorConfig) -> ValidationResult {
    let ceilings = match config.validate() {
        Ok(()) => config.ceilings,
        Err(err) => {
            warn!(error = %err, "invalid ceilings, using defaults");
            CeilingPolicy::default()
        }
    };

    let (graph, graph_issues) = ClaimGraph::build(claims);
    debug!(
        claims = claims.len(),
        nodes = graph.len(),
        issues = graph_issues.len(),
        "claim graph built"
    );

    let rule_issues = RuleChecker::new(ceilings).check_all(graph.claims());
    debug!(issues = rule_issues.len(), "per-claim rules checked");

    let cycle_issues = CycleDetector::new().detect(&graph);
    debug!(issues = cycle_issues.len(), "dependency graph swept");

    let result = Aggregator::new(config.mode).aggregate(graph_issues, rule_issues, cycle_issues);
    debug!(ok = result.ok, total = result.issues.len(), mode = %config.mode, "validation finished");

    result
}

/// Run Gate 1 on a raw payload, then Gate 2 on the typed claims.
pub fn check_payload(
    payload: serde_json::Value,
    config: &ValidatorConfig,
) -> Result<ValidationResult, GateError> {
    config.validate()?;
    let set = ClaimSet::from_value(payload)?;
    Ok(validate_with_config(&set.claims, config))
}
