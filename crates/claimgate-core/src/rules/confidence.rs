//! Confidence ceiling rule.
//!
//! The declared `confidence_score` may not exceed the ceiling of the
//! claim's `source_type`. Unrecognised source types raise a WARN and skip
//! the ceiling comparison.

use crate::claim::{Claim, SourceType};
use crate::config::CeilingPolicy;
use crate::issue::{Issue, IssueCode};

use super::ClaimRule;

pub struct ConfidenceCeilingRule {
    ceilings: CeilingPolicy,
}

impl ConfidenceCeilingRule {
    pub fn new(ceilings: CeilingPolicy) -> Self {
        Self { ceilings }
    }
}

impl Default for ConfidenceCeilingRule {
    fn default() -> Self {
        Self::new(CeilingPolicy::default())
    }
}

impl ClaimRule for ConfidenceCeilingRule {
    fn name(&self) -> &'static str {
        "confidence_ceiling"
    }

    fn check(&self, claim: &Claim, issues: &mut Vec<Issue>) {
        let Some(raw) = claim.source_type.as_deref() else {
            return;
        };

        let source_type = match raw.parse::<SourceType>() {
            Ok(source_type) => source_type,
            Err(_) => {
                issues.push(Issue::new(
                    IssueCode::InvalidSourceType,
                    &claim.id,
                    format!(
                        "Unrecognised source_type '{}' (expected DIRECT, PARTIAL or CONTEXT)",
                        raw
                    ),
                ));
                return;
            }
        };

        let ceiling = self.ceilings.ceiling(source_type);
        if let Some(score) = claim.confidence_score {
            if score > ceiling {
                issues.push(Issue::new(
                    IssueCode::ConfidenceExceedsCeiling,
                    &claim.id,
                    format!(
                        "confidence_score {} exceeds {} ceiling {}",
                        score, source_type, ceiling
                    ),
                ));
            }
        }
    }
}
