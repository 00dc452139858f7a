//! INFERENCE basis rule.

use crate::claim::{Claim, ClaimType};
use crate::issue::{Issue, IssueCode};

use super::ClaimRule;

/// An INFERENCE must cite at least one dependency or assumption.
pub struct InferenceRule;

impl InferenceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InferenceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRule for InferenceRule {
    fn name(&self) -> &'static str {
        "inference"
    }

    fn check(&self, claim: &Claim, issues: &mut Vec<Issue>) {
        if claim.claim_type != Some(ClaimType::Inference) {
            return;
        }

        if claim.dependencies().is_empty() && claim.assumption_list().is_empty() {
            issues.push(Issue::new(
                IssueCode::InferenceNoBasis,
                &claim.id,
                "INFERENCE must cite at least one dependency or assumption",
            ));
        }
    }
}
