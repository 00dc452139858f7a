//! FACT structure rules.
//!
//! A FACT must be falsifiable, carry supporting evidence, and stand alone:
//! no dependencies on other claims and no assumptions.

use crate::claim::{Claim, ClaimType};
use crate::issue::{Issue, IssueCode};

use super::ClaimRule;

pub struct FactRule;

impl FactRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FactRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRule for FactRule {
    fn name(&self) -> &'static str {
        "fact"
    }

    fn check(&self, claim: &Claim, issues: &mut Vec<Issue>) {
        if claim.claim_type != Some(ClaimType::Fact) {
            return;
        }

        if claim.falsifiable != Some(true) {
            let observed = match claim.falsifiable {
                Some(value) => value.to_string(),
                None => "missing".to_string(),
            };
            issues.push(Issue::new(
                IssueCode::FactNotFalsifiable,
                &claim.id,
                format!("FACT must be falsifiable (falsifiable: {})", observed),
            ));
        }

        if claim.supporting_evidence().is_empty() {
            issues.push(Issue::new(
                IssueCode::FactNoEvidence,
                &claim.id,
                "FACT requires non-empty evidence or support",
            ));
        }

        let dependencies = claim.dependencies();
        if !dependencies.is_empty() {
            issues.push(Issue::new(
                IssueCode::FactHasDependsOn,
                &claim.id,
                format!(
                    "FACT may not depend on other claims (depends_on: {})",
                    dependencies.join(", ")
                ),
            ));
        }

        let assumptions = claim.assumption_list();
        if !assumptions.is_empty() {
            issues.push(Issue::new(
                IssueCode::FactHasAssumptions,
                &claim.id,
                format!("FACT may not rest on assumptions ({} given)", assumptions.len()),
            ));
        }
    }
}
