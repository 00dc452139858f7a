//! Per-claim rules.
//!
//! Each rule looks at one claim in isolation and appends any issues it
//! finds. Rules never short-circuit each other: every rule runs on every
//! list entry, duplicates included.

mod confidence;
mod fact;
mod inference;

pub use confidence::ConfidenceCeilingRule;
pub use fact::FactRule;
pub use inference::InferenceRule;

use tracing::debug;

use crate::claim::Claim;
use crate::config::CeilingPolicy;
use crate::issue::Issue;

/// A structural rule applied to a single claim.
pub trait ClaimRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Append issues for `claim` to `issues`.
    fn check(&self, claim: &Claim, issues: &mut Vec<Issue>);
}

/// Runs the standard rule set, in order, over a claim list.
pub struct RuleChecker {
    rules: Vec<Box<dyn ClaimRule>>,
}

impl RuleChecker {
    /// FACT rules, then the INFERENCE rule, then the confidence ceiling rule.
    pub fn new(ceilings: CeilingPolicy) -> Self {
        Self {
            rules: vec![
                Box::new(FactRule::new()),
                Box::new(InferenceRule::new()),
                Box::new(ConfidenceCeilingRule::new(ceilings)),
            ],
        }
    }

    /// Check one claim against every rule.
    pub fn check_claim(&self, claim: &Claim) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            rule.check(claim, &mut issues);
        }
        issues
    }

    /// Check every entry of `claims`, preserving list order.
    pub fn check_all(&self, claims: &[Claim]) -> Vec<Issue> {
        let mut issues = Vec::new();
        for claim in claims {
            for rule in &self.rules {
                let before = issues.len();
                rule.check(claim, &mut issues);
                if issues.len() > before {
                    debug!(
                        rule = rule.name(),
                        claim_id = %claim.id,
                        found = issues.len() - before,
                        "rule raised issues"
                    );
                }
            }
        }
        issues
    }
}

impl Default for RuleChecker {
    fn default() -> Self {
        Self::new(CeilingPolicy::default())
    }
}
