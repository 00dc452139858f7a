//! Aggregator: concatenates stage issues into the final result.
//!
//! Verdict policy:
//! 1. Issues keep emission order: builder, rule checker, cycle detector
//! 2. In fail mode, ANY ERROR issue → `ok == false`
//! 3. WARN issues never affect `ok`; advisory mode is always `ok`

use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::issue::{Issue, IssueCode};

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub issues: Vec<Issue>,
}

impl ValidationResult {
    /// Issues with ERROR severity.
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    /// Issues with WARN severity.
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warn_count(&self) -> usize {
        self.warnings().count()
    }

    /// Issues attributed to one claim, in emission order.
    pub fn issues_for<'a>(&'a self, claim_id: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |i| i.claim_id == claim_id)
    }

    pub fn has_code(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}

/// Combines per-stage issues into a [`ValidationResult`].
pub struct Aggregator {
    mode: Mode,
}

impl Aggregator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn aggregate(
        &self,
        graph_issues: Vec<Issue>,
        rule_issues: Vec<Issue>,
        cycle_issues: Vec<Issue>,
    ) -> ValidationResult {
        let mut issues =
            Vec::with_capacity(graph_issues.len() + rule_issues.len() + cycle_issues.len());
        issues.extend(graph_issues);
        issues.extend(rule_issues);
        issues.extend(cycle_issues);

        let ok = !(self.mode.fails_on_error() && issues.iter().any(Issue::is_error));

        ValidationResult { ok, issues }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
