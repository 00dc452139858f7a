//! Claim graph construction.
//!
//! Builds an identifier-keyed view over a borrowed claim list. The first
//! occurrence of an identifier is authoritative; later repeats are reported
//! as `DUPLICATE_CLAIM_ID` and left out of the map, but remain in
//! [`ClaimGraph::claims`] so the rule checker still sees them.

use std::collections::{HashMap, HashSet};

use crate::claim::Claim;
use crate::issue::{Issue, IssueCode};

/// Deduplicated claim map plus the original list, scoped to one call.
#[derive(Debug)]
pub struct ClaimGraph<'a> {
    claims: &'a [Claim],
    order: Vec<&'a str>,
    nodes: HashMap<&'a str, &'a Claim>,
}

impl<'a> ClaimGraph<'a> {
    /// Build the graph and collect duplicate-identifier issues.
    pub fn build(claims: &'a [Claim]) -> (Self, Vec<Issue>) {
        let mut seen: HashSet<&'a str> = HashSet::with_capacity(claims.len());
        let mut order = Vec::with_capacity(claims.len());
        let mut nodes = HashMap::with_capacity(claims.len());
        let mut issues = Vec::new();

        for claim in claims {
            let id = claim.id.as_str();
            if !seen.insert(id) {
                issues.push(Issue::new(
                    IssueCode::DuplicateClaimId,
                    id,
                    format!("Duplicate claim id '{}'; first occurrence is used for the graph", id),
                ));
                continue;
            }
            order.push(id);
            nodes.insert(id, claim);
        }

        (
            Self {
                claims,
                order,
                nodes,
            },
            issues,
        )
    }

    /// Every input entry, duplicates included, in input order.
    pub fn claims(&self) -> &'a [Claim] {
        self.claims
    }

    /// Unique identifiers in first-insertion order.
    pub fn ids(&self) -> &[&'a str] {
        &self.order
    }

    pub fn get(&self, id: &str) -> Option<&'a Claim> {
        self.nodes.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Outgoing edges of a node; empty for unknown identifiers.
    pub fn dependencies(&self, id: &str) -> &'a [String] {
        self.get(id).map(Claim::dependencies).unwrap_or(&[])
    }

    /// Number of unique nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
