//! Dependency cycle and dangling-reference detection.
//!
//! Three-colour depth-first sweep over the claim graph, rooted at every
//! still-unvisited node in first-insertion order. The traversal keeps its
//! own frame stack instead of recursing, so chain depth is bounded by heap
//! rather than the native call stack. Edge order, path framing and
//! attribution are the same as the recursive formulation:
//!
//! - edge to an unknown id: `UNKNOWN_DEPENDENCY` on the source, not followed
//! - edge to an in-progress node: `DEPENDENCY_CYCLE` on the source, with the
//!   path from the target's position on the stack through the source, closed
//!   by the target again; the source then unwinds as done
//! - edge to a done node: nothing
//!
//! A node that closes a cycle follows none of its remaining edges. Those
//! edges are still scanned for unknown targets so no dangling reference
//! goes unreported. Nodes are never entered twice, so every node closes at
//! most one cycle and no cycle node-set is reported twice.

use std::collections::HashMap;

use tracing::trace;

use crate::graph::ClaimGraph;
use crate::issue::{Issue, IssueCode};

/// Separator used when rendering a cycle path.
pub const PATH_SEPARATOR: &str = " -> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

struct Frame<'a> {
    id: &'a str,
    next_edge: usize,
}

/// Cycle detector over one [`ClaimGraph`].
pub struct CycleDetector;

impl CycleDetector {
    pub fn new() -> Self {
        Self
    }

    /// Sweep the whole graph and return issues in discovery order.
    pub fn detect(&self, graph: &ClaimGraph<'_>) -> Vec<Issue> {
        let mut state: HashMap<&str, VisitState> = HashMap::with_capacity(graph.len());
        let mut issues = Vec::new();

        for &root in graph.ids() {
            if state.contains_key(root) {
                continue;
            }

            state.insert(root, VisitState::InProgress);
            let mut stack = vec![Frame {
                id: root,
                next_edge: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                let current = frame.id;
                let dependencies = graph.dependencies(current);

                let Some(target) = dependencies.get(frame.next_edge) else {
                    state.insert(current, VisitState::Done);
                    stack.pop();
                    continue;
                };
                frame.next_edge += 1;
                let remaining = &dependencies[frame.next_edge..];
                let target = target.as_str();

                if !graph.contains(target) {
                    issues.push(unknown_dependency(current, target));
                    continue;
                }

                match state.get(target) {
                    None => {
                        state.insert(target, VisitState::InProgress);
                        stack.push(Frame {
                            id: target,
                            next_edge: 0,
                        });
                    }
                    Some(VisitState::InProgress) => {
                        let path = cycle_path(&stack, target);
                        trace!(claim_id = current, path = %path.join(PATH_SEPARATOR), "cycle found");
                        issues.push(Issue::new(
                            IssueCode::DependencyCycle,
                            current,
                            format!("Dependency cycle: {}", path.join(PATH_SEPARATOR)),
                        ));

                        for rest in remaining.iter().filter(|id| !graph.contains(id)) {
                            issues.push(unknown_dependency(current, rest));
                        }
                        state.insert(current, VisitState::Done);
                        stack.pop();
                    }
                    Some(VisitState::Done) => {}
                }
            }
        }

        issues
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_dependency(claim_id: &str, target: &str) -> Issue {
    Issue::new(
        IssueCode::UnknownDependency,
        claim_id,
        format!("depends_on references unknown claim '{}'", target),
    )
}

/// Stack slice from the first frame for `target` through the top, closed by `target`.
fn cycle_path<'a>(stack: &[Frame<'a>], target: &'a str) -> Vec<&'a str> {
    let start = stack.iter().position(|f| f.id == target).unwrap_or(0);
    let mut path: Vec<&'a str> = stack[start..].iter().map(|f| f.id).collect();
    path.push(target);
    path
}
