//! Bounded breadth-first search for a shortest proof.
//!
//! States are canonical forms; edges are single axiom applications. Every edge has
//! unit cost and the frontier is explored in non-decreasing depth order, so the first
//! discovery of a state is along a shortest path and later rediscoveries are dropped.
//! The depth and size bounds are the only guarantee of termination: fresh placeholders
//! can make the rewrite graph infinite.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::axiom::Axiom;
use super::substitution::FreshNames;
use super::successors::all_successors;
use crate::language::formula::Formula;
use crate::seen::Seen;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// States at this depth are not expanded
    pub max_search_depth: usize,
    /// States whose canonical form is longer than this are not expanded
    pub max_tree_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_search_depth: 8,
            max_tree_size: 20,
        }
    }
}

/// One step of a proof: the axiom used and the formula it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub rule: String,
    /// Position of the axiom in the list the search ran over. Names need not be unique.
    pub axiom: usize,
    pub formula: Formula,
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub success: bool,
    /// Steps from the start (exclusive) to the target (inclusive); empty on failure
    pub path: Vec<ProofStep>,
    /// Number of states taken off the frontier
    pub states_explored: usize,
    pub duration: Duration,
}

struct Visit {
    depth: usize,
    /// The axiom applied and the state it was applied to
    parent: Option<(usize, Formula)>,
}

/// Everything one search knows about the states it has discovered.
#[derive(Default)]
struct SearchRecord {
    visits: HashMap<String, Visit>,
}

impl SearchRecord {
    /// Records `canonical` unless it is already known. The first record always wins.
    fn discover(&mut self, canonical: &str, visit: impl FnOnce() -> Visit) -> Seen<usize> {
        if let Some(existing) = self.visits.get(canonical) {
            return Seen::Old(existing.depth);
        }

        let visit = visit();
        let depth = visit.depth;
        self.visits.insert(canonical.to_string(), visit);
        Seen::New(depth)
    }

    fn depth(&self, canonical: &str) -> usize {
        self.visits[canonical].depth
    }

    /// Follows parent links from `end` back to the start.
    fn path_to(&self, end: Formula, axioms: &[Axiom]) -> Vec<ProofStep> {
        let mut path = Vec::new();
        let mut current = end;

        loop {
            let visit = &self.visits[&current.canonical()];
            let Some((axiom, previous)) = &visit.parent else {
                break;
            };
            let previous = previous.clone();
            path.push(ProofStep {
                rule: axioms[*axiom].name().to_string(),
                axiom: *axiom,
                formula: current,
            });
            current = previous;
        }

        path.reverse();
        path
    }
}

/// Searches for a shortest chain of axiom applications turning `start` into `target`.
///
/// Failing to find one within `config` is a normal outcome, not an error.
pub fn find_shortest_path(
    axioms: &[Axiom],
    start: &Formula,
    target: &Formula,
    config: &SearchConfig,
) -> SearchOutcome {
    let clock = Instant::now();
    let target_key = target.canonical();

    let mut fresh = FreshNames::new();
    let mut record = SearchRecord::default();
    let mut queue = VecDeque::new();
    let mut states_explored = 0;

    let start_key = start.canonical();
    record.discover(&start_key, || Visit {
        depth: 0,
        parent: None,
    });
    queue.push_back((start.clone(), start_key));

    while let Some((state, key)) = queue.pop_front() {
        states_explored += 1;

        if key == target_key {
            let path = record.path_to(state, axioms);
            debug!(
                steps = path.len(),
                states_explored,
                discovered = record.visits.len(),
                "search reached target"
            );
            return SearchOutcome {
                success: true,
                path,
                states_explored,
                duration: clock.elapsed(),
            };
        }

        let depth = record.depth(&key);
        if depth >= config.max_search_depth || key.len() > config.max_tree_size {
            trace!(state = %key, depth, "pruned");
            continue;
        }

        trace!(state = %key, depth, "expanding");
        for successor in all_successors(axioms, &state, &mut fresh) {
            let successor_key = successor.formula.canonical();
            let seen = record.discover(&successor_key, || Visit {
                depth: depth + 1,
                parent: Some((successor.axiom, state.clone())),
            });
            if let Some(successor_depth) = seen.new() {
                trace!(state = %successor_key, depth = successor_depth, rule = successor.rule, "discovered");
                queue.push_back((successor.formula, successor_key));
            }
        }
    }

    debug!(
        states_explored,
        placeholders = fresh.issued(),
        "search exhausted without reaching target"
    );
    SearchOutcome {
        success: false,
        path: Vec::new(),
        states_explored,
        duration: clock.elapsed(),
    }
}
