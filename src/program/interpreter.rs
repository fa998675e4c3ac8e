use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info};

use super::command::{Command, Parameter, Program};
use crate::language::formula::Formula;
use crate::rewriting::search::{ProofStep, SearchConfig, find_shortest_path};
use crate::rewriting::store::AxiomStore;

/// The running configuration. Every `param` command updates it for the goals that
/// follow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchConfig,
    pub use_proofs_as_axioms: bool,
}

impl Settings {
    pub fn apply(&mut self, parameter: Parameter) {
        match parameter {
            Parameter::MaxSearchDepth(depth) => self.search.max_search_depth = depth,
            Parameter::MaxTreeSize(size) => self.search.max_tree_size = size,
            Parameter::UseProofsAsAxioms(enabled) => self.use_proofs_as_axioms = enabled,
        }
    }
}

/// The result of one `prove` command.
#[derive(Clone, Debug, Serialize)]
pub struct GoalOutcome {
    pub start: Formula,
    pub target: Formula,
    pub success: bool,
    pub path: Vec<ProofStep>,
    pub states_explored: usize,
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
    /// The depth bound in effect for this goal
    pub max_search_depth: usize,
}

fn serialize_seconds<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Processes commands in program order against a growing axiom store.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    store: AxiomStore,
    settings: Settings,
}

impl Interpreter {
    pub fn new(settings: Settings) -> Self {
        Self {
            store: AxiomStore::new(),
            settings,
        }
    }

    pub fn store(&self) -> &AxiomStore {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs a single command. Only `prove` commands produce an outcome.
    pub fn execute(&mut self, command: &Command) -> Option<GoalOutcome> {
        match command {
            Command::Axiom(axiom) => {
                debug!(axiom = %axiom, "axiom added");
                self.store.push(axiom.clone());
                None
            }
            Command::Param(parameter) => {
                self.settings.apply(*parameter);
                debug!(key = parameter.key(), settings = ?self.settings, "parameter set");
                None
            }
            Command::Prove { start, target } => Some(self.prove(start, target)),
        }
    }

    pub fn run(&mut self, program: &Program) -> Vec<GoalOutcome> {
        program
            .commands
            .iter()
            .filter_map(|command| self.execute(command))
            .collect()
    }

    fn prove(&mut self, start: &Formula, target: &Formula) -> GoalOutcome {
        let outcome =
            find_shortest_path(self.store.axioms(), start, target, &self.settings.search);

        info!(
            start = %start,
            target = %target,
            success = outcome.success,
            steps = outcome.path.len(),
            states = outcome.states_explored,
            "goal finished"
        );

        if outcome.success && self.settings.use_proofs_as_axioms {
            self.store.add_lemma(start, target);
        }

        GoalOutcome {
            start: start.clone(),
            target: target.clone(),
            success: outcome.success,
            path: outcome.path,
            states_explored: outcome.states_explored,
            elapsed: outcome.duration,
            max_search_depth: self.settings.search.max_search_depth,
        }
    }
}
