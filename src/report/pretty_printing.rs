use std::error::Error;
use std::fmt::Write;

use colored::*;

use super::{OutcomeFormatter, format_seconds};
use crate::program::interpreter::GoalOutcome;
use crate::rewriting::store::AxiomStore;

/// Human-readable, colored report of each goal and its proof.
#[derive(Default)]
pub struct PrettyFormatter<'s> {
    /// When present, every step also shows the equation of the axiom it used.
    pub explain_with: Option<&'s AxiomStore>,
}

impl<'s> PrettyFormatter<'s> {
    pub fn explaining(store: &'s AxiomStore) -> Self {
        Self {
            explain_with: Some(store),
        }
    }

    pub fn format_outcome(&self, outcome: &GoalOutcome) -> String {
        let mut buffer = String::new();

        writeln!(
            &mut buffer,
            "{} {} = {}:",
            "Prove".bold(),
            outcome.start,
            outcome.target
        )
        .unwrap();

        if !outcome.success {
            writeln!(
                &mut buffer,
                "{} (checked {} states).",
                format!("No path found within {} steps", outcome.max_search_depth).red(),
                outcome.states_explored
            )
            .unwrap();
            return buffer;
        }

        if outcome.path.is_empty() {
            writeln!(&mut buffer, "{}", "Statements are the same.".green()).unwrap();
            return buffer;
        }

        for step in &outcome.path {
            write!(&mut buffer, "-> {}  w/ {}", step.formula, step.rule.cyan()).unwrap();
            if let Some(axiom) = self
                .explain_with
                .and_then(|store| store.axioms().get(step.axiom))
            {
                write!(&mut buffer, "  [{} = {}]", axiom.lhs(), axiom.rhs()).unwrap();
            }
            writeln!(&mut buffer).unwrap();
        }

        writeln!(
            &mut buffer,
            "{} in {} seconds after checking {} states.",
            "Done".green(),
            format_seconds(outcome),
            outcome.states_explored
        )
        .unwrap();
        buffer
    }
}

impl OutcomeFormatter for PrettyFormatter<'_> {
    fn format_outcomes(&self, outcomes: &[GoalOutcome]) -> Result<String, Box<dyn Error>> {
        Ok(outcomes
            .iter()
            .map(|outcome| self.format_outcome(outcome))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
