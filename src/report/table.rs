use std::error::Error;

use tabled::{Table, Tabled, settings::Style};

use super::{OutcomeFormatter, format_seconds, result_label};
use crate::program::interpreter::GoalOutcome;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    goal: String,
    #[tabled(rename = "Result")]
    result: &'static str,
    #[tabled(rename = "Steps")]
    steps: usize,
    #[tabled(rename = "States")]
    states: usize,
    #[tabled(rename = "Time (s)")]
    time: String,
}

impl From<&GoalOutcome> for GoalRow {
    fn from(outcome: &GoalOutcome) -> Self {
        Self {
            goal: format!("{} = {}", outcome.start, outcome.target),
            result: result_label(outcome),
            steps: outcome.path.len(),
            states: outcome.states_explored,
            time: format_seconds(outcome),
        }
    }
}

/// One row per goal in a rounded table
pub struct TableFormatter;

impl OutcomeFormatter for TableFormatter {
    fn format_outcomes(&self, outcomes: &[GoalOutcome]) -> Result<String, Box<dyn Error>> {
        if outcomes.is_empty() {
            return Ok(String::new());
        }

        let rows: Vec<GoalRow> = outcomes.iter().map(GoalRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());

        Ok(table.to_string())
    }
}
