//! Rendering of goal outcomes.

pub mod csv_output;
pub mod pretty_printing;
pub mod table;

use std::error::Error;

use crate::program::interpreter::GoalOutcome;

pub use csv_output::CsvFormatter;
pub use pretty_printing::PrettyFormatter;
pub use table::TableFormatter;

pub trait OutcomeFormatter {
    fn format_outcomes(&self, outcomes: &[GoalOutcome]) -> Result<String, Box<dyn Error>>;
}

/// Pretty-printed JSON array of outcomes
pub struct JsonFormatter;

impl OutcomeFormatter for JsonFormatter {
    fn format_outcomes(&self, outcomes: &[GoalOutcome]) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string_pretty(outcomes)?)
    }
}

/// Outcome as a single word, shared by the tabular formats.
pub(crate) fn result_label(outcome: &GoalOutcome) -> &'static str {
    if outcome.success { "proved" } else { "not found" }
}

/// Seconds with millisecond precision, as the pretty printer reports them.
pub(crate) fn format_seconds(outcome: &GoalOutcome) -> String {
    format!("{:.3}", outcome.elapsed.as_secs_f64())
}
