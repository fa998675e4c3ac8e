use std::error::Error;

use super::{OutcomeFormatter, format_seconds, result_label};
use crate::program::interpreter::GoalOutcome;

pub struct CsvFormatter;

impl CsvFormatter {
    const HEADERS: [&'static str; 6] = ["start", "target", "result", "steps", "states", "seconds"];
}

impl OutcomeFormatter for CsvFormatter {
    fn format_outcomes(&self, outcomes: &[GoalOutcome]) -> Result<String, Box<dyn Error>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(Self::HEADERS)?;

        for outcome in outcomes {
            writer.write_record([
                outcome.start.to_string(),
                outcome.target.to_string(),
                result_label(outcome).to_string(),
                outcome.path.len().to_string(),
                outcome.states_explored.to_string(),
                format_seconds(outcome),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|error| error.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}
