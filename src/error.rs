//! Load-time errors.
//!
//! Anything wrong with program text is reported before a single command runs. Every
//! error knows where it happened so it can be rendered with a caret under the
//! offending column.

use thiserror::Error;

/// Where in the program text an error was detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// 1-based
    pub line: usize,
    /// 1-based
    pub column: usize,
    pub source_line: String,
}

impl Location {
    pub(crate) fn from_position(position: &pest::Position<'_>) -> Self {
        let (line, column) = position.line_col();
        Self {
            line,
            column,
            source_line: position.line_of().trim_end_matches(['\r', '\n']).to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("line {}, column {}: {message}", .location.line, .location.column)]
    Syntax { location: Location, message: String },

    #[error("line {}, column {}: unknown parameter `{key}`", .location.line, .location.column)]
    UnknownParameter { location: Location, key: String },

    #[error(
        "line {}, column {}: parameter `{key}` expects {expected}",
        .location.line, .location.column
    )]
    InvalidValue {
        location: Location,
        key: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;

impl LoadError {
    pub fn location(&self) -> &Location {
        match self {
            LoadError::Syntax { location, .. }
            | LoadError::UnknownParameter { location, .. }
            | LoadError::InvalidValue { location, .. } => location,
        }
    }

    fn message(&self) -> String {
        match self {
            LoadError::Syntax { message, .. } => message.clone(),
            LoadError::UnknownParameter { key, .. } => format!("Unknown parameter `{key}`."),
            LoadError::InvalidValue { key, expected, .. } => {
                format!("Parameter `{key}` expects {expected}.")
            }
        }
    }

    /// The offending source line, a caret under the error column and the message.
    pub fn render(&self) -> String {
        let location = self.location();
        format!(
            "{}\n{}^\nError (line {}, column {}): {}",
            location.source_line,
            " ".repeat(location.column.saturating_sub(1)),
            location.line,
            location.column,
            self.message()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadError, Location};

    #[test]
    fn render_places_caret() {
        let error = LoadError::UnknownParameter {
            location: Location {
                line: 3,
                column: 7,
                source_line: String::from("param depth 4."),
            },
            key: String::from("depth"),
        };

        assert_eq!(
            error.render(),
            "param depth 4.\n      ^\nError (line 3, column 7): Unknown parameter `depth`."
        );
    }
}
