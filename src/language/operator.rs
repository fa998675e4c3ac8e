use serde::{Deserialize, Serialize};

/// The closed set of operators a formula may be built from.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Not,
    And,
    Or,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Not, Operator::And, Operator::Or];

    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "~",
            Operator::And => "*",
            Operator::Or => "+",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
