use serde::{Deserialize, Serialize};

use crate::language::formula::Formula;
use crate::language::parsing::{Result, parse_formula};

/// A named, undirected equivalence between two formulas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axiom {
    name: String,
    lhs: Formula,
    rhs: Formula,
}

impl Axiom {
    pub fn new(name: impl Into<String>, lhs: Formula, rhs: Formula) -> Self {
        Self {
            name: name.into(),
            lhs,
            rhs,
        }
    }

    pub fn from_strings(name: &str, lhs: &str, rhs: &str) -> Result<Self> {
        Ok(Self::new(name, parse_formula(lhs)?, parse_formula(rhs)?))
    }

    /// The lemma recorded after proving `start = target`.
    pub fn lemma(start: &Formula, target: &Formula) -> Self {
        Self::new(
            format!("proof of {start} = {target}"),
            start.clone(),
            target.clone(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lhs(&self) -> &Formula {
        &self.lhs
    }

    pub fn rhs(&self) -> &Formula {
        &self.rhs
    }

    /// Both directed readings of the axiom: `lhs -> rhs`, then `rhs -> lhs`.
    pub fn directions(&self) -> [(&Formula, &Formula); 2] {
        [(&self.lhs, &self.rhs), (&self.rhs, &self.lhs)]
    }
}

impl std::fmt::Display for Axiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {} = {}", self.name, self.lhs, self.rhs)
    }
}
