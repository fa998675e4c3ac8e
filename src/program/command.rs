use crate::language::formula::Formula;
use crate::rewriting::axiom::Axiom;

/// A search or knowledge-store setting changed by a `param` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    MaxSearchDepth(usize),
    MaxTreeSize(usize),
    UseProofsAsAxioms(bool),
}

impl Parameter {
    pub const MAX_SEARCH_DEPTH: &'static str = "max_search_depth";
    pub const MAX_TREE_SIZE: &'static str = "max_tree_size";
    pub const USE_PROOFS_AS_AXIOMS: &'static str = "use_proofs_as_axioms";

    pub fn key(&self) -> &'static str {
        match self {
            Parameter::MaxSearchDepth(_) => Self::MAX_SEARCH_DEPTH,
            Parameter::MaxTreeSize(_) => Self::MAX_TREE_SIZE,
            Parameter::UseProofsAsAxioms(_) => Self::USE_PROOFS_AS_AXIOMS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Axiom(Axiom),
    Prove { start: Formula, target: Formula },
    Param(Parameter),
}

/// A fully loaded program. Commands run strictly in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub commands: Vec<Command>,
}

impl Program {
    pub fn goals(&self) -> impl Iterator<Item = (&Formula, &Formula)> {
        self.commands.iter().filter_map(|command| match command {
            Command::Prove { start, target } => Some((start, target)),
            _ => None,
        })
    }
}
