//! Equational theorem proving by bounded breadth-first search over rewrites.
//!
//! A program declares named axioms `lhs = rhs` over boolean formulas and asks for
//! proofs of equalities between closed formulas. Each proof is a shortest chain of
//! single axiom applications, found within configurable depth and size bounds.

pub mod error;
pub mod language;
pub mod program;
pub mod report;
pub mod rewriting;
pub mod seen;
pub mod utils;

#[cfg(test)]
#[macro_use]
mod macros;

pub use error::LoadError;
pub use language::{Formula, parse_formula};
pub use program::{Interpreter, Settings, parse_program};
pub use rewriting::{Axiom, SearchConfig, find_shortest_path};
