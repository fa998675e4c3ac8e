//! Term rewriting modules.
//!
//! Matching and substitution at a single node, one-step successor generation, the
//! bounded shortest-proof search and the axiom store it draws from.

pub mod axiom;
pub mod matching;
pub mod search;
pub mod store;
pub mod substitution;
pub mod successors;

pub use axiom::Axiom;
pub use search::{ProofStep, SearchConfig, SearchOutcome, find_shortest_path};
pub use store::AxiomStore;
