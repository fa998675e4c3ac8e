use tracing::debug;

use super::axiom::Axiom;
use crate::language::formula::Formula;

/// The ordered, append-only collection of axioms known so far, including proved
/// lemmas.
#[derive(Clone, Debug, Default)]
pub struct AxiomStore {
    axioms: Vec<Axiom>,
}

impl AxiomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, axiom: Axiom) {
        self.axioms.push(axiom);
    }

    /// Records the proved equivalence `start = target` as a new axiom.
    pub fn add_lemma(&mut self, start: &Formula, target: &Formula) -> &Axiom {
        let lemma = Axiom::lemma(start, target);
        debug!(lemma = %lemma, "stored proof as axiom");
        self.axioms.push(lemma);
        &self.axioms[self.axioms.len() - 1]
    }

    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter()
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    pub fn try_get(&self, name: &str) -> Option<&Axiom> {
        self.axioms.iter().find(|axiom| axiom.name() == name)
    }

    pub fn get(&self, name: &str) -> &Axiom {
        self.try_get(name)
            .unwrap_or_else(|| panic!("Axiom not present in the store: {name}"))
    }
}

impl FromIterator<Axiom> for AxiomStore {
    fn from_iter<T: IntoIterator<Item = Axiom>>(iter: T) -> Self {
        Self {
            axioms: iter.into_iter().collect(),
        }
    }
}
