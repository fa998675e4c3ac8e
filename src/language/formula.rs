//! Formula trees and their canonical form.
//!
//! A [`Formula`] is an immutable value: every transformation builds a new tree and
//! leaves its input untouched. The [`Display`](std::fmt::Display) rendering is the
//! canonical form, which is the identity of a formula everywhere in the engine and
//! parses back into a structurally identical tree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::operator::Operator;

/// An operator applied to its children. The number of children always equals the
/// operator's arity.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Operation {
    pub operator: Operator,
    pub children: Vec<Formula>,
}

impl Operation {
    /// Panics if `children` does not match the arity of `operator`.
    pub fn new(operator: Operator, children: Vec<Formula>) -> Self {
        assert_eq!(
            operator.arity(),
            children.len(),
            "Operator {operator} applied to the wrong number of children"
        );
        Self { operator, children }
    }

    /// Returns a copy of this operation with the child at `index` replaced.
    pub fn with_child(&self, index: usize, child: Formula) -> Self {
        let mut children = self.children.clone();
        children[index] = child;
        Self {
            operator: self.operator,
            children,
        }
    }
}

#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub enum Formula {
    /// The constants `0` and `1`
    Primitive(bool),
    /// A user-written identifier; a pattern variable when it appears in an axiom
    Variable(String),
    /// Some sub-formula introduced by a rewrite that the match did not pin down
    Unresolved(String),
    Op(Operation),
}

impl Formula {
    pub fn zero() -> Self {
        Formula::Primitive(false)
    }

    pub fn one() -> Self {
        Formula::Primitive(true)
    }

    pub fn variable(name: &str) -> Self {
        Formula::Variable(String::from(name))
    }

    pub fn not(child: Formula) -> Self {
        Formula::Op(Operation::new(Operator::Not, vec![child]))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::Op(Operation::new(Operator::And, vec![left, right]))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Op(Operation::new(Operator::Or, vec![left, right]))
    }

    /// The canonical form of this formula.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Two formulas are the same state iff their canonical forms are equal.
    pub fn same_as(&self, other: &Formula) -> bool {
        self.canonical() == other.canonical()
    }

    pub fn children(&self) -> &[Formula] {
        match self {
            Formula::Op(operation) => &operation.children,
            _ => &[],
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Formula::size).sum::<usize>()
    }

    pub fn subformula(&self, path: &[usize]) -> Option<&Formula> {
        match path.split_first() {
            Some((head, rest)) => self.children().get(*head)?.subformula(rest),
            None => Some(self),
        }
    }

    /// Pre-order traversal over every node of the tree, starting at `self`.
    pub fn iter_subformulas(&self) -> SubformulaIterator<'_> {
        SubformulaIterator { stack: vec![self] }
    }
}

#[derive(Clone, Debug)]
pub struct SubformulaIterator<'f> {
    stack: Vec<&'f Formula>,
}

impl<'f> Iterator for SubformulaIterator<'f> {
    type Item = &'f Formula;

    fn next(&mut self) -> Option<Self::Item> {
        let formula = self.stack.pop()?;
        self.stack.extend(formula.children().iter().rev());
        Some(formula)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Primitive(bit) => write!(f, "{}", u8::from(*bit)),
            Formula::Variable(name) => write!(f, "{name}"),
            Formula::Unresolved(name) => write!(f, "?{name}"),
            Formula::Op(operation) => {
                write!(f, "({}", operation.operator)?;
                for child in &operation.children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Serialize for Formula {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Formula {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parsing::parse_formula(&text).map_err(serde::de::Error::custom)
    }
}
