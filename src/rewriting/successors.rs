//! One-step rewrites of a formula.
//!
//! Every successor differs from its source in exactly one position: the rewrite is
//! applied either at the root or inside exactly one child, and everything else is
//! copied unchanged.

use super::axiom::Axiom;
use super::substitution::FreshNames;
use crate::language::formula::Formula;

/// One directed reading `from -> to` of an axiom.
#[derive(Clone, Copy, Debug)]
pub struct Rewrite<'a> {
    /// Position of the axiom in the list being searched
    pub axiom: usize,
    pub rule: &'a str,
    pub from: &'a Formula,
    pub to: &'a Formula,
}

/// A formula obtained by a single application of an axiom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successor<'a> {
    pub axiom: usize,
    pub rule: &'a str,
    pub formula: Formula,
}

/// Rewrites `node` at its root, or returns `None` if `rewrite.from` does not match.
pub fn apply_at<'a>(
    node: &Formula,
    rewrite: &Rewrite<'a>,
    fresh: &mut FreshNames,
) -> Option<Successor<'a>> {
    let scope = rewrite.from.try_match(node)?;
    Some(Successor {
        axiom: rewrite.axiom,
        rule: rewrite.rule,
        formula: rewrite.to.instantiate(&scope, fresh),
    })
}

/// Every formula obtainable by applying `rewrite` at exactly one position of `node`,
/// the root first and then each child's subtree from left to right.
pub fn successors_for_rule<'a>(
    node: &Formula,
    rewrite: &Rewrite<'a>,
    fresh: &mut FreshNames,
) -> Vec<Successor<'a>> {
    let mut successors: Vec<_> = apply_at(node, rewrite, fresh).into_iter().collect();

    if let Formula::Op(operation) = node {
        for (index, child) in operation.children.iter().enumerate() {
            successors.extend(
                successors_for_rule(child, rewrite, fresh)
                    .into_iter()
                    .map(|rewritten| Successor {
                        formula: Formula::Op(operation.with_child(index, rewritten.formula)),
                        ..rewritten
                    }),
            );
        }
    }

    successors
}

/// Every one-step rewrite of `node`, trying each axiom in order and in both
/// directions.
pub fn all_successors<'a>(
    axioms: &'a [Axiom],
    node: &Formula,
    fresh: &mut FreshNames,
) -> Vec<Successor<'a>> {
    axioms
        .iter()
        .enumerate()
        .flat_map(|(index, axiom)| {
            axiom.directions().into_iter().map(move |(from, to)| Rewrite {
                axiom: index,
                rule: axiom.name(),
                from,
                to,
            })
        })
        .flat_map(|rewrite| successors_for_rule(node, &rewrite, fresh))
        .collect()
}
