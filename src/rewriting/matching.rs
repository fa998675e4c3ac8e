//! Pattern matching of axiom sides against formula nodes.
//!
//! Matching is non-linear: a pattern variable that occurs several times must be bound
//! to equal sub-formulas at every occurrence. There is no occurs-check, and the
//! variables of the matched formula are ordinary leaves as far as the pattern is
//! concerned.

use std::collections::HashMap;

use itertools::Itertools;

use crate::language::formula::{Formula, Operation};

/// Bindings of pattern variable names to the sub-formulas they matched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope<'p, 'f> {
    bindings: HashMap<&'p str, &'f Formula>,
}

impl<'p, 'f> Scope<'p, 'f> {
    pub fn at(&self, variable: &str) -> Option<&'f Formula> {
        self.bindings.get(variable).copied()
    }

    pub fn set(&mut self, variable: &'p str, formula: &'f Formula) {
        self.bindings.insert(variable, formula);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Formula {
    /// `self` is treated as a pattern which may match `node`.
    pub fn try_match<'p, 'f>(&'p self, node: &'f Formula) -> Option<Scope<'p, 'f>> {
        let mut scope = Scope::default();
        self.match_into(node, &mut scope).then_some(scope)
    }

    /// Extends `scope` while matching `self` against `node`. Bindings made before a
    /// failure are left in place, so a `false` result leaves `scope` unusable.
    pub fn match_into<'p, 'f>(&'p self, node: &'f Formula, scope: &mut Scope<'p, 'f>) -> bool {
        match (self, node) {
            (Formula::Primitive(bit_1), Formula::Primitive(bit_2)) => bit_1 == bit_2,
            (
                Formula::Op(Operation {
                    operator: operator_1,
                    children: children_1,
                }),
                Formula::Op(Operation {
                    operator: operator_2,
                    children: children_2,
                }),
            ) => {
                operator_1 == operator_2
                    && children_1.len() == children_2.len()
                    && children_1
                        .iter()
                        .zip_eq(children_2.iter())
                        .all(|(rule_child, node_child)| rule_child.match_into(node_child, scope))
            }
            (Formula::Variable(name), node) => match scope.at(name) {
                // Structural equality coincides with equality of canonical forms.
                Some(bound) => bound == node,
                None => {
                    scope.set(name, node);
                    true
                }
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scope;
    use crate::language::formula::Formula;
    use crate::language::parsing::parse_formula;

    fn parse(text: &str) -> Formula {
        parse_formula(text).unwrap()
    }

    #[test]
    fn primitives_match_only_themselves() {
        assert!(parse("0").try_match(&parse("0")).is_some());
        assert!(parse("0").try_match(&parse("1")).is_none());
        assert!(parse("1").try_match(&parse("(~ 1)")).is_none());
        assert!(parse("1").try_match(&parse("x")).is_none());
    }

    #[test]
    fn operators_must_agree() {
        assert!(parse("(* 0 1)").try_match(&parse("(* 0 1)")).is_some());
        assert!(parse("(* 0 1)").try_match(&parse("(+ 0 1)")).is_none());
        assert!(parse("(~ 0)").try_match(&parse("0")).is_none());
    }

    #[test]
    fn singular_variables_match() {
        let pattern = parse("(* x (~ y))");
        let node = parse("(* (+ a 1) (~ (~ 0)))");
        let scope = pattern.try_match(&node).unwrap();

        assert_eq!(scope.len(), 2);
        assert!(std::ptr::eq(scope.at("x").unwrap(), &node.children()[0]));
        assert!(std::ptr::eq(
            scope.at("y").unwrap(),
            &node.children()[1].children()[0]
        ));
    }

    #[test]
    fn repeated_variable_match() {
        let pattern = parse("(+ (* x y) (* x z))");

        let node = parse("(+ (* (~ a) 1) (* (~ a) 0))");
        let scope = pattern.try_match(&node).unwrap();
        assert_eq!(scope.len(), 3);
        assert_eq!(scope.at("x"), Some(&parse("(~ a)")));

        let node = parse("(+ (* (~ a) 1) (* (~ b) 0))");
        assert!(pattern.try_match(&node).is_none());
    }

    #[test]
    fn variables_bind_placeholders_and_variables() {
        let pattern = parse("(* x x)");
        assert!(pattern.try_match(&parse("(* ?0 ?0)")).is_some());
        assert!(pattern.try_match(&parse("(* ?0 ?1)")).is_none());
        assert!(pattern.try_match(&parse("(* a a)")).is_some());
    }

    #[test]
    fn placeholder_in_pattern_matches_nothing() {
        let pattern = parse("?0");
        assert!(pattern.try_match(&parse("?0")).is_none());
        assert!(pattern.try_match(&parse("1")).is_none());
    }

    #[test]
    fn existing_bindings_are_respected() {
        let x_value = parse("1");
        let mut scope = Scope::default();
        scope.set("x", &x_value);

        let pattern = parse("(+ x y)");
        let node = parse("(+ 0 1)");
        assert!(!pattern.match_into(&node, &mut scope));

        let node = parse("(+ 1 0)");
        let mut scope = Scope::default();
        scope.set("x", &x_value);
        assert!(pattern.match_into(&node, &mut scope));
        assert_eq!(scope.at("y"), Some(&parse("0")));
    }
}
