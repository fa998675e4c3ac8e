use super::matching::Scope;
use crate::language::formula::{Formula, Operation};

/// Source of placeholder names that are unique within one search.
#[derive(Clone, Debug, Default)]
pub struct FreshNames {
    next: usize,
}

impl FreshNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self) -> String {
        let name = self.next.to_string();
        self.next += 1;
        name
    }

    /// How many names were handed out so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}

impl Formula {
    /// Instantiates `self`, treated as a pattern, with the bindings in `scope`.
    ///
    /// Every occurrence of a pattern variable the match never constrained becomes its
    /// own fresh [`Formula::Unresolved`] leaf, so the result never contains a pattern
    /// variable that is not bound in `scope`.
    pub fn instantiate(&self, scope: &Scope<'_, '_>, fresh: &mut FreshNames) -> Formula {
        match self {
            Formula::Primitive(_) | Formula::Unresolved(_) => self.clone(),
            Formula::Variable(name) => match scope.at(name) {
                Some(bound) => bound.clone(),
                None => Formula::Unresolved(fresh.next_name()),
            },
            Formula::Op(operation) => Formula::Op(Operation {
                operator: operation.operator,
                children: operation
                    .children
                    .iter()
                    .map(|child| child.instantiate(scope, fresh))
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::FreshNames;
    use crate::language::formula::Formula;
    use crate::language::parsing::parse_formula;
    use crate::language::random::random_formula;

    fn parse(text: &str) -> Formula {
        parse_formula(text).unwrap()
    }

    #[test]
    fn bound_variables_are_replaced() {
        let lhs = parse("(* x y)");
        let rhs = parse("(* y x)");
        let node = parse("(* (~ a) 1)");
        let scope = lhs.try_match(&node).unwrap();

        let mut fresh = FreshNames::new();
        assert_eq!(rhs.instantiate(&scope, &mut fresh), parse("(* 1 (~ a))"));
        assert_eq!(fresh.issued(), 0);
    }

    #[test]
    fn unbound_variables_become_placeholders() {
        let lhs = parse("x");
        let rhs = parse("(+ x (* x y))");
        let node = parse("1");
        let scope = lhs.try_match(&node).unwrap();

        let mut fresh = FreshNames::new();
        assert_eq!(rhs.instantiate(&scope, &mut fresh), parse("(+ 1 (* 1 ?0))"));
        assert_eq!(rhs.instantiate(&scope, &mut fresh), parse("(+ 1 (* 1 ?1))"));
    }

    #[test]
    fn each_unbound_occurrence_gets_own_placeholder() {
        let lhs = parse("0");
        let rhs = parse("(* y (~ y))");
        let node = parse("0");
        let scope = lhs.try_match(&node).unwrap();

        let mut fresh = FreshNames::new();
        assert_eq!(rhs.instantiate(&scope, &mut fresh), parse("(* ?0 (~ ?1))"));
        assert_eq!(fresh.issued(), 2);
    }

    #[test]
    fn primitives_and_placeholders_are_copied() {
        let pattern = parse("(+ 1 ?7)");
        let zero = parse("0");
        let scope = zero.try_match(&zero).unwrap();
        let mut fresh = FreshNames::new();
        assert_eq!(pattern.instantiate(&scope, &mut fresh), pattern);
    }

    #[test]
    fn matching_is_sound() {
        let mut rng = StdRng::seed_from_u64(99);
        let patterns = [
            parse("(* x y)"),
            parse("(+ x (~ x))"),
            parse("(* x (+ y z))"),
            parse("(~ (~ x))"),
            parse("x"),
        ];

        for _ in 0..500 {
            let node = random_formula(4, &["a", "b"], &mut rng);
            for pattern in &patterns {
                if let Some(scope) = pattern.try_match(&node) {
                    let mut fresh = FreshNames::new();
                    assert!(pattern.instantiate(&scope, &mut fresh).same_as(&node));
                    assert_eq!(fresh.issued(), 0);
                }
            }
        }
    }
}
