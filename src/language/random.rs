use rand::Rng;
use rand::seq::SliceRandom;

use super::formula::{Formula, Operation};
use super::operator::Operator;

/// Generates a random well-formed formula no deeper than `max_depth`, using leaves
/// drawn from the primitives and the given variable names.
pub fn random_formula(max_depth: usize, variables: &[&str], rng: &mut impl Rng) -> Formula {
    generate_recursive(max_depth, variables, rng, 0)
}

fn generate_recursive(
    max_depth: usize,
    variables: &[&str],
    rng: &mut impl Rng,
    current_depth: usize,
) -> Formula {
    // 40% chance to stop early, and always stop at the depth limit
    if current_depth >= max_depth || rng.gen_bool(0.4) {
        return generate_random_leaf(variables, rng);
    }

    let operator = *Operator::ALL
        .choose(rng)
        .expect("the operator set is never empty");

    let children = (0..operator.arity())
        .map(|_| generate_recursive(max_depth, variables, rng, current_depth + 1))
        .collect();

    Formula::Op(Operation::new(operator, children))
}

fn generate_random_leaf(variables: &[&str], rng: &mut impl Rng) -> Formula {
    match variables.choose(rng) {
        Some(name) if rng.gen_bool(0.5) => Formula::variable(name),
        _ => Formula::Primitive(rng.gen_bool(0.5)),
    }
}
