//! The formula language: operators, formula trees, their canonical form and parsing.

pub mod formula;
pub mod operator;
pub mod parsing;
pub mod random;

pub use formula::{Formula, Operation};
pub use operator::Operator;
pub use parsing::parse_formula;

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{parse_formula, random::random_formula};

    #[test]
    fn canonical_form_round_trips() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..500 {
            let formula = random_formula(5, &["a", "b", "_c1"], &mut rng);
            let reparsed = parse_formula(&formula.canonical()).unwrap();
            assert_eq!(formula, reparsed);
        }
    }
}
