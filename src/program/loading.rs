//! Turns program text into a [`Program`].
//!
//! Loading is all-or-nothing: the first syntax error or ill-formed parameter aborts
//! the load and nothing runs.

use pest::Parser;
use pest::iterators::Pair;

use super::command::{Command, Parameter, Program};
use crate::error::{LoadError, Location, Result};
use crate::language::parsing::{FormulaParser, Rule, formula_from_pair, is_punctuation};
use crate::rewriting::axiom::Axiom;

pub fn parse_program(text: &str) -> Result<Program> {
    let program = FormulaParser::parse(Rule::program, text)?
        .next()
        .expect("program always produces one pair");

    let commands = program
        .into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(command_from_pair)
        .collect::<Result<Vec<_>>>()?;

    Ok(Program { commands })
}

fn command_from_pair(pair: Pair<'_, Rule>) -> Result<Command> {
    let rule = pair.as_rule();
    // The keyword is the first inner pair of every command.
    let mut parts = pair
        .into_inner()
        .filter(|part| !is_punctuation(part.as_rule()))
        .skip(1);
    let mut next = move || parts.next().expect("grammar fixes the parts of a command");

    match rule {
        Rule::axiom => {
            let name = next().as_str().to_string();
            let lhs = formula_from_pair(next());
            let rhs = formula_from_pair(next());
            Ok(Command::Axiom(Axiom::new(name, lhs, rhs)))
        }
        Rule::prove => {
            let start = formula_from_pair(next());
            let target = formula_from_pair(next());
            Ok(Command::Prove { start, target })
        }
        Rule::param => {
            let key = next();
            let value = next();
            parameter_from_pairs(key, value).map(Command::Param)
        }
        rule => unreachable!("Unexpected rule in place of a command: {rule:?}"),
    }
}

fn parameter_from_pairs(key: Pair<'_, Rule>, value: Pair<'_, Rule>) -> Result<Parameter> {
    let value_location = Location::from_position(&value.as_span().start_pos());
    let value = value
        .into_inner()
        .next()
        .expect("a value is either a boolean or an integer");

    let invalid = |expected: &'static str| LoadError::InvalidValue {
        location: value_location.clone(),
        key: key.as_str().to_string(),
        expected,
    };

    let integer = || match value.as_rule() {
        Rule::integer => value
            .as_str()
            .parse::<usize>()
            .map_err(|_| invalid("a non-negative integer")),
        _ => Err(invalid("a non-negative integer")),
    };

    match key.as_str() {
        Parameter::MAX_SEARCH_DEPTH => integer().map(Parameter::MaxSearchDepth),
        Parameter::MAX_TREE_SIZE => integer().map(Parameter::MaxTreeSize),
        Parameter::USE_PROOFS_AS_AXIOMS => match value.as_rule() {
            Rule::boolean => Ok(Parameter::UseProofsAsAxioms(value.as_str() == "true")),
            _ => Err(invalid("`true` or `false`")),
        },
        unknown => Err(LoadError::UnknownParameter {
            location: Location::from_position(&key.as_span().start_pos()),
            key: unknown.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_program;
    use crate::error::LoadError;
    use crate::language::parsing::parse_formula;
    use crate::program::command::{Command, Parameter};

    #[test]
    fn parse_all_commands() {
        let program = parse_program(
            "# boolean algebra\n\
             axiom comm : (* x y) = (* y x).\n\
             param max_search_depth 3.\n\
             param use_proofs_as_axioms true.\n\
             prove (* 0 1) = (* 1 0).\n",
        )
        .unwrap();

        assert_eq!(program.commands.len(), 4);

        let Command::Axiom(axiom) = &program.commands[0] else {
            panic!("Expected an axiom")
        };
        assert_eq!(axiom.name(), "comm");
        assert_eq!(axiom.lhs(), &parse_formula("(* x y)").unwrap());

        assert_eq!(
            program.commands[1],
            Command::Param(Parameter::MaxSearchDepth(3))
        );
        assert_eq!(
            program.commands[2],
            Command::Param(Parameter::UseProofsAsAxioms(true))
        );
        assert_eq!(
            program.commands[3],
            Command::Prove {
                start: parse_formula("(* 0 1)").unwrap(),
                target: parse_formula("(* 1 0)").unwrap(),
            }
        );
        assert_eq!(program.goals().count(), 1);
    }

    #[test]
    fn empty_program() {
        let program = parse_program("  # nothing to do\n").unwrap();
        assert!(program.commands.is_empty());
    }

    #[test]
    fn keywords_are_allowed_as_variables() {
        let program = parse_program("prove (* prove axiom) = (* axiom prove).").unwrap();
        assert_eq!(program.goals().count(), 1);
    }

    #[test]
    fn missing_terminator() {
        let Err(LoadError::Syntax { location, .. }) =
            parse_program("axiom comm : (* x y) = (* y x)\nprove 0 = 0.")
        else {
            panic!("Expected a syntax error")
        };
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 1);
        assert_eq!(location.source_line, "prove 0 = 0.");
    }

    #[test]
    fn missing_equals_is_located() {
        let Err(error) = parse_program("prove (* 0 1) (* 1 0).") else {
            panic!("Expected a syntax error")
        };
        assert_eq!(error.location().line, 1);
        assert_eq!(error.location().column, 15);
        assert!(error.render().ends_with("expected '='."));
    }

    #[test]
    fn missing_colon_is_located() {
        let Err(error) = parse_program("axiom comm (* x y) = (* y x).") else {
            panic!("Expected a syntax error")
        };
        assert_eq!(error.location().column, 12);
    }

    #[test]
    fn glued_keyword_is_rejected() {
        assert!(parse_program("provex = x.").is_err());
    }

    #[test]
    fn unknown_parameter() {
        let Err(LoadError::UnknownParameter { location, key }) =
            parse_program("param depth 4.")
        else {
            panic!("Expected an unknown parameter error")
        };
        assert_eq!(key, "depth");
        assert_eq!(location.column, 7);
    }

    #[test]
    fn parameter_value_kind_is_checked() {
        let Err(LoadError::InvalidValue { location, key, .. }) =
            parse_program("prove 0 = 0.\nparam max_tree_size true.")
        else {
            panic!("Expected an invalid value error")
        };
        assert_eq!(key, "max_tree_size");
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 21);

        assert!(parse_program("param use_proofs_as_axioms 1.").is_err());
        assert!(parse_program("param max_search_depth 99999999999999999999999.").is_err());
    }

    #[test]
    fn nothing_loads_after_an_error() {
        assert!(parse_program("axiom a : 0 = 1.\nprove (+ 0) = 1.").is_err());
    }
}
