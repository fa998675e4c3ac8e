use pest::Parser;
use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::formula::{Formula, Operation};
use super::operator::Operator;
use crate::error::{LoadError, Location};

pub use crate::error::Result;

#[derive(Parser)]
#[grammar = "language/grammar.pest"]
pub(crate) struct FormulaParser;

impl From<pest::error::Error<Rule>> for LoadError {
    fn from(error: pest::error::Error<Rule>) -> Self {
        let error = error.renamed_rules(|rule| {
            match rule {
                Rule::EOI => "end of input",
                Rule::formula | Rule::single_formula => "formula",
                Rule::operation => "operation",
                Rule::primitive => "primitive",
                Rule::ident => "identifier",
                Rule::unresolved => "placeholder",
                Rule::unary => "unary operator",
                Rule::binary => "binary operator",
                Rule::axiom | Rule::axiom_kw => "'axiom'",
                Rule::prove | Rule::prove_kw => "'prove'",
                Rule::param | Rule::param_kw => "'param'",
                Rule::value | Rule::boolean | Rule::integer => "parameter value",
                Rule::program => "program",
                Rule::open_paren => "'('",
                Rule::close_paren => "')'",
                Rule::colon => "':'",
                Rule::equals => "'='",
                Rule::terminator => "'.'",
                other => return format!("{other:?}"),
            }
            .to_string()
        });

        let (line, column) = match error.line_col {
            LineColLocation::Pos(position) => position,
            LineColLocation::Span(start, _) => start,
        };

        LoadError::Syntax {
            location: Location {
                line,
                column,
                source_line: error.line().to_string(),
            },
            message: format!("{}.", error.variant.message()),
        }
    }
}

/// Punctuation pairs carry no information once parsing succeeded.
pub(crate) fn is_punctuation(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::open_paren | Rule::close_paren | Rule::colon | Rule::equals | Rule::terminator
    )
}

/// Builds a formula from a `formula` pair. The grammar guarantees the shape of the pair.
pub(crate) fn formula_from_pair(pair: Pair<'_, Rule>) -> Formula {
    let inner = pair
        .into_inner()
        .next()
        .expect("a formula always has exactly one alternative");

    match inner.as_rule() {
        Rule::primitive => Formula::Primitive(inner.as_str() == "1"),
        Rule::ident => Formula::Variable(inner.as_str().to_string()),
        Rule::unresolved => Formula::Unresolved(inner.as_str()[1..].to_string()),
        Rule::operation => {
            let mut parts = inner
                .into_inner()
                .filter(|part| !is_punctuation(part.as_rule()));
            let symbol = parts.next().expect("an operation starts with its operator");
            let operator = Operator::from_symbol(symbol.as_str())
                .unwrap_or_else(|| unreachable!("grammar admits operator {}", symbol.as_str()));
            let children = parts.map(formula_from_pair).collect();
            Formula::Op(Operation::new(operator, children))
        }
        rule => unreachable!("Unexpected rule inside a formula: {rule:?}"),
    }
}

/// Parses a single formula. The whole input must be consumed.
pub fn parse_formula(text: &str) -> Result<Formula> {
    let single = FormulaParser::parse(Rule::single_formula, text)?
        .next()
        .expect("single_formula always produces one pair");

    let formula = single
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::formula)
        .expect("single_formula always contains a formula");

    Ok(formula_from_pair(formula))
}
