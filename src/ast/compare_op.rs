use std::fmt::Display;

use pest::iterators::Pair;

use super::Rule;

/// Comparison operators. The quirky `/=` spelling of not-equals is folded
/// into [`CompareOp::NotEquals`] while building the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Equals,
    NotEquals,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl CompareOp {
    pub fn from_pair(pair: &Pair<Rule>) -> CompareOp {
        assert_eq!(pair.as_rule(), Rule::compareOp);

        match pair.as_str() {
            "=" => CompareOp::Equals,
            "!=" | "/=" => CompareOp::NotEquals,
            "<" => CompareOp::Less,
            ">" => CompareOp::Greater,
            "<=" => CompareOp::LessOrEqual,
            ">=" => CompareOp::GreaterOrEqual,
            op => unreachable!("unexpected comparison operator '{op}'"),
        }
    }

    /// Whether this comparison requires its operands to be ordered (as
    /// opposed to merely equatable).
    pub fn is_ordering(&self) -> bool {
        !matches!(self, CompareOp::Equals | CompareOp::NotEquals)
    }
}

impl Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            CompareOp::Equals => "=",
            CompareOp::NotEquals => "!=",
            CompareOp::Less => "<",
            CompareOp::Greater => ">",
            CompareOp::LessOrEqual => "<=",
            CompareOp::GreaterOrEqual => ">=",
        };
        f.write_str(op)
    }
}
