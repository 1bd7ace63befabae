use std::fmt::Display;

use pest::iterators::Pair;

use super::Rule;

/// Binary operators which accumulate a value (unlike comparisons, which
/// chain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Add,
    Subtract,
    Multiply,
    Divide,
    RoundDiv,
    Modulo,
    Exponent,
}

impl BinaryOp {
    pub fn from_pair(pair: &Pair<Rule>) -> BinaryOp {
        match (pair.as_rule(), pair.as_str()) {
            (Rule::orOp, _) => BinaryOp::Or,
            (Rule::andOp, _) => BinaryOp::And,
            (Rule::sumOp, "+") => BinaryOp::Add,
            (Rule::sumOp, "-") => BinaryOp::Subtract,
            (Rule::productOp, "*") => BinaryOp::Multiply,
            (Rule::productOp, "/") => BinaryOp::Divide,
            (Rule::productOp, "//") => BinaryOp::RoundDiv,
            (Rule::productOp, "%") => BinaryOp::Modulo,
            (Rule::exponentOp, _) => BinaryOp::Exponent,
            (rule, op) => unreachable!("unexpected binary operator '{op}' ({rule:?})"),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            BinaryOp::Or => "or",
            BinaryOp::And => "and",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::RoundDiv => "//",
            BinaryOp::Modulo => "%",
            BinaryOp::Exponent => "^",
        };
        f.write_str(op)
    }
}
