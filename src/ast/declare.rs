use pest::iterators::Pair;

use super::{Expression, Param, Rule, Span};

/// A `var name: type = expr` command.
#[derive(Debug, Clone)]
pub struct Declare {
    pub binding: Param,
    pub value: Expression,
    pub span: Span,
}

impl Declare {
    pub fn from_pair(pair: Pair<Rule>) -> Declare {
        assert_eq!(pair.as_rule(), Rule::declareStmt);

        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(binding) = inner.find(|p| p.as_rule() == Rule::param) else {
            unreachable!("a declaration always has a binding")
        };
        let binding = Param::from_pair(binding);

        let Some(value) = inner.find(|p| p.as_rule() == Rule::expr) else {
            unreachable!("a declaration always has a value")
        };

        Declare {
            binding,
            value: Expression::from_pair(value),
            span,
        }
    }
}
