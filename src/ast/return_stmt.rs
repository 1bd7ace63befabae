use pest::iterators::Pair;

use super::{Expression, Rule, Span};

#[derive(Debug, Clone)]
pub struct Return {
    pub value: Expression,
    pub span: Span,
}

impl Return {
    pub fn from_pair(pair: Pair<Rule>) -> Return {
        assert_eq!(pair.as_rule(), Rule::returnStmt);

        let span = Span::from_pair(&pair);

        let Some(value) = pair.into_inner().find(|p| p.as_rule() == Rule::expr) else {
            unreachable!("a return command always has an argument")
        };

        Return {
            value: Expression::from_pair(value),
            span,
        }
    }
}
