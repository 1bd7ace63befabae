use pest::iterators::Pair;

use super::{Expression, Rule, Span};

#[derive(Debug, Clone)]
pub struct Print {
    pub value: Expression,
    pub span: Span,
}

impl Print {
    pub fn from_pair(pair: Pair<Rule>) -> Print {
        assert_eq!(pair.as_rule(), Rule::printStmt);

        let span = Span::from_pair(&pair);

        let Some(value) = pair.into_inner().find(|p| p.as_rule() == Rule::expr) else {
            unreachable!("a print command always has an argument")
        };

        Print {
            value: Expression::from_pair(value),
            span,
        }
    }
}
