use pest::iterators::Pair;

use super::{Rule, Span};

#[derive(Debug, Clone)]
pub struct Boolean {
    pub value: bool,
    pub span: Span,
}

impl Boolean {
    pub fn from_pair(pair: Pair<Rule>) -> Boolean {
        assert_eq!(pair.as_rule(), Rule::boolean);

        Boolean {
            value: pair.as_str() == "true",
            span: Span::from_pair(&pair),
        }
    }
}
