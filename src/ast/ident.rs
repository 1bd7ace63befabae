use pest::iterators::Pair;

use super::{Rule, Span};

#[derive(Debug, Clone)]
pub struct Ident {
    pub value: String,
    pub span: Span,
}

impl Ident {
    pub fn from_pair(pair: Pair<Rule>) -> Ident {
        assert_eq!(pair.as_rule(), Rule::name);

        Ident {
            value: pair.as_str().to_owned(),
            span: Span::from_pair(&pair),
        }
    }
}
