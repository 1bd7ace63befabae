use log::error;
use pest::iterators::Pair;

use super::{Rule, Span};

#[derive(Debug, Clone)]
pub struct Integer {
    pub value: i64,
    pub span: Span,
}

impl Integer {
    pub fn from_pair(pair: Pair<Rule>) -> Integer {
        assert_eq!(pair.as_rule(), Rule::number);

        let span = Span::from_pair(&pair);

        let Ok(value) = pair.as_str().parse() else {
            error!(
                "Number literal '{}' at {}:{} does not fit into an integer",
                pair.as_str(),
                span.start.0,
                span.start.1
            );
            std::process::exit(-1);
        };

        Integer { value, span }
    }
}
