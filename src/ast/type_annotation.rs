use pest::iterators::Pair;

use crate::types::Type;

use super::{Rule, Span};

/// A type written in source. The grammar restricts type names to the
/// primitive set, so resolution can not fail here.
#[derive(Debug, Clone)]
pub struct TypeAnnotation {
    pub value: Type,
    pub span: Span,
}

impl TypeAnnotation {
    pub fn from_pair(pair: Pair<Rule>) -> TypeAnnotation {
        assert_eq!(pair.as_rule(), Rule::typeName);

        let Ok(value) = pair.as_str().parse() else {
            unreachable!("the grammar only accepts primitive type names")
        };

        TypeAnnotation {
            value,
            span: Span::from_pair(&pair),
        }
    }
}
