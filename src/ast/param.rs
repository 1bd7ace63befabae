use pest::iterators::Pair;

use super::{Ident, Rule, Span, TypeAnnotation};

/// A `name: type` pair, as used by declarations, loop variables and
/// function parameters.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: Ident,
    pub type_annotation: TypeAnnotation,
    pub span: Span,
}

impl Param {
    pub fn from_pair(pair: Pair<Rule>) -> Param {
        assert_eq!(pair.as_rule(), Rule::param);

        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(name) = inner.next() else {
            unreachable!("a param always has a name")
        };
        let name = Ident::from_pair(name);

        let Some(type_annotation) = inner.next() else {
            unreachable!("a param always has a type annotation")
        };
        let type_annotation = TypeAnnotation::from_pair(type_annotation);

        Param {
            name,
            type_annotation,
            span,
        }
    }
}
