use pest::iterators::Pair;

use super::{Ident, Rule, Span};

/// An `imp name` command, pulling a host library into scope.
#[derive(Debug, Clone)]
pub struct Import {
    pub name: Ident,
    pub span: Span,
}

impl Import {
    pub fn from_pair(pair: Pair<Rule>) -> Import {
        assert_eq!(pair.as_rule(), Rule::importStmt);

        let span = Span::from_pair(&pair);

        let Some(name) = pair.into_inner().find(|p| p.as_rule() == Rule::name) else {
            unreachable!("an import always names a library")
        };

        Import {
            name: Ident::from_pair(name),
            span,
        }
    }
}
