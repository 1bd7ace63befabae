use pest::iterators::Pair;

use super::{Expression, Ident, Rule, Span};

/// A call to a command of an imported library, e.g. `mathlib.sqrt(2)`.
#[derive(Debug, Clone)]
pub struct ImportedCall {
    pub library: Ident,
    pub command: Ident,
    pub args: Vec<Expression>,
    pub span: Span,
}

impl ImportedCall {
    pub fn from_pair(pair: Pair<Rule>) -> ImportedCall {
        assert_eq!(pair.as_rule(), Rule::importedCall);

        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(library) = inner.next() else {
            unreachable!("an imported call always names a library")
        };
        let library = Ident::from_pair(library);

        let Some(command) = inner.next() else {
            unreachable!("an imported call always names a command")
        };
        let command = Ident::from_pair(command);

        let mut args = vec![];
        if let Some(arg_list) = inner.next() {
            for arg in arg_list.into_inner() {
                args.push(Expression::from_pair(arg));
            }
        }

        ImportedCall {
            library,
            command,
            args,
            span,
        }
    }
}
