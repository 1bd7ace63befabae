use pest::iterators::Pair;

use super::{Expression, Ident, Rule, Span};

/// A call to a user-defined or native function, e.g. `f(1, 2)`.
#[derive(Debug, Clone)]
pub struct Call {
    pub callee: Ident,
    pub args: Vec<Expression>,
    pub span: Span,
}

impl Call {
    pub fn from_pair(pair: Pair<Rule>) -> Call {
        assert_eq!(pair.as_rule(), Rule::fnCallback);

        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(callee) = inner.next() else {
            unreachable!("a call always has a callee")
        };
        let callee = Ident::from_pair(callee);

        let mut args = vec![];
        if let Some(arg_list) = inner.next() {
            for arg in arg_list.into_inner() {
                args.push(Expression::from_pair(arg));
            }
        }

        Call { callee, args, span }
    }
}
