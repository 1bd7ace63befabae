use pest::iterators::Pair;

use super::{CodeBlock, Expression, Param, Rule, Span};

/// A `for N times as (name: type) { ... }` command.
#[derive(Debug, Clone)]
pub struct Loop {
    pub iterable: Expression,
    pub binding: Param,
    pub block: CodeBlock,
    pub span: Span,
}

impl Loop {
    pub fn from_pair(pair: Pair<Rule>) -> Loop {
        assert_eq!(pair.as_rule(), Rule::loopStmt);

        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(iterable) = inner.find(|p| p.as_rule() == Rule::expr) else {
            unreachable!("a loop always has an iterable")
        };
        let iterable = Expression::from_pair(iterable);

        let Some(binding) = inner.find(|p| p.as_rule() == Rule::param) else {
            unreachable!("a loop always binds an induction variable")
        };
        let binding = Param::from_pair(binding);

        let Some(block) = inner.find(|p| p.as_rule() == Rule::codeblock) else {
            unreachable!("a loop always has a body")
        };

        Loop {
            iterable,
            binding,
            block: CodeBlock::from_pair(block),
            span,
        }
    }
}
