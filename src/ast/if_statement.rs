use pest::iterators::Pair;

use super::{CodeBlock, Expression, Rule, Span};

/// An `if` command with an optional `else` branch.
#[derive(Debug, Clone)]
pub struct If {
    pub condition: Expression,
    pub if_block: CodeBlock,
    pub else_block: Option<CodeBlock>,
    pub span: Span,
}

impl If {
    pub fn from_pair(pair: Pair<Rule>) -> If {
        assert_eq!(pair.as_rule(), Rule::ifStmt);

        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(condition) = inner.find(|p| p.as_rule() == Rule::expr) else {
            unreachable!("an if command always has a condition")
        };
        let condition = Expression::from_pair(condition);

        let Some(if_block) = inner.find(|p| p.as_rule() == Rule::codeblock) else {
            unreachable!("an if command always has a body")
        };
        let if_block = CodeBlock::from_pair(if_block);

        let else_block = inner
            .find(|p| p.as_rule() == Rule::codeblock)
            .map(CodeBlock::from_pair);

        If {
            condition,
            if_block,
            else_block,
            span,
        }
    }
}
