use pest::iterators::Pair;

use super::{Command, Rule, Span};

/// A braced sequence of commands.
#[derive(Debug, Clone)]
pub struct CodeBlock {
    pub commands: Vec<Command>,
    pub span: Span,
}

impl CodeBlock {
    pub fn from_pair(pair: Pair<Rule>) -> CodeBlock {
        assert_eq!(pair.as_rule(), Rule::codeblock);

        let span = Span::from_pair(&pair);

        let mut commands = vec![];
        for instruction in pair.into_inner() {
            commands.push(Command::from_pair(instruction));
        }

        CodeBlock { commands, span }
    }
}
