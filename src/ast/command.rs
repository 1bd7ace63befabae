use pest::iterators::Pair;

use super::{Declare, Expression, FnDef, If, Import, Loop, Print, Return, Rule, Span};

/// A single instruction of an En program.
#[derive(Debug, Clone)]
pub enum Command {
    Import(Import),
    FnDef(FnDef),
    Loop(Loop),
    Print(Print),
    Return(Return),
    Declare(Declare),
    If(If),
    Expression(Expression),
}

impl Command {
    pub fn from_pair(pair: Pair<Rule>) -> Command {
        assert_eq!(pair.as_rule(), Rule::instruction);

        let Some(command) = pair.into_inner().next() else {
            unreachable!("an instruction always wraps a single command")
        };

        match command.as_rule() {
            Rule::importStmt => Command::Import(Import::from_pair(command)),
            Rule::fnDef => Command::FnDef(FnDef::from_pair(command)),
            Rule::loopStmt => Command::Loop(Loop::from_pair(command)),
            Rule::printStmt => Command::Print(Print::from_pair(command)),
            Rule::returnStmt => Command::Return(Return::from_pair(command)),
            Rule::declareStmt => Command::Declare(Declare::from_pair(command)),
            Rule::ifStmt => Command::If(If::from_pair(command)),
            Rule::expr => Command::Expression(Expression::from_pair(command)),
            rule => unreachable!("can not parse rule {rule:?} as a command"),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Command::Import(Import { span, .. })
            | Command::FnDef(FnDef { span, .. })
            | Command::Loop(Loop { span, .. })
            | Command::Print(Print { span, .. })
            | Command::Return(Return { span, .. })
            | Command::Declare(Declare { span, .. })
            | Command::If(If { span, .. }) => *span,
            Command::Expression(expression) => expression.span(),
        }
    }
}
