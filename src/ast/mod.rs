//! Module for parsing En programs.
//!
//! It contains all structs for the internal representation of En (i.e., the AST).
mod binary_expr;
mod binary_op;
mod block;
mod boolean;
mod call;
mod command;
mod compare_expr;
mod compare_op;
mod declare;
mod expression;
mod fn_def;
mod ident;
mod if_else_expr;
mod if_statement;
mod import;
mod imported_call;
mod integer;
mod loop_stmt;
mod param;
mod parser;
mod print;
mod return_stmt;
mod str;
mod type_annotation;
mod unary_expr;
mod unary_op;

pub use self::binary_expr::*;
pub use self::binary_op::*;
pub use self::block::*;
pub use self::boolean::*;
pub use self::call::*;
pub use self::command::*;
pub use self::compare_expr::*;
pub use self::compare_op::*;
pub use self::declare::*;
pub use self::expression::*;
pub use self::fn_def::*;
pub use self::ident::*;
pub use self::if_else_expr::*;
pub use self::if_statement::*;
pub use self::import::*;
pub use self::imported_call::*;
pub use self::integer::*;
pub use self::loop_stmt::*;
pub use self::param::*;
pub use self::parser::*;
pub use self::print::*;
pub use self::return_stmt::*;
pub use self::str::*;
pub use self::type_annotation::*;
pub use self::unary_expr::*;
pub use self::unary_op::*;

use pest::iterators::{Pair, Pairs};

/// A source range, from a 1-based (line, column) start to an exclusive
/// (line, column) end.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl Span {
    pub fn from_pair(pair: &Pair<Rule>) -> Span {
        let span = pair.as_span();
        Span {
            start: span.start_pos().line_col(),
            end: span.end_pos().line_col(),
        }
    }

    /// Range covering this span up to the end of `other`.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }
}

/// AST, representing a single En program.
#[derive(Default, Debug, Clone)]
pub struct Ast {
    /// Nodes within this AST.
    nodes: Vec<Command>,
}

impl Ast {
    /// Create a new AST from the pairs produced by [`EnParser::parse_program`].
    /// Note: This AST is not type-correct by default.
    pub fn from_program(mut program: Pairs<Rule>) -> Ast {
        let Some(program) = program.next() else {
            return Ast::default();
        };

        let mut nodes = vec![];

        for instruction in program.into_inner() {
            if instruction.as_rule() != Rule::EOI {
                nodes.push(Command::from_pair(instruction));
            }
        }

        Self { nodes }
    }

    pub fn from_nodes(nodes: Vec<Command>) -> Ast {
        Self { nodes }
    }

    pub fn nodes(&self) -> Vec<Command> {
        self.nodes.clone()
    }
}
