use super::{CompareOp, Expression, Span};

/// A single link of a comparison chain. For `a < b < c` the left-hand side
/// is itself a [`CompareExpr`]; checker and evaluator then treat the link as
/// a chained comparison against the left link's right operand.
#[derive(Debug, Clone)]
pub struct CompareExpr {
    pub op: CompareOp,
    pub op_span: Span,
    pub lhs: Expression,
    pub rhs: Expression,
    pub span: Span,
}
