use super::{BinaryOp, Expression, Span};

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub op_span: Span,
    pub lhs: Expression,
    pub rhs: Expression,
    pub span: Span,
}
