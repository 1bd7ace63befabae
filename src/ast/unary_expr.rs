use super::{Expression, Span, UnaryOp};

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Expression,
    pub span: Span,
}
