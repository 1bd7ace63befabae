use super::{Expression, Span};

/// The ternary `cond ? a : b` expression.
#[derive(Debug, Clone)]
pub struct IfElseExpr {
    pub condition: Expression,
    pub if_true: Expression,
    pub if_false: Expression,
    pub span: Span,
}
