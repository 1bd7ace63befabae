use pest::iterators::Pair;

use super::{
    BinaryExpr, BinaryOp, Boolean, Call, CompareExpr, CompareOp, Ident, IfElseExpr, ImportedCall,
    Integer, Rule, Span, Str, UnaryExpr, UnaryOp,
};

#[derive(Debug, Clone)]
pub enum Expression {
    IfElse(Box<IfElseExpr>),
    Call(Call),
    ImportedCall(ImportedCall),
    Binary(Box<BinaryExpr>),
    Compare(Box<CompareExpr>),
    Unary(Box<UnaryExpr>),
    Integer(Integer),
    Str(Str),
    Boolean(Boolean),
    Ident(Ident),
}

impl Expression {
    pub fn from_pair(pair: Pair<Rule>) -> Expression {
        match pair.as_rule() {
            Rule::expr | Rule::primary => Self::unwrap_single(pair),
            Rule::ternaryExpr => Self::from_ternary(pair),
            Rule::orExpr | Rule::andExpr | Rule::sumExpr | Rule::productExpr => {
                Self::from_binary_chain(pair)
            }
            Rule::notExpr => Self::from_not(pair),
            Rule::compareExpr => Self::from_compare_chain(pair),
            Rule::exponentExpr => Self::from_exponent(pair),
            Rule::unaryExpr => Self::from_unary(pair),
            Rule::importedCall => Expression::ImportedCall(ImportedCall::from_pair(pair)),
            Rule::fnCallback => Expression::Call(Call::from_pair(pair)),
            Rule::boolean => Expression::Boolean(Boolean::from_pair(pair)),
            Rule::number => Expression::Integer(Integer::from_pair(pair)),
            Rule::string => Expression::Str(Str::from_pair(pair)),
            Rule::name => Expression::Ident(Ident::from_pair(pair)),
            rule => unreachable!("can not parse rule {rule:?} as an expression"),
        }
    }

    /// Wrapper rules (`expr`, parenthesized `primary`) hold exactly one
    /// interesting child.
    fn unwrap_single(pair: Pair<Rule>) -> Expression {
        let Some(inner) = pair.into_inner().next() else {
            unreachable!("wrapper rules always have a single inner expression")
        };
        Self::from_pair(inner)
    }

    fn from_ternary(pair: Pair<Rule>) -> Expression {
        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(first) = inner.next() else {
            unreachable!("ternary rules always have a condition")
        };
        let condition = Self::from_pair(first);

        let Some(if_true) = inner.next() else {
            return condition;
        };

        let Some(if_false) = inner.next() else {
            unreachable!("a ternary suffix always carries both branches")
        };

        Expression::IfElse(Box::new(IfElseExpr {
            condition,
            if_true: Self::from_pair(if_true),
            if_false: Self::from_pair(if_false),
            span,
        }))
    }

    /// Fold `lhs (op rhs)*` into a left-leaning tree of binary expressions.
    fn from_binary_chain(pair: Pair<Rule>) -> Expression {
        let mut inner = pair.into_inner();

        let Some(first) = inner.next() else {
            unreachable!("operator chains always start with an operand")
        };
        let mut lhs = Self::from_pair(first);

        while let Some(op) = inner.next() {
            let Some(rhs) = inner.next() else {
                unreachable!("every operator is followed by an operand")
            };
            let op_span = Span::from_pair(&op);
            let rhs = Self::from_pair(rhs);
            let span = lhs.span().merge(&rhs.span());
            lhs = Expression::Binary(Box::new(BinaryExpr {
                op: BinaryOp::from_pair(&op),
                op_span,
                lhs,
                rhs,
                span,
            }));
        }

        lhs
    }

    /// Comparison chains lean left as well: `a < b < c` becomes
    /// `(a < b) < c`, which the checker and evaluator treat as a chain.
    fn from_compare_chain(pair: Pair<Rule>) -> Expression {
        let mut inner = pair.into_inner();

        let Some(first) = inner.next() else {
            unreachable!("comparison chains always start with an operand")
        };
        let mut lhs = Self::from_pair(first);

        while let Some(op) = inner.next() {
            let Some(rhs) = inner.next() else {
                unreachable!("every comparison operator is followed by an operand")
            };
            let op_span = Span::from_pair(&op);
            let rhs = Self::from_pair(rhs);
            let span = lhs.span().merge(&rhs.span());
            lhs = Expression::Compare(Box::new(CompareExpr {
                op: CompareOp::from_pair(&op),
                op_span,
                lhs,
                rhs,
                span,
            }));
        }

        lhs
    }

    fn from_exponent(pair: Pair<Rule>) -> Expression {
        let mut inner = pair.into_inner();

        let Some(first) = inner.next() else {
            unreachable!("exponent rules always have a base")
        };
        let lhs = Self::from_pair(first);

        let Some(op) = inner.next() else {
            return lhs;
        };
        let op_span = Span::from_pair(&op);

        let Some(rhs) = inner.next() else {
            unreachable!("an exponent operator is always followed by an operand")
        };
        let rhs = Self::from_pair(rhs);

        let span = lhs.span().merge(&rhs.span());
        Expression::Binary(Box::new(BinaryExpr {
            op: BinaryOp::Exponent,
            op_span,
            lhs,
            rhs,
            span,
        }))
    }

    fn from_not(pair: Pair<Rule>) -> Expression {
        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(first) = inner.next() else {
            unreachable!("not rules always have an operand")
        };

        if first.as_rule() != Rule::notOp {
            return Self::from_pair(first);
        }

        let Some(operand) = inner.next() else {
            unreachable!("a not operator is always followed by an operand")
        };

        Expression::Unary(Box::new(UnaryExpr {
            op: UnaryOp::Not,
            operand: Self::from_pair(operand),
            span,
        }))
    }

    fn from_unary(pair: Pair<Rule>) -> Expression {
        let span = Span::from_pair(&pair);
        let mut inner = pair.into_inner();

        let Some(first) = inner.next() else {
            unreachable!("unary rules always have an operand")
        };

        if first.as_rule() != Rule::negateOp {
            return Self::from_pair(first);
        }

        let Some(operand) = inner.next() else {
            unreachable!("a negation operator is always followed by an operand")
        };

        Expression::Unary(Box::new(UnaryExpr {
            op: UnaryOp::Negate,
            operand: Self::from_pair(operand),
            span,
        }))
    }

    pub fn span(&self) -> Span {
        match self {
            Expression::IfElse(if_else) => if_else.span,
            Expression::Call(Call { span, .. })
            | Expression::ImportedCall(ImportedCall { span, .. })
            | Expression::Integer(Integer { span, .. })
            | Expression::Str(Str { span, .. })
            | Expression::Boolean(Boolean { span, .. })
            | Expression::Ident(Ident { span, .. }) => *span,
            Expression::Binary(binary) => binary.span,
            Expression::Compare(compare) => compare.span,
            Expression::Unary(unary) => unary.span,
        }
    }
}
