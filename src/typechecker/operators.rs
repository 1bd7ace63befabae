//! The fixed operand/result tables for every operator. There is no
//! overloading beyond these rows.
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{
    ast::{BinaryOp, UnaryOp},
    types::Type,
};

pub static BINARY_OPERATION_TYPES: Lazy<HashMap<BinaryOp, HashMap<(Type, Type), Type>>> =
    Lazy::new(|| {
        use BinaryOp::*;
        use Type::*;

        HashMap::from([
            (Or, HashMap::from([((Bool, Bool), Bool), ((Int, Int), Int)])),
            (And, HashMap::from([((Bool, Bool), Bool), ((Int, Int), Int)])),
            (
                Add,
                HashMap::from([
                    ((Int, Int), Int),
                    ((Float, Float), Float),
                    ((Str, Str), Str),
                ]),
            ),
            (
                Subtract,
                HashMap::from([((Int, Int), Int), ((Float, Float), Float)]),
            ),
            (
                Multiply,
                HashMap::from([((Int, Int), Int), ((Float, Float), Float)]),
            ),
            (
                Divide,
                HashMap::from([((Int, Int), Int), ((Float, Float), Float)]),
            ),
            (
                RoundDiv,
                HashMap::from([((Int, Int), Int), ((Float, Float), Float)]),
            ),
            (
                Modulo,
                HashMap::from([((Int, Int), Int), ((Float, Float), Float)]),
            ),
            // Exponents are weird because negative powers result in
            // non-integers.
            (
                Exponent,
                HashMap::from([((Int, Int), Float), ((Float, Float), Float)]),
            ),
        ])
    });

pub static UNARY_OPERATION_TYPES: Lazy<HashMap<UnaryOp, HashMap<Type, Type>>> = Lazy::new(|| {
    use Type::*;

    HashMap::from([
        (
            UnaryOp::Negate,
            HashMap::from([(Int, Int), (Float, Float)]),
        ),
        (UnaryOp::Not, HashMap::from([(Bool, Bool), (Int, Int)])),
    ])
});

/// Types with a defined ordering, usable with `<`, `>`, `<=` and `>=`.
pub fn is_comparable(checked: &Type) -> bool {
    matches!(checked, Type::Int | Type::Float)
}

/// Iterable types, mapped to the type their loop variable takes. The only
/// iterable is `int`, which iterates `0..N-1`.
pub static ITERABLE_TYPES: Lazy<HashMap<Type, Type>> =
    Lazy::new(|| HashMap::from([(Type::Int, Type::Int)]));
