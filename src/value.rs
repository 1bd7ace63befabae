//! Runtime values of the En language.
use std::{
    cell::RefCell,
    fmt::Display,
    rc::{Rc, Weak},
};

use crate::{
    ast::{CodeBlock, Expression},
    interpreter::RuntimeError,
    scope::Scope,
    types::Type,
};

/// A host callable, invoked with the flat list of already-evaluated
/// argument values.
pub type NativeHandler = Rc<dyn Fn(Vec<Value>) -> Result<Value, RuntimeError>>;

#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Function(Rc<Function>),
    NativeFunction(Rc<NativeFunction>),
}

impl Value {
    pub fn type_of(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Bool(_) => Type::Bool,
            Value::Str(_) => Type::Str,
            Value::Function(function) => function.signature(),
            Value::NativeFunction(native) => native.signature(),
        }
    }

    /// The boolean this value must be after a successful check.
    pub fn as_bool(&self) -> Result<bool, RuntimeError> {
        match self {
            Value::Bool(value) => Ok(*value),
            value => Err(RuntimeError::new(format!(
                "Expected a bool here, but got a {}.",
                value.type_of()
            ))),
        }
    }

    /// Integer-aware truthiness, used by `or` and `and`: an integer counts
    /// as true when it is non-zero.
    pub fn truthy(&self) -> Result<bool, RuntimeError> {
        match self {
            Value::Bool(value) => Ok(*value),
            Value::Int(value) => Ok(*value != 0),
            value => Err(RuntimeError::new(format!(
                "I can't use a {} as a condition.",
                value.type_of()
            ))),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => {
                // Keep whole floats recognizable as floats.
                if value.is_finite() && value.fract() == 0.0 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
            Value::Bool(value) => write!(f, "{value}"),
            Value::Str(value) => f.write_str(value),
            Value::Function(function) => write!(f, "<function: {}>", function.signature()),
            Value::NativeFunction(native) => write!(f, "<native function: {}>", native.signature()),
        }
    }
}

/// A user-defined function value.
#[derive(Debug)]
pub struct Function {
    /// The scope the function was defined in. Every call scope is parented
    /// here, which is what makes capture lexical. Weak, because that same
    /// scope usually holds the function under its name.
    pub scope: Weak<RefCell<Scope>>,
    /// Ordered `(type, name)` pairs.
    pub arguments: Vec<(Type, String)>,
    pub return_type: Type,
    pub codeblock: CodeBlock,
    pub default_return: Option<Expression>,
}

impl Function {
    /// The arrow type `A1 -> ... -> An -> R` of this function.
    pub fn signature(&self) -> Type {
        Type::function(
            self.arguments
                .iter()
                .map(|(arg_type, _)| arg_type.clone())
                .collect(),
            self.return_type.clone(),
        )
    }
}

/// A host function registered through the native hook. It has a declared
/// signature but no code block.
pub struct NativeFunction {
    pub arguments: Vec<(Type, String)>,
    pub return_type: Type,
    pub handler: NativeHandler,
}

impl NativeFunction {
    pub fn signature(&self) -> Type {
        Type::function(
            self.arguments
                .iter()
                .map(|(arg_type, _)| arg_type.clone())
                .collect(),
            self.return_type.clone(),
        )
    }

    pub fn run(&self, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        (self.handler)(arguments)
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction")
            .field("signature", &self.signature())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_floats_display_with_decimal() {
        assert_eq!(Value::Float(8.0).to_string(), "8.0");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_integer_truthiness() {
        assert_eq!(Value::Int(0).truthy().ok(), Some(false));
        assert_eq!(Value::Int(-3).truthy().ok(), Some(true));
        assert!(Value::Str("".into()).truthy().is_err());
    }
}
