use std::{fmt::Display, str::FromStr};

/// A type within the En language. Types are either one of the four primitive
/// type names or a function arrow, written `T1 -> T2 -> R`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Str,
    Bool,
    Function {
        params: Vec<Type>,
        return_type: Box<Type>,
    },
}

pub struct TypeParseError(pub String);

impl FromStr for Type {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "str" => Ok(Self::Str),
            "bool" => Ok(Self::Bool),
            _ => Err(TypeParseError(format!("Invalid type '{s}'"))),
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => f.write_str("int"),
            Type::Float => f.write_str("float"),
            Type::Str => f.write_str("str"),
            Type::Bool => f.write_str("bool"),
            Type::Function {
                params,
                return_type,
            } => {
                for param in params {
                    write!(f, "{param} -> ")?;
                }
                write!(f, "{return_type}")
            }
        }
    }
}

impl Type {
    /// The arrow type of a function with the given parameter and return types.
    pub fn function(params: Vec<Type>, return_type: Type) -> Type {
        Type::Function {
            params,
            return_type: Box::new(return_type),
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitive_types() {
        assert_eq!("int".parse::<Type>().ok(), Some(Type::Int));
        assert_eq!("float".parse::<Type>().ok(), Some(Type::Float));
        assert_eq!("str".parse::<Type>().ok(), Some(Type::Str));
        assert_eq!("bool".parse::<Type>().ok(), Some(Type::Bool));
        assert!("void".parse::<Type>().is_err());
    }

    #[test]
    fn test_display_function_type() {
        let fn_type = Type::function(vec![Type::Int, Type::Int], Type::Str);
        assert_eq!(fn_type.to_string(), "int -> int -> str");
    }
}
