//! Tree-walking evaluator for En.
//!
//! The evaluator trusts the types the checker established: operand
//! mismatches that still slip through surface as [`RuntimeError`]s and stop
//! the run.
mod error;

pub use self::error::*;

use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{
        Ast, BinaryExpr, BinaryOp, Call, Command, CompareExpr, CompareOp, Expression, FnDef, Ident,
        If, ImportedCall, Loop, UnaryExpr, UnaryOp,
    },
    library::LibraryRegistry,
    scope::{Scope, ScopeRef, Variable},
    value::{Function, Value},
};

/// The result of evaluating a command: `Some` carries a value that an
/// enclosing function should return with.
type Flow = Option<Value>;

/// Struct for evaluating an AST. Running it after a check that reported
/// errors is allowed; evaluation simply stops at the first failure.
pub struct Interpreter {
    ast: Ast,
    registry: Rc<LibraryRegistry>,
    output: Box<dyn Write>,
}

impl Interpreter {
    pub fn from_ast(ast: Ast, registry: Rc<LibraryRegistry>) -> Self {
        Self::with_output(ast, registry, Box::new(io::stdout()))
    }

    /// Like [`Interpreter::from_ast`], but with `print` redirected.
    pub fn with_output(ast: Ast, registry: Rc<LibraryRegistry>, output: Box<dyn Write>) -> Self {
        Self {
            ast,
            registry,
            output,
        }
    }

    pub fn run(&mut self, scope: &ScopeRef) -> Result<(), RuntimeError> {
        for command in self.ast.nodes() {
            // A return at the top level has nowhere to go; the value is
            // dropped.
            self.eval_command(&command, scope)?;
        }
        Ok(())
    }

    fn eval_command(&mut self, command: &Command, scope: &ScopeRef) -> Result<Flow, RuntimeError> {
        match command {
            Command::Import(import) => {
                let Some(library) = self.registry.get(&import.name.value) else {
                    return Err(RuntimeError::new(format!(
                        "Library {} not found",
                        import.name.value
                    )));
                };
                scope.borrow_mut().add_import(library);
                Ok(None)
            }
            Command::FnDef(fn_def) => {
                self.eval_fn_def(fn_def, scope);
                Ok(None)
            }
            Command::Loop(loop_command) => self.eval_loop(loop_command, scope),
            Command::Print(print) => {
                let value = self.eval_expression(&print.value, scope)?;
                writeln!(self.output, "{value}")
                    .map_err(|err| RuntimeError::new(format!("Failed to print: {err}")))?;
                Ok(None)
            }
            Command::Return(return_command) => {
                Ok(Some(self.eval_expression(&return_command.value, scope)?))
            }
            Command::Declare(declare) => {
                let value = self.eval_expression(&declare.value, scope)?;
                scope.borrow_mut().insert(
                    &declare.binding.name.value,
                    Variable::with_value(declare.binding.type_annotation.value.clone(), value),
                );
                Ok(None)
            }
            Command::If(if_command) => self.eval_if(if_command, scope),
            Command::Expression(expression) => {
                self.eval_expression(expression, scope)?;
                Ok(None)
            }
        }
    }

    fn eval_fn_def(&mut self, fn_def: &FnDef, scope: &ScopeRef) {
        let function = Rc::new(Function {
            scope: Rc::downgrade(scope),
            arguments: fn_def
                .params
                .iter()
                .map(|param| (param.type_annotation.value.clone(), param.name.value.clone()))
                .collect(),
            return_type: fn_def.return_type.value.clone(),
            codeblock: fn_def.block.clone(),
            default_return: fn_def.default_return.clone(),
        });
        scope.borrow_mut().insert(
            &fn_def.name.value,
            Variable::with_value(function.signature(), Value::Function(function)),
        );
    }

    fn eval_loop(&mut self, loop_command: &Loop, scope: &ScopeRef) -> Result<Flow, RuntimeError> {
        let times = self.eval_expression(&loop_command.iterable, scope)?;
        let Value::Int(times) = times else {
            return Err(RuntimeError::new(format!(
                "I can't loop over a {}.",
                times.type_of()
            )));
        };

        let binding = &loop_command.binding;
        for i in 0..times {
            let iteration_scope = Scope::child_of(scope, None);
            iteration_scope.borrow_mut().insert(
                &binding.name.value,
                Variable::with_value(binding.type_annotation.value.clone(), Value::Int(i)),
            );

            for command in &loop_command.block.commands {
                if let Some(value) = self.eval_command(command, &iteration_scope)? {
                    return Ok(Some(value));
                }
            }
        }

        Ok(None)
    }

    fn eval_if(&mut self, if_command: &If, scope: &ScopeRef) -> Result<Flow, RuntimeError> {
        let condition = self.eval_expression(&if_command.condition, scope)?.as_bool()?;

        let block = if condition {
            Some(&if_command.if_block)
        } else {
            if_command.else_block.as_ref()
        };

        if let Some(block) = block {
            let branch_scope = Scope::child_of(scope, None);
            for command in &block.commands {
                if let Some(value) = self.eval_command(command, &branch_scope)? {
                    return Ok(Some(value));
                }
            }
        }

        Ok(None)
    }

    fn eval_expression(
        &mut self,
        expression: &Expression,
        scope: &ScopeRef,
    ) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Integer(integer) => Ok(Value::Int(integer.value)),
            Expression::Str(string) => Ok(Value::Str(string.value.clone())),
            Expression::Boolean(boolean) => Ok(Value::Bool(boolean.value)),
            Expression::Ident(ident) => self.eval_ident(ident, scope),
            Expression::IfElse(if_else) => {
                if self.eval_expression(&if_else.condition, scope)?.as_bool()? {
                    self.eval_expression(&if_else.if_true, scope)
                } else {
                    self.eval_expression(&if_else.if_false, scope)
                }
            }
            Expression::Call(call) => self.eval_call(call, scope),
            Expression::ImportedCall(imported) => self.eval_imported_call(imported, scope),
            Expression::Binary(binary) => self.eval_binary(binary, scope),
            Expression::Compare(compare) => self.eval_compare(compare, scope),
            Expression::Unary(unary) => self.eval_unary(unary, scope),
        }
    }

    fn eval_ident(&self, ident: &Ident, scope: &ScopeRef) -> Result<Value, RuntimeError> {
        let variable = scope.borrow().lookup(&ident.value);
        let Some(variable) = variable else {
            return Err(RuntimeError::new(format!(
                "You tried to get a variable/function `{}`, but it isn't defined.",
                ident.value
            )));
        };
        let Some(value) = variable.value else {
            return Err(RuntimeError::new(format!(
                "Internal problem: `{}` has no value.",
                ident.value
            )));
        };
        Ok(value)
    }

    fn eval_call(&mut self, call: &Call, scope: &ScopeRef) -> Result<Value, RuntimeError> {
        let callee = self.eval_ident(&call.callee, scope)?;

        let mut arguments = vec![];
        for argument in &call.args {
            arguments.push(self.eval_expression(argument, scope)?);
        }

        match callee {
            Value::Function(function) => self.call_function(&function, arguments),
            Value::NativeFunction(native) => native.run(arguments),
            value => Err(RuntimeError::new(format!(
                "I can only call functions, but {} is a {}.",
                call.callee.value,
                value.type_of()
            ))),
        }
    }

    /// Run a user function: bind the arguments in a child of the function's
    /// defining scope (lexical capture) and execute the body. When the body
    /// completes, the default return is evaluated in the call scope.
    fn call_function(
        &mut self,
        function: &Rc<Function>,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        let Some(defining_scope) = function.scope.upgrade() else {
            return Err(RuntimeError::new(
                "Internal problem: the defining scope of this function is gone.",
            ));
        };

        if arguments.len() < function.arguments.len() {
            let missing = function.arguments[arguments.len()..]
                .iter()
                .map(|(_, name)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(RuntimeError::new(format!("Missing arguments {missing}")));
        }

        let call_scope = Scope::child_of(&defining_scope, Some(Rc::clone(function)));
        for (value, (arg_type, arg_name)) in arguments.into_iter().zip(function.arguments.iter()) {
            call_scope
                .borrow_mut()
                .insert(arg_name, Variable::with_value(arg_type.clone(), value));
        }

        for command in &function.codeblock.commands {
            if let Some(value) = self.eval_command(command, &call_scope)? {
                return Ok(value);
            }
        }

        let Some(default_return) = &function.default_return else {
            return Err(RuntimeError::new(
                "This function ended without returning a value.",
            ));
        };
        self.eval_expression(default_return, &call_scope)
    }

    fn eval_imported_call(
        &mut self,
        imported: &ImportedCall,
        scope: &ScopeRef,
    ) -> Result<Value, RuntimeError> {
        let library = scope.borrow().find_import(&imported.library.value);
        let Some(library) = library else {
            return Err(RuntimeError::new(format!(
                "Library {} not found",
                imported.library.value
            )));
        };

        let Some(command) = library.command(&imported.command.value) else {
            return Err(RuntimeError::new(format!(
                "Command {} not found",
                imported.command.value
            )));
        };

        let mut arguments = vec![];
        for argument in &imported.args {
            arguments.push(self.eval_expression(argument, scope)?);
        }

        command(arguments)
    }

    fn eval_binary(&mut self, binary: &BinaryExpr, scope: &ScopeRef) -> Result<Value, RuntimeError> {
        // `or` and `and` short-circuit and keep the operand's value;
        // everything else is strict.
        match binary.op {
            BinaryOp::Or => {
                let left = self.eval_expression(&binary.lhs, scope)?;
                return if left.truthy()? {
                    Ok(left)
                } else {
                    self.eval_expression(&binary.rhs, scope)
                };
            }
            BinaryOp::And => {
                let left = self.eval_expression(&binary.lhs, scope)?;
                return if left.truthy()? {
                    self.eval_expression(&binary.rhs, scope)
                } else {
                    Ok(left)
                };
            }
            _ => {}
        }

        let left = self.eval_expression(&binary.lhs, scope)?;
        let right = self.eval_expression(&binary.rhs, scope)?;
        apply_binary(binary.op, left, right)
    }

    /// Chains short-circuit: if the left chain is already false the whole
    /// comparison is false; otherwise the link compares against the left
    /// link's right operand (evaluating it a second time).
    fn eval_compare(
        &mut self,
        compare: &CompareExpr,
        scope: &ScopeRef,
    ) -> Result<Value, RuntimeError> {
        let left_operand = if let Expression::Compare(left_chain) = &compare.lhs {
            if !self.eval_expression(&compare.lhs, scope)?.as_bool()? {
                return Ok(Value::Bool(false));
            }
            &left_chain.rhs
        } else {
            &compare.lhs
        };

        let left = self.eval_expression(left_operand, scope)?;
        let right = self.eval_expression(&compare.rhs, scope)?;
        apply_compare(compare.op, left, right)
    }

    fn eval_unary(&mut self, unary: &UnaryExpr, scope: &ScopeRef) -> Result<Value, RuntimeError> {
        let value = self.eval_expression(&unary.operand, scope)?;
        match (unary.op, value) {
            (UnaryOp::Negate, Value::Int(value)) => checked(value.checked_neg()),
            (UnaryOp::Negate, Value::Float(value)) => Ok(Value::Float(-value)),
            (UnaryOp::Not, Value::Bool(value)) => Ok(Value::Bool(!value)),
            // `not` keeps the operand's type: integers toggle between 0 and 1.
            (UnaryOp::Not, Value::Int(value)) => {
                Ok(Value::Int(if value == 0 { 1 } else { 0 }))
            }
            (op, value) => Err(RuntimeError::new(format!(
                "I don't know how to use {op} on a {}.",
                value.type_of()
            ))),
        }
    }
}

fn apply_binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    use BinaryOp::*;
    use Value::*;

    match (op, left, right) {
        (Add, Int(a), Int(b)) => checked(a.checked_add(b)),
        (Add, Float(a), Float(b)) => Ok(Float(a + b)),
        (Add, Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
        (Subtract, Int(a), Int(b)) => checked(a.checked_sub(b)),
        (Subtract, Float(a), Float(b)) => Ok(Float(a - b)),
        (Multiply, Int(a), Int(b)) => checked(a.checked_mul(b)),
        (Multiply, Float(a), Float(b)) => Ok(Float(a * b)),
        // Integer division truncates toward zero, matching the declared
        // `int` result type.
        (Divide, Int(a), Int(b)) => {
            nonzero(b)?;
            checked(a.checked_div(b))
        }
        (Divide, Float(a), Float(b)) => Ok(Float(a / b)),
        (RoundDiv, Int(a), Int(b)) => {
            nonzero(b)?;
            floor_div(a, b)
        }
        (RoundDiv, Float(a), Float(b)) => Ok(Float((a / b).floor())),
        (Modulo, Int(a), Int(b)) => {
            nonzero(b)?;
            checked(a.checked_rem(b))
        }
        (Modulo, Float(a), Float(b)) => Ok(Float(a % b)),
        // Exponents always produce floats; negative powers don't stay
        // integral.
        (Exponent, Int(a), Int(b)) => Ok(Float((a as f64).powf(b as f64))),
        (Exponent, Float(a), Float(b)) => Ok(Float(a.powf(b))),
        (op, left, right) => Err(RuntimeError::new(format!(
            "I don't know how to use {op} on a {} and {}.",
            left.type_of(),
            right.type_of()
        ))),
    }
}

fn apply_compare(op: CompareOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    use CompareOp::*;

    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(match op {
            Equals => a == b,
            NotEquals => a != b,
            Less => a < b,
            Greater => a > b,
            LessOrEqual => a <= b,
            GreaterOrEqual => a >= b,
        })),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Bool(match op {
            Equals => a == b,
            NotEquals => a != b,
            Less => a < b,
            Greater => a > b,
            LessOrEqual => a <= b,
            GreaterOrEqual => a >= b,
        })),
        _ if !op.is_ordering() => {
            let equal = values_equal(&left, &right)?;
            Ok(Value::Bool(if op == Equals { equal } else { !equal }))
        }
        _ => Err(RuntimeError::new(format!(
            "I don't know how to compare a {} and {}.",
            left.type_of(),
            right.type_of()
        ))),
    }
}

fn values_equal(left: &Value, right: &Value) -> Result<bool, RuntimeError> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Str(a), Value::Str(b)) => Ok(a == b),
        // Functions compare by identity.
        (Value::Function(a), Value::Function(b)) => Ok(Rc::ptr_eq(a, b)),
        (Value::NativeFunction(a), Value::NativeFunction(b)) => Ok(Rc::ptr_eq(a, b)),
        (left, right) => Err(RuntimeError::new(format!(
            "I don't know how to compare a {} and {}.",
            left.type_of(),
            right.type_of()
        ))),
    }
}

fn checked(value: Option<i64>) -> Result<Value, RuntimeError> {
    value
        .map(Value::Int)
        .ok_or_else(|| RuntimeError::new("This number arithmetic overflowed."))
}

fn nonzero(divisor: i64) -> Result<(), RuntimeError> {
    if divisor == 0 {
        Err(RuntimeError::new("You can't divide by zero."))
    } else {
        Ok(())
    }
}

/// Floor division, rounding toward negative infinity like `//` demands.
fn floor_div(a: i64, b: i64) -> Result<Value, RuntimeError> {
    let Some(quotient) = a.checked_div(b) else {
        return checked(None);
    };
    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(Value::Int(quotient - 1))
    } else {
        Ok(Value::Int(quotient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_division_rounds_down() {
        assert!(matches!(floor_div(7, 2), Ok(Value::Int(3))));
        assert!(matches!(floor_div(-7, 2), Ok(Value::Int(-4))));
        assert!(matches!(floor_div(-7, -2), Ok(Value::Int(3))));
        assert!(matches!(floor_div(6, 3), Ok(Value::Int(2))));
    }

    #[test]
    fn test_integer_division_truncates_toward_zero() {
        let Ok(Value::Int(quotient)) = apply_binary(BinaryOp::Divide, Value::Int(-7), Value::Int(2))
        else {
            panic!("expected an int quotient");
        };
        assert_eq!(quotient, -3);
    }

    #[test]
    fn test_division_by_zero_fails() {
        assert!(apply_binary(BinaryOp::Divide, Value::Int(1), Value::Int(0)).is_err());
        assert!(apply_binary(BinaryOp::Modulo, Value::Int(1), Value::Int(0)).is_err());
    }

    #[test]
    fn test_integer_exponent_produces_float() {
        let Ok(Value::Float(result)) =
            apply_binary(BinaryOp::Exponent, Value::Int(2), Value::Int(3))
        else {
            panic!("expected a float power");
        };
        assert_eq!(result, 8.0);
    }

    #[test]
    fn test_mismatched_operands_are_runtime_errors() {
        assert!(apply_binary(BinaryOp::Add, Value::Int(1), Value::Str("x".into())).is_err());
        assert!(apply_compare(CompareOp::Less, Value::Bool(true), Value::Bool(false)).is_err());
    }
}
