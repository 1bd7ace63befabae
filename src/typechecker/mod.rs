//! Type checker for En.
//!
//! The checker walks every command of an AST, infers a type for every
//! expression and records findings in the diagnostic sinks shared through
//! the scope chain. It never aborts: an expression whose type can not be
//! determined checks as "unknown", which silences all further diagnostics
//! that would only restate the original problem.
pub mod operators;

use std::rc::Rc;

use colored::Colorize;

use crate::{
    ast::{
        Ast, BinaryExpr, Call, CodeBlock, Command, CompareExpr, Declare, Expression, FnDef, Ident,
        If, IfElseExpr, Import, Loop, Return, Span, UnaryExpr,
    },
    diagnostics::Diagnostic,
    library::LibraryRegistry,
    scope::{Scope, ScopeRef, Variable},
    types::Type,
    value::{Function, Value},
};

use self::operators::{is_comparable, BINARY_OPERATION_TYPES, ITERABLE_TYPES, UNARY_OPERATION_TYPES};

/// Make a type stand out inside a diagnostic message.
fn display_type(checked: &Type) -> String {
    checked.to_string().yellow().to_string()
}

/// Struct for type checking an AST.
pub struct Typechecker {
    ast: Ast,
    registry: Rc<LibraryRegistry>,
}

impl Typechecker {
    pub fn from_ast(ast: Ast, registry: Rc<LibraryRegistry>) -> Self {
        Self { ast, registry }
    }

    /// Check the contained AST. Findings land in the sinks shared by
    /// `scope`; the checker itself always completes.
    pub fn check(&self, scope: &ScopeRef) {
        for command in self.ast.nodes() {
            self.check_command(&command, scope);
        }
    }

    /// Type check a single command. Returns the command's exit point, i.e.
    /// the span of a `return` that unconditionally ends the enclosing
    /// function; used to flag unreachable code.
    fn check_command(&self, command: &Command, scope: &ScopeRef) -> Option<Span> {
        match command {
            Command::Import(import) => {
                self.check_import(import, scope);
                None
            }
            Command::FnDef(fn_def) => {
                self.check_fn_def(fn_def, scope);
                None
            }
            Command::Loop(loop_command) => self.check_loop(loop_command, scope),
            Command::Print(print) => {
                self.check_expression(&print.value, scope);
                None
            }
            Command::Return(return_command) => self.check_return(return_command, scope),
            Command::Declare(declare) => {
                self.check_declare(declare, scope);
                None
            }
            Command::If(if_command) => self.check_if(if_command, scope),
            Command::Expression(expression) => {
                self.check_expression(expression, scope);
                None
            }
        }
    }

    /// Imports happen during checking already, so that a call syntactically
    /// following the `imp` can observe the namespace.
    fn check_import(&self, import: &Import, scope: &ScopeRef) {
        match self.registry.get(&import.name.value) {
            Some(library) => scope.borrow_mut().add_import(library),
            None => scope.borrow().error(Diagnostic::new(
                import.name.span,
                format!("I don't know a library called `{}`.", import.name.value),
            )),
        }
    }

    fn check_fn_def(&self, fn_def: &FnDef, scope: &ScopeRef) {
        let name = &fn_def.name;
        let return_type = fn_def.return_type.value.clone();

        // The default return belongs to the surrounding scope; it can not
        // see the parameters.
        if let Some(default_return) = &fn_def.default_return {
            if let Some(default_type) = self.check_expression(default_return, scope) {
                if default_type != return_type {
                    scope.borrow().error(Diagnostic::new(
                        default_return.span(),
                        format!(
                            "{}'s return type is {}, but your default return value is a {}.",
                            name.value,
                            display_type(&return_type),
                            display_type(&default_type)
                        ),
                    ));
                }
            }
        }

        if scope.borrow().declares(&name.value) {
            scope.borrow().error(Diagnostic::new(
                name.span,
                format!("You've already defined `{}`.", name.value),
            ));
        }

        // Construct and bind the function eagerly so recursive references
        // type check.
        let function = Rc::new(Function {
            scope: Rc::downgrade(scope),
            arguments: fn_def
                .params
                .iter()
                .map(|param| (param.type_annotation.value.clone(), param.name.value.clone()))
                .collect(),
            return_type,
            codeblock: fn_def.block.clone(),
            default_return: fn_def.default_return.clone(),
        });
        scope.borrow_mut().insert(
            &name.value,
            Variable::with_value(function.signature(), Value::Function(Rc::clone(&function))),
        );

        let body_scope = Scope::child_of(scope, Some(Rc::clone(&function)));
        for (arg_type, arg_name) in &function.arguments {
            body_scope
                .borrow_mut()
                .insert(arg_name, Variable::declared(arg_type.clone()));
        }

        let mut exit_point: Option<Span> = None;
        let mut warned = false;
        for command in &fn_def.block.commands {
            let exit = self.check_command(command, &body_scope);
            if exit.is_some() && exit_point.is_none() {
                exit_point = exit;
            } else if let Some(point) = exit_point {
                if !warned {
                    warned = true;
                    scope.borrow().warning(Diagnostic::new(
                        point,
                        "There are commands after this return statement, but I will never run them.",
                    ));
                }
            }
        }

        if let (Some(point), Some(_)) = (exit_point, &fn_def.default_return) {
            scope.borrow().warning(Diagnostic::new(
                point,
                "There is no need to have an explicit return statement because you have a default return expression that will never run.",
            ));
        }
    }

    fn check_loop(&self, loop_command: &Loop, scope: &ScopeRef) -> Option<Span> {
        let binding = &loop_command.binding;

        if let Some(iterable_type) = self.check_expression(&loop_command.iterable, scope) {
            match ITERABLE_TYPES.get(&iterable_type) {
                None => scope.borrow().error(Diagnostic::new(
                    loop_command.iterable.span(),
                    format!("I can't loop over a {}.", display_type(&iterable_type)),
                )),
                Some(iterated_type) => {
                    if *iterated_type != binding.type_annotation.value {
                        scope.borrow().error(Diagnostic::new(
                            binding.type_annotation.span,
                            format!(
                                "Looping over a {} produces {} values, not {}.",
                                display_type(&iterable_type),
                                display_type(iterated_type),
                                display_type(&binding.type_annotation.value)
                            ),
                        ));
                    }
                }
            }
        }

        let body_scope = Scope::child_of(scope, None);
        body_scope.borrow_mut().insert(
            &binding.name.value,
            Variable::declared(binding.type_annotation.value.clone()),
        );

        let mut exit_point = None;
        for command in &loop_command.block.commands {
            let exit = self.check_command(command, &body_scope);
            if exit_point.is_none() {
                exit_point = exit;
            }
        }

        // A loop body that leaves the function makes the loop an exit point
        // for the enclosing block.
        exit_point
    }

    fn check_return(&self, return_command: &Return, scope: &ScopeRef) -> Option<Span> {
        let return_type = self.check_expression(&return_command.value, scope);

        let enclosing = scope.borrow().enclosing_function();
        match enclosing {
            None => scope.borrow().error(Diagnostic::new(
                return_command.span,
                "You can't return outside a function.",
            )),
            Some(function) => {
                if let Some(return_type) = return_type {
                    if function.return_type != return_type {
                        scope.borrow().error(Diagnostic::new(
                            return_command.value.span(),
                            format!(
                                "You returned a {}, but the function is supposed to return a {}.",
                                display_type(&return_type),
                                display_type(&function.return_type)
                            ),
                        ));
                    }
                }
            }
        }

        Some(return_command.span)
    }

    fn check_declare(&self, declare: &Declare, scope: &ScopeRef) {
        let name = &declare.binding.name;
        let declared_type = declare.binding.type_annotation.value.clone();

        if scope.borrow().declares(&name.value) {
            scope.borrow().error(Diagnostic::new(
                name.span,
                format!("You've already defined `{}`.", name.value),
            ));
        }

        if let Some(value_type) = self.check_expression(&declare.value, scope) {
            if value_type != declared_type {
                scope.borrow().error(Diagnostic::new(
                    declare.value.span(),
                    format!(
                        "You set {}, which is defined to be a {}, to what evaluates to a {}.",
                        name.value,
                        display_type(&declared_type),
                        display_type(&value_type)
                    ),
                ));
            }
        }

        scope
            .borrow_mut()
            .insert(&name.value, Variable::declared(declared_type));
    }

    fn check_if(&self, if_command: &If, scope: &ScopeRef) -> Option<Span> {
        if let Some(condition_type) = self.check_expression(&if_command.condition, scope) {
            if condition_type != Type::Bool {
                scope.borrow().error(Diagnostic::new(
                    if_command.condition.span(),
                    format!(
                        "The condition here should be a boolean, not a {}.",
                        display_type(&condition_type)
                    ),
                ));
            }
        }

        let if_exit = self.check_block(&if_command.if_block, scope);

        let Some(else_block) = &if_command.else_block else {
            // The branch is conditional, so it is never an exit point on its
            // own.
            return None;
        };
        let else_exit = self.check_block(else_block, scope);

        match (if_exit, else_exit) {
            (Some(_), Some(_)) => Some(if_command.span),
            _ => None,
        }
    }

    fn check_block(&self, block: &CodeBlock, scope: &ScopeRef) -> Option<Span> {
        let block_scope = Scope::child_of(scope, None);

        let mut exit_point = None;
        for command in &block.commands {
            let exit = self.check_command(command, &block_scope);
            if exit_point.is_none() {
                exit_point = exit;
            }
        }
        exit_point
    }

    /// Type check an expression and return its type. `None` is the unknown
    /// sentinel: an error was already reported further down, so consumers
    /// pass it along without piling on.
    fn check_expression(&self, expression: &Expression, scope: &ScopeRef) -> Option<Type> {
        match expression {
            Expression::Integer(_) => Some(Type::Int),
            Expression::Str(_) => Some(Type::Str),
            Expression::Boolean(_) => Some(Type::Bool),
            Expression::Ident(ident) => self.check_ident(ident, scope),
            Expression::IfElse(if_else) => self.check_if_else_expr(if_else, scope),
            Expression::Call(call) => self.check_call(call, scope),
            Expression::ImportedCall(imported) => {
                scope.borrow().warning(Diagnostic::new(
                    imported.span,
                    "I currently don't know how to type check imported commands.",
                ));
                None
            }
            Expression::Binary(binary) => self.check_binary(binary, scope),
            Expression::Compare(compare) => self.check_compare(compare, scope),
            Expression::Unary(unary) => self.check_unary(unary, scope),
        }
    }

    fn check_ident(&self, ident: &Ident, scope: &ScopeRef) -> Option<Type> {
        let variable = scope.borrow().lookup(&ident.value);
        match variable {
            Some(variable) => Some(variable.declared),
            None => {
                scope.borrow().error(Diagnostic::new(
                    ident.span,
                    format!("You haven't yet defined {}.", ident.value),
                ));
                None
            }
        }
    }

    fn check_if_else_expr(&self, if_else: &IfElseExpr, scope: &ScopeRef) -> Option<Type> {
        let condition_type = self.check_expression(&if_else.condition, scope);
        let if_true_type = self.check_expression(&if_else.if_true, scope);
        let if_false_type = self.check_expression(&if_else.if_false, scope);

        if let Some(condition_type) = condition_type {
            if condition_type != Type::Bool {
                scope.borrow().error(Diagnostic::new(
                    if_else.condition.span(),
                    format!(
                        "The condition here should be a boolean, not a {}.",
                        display_type(&condition_type)
                    ),
                ));
            }
        }

        let (Some(if_true_type), Some(if_false_type)) = (if_true_type, if_false_type) else {
            return None;
        };

        if if_true_type != if_false_type {
            scope.borrow().error(Diagnostic::new(
                if_else.span,
                format!(
                    "The branches of the if-else expression should have the same type, but the true branch has type {} while the false branch has type {}.",
                    display_type(&if_true_type),
                    display_type(&if_false_type)
                ),
            ));
            return None;
        }

        Some(if_true_type)
    }

    fn check_call(&self, call: &Call, scope: &ScopeRef) -> Option<Type> {
        let callee_type = self.check_ident(&call.callee, scope)?;

        let Type::Function {
            params,
            return_type,
        } = callee_type.clone()
        else {
            scope.borrow().error(Diagnostic::new(
                call.callee.span,
                format!(
                    "I can only call functions, but {} is a {}.",
                    call.callee.value,
                    display_type(&callee_type)
                ),
            ));
            return None;
        };

        for (n, (argument, param_type)) in call.args.iter().zip(params.iter()).enumerate() {
            if let Some(argument_type) = self.check_expression(argument, scope) {
                if argument_type != *param_type {
                    scope.borrow().error(Diagnostic::new(
                        call.span,
                        format!(
                            "For a {}'s argument #{}, you gave a {}, but you should've given a {}.",
                            display_type(&callee_type),
                            n + 1,
                            display_type(&argument_type),
                            display_type(param_type)
                        ),
                    ));
                }
            }
        }

        if call.args.len() != params.len() {
            scope.borrow().error(Diagnostic::new(
                call.span,
                format!(
                    "A {} has {} argument(s), but you gave {}.",
                    display_type(&callee_type),
                    params.len(),
                    call.args.len()
                ),
            ));
        }

        Some(*return_type)
    }

    fn check_binary(&self, binary: &BinaryExpr, scope: &ScopeRef) -> Option<Type> {
        let left_type = self.check_expression(&binary.lhs, scope);
        let right_type = self.check_expression(&binary.rhs, scope);

        let (Some(left_type), Some(right_type)) = (left_type, right_type) else {
            return None;
        };

        let types = &BINARY_OPERATION_TYPES[&binary.op];
        match types.get(&(left_type.clone(), right_type.clone())) {
            Some(return_type) => Some(return_type.clone()),
            None => {
                scope.borrow().error(Diagnostic::new(
                    binary.span,
                    format!(
                        "I don't know how to use {} on a {} and {}.",
                        binary.op,
                        display_type(&left_type),
                        display_type(&right_type)
                    ),
                ));
                None
            }
        }
    }

    fn check_unary(&self, unary: &UnaryExpr, scope: &ScopeRef) -> Option<Type> {
        let operand_type = self.check_expression(&unary.operand, scope)?;

        let types = &UNARY_OPERATION_TYPES[&unary.op];
        match types.get(&operand_type) {
            Some(return_type) => Some(return_type.clone()),
            None => {
                scope.borrow().error(Diagnostic::new(
                    unary.span,
                    format!(
                        "I don't know how to use {} on a {}.",
                        unary.op,
                        display_type(&operand_type)
                    ),
                ));
                None
            }
        }
    }

    /// Comparison chains lean left: for `a < b < c` the left-hand side is
    /// itself a comparison. The chain's own diagnostics were already
    /// reported when the left link was checked, so the type of the shared
    /// operand is re-derived in a silenced scope.
    fn check_compare(&self, compare: &CompareExpr, scope: &ScopeRef) -> Option<Type> {
        let left_type = if let Expression::Compare(left_chain) = &compare.lhs {
            self.check_expression(&compare.lhs, scope);

            let probe = Scope::child_of(scope, None);
            probe.borrow_mut().silence();
            self.check_expression(&left_chain.rhs, &probe)
        } else {
            self.check_expression(&compare.lhs, scope)
        };
        let right_type = self.check_expression(&compare.rhs, scope);

        if let Some(left_type) = left_type {
            if let Some(right_type) = right_type {
                if left_type != right_type {
                    scope.borrow().error(Diagnostic::new(
                        compare.op_span,
                        format!(
                            "I can't compare {} and {} because they aren't the same type. You know they won't ever be equal.",
                            display_type(&left_type),
                            display_type(&right_type)
                        ),
                    ));
                }
            }
            if compare.op.is_ordering() && !is_comparable(&left_type) {
                scope.borrow().error(Diagnostic::new(
                    compare.op_span,
                    format!("I don't know how to compare {}.", display_type(&left_type)),
                ));
            }
        }

        // Comparisons produce a boolean no matter what went wrong above.
        Some(Type::Bool)
    }
}
