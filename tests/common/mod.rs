use std::{cell::RefCell, io::Write, rc::Rc};

use en_lang::{
    ast::{Ast, EnParser},
    interpreter::{Interpreter, RuntimeError},
    library::default_registry,
    scope::Scope,
    typechecker::Typechecker,
    types::Type,
    value::{NativeHandler, Value},
};

/// Everything one program run produced.
pub struct RunOutcome {
    pub stdout: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub runtime_error: Option<String>,
}

impl RunOutcome {
    pub fn assert_clean(&self) {
        assert!(self.errors.is_empty(), "unexpected errors: {:?}", self.errors);
        assert!(
            self.warnings.is_empty(),
            "unexpected warnings: {:?}",
            self.warnings
        );
        assert!(
            self.runtime_error.is_none(),
            "unexpected runtime error: {:?}",
            self.runtime_error
        );
    }
}

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Parse, check and evaluate a program the way the driver does, capturing
/// stdout, the diagnostic messages and the optional runtime failure.
pub fn run_program(source: &str) -> RunOutcome {
    colored::control::set_override(false);

    let pairs = EnParser::parse_program(source);
    let ast = Ast::from_program(pairs);

    let registry = Rc::new(default_registry());
    let globals = Scope::root();

    // The same native the driver registers.
    let int_in_base_10: NativeHandler = Rc::new(|arguments| match arguments.first() {
        Some(Value::Int(number)) => Ok(Value::Str(number.to_string())),
        _ => Err(RuntimeError::new("intInBase10 expects an int argument")),
    });
    globals.borrow_mut().add_native_function(
        "intInBase10",
        vec![(Type::Int, "number".to_owned())],
        Type::Str,
        int_in_base_10,
    );

    let check_scope = Scope::child_of(&globals, None);
    Typechecker::from_ast(ast.clone(), Rc::clone(&registry)).check(&check_scope);

    let sink = check_scope.borrow().sink();
    let errors = sink
        .borrow()
        .errors
        .iter()
        .map(|diagnostic| diagnostic.message.clone())
        .collect();
    let warnings = sink
        .borrow()
        .warnings
        .iter()
        .map(|diagnostic| diagnostic.message.clone())
        .collect();

    let buffer = SharedBuffer::default();
    let run_scope = Scope::child_of(&globals, None);
    let mut interpreter = Interpreter::with_output(ast, registry, Box::new(buffer.clone()));
    let runtime_error = interpreter
        .run(&run_scope)
        .err()
        .map(|error| error.to_string());

    let stdout =
        String::from_utf8(buffer.0.borrow().clone()).expect("print output should be utf-8");

    RunOutcome {
        stdout,
        errors,
        warnings,
        runtime_error,
    }
}
