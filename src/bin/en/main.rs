//! # En
//!
//! This binary is the driver of En. It combines parser, type checker, and
//! interpreter into a single application.
mod cli;

use cli::*;

use std::{error::Error, fs, rc::Rc};

use colored::Colorize;
use log::{error, info};

use en_lang::{
    ast::{Ast, EnParser},
    diagnostics::{Severity, SourceFile},
    interpreter::{Interpreter, RuntimeError},
    library::default_registry,
    scope::Scope,
    typechecker::Typechecker,
    types::Type,
    value::{NativeHandler, Value},
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::init();

    simple_logger::init_with_level(args.verbosity.into()).unwrap();

    let content = fs::read_to_string(&args.file)?;
    let source = SourceFile::new(args.file.to_string_lossy(), &content);

    // Parse the normalized text so that diagnostic columns line up.
    let source_text = source.text();
    let pairs = EnParser::parse_program(&source_text);
    let ast = Ast::from_program(pairs);

    if args.dump_parsed {
        info!("Parsed AST:\n{:#?}", ast);
    }

    let registry = Rc::new(default_registry());

    let globals = Scope::root();
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
    let diagnostics = sink.borrow();
    for warning in &diagnostics.warnings {
        println!("{}", warning.render(Severity::Warning, &source));
    }
    for finding in &diagnostics.errors {
        println!("{}", finding.render(Severity::Error, &source));
    }
    let error_count = diagnostics.errors.len();
    let warning_count = diagnostics.warnings.len();
    drop(diagnostics);

    // The program runs even when the check reported errors.
    let run_scope = Scope::child_of(&globals, None);
    let mut interpreter = Interpreter::from_ast(ast, registry);
    if let Err(err) = interpreter.run(&run_scope) {
        error!("{err}");
        std::process::exit(1);
    }

    if error_count > 0 {
        println!(
            "{}{}{}{}{}",
            "Ran with ".blue(),
            format!("{error_count} error(s)").red(),
            " and ".blue(),
            format!("{warning_count} warning(s)").yellow(),
            ".".blue()
        );
    }

    Ok(())
}
