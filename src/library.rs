//! Host libraries importable with `imp`.
use std::{collections::HashMap, rc::Rc};

use crate::{
    interpreter::RuntimeError,
    value::{NativeHandler, Value},
};

/// A named namespace of host commands.
pub struct Library {
    name: String,
    commands: HashMap<String, NativeHandler>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Library {
        Library {
            name: name.into(),
            commands: HashMap::new(),
        }
    }

    pub fn with_command(mut self, name: &str, handler: NativeHandler) -> Library {
        self.commands.insert(name.to_owned(), handler);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self, name: &str) -> Option<NativeHandler> {
        self.commands.get(name).map(Rc::clone)
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("name", &self.name)
            .field("commands", &self.commands.keys())
            .finish()
    }
}

/// The set of libraries the driver makes importable. Both passes resolve
/// `imp` commands against the same registry.
#[derive(Default, Debug)]
pub struct LibraryRegistry {
    libraries: HashMap<String, Rc<Library>>,
}

impl LibraryRegistry {
    pub fn register(&mut self, library: Library) {
        self.libraries
            .insert(library.name().to_owned(), Rc::new(library));
    }

    pub fn get(&self, name: &str) -> Option<Rc<Library>> {
        self.libraries.get(name).map(Rc::clone)
    }
}

/// The stock registry shipped with the interpreter: a small `mathlib`
/// namespace.
pub fn default_registry() -> LibraryRegistry {
    let mut registry = LibraryRegistry::default();

    registry.register(
        Library::new("mathlib")
            .with_command(
                "sqrt",
                Rc::new(|arguments| {
                    let value = number_argument(&arguments, "sqrt")?;
                    Ok(Value::Float(value.sqrt()))
                }),
            )
            .with_command(
                "abs",
                Rc::new(|arguments| match arguments.first() {
                    Some(Value::Int(value)) => Ok(Value::Int(value.abs())),
                    Some(Value::Float(value)) => Ok(Value::Float(value.abs())),
                    _ => Err(RuntimeError::new("abs expects a number argument")),
                }),
            ),
    );

    registry
}

fn number_argument(arguments: &[Value], command: &str) -> Result<f64, RuntimeError> {
    match arguments.first() {
        Some(Value::Int(value)) => Ok(*value as f64),
        Some(Value::Float(value)) => Ok(*value),
        _ => Err(RuntimeError::new(format!(
            "{command} expects a number argument"
        ))),
    }
}
