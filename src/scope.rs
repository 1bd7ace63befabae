//! Lexically nested symbol environments, shared by the type checker and the
//! evaluator.
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    diagnostics::{Diagnostic, DiagnosticSink},
    library::Library,
    types::Type,
    value::{Function, NativeFunction, NativeHandler, Value},
};

/// A typed cell. The type checker only fills in the declared type; the
/// evaluator stores real values.
#[derive(Debug, Clone)]
pub struct Variable {
    pub declared: Type,
    pub value: Option<Value>,
}

impl Variable {
    pub fn declared(declared: Type) -> Variable {
        Variable {
            declared,
            value: None,
        }
    }

    pub fn with_value(declared: Type, value: Value) -> Variable {
        Variable {
            declared,
            value: Some(value),
        }
    }
}

pub type ScopeRef = Rc<RefCell<Scope>>;

/// One level of the environment: named variables, imported namespaces, an
/// optional parent and an optional enclosing function. All scopes derived
/// from one root share the same diagnostic sinks.
#[derive(Debug)]
pub struct Scope {
    parent: Option<ScopeRef>,
    parent_function: Option<Rc<Function>>,
    imports: Vec<Rc<Library>>,
    variables: HashMap<String, Variable>,
    sink: DiagnosticSink,
}

impl Scope {
    pub fn root() -> ScopeRef {
        Rc::new(RefCell::new(Scope {
            parent: None,
            parent_function: None,
            imports: vec![],
            variables: HashMap::new(),
            sink: DiagnosticSink::default(),
        }))
    }

    /// Create a child scope. It shares the parent's diagnostic sinks; the
    /// enclosing function is the explicit one if given, otherwise resolution
    /// falls through to the parent chain.
    pub fn child_of(parent: &ScopeRef, parent_function: Option<Rc<Function>>) -> ScopeRef {
        let sink = Rc::clone(&parent.borrow().sink);
        Rc::new(RefCell::new(Scope {
            parent: Some(Rc::clone(parent)),
            parent_function,
            imports: vec![],
            variables: HashMap::new(),
            sink,
        }))
    }

    /// Find a variable by walking the scope chain.
    pub fn lookup(&self, name: &str) -> Option<Variable> {
        if let Some(variable) = self.variables.get(name) {
            return Some(variable.clone());
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.borrow().lookup(name))
    }

    /// Whether a name is bound in this scope itself (shadowing an outer
    /// binding is allowed and silent).
    pub fn declares(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Bind a variable. Re-binding a name in the same scope is a diagnostic
    /// at the call sites, not a hard failure: the later insertion wins so
    /// checking can proceed.
    pub fn insert(&mut self, name: impl Into<String>, variable: Variable) {
        self.variables.insert(name.into(), variable);
    }

    /// The function whose body is being processed, if any.
    pub fn enclosing_function(&self) -> Option<Rc<Function>> {
        if let Some(function) = &self.parent_function {
            return Some(Rc::clone(function));
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.borrow().enclosing_function())
    }

    pub fn add_import(&mut self, library: Rc<Library>) {
        self.imports.push(library);
    }

    /// Ordered scan of the imported namespaces, nearest scope first.
    pub fn find_import(&self, name: &str) -> Option<Rc<Library>> {
        for library in &self.imports {
            if library.name() == name {
                return Some(Rc::clone(library));
            }
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.borrow().find_import(name))
    }

    /// The host hook: register a native function with a declared signature.
    pub fn add_native_function(
        &mut self,
        name: &str,
        arguments: Vec<(Type, String)>,
        return_type: Type,
        handler: NativeHandler,
    ) {
        let native = Rc::new(NativeFunction {
            arguments,
            return_type,
            handler,
        });
        self.insert(
            name,
            Variable::with_value(native.signature(), Value::NativeFunction(native)),
        );
    }

    pub fn error(&self, diagnostic: Diagnostic) {
        self.sink.borrow_mut().errors.push(diagnostic);
    }

    pub fn warning(&self, diagnostic: Diagnostic) {
        self.sink.borrow_mut().warnings.push(diagnostic);
    }

    pub fn sink(&self) -> DiagnosticSink {
        Rc::clone(&self.sink)
    }

    /// Swap in a fresh sink whose contents are never reported. Used when a
    /// subexpression has to be re-checked without duplicating diagnostics.
    pub fn silence(&mut self) {
        self.sink = DiagnosticSink::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadowing_resolves_to_inner_binding() {
        let root = Scope::root();
        root.borrow_mut()
            .insert("x", Variable::with_value(Type::Int, Value::Int(1)));

        let child = Scope::child_of(&root, None);
        child
            .borrow_mut()
            .insert("x", Variable::with_value(Type::Str, Value::Str("inner".into())));

        assert_eq!(child.borrow().lookup("x").map(|v| v.declared), Some(Type::Str));
        assert_eq!(root.borrow().lookup("x").map(|v| v.declared), Some(Type::Int));
    }

    #[test]
    fn test_lookup_walks_the_parent_chain() {
        let root = Scope::root();
        root.borrow_mut()
            .insert("x", Variable::declared(Type::Bool));

        let child = Scope::child_of(&root, None);
        let grandchild = Scope::child_of(&child, None);

        assert!(grandchild.borrow().lookup("x").is_some());
        assert!(grandchild.borrow().lookup("y").is_none());
        assert!(!grandchild.borrow().declares("x"));
    }

    #[test]
    fn test_sinks_are_shared_with_descendants() {
        let root = Scope::root();
        let child = Scope::child_of(&root, None);
        let grandchild = Scope::child_of(&child, None);

        grandchild
            .borrow()
            .error(Diagnostic::new(Default::default(), "nested"));

        assert_eq!(root.borrow().sink().borrow().errors.len(), 1);
    }

    #[test]
    fn test_silenced_scope_discards_diagnostics() {
        let root = Scope::root();
        let probe = Scope::child_of(&root, None);
        probe.borrow_mut().silence();

        probe
            .borrow()
            .error(Diagnostic::new(Default::default(), "discarded"));

        assert!(root.borrow().sink().borrow().errors.is_empty());
    }

    #[test]
    fn test_find_import_walks_the_parent_chain() {
        let root = Scope::root();
        root.borrow_mut()
            .add_import(Rc::new(Library::new("mathlib")));

        let child = Scope::child_of(&root, None);
        assert!(child.borrow().find_import("mathlib").is_some());
        assert!(child.borrow().find_import("strlib").is_none());
    }
}
