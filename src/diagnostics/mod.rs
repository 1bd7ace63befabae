//! Collection and rendering of type check diagnostics.
//!
//! Diagnostics are gathered during checking in a sink that is shared by
//! reference across every scope of a run; severity is only decided when a
//! diagnostic is rendered.
mod source_file;

pub use self::source_file::*;

use std::{cell::RefCell, fmt::Write, rc::Rc};

use colored::Colorize;

use crate::ast::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A message attached to a source range.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn new(span: Span, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            span,
            message: message.into(),
        }
    }

    /// Render this diagnostic against the file it was reported for:
    /// a severity header, a `--> file:line:column` marker and the affected
    /// source excerpt.
    pub fn render(&self, severity: Severity, file: &SourceFile) -> String {
        let mut output = String::new();

        let header = match severity {
            Severity::Error => "Error".red().bold(),
            Severity::Warning => "Warning".yellow().bold(),
        };
        let _ = write!(output, "{header}: {}\n", self.message);

        let (line, column) = self.span.start;
        let location = format!("{}:{line}:{column}", file.name());
        let _ = write!(output, "{}{}\n", "  --> ".cyan(), location.blue());

        output.push_str(&file.excerpt(&self.span));
        output
    }
}

/// The error and warning sinks of one check run.
#[derive(Default, Debug)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

/// Shared handle to the sinks. Every scope derived from one root holds a
/// clone of the same handle, so deferred writes from nested scopes are
/// visible at the top.
pub type DiagnosticSink = Rc<RefCell<Diagnostics>>;
