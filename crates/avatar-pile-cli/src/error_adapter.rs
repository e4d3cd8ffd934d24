//! Error adapter for converting PileError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Parameter errors
//! carry the rejected text, which is shown as the snippet with the
//! user-facing message as help.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use avatar_pile::{PileError, params::ParamError};

/// Adapter implementing [`MietteDiagnostic`] for a [`PileError`].
pub struct ErrorAdapter<'a>(pub &'a PileError);

impl ErrorAdapter<'_> {
    fn param_error(&self) -> Option<&ParamError> {
        match self.0 {
            PileError::Params(err) => Some(err),
            _ => None,
        }
    }

    /// The text the user typed that caused the error, if any.
    fn rejected_input(&self) -> Option<&String> {
        match self.param_error()? {
            ParamError::InvalidNumericInput { value, .. }
            | ParamError::OutOfRangeInput { value, .. }
            | ParamError::UnknownShape(value)
            | ParamError::InvalidBoolean(value)
            | ParamError::UnknownParameter(value) => Some(value),
            ParamError::MissingParameter(_) => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PileError::Io(_) => "avatar_pile::io",
            PileError::Params(_) => "avatar_pile::params",
            PileError::Style(_) => "avatar_pile::style",
            PileError::Export(_) => "avatar_pile::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.param_error()
            .map(|err| Box::new(err.user_message()) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.rejected_input()
            .map(|input| input as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let input = self.rejected_input()?;
        let message = self.param_error()?.key().map(|key| format!("value for `{key}`"));
        let span = SourceSpan::new(0.into(), input.len());

        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(message, span),
        )))
    }
}
