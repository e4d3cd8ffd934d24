//! Error types for avatar pile operations.

use std::io;

use thiserror::Error;

use avatar_pile_params::ParamError;

/// The main error type for avatar pile operations.
#[derive(Debug, Error)]
pub enum PileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Params(#[from] ParamError),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for PileError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
