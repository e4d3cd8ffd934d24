//! Errors raised while collecting parameters.

use thiserror::Error;

use crate::key::ParameterKey;

/// A parameter value was rejected before reaching the layout engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("invalid value `{value}` for `{key}`: expected {expected}")]
    InvalidNumericInput {
        key: ParameterKey,
        value: String,
        expected: &'static str,
    },

    #[error("invalid value `{value}` for `{key}`: {reason}")]
    OutOfRangeInput {
        key: ParameterKey,
        value: String,
        reason: &'static str,
    },

    #[error("missing required parameter `{0}`")]
    MissingParameter(ParameterKey),

    #[error("unknown shape `{0}`")]
    UnknownShape(String),

    #[error("invalid value `{0}` for `useFullEndCap`")]
    InvalidBoolean(String),

    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
}

impl ParamError {
    pub(crate) fn not_a_number(key: ParameterKey, value: &str) -> Self {
        Self::InvalidNumericInput {
            key,
            value: value.to_string(),
            expected: if key == ParameterKey::Depth {
                "a numeric value or percentage"
            } else {
                "a numeric value"
            },
        }
    }

    pub(crate) fn not_whole(key: ParameterKey, value: &str) -> Self {
        Self::InvalidNumericInput {
            key,
            value: value.to_string(),
            expected: "a whole number",
        }
    }

    pub(crate) fn out_of_range(key: ParameterKey, value: &str, reason: &'static str) -> Self {
        Self::OutOfRangeInput {
            key,
            value: value.to_string(),
            reason,
        }
    }

    /// The short message shown next to the input that caused the error.
    pub fn user_message(&self) -> String {
        match self {
            ParamError::InvalidNumericInput {
                key: ParameterKey::Depth,
                ..
            } => "Please enter a valid numeric value or percentage".to_string(),
            ParamError::InvalidNumericInput { expected, .. } => format!("Please enter {expected}"),
            ParamError::OutOfRangeInput { reason, .. } => reason.to_string(),
            ParamError::MissingParameter(key) => format!("Please enter a value for {key}"),
            ParamError::UnknownShape(_) => "Please choose circle or squircle".to_string(),
            ParamError::InvalidBoolean(_) => "Please choose true or false".to_string(),
            ParamError::UnknownParameter(_) => "Unknown parameter".to_string(),
        }
    }

    /// The parameter the error refers to, when there is one.
    pub fn key(&self) -> Option<ParameterKey> {
        match self {
            ParamError::InvalidNumericInput { key, .. }
            | ParamError::OutOfRangeInput { key, .. }
            | ParamError::MissingParameter(key) => Some(*key),
            ParamError::UnknownShape(_) => Some(ParameterKey::Shape),
            ParamError::InvalidBoolean(_) => Some(ParameterKey::UseFullEndCap),
            ParamError::UnknownParameter(_) => None,
        }
    }
}
