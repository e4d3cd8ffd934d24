//! Names of the parameters a user supplies.

use std::{fmt, str::FromStr};

/// One of the user-facing avatar pile parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    Shape,
    Size,
    Gap,
    Instances,
    Depth,
    UseFullEndCap,
}

impl ParameterKey {
    /// All keys, in the order they are asked for.
    pub const ALL: [ParameterKey; 6] = [
        ParameterKey::Shape,
        ParameterKey::Size,
        ParameterKey::Gap,
        ParameterKey::Instances,
        ParameterKey::Depth,
        ParameterKey::UseFullEndCap,
    ];

    /// Returns the canonical parameter name.
    pub fn name(self) -> &'static str {
        match self {
            ParameterKey::Shape => "shape",
            ParameterKey::Size => "size",
            ParameterKey::Gap => "gap",
            ParameterKey::Instances => "instances",
            ParameterKey::Depth => "depth",
            ParameterKey::UseFullEndCap => "useFullEndCap",
        }
    }

    /// Returns true if a layout cannot be built without this parameter.
    pub fn is_required(self) -> bool {
        !matches!(self, ParameterKey::Depth | ParameterKey::UseFullEndCap)
    }
}

impl FromStr for ParameterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "shape" => Ok(Self::Shape),
            "size" => Ok(Self::Size),
            "gap" => Ok(Self::Gap),
            "instances" => Ok(Self::Instances),
            "depth" => Ok(Self::Depth),
            "useFullEndCap" | "use-full-end-cap" | "use_full_end_cap" => Ok(Self::UseFullEndCap),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
