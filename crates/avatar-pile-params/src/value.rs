//! Parsing of individual parameter values.
//!
//! Numbers may be surrounded by whitespace. Depths additionally accept a
//! unit suffix: `40%` is a percentage of the shape size and `40px` an
//! absolute cut depth.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

use winnow::{
    Parser as _,
    ascii::{dec_uint, float, multispace0},
    combinator::{alt, delimited, opt, preceded},
    error::ModalResult,
};

use avatar_pile_core::layout::{Depth, DepthConvention};

use crate::{error::ParamError, key::ParameterKey};

type Input<'a> = &'a str;

/// The unit written after a depth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthUnit {
    /// `40%`
    Percent,
    /// `40px`
    Pixels,
    /// `40`, interpreted with the configured default convention
    Unitless,
}

/// A depth as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthValue {
    value: f32,
    unit: DepthUnit,
}

impl DepthValue {
    pub fn new(value: f32, unit: DepthUnit) -> Self {
        Self { value, unit }
    }

    pub fn value(self) -> f32 {
        self.value
    }

    pub fn unit(self) -> DepthUnit {
        self.unit
    }

    /// Converts to an engine depth. An explicit unit always wins over
    /// `default_convention`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use avatar_pile_core::layout::{Depth, DepthConvention};
    /// # use avatar_pile_params::value::{DepthUnit, DepthValue};
    /// let typed = DepthValue::new(12.0, DepthUnit::Pixels);
    /// assert_eq!(typed.to_depth(DepthConvention::Percentage), Depth::pixels(12.0));
    ///
    /// let bare = DepthValue::new(40.0, DepthUnit::Unitless);
    /// assert_eq!(bare.to_depth(DepthConvention::Percentage), Depth::percent(40.0));
    /// ```
    pub fn to_depth(self, default_convention: DepthConvention) -> Depth {
        let convention = match self.unit {
            DepthUnit::Percent => DepthConvention::Percentage,
            DepthUnit::Pixels => DepthConvention::Pixels,
            DepthUnit::Unitless => default_convention,
        };
        Depth::new(self.value, convention)
    }
}

/// A depth in a configuration file: a bare number or a string such as `"40%"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigDepth {
    Number(f32),
    Text(String),
}

impl<'de> Deserialize<'de> for DepthValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (input, typed) = match ConfigDepth::deserialize(deserializer)? {
            ConfigDepth::Number(value) if !value.is_finite() => {
                return Err(de::Error::custom(ParamError::not_a_number(
                    ParameterKey::Depth,
                    &value.to_string(),
                )));
            }
            ConfigDepth::Number(value) => (
                value.to_string(),
                DepthValue::new(value, DepthUnit::Unitless),
            ),
            ConfigDepth::Text(text) => {
                let typed = parse_depth(&text).map_err(de::Error::custom)?;
                (text, typed)
            }
        };
        validate_number(ParameterKey::Depth, &input, typed.value).map_err(de::Error::custom)?;
        Ok(typed)
    }
}

impl fmt::Display for DepthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            DepthUnit::Percent => write!(f, "{}%", self.value),
            DepthUnit::Pixels => write!(f, "{}px", self.value),
            DepthUnit::Unitless => write!(f, "{}", self.value),
        }
    }
}

fn number(input: &mut Input<'_>) -> ModalResult<f32> {
    delimited(multispace0, float, multispace0).parse_next(input)
}

fn depth_unit(input: &mut Input<'_>) -> ModalResult<DepthUnit> {
    opt(alt((
        "%".value(DepthUnit::Percent),
        "px".value(DepthUnit::Pixels),
    )))
    .map(|unit| unit.unwrap_or(DepthUnit::Unitless))
    .parse_next(input)
}

fn count(input: &mut Input<'_>) -> ModalResult<usize> {
    delimited(multispace0, dec_uint, multispace0).parse_next(input)
}

fn depth(input: &mut Input<'_>) -> ModalResult<DepthValue> {
    delimited(
        multispace0,
        (float, preceded(multispace0, depth_unit)),
        multispace0,
    )
    .map(|(value, unit)| DepthValue::new(value, unit))
    .parse_next(input)
}

/// Parses a finite number for `key`.
///
/// Only the syntax is checked here; see [`validate_number`] for ranges.
pub fn parse_number(key: ParameterKey, input: &str) -> Result<f32, ParamError> {
    match number.parse(input) {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParamError::not_a_number(key, input)),
    }
}

/// Parses a depth with an optional `%` or `px` suffix.
pub fn parse_depth(input: &str) -> Result<DepthValue, ParamError> {
    match depth.parse(input) {
        Ok(value) if value.value.is_finite() => Ok(value),
        _ => Err(ParamError::not_a_number(ParameterKey::Depth, input)),
    }
}

/// Parses `true` or `false`, ignoring case and surrounding whitespace.
pub fn parse_bool(input: &str) -> Result<bool, ParamError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParamError::InvalidBoolean(input.to_string()))
    }
}

/// Checks that a parsed number is in range for `key`.
///
/// `size` and `instances` must be positive, `gap` and `depth` must not be
/// negative. The only upper bound is the one [`parse_instances`] applies.
pub fn validate_number(key: ParameterKey, input: &str, value: f32) -> Result<f32, ParamError> {
    match key {
        ParameterKey::Size | ParameterKey::Instances if value <= 0.0 => Err(
            ParamError::out_of_range(key, input, "Must be larger than 0"),
        ),
        ParameterKey::Gap | ParameterKey::Depth if value < 0.0 => Err(ParamError::out_of_range(
            key,
            input,
            "Must not be negative",
        )),
        _ => Ok(value),
    }
}

/// Largest number of avatars a pile may hold.
pub const MAX_INSTANCES: usize = 1000;

const TOO_MANY_INSTANCES: &str = "Must be at most 1000";

/// Parses and validates the number of avatars.
///
/// The count is read as an integer, so large values are never rounded.
/// Anything above [`MAX_INSTANCES`] is rejected.
///
/// # Examples
///
/// ```
/// # use avatar_pile_params::value::{parse_instances, MAX_INSTANCES};
/// assert_eq!(parse_instances(" 12 "), Ok(12));
/// assert_eq!(parse_instances("3.0"), Ok(3));
/// assert!(parse_instances("16777217").is_err());
/// assert!(parse_instances("1e12").is_err());
/// assert_eq!(parse_instances(&MAX_INSTANCES.to_string()), Ok(MAX_INSTANCES));
/// ```
pub fn parse_instances(input: &str) -> Result<usize, ParamError> {
    let key = ParameterKey::Instances;
    match count.parse(input) {
        Ok(0) => Err(ParamError::out_of_range(key, input, "Must be larger than 0")),
        Ok(value) if value > MAX_INSTANCES => {
            Err(ParamError::out_of_range(key, input, TOO_MANY_INSTANCES))
        }
        Ok(value) => Ok(value),
        // Not a plain digit string: `-1`, `2.5`, `3.0`, `1e12`, overflow.
        Err(_) => {
            let value = validate_number(key, input, parse_number(key, input)?)?;
            if value.fract() != 0.0 {
                Err(ParamError::not_whole(key, input))
            } else if value > MAX_INSTANCES as f32 {
                Err(ParamError::out_of_range(key, input, TOO_MANY_INSTANCES))
            } else {
                Ok(value as usize)
            }
        }
    }
}
