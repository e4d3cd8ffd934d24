//! Turning raw parameters into a validated [`LayoutConfig`].

use log::{debug, info};
use serde::Deserialize;

use avatar_pile_core::{
    layout::{Depth, DepthConvention, LayoutConfig},
    shape::ShapeKind,
};

use crate::{
    error::ParamError,
    key::ParameterKey,
    value::{DepthValue, parse_bool, parse_depth, parse_instances, parse_number, validate_number},
};

/// Depth used when neither the user nor the configuration supplies one, as a
/// percentage of the shape size.
pub const DEFAULT_DEPTH_PERCENT: f32 = 40.0;

/// Values used for optional parameters that were not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Configured depth, if any. Without a unit it follows `depth_convention`.
    depth: Option<DepthValue>,

    /// How a depth without a unit suffix is interpreted.
    depth_convention: DepthConvention,

    /// Whether the last avatar is left uncut.
    use_full_end_cap: bool,
}

impl Defaults {
    pub fn new(depth_convention: DepthConvention, use_full_end_cap: bool) -> Self {
        Self {
            depth: None,
            depth_convention,
            use_full_end_cap,
        }
    }

    /// Sets the configured depth (builder style).
    pub fn with_depth(mut self, depth: DepthValue) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Depth used when none is given.
    ///
    /// Only a configured depth is read with [`Defaults::depth_convention`];
    /// the built-in fallback is always [`DEFAULT_DEPTH_PERCENT`] percent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use avatar_pile_core::layout::{Depth, DepthConvention};
    /// # use avatar_pile_params::{Defaults, value::{DepthUnit, DepthValue}};
    /// let legacy = Defaults::new(DepthConvention::FractionOrPixels, true);
    /// assert_eq!(legacy.depth(), Depth::percent(40.0));
    ///
    /// let configured = legacy.with_depth(DepthValue::new(0.3, DepthUnit::Unitless));
    /// assert_eq!(configured.depth(), Depth::new(0.3, DepthConvention::FractionOrPixels));
    /// ```
    pub fn depth(&self) -> Depth {
        self.depth.map_or(Depth::percent(DEFAULT_DEPTH_PERCENT), |depth| {
            depth.to_depth(self.depth_convention)
        })
    }

    pub fn depth_convention(&self) -> DepthConvention {
        self.depth_convention
    }

    pub fn use_full_end_cap(&self) -> bool {
        self.use_full_end_cap
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new(DepthConvention::Percentage, true)
    }
}

/// Parameters exactly as typed, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    shape: Option<String>,
    size: Option<String>,
    gap: Option<String>,
    instances: Option<String>,
    depth: Option<String>,
    use_full_end_cap: Option<String>,
}

impl RawParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value` (builder style).
    pub fn with(mut self, key: ParameterKey, value: impl Into<String>) -> Self {
        self.set(key, Some(value.into()));
        self
    }

    /// Sets or clears the value of `key`.
    pub fn set(&mut self, key: ParameterKey, value: Option<String>) {
        *self.slot_mut(key) = value;
    }

    /// Sets a parameter by name.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::UnknownParameter`] if `name` is not a parameter.
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), ParamError> {
        let key = name.parse::<ParameterKey>().map_err(ParamError::UnknownParameter)?;
        self.set(key, Some(value.into()));
        Ok(())
    }

    pub fn get(&self, key: ParameterKey) -> Option<&str> {
        match key {
            ParameterKey::Shape => self.shape.as_deref(),
            ParameterKey::Size => self.size.as_deref(),
            ParameterKey::Gap => self.gap.as_deref(),
            ParameterKey::Instances => self.instances.as_deref(),
            ParameterKey::Depth => self.depth.as_deref(),
            ParameterKey::UseFullEndCap => self.use_full_end_cap.as_deref(),
        }
    }

    /// Returns true if no parameter was supplied at all.
    pub fn is_empty(&self) -> bool {
        ParameterKey::ALL.into_iter().all(|key| self.get(key).is_none())
    }

    fn slot_mut(&mut self, key: ParameterKey) -> &mut Option<String> {
        match key {
            ParameterKey::Shape => &mut self.shape,
            ParameterKey::Size => &mut self.size,
            ParameterKey::Gap => &mut self.gap,
            ParameterKey::Instances => &mut self.instances,
            ParameterKey::Depth => &mut self.depth,
            ParameterKey::UseFullEndCap => &mut self.use_full_end_cap,
        }
    }

    fn required(&self, key: ParameterKey) -> Result<&str, ParamError> {
        self.get(key).ok_or(ParamError::MissingParameter(key))
    }
}

fn parse_shape(input: &str) -> Result<ShapeKind, ParamError> {
    input
        .parse::<ShapeKind>()
        .map_err(|_| ParamError::UnknownShape(input.to_string()))
}

fn parse_checked(key: ParameterKey, input: &str) -> Result<f32, ParamError> {
    let value = parse_number(key, input)?;
    validate_number(key, input, value)
}

/// Validates `raw` and fills in `defaults` for what is missing.
///
/// Returns `Ok(None)` when no parameter was supplied at all: there is
/// nothing to lay out, which is not an error.
///
/// # Errors
///
/// Returns a [`ParamError`] for the first parameter that is missing,
/// unparsable, or out of range.
///
/// # Examples
///
/// ```
/// # use avatar_pile_core::layout::Depth;
/// # use avatar_pile_params::{resolve, Defaults, ParameterKey, RawParameters};
/// let raw = RawParameters::new()
///     .with(ParameterKey::Shape, "circle")
///     .with(ParameterKey::Size, "64")
///     .with(ParameterKey::Gap, "8")
///     .with(ParameterKey::Instances, "3");
///
/// let config = resolve(&raw, &Defaults::default()).unwrap().unwrap();
/// assert_eq!(config.depth(), Depth::percent(40.0));
/// assert!(config.use_full_end_cap());
///
/// assert_eq!(resolve(&RawParameters::new(), &Defaults::default()), Ok(None));
/// ```
pub fn resolve(raw: &RawParameters, defaults: &Defaults) -> Result<Option<LayoutConfig>, ParamError> {
    if raw.is_empty() {
        info!("No parameters supplied, nothing to lay out");
        return Ok(None);
    }

    let shape_kind = parse_shape(raw.required(ParameterKey::Shape)?)?;
    let size = parse_checked(ParameterKey::Size, raw.required(ParameterKey::Size)?)?;
    let gap = parse_checked(ParameterKey::Gap, raw.required(ParameterKey::Gap)?)?;
    let instances = parse_instances(raw.required(ParameterKey::Instances)?)?;

    let depth = match raw.get(ParameterKey::Depth) {
        Some(input) => {
            let typed = parse_depth(input)?;
            validate_number(ParameterKey::Depth, input, typed.value())?;
            typed.to_depth(defaults.depth_convention())
        }
        None => defaults.depth(),
    };

    let use_full_end_cap = raw
        .get(ParameterKey::UseFullEndCap)
        .map(parse_bool)
        .transpose()?
        .unwrap_or(defaults.use_full_end_cap());

    debug!(
        shape = shape_kind.name(),
        size = size,
        gap = gap,
        instances = instances,
        depth:? = depth,
        use_full_end_cap = use_full_end_cap;
        "Parameters resolved"
    );

    Ok(Some(LayoutConfig::new(
        shape_kind,
        size,
        gap,
        instances,
        depth,
        use_full_end_cap,
    )))
}

#[cfg(test)]
mod tests {
    use crate::value::DepthUnit;

    use super::*;

    fn complete() -> RawParameters {
        RawParameters::new()
            .with(ParameterKey::Shape, "squircle")
            .with(ParameterKey::Size, "40")
            .with(ParameterKey::Gap, "4")
            .with(ParameterKey::Instances, "2")
    }

    #[test]
    fn test_empty_parameters_are_a_no_op() {
        assert_eq!(resolve(&RawParameters::new(), &Defaults::default()), Ok(None));
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = resolve(&complete(), &Defaults::default())
            .unwrap()
            .unwrap();

        assert_eq!(config.shape_kind(), ShapeKind::Squircle);
        assert_eq!(config.size(), 40.0);
        assert_eq!(config.gap(), 4.0);
        assert_eq!(config.instances(), 2);
        assert_eq!(config.depth(), Depth::percent(DEFAULT_DEPTH_PERCENT));
        assert!(config.use_full_end_cap());
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = Defaults::new(DepthConvention::FractionOrPixels, false)
            .with_depth(DepthValue::new(0.25, DepthUnit::Unitless));
        let config = resolve(&complete(), &defaults).unwrap().unwrap();

        assert_eq!(
            config.depth(),
            Depth::new(0.25, DepthConvention::FractionOrPixels)
        );
        assert!(!config.use_full_end_cap());
    }

    #[test]
    fn test_builtin_depth_ignores_configured_convention() {
        let raw = RawParameters::new()
            .with(ParameterKey::Shape, "circle")
            .with(ParameterKey::Size, "64")
            .with(ParameterKey::Gap, "8")
            .with(ParameterKey::Instances, "3");

        for convention in [
            DepthConvention::Percentage,
            DepthConvention::Pixels,
            DepthConvention::FractionOrPixels,
        ] {
            let config = resolve(&raw, &Defaults::new(convention, true))
                .unwrap()
                .unwrap();
            let cut_depth = config.depth().cut_depth(config.size());
            assert!(
                (cut_depth - 64.0 * 0.4).abs() < 0.001,
                "{convention}: cut depth {cut_depth}"
            );
        }
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let raw = complete()
            .with(ParameterKey::Depth, "12px")
            .with(ParameterKey::UseFullEndCap, "false");
        let config = resolve(&raw, &Defaults::default()).unwrap().unwrap();

        assert_eq!(config.depth(), Depth::pixels(12.0));
        assert!(!config.use_full_end_cap());
    }

    #[test]
    fn test_unitless_depth_uses_default_convention() {
        let raw = complete().with(ParameterKey::Depth, "40");
        let defaults = Defaults::new(DepthConvention::FractionOrPixels, true);
        let config = resolve(&raw, &defaults).unwrap().unwrap();

        assert_eq!(
            config.depth(),
            Depth::new(40.0, DepthConvention::FractionOrPixels)
        );
    }

    #[test]
    fn test_missing_required_parameter() {
        let mut raw = complete();
        raw.set(ParameterKey::Gap, None);

        assert_eq!(
            resolve(&raw, &Defaults::default()),
            Err(ParamError::MissingParameter(ParameterKey::Gap))
        );
    }

    #[test]
    fn test_only_optional_parameters_still_require_shape() {
        let raw = RawParameters::new().with(ParameterKey::Depth, "30%");
        assert_eq!(
            resolve(&raw, &Defaults::default()),
            Err(ParamError::MissingParameter(ParameterKey::Shape))
        );
    }

    #[test]
    fn test_invalid_values() {
        let raw = complete().with(ParameterKey::Shape, "hexagon");
        assert_eq!(
            resolve(&raw, &Defaults::default()),
            Err(ParamError::UnknownShape("hexagon".to_string()))
        );

        let raw = complete().with(ParameterKey::Size, "0");
        assert!(matches!(
            resolve(&raw, &Defaults::default()),
            Err(ParamError::OutOfRangeInput {
                key: ParameterKey::Size,
                ..
            })
        ));

        let raw = complete().with(ParameterKey::Depth, "-5%");
        assert!(matches!(
            resolve(&raw, &Defaults::default()),
            Err(ParamError::OutOfRangeInput {
                key: ParameterKey::Depth,
                ..
            })
        ));

        let raw = complete().with(ParameterKey::UseFullEndCap, "maybe");
        assert_eq!(
            resolve(&raw, &Defaults::default()),
            Err(ParamError::InvalidBoolean("maybe".to_string()))
        );
    }

    #[test]
    fn test_zero_gap_is_allowed() {
        let raw = complete().with(ParameterKey::Gap, "0");
        let config = resolve(&raw, &Defaults::default()).unwrap().unwrap();
        assert_eq!(config.gap(), 0.0);
    }

    #[test]
    fn test_set_by_name() {
        let mut raw = RawParameters::new();
        raw.set_by_name("useFullEndCap", "true").unwrap();
        assert_eq!(raw.get(ParameterKey::UseFullEndCap), Some("true"));
        assert!(!raw.is_empty());

        assert_eq!(
            raw.set_by_name("color", "red"),
            Err(ParamError::UnknownParameter("color".to_string()))
        );
    }
}
