//! Avatar Pile - overlapping avatar rows with gap cutouts.
//!
//! Validates pile parameters, lays out a row of avatars where each one is
//! partly covered by its right neighbour, and renders the result to SVG.

pub mod config;

mod error;
mod export;

pub use avatar_pile_core::{color, geometry, layout, shape};
pub use avatar_pile_params::{self as params, ParameterKey, RawParameters};

pub use error::PileError;

use log::{debug, info};

use config::AppConfig;
use export::Exporter;
use layout::{AvatarRow, LayoutConfig};

/// Builder for resolving, laying out and rendering avatar piles.
///
/// # Examples
///
/// ```rust
/// use avatar_pile::{PileBuilder, ParameterKey, RawParameters, config::AppConfig};
///
/// let raw = RawParameters::new()
///     .with(ParameterKey::Shape, "circle")
///     .with(ParameterKey::Size, "64")
///     .with(ParameterKey::Gap, "8")
///     .with(ParameterKey::Instances, "3");
///
/// let builder = PileBuilder::new(AppConfig::default());
/// let config = builder
///     .resolve(&raw)
///     .expect("Invalid parameters")
///     .expect("Parameters were supplied");
///
/// let row = builder.build_row(&config);
/// assert_eq!(row.len(), 3);
///
/// let svg = builder.render_svg(&row).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct PileBuilder {
    config: AppConfig,
}

impl PileBuilder {
    /// Create a new pile builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including defaults and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Validate raw parameters, filling in configured defaults.
    ///
    /// Returns `Ok(None)` when no parameter was supplied at all.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Params`] when a parameter is missing, unparsable,
    /// or out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avatar_pile::{PileBuilder, RawParameters};
    ///
    /// let builder = PileBuilder::default();
    /// assert!(builder.resolve(&RawParameters::new()).unwrap().is_none());
    /// ```
    pub fn resolve(&self, raw: &RawParameters) -> Result<Option<LayoutConfig>, PileError> {
        info!("Resolving pile parameters");
        let config = params::resolve(raw, self.config.defaults())?;
        Ok(config)
    }

    /// Lay out the row of avatars described by `config`.
    pub fn build_row(&self, config: &LayoutConfig) -> AvatarRow {
        info!(
            shape = config.shape_kind().name(),
            instances = config.instances();
            "Laying out avatar pile"
        );
        layout::build_row(config)
    }

    /// Render a laid-out row to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Style`] if a configured color is invalid, or
    /// [`PileError::Export`] if rendering fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avatar_pile::{
    ///     PileBuilder,
    ///     layout::{Depth, LayoutConfig},
    ///     shape::ShapeKind,
    /// };
    ///
    /// let builder = PileBuilder::default();
    /// let config = LayoutConfig::new(ShapeKind::Squircle, 40.0, 4.0, 5, Depth::percent(40.0), true);
    /// let svg = builder.render_svg(&builder.build_row(&config)).unwrap();
    /// assert!(svg.contains("avatar-cutout-0"));
    /// ```
    pub fn render_svg(&self, row: &AvatarRow) -> Result<String, PileError> {
        let style = self.config.style();
        style.fill_color().map_err(PileError::Style)?;
        style.background_color().map_err(PileError::Style)?;

        let mut svg_exporter = export::svg::SvgBuilder::new()
            .with_style(style)
            .build(Vec::new())?;
        svg_exporter.export_row(row)?;

        let svg_string = String::from_utf8(svg_exporter.into_inner())
            .map_err(|err| PileError::Export(Box::new(err)))?;
        debug!(bytes = svg_string.len(); "SVG buffer converted");

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::StyleConfig;

    fn raw() -> RawParameters {
        RawParameters::new()
            .with(ParameterKey::Shape, "circle")
            .with(ParameterKey::Size, "64")
            .with(ParameterKey::Gap, "8")
            .with(ParameterKey::Instances, "3")
    }

    #[test]
    fn test_full_pipeline() {
        let builder = PileBuilder::default();
        let config = builder.resolve(&raw()).unwrap().unwrap();
        let row = builder.build_row(&config);
        let svg = builder.render_svg(&row).unwrap();

        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<mask").count(), 2);
    }

    #[test]
    fn test_params_error_is_wrapped() {
        let builder = PileBuilder::default();
        let result = builder.resolve(&raw().with(ParameterKey::Size, "abc"));
        assert!(matches!(result, Err(PileError::Params(_))));
    }

    #[test]
    fn test_invalid_style_is_reported() {
        let style = StyleConfig::new(None, Some("chartreuse-ish".to_string()));
        let builder = PileBuilder::new(AppConfig::new(Default::default(), style));
        let config = builder.resolve(&raw()).unwrap().unwrap();
        let row = builder.build_row(&config);

        let err = builder.render_svg(&row).unwrap_err();
        assert!(matches!(err, PileError::Style(_)));
        assert!(err.to_string().contains("Invalid background color"));
    }
}
