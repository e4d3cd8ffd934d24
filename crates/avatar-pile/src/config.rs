//! Configuration types for avatar pile rendering.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so a configuration file only needs the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining defaults and style settings.
//! - [`Defaults`] - Values used for optional parameters that were not supplied.
//! - [`StyleConfig`] - Fill, background and padding of the rendered SVG.
//!
//! # Example
//!
//! ```
//! # use avatar_pile::{config::AppConfig, layout::Depth};
//! let config = AppConfig::default();
//! assert!(config.style().fill_color().is_ok());
//! assert_eq!(config.defaults().depth(), Depth::percent(40.0));
//! ```

use serde::Deserialize;

use avatar_pile_core::color::Color;

pub use avatar_pile_params::Defaults;

/// Placeholder fill used when no fill color is configured.
pub const DEFAULT_FILL_COLOR: &str = "#ff0000";

/// Space left around the pile in the rendered document.
pub const DEFAULT_PADDING: f32 = 16.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parameter defaults section.
    #[serde(default)]
    defaults: Defaults,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(defaults: Defaults, style: StyleConfig) -> Self {
        Self { defaults, style }
    }

    /// Returns the parameter defaults.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling of the rendered pile.
///
/// Avatars are drawn with a single placeholder fill; a real application
/// replaces it with pictures.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Fill of every avatar, as a color string.
    #[serde(default)]
    fill_color: Option<String>,

    /// Document background, as a color string. Transparent when unset.
    #[serde(default)]
    background_color: Option<String>,

    /// Space around the pile, in pixels.
    #[serde(default)]
    padding: Option<f32>,
}

impl StyleConfig {
    /// Creates a style with the given fill and background colors.
    pub fn new(fill_color: Option<String>, background_color: Option<String>) -> Self {
        Self {
            fill_color,
            background_color,
            padding: None,
        }
    }

    /// Sets the padding around the pile (builder style).
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Returns the parsed avatar fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn fill_color(&self) -> Result<Color, String> {
        let color = self.fill_color.as_deref().unwrap_or(DEFAULT_FILL_COLOR);
        Color::new(color).map_err(|err| format!("Invalid fill color in config: {err}"))
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the padding around the pile, never negative.
    pub fn padding(&self) -> f32 {
        self.padding.unwrap_or(DEFAULT_PADDING).max(0.0)
    }
}
