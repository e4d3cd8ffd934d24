//! Command-line argument definitions for the avatar pile CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Layout parameters are taken as plain text and validated
//! by the parameter layer, so malformed values get the same messages as any
//! other front end.

use clap::Parser;

use avatar_pile::{ParameterKey, RawParameters};

/// Command-line arguments for the avatar pile renderer
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Avatar shape (circle or squircle)
    #[arg(long)]
    pub shape: Option<String>,

    /// Avatar size in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Gap between neighbouring avatars in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub gap: Option<String>,

    /// Number of avatars in the pile
    #[arg(long, allow_hyphen_values = true)]
    pub instances: Option<String>,

    /// Overlap depth, e.g. `40%` or `12px`
    #[arg(long, allow_hyphen_values = true)]
    pub depth: Option<String>,

    /// Leave the last avatar uncut (true or false)
    #[arg(long)]
    pub full_end_cap: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "avatar-pile.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print completion suggestions for the named parameter and exit
    #[arg(long, value_name = "KEY")]
    pub suggest: Option<String>,

    /// Partially typed value to complete with `--suggest`
    #[arg(
        long,
        value_name = "TEXT",
        default_value = "",
        requires = "suggest",
        allow_hyphen_values = true
    )]
    pub query: String,
}

impl Args {
    /// Collects the layout parameters given on the command line.
    pub fn raw_parameters(&self) -> RawParameters {
        let mut raw = RawParameters::new();
        raw.set(ParameterKey::Shape, self.shape.clone());
        raw.set(ParameterKey::Size, self.size.clone());
        raw.set(ParameterKey::Gap, self.gap.clone());
        raw.set(ParameterKey::Instances, self.instances.clone());
        raw.set(ParameterKey::Depth, self.depth.clone());
        raw.set(ParameterKey::UseFullEndCap, self.full_end_cap.clone());
        raw
    }
}
