//! CLI logic for the avatar pile renderer.
//!
//! This module contains the core CLI logic: printing completion suggestions,
//! or resolving the pile parameters and writing the rendered SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use avatar_pile::{
    ParameterKey, PileBuilder, PileError,
    params::{ParamError, suggest},
};

/// Run the avatar pile CLI application
///
/// With `--suggest` the suggestions are printed, one per line. Otherwise the
/// layout parameters are resolved and the rendered SVG is written to the
/// output file. When no layout parameter is given there is nothing to draw
/// and the run succeeds without writing anything.
///
/// # Errors
///
/// Returns `PileError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid parameters
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PileError> {
    if let Some(key) = &args.suggest {
        for line in suggestion_lines(key, &args.query)? {
            println!("{line}");
        }
        return Ok(());
    }

    info!(output_path = args.output; "Processing avatar pile");

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = PileBuilder::new(app_config);

    let Some(layout_config) = builder.resolve(&args.raw_parameters())? else {
        info!("No layout parameters given, nothing to render");
        return Ok(());
    };

    let row = builder.build_row(&layout_config);
    let svg = builder.render_svg(&row)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Returns the lines printed for `--suggest <key> --query <query>`.
///
/// An unusable query yields its error message as the single line.
///
/// # Errors
///
/// Returns [`PileError::Params`] if `key` is not a parameter name.
pub fn suggestion_lines(key: &str, query: &str) -> Result<Vec<String>, PileError> {
    let key = key
        .parse::<ParameterKey>()
        .map_err(ParamError::UnknownParameter)?;
    info!(key = key.name(), query = query; "Computing suggestions");

    Ok(match suggest::suggestions_for(key, query) {
        suggest::Suggestions::Values(values) => values,
        suggest::Suggestions::Error(message) => vec![message],
    })
}
