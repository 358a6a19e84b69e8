//! Wallplan CLI library
//!
//! This module contains the core CLI logic for the Wallplan hanging-plan tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;
use rand::{SeedableRng, rngs::StdRng};

use wallplan::{PlanBuilder, WallplanError};

/// Run the Wallplan CLI application
///
/// This function loads the plan file, or generates the random example when
/// no input is given, lays it out, renders it and writes the resulting SVG to
/// the output file. Nothing is written when any step fails.
///
/// # Errors
///
/// Returns `WallplanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Plan file errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), WallplanError> {
    info!(
        input_path:? = args.input,
        output_path = args.output;
        "Processing plan"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = PlanBuilder::new(app_config);

    let mut plan = match &args.input {
        Some(input) => {
            let source = fs::read_to_string(input)?;
            builder.parse(&source)?
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            builder.example(&mut rng)?
        }
    };

    builder.layout(&mut plan);
    let svg = builder.render_svg(&plan)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
