//! greyscale: convert an image to greyscale with the luminosity method.
//!
//! Reads a JPEG, PNG or GIF image, replaces every pixel's color with
//! `0.299*R + 0.587*G + 0.114*B` (alpha untouched), and writes the result
//! in the same format next to the input as `<base>_greyscale<ext>`.
//!
//! # Usage
//!
//! ```text
//! greyscale [OPTIONS] <INPUT>
//! ```
//!
//! Set `RUST_LOG=debug` for decoder and encoder diagnostics on stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod convert;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use greyscale_pipeline::TransformConfig;

use crate::convert::{ConvertOptions, convert_file};

/// Convert a JPEG, PNG or GIF image to greyscale.
///
/// The output keeps the input's format, dimensions and transparency.
#[derive(Parser)]
#[command(name = "greyscale", version)]
struct Cli {
    /// Path to the input image (JPEG, PNG, GIF).
    input: Option<PathBuf>,

    /// Write the result here instead of `<base>_greyscale<ext>`.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Transform on a single thread instead of splitting rows across cores.
    #[arg(long)]
    serial: bool,

    /// Print a JSON conversion report after the image is saved.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Cli::parse())
}

/// Exit status for a missing `<INPUT>` argument.
const USAGE_EXIT: u8 = 1;

/// Run one conversion and map the outcome to the process exit status.
fn run(cli: Cli) -> ExitCode {
    let Some(input) = cli.input else {
        println!("{}", Cli::command().render_usage());
        println!("Example: greyscale myimage.jpg");
        return ExitCode::from(USAGE_EXIT);
    };

    let options = ConvertOptions {
        output: cli.output,
        transform: TransformConfig {
            parallel: !cli.serial,
        },
    };

    let report = match convert_file(&input, &options) {
        Ok(report) => report,
        Err(e) => {
            log::debug!("conversion failed: {e:?}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing conversion report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
