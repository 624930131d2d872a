//! printcut2svg - Convert Print and Cut Job Files to SVG
//!
//! Command line front end for the converter. Options come from the built-in
//! defaults, then an optional JSON config file, then explicit flags.

use clap::{ArgAction, Parser};
use printcut_svg::{convert, default_output_path, ConvertError, ConvertOptions};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a Print and Cut Job File (.cut/.txt) to SVG.
#[derive(Parser, Debug)]
#[command(name = "printcut2svg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Job file to convert
    input: PathBuf,

    /// Output SVG file (default: input with .svg extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with conversion options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scale factor applied to job coordinates (25.4 = inches to mm)
    #[arg(short, long)]
    scale: Option<f64>,

    /// Stroke color for outline paths
    #[arg(long)]
    path_color: Option<String>,

    /// Stroke color for registration marks
    #[arg(long)]
    rect_color: Option<String>,

    /// Stroke color for trim box geometry
    #[arg(long)]
    trim_color: Option<String>,

    /// Create one layer per color context
    #[arg(long, action = ArgAction::SetTrue)]
    layers: bool,

    /// Use debug logging level
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> Result<ConvertOptions, ConvertError> {
        let mut options = match &self.config {
            Some(path) => ConvertOptions::from_json_file(path)?,
            None => ConvertOptions::default(),
        };
        if let Some(scale) = self.scale {
            options.scale = scale;
        }
        if let Some(color) = &self.path_color {
            options.path_color = color.clone();
        }
        if let Some(color) = &self.rect_color {
            options.rect_color = color.clone();
        }
        if let Some(color) = &self.trim_color {
            options.trim_color = color.clone();
        }
        if self.layers {
            options.layers = true;
        }
        Ok(options)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let result = args
        .options()
        .and_then(|options| convert(&args.input, &output, &options));

    match result {
        Ok(saved) => {
            println!("SVG saved: {}", saved.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
