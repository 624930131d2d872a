//! Print and Cut Job File to SVG Converter
//!
//! Converts the plain-text job files written by wide-format print-and-cut
//! drivers into SVG. Outline blocks become stroked paths, registration mark
//! blocks become rectangles, and the canvas is framed on the bounding box of
//! everything drawn. Coordinates are scaled from inches to millimeters by
//! default.
//!
//! ```no_run
//! use printcut_svg::{convert, ConvertOptions};
//!
//! let saved = convert("job.cut", "job.svg", &ConvertOptions::default())?;
//! println!("SVG saved: {}", saved.display());
//! # Ok::<(), printcut_svg::ConvertError>(())
//! ```

pub mod bbox;
pub mod directive;
pub mod error;
pub mod extract;
pub mod options;
pub mod parser;
pub mod svg_writer;
pub mod types;
pub mod units;

#[cfg(feature = "python")]
mod python;

pub use error::{ConvertError, ConvertResult};
pub use options::ConvertOptions;
pub use parser::{parse_job, split_lines, JobParser, ParseOutput};

use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Convert a job file to an SVG file.
///
/// The whole input is parsed before anything is written, so a failed run
/// never leaves a partial output file behind.
///
/// Returns the absolute path of the written SVG.
pub fn convert(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> ConvertResult<PathBuf> {
    let input = input_path.as_ref();
    let output = output_path.as_ref();
    options.validate()?;

    let parsed = read_job_file(input, options)?;

    let svg = svg_writer::build_writer(&parsed, options);
    svg.save(output)?;

    let resolved = std::fs::canonicalize(output)?;
    info!(
        "{} -> {}: {} paths, {} registration marks, bounds {:?}",
        input.display(),
        resolved.display(),
        parsed.geometry.paths.len(),
        parsed.geometry.rects.len(),
        parsed.bounds.canvas()
    );
    Ok(resolved)
}

/// Convert job file text to an SVG string
pub fn convert_str(text: &str, options: &ConvertOptions) -> ConvertResult<String> {
    options.validate()?;
    let parsed = parse_job(text, options);
    Ok(svg_writer::render_svg(&parsed, options))
}

/// Suggested output location: the input path with an `.svg` extension
pub fn default_output_path(input_path: impl AsRef<Path>) -> PathBuf {
    input_path.as_ref().with_extension("svg")
}

/// Read pass over a job file, one line at a time.
///
/// `\n`, `\r\n` and bare `\r` all end a line. Undecodable bytes are dropped
/// rather than failing the run.
fn read_job_file(input: &Path, options: &ConvertOptions) -> ConvertResult<ParseOutput> {
    let file = match File::open(input) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConvertError::InputNotFound(input.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = BufReader::new(file);
    let mut parser = JobParser::new(options);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // a `\r\n` pair stays inside one buffer, so no terminator is split
        for line in split_lines(&decode_line(&buf)) {
            parser.process_line(line);
        }
    }

    Ok(parser.finish())
}

/// UTF-8 decode, skipping invalid sequences
fn decode_line(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_drops_invalid_bytes() {
        assert_eq!(decode_line(b"SEG\xffMENT (1 2)\xc3"), "SEGMENT (1 2)");
        assert_eq!(decode_line("QOLOR=Schnitt\u{e4}:x".as_bytes()), "QOLOR=Schnitt\u{e4}:x");
    }

    #[test]
    fn default_output_replaces_extension() {
        assert_eq!(default_output_path("jobs/a.cut"), PathBuf::from("jobs/a.svg"));
        assert_eq!(default_output_path("jobs/b"), PathBuf::from("jobs/b.svg"));
    }

    #[test]
    fn convert_str_validates_options() {
        let options = ConvertOptions::default().with_scale(0.0);
        assert!(matches!(
            convert_str("", &options),
            Err(ConvertError::InvalidOption { .. })
        ));
    }
}
