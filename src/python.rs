//! Python bindings used by the desktop converter GUI

use crate::options::{DEFAULT_PATH_COLOR, DEFAULT_RECT_COLOR, DEFAULT_SCALE, DEFAULT_TRIM_COLOR};
use crate::ConvertOptions;
use pyo3::prelude::*;

fn build_options(
    scale: f64,
    path_color: &str,
    rect_color: &str,
    trim_color: &str,
    create_layers: bool,
) -> ConvertOptions {
    ConvertOptions::default()
        .with_scale(scale)
        .with_path_color(path_color)
        .with_rect_color(rect_color)
        .with_trim_color(trim_color)
        .with_layers(create_layers)
}

/// Convert a Print and Cut Job File to SVG
///
/// Args:
///     input_file: Path to input job file
///     output_file: Path to output SVG file
///     scale: Scale factor (default 25.4 for inches to mm)
///     path_color: Color for paths
///     rect_color: Color for registration rectangles
///     trim_color: Color for trim box elements
///     create_layers: Group elements into one layer per color context
///
/// Returns:
///     "SVG saved: <absolute output path>"
#[pyfunction]
#[pyo3(signature = (
    input_file,
    output_file,
    scale = DEFAULT_SCALE,
    path_color = DEFAULT_PATH_COLOR,
    rect_color = DEFAULT_RECT_COLOR,
    trim_color = DEFAULT_TRIM_COLOR,
    create_layers = false
))]
fn convert_jobfile_to_svg(
    input_file: &str,
    output_file: &str,
    scale: f64,
    path_color: &str,
    rect_color: &str,
    trim_color: &str,
    create_layers: bool,
) -> PyResult<String> {
    let options = build_options(scale, path_color, rect_color, trim_color, create_layers);
    let saved = crate::convert(input_file, output_file, &options)?;
    Ok(format!("SVG saved: {}", saved.display()))
}

/// Convert job file text to an SVG string
///
/// Takes the same keyword arguments as `convert_jobfile_to_svg`.
#[pyfunction]
#[pyo3(signature = (
    text,
    scale = DEFAULT_SCALE,
    path_color = DEFAULT_PATH_COLOR,
    rect_color = DEFAULT_RECT_COLOR,
    trim_color = DEFAULT_TRIM_COLOR,
    create_layers = false
))]
fn convert_jobfile_text_to_svg(
    text: &str,
    scale: f64,
    path_color: &str,
    rect_color: &str,
    trim_color: &str,
    create_layers: bool,
) -> PyResult<String> {
    let options = build_options(scale, path_color, rect_color, trim_color, create_layers);
    Ok(crate::convert_str(text, &options)?)
}

/// Python module definition
#[pymodule]
fn printcut_svg(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert_jobfile_to_svg, m)?)?;
    m.add_function(wrap_pyfunction!(convert_jobfile_text_to_svg, m)?)?;
    Ok(())
}
