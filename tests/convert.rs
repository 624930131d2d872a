use printcut_svg::types::PathCommand;
use printcut_svg::{convert, convert_str, parse_job, ConvertError, ConvertOptions};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn viewbox(svg: &str) -> Vec<f64> {
    let start = svg.find("viewBox=\"").expect("viewBox attribute") + "viewBox=\"".len();
    let end = start + svg[start..].find('"').expect("closing quote");
    svg[start..end]
        .split_whitespace()
        .map(|n| n.parse().expect("numeric viewBox"))
        .collect()
}

#[test]
fn converts_sample_job_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("sample.svg");

    let saved = convert(fixture("sample.cut"), &output, &ConvertOptions::default()).unwrap();
    assert!(saved.is_absolute());
    assert_eq!(saved, fs::canonicalize(&output).unwrap());

    let svg = fs::read_to_string(&output).unwrap();
    assert_eq!(svg.matches("<path").count(), 2, "{svg}");
    assert_eq!(svg.matches("<rect").count(), 2, "{svg}");
    assert_eq!(svg.matches(r#"stroke="red""#).count(), 1);
    assert_eq!(svg.matches(r#"stroke="black""#).count(), 1);
    assert_eq!(svg.matches(r#"stroke="blue""#).count(), 2);

    assert!(svg.contains(
        "M 25.400000,25.400000 L 228.600000,25.400000 M 228.600000,25.400000 L 228.600000,177.800000"
    ));
    assert!(svg.contains("L 25.400000,25.400000 Z"));
    assert!(svg.contains(
        "M 50.800000,50.800000 C 63.500000,76.200000 88.900000,76.200000 101.600000,50.800000 \
         M 101.600000,50.800000 L 50.800000,50.800000\""
    ));

    let vb = viewbox(&svg);
    assert_eq!(vb.len(), 4);
    assert!(vb[0].abs() < 1e-9 && vb[1].abs() < 1e-9);
    assert!((vb[2] - 254.0).abs() < 1e-6, "{vb:?}");
    assert!((vb[3] - 203.2).abs() < 1e-6, "{vb:?}");
}

#[test]
fn sample_geometry_records() {
    let text = fs::read_to_string(fixture("sample.cut")).unwrap();
    let parsed = parse_job(&text, &ConvertOptions::default());

    let paths = &parsed.geometry.paths;
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].color, "PDFTrimBox");
    assert_eq!(paths[0].commands.last(), Some(&PathCommand::Close));
    assert_eq!(paths[1].color, "CutContour");
    assert!(!paths[1].is_closed());

    let rects = &parsed.geometry.rects;
    assert_eq!(rects.len(), 2);
    assert!(rects.iter().all(|r| r.color == "Regmark"));
    assert!((rects[1].x - 247.65).abs() < 1e-9);
    assert!((rects[1].y - 196.85).abs() < 1e-9);

    let bounds = parsed.bounds;
    assert!(bounds.min_x <= bounds.max_x && bounds.min_y <= bounds.max_y);
}

#[test]
fn missing_input_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.svg");
    let err = convert(dir.path().join("nope.cut"), &output, &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, ConvertError::InputNotFound(_)), "{err:?}");
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_processing_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no_such_dir").join("out.svg");
    let err = convert(fixture("sample.cut"), &output, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Processing(_)), "{err:?}");
}

#[test]
fn invalid_options_fail_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.svg");
    let options = ConvertOptions::default().with_scale(-25.4);
    let err = convert(fixture("sample.cut"), &output, &options).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidOption { name: "scale", .. }));
    assert!(!output.exists());
}

#[test]
fn empty_input_gives_unit_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.cut");
    let output = dir.path().join("empty.svg");
    fs::write(&input, "Print and Cut Job File v1.0\n\nUNKNOWN=1\n").unwrap();

    convert(&input, &output, &ConvertOptions::default()).unwrap();
    let svg = fs::read_to_string(&output).unwrap();
    assert_eq!(viewbox(&svg), vec![0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn invalid_utf8_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.cut");
    let output = dir.path().join("latin1.svg");
    fs::write(
        &input,
        b"QOLOR=Schnittkontur \xe4:x\r\nOUTLINE\r\nSEGMENT (0 0) (1 1)\r\nEND OUTLINE\r\n",
    )
    .unwrap();

    convert(&input, &output, &ConvertOptions::default()).unwrap();
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("M 0.000000,0.000000 L 25.400000,25.400000"));
}

#[test]
fn carriage_return_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("mac.cut");
    let output = dir.path().join("mac.svg");
    let text = "QOLOR=Cut:x\rOUTLINE\rSEGMENT (0 0) (1 1)\rEND OUTLINE\r";
    fs::write(&input, text).unwrap();

    convert(&input, &output, &ConvertOptions::default()).unwrap();
    let svg = fs::read_to_string(&output).unwrap();
    assert_eq!(svg.matches("<path").count(), 1, "{svg}");
    assert!(svg.contains("M 0.000000,0.000000 L 25.400000,25.400000"));

    let parsed = parse_job(text, &ConvertOptions::default());
    assert_eq!(parsed.geometry.paths.len(), 1);
    let in_memory = convert_str(text, &ConvertOptions::default()).unwrap();
    assert_eq!(in_memory.matches("<path").count(), 1);
    assert_eq!(viewbox(&in_memory), viewbox(&svg));
}

#[test]
fn repeated_runs_are_identical() {
    let text = fs::read_to_string(fixture("sample.cut")).unwrap();
    let options = ConvertOptions::default();
    assert_eq!(parse_job(&text, &options), parse_job(&text, &options));

    let first = convert_str(&text, &options).unwrap();
    let second = convert_str(&text, &options).unwrap();
    assert_eq!(viewbox(&first), viewbox(&second));
}
