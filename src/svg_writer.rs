//! SVG writer for generating SVG output
//!
//! Draws parsed job geometry as unfilled, stroked outlines on a canvas sized
//! in millimeters whose viewBox is the bounding box of everything drawn.

use crate::bbox::BoundingBox;
use crate::error::ConvertResult;
use crate::options::ConvertOptions;
use crate::parser::ParseOutput;
use crate::types::{PathRecord, RectRecord};
use svg::node::element::{Element, Group, Path, Rectangle};
use svg::Document;

/// Color contexts starting with this name (any case) are drawn in the trim color
pub const TRIM_MARKER: &str = "pdftrimbox";

pub const PATH_STROKE_WIDTH: f64 = 0.2;
pub const RECT_STROKE_WIDTH: f64 = 0.1;

const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";

pub fn is_trim_color(color: &str) -> bool {
    color.to_lowercase().starts_with(TRIM_MARKER)
}

/// SVG writer for building SVG documents
pub struct SvgWriter<'a> {
    options: &'a ConvertOptions,
    viewbox: (f64, f64, f64, f64),
    /// Elements tagged with the color context they came from
    elements: Vec<(String, Element)>,
}

impl<'a> SvgWriter<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            viewbox: BoundingBox::EMPTY.canvas(),
            elements: Vec::new(),
        }
    }

    /// Frame the canvas on `bounds`, falling back to a unit canvas
    pub fn set_viewbox(&mut self, bounds: &BoundingBox) {
        self.viewbox = bounds.canvas();
    }

    fn stroke_for<'c>(&'c self, source_color: &str, normal: &'c str) -> &'c str {
        if is_trim_color(source_color) {
            &self.options.trim_color
        } else {
            normal
        }
    }

    /// Add an outline path to the SVG
    pub fn add_path(&mut self, record: &PathRecord) {
        let stroke = self.stroke_for(&record.color, &self.options.path_color).to_string();
        let path = Path::new()
            .set("d", record.path_data())
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", PATH_STROKE_WIDTH);
        self.elements.push((record.color.clone(), path.into()));
    }

    /// Add a registration mark rectangle to the SVG
    pub fn add_rect(&mut self, record: &RectRecord) {
        let stroke = self.stroke_for(&record.color, &self.options.rect_color).to_string();
        let rect = Rectangle::new()
            .set("x", record.x)
            .set("y", record.y)
            .set("width", record.width)
            .set("height", record.height)
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", RECT_STROKE_WIDTH);
        self.elements.push((record.color.clone(), rect.into()));
    }

    /// Finish and generate SVG string
    pub fn finish(self) -> String {
        let (x, y, width, height) = self.viewbox;

        let mut document = Document::new()
            .set("width", format!("{}mm", width))
            .set("height", format!("{}mm", height))
            .set("viewBox", format!("{} {} {} {}", x, y, width, height));

        if self.options.layers {
            document = document.set("xmlns:inkscape", INKSCAPE_NS);
            for (index, (name, elements)) in group_by_color(self.elements).into_iter().enumerate() {
                let mut layer = Group::new()
                    .set("id", format!("layer{}", index + 1))
                    .set("inkscape:groupmode", "layer")
                    .set("inkscape:label", name);
                for element in elements {
                    layer = layer.add(element);
                }
                document = document.add(layer);
            }
        } else {
            for (_, element) in self.elements {
                document = document.add(element);
            }
        }

        document.to_string()
    }

    /// Write the finished document to `path`
    pub fn save(self, path: &std::path::Path) -> ConvertResult<()> {
        std::fs::write(path, self.finish())?;
        Ok(())
    }
}

/// Stable grouping: colors in order of first appearance, elements in order
fn group_by_color(elements: Vec<(String, Element)>) -> Vec<(String, Vec<Element>)> {
    let mut groups: Vec<(String, Vec<Element>)> = Vec::new();
    for (color, element) in elements {
        match groups.iter_mut().find(|(name, _)| *name == color) {
            Some((_, members)) => members.push(element),
            None => groups.push((color, vec![element])),
        }
    }
    groups
}

/// Build the writer for a finished parse: all paths first, then all rectangles
pub fn build_writer<'a>(output: &ParseOutput, options: &'a ConvertOptions) -> SvgWriter<'a> {
    let mut svg = SvgWriter::new(options);
    svg.set_viewbox(&output.bounds);
    for path in &output.geometry.paths {
        svg.add_path(path);
    }
    for rect in &output.geometry.rects {
        svg.add_rect(rect);
    }
    svg
}

/// Render a finished parse to an SVG string
pub fn render_svg(output: &ParseOutput, options: &ConvertOptions) -> String {
    build_writer(output, options).finish()
}
