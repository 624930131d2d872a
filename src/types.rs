//! Geometry records produced by the job file parser

use std::fmt;

/// Point in output units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing command of an outline path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// SVG path data, six decimals per coordinate
impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {:.6},{:.6}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {:.6},{:.6}", p.x, p.y),
            PathCommand::CubicTo { c1, c2, to } => write!(
                f,
                "C {:.6},{:.6} {:.6},{:.6} {:.6},{:.6}",
                c1.x, c1.y, c2.x, c2.y, to.x, to.y
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// A completed outline block
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    pub commands: Vec<PathCommand>,
    /// Color context in effect when the block ended
    pub color: String,
}

impl PathRecord {
    /// The `d` attribute for this path
    pub fn path_data(&self) -> String {
        self.commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

/// A registration mark rectangle, always with positive size
#[derive(Debug, Clone, PartialEq)]
pub struct RectRecord {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Every geometry record of one conversion, in emission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub paths: Vec<PathRecord>,
    pub rects: Vec<RectRecord>,
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.rects.is_empty()
    }
}
