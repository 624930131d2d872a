//! Line classification for Print and Cut Job Files
//!
//! Every trimmed, non-empty line is classified on its own, without looking at
//! parser state. Keywords are case-sensitive. Deciding whether a directive
//! applies in the current block is the parser's job.

use crate::extract::{extract_numbers, first_pairs};

pub const COLOR_PREFIX: &str = "QOLOR=";
pub const BEGIN_MARK: &str = "BEGIN_MAYER";
pub const END_MARK: &str = "END_MAYER";
pub const CLIP_PREFIX: &str = "CLIP=";
pub const BEGIN_OUTLINE: &str = "OUTLINE";
pub const END_OUTLINE: &str = "END OUTLINE";
pub const CLOSURE_PREFIX: &str = "CLOSURE";
pub const CLOSED_TOKEN: &str = "CLOSED";
pub const SEGMENT_PREFIX: &str = "SEGMENT";
pub const BEZIER_PREFIX: &str = "BEZIER";

/// Color context used when a color declaration names nothing
pub const DEFAULT_COLOR_CONTEXT: &str = "black";

type RawPair = (f64, f64);

/// A classified job file line. Coordinates are raw job file units.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive<'a> {
    /// `QOLOR=<name>:<rest>`
    Color(&'a str),
    BeginMark,
    EndMark,
    /// `CLIP=x1 y1 x2 y2 ...`; `None` when fewer than four numbers follow
    Clip(Option<[f64; 4]>),
    BeginOutline,
    EndOutline,
    /// `CLOSURE ...`; `closed` when the line mentions `CLOSED`
    Closure { closed: bool },
    /// `SEGMENT (x1 y1) (x2 y2)`; `None` when fewer than two pairs are present
    Segment(Option<[RawPair; 2]>),
    /// `BEZIER (start) (end) ... (c1) (c2)`; `None` when fewer than four pairs
    /// are present
    Bezier(Option<[RawPair; 4]>),
    /// Anything else, kept for forward compatibility
    Other,
}

impl<'a> Directive<'a> {
    /// Classify one trimmed line
    pub fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix(COLOR_PREFIX) {
            return Directive::Color(color_name(rest));
        }

        match line {
            BEGIN_MARK => return Directive::BeginMark,
            END_MARK => return Directive::EndMark,
            BEGIN_OUTLINE => return Directive::BeginOutline,
            END_OUTLINE => return Directive::EndOutline,
            _ => {}
        }

        if line.starts_with(CLIP_PREFIX) {
            let numbers = extract_numbers(line);
            let clip = match numbers.as_slice() {
                [x1, y1, x2, y2, ..] => Some([*x1, *y1, *x2, *y2]),
                _ => None,
            };
            return Directive::Clip(clip);
        }

        if line.starts_with(CLOSURE_PREFIX) {
            return Directive::Closure {
                closed: line.contains(CLOSED_TOKEN),
            };
        }

        if line.starts_with(SEGMENT_PREFIX) {
            return Directive::Segment(first_pairs::<2>(line));
        }

        if line.starts_with(BEZIER_PREFIX) {
            return Directive::Bezier(first_pairs::<4>(line));
        }

        Directive::Other
    }
}

/// The text before the first colon, trimmed; empty names fall back to the
/// default color context
fn color_name(rest: &str) -> &str {
    let name = rest.split(':').next().unwrap_or_default().trim();
    if name.is_empty() {
        DEFAULT_COLOR_CONTEXT
    } else {
        name
    }
}
