//! Block parser for Print and Cut Job Files
//!
//! Single pass, line by line, no look-ahead. Each line is classified by
//! [`Directive::classify`] and dispatched against the current [`JobParser`]
//! state. Outline and registration mark blocks are tracked by independent
//! flags, and the color context is file-global: it survives block boundaries
//! until the next color declaration.

use crate::bbox::{BoundingBox, BoundsAccumulator};
use crate::directive::{Directive, DEFAULT_COLOR_CONTEXT};
use crate::options::ConvertOptions;
use crate::types::{Geometry, PathCommand, PathRecord, RectRecord};
use crate::units::UnitConverter;
use log::debug;

/// Result of one parse pass
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub geometry: Geometry,
    /// Bounds of all emitted geometry, in output units. May be empty.
    pub bounds: BoundingBox,
}

/// Outline block in progress
#[derive(Debug, Default)]
struct OutlineState {
    active: bool,
    pending_close: bool,
    commands: Vec<PathCommand>,
}

impl OutlineState {
    fn begin(&mut self) {
        self.active = true;
        self.pending_close = false;
        self.commands.clear();
    }

    fn reset(&mut self) {
        self.active = false;
        self.pending_close = false;
        self.commands.clear();
    }
}

/// Registration mark block in progress
#[derive(Debug)]
struct MarkState {
    active: bool,
    /// Raw `(x1, y1, x2, y2)`; the last clip in a block wins
    pending_clip: Option<[f64; 4]>,
    color: String,
}

/// Parser state for one conversion run
pub struct JobParser {
    units: UnitConverter,
    bounds: BoundsAccumulator,
    geometry: Geometry,
    color_context: String,
    default_rect_color: String,
    outline: OutlineState,
    mark: MarkState,
    line_count: usize,
}

impl JobParser {
    pub fn new(options: &ConvertOptions) -> Self {
        let units = UnitConverter::new(options.scale);
        Self {
            units,
            bounds: BoundsAccumulator::new(units),
            geometry: Geometry::default(),
            color_context: DEFAULT_COLOR_CONTEXT.to_string(),
            default_rect_color: options.rect_color.clone(),
            outline: OutlineState::default(),
            mark: MarkState {
                active: false,
                pending_clip: None,
                color: options.rect_color.clone(),
            },
            line_count: 0,
        }
    }

    /// Feed one raw line. Blank lines are skipped.
    pub fn process_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        self.line_count += 1;

        match Directive::classify(line) {
            Directive::Color(name) => {
                self.color_context = name.to_string();
                if self.mark.active {
                    self.mark.color = name.to_string();
                }
            }
            Directive::BeginMark => {
                self.mark.active = true;
                self.mark.pending_clip = None;
                self.mark.color = self.color_context.clone();
            }
            Directive::EndMark => self.end_mark(),
            Directive::Clip(clip) => {
                if !self.mark.active {
                    return;
                }
                match clip {
                    Some(coords) => self.mark.pending_clip = Some(coords),
                    // edge case: short clip, keep whatever was pending
                    None => debug!("line {}: clip with fewer than 4 numbers", self.line_count),
                }
            }
            Directive::BeginOutline => self.outline.begin(),
            Directive::Closure { closed } => {
                if closed {
                    self.outline.pending_close = true;
                }
            }
            Directive::EndOutline => self.end_outline(),
            Directive::Segment(pairs) => {
                if !self.outline.active {
                    return;
                }
                let Some([start, end]) = pairs else {
                    // edge case: insufficient pairs, line contributes nothing
                    debug!("line {}: segment with fewer than 2 pairs", self.line_count);
                    return;
                };
                self.outline
                    .commands
                    .push(PathCommand::MoveTo(self.units.convert_point(start)));
                self.outline
                    .commands
                    .push(PathCommand::LineTo(self.units.convert_point(end)));
                self.bounds.add_raw_point(start);
                self.bounds.add_raw_point(end);
            }
            Directive::Bezier(pairs) => {
                if !self.outline.active {
                    return;
                }
                let Some([start, end, c1, c2]) = pairs else {
                    // edge case: insufficient pairs, line contributes nothing
                    debug!("line {}: bezier with fewer than 4 pairs", self.line_count);
                    return;
                };
                self.outline
                    .commands
                    .push(PathCommand::MoveTo(self.units.convert_point(start)));
                self.outline.commands.push(PathCommand::CubicTo {
                    c1: self.units.convert_point(c1),
                    c2: self.units.convert_point(c2),
                    to: self.units.convert_point(end),
                });
                for point in [start, end, c1, c2] {
                    self.bounds.add_raw_point(point);
                }
            }
            Directive::Other => {}
        }
    }

    fn end_mark(&mut self) {
        if let (true, Some([x1, y1, x2, y2])) = (self.mark.active, self.mark.pending_clip) {
            let x = x1.min(x2);
            let y = y1.min(y2);
            let w = (x2 - x1).abs();
            let h = (y2 - y1).abs();

            let rect = RectRecord {
                x: self.units.convert(x),
                y: self.units.convert(y),
                width: self.units.convert(w),
                height: self.units.convert(h),
                color: self.mark.color.clone(),
            };

            if rect.width > 0.0 && rect.height > 0.0 {
                debug!(
                    "line {}: registration mark {}x{} at ({}, {}) [{}]",
                    self.line_count, rect.width, rect.height, rect.x, rect.y, rect.color
                );
                self.bounds.add_raw_rect(x, y, w, h);
                self.geometry.rects.push(rect);
            } else {
                // edge case: zero-area rectangle is dropped
                debug!("line {}: zero-area registration mark dropped", self.line_count);
            }
        } else if !self.mark.active {
            debug!("line {}: end of mark block outside a block", self.line_count);
        }

        self.mark.active = false;
        self.mark.pending_clip = None;
        self.mark.color = self.default_rect_color.clone();
    }

    fn end_outline(&mut self) {
        if self.outline.commands.is_empty() {
            // edge case: empty outline emits nothing
            debug!("line {}: empty outline block dropped", self.line_count);
        } else {
            let mut commands = std::mem::take(&mut self.outline.commands);
            if self.outline.pending_close {
                commands.push(PathCommand::Close);
            }
            debug!(
                "line {}: outline with {} commands [{}]",
                self.line_count,
                commands.len(),
                self.color_context
            );
            self.geometry.paths.push(PathRecord {
                commands,
                color: self.color_context.clone(),
            });
        }
        self.outline.reset();
    }

    /// Finish the pass. Blocks still open at end of input are discarded.
    pub fn finish(self) -> ParseOutput {
        if self.outline.active || self.mark.active {
            debug!("input ended inside an open block; block discarded");
        }
        ParseOutput {
            geometry: self.geometry,
            bounds: self.bounds.bounds(),
        }
    }
}

/// Split on `\n`, `\r\n` and bare `\r`. The empty pieces a `\r\n` pair
/// leaves behind are blank lines, which the parser skips.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
}

/// Parse a whole job file held in memory
pub fn parse_job(text: &str, options: &ConvertOptions) -> ParseOutput {
    let mut parser = JobParser::new(options);
    for line in split_lines(text) {
        parser.process_line(line);
    }
    parser.finish()
}
