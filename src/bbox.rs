//! Bounding box accumulation for the output canvas
//!
//! [`BoundingBox`] holds bounds in output units. [`BoundsAccumulator`] is what
//! the parser feeds: it only ever receives raw job file coordinates and does
//! its own scaling, so nothing is converted twice.

use crate::units::UnitConverter;

/// Smallest canvas extent along either axis, in output units
pub const MIN_CANVAS_EXTENT: f64 = 1.0;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    /// An empty (inverted) bounding box.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// True once at least one point has been included
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Canvas frame `(x, y, width, height)` for this box.
    ///
    /// Each extent is floored to [`MIN_CANVAS_EXTENT`]. An empty box yields a
    /// unit canvas at the origin.
    pub fn canvas(&self) -> (f64, f64, f64, f64) {
        if !self.is_valid() {
            return (0.0, 0.0, MIN_CANVAS_EXTENT, MIN_CANVAS_EXTENT);
        }
        (
            self.min_x,
            self.min_y,
            (self.max_x - self.min_x).max(MIN_CANVAS_EXTENT),
            (self.max_y - self.min_y).max(MIN_CANVAS_EXTENT),
        )
    }
}

/// Running bounds over raw coordinates
#[derive(Debug, Clone)]
pub struct BoundsAccumulator {
    units: UnitConverter,
    bounds: BoundingBox,
}

impl BoundsAccumulator {
    pub fn new(units: UnitConverter) -> Self {
        Self {
            units,
            bounds: BoundingBox::EMPTY,
        }
    }

    pub fn add_raw_point(&mut self, (x, y): (f64, f64)) {
        self.bounds.include(self.units.convert(x), self.units.convert(y));
    }

    /// Include a rectangle given by its raw origin and raw size
    pub fn add_raw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let x = self.units.convert(x);
        let y = self.units.convert(y);
        self.bounds.include(x, y);
        self.bounds
            .include(x + self.units.convert(width), y + self.units.convert(height));
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}
