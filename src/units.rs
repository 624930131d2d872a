//! Raw job file units to output units

use crate::types::Point;

/// Scales raw coordinates by a fixed, strictly positive factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    scale: f64,
}

impl UnitConverter {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn convert(&self, raw: f64) -> f64 {
        raw * self.scale
    }

    pub fn convert_point(&self, (x, y): (f64, f64)) -> Point {
        Point::new(self.convert(x), self.convert(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_to_millimeters() {
        let units = UnitConverter::new(25.4);
        assert_eq!(units.convert(10.0), 254.0);
        assert_eq!(units.convert_point((1.0, -2.0)), Point::new(25.4, -50.8));
    }
}
