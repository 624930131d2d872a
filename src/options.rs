//! Conversion options
//!
//! One [`ConvertOptions`] value is supplied per run. It can be built in code,
//! loaded from a (partial) JSON file, or assembled from command-line flags.

use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inches to millimeters.
pub const DEFAULT_SCALE: f64 = 25.4;
pub const DEFAULT_PATH_COLOR: &str = "black";
pub const DEFAULT_RECT_COLOR: &str = "blue";
pub const DEFAULT_TRIM_COLOR: &str = "red";

/// Options for a single conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Factor applied to every raw job file coordinate
    pub scale: f64,
    /// Stroke color for outline paths
    pub path_color: String,
    /// Stroke color for registration mark rectangles
    pub rect_color: String,
    /// Stroke color for anything drawn under a trim box color context
    pub trim_color: String,
    /// Group elements into one SVG layer per source color context
    pub layers: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            path_color: DEFAULT_PATH_COLOR.to_string(),
            rect_color: DEFAULT_RECT_COLOR.to_string(),
            trim_color: DEFAULT_TRIM_COLOR.to_string(),
            layers: false,
        }
    }
}

impl ConvertOptions {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_path_color(mut self, color: impl Into<String>) -> Self {
        self.path_color = color.into();
        self
    }

    pub fn with_rect_color(mut self, color: impl Into<String>) -> Self {
        self.rect_color = color.into();
        self
    }

    pub fn with_trim_color(mut self, color: impl Into<String>) -> Self {
        self.trim_color = color.into();
        self
    }

    pub fn with_layers(mut self, layers: bool) -> Self {
        self.layers = layers;
        self
    }

    /// Load options from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> ConvertResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Reject options that cannot produce a meaningful document
    pub fn validate(&self) -> ConvertResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConvertError::InvalidOption {
                name: "scale",
                reason: format!("scale factor must be positive, got {}", self.scale),
            });
        }

        let colors = [
            ("path_color", &self.path_color),
            ("rect_color", &self.rect_color),
            ("trim_color", &self.trim_color),
        ];
        for (name, value) in colors {
            if value.trim().is_empty() {
                return Err(ConvertError::InvalidOption {
                    name,
                    reason: "color must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
