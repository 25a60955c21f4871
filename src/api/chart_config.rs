use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, MarkerStyle, PolylineStyle};

pub const DEFAULT_PADDING: f64 = 0.0;
pub const DEFAULT_POINT_SIZE: f64 = 4.0;
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 300.0;
pub const DEFAULT_LINE_COLOR: Color = Color::rgb(73.0 / 255.0, 5.0 / 255.0, 84.0 / 255.0);
pub const DEFAULT_POINT_FILL_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
pub const DEFAULT_POINT_STROKE_COLOR: Color = DEFAULT_LINE_COLOR;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
pub const DEFAULT_POINT_LINE_WIDTH: f64 = 3.0;

/// Chart drawing and animation options.
///
/// JSON keys are camelCase. Missing keys fall back to the defaults above and
/// unknown keys are ignored, so partial option objects can be merged over the
/// defaults directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Inset reserved on every edge, in pixels.
    pub padding: f64,
    /// Point marker radius, in pixels.
    pub point_size: f64,
    /// Length of one transition, in milliseconds.
    #[serde(rename = "animationDuration")]
    pub animation_duration_ms: f64,
    pub line_color: Color,
    pub point_fill_color: Color,
    pub point_stroke_color: Color,
    pub line_width: f64,
    pub point_line_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            point_size: DEFAULT_POINT_SIZE,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            line_color: DEFAULT_LINE_COLOR,
            point_fill_color: DEFAULT_POINT_FILL_COLOR,
            point_stroke_color: DEFAULT_POINT_STROKE_COLOR,
            line_width: DEFAULT_LINE_WIDTH,
            point_line_width: DEFAULT_POINT_LINE_WIDTH,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size;
        self
    }

    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_point_fill_color(mut self, color: Color) -> Self {
        self.point_fill_color = color;
        self
    }

    #[must_use]
    pub fn with_point_stroke_color(mut self, color: Color) -> Self {
        self.point_stroke_color = color;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_point_line_width(mut self, width: f64) -> Self {
        self.point_line_width = width;
        self
    }

    #[must_use]
    pub fn polyline_style(self) -> PolylineStyle {
        PolylineStyle {
            color: self.line_color,
            width: self.line_width,
        }
    }

    #[must_use]
    pub fn marker_style(self) -> MarkerStyle {
        MarkerStyle {
            radius: self.point_size,
            fill_color: self.point_fill_color,
            stroke_color: self.point_stroke_color,
            stroke_width: self.point_line_width,
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON, filling omitted options with defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}
