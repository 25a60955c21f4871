use serde::{Deserialize, Serialize};

/// Pixel dimensions reported by a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }

    /// Returns `true` when the drawable area left after insetting by
    /// `padding` on every edge is non-negative on both axes.
    #[must_use]
    pub fn fits_padding(self, padding: f64) -> bool {
        self.width_px() >= padding * 2.0 && self.height_px() >= padding * 2.0
    }
}

/// Screen-space coordinate in surface pixels. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `target`, applied to each axis independently.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Minimum and maximum of a sample sequence. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    #[must_use]
    pub fn span(self) -> f64 {
        (self.max - self.min).abs()
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.min == self.max
    }
}
