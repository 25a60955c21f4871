use crate::core::{Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, MarkerStyle, PolylineStyle};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub points: Vec<Point>,
    pub line: PolylineStyle,
    pub markers: MarkerStyle,
}

impl RenderFrame {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        points: Vec<Point>,
        line: PolylineStyle,
        markers: MarkerStyle,
    ) -> Self {
        Self {
            viewport,
            points,
            line,
            markers,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidInput(
                "frame coordinates must be finite".to_owned(),
            ));
        }
        self.line.validate()?;
        self.markers.validate()
    }

    /// A single point has no segments to connect.
    #[must_use]
    pub fn has_polyline(&self) -> bool {
        self.points.len() >= 2
    }

    /// Clears the surface and draws the polyline followed by the markers.
    pub fn paint<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        self.validate()?;
        surface.clear()?;
        if self.has_polyline() {
            surface.stroke_polyline(&self.points, self.line.color, self.line.width)?;
        }
        surface.fill_and_stroke_markers(
            &self.points,
            self.markers.radius,
            self.markers.fill_color,
            self.markers.stroke_color,
            self.markers.stroke_width,
        )
    }
}
