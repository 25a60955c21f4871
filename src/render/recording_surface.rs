use crate::core::{Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface};

/// One draw command captured by `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Clear,
    StrokePolyline {
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
    FillAndStrokeMarkers {
        points: Vec<Point>,
        radius: f64,
        fill_color: Color,
        stroke_color: Color,
        stroke_width: f64,
    },
}

/// Headless surface used by tests and trace tooling.
///
/// Every command is recorded in order. Dimensions can be changed to simulate
/// a host resize, and the surface can be put into a failing state to exercise
/// error propagation.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<SurfaceCommand>,
    clear_count: usize,
    failure: Option<String>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            ..Self::default()
        }
    }

    /// Surface whose every call fails with `ChartError::Surface`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn set_failure(&mut self, reason: Option<String>) {
        self.failure = reason;
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Number of completed clear-and-draw passes.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Marker positions of the most recent pass.
    #[must_use]
    pub fn last_markers(&self) -> Option<&[Point]> {
        self.commands.iter().rev().find_map(|command| match command {
            SurfaceCommand::FillAndStrokeMarkers { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    fn check(&self) -> ChartResult<()> {
        match &self.failure {
            Some(reason) => Err(ChartError::Surface(reason.clone())),
            None => Ok(()),
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn pixel_dimensions(&self) -> ChartResult<Viewport> {
        self.check()?;
        Ok(self.viewport)
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.check()?;
        self.clear_count += 1;
        self.commands.push(SurfaceCommand::Clear);
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) -> ChartResult<()> {
        self.check()?;
        self.commands.push(SurfaceCommand::StrokePolyline {
            points: points.to_vec(),
            color,
            width,
        });
        Ok(())
    }

    fn fill_and_stroke_markers(
        &mut self,
        points: &[Point],
        radius: f64,
        fill_color: Color,
        stroke_color: Color,
        stroke_width: f64,
    ) -> ChartResult<()> {
        self.check()?;
        self.commands.push(SurfaceCommand::FillAndStrokeMarkers {
            points: points.to_vec(),
            radius,
            fill_color,
            stroke_color,
            stroke_width,
        });
        Ok(())
    }
}
