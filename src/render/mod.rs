mod frame;
mod primitives;
mod recording_surface;

pub use frame::RenderFrame;
pub use primitives::{Color, MarkerStyle, PolylineStyle};
pub use recording_surface::{RecordingSurface, SurfaceCommand};

use crate::core::{Point, Viewport};
use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// The chart performs exactly one `clear` followed by the polyline and marker
/// calls per draw pass, so backends need no frame bookkeeping of their own.
pub trait DrawingSurface {
    fn pixel_dimensions(&self) -> ChartResult<Viewport>;

    fn clear(&mut self) -> ChartResult<()>;

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) -> ChartResult<()>;

    fn fill_and_stroke_markers(
        &mut self,
        points: &[Point],
        radius: f64,
        fill_color: Color,
        stroke_color: Color,
        stroke_width: f64,
    ) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
