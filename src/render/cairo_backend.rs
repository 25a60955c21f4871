use cairo::{Context, Format, ImageSurface};
use std::f64::consts::TAU;
use std::path::Path;

use crate::core::{Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub clears: usize,
    pub polylines_drawn: usize,
    pub markers_drawn: usize,
}

/// Cairo image-surface backend.
///
/// Draws into an offscreen ARGB32 surface that hosts can blit or export as
/// PNG. Clearing paints the configured background color.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    clear_color: Color,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::Surface(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = std::fs::File::create(path).map_err(|err| {
            ChartError::Surface(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Surface(format!("failed to encode png: {err}")))
    }
}

impl DrawingSurface for CairoSurface {
    fn pixel_dimensions(&self) -> ChartResult<Viewport> {
        let width = u32::try_from(self.surface.width())
            .map_err(|_| ChartError::Surface("negative cairo surface width".to_owned()))?;
        let height = u32::try_from(self.surface.height())
            .map_err(|_| ChartError::Surface("negative cairo surface height".to_owned()))?;
        Ok(Viewport::new(width, height))
    }

    fn clear(&mut self) -> ChartResult<()> {
        apply_color(&self.context, self.clear_color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats.clears += 1;
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) -> ChartResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };

        self.context.new_path();
        self.context.move_to(first.x, first.y);
        for point in rest {
            self.context.line_to(point.x, point.y);
        }
        apply_color(&self.context, color);
        self.context.set_line_width(width);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
        self.stats.polylines_drawn += 1;
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
        self.context.new_path();
        for point in points {
            self.context.new_sub_path();
            self.context.arc(point.x, point.y, radius, 0.0, TAU);
        }
        apply_color(&self.context, stroke_color);
        self.context.set_line_width(stroke_width);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke markers", err))?;
        apply_color(&self.context, fill_color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill markers", err))?;
        self.stats.markers_drawn += points.len();
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Surface(format!("{prefix}: {err}"))
}
