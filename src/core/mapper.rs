use crate::core::{Point, SampleRange};
use crate::error::{ChartError, ChartResult};

/// Computes the value range of `samples` with a single linear scan.
pub fn sample_range(samples: &[f64]) -> ChartResult<SampleRange> {
    validate_samples(samples)?;

    let range = samples.iter().fold(
        SampleRange {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        },
        |acc, &value| SampleRange {
            min: acc.min.min(value),
            max: acc.max.max(value),
        },
    );
    Ok(range)
}

/// Maps a sample sequence to screen-space points.
///
/// Sample `i` lands at `x = padding + i * step_x`; its value is shifted so the
/// observed minimum sits on the bottom baseline (`height - padding`) and the
/// maximum on the top edge (`padding`). A single sample is placed at
/// `x = padding`, and a constant series lies flat on the baseline. Extreme
/// but finite ranges still map inside the drawable area.
///
/// Surfaces smaller than `2 * padding` are not rejected; the output is
/// degenerate but finite.
pub fn map_to_points(
    samples: &[f64],
    width: f64,
    height: f64,
    padding: f64,
) -> ChartResult<Vec<Point>> {
    let range = sample_range(samples)?;

    let step_x = if samples.len() > 1 {
        (width - padding * 2.0) / (samples.len() - 1) as f64
    } else {
        0.0
    };
    let drawable_height = height - padding * 2.0;

    let points = samples
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Point::new(
                padding + index as f64 * step_x,
                height - padding - vertical_fraction(*value, range) * drawable_height,
            )
        })
        .collect();
    Ok(points)
}

/// Position of `value` within `range` as a fraction in `[0, 1]`, measured
/// from the minimum.
///
/// Spans that overflow to infinity are measured on halved operands. A zero or
/// subnormal span has no usable vertical extent and maps to the baseline.
fn vertical_fraction(value: f64, range: SampleRange) -> f64 {
    let span = range.span();
    let fraction = if span.is_normal() {
        (value - range.min) / span
    } else {
        let half_span = range.max / 2.0 - range.min / 2.0;
        if half_span.is_normal() {
            (value / 2.0 - range.min / 2.0) / half_span
        } else {
            0.0
        }
    };
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn validate_samples(samples: &[f64]) -> ChartResult<()> {
    if samples.is_empty() {
        return Err(ChartError::InvalidInput(
            "sample sequence must not be empty".to_owned(),
        ));
    }
    if let Some(index) = samples.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidInput(format!(
            "sample at index {index} must be finite"
        )));
    }
    Ok(())
}
