use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

pub(super) fn validate_chart_config(config: ChartConfig) -> ChartResult<ChartConfig> {
    for (name, value) in [
        ("padding", config.padding),
        ("pointSize", config.point_size),
        ("animationDuration", config.animation_duration_ms),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }

    config.polyline_style().validate()?;
    config.marker_style().validate()?;
    Ok(config)
}

pub(super) fn validate_frame_timestamp(timestamp_ms: f64) -> ChartResult<()> {
    if !timestamp_ms.is_finite() {
        return Err(ChartError::InvalidInput(
            "frame timestamp must be finite".to_owned(),
        ));
    }
    Ok(())
}
