use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Angular span of one donut segment, radians, clockwise in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl DonutSegment {
    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Ring placement inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

/// Projects values into angle spans proportional to `value / total`.
///
/// Segments start at `rotation` and proceed clockwise. Zero values produce
/// zero-sweep segments. The final end angle is pinned to a full turn so the
/// ring closes without a floating-point gap.
pub fn project_donut_segments(values: &[f64], rotation: f64) -> ChartResult<Vec<DonutSegment>> {
    if !rotation.is_finite() {
        return Err(ChartError::InvalidData(
            "donut rotation must be finite".to_owned(),
        ));
    }
    if values.is_empty() {
        return Ok(Vec::new());
    }
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(
            "donut values must be finite".to_owned(),
        ));
    }
    if values.iter().any(|value| *value < 0.0) {
        return Err(ChartError::InvalidData(
            "donut values must be >= 0".to_owned(),
        ));
    }

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(ChartError::InvalidData(
            "donut value total must be > 0".to_owned(),
        ));
    }

    let full_turn = std::f64::consts::TAU;
    let mut segments = Vec::with_capacity(values.len());
    let mut accumulated = 0.0;
    for (index, value) in values.iter().enumerate() {
        let start_angle = rotation + full_turn * (accumulated / total);
        accumulated += value;
        let end_angle = if index + 1 == values.len() {
            rotation + full_turn
        } else {
            rotation + full_turn * (accumulated / total)
        };
        segments.push(DonutSegment {
            start_angle,
            end_angle,
        });
    }

    Ok(segments)
}

/// Computes ring placement for a viewport and cutout ratio.
///
/// The outer radius is half the smaller viewport dimension; the inner radius
/// is the outer radius scaled by the cutout ratio.
pub fn donut_layout(viewport: Viewport, cutout_ratio: f64) -> ChartResult<DonutLayout> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if !cutout_ratio.is_finite() || !(0.0..1.0).contains(&cutout_ratio) {
        return Err(ChartError::InvalidData(
            "donut cutout ratio must be finite and in [0, 1)".to_owned(),
        ));
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let outer_radius = width.min(height) / 2.0;

    Ok(DonutLayout {
        center_x: width / 2.0,
        center_y: height / 2.0,
        outer_radius,
        inner_radius: outer_radius * cutout_ratio,
    })
}
