use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Projected point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Cubic bezier segment between two adjacent projected points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub x0: f64,
    pub y0: f64,
    pub cx1: f64,
    pub cy1: f64,
    pub cx2: f64,
    pub cy2: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Projects sparkline values into pixel points.
///
/// Points are spaced evenly across the viewport width and scaled linearly
/// from the value range onto the height, larger values mapping higher. A
/// flat series sits on the vertical midline. The function is deterministic
/// and side-effect free so both rendering and tests consume the exact same
/// geometry output.
pub fn project_sparkline_points(
    values: &[f64],
    viewport: Viewport,
) -> ChartResult<Vec<PixelPoint>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(
            "sparkline values must be finite".to_owned(),
        ));
    }
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(*value);
        max = max.max(*value);
    }
    let span = max - min;

    let last_index = (values.len() - 1) as f64;

    let mut points = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let x = if values.len() > 1 {
            width * (index as f64 / last_index)
        } else {
            width / 2.0
        };
        let y = if span == 0.0 {
            height / 2.0
        } else {
            height * (1.0 - (value - min) / span)
        };
        points.push(PixelPoint { x, y });
    }

    Ok(points)
}

/// Converts adjacent points into smoothed cubic bezier segments.
///
/// Control points are derived from each point's neighbors scaled by the
/// distance ratio between the adjacent chords and the tension factor.
/// Tension zero collapses control points onto the endpoints, producing
/// straight segments. Fewer than two points yields no segments.
#[must_use]
pub fn spline_segments(points: &[PixelPoint], tension: f64) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(points.len());
    for (index, current) in points.iter().enumerate() {
        let previous = if index == 0 {
            *current
        } else {
            points[index - 1]
        };
        let next = if index + 1 == points.len() {
            *current
        } else {
            points[index + 1]
        };

        let chord_in = distance(*current, previous);
        let chord_out = distance(next, *current);
        let total = chord_in + chord_out;
        let (ratio_in, ratio_out) = if total == 0.0 {
            (0.0, 0.0)
        } else {
            (chord_in / total, chord_out / total)
        };

        let factor_in = tension * ratio_in;
        let factor_out = tension * ratio_out;
        controls.push((
            PixelPoint {
                x: current.x - factor_in * (next.x - previous.x),
                y: current.y - factor_in * (next.y - previous.y),
            },
            PixelPoint {
                x: current.x + factor_out * (next.x - previous.x),
                y: current.y + factor_out * (next.y - previous.y),
            },
        ));
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for index in 0..points.len() - 1 {
        let start = points[index];
        let end = points[index + 1];
        let control_out = controls[index].1;
        let control_in = controls[index + 1].0;
        segments.push(CubicSegment {
            x0: start.x,
            y0: start.y,
            cx1: control_out.x,
            cy1: control_out.y,
            cx2: control_in.x,
            cy2: control_in.y,
            x1: end.x,
            y1: end.y,
        });
    }

    segments
}

fn distance(a: PixelPoint, b: PixelPoint) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
