use serde::{Deserialize, Serialize};

use crate::core::CubicSegment;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels plus a normalized alpha.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one stroked cubic bezier segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPrimitive {
    pub x0: f64,
    pub y0: f64,
    pub cx1: f64,
    pub cy1: f64,
    pub cx2: f64,
    pub cy2: f64,
    pub x1: f64,
    pub y1: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl BezierPrimitive {
    #[must_use]
    pub const fn from_segment(segment: CubicSegment, stroke_width: f64, color: Color) -> Self {
        Self {
            x0: segment.x0,
            y0: segment.y0,
            cx1: segment.cx1,
            cy1: segment.cy1,
            cx2: segment.cx2,
            cy2: segment.cy2,
            x1: segment.x1,
            y1: segment.y1,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        let coordinates = [
            self.x0, self.y0, self.cx1, self.cy1, self.cx2, self.cy2, self.x1, self.y1,
        ];
        if coordinates.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "bezier coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bezier stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled annular sector in pixel space.
///
/// Angles are in radians; the sweep runs from `start_angle` to `end_angle`
/// clockwise in screen coordinates. `inner_radius` of zero degenerates to a
/// pie slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl ArcPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        let scalars = [
            self.center_x,
            self.center_y,
            self.outer_radius,
            self.inner_radius,
            self.start_angle,
            self.end_angle,
            self.border_width,
        ];
        if scalars.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "arc fields must be finite".to_owned(),
            ));
        }
        if self.outer_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "arc outer radius must be > 0".to_owned(),
            ));
        }
        if self.inner_radius < 0.0 || self.inner_radius >= self.outer_radius {
            return Err(ChartError::InvalidData(
                "arc inner radius must be in [0, outer_radius)".to_owned(),
            ));
        }
        if self.end_angle < self.start_angle {
            return Err(ChartError::InvalidData(
                "arc end angle must be >= start angle".to_owned(),
            ));
        }
        if self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "arc border width must be >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Draw command for one filled circle in pixel space (point markers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center_x: f64, center_y: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Draw command for a filled region between a smoothed curve and a baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPrimitive {
    pub segments: Vec<CubicSegment>,
    pub baseline_y: f64,
    pub fill_color: Color,
}

impl AreaPrimitive {
    #[must_use]
    pub fn new(segments: Vec<CubicSegment>, baseline_y: f64, fill_color: Color) -> Self {
        Self {
            segments,
            baseline_y,
            fill_color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.segments.is_empty() {
            return Err(ChartError::InvalidData(
                "area must contain at least one segment".to_owned(),
            ));
        }
        for segment in &self.segments {
            let coordinates = [
                segment.x0,
                segment.y0,
                segment.cx1,
                segment.cy1,
                segment.cx2,
                segment.cy2,
                segment.x1,
                segment.y1,
            ];
            if coordinates.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(
                    "area segment coordinates must be finite".to_owned(),
                ));
            }
        }
        if !self.baseline_y.is_finite() {
            return Err(ChartError::InvalidData(
                "area baseline must be finite".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}
