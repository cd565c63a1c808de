use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::palette::Palette;
use crate::render::Color;

/// Sparkline presentation: a single smoothed dataset, no axes, no legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparklineStyle {
    pub line_color: Color,
    pub line_width: f64,
    /// Spline smoothing factor; zero draws straight segments.
    pub tension: f64,
    /// Point marker radius; zero draws no markers.
    pub point_radius: f64,
    /// Optional area fill under the curve, typically a soft palette variant.
    pub fill: Option<Color>,
}

impl Default for SparklineStyle {
    fn default() -> Self {
        Self {
            line_color: Palette::default().primary,
            line_width: 2.0,
            tension: 0.3,
            point_radius: 0.0,
            fill: None,
        }
    }
}

/// Donut presentation: borderless segments around a fixed cutout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutStyle {
    /// Inner radius as a fraction of the outer radius.
    pub cutout_ratio: f64,
    /// Segment outline width; zero draws borderless segments.
    pub border_width: f64,
    pub border_color: Color,
    /// Angle of the first segment's leading edge, radians.
    pub rotation: f64,
}

impl Default for DonutStyle {
    fn default() -> Self {
        Self {
            cutout_ratio: 0.68,
            border_width: 0.0,
            border_color: Color::rgb(1.0, 1.0, 1.0),
            rotation: -FRAC_PI_2,
        }
    }
}

/// Renderer bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// styling without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartRendererConfig {
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub sparkline: SparklineStyle,
    #[serde(default)]
    pub donut: DonutStyle,
}

impl ChartRendererConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_sparkline_style(mut self, style: SparklineStyle) -> Self {
        self.sparkline = style;
        self
    }

    #[must_use]
    pub fn with_donut_style(mut self, style: DonutStyle) -> Self {
        self.donut = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.palette.validate()?;

        self.sparkline.line_color.validate()?;
        if let Some(fill) = self.sparkline.fill {
            fill.validate()?;
        }
        if !self.sparkline.line_width.is_finite() || self.sparkline.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "sparkline line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.sparkline.tension.is_finite() || !(0.0..=1.0).contains(&self.sparkline.tension) {
            return Err(ChartError::InvalidData(
                "sparkline tension must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.sparkline.point_radius.is_finite() || self.sparkline.point_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "sparkline point radius must be finite and >= 0".to_owned(),
            ));
        }

        self.donut.border_color.validate()?;
        if !self.donut.cutout_ratio.is_finite() || !(0.0..1.0).contains(&self.donut.cutout_ratio) {
            return Err(ChartError::InvalidData(
                "donut cutout ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.donut.border_width.is_finite() || self.donut.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "donut border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.donut.rotation.is_finite() {
            return Err(ChartError::InvalidData(
                "donut rotation must be finite".to_owned(),
            ));
        }

        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
