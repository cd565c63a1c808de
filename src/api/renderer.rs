use smallvec::SmallVec;
use tracing::debug;

use crate::api::{ChartRendererConfig, RenderOutcome, SkipReason};
use crate::core::{
    Viewport, donut_layout, project_donut_segments, project_sparkline_points, spline_segments,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, AreaPrimitive, BezierPrimitive, CirclePrimitive, Color, RenderFrame, Renderer,
};
use crate::surface::{ChartBinding, ChartKind, SurfaceRegistry};

/// Stateless chart façade consumed by UI event handlers.
///
/// `ChartRenderer` owns the surface registry and the shared style
/// configuration, and translates validated (label, value[, color]) datasets
/// into chart bindings. It is constructed once and passed by reference to
/// whatever layer needs it; there is no ambient global instance.
///
/// The two render operations never return an error and never panic. Every
/// unrenderable condition degrades to `RenderOutcome::Skipped` and leaves
/// the surface binding untouched.
pub struct ChartRenderer {
    registry: SurfaceRegistry,
    config: ChartRendererConfig,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            registry: SurfaceRegistry::new(),
            config: ChartRendererConfig::default(),
        }
    }
}

impl ChartRenderer {
    pub fn new(config: ChartRendererConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            registry: SurfaceRegistry::new(),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartRendererConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartRendererConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn registry(&self) -> &SurfaceRegistry {
        &self.registry
    }

    #[must_use]
    pub fn registry_mut(&mut self) -> &mut SurfaceRegistry {
        &mut self.registry
    }

    pub fn register_surface(
        &mut self,
        id: impl Into<String>,
        viewport: Viewport,
    ) -> ChartResult<()> {
        self.registry.register(id, viewport)
    }

    /// Binds a sparkline to `surface_id`: single dataset, smoothed line,
    /// no axes, no legend, no point markers unless styled otherwise.
    ///
    /// Calling again with identical arguments replaces the binding with an
    /// equal one.
    pub fn render_sparkline(
        &mut self,
        surface_id: &str,
        labels: &[&str],
        values: &[f64],
    ) -> RenderOutcome {
        let Some(viewport) = self.registry.viewport(surface_id) else {
            return Self::skip(surface_id, ChartKind::Sparkline, SkipReason::MissingSurface);
        };
        if let Err(reason) = validate_dataset(labels, values) {
            return Self::skip(surface_id, ChartKind::Sparkline, reason);
        }

        let style = self.config.sparkline;
        let points = match project_sparkline_points(values, viewport) {
            Ok(points) => points,
            Err(error) => {
                debug!(surface_id, %error, "sparkline projection failed");
                return RenderOutcome::Skipped(SkipReason::NonFiniteValue);
            }
        };
        let segments = spline_segments(&points, style.tension);

        let mut frame = RenderFrame::new(viewport);
        if let Some(fill_color) = style.fill {
            if !segments.is_empty() {
                frame = frame.with_area(AreaPrimitive::new(
                    segments.clone(),
                    f64::from(viewport.height),
                    fill_color,
                ));
            }
        }
        for segment in &segments {
            frame = frame.with_bezier(BezierPrimitive::from_segment(
                *segment,
                style.line_width,
                style.line_color,
            ));
        }
        if style.point_radius > 0.0 {
            for point in &points {
                frame = frame.with_circle(CirclePrimitive::new(
                    point.x,
                    point.y,
                    style.point_radius,
                    style.line_color,
                ));
            }
        }

        self.bind(surface_id, ChartKind::Sparkline, labels, values, frame)
    }

    /// Binds a donut to `surface_id`: single dataset of annular segments
    /// around the configured cutout, no legend.
    ///
    /// Explicit `colors` are applied positionally as-is and must align with
    /// `values`; without them the palette fallback sequence is cycled over
    /// the segments.
    pub fn render_donut(
        &mut self,
        surface_id: &str,
        labels: &[&str],
        values: &[f64],
        colors: Option<&[Color]>,
    ) -> RenderOutcome {
        let Some(viewport) = self.registry.viewport(surface_id) else {
            return Self::skip(surface_id, ChartKind::Donut, SkipReason::MissingSurface);
        };
        if let Err(reason) = validate_dataset(labels, values) {
            return Self::skip(surface_id, ChartKind::Donut, reason);
        }
        if values.iter().any(|value| *value < 0.0) {
            return Self::skip(surface_id, ChartKind::Donut, SkipReason::NegativeValue);
        }
        if values.iter().sum::<f64>() <= 0.0 {
            return Self::skip(surface_id, ChartKind::Donut, SkipReason::ZeroTotal);
        }
        if let Some(colors) = colors {
            if colors.len() != values.len() {
                return Self::skip(surface_id, ChartKind::Donut, SkipReason::ColorLengthMismatch);
            }
        }

        let style = self.config.donut;
        let segments = match project_donut_segments(values, style.rotation) {
            Ok(segments) => segments,
            Err(error) => {
                debug!(surface_id, %error, "donut projection failed");
                return RenderOutcome::Skipped(SkipReason::NonFiniteValue);
            }
        };
        let layout = match donut_layout(viewport, style.cutout_ratio) {
            Ok(layout) => layout,
            Err(error) => {
                debug!(surface_id, %error, "donut layout failed");
                return RenderOutcome::Skipped(SkipReason::NonFiniteValue);
            }
        };

        let resolved: SmallVec<[Color; 4]> = match colors {
            Some(colors) => SmallVec::from_slice(colors),
            None => self.config.palette.segment_colors(values.len()),
        };

        let mut frame = RenderFrame::new(viewport);
        for (segment, color) in segments.iter().zip(resolved.iter()) {
            frame = frame.with_arc(ArcPrimitive {
                center_x: layout.center_x,
                center_y: layout.center_y,
                outer_radius: layout.outer_radius,
                inner_radius: layout.inner_radius,
                start_angle: segment.start_angle,
                end_angle: segment.end_angle,
                fill_color: *color,
                border_width: style.border_width,
                border_color: style.border_color,
            });
        }

        self.bind(surface_id, ChartKind::Donut, labels, values, frame)
    }

    /// Draws the chart currently bound to `surface_id` with `renderer`.
    pub fn draw<R: Renderer>(&self, surface_id: &str, renderer: &mut R) -> ChartResult<()> {
        match self.registry.binding(surface_id) {
            Some(binding) => renderer.render(&binding.frame),
            None => Err(ChartError::InvalidData(format!(
                "no chart bound to surface `{surface_id}`"
            ))),
        }
    }

    fn bind(
        &mut self,
        surface_id: &str,
        kind: ChartKind,
        labels: &[&str],
        values: &[f64],
        frame: RenderFrame,
    ) -> RenderOutcome {
        let binding = ChartBinding {
            kind,
            labels: labels.iter().map(|label| (*label).to_owned()).collect(),
            values: values.to_vec(),
            frame,
        };
        if self.registry.bind(surface_id, binding) {
            debug!(surface_id, ?kind, "chart bound");
            RenderOutcome::Rendered
        } else {
            Self::skip(surface_id, kind, SkipReason::MissingSurface)
        }
    }

    fn skip(surface_id: &str, kind: ChartKind, reason: SkipReason) -> RenderOutcome {
        debug!(surface_id, ?kind, ?reason, "render skipped");
        RenderOutcome::Skipped(reason)
    }
}

fn validate_dataset(labels: &[&str], values: &[f64]) -> Result<(), SkipReason> {
    if labels.is_empty() {
        return Err(SkipReason::EmptyLabels);
    }
    if values.is_empty() {
        return Err(SkipReason::EmptyValues);
    }
    if labels.len() != values.len() {
        return Err(SkipReason::LengthMismatch);
    }
    if values.iter().any(|value| !value.is_finite()) {
        return Err(SkipReason::NonFiniteValue);
    }
    Ok(())
}
