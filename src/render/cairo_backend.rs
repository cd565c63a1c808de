use cairo::{Context, Format, ImageSurface};

use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, Color, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub areas_drawn: usize,
    pub beziers_drawn: usize,
    pub arcs_drawn: usize,
    pub circles_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external
/// Cairo context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
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
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for area in &frame.areas {
            let first = area.segments[0];
            let last = area.segments[area.segments.len() - 1];
            context.new_path();
            context.move_to(first.x0, first.y0);
            for segment in &area.segments {
                context.curve_to(
                    segment.cx1, segment.cy1, segment.cx2, segment.cy2, segment.x1, segment.y1,
                );
            }
            context.line_to(last.x1, area.baseline_y);
            context.line_to(first.x0, area.baseline_y);
            context.close_path();
            apply_color(context, area.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill area", err))?;
            stats.areas_drawn += 1;
        }

        for bezier in &frame.beziers {
            apply_color(context, bezier.color);
            context.set_line_width(bezier.stroke_width);
            context.move_to(bezier.x0, bezier.y0);
            context.curve_to(
                bezier.cx1, bezier.cy1, bezier.cx2, bezier.cy2, bezier.x1, bezier.y1,
            );
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke bezier", err))?;
            stats.beziers_drawn += 1;
        }

        for arc in &frame.arcs {
            append_annular_path(context, *arc);
            apply_color(context, arc.fill_color);
            if arc.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill arc", err))?;
                apply_color(context, arc.border_color);
                context.set_line_width(arc.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke arc border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill arc", err))?;
            }
            stats.arcs_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_sub_path();
            context.arc(
                circle.center_x,
                circle.center_y,
                circle.radius,
                0.0,
                std::f64::consts::TAU,
            );
            apply_color(context, circle.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            stats.circles_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_annular_path(context: &Context, arc: ArcPrimitive) {
    context.new_sub_path();
    context.arc(
        arc.center_x,
        arc.center_y,
        arc.outer_radius,
        arc.start_angle,
        arc.end_angle,
    );
    if arc.inner_radius > 0.0 {
        context.arc_negative(
            arc.center_x,
            arc.center_y,
            arc.inner_radius,
            arc.end_angle,
            arc.start_angle,
        );
    } else {
        context.line_to(arc.center_x, arc.center_y);
    }
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
