use lopdf::content::Operation;
use scrawl_ops as ops;
use scrawl_types::{Color, DashPattern, LineCapStyle, Point};

/// Options for [`draw_line`].
#[derive(Debug, Clone)]
pub struct DrawLineOptions {
    pub start: Point,
    pub end: Point,
    pub thickness: f32,
    pub color: Option<Color>,
    pub line_cap: Option<LineCapStyle>,
    pub dash: Option<DashPattern>,
    pub graphics_state: Option<String>,
}

/// Compiles a stroked line segment.
///
/// The stroke is always emitted, color or not: without a color the line
/// strokes in whatever stroking color the surrounding content last set.
/// The dash pattern is likewise always emitted, defaulting to solid, so a
/// dashed pattern inherited from outside cannot leak in.
pub fn draw_line(options: &DrawLineOptions) -> Vec<Operation> {
    let mut out = vec![ops::push_graphics_state()];
    if let Some(state) = &options.graphics_state {
        out.push(ops::set_graphics_state(state));
    }
    if let Some(color) = &options.color {
        out.push(ops::set_stroking_color(color));
    }
    out.push(ops::set_line_width(options.thickness));
    out.push(ops::set_dash_pattern(options.dash.as_ref().unwrap_or(&DashPattern::solid())));
    out.push(ops::move_to(options.start.x, options.start.y));
    if let Some(cap) = options.line_cap {
        out.push(ops::set_line_cap(cap));
    }
    out.push(ops::line_to(options.end.x, options.end.y));
    out.push(ops::stroke());
    out.push(ops::pop_graphics_state());
    out
}
