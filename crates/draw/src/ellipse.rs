use crate::paint::paint_operation;
use lopdf::content::Operation;
use scrawl_ops as ops;
use scrawl_types::{Color, DashPattern, Point};
use std::f32::consts::SQRT_2;

/// Control-point offset factor for approximating a quarter circle with one
/// cubic Bezier, scaled independently per axis for ellipses.
pub const KAPPA: f32 = 4.0 * ((SQRT_2 - 1.0) / 3.0);

/// Options for [`draw_ellipse`].
#[derive(Debug, Clone)]
pub struct DrawEllipseOptions {
    /// Center of the ellipse.
    pub position: Point,
    pub x_scale: f32,
    pub y_scale: f32,
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f32,
    pub border_dash: Option<DashPattern>,
    pub graphics_state: Option<String>,
}

/// Traces a closed four-segment Bezier approximation of an ellipse,
/// wrapped in its own balanced save/restore pair.
///
/// The path starts at the leftmost point `(center.x - x_scale, center.y)`
/// and runs through the four quadrants with control offsets `x_scale *
/// KAPPA` and `y_scale * KAPPA`. This is an approximation, not an exact
/// ellipse; for circles the radial error stays around 0.02%.
pub fn draw_ellipse_path(center: Point, x_scale: f32, y_scale: f32) -> Vec<Operation> {
    let x = center.x - x_scale;
    let y = center.y - y_scale;

    let ox = x_scale * KAPPA;
    let oy = y_scale * KAPPA;
    let xe = x + x_scale * 2.0;
    let ye = y + y_scale * 2.0;
    let xm = x + x_scale;
    let ym = y + y_scale;

    vec![
        ops::push_graphics_state(),
        ops::move_to(x, ym),
        ops::append_bezier_curve(x, ym - oy, xm - ox, y, xm, y),
        ops::append_bezier_curve(xm + ox, y, xe, ym - oy, xe, ym),
        ops::append_bezier_curve(xe, ym + oy, xm + ox, ye, xm, ye),
        ops::append_bezier_curve(xm - ox, ye, x, ym + oy, x, ym),
        ops::pop_graphics_state(),
    ]
}

/// Compiles a filled and/or stroked ellipse around the four-segment path.
pub fn draw_ellipse(options: &DrawEllipseOptions) -> Vec<Operation> {
    let mut out = vec![ops::push_graphics_state()];
    if let Some(state) = &options.graphics_state {
        out.push(ops::set_graphics_state(state));
    }
    if let Some(color) = &options.color {
        out.push(ops::set_filling_color(color));
    }
    if let Some(color) = &options.border_color {
        out.push(ops::set_stroking_color(color));
    }
    out.push(ops::set_line_width(options.border_width));
    out.push(ops::set_dash_pattern(
        options.border_dash.as_ref().unwrap_or(&DashPattern::solid()),
    ));
    out.extend(draw_ellipse_path(
        options.position,
        options.x_scale,
        options.y_scale,
    ));
    out.push(paint_operation(
        options.color.as_ref(),
        options.border_color.as_ref(),
        options.border_width,
    ));
    out.push(ops::pop_graphics_state());
    out
}
