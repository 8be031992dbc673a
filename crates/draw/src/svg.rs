use crate::paint::paint_operation;
use lopdf::content::Operation;
use scrawl_ops::{self as ops, PathTranslator};
use scrawl_svg_path::SvgPathTranslator;
use scrawl_types::{Color, DashPattern, Point};

/// Options for [`draw_svg_path`].
#[derive(Debug, Clone)]
pub struct DrawSvgPathOptions {
    /// Anchor the path's origin is translated to.
    pub position: Point,
    /// Uniform scale; `None` keeps the path at its native size.
    pub scale: Option<f32>,
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f32,
    pub border_dash: Option<DashPattern>,
    pub graphics_state: Option<String>,
}

/// Compiles an SVG path drawing using the default translator.
pub fn draw_svg_path(path: &str, options: &DrawSvgPathOptions) -> Vec<Operation> {
    draw_svg_path_with(&SvgPathTranslator, path, options)
}

/// Compiles an SVG path drawing, delegating path construction to the given
/// translator.
///
/// The scale step always negates its vertical factor: path data is authored
/// with the Y axis pointing down, so the path must be flipped onto the
/// page's upward Y axis no matter which scale was requested. A line-width
/// instruction is only emitted for a non-zero border width; the dash
/// pattern is always emitted, defaulting to solid.
pub fn draw_svg_path_with<T: PathTranslator + ?Sized>(
    translator: &T,
    path: &str,
    options: &DrawSvgPathOptions,
) -> Vec<Operation> {
    let mut out = vec![ops::push_graphics_state()];
    if let Some(state) = &options.graphics_state {
        out.push(ops::set_graphics_state(state));
    }
    out.push(ops::translate(options.position.x, options.position.y));
    match options.scale {
        Some(scale) => out.push(ops::scale(scale, -scale)),
        None => out.push(ops::scale(1.0, -1.0)),
    }
    if let Some(color) = &options.color {
        out.push(ops::set_filling_color(color));
    }
    if let Some(color) = &options.border_color {
        out.push(ops::set_stroking_color(color));
    }
    if options.border_width != 0.0 {
        out.push(ops::set_line_width(options.border_width));
    }
    out.push(ops::set_dash_pattern(
        options.border_dash.as_ref().unwrap_or(&DashPattern::solid()),
    ));
    out.extend(translator.path_to_operations(path));
    out.push(paint_operation(
        options.color.as_ref(),
        options.border_color.as_ref(),
        options.border_width,
    ));
    out.push(ops::pop_graphics_state());
    out
}
