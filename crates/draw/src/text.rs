use lopdf::content::Operation;
use scrawl_ops as ops;
use scrawl_types::{Angle, Color, Point};

/// Options for [`draw_text`].
#[derive(Debug, Clone)]
pub struct DrawTextOptions {
    pub color: Color,
    /// Resource name of the font in the page's Font dictionary.
    pub font: String,
    pub size: f32,
    pub rotate: Angle,
    pub x_skew: Angle,
    pub y_skew: Angle,
    pub position: Point,
    /// Resource name of an ExtGState entry to apply, if any.
    pub graphics_state: Option<String>,
}

/// Options for [`draw_lines_of_text`].
#[derive(Debug, Clone)]
pub struct DrawLinesOfTextOptions {
    pub color: Color,
    pub font: String,
    pub size: f32,
    /// Distance the text cursor drops between lines.
    pub line_height: f32,
    pub rotate: Angle,
    pub x_skew: Angle,
    pub y_skew: Angle,
    pub position: Point,
    pub graphics_state: Option<String>,
}

/// Compiles a single run of already-encoded text.
///
/// Rotation and both skews land in one text-matrix instruction together
/// with the anchor translation; the angles are normalized to radians here
/// and nowhere else.
pub fn draw_text(line: &[u8], options: &DrawTextOptions) -> Vec<Operation> {
    let mut out = vec![ops::push_graphics_state()];
    if let Some(state) = &options.graphics_state {
        out.push(ops::set_graphics_state(state));
    }
    out.push(ops::begin_text());
    out.push(ops::set_filling_color(&options.color));
    out.push(ops::set_font_and_size(&options.font, options.size));
    out.push(ops::rotate_and_skew_text_radians_and_translate(
        options.rotate.to_radians(),
        options.x_skew.to_radians(),
        options.y_skew.to_radians(),
        options.position.x,
        options.position.y,
    ));
    out.push(ops::show_text(line));
    out.push(ops::end_text());
    out.push(ops::pop_graphics_state());
    out
}

/// Compiles an ordered sequence of already-encoded text lines.
///
/// Each line is shown and followed by a next-line instruction; the drop per
/// line is governed by the leading set up front. An empty line sequence
/// still compiles to a valid, balanced (if visually empty) sequence.
pub fn draw_lines_of_text(
    lines: &[impl AsRef<[u8]>],
    options: &DrawLinesOfTextOptions,
) -> Vec<Operation> {
    let mut out = vec![ops::push_graphics_state()];
    if let Some(state) = &options.graphics_state {
        out.push(ops::set_graphics_state(state));
    }
    out.push(ops::begin_text());
    out.push(ops::set_filling_color(&options.color));
    out.push(ops::set_font_and_size(&options.font, options.size));
    out.push(ops::set_line_height(options.line_height));
    out.push(ops::rotate_and_skew_text_radians_and_translate(
        options.rotate.to_radians(),
        options.x_skew.to_radians(),
        options.y_skew.to_radians(),
        options.position.x,
        options.position.y,
    ));
    for line in lines {
        out.push(ops::show_text(line.as_ref()));
        out.push(ops::next_line());
    }
    out.push(ops::end_text());
    out.push(ops::pop_graphics_state());
    out
}
