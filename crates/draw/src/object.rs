use lopdf::content::Operation;
use scrawl_ops as ops;
use scrawl_types::{Angle, Point};

/// Options for [`draw_image`].
#[derive(Debug, Clone)]
pub struct DrawImageOptions {
    pub position: Point,
    pub width: f32,
    pub height: f32,
    pub rotate: Angle,
    pub x_skew: Angle,
    pub y_skew: Angle,
    pub graphics_state: Option<String>,
}

/// Options for [`draw_page`].
#[derive(Debug, Clone)]
pub struct DrawPageOptions {
    pub position: Point,
    pub x_scale: f32,
    pub y_scale: f32,
    pub rotate: Angle,
    pub x_skew: Angle,
    pub y_skew: Angle,
    pub graphics_state: Option<String>,
}

/// Places an image XObject by resource name.
///
/// The transforms compose left to right, so the emitted order translate,
/// rotate, scale, skew is what gives the intuitive "place, then orient,
/// then size, then shear" behavior. Image XObjects span the unit square,
/// which is why the requested width and height become the scale step.
pub fn draw_image(name: &str, options: &DrawImageOptions) -> Vec<Operation> {
    draw_object(
        name,
        options.position,
        options.width,
        options.height,
        options.rotate,
        options.x_skew,
        options.y_skew,
        options.graphics_state.as_deref(),
    )
}

/// Places an embedded page XObject by resource name.
pub fn draw_page(name: &str, options: &DrawPageOptions) -> Vec<Operation> {
    draw_object(
        name,
        options.position,
        options.x_scale,
        options.y_scale,
        options.rotate,
        options.x_skew,
        options.y_skew,
        options.graphics_state.as_deref(),
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_object(
    name: &str,
    position: Point,
    x_scale: f32,
    y_scale: f32,
    rotate: Angle,
    x_skew: Angle,
    y_skew: Angle,
    graphics_state: Option<&str>,
) -> Vec<Operation> {
    let mut out = vec![ops::push_graphics_state()];
    if let Some(state) = graphics_state {
        out.push(ops::set_graphics_state(state));
    }
    out.push(ops::translate(position.x, position.y));
    out.push(ops::rotate_radians(rotate.to_radians()));
    out.push(ops::scale(x_scale, y_scale));
    out.push(ops::skew_radians(x_skew.to_radians(), y_skew.to_radians()));
    out.push(ops::draw_object(name));
    out.push(ops::pop_graphics_state());
    out
}
