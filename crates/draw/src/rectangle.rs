use crate::paint::paint_operation;
use lopdf::content::Operation;
use scrawl_ops as ops;
use scrawl_types::{Angle, Color, DashPattern, Point};

/// Options for [`draw_rectangle`].
#[derive(Debug, Clone)]
pub struct DrawRectangleOptions {
    /// Lower-left corner before rotation and skew.
    pub position: Point,
    pub width: f32,
    pub height: f32,
    pub border_width: f32,
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub rotate: Angle,
    pub x_skew: Angle,
    pub y_skew: Angle,
    pub border_dash: Option<DashPattern>,
    pub graphics_state: Option<String>,
}

/// Compiles an optionally rotated, skewed, filled and/or stroked rectangle.
///
/// There is no scale step: width and height are baked into the traced path,
/// so the border width is unaffected by the rectangle's size. The path is
/// traced in local coordinates and closed before the terminal paint
/// operation decides how it is rendered.
pub fn draw_rectangle(options: &DrawRectangleOptions) -> Vec<Operation> {
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
    out.push(ops::translate(options.position.x, options.position.y));
    out.push(ops::rotate_radians(options.rotate.to_radians()));
    out.push(ops::skew_radians(
        options.x_skew.to_radians(),
        options.y_skew.to_radians(),
    ));
    out.push(ops::move_to(0.0, 0.0));
    out.push(ops::line_to(0.0, options.height));
    out.push(ops::line_to(options.width, options.height));
    out.push(ops::line_to(options.width, 0.0));
    out.push(ops::close_path());
    out.push(paint_operation(
        options.color.as_ref(),
        options.border_color.as_ref(),
        options.border_width,
    ));
    out.push(ops::pop_graphics_state());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> DrawRectangleOptions {
        DrawRectangleOptions {
            position: Point::new(25.0, 50.0),
            width: 100.0,
            height: 40.0,
            border_width: 1.5,
            color: Some(Color::rgb(0.9, 0.9, 0.2)),
            border_color: Some(Color::grayscale(0.0)),
            rotate: Angle::default(),
            x_skew: Angle::default(),
            y_skew: Angle::default(),
            border_dash: None,
            graphics_state: None,
        }
    }

    fn operator_names(ops: &[Operation]) -> Vec<&str> {
        ops.iter().map(|op| op.operator.as_str()).collect()
    }

    #[test]
    fn test_full_sequence_order() {
        let ops = draw_rectangle(&options());
        assert_eq!(
            operator_names(&ops),
            vec![
                "q", "rg", "G", "w", "d", "cm", "cm", "cm", "m", "l", "l", "l", "h", "B", "Q"
            ]
        );
    }

    #[test]
    fn test_path_traced_in_local_coordinates() {
        let ops = draw_rectangle(&options());
        let coords: Vec<Vec<f32>> = ops
            .iter()
            .filter(|op| op.operator == "m" || op.operator == "l")
            .map(|op| {
                op.operands
                    .iter()
                    .map(|operand| match operand {
                        lopdf::Object::Real(value) => *value,
                        lopdf::Object::Integer(value) => *value as f32,
                        other => panic!("unexpected operand {:?}", other),
                    })
                    .collect()
            })
            .collect();
        assert_eq!(
            coords,
            vec![
                vec![0.0, 0.0],
                vec![0.0, 40.0],
                vec![100.0, 40.0],
                vec![100.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_no_colors_closes_without_painting() {
        let ops = draw_rectangle(&DrawRectangleOptions {
            color: None,
            border_color: None,
            ..options()
        });
        let names = operator_names(&ops);
        // Path close plus the close-only terminal, then restore.
        assert_eq!(&names[names.len() - 3..], &["h", "h", "Q"]);
    }

    #[test]
    fn test_zero_width_rectangle_is_still_balanced() {
        let ops = draw_rectangle(&DrawRectangleOptions { width: 0.0, height: 0.0, ..options() });
        assert_eq!(ops.first().unwrap().operator, "q");
        assert_eq!(ops.last().unwrap().operator, "Q");
    }

    #[test]
    fn test_zero_border_width_fills_only() {
        let ops = draw_rectangle(&DrawRectangleOptions { border_width: 0.0, ..options() });
        let names = operator_names(&ops);
        assert!(names.contains(&"f"));
        assert!(!names.contains(&"B"));
    }
}
