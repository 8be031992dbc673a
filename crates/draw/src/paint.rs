use lopdf::content::Operation;
use scrawl_ops as ops;
use scrawl_types::Color;

/// Selects the single terminal paint operation for a traced shape.
///
/// Priority order:
/// 1. fill color with a non-zero border width paints fill-and-stroke,
/// 2. fill color alone fills,
/// 3. border color alone strokes,
/// 4. neither closes the path and discards it.
///
/// A zero border width counts as absent, so a shape with both colors but no
/// border width fills without stroking.
pub fn paint_operation(
    fill: Option<&Color>,
    border_color: Option<&Color>,
    border_width: f32,
) -> Operation {
    if fill.is_some() && border_width != 0.0 {
        ops::fill_and_stroke()
    } else if fill.is_some() {
        ops::fill()
    } else if border_color.is_some() {
        ops::stroke()
    } else {
        ops::close_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILL: Option<&Color> = Some(&Color::Grayscale { gray: 0.2 });
    const BORDER: Option<&Color> = Some(&Color::Grayscale { gray: 0.8 });

    #[test]
    fn test_fill_and_border_width_selects_combined_paint() {
        assert_eq!(paint_operation(FILL, BORDER, 1.0).operator, "B");
        assert_eq!(paint_operation(FILL, None, 1.0).operator, "B");
    }

    #[test]
    fn test_fill_without_border_width_fills_only() {
        assert_eq!(paint_operation(FILL, None, 0.0).operator, "f");
        assert_eq!(paint_operation(FILL, BORDER, 0.0).operator, "f");
    }

    #[test]
    fn test_border_color_alone_strokes() {
        assert_eq!(paint_operation(None, BORDER, 0.0).operator, "S");
        assert_eq!(paint_operation(None, BORDER, 3.0).operator, "S");
    }

    #[test]
    fn test_neither_closes_the_path() {
        assert_eq!(paint_operation(None, None, 0.0).operator, "h");
        assert_eq!(paint_operation(None, None, 2.0).operator, "h");
    }
}
