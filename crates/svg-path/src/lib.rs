//! SVG path-data translation into PDF path-construction operations.
//!
//! Covers the SVG 1.1 path commands (`M/m L/l H/h V/v C/c S/s Q/q T/t A/a
//! Z/z`) with repeated coordinate groups, implicit line-tos after a move,
//! and compact arc flags. Quadratic curves and elliptical arcs are
//! normalized to cubic Beziers so the output needs nothing beyond the four
//! path operators `m`, `l`, `c` and `h`.

mod arc;
mod parser;

pub use parser::{parse_path_data, PathDataError, PathSegment};

use lopdf::content::Operation;
use scrawl_ops::{append_bezier_curve, close_path, line_to, move_to, PathTranslator};

/// Translates path-description text into path-construction operations.
///
/// Malformed input is not an error at this layer: the operations for the
/// parseable prefix are returned and the offending tail is logged. Use
/// [`parse_path_data`] to surface the failure instead.
pub fn path_to_operations(path: &str) -> Vec<Operation> {
    let (segments, error) = parser::parse_prefix(path);
    if let Some(error) = &error {
        log::warn!("ignoring malformed tail of path data: {error}");
    }
    segments.iter().map(segment_to_operation).collect()
}

fn segment_to_operation(segment: &PathSegment) -> Operation {
    match *segment {
        PathSegment::MoveTo(x, y) => move_to(x, y),
        PathSegment::LineTo(x, y) => line_to(x, y),
        PathSegment::CurveTo(x1, y1, x2, y2, x, y) => append_bezier_curve(x1, y1, x2, y2, x, y),
        PathSegment::Close => close_path(),
    }
}

/// The default [`PathTranslator`] used by the drawing primitives.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgPathTranslator;

impl PathTranslator for SvgPathTranslator {
    fn path_to_operations(&self, path: &str) -> Vec<Operation> {
        path_to_operations(path)
    }
}
