//! Declarative drawing primitives compiled to PDF content-stream operations.
//!
//! `scrawl` turns high-level drawing requests (text runs, lines, rectangles,
//! ellipses, images, embedded pages and SVG paths) into ordered
//! [`lopdf::content::Operation`] sequences ready to be encoded into a page
//! content stream. It deliberately stops there: resource dictionaries,
//! fonts, document assembly and serialization belong to the caller.
//!
//! ```
//! use scrawl::{draw_line, Color, DrawLineOptions, Point};
//!
//! let ops = draw_line(&DrawLineOptions {
//!     start: Point::new(72.0, 72.0),
//!     end: Point::new(300.0, 72.0),
//!     thickness: 2.0,
//!     color: Some(Color::rgb(0.8, 0.1, 0.1)),
//!     line_cap: None,
//!     dash: None,
//!     graphics_state: None,
//! });
//! assert_eq!(ops.first().unwrap().operator, "q");
//! assert_eq!(ops.last().unwrap().operator, "Q");
//! ```

pub use scrawl_draw::{
    draw_ellipse, draw_ellipse_path, draw_image, draw_line, draw_lines_of_text, draw_page,
    draw_rectangle, draw_svg_path, draw_svg_path_with, draw_text, paint_operation,
    DrawEllipseOptions, DrawImageOptions, DrawLineOptions, DrawLinesOfTextOptions,
    DrawPageOptions, DrawRectangleOptions, DrawSvgPathOptions, DrawTextOptions, KAPPA,
};
pub use scrawl_ops::PathTranslator;
pub use scrawl_svg_path::{parse_path_data, PathDataError, PathSegment, SvgPathTranslator};
pub use scrawl_types::{Angle, Color, DashPattern, LineCapStyle, Point};

/// Low-level operator constructors, re-exported for callers that compose
/// their own sequences.
pub use scrawl_ops as ops;

pub use lopdf;
