//! Drawing primitives compiled to ordered PDF content-stream operations.
//!
//! Each entry point maps one declarative drawing request onto the exact
//! operation sequence that reproduces it on a page: a bracketing
//! save/restore pair, the optional external graphics state, color and line
//! style, the affine transform steps (always translate, rotate, scale, skew,
//! in that order), the shape or text itself, and a single terminal paint
//! operation.
//!
//! Every call is a pure function of its options: no state is shared between
//! calls and the same request always compiles to the same sequence. Inputs
//! are not validated; degenerate geometry (a zero-width rectangle, an empty
//! line list) still compiles to a balanced, structurally valid sequence.

mod ellipse;
mod line;
mod object;
mod paint;
mod rectangle;
mod svg;
mod text;

pub use ellipse::{draw_ellipse, draw_ellipse_path, DrawEllipseOptions, KAPPA};
pub use line::{draw_line, DrawLineOptions};
pub use object::{draw_image, draw_page, DrawImageOptions, DrawPageOptions};
pub use paint::paint_operation;
pub use rectangle::{draw_rectangle, DrawRectangleOptions};
pub use svg::{draw_svg_path, draw_svg_path_with, DrawSvgPathOptions};
pub use text::{draw_lines_of_text, draw_text, DrawLinesOfTextOptions, DrawTextOptions};
