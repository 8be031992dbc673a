pub mod angle;
pub mod color;
pub mod geometry;
pub mod line;

pub use angle::Angle;
pub use color::Color;
pub use geometry::Point;
pub use line::{DashPattern, LineCapStyle};
