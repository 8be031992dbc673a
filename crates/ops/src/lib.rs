//! Pure constructors for PDF content-stream operations.
//!
//! Every function here builds exactly one [`lopdf::content::Operation`] from
//! its arguments and never inspects or mutates operations after creation.
//! Sequencing them into meaningful drawings is the job of `scrawl-draw`.

mod color;
mod operators;
mod traits;

pub use color::{set_filling_color, set_stroking_color};
pub use operators::*;
pub use traits::PathTranslator;
