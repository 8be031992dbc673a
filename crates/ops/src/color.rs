use lopdf::content::Operation;
use scrawl_types::Color;

/// Expands a color into the fill-role color operation for its color space.
pub fn set_filling_color(color: &Color) -> Operation {
    match *color {
        Color::Grayscale { gray } => Operation::new("g", vec![gray.into()]),
        Color::Rgb { red, green, blue } => {
            Operation::new("rg", vec![red.into(), green.into(), blue.into()])
        }
        Color::Cmyk { cyan, magenta, yellow, key } => Operation::new(
            "k",
            vec![cyan.into(), magenta.into(), yellow.into(), key.into()],
        ),
    }
}

/// Expands a color into the stroke-role color operation for its color space.
pub fn set_stroking_color(color: &Color) -> Operation {
    match *color {
        Color::Grayscale { gray } => Operation::new("G", vec![gray.into()]),
        Color::Rgb { red, green, blue } => {
            Operation::new("RG", vec![red.into(), green.into(), blue.into()])
        }
        Color::Cmyk { cyan, magenta, yellow, key } => Operation::new(
            "K",
            vec![cyan.into(), magenta.into(), yellow.into(), key.into()],
        ),
    }
}
