use serde::{de, Deserialize, Deserializer, Serialize};

/// A device color in one of the three PDF device color spaces.
///
/// Components are fractions in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Grayscale {
        gray: f32,
    },
    Rgb {
        red: f32,
        green: f32,
        blue: f32,
    },
    Cmyk {
        cyan: f32,
        magenta: f32,
        yellow: f32,
        key: f32,
    },
}

impl Color {
    pub fn grayscale(gray: f32) -> Self {
        Self::Grayscale { gray }
    }

    pub fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::Rgb { red, green, blue }
    }

    pub fn cmyk(cyan: f32, magenta: f32, yellow: f32, key: f32) -> Self {
        Self::Cmyk { cyan, magenta, yellow, key }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        if !s.starts_with('#') {
            return Err(format!("Color must start with #, got: {}", s));
        }
        let hex = &s[1..];

        let component = |value: u8| value as f32 / 255.0;

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color::rgb(component(r), component(g), component(b)))
            }
            6 => {
                // #RRGGBB format
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color::rgb(component(r), component(g), component(b)))
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::Rgb { red: 0.0, green: 0.0, blue: 0.0 }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Gray { gray: f32 },
            Rgb { red: f32, green: f32, blue: f32 },
            Cmyk { cyan: f32, magenta: f32, yellow: f32, key: f32 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Gray { gray } => Ok(Color::Grayscale { gray }),
            ColorDef::Rgb { red, green, blue } => Ok(Color::Rgb { red, green, blue }),
            ColorDef::Cmyk { cyan, magenta, yellow, key } => {
                Ok(Color::Cmyk { cyan, magenta, yellow, key })
            }
        }
    }
}
