use serde::{Deserialize, Serialize};

/// An angle tagged with its unit.
///
/// Drawing entry points accept either unit and normalize to radians exactly
/// once, at their boundary. Transform operations only ever see radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Angle {
    Degrees(f32),
    Radians(f32),
}

impl Angle {
    pub fn to_radians(self) -> f32 {
        match self {
            Angle::Degrees(degrees) => degrees.to_radians(),
            Angle::Radians(radians) => radians,
        }
    }

    pub fn to_degrees(self) -> f32 {
        match self {
            Angle::Degrees(degrees) => degrees,
            Angle::Radians(radians) => radians.to_degrees(),
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::Degrees(0.0)
    }
}
