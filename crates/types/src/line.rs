use serde::{Deserialize, Serialize};

/// Line cap style for stroked paths.
///
/// The discriminants are the operand values of the `J` operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineCapStyle {
    #[default]
    Butt,
    Round,
    Projecting,
}

impl LineCapStyle {
    pub fn operand(self) -> i64 {
        match self {
            LineCapStyle::Butt => 0,
            LineCapStyle::Round => 1,
            LineCapStyle::Projecting => 2,
        }
    }
}

/// A stroke dash pattern: on/off segment lengths plus a phase offset.
///
/// The default empty pattern draws solid lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub array: Vec<f32>,
    pub phase: f32,
}

impl DashPattern {
    pub fn new(array: Vec<f32>, phase: f32) -> Self {
        Self { array, phase }
    }

    pub fn solid() -> Self {
        Self::default()
    }

    pub fn dashed(on: f32, off: f32) -> Self {
        Self { array: vec![on, off], phase: 0.0 }
    }
}
