use serde::{Deserialize, Serialize};

use crate::Float;

/// Weights used to collapse RGB into a single luminance channel.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LumaWeights {
    /// ITU-R BT.601, as used by most 8-bit pipelines
    Rec601,
    /// ITU-R BT.709 primaries
    Rec709
}

impl LumaWeights {
    pub fn coefficients(&self) -> [Float; 3] {
        match self {
            LumaWeights::Rec601 => [0.299, 0.587, 0.114],
            LumaWeights::Rec709 => [0.2125, 0.7154, 0.0721]
        }
    }

    pub fn luma(&self, r: Float, g: Float, b: Float) -> Float {
        let [w_r, w_g, w_b] = self.coefficients();
        w_r*r + w_g*g + w_b*b
    }
}
