use serde::{Deserialize, Serialize};

use crate::Float;

/// Value convention of a grayscale buffer. Threshold constants are calibrated
/// against one of these, so a buffer never changes convention implicitly.
#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageEncoding {
    /// 8-bit intensities in [0,255]
    U8,
    /// Floating point intensities in [0,1]
    Normalized
}

impl ImageEncoding {
    pub fn max_value(&self) -> Float {
        match self {
            ImageEncoding::U8 => 255.0,
            ImageEncoding::Normalized => 1.0
        }
    }

    /// Factor mapping a value in `self` to the same intensity in `target`.
    pub fn scale_to(&self, target: ImageEncoding) -> Float {
        target.max_value() / self.max_value()
    }

    pub fn to_gray(&self, value: Float) -> u8 {
        let scaled = value * ImageEncoding::U8.max_value() / self.max_value();
        scaled.round().clamp(0.0, 255.0) as u8
    }
}
