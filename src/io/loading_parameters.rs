use crate::image::{grayscale::LumaWeights, image_encoding::ImageEncoding};
use crate::threshold::ThresholdMethod;

/// How a decoded image is turned into the grayscale buffer the thresholds run on.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct LoadingParameters {
    pub luma_weights: LumaWeights,
    pub encoding: ImageEncoding
}

impl LoadingParameters {
    pub fn for_method(method: &ThresholdMethod) -> LoadingParameters {
        LoadingParameters {
            luma_weights: method.default_luma_weights(),
            encoding: method.default_encoding()
        }
    }
}
