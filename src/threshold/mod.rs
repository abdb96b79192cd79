use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Float, Error, Result};
use crate::image::{Image, border::BorderMode, grayscale::LumaWeights, image_encoding::ImageEncoding};

pub mod gaussian_mean;
pub mod local_statistics;
pub mod niblack;
pub mod window_size;

pub use self::window_size::{window_size, window_size_with_divisor, WINDOW_DIVISOR};

pub const DEFAULT_GAUSSIAN_C: Float = 2.0;
pub const DEFAULT_NIBLACK_K: Float = 0.5;

/// Local statistic used to build the threshold surface, together with its constant.
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThresholdMethod {
    /// Gaussian weighted window mean minus `c`. `c` is given in 8-bit intensities.
    GaussianMean { c: Float },
    /// Window mean plus `k` times the window standard deviation. Some
    /// implementations subtract instead (`mean - k*std_dev`), a negative `k`
    /// reproduces those.
    Niblack { k: Float }
}

impl ThresholdMethod {
    pub fn gaussian_mean() -> ThresholdMethod {
        ThresholdMethod::GaussianMean { c: DEFAULT_GAUSSIAN_C }
    }

    pub fn niblack() -> ThresholdMethod {
        ThresholdMethod::Niblack { k: DEFAULT_NIBLACK_K }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ThresholdMethod::GaussianMean { .. } => "Adaptive Gaussian Thresholding",
            ThresholdMethod::Niblack { .. } => "Niblack's Binarization"
        }
    }

    pub fn default_border_mode(&self) -> BorderMode {
        match self {
            ThresholdMethod::GaussianMean { .. } => BorderMode::Replicate,
            ThresholdMethod::Niblack { .. } => BorderMode::Reflect
        }
    }

    pub fn default_luma_weights(&self) -> LumaWeights {
        match self {
            ThresholdMethod::GaussianMean { .. } => LumaWeights::Rec601,
            ThresholdMethod::Niblack { .. } => LumaWeights::Rec709
        }
    }

    pub fn default_encoding(&self) -> ImageEncoding {
        match self {
            ThresholdMethod::GaussianMean { .. } => ImageEncoding::U8,
            ThresholdMethod::Niblack { .. } => ImageEncoding::Normalized
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (name, value) = match self {
            ThresholdMethod::GaussianMean { c } => ("c", *c),
            ThresholdMethod::Niblack { k } => ("k", *k)
        };
        match value.is_finite() {
            true => Ok(()),
            false => Err(Error::InvalidParameter { name, reason: format!("{} is not a finite number", value) })
        }
    }
}

impl Default for ThresholdMethod {
    fn default() -> ThresholdMethod {
        ThresholdMethod::gaussian_mean()
    }
}

/// Window sizes must be odd and at least 1. Windows larger than the image are
/// accepted, the border extension supplies the missing samples.
pub fn validate_window_size(window_size: usize) -> Result<()> {
    match window_size % 2 {
        1 => Ok(()),
        _ => Err(Error::InvalidWindowSize { window_size })
    }
}

/// Largest window accepted for a `rows x cols` image: a radius of twice the
/// longest side. Wider windows only add more folded copies of the border.
pub fn max_window_size(rows: usize, cols: usize) -> usize {
    rows.max(cols).saturating_mul(4).saturating_add(1)
}

/// [`validate_window_size`] plus the upper bound of [`max_window_size`].
pub fn validate_window_size_for_shape(window_size: usize, rows: usize, cols: usize) -> Result<()> {
    validate_window_size(window_size)?;
    match window_size <= max_window_size(rows, cols) {
        true => Ok(()),
        false => Err(Error::InvalidWindowSize { window_size })
    }
}

/// Per pixel threshold surface with the same shape and encoding as `image`,
/// using the method's default border handling.
pub fn compute_threshold(image: &Image, window_size: usize, method: &ThresholdMethod) -> Result<Image> {
    compute_threshold_with_border(image, window_size, method, method.default_border_mode())
}

pub fn compute_threshold_with_border(image: &Image, window_size: usize, method: &ThresholdMethod, border_mode: BorderMode) -> Result<Image> {
    validate_window_size(window_size)?;
    method.validate()?;
    if image.is_empty() {
        return Err(Error::EmptyImage);
    }

    let (rows, cols) = image.shape();
    validate_window_size_for_shape(window_size, rows, cols)?;
    if window_size > rows.max(cols) {
        debug!("window size {} exceeds image dimensions {}x{}, relying on {:?} border", window_size, cols, rows, border_mode);
    }

    let threshold = match *method {
        ThresholdMethod::GaussianMean { c } => gaussian_mean::threshold(image, window_size, c, border_mode),
        ThresholdMethod::Niblack { k } => niblack::threshold(image, window_size, k, border_mode)
    };

    debug!("{} threshold surface in [{}, {}]", method.title(), threshold.min(), threshold.max());
    Ok(threshold)
}
