//! Local adaptive binarization of grayscale images.
//!
//! An image is decoded, converted to a single luminance channel, a per-pixel
//! threshold surface is estimated from a square neighbourhood (Gaussian
//! weighted mean or Niblack's mean/deviation rule) and every pixel strictly
//! above its threshold becomes foreground.
//!
//! ```rust,ignore
//! use adaptive_binarize::{config::BinarizationConfig, threshold::ThresholdMethod};
//!
//! let config = BinarizationConfig::new("blurred.png", ThresholdMethod::niblack());
//! let result = adaptive_binarize::run(&config)?;
//! println!("foreground ratio {}", result.binary.foreground_ratio());
//! ```

extern crate image as image_rs;
extern crate nalgebra as na;

pub mod binarize;
pub mod config;
pub mod error;
pub mod filter;
pub mod image;
pub mod io;
pub mod pipeline;
pub mod threshold;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub use crate::binarize::{binarize, BinaryImage};
pub use crate::error::{Error, Result};
pub use crate::pipeline::{process, process_image, run, BinarizationResult};
pub use crate::threshold::{compute_threshold, window_size, window_size_with_divisor, ThresholdMethod, WINDOW_DIVISOR};
