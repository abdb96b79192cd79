use std::path::PathBuf;

use image_rs::{imageops::{self, FilterType}, DynamicImage, RgbImage};
use log::info;
use serde::{Deserialize, Serialize};

use crate::{Error, Float, Result};
use crate::binarize::BinaryImage;

pub mod plot;
pub mod terminal;

pub const ORIGINAL_TITLE: &str = "Original Image";

/// Where the before/after comparison goes.
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize,Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputSink {
    /// Two panels drawn in the terminal, closed with q or Enter
    #[default]
    Display,
    /// Two panel PNG
    File { path: PathBuf },
    None
}

/// Shows `original` next to `binary`, titled with `method_title`.
pub fn render(original: &DynamicImage, binary: &BinaryImage, method_title: &str, sink: &OutputSink) -> Result<()> {
    let original_rgb = original.to_rgb8();
    let binary_rgb = DynamicImage::ImageLuma8(binary.to_image()).to_rgb8();

    match sink {
        OutputSink::Display => {
            terminal::show_side_by_side(&original_rgb, &binary_rgb, ORIGINAL_TITLE, method_title)
                .map_err(|e| Error::Render(e.to_string()))
        },
        OutputSink::File { path } => {
            plot::draw_side_by_side(&original_rgb, &binary_rgb, ORIGINAL_TITLE, method_title, path)
                .map_err(|e| Error::Render(e.to_string()))?;
            info!("wrote comparison to {}", path.display());
            Ok(())
        },
        OutputSink::None => Ok(())
    }
}

/// Largest size with the aspect ratio of `(width, height)` that fits into `(max_width, max_height)`.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let scale = (max_width as Float / width as Float).min(max_height as Float / height as Float);
    let fitted_width = ((width as Float*scale).floor() as u32).max(1);
    let fitted_height = ((height as Float*scale).floor() as u32).max(1);
    (fitted_width, fitted_height)
}

pub(crate) fn resize_panel(image: &RgbImage, width: u32, height: u32, filter: FilterType) -> RgbImage {
    match image.dimensions() == (width, height) {
        true => image.clone(),
        false => imageops::resize(image, width, height, filter)
    }
}
