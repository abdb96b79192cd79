use image_rs::{GrayImage, Luma};
use na::DMatrix;

use crate::{Error, Float, Result};
use crate::image::Image;

pub const FOREGROUND_VALUE: u8 = 255;
pub const BACKGROUND_VALUE: u8 = 0;

/// Two valued image, `true` marks foreground. Indexed `(row, col)`.
#[derive(Debug,Clone,PartialEq)]
pub struct BinaryImage {
    pub buffer: DMatrix<bool>
}

impl BinaryImage {
    pub fn shape(&self) -> (usize, usize) {
        self.buffer.shape()
    }

    pub fn is_foreground(&self, row: usize, col: usize) -> bool {
        self.buffer[(row,col)]
    }

    pub fn foreground_count(&self) -> usize {
        self.buffer.iter().filter(|&&v| v).count()
    }

    pub fn foreground_ratio(&self) -> Float {
        match self.buffer.len() {
            0 => 0.0,
            n => self.foreground_count() as Float / n as Float
        }
    }

    pub fn to_image(&self) -> GrayImage {
        let (rows, cols) = self.shape();
        GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
            match self.buffer[(y as usize, x as usize)] {
                true => Luma([FOREGROUND_VALUE]),
                false => Luma([BACKGROUND_VALUE])
            }
        })
    }
}

/// A pixel is foreground iff it is strictly greater than its threshold.
pub fn binarize(image: &Image, threshold: &Image) -> Result<BinaryImage> {
    if image.shape() != threshold.shape() {
        return Err(Error::ShapeMismatch { expected: image.shape(), found: threshold.shape() });
    }
    if image.encoding != threshold.encoding {
        return Err(Error::InvalidParameter {
            name: "threshold",
            reason: format!("encoding {:?} does not match image encoding {:?}", threshold.encoding, image.encoding)
        });
    }

    Ok(BinaryImage {
        buffer: image.buffer.zip_map(&threshold.buffer, |pixel, t| pixel > t)
    })
}
