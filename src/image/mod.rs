use image_rs::{DynamicImage, GrayImage, Luma};
use na::DMatrix;

use crate::Float;
use self::{grayscale::LumaWeights, image_encoding::ImageEncoding};

pub mod border;
pub mod grayscale;
pub mod image_encoding;

/// Single channel image. `buffer` is indexed `(row, col)`, i.e. `(y, x)`.
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub encoding: ImageEncoding
}

impl Image {

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.buffer.shape()
    }

    pub fn size(&self) -> usize {
        self.buffer.ncols()*self.buffer.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn empty(width: usize, height: usize, encoding: ImageEncoding) -> Image {
        let buffer = DMatrix::<Float>::zeros(height,width);
        Image{ buffer, encoding }
    }

    pub fn from_element(width: usize, height: usize, value: Float, encoding: ImageEncoding) -> Image {
        let buffer = DMatrix::<Float>::from_element(height,width,value);
        Image{ buffer, encoding }
    }

    pub fn from_matrix(matrix: &DMatrix<Float>, encoding: ImageEncoding) -> Image {
        Image{ buffer: matrix.clone(), encoding }
    }

    /// Collapses a decoded image to luminance. Alpha is dropped. In the `U8`
    /// encoding the luminance is rounded to whole intensities like any 8-bit
    /// gray conversion would be; `Normalized` keeps the full precision.
    pub fn from_dynamic_image(image: &DynamicImage, weights: LumaWeights, encoding: ImageEncoding) -> Image {
        let rgb = image.to_rgb32f();
        let (width, height) = rgb.dimensions();
        let max = encoding.max_value();

        let buffer = DMatrix::<Float>::from_fn(height as usize, width as usize, |r, c| {
            let pixel = rgb.get_pixel(c as u32, r as u32);
            let [red, green, blue] = pixel.0.map(|v| v as Float);
            let luma = weights.luma(red, green, blue)*max;
            match encoding {
                ImageEncoding::U8 => luma.round(),
                ImageEncoding::Normalized => luma
            }
        });

        Image{ buffer, encoding }
    }

    pub fn to_encoding(&self, encoding: ImageEncoding) -> Image {
        if encoding == self.encoding {
            return self.clone();
        }
        Image{ buffer: &self.buffer * self.encoding.scale_to(encoding), encoding }
    }

    pub fn to_image(&self) -> GrayImage {
        Image::matrix_to_image(&self.buffer, self.encoding)
    }

    pub fn min(&self) -> Float {
        self.buffer.min()
    }

    pub fn max(&self) -> Float {
        self.buffer.max()
    }

    fn matrix_to_image(matrix: &DMatrix<Float>, encoding: ImageEncoding) -> GrayImage {
        let (rows, cols) = matrix.shape();
        GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
            Luma([encoding.to_gray(matrix[(y as usize, x as usize)])])
        })
    }
}
