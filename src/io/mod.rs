use std::path::Path;

use image_rs::{io::Reader, DynamicImage, GrayImage, ImageFormat};
use log::debug;

use crate::{Error, Result};
use crate::image::{Image, grayscale::LumaWeights, image_encoding::ImageEncoding};

pub mod loading_parameters;

/// Decodes the file at `file_path`, the format is sniffed from its contents.
pub fn load_image(file_path: &Path) -> Result<DynamicImage> {
    let io_error = |source| Error::Io { path: file_path.to_path_buf(), source };
    let reader = Reader::open(file_path).map_err(io_error)?
        .with_guessed_format().map_err(io_error)?;
    let image = reader.decode().map_err(|source| Error::Decode { path: file_path.to_path_buf(), source })?;
    debug!("decoded {} ({}x{}, {:?})", file_path.display(), image.width(), image.height(), image.color());
    Ok(image)
}

pub fn load_image_as_gray(file_path: &Path, weights: LumaWeights, encoding: ImageEncoding) -> Result<Image> {
    let image = load_image(file_path)?;
    Ok(Image::from_dynamic_image(&image, weights, encoding))
}

pub fn save_gray_image(image: &GrayImage, file_path: &Path) -> Result<()> {
    image.save_with_format(file_path, ImageFormat::Png)
        .map_err(|source| Error::Encode { path: file_path.to_path_buf(), source })
}
