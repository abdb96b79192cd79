use image_rs::DynamicImage;
use log::info;

use crate::Result;
use crate::binarize::{binarize, BinaryImage};
use crate::config::BinarizationConfig;
use crate::image::Image;
use crate::io;
use crate::threshold::compute_threshold_with_border;
use crate::visualize;

/// Every intermediate of a single run.
#[derive(Debug,Clone)]
pub struct BinarizationResult {
    pub original: DynamicImage,
    pub gray: Image,
    pub window_size: usize,
    pub threshold: Image,
    pub binary: BinaryImage
}

/// Loads `config.input_path` and binarizes it without presenting anything.
pub fn process(config: &BinarizationConfig) -> Result<BinarizationResult> {
    config.validate()?;
    let original = io::load_image(&config.input_path)?;
    process_image(original, config)
}

/// Binarizes an already decoded image. `config.input_path` is ignored.
pub fn process_image(original: DynamicImage, config: &BinarizationConfig) -> Result<BinarizationResult> {
    config.validate()?;
    let loading_parameters = config.loading_parameters();
    let gray = Image::from_dynamic_image(&original, loading_parameters.luma_weights, loading_parameters.encoding);
    info!("grayscale {}x{} ({:?}, {:?})", gray.width(), gray.height(), loading_parameters.luma_weights, loading_parameters.encoding);

    let window_size = config.window_size_for_height(gray.height())?;
    info!("{} with window size {}", config.method.title(), window_size);

    let threshold = compute_threshold_with_border(&gray, window_size, &config.method, config.border_mode())?;
    let binary = binarize(&gray, &threshold)?;
    info!("foreground ratio {:.3}", binary.foreground_ratio());

    Ok(BinarizationResult { original, gray, window_size, threshold, binary })
}

/// Full run: load, binarize, optionally save the binary image, then hand both
/// images to the configured output sink.
pub fn run(config: &BinarizationConfig) -> Result<BinarizationResult> {
    let result = process(config)?;

    if let Some(path) = &config.save_binary {
        io::save_gray_image(&result.binary.to_image(), path)?;
        info!("wrote binary image to {}", path.display());
    }

    visualize::render(&result.original, &result.binary, config.method.title(), &config.output_sink)?;
    Ok(result)
}
