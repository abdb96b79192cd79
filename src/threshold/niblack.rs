use crate::Float;
use crate::image::{Image, border::BorderMode};
use super::local_statistics::LocalStatistics;

/// Niblack's rule `mean + k*std_dev` over each window. The rule is linear in
/// intensity, so `k` needs no rescaling between encodings.
pub fn threshold(image: &Image, window_size: usize, k: Float, border_mode: BorderMode) -> Image {
    let LocalStatistics { mean, std_dev } = LocalStatistics::new(&image.buffer, window_size, border_mode);
    Image {
        buffer: mean + std_dev*k,
        encoding: image.encoding
    }
}
