use crate::Float;
use crate::filter::{gaussian_2_d_convolution, gauss_kernel::GaussKernel1D};
use crate::image::{Image, border::BorderMode, image_encoding::ImageEncoding};

/// Gaussian weighted mean of each window minus `c`. `c` is expressed in 8-bit
/// intensities and rescaled to the image's encoding. The mean is kept in floating
/// point, not rounded to 8-bit first, so pixels within one intensity of it can
/// differ from a blur computed on 8-bit buffers.
pub fn threshold(image: &Image, window_size: usize, c: Float, border_mode: BorderMode) -> Image {
    let kernel = GaussKernel1D::for_window(window_size);
    let offset = c*ImageEncoding::U8.scale_to(image.encoding);
    let mut weighted_mean = gaussian_2_d_convolution(image, &kernel, border_mode);
    weighted_mean.buffer.add_scalar_mut(-offset);
    weighted_mean
}
