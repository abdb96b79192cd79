use rayon::prelude::*;

use crate::image::{Image, border::BorderMode};
use self::{kernel::Kernel, gauss_kernel::GaussKernel1D};

pub mod gauss_kernel;
pub mod kernel;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum FilterDirection {
    HORIZONTAL,
    VERTICAL
}

/// Convolves every row (HORIZONTAL) or column (VERTICAL) of `source` with a
/// 1D kernel. Samples outside the image come from `border_mode`.
pub fn filter_1d_convolution(source: &Image, filter_direction: FilterDirection, filter_kernel: &(dyn Kernel + Sync), border_mode: BorderMode) -> Image {
    let kernel = filter_kernel.kernel();
    let step = filter_kernel.step();
    let kernel_radius_signed = filter_kernel.radius() as isize;
    let normalizing_constant = filter_kernel.normalizing_constant();

    let buffer = &source.buffer;
    let width = buffer.ncols();
    let height = buffer.nrows();
    let mut target = Image::empty(width, height, source.encoding);

    if target.is_empty() {
        return target;
    }

    // column major storage, one chunk per image column
    target.buffer.as_mut_slice().par_chunks_mut(height).enumerate().for_each(|(x, column)| {
        for (y, target_value) in column.iter_mut().enumerate() {
            let mut acc = 0.0;
            for kernel_idx in (-kernel_radius_signed..kernel_radius_signed+1).step_by(step) {
                let sample_value = match filter_direction {
                    FilterDirection::HORIZONTAL => {
                        let sample_idx = border_mode.extend_index(x as isize + kernel_idx, width);
                        buffer[(y,sample_idx)]
                    },
                    FilterDirection::VERTICAL => {
                        let sample_idx = border_mode.extend_index(y as isize + kernel_idx, height);
                        buffer[(sample_idx,x)]
                    }
                };
                let kernel_value = kernel[(0,(kernel_idx + kernel_radius_signed) as usize)];
                acc += sample_value*kernel_value;
            }
            *target_value = acc/normalizing_constant;
        }
    });

    target
}

pub fn gaussian_2_d_convolution(image: &Image, filter_kernel: &GaussKernel1D, border_mode: BorderMode) -> Image {
    let blur_hor = filter_1d_convolution(image, FilterDirection::HORIZONTAL, filter_kernel, border_mode);
    filter_1d_convolution(&blur_hor, FilterDirection::VERTICAL, filter_kernel, border_mode)
}
