use crate::{Error, Result};

/// Image height is divided by this to get the side length of the local window.
pub const WINDOW_DIVISOR: usize = 20;

/// Odd window size for an image of the given height, see [`window_size_with_divisor`].
pub fn window_size(height: usize) -> usize {
    make_odd(height / WINDOW_DIVISOR)
}

/// `height / divisor` truncated, bumped by one if even. No lower bound is
/// applied, heights below `2*divisor` give a window of 1.
pub fn window_size_with_divisor(height: usize, divisor: usize) -> Result<usize> {
    match divisor {
        0 => Err(Error::InvalidParameter { name: "window_divisor", reason: "must be positive".to_string() }),
        _ => Ok(make_odd(height / divisor))
    }
}

fn make_odd(size: usize) -> usize {
    match size % 2 {
        0 => size + 1,
        _ => size
    }
}
