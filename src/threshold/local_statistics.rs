use na::DMatrix;
use rayon::prelude::*;

use crate::Float;
use crate::image::border::BorderMode;

/// Mean and standard deviation of every `window_size x window_size`
/// neighbourhood, from separable box sums of the values and their squares.
pub struct LocalStatistics {
    pub mean: DMatrix<Float>,
    pub std_dev: DMatrix<Float>
}

impl LocalStatistics {
    pub fn new(buffer: &DMatrix<Float>, window_size: usize, border_mode: BorderMode) -> LocalStatistics {
        let count = window_size as Float * window_size as Float;
        let sum = box_sums(buffer, window_size, border_mode);
        let sum_sq = box_sums(&buffer.component_mul(buffer), window_size, border_mode);

        let mean = sum.map(|s| s/count);
        let std_dev = sum_sq.zip_map(&mean, |s, m| (s/count - m*m).max(0.0).sqrt());

        LocalStatistics { mean, std_dev }
    }
}

// The border extension is per axis, so the 2D window sum is a row pass followed by a column pass.
fn box_sums(buffer: &DMatrix<Float>, window_size: usize, border_mode: BorderMode) -> DMatrix<Float> {
    let horizontal = box_sums_along_columns(&buffer.transpose(), window_size, border_mode).transpose();
    box_sums_along_columns(&horizontal, window_size, border_mode)
}

fn box_sums_along_columns(matrix: &DMatrix<Float>, window_size: usize, border_mode: BorderMode) -> DMatrix<Float> {
    let (rows, cols) = matrix.shape();
    let mut sums = DMatrix::<Float>::zeros(rows, cols);

    if rows == 0 || cols == 0 {
        return sums;
    }

    let window = window_size as i128;
    let radius = (window_size/2) as i128;

    // column major storage, one chunk per column
    sums.as_mut_slice().par_chunks_mut(rows)
        .zip(matrix.as_slice().par_chunks(rows))
        .for_each(|(target, source)| {
            let axis = ExtendedAxis::new(source, border_mode);
            for (y, value) in target.iter_mut().enumerate() {
                let start = y as i128 - radius;
                *value = axis.sum(start, start + window);
            }
        });

    sums
}

/// Prefix sums of one line, enough to sum any range of its border extension
/// in constant time. Reflect extensions are periodic, replicate extensions are
/// constant past either end, so no padded copy is ever built.
struct ExtendedAxis<'a> {
    values: &'a [Float],
    prefix: Vec<Float>,
    border_mode: BorderMode
}

impl<'a> ExtendedAxis<'a> {
    fn new(values: &'a [Float], border_mode: BorderMode) -> ExtendedAxis<'a> {
        let len = values.len();
        let samples: Vec<Float> = match border_mode {
            BorderMode::Replicate => values.to_vec(),
            BorderMode::Reflect => {
                let period = (2*(len - 1)).max(1);
                (0..period).map(|i| values[border_mode.extend_index(i as isize, len)]).collect()
            }
        };

        let mut prefix = Vec::with_capacity(samples.len() + 1);
        prefix.push(0.0);
        let mut acc = 0.0;
        for sample in samples {
            acc += sample;
            prefix.push(acc);
        }

        ExtendedAxis { values, prefix, border_mode }
    }

    /// Sum of the extended samples at indices `start..end`.
    fn sum(&self, start: i128, end: i128) -> Float {
        match self.border_mode {
            BorderMode::Replicate => {
                let len = self.values.len() as i128;
                let before = (end.min(0) - start).max(0);
                let after = (end - start.max(len)).max(0);
                let lo = start.clamp(0, len) as usize;
                let hi = end.clamp(0, len) as usize;
                before as Float*self.values[0]
                    + after as Float*self.values[self.values.len()-1]
                    + (self.prefix[hi] - self.prefix[lo])
            },
            BorderMode::Reflect => {
                let period = (self.prefix.len() - 1) as i128;
                let cycles = end.div_euclid(period) - start.div_euclid(period);
                let hi = end.rem_euclid(period) as usize;
                let lo = start.rem_euclid(period) as usize;
                cycles as Float*self.prefix[self.prefix.len()-1] + (self.prefix[hi] - self.prefix[lo])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use na::DMatrix;
    use super::{ExtendedAxis, LocalStatistics};
    use crate::image::border::BorderMode;

    #[test]
    fn window_of_one_is_identity() {
        let buffer = DMatrix::<f64>::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let stats = LocalStatistics::new(&buffer, 1, BorderMode::Reflect);
        assert_eq!(stats.mean, buffer);
        assert!(stats.std_dev.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn interior_window_matches_direct_computation() {
        let buffer = DMatrix::<f64>::from_fn(5, 5, |r, c| (r*5 + c) as f64);
        let stats = LocalStatistics::new(&buffer, 3, BorderMode::Replicate);

        let window = buffer.view((1,1),(3,3));
        let mean = window.mean();
        let variance = window.iter().map(|v| (v-mean).powi(2)).sum::<f64>()/9.0;

        assert!((stats.mean[(2,2)] - mean).abs() < 1e-12);
        assert!((stats.std_dev[(2,2)] - variance.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn reflect_border_at_corner() {
        // reflect padding around (0,0) of [[1,2],[3,4]] gives [[4,3,4],[2,1,2],[4,3,4]]
        let buffer = DMatrix::<f64>::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let stats = LocalStatistics::new(&buffer, 3, BorderMode::Reflect);
        assert!((stats.mean[(0,0)] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn axis_sums_match_explicit_extension() {
        let values = [1.0, 5.0, 2.0, 7.0];
        for border_mode in [BorderMode::Replicate, BorderMode::Reflect] {
            let axis = ExtendedAxis::new(&values, border_mode);
            for start in -11..9 {
                for len in 0..15 {
                    let expected: f64 = (start..start+len).map(|i| values[border_mode.extend_index(i, values.len())]).sum();
                    let sum = axis.sum(start as i128, (start + len) as i128);
                    assert!((sum - expected).abs() < 1e-9, "{:?} start {} len {}", border_mode, start, len);
                }
            }
        }
    }

    #[test]
    fn single_sample_axis() {
        let values = [3.0];
        for border_mode in [BorderMode::Replicate, BorderMode::Reflect] {
            let axis = ExtendedAxis::new(&values, border_mode);
            assert_eq!(axis.sum(-4, 5), 27.0);
        }
    }

    #[test]
    fn huge_window_does_not_pad() {
        let buffer = DMatrix::<f64>::from_element(4, 4, 0.5);
        for border_mode in [BorderMode::Replicate, BorderMode::Reflect] {
            let stats = LocalStatistics::new(&buffer, usize::MAX, border_mode);
            assert_eq!(stats.mean.shape(), (4, 4));
            assert!(stats.mean.iter().all(|&m| (m - 0.5).abs() < 1e-9));
            assert!(stats.std_dev.iter().all(|&s| s < 1e-6));
        }
    }
}
