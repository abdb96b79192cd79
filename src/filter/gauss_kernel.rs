use na::DMatrix;
use crate::{Float,float};
use float::consts::PI;
use super::kernel::Kernel;

// Binomial taps used for small odd windows instead of sampling the gaussian.
const SMALL_GAUSSIAN_TAPS: [&[Float]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125]
];

pub struct GaussKernel1D {
    kernel: DMatrix<Float>,
    step: usize,
    normalizing_constant: Float
}

impl GaussKernel1D {
    fn sample(mean: Float, std: Float, x:Float) -> Float {
        let exponent = (-0.5*((x-mean)/std).powi(2)).exp();
        let factor = 1.0/(std*(2.0*PI).sqrt());
        factor*exponent
    }

    pub fn new(mean: Float, std: Float, step: usize, radius: usize) -> GaussKernel1D {
        assert!(step > 0);
        assert_eq!(radius%step,0);

        let end = radius as isize;
        let taps = (-end..=end).step_by(step).map(|x| GaussKernel1D::sample(mean,std,x as Float)).collect::<Vec<Float>>();
        GaussKernel1D::from_taps(taps, step)
    }

    /// Kernel spanning a full `window_size` with the sigma heuristic
    /// `0.3*((window_size-1)*0.5 - 1) + 0.8`. Windows up to 7 use fixed binomial taps.
    pub fn for_window(window_size: usize) -> GaussKernel1D {
        assert!(window_size%2 == 1, "window size {} must be odd", window_size);

        match SMALL_GAUSSIAN_TAPS.get(window_size/2) {
            Some(taps) => GaussKernel1D::from_taps(taps.to_vec(), 1),
            None => GaussKernel1D::new(0.0, GaussKernel1D::sigma_for_window(window_size), 1, window_size/2)
        }
    }

    pub fn sigma_for_window(window_size: usize) -> Float {
        0.3*((window_size as Float - 1.0)*0.5 - 1.0) + 0.8
    }

    fn from_taps(taps: Vec<Float>, step: usize) -> GaussKernel1D {
        let normalizing_constant = taps.iter().sum();
        GaussKernel1D {
            kernel: DMatrix::from_vec(1,taps.len(),taps),
            step,
            normalizing_constant
        }
    }
}

impl Kernel for GaussKernel1D {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }

    fn step(&self) -> usize {
        self.step
    }

    fn normalizing_constant(&self) -> Float {
        self.normalizing_constant
    }
}
