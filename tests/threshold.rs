extern crate nalgebra as na;

use na::DMatrix;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use adaptive_binarize::image::{Image, border::BorderMode, image_encoding::ImageEncoding};
use adaptive_binarize::threshold::{compute_threshold_with_border, max_window_size};
use adaptive_binarize::{binarize, compute_threshold, Error, ThresholdMethod};

fn random_image(width: usize, height: usize, encoding: ImageEncoding, seed: u64) -> Image {
    let mut rng = SmallRng::seed_from_u64(seed);
    let max = encoding.max_value();
    let buffer = DMatrix::<f64>::from_fn(height, width, |_, _| rng.gen_range(0.0..max));
    Image::from_matrix(&buffer, encoding)
}

#[test]
fn gaussian_constant_image_is_all_foreground() {
    let image = Image::from_element(50, 40, 100.0, ImageEncoding::U8);
    let threshold = compute_threshold(&image, 21, &ThresholdMethod::GaussianMean { c: 2.0 }).unwrap();

    assert!(threshold.buffer.iter().all(|&t| (t - 98.0).abs() < 1e-9));
    assert!(threshold.to_image().pixels().all(|p| p.0[0] == 98));
    let binary = binarize(&image, &threshold).unwrap();
    assert_eq!(binary.foreground_count(), 50*40);
}

#[test]
fn gaussian_constant_is_rescaled_for_normalized_images() {
    let image = Image::from_element(12, 12, 0.5, ImageEncoding::Normalized);
    let threshold = compute_threshold(&image, 5, &ThresholdMethod::GaussianMean { c: 2.0 }).unwrap();
    assert!(threshold.buffer.iter().all(|&t| (t - (0.5 - 2.0/255.0)).abs() < 1e-12));
    assert_eq!(threshold.encoding, ImageEncoding::Normalized);
}

#[test]
fn niblack_constant_image_is_all_background() {
    let image = Image::from_element(30, 30, 0.5, ImageEncoding::Normalized);
    let threshold = compute_threshold(&image, 7, &ThresholdMethod::Niblack { k: 0.5 }).unwrap();

    assert!(threshold.buffer.iter().all(|&t| t == 0.5));
    let binary = binarize(&image, &threshold).unwrap();
    assert_eq!(binary.foreground_count(), 0);
}

#[test]
fn niblack_adds_scaled_deviation() {
    // stripes of 0 and 1, every 3x3 window away from the border has two rows of one value
    let buffer = DMatrix::<f64>::from_fn(9, 9, |r, _| (r % 2) as f64);
    let image = Image::from_matrix(&buffer, ImageEncoding::Normalized);
    let threshold = compute_threshold(&image, 3, &ThresholdMethod::Niblack { k: 1.0 }).unwrap();

    // rows 3,4,5 -> values 1,0,1
    let mean: f64 = 2.0/3.0;
    let std_dev = (mean - mean*mean).sqrt();
    assert!((threshold.buffer[(4,4)] - (mean + std_dev)).abs() < 1e-9);
}

#[test]
fn negative_k_subtracts_the_deviation() {
    let buffer = DMatrix::<f64>::from_fn(9, 9, |r, _| (r % 2) as f64);
    let image = Image::from_matrix(&buffer, ImageEncoding::Normalized);
    let below = compute_threshold(&image, 3, &ThresholdMethod::Niblack { k: -0.5 }).unwrap();
    let above = compute_threshold(&image, 3, &ThresholdMethod::Niblack { k: 0.5 }).unwrap();

    let mean: f64 = 2.0/3.0;
    let std_dev = (mean - mean*mean).sqrt();
    assert!((below.buffer[(4,4)] - (mean - 0.5*std_dev)).abs() < 1e-9);
    // symmetric around the local mean
    assert!(((below.buffer[(4,4)] + above.buffer[(4,4)])/2.0 - mean).abs() < 1e-9);
}

#[test]
fn gaussian_mean_is_not_rounded() {
    let image = Image::from_matrix(&DMatrix::from_row_slice(1, 3, &[0.0, 1.0, 0.0]), ImageEncoding::U8);
    let threshold = compute_threshold(&image, 3, &ThresholdMethod::GaussianMean { c: 0.0 }).unwrap();

    // 0.25*0 + 0.5*1 + 0.25*0, kept as a fraction of an intensity
    assert_eq!(threshold.buffer[(0,1)], 0.5);
    assert_eq!(threshold.buffer[(0,0)], 0.25);
    let binary = binarize(&image, &threshold).unwrap();
    assert!(binary.is_foreground(0, 1));
    assert!(!binary.is_foreground(0, 0));
}

#[test]
fn window_of_one_tracks_the_pixel() {
    let image = random_image(10, 10, ImageEncoding::U8, 7);

    let gaussian = compute_threshold(&image, 1, &ThresholdMethod::GaussianMean { c: 2.0 }).unwrap();
    let expected = image.buffer.add_scalar(-2.0);
    assert!((gaussian.buffer - expected).amax() < 1e-9);

    let niblack = compute_threshold(&image, 1, &ThresholdMethod::Niblack { k: 0.5 }).unwrap();
    assert!((niblack.buffer - &image.buffer).amax() < 1e-9);
}

#[test]
fn small_solid_image_does_not_crash() {
    let image = Image::from_element(10, 10, 200.0, ImageEncoding::U8);
    let window = adaptive_binarize::window_size(image.height());
    assert_eq!(window, 1);

    for method in [ThresholdMethod::gaussian_mean(), ThresholdMethod::niblack()] {
        let threshold = compute_threshold(&image, window, &method).unwrap();
        let binary = binarize(&image, &threshold).unwrap();
        assert_eq!(binary.shape(), (10, 10));
    }
}

#[test]
fn window_larger_than_image() {
    let image = random_image(6, 4, ImageEncoding::Normalized, 11);
    for border_mode in [BorderMode::Replicate, BorderMode::Reflect] {
        for method in [ThresholdMethod::gaussian_mean(), ThresholdMethod::niblack()] {
            let threshold = compute_threshold_with_border(&image, 25, &method, border_mode).unwrap();
            assert_eq!(threshold.shape(), image.shape());
            assert!(threshold.buffer.iter().all(|t| t.is_finite()));
        }
    }
}

#[test]
fn large_window_on_constant_image_stays_constant() {
    let image = Image::from_element(5, 3, 0.25, ImageEncoding::Normalized);
    let threshold = compute_threshold(&image, 21, &ThresholdMethod::Niblack { k: 0.5 }).unwrap();
    assert!(threshold.buffer.iter().all(|&t| (t - 0.25).abs() < 1e-12));
}

#[test]
fn even_and_zero_windows_are_rejected() {
    let image = random_image(8, 8, ImageEncoding::U8, 3);
    for window in [0, 2, 20] {
        let result = compute_threshold(&image, window, &ThresholdMethod::gaussian_mean());
        assert!(matches!(result, Err(Error::InvalidWindowSize { window_size }) if window_size == window));
    }
}

#[test]
fn windows_beyond_the_limit_are_rejected() {
    let image = random_image(4, 4, ImageEncoding::Normalized, 9);
    assert_eq!(max_window_size(4, 4), 17);

    for method in [ThresholdMethod::gaussian_mean(), ThresholdMethod::niblack()] {
        assert!(compute_threshold(&image, 17, &method).is_ok());
        for window in [19, 8001, usize::MAX] {
            let result = compute_threshold(&image, window, &method);
            assert!(matches!(result, Err(Error::InvalidWindowSize { window_size }) if window_size == window));
        }
    }
}

#[test]
fn limit_follows_longest_side() {
    assert_eq!(max_window_size(1, 1), 5);
    assert_eq!(max_window_size(3, 100), 401);
    assert_eq!(max_window_size(usize::MAX, 1), usize::MAX);
}

#[test]
fn empty_image_is_rejected() {
    let image = Image::empty(0, 0, ImageEncoding::U8);
    let result = compute_threshold(&image, 3, &ThresholdMethod::niblack());
    assert!(matches!(result, Err(Error::EmptyImage)));
}

#[test]
fn non_finite_constants_are_rejected() {
    let image = random_image(8, 8, ImageEncoding::U8, 5);
    let result = compute_threshold(&image, 3, &ThresholdMethod::Niblack { k: f64::NAN });
    assert!(matches!(result, Err(Error::InvalidParameter { name: "k", .. })));
}

#[test]
fn threshold_matches_input_shape() {
    let shapes = [(1, 1), (1, 17), (17, 1), (33, 20), (64, 48)];
    for (i, &(width, height)) in shapes.iter().enumerate() {
        let image = random_image(width, height, ImageEncoding::U8, i as u64);
        for window in [1, 3, 9, 21] {
            for method in [ThresholdMethod::gaussian_mean(), ThresholdMethod::niblack()] {
                let threshold = compute_threshold(&image, window, &method).unwrap();
                assert_eq!(threshold.shape(), (height, width));
                assert_eq!(binarize(&image, &threshold).unwrap().shape(), (height, width));
            }
        }
    }
}

#[test]
fn gaussian_mean_stays_within_local_range() {
    let image = random_image(40, 30, ImageEncoding::U8, 42);
    let threshold = compute_threshold(&image, 9, &ThresholdMethod::GaussianMean { c: 0.0 }).unwrap();
    let (min, max) = (image.min(), image.max());
    assert!(threshold.buffer.iter().all(|&t| t >= min - 1e-9 && t <= max + 1e-9));
}

#[test]
fn replicate_border_matches_manual_convolution_at_corner() {
    // 3 tap kernel [0.25,0.5,0.25] on a replicate padded corner
    let buffer = DMatrix::<f64>::from_row_slice(2, 2, &[0.0, 4.0, 8.0, 12.0]);
    let image = Image::from_matrix(&buffer, ImageEncoding::U8);
    let threshold = compute_threshold(&image, 3, &ThresholdMethod::GaussianMean { c: 0.0 }).unwrap();

    // horizontal: row0 -> [1, 3], row1 -> [9, 11]; vertical at (0,0): 0.75*1 + 0.25*9
    assert!((threshold.buffer[(0,0)] - 3.0).abs() < 1e-12);
}
