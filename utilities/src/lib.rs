pub extern crate rustfft;

// export rustfft to radix2fft's tests and benches
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;
use rustfft::{FftDirection, FftNum, FftPlanner};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two split complex sequences are element-wise approximately equal.
///
/// # Panics
///
/// Panics on the first component that differs by `epsilon` or more, or if the lengths differ
#[track_caller]
pub fn assert_signals_closeness<T: Float + std::fmt::Display>(
    actual_re: &[T],
    actual_im: &[T],
    expected_re: &[T],
    expected_im: &[T],
    epsilon: T,
) {
    assert_eq!(actual_re.len(), expected_re.len());
    assert_eq!(actual_im.len(), expected_im.len());

    for (a, e) in actual_re.iter().zip(expected_re.iter()) {
        assert_float_closeness(*a, *e, epsilon);
    }
    for (a, e) in actual_im.iter().zip(expected_im.iter()) {
        assert_float_closeness(*a, *e, epsilon);
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(-T::one(), T::one());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Unnormalized DFT of a split signal computed by RustFFT, for use as a reference.
///
/// `inverse` selects the `exp(+2πi·k·t/n)` kernel. Neither direction is scaled.
pub fn reference_fft<T: FftNum>(reals: &[T], imags: &[T], inverse: bool) -> (Vec<T>, Vec<T>) {
    assert_eq!(reals.len(), imags.len());

    let mut buffer: Vec<Complex<T>> = reals
        .iter()
        .zip(imags.iter())
        .map(|(re, im)| Complex::new(*re, *im))
        .collect();

    let direction = if inverse {
        FftDirection::Inverse
    } else {
        FftDirection::Forward
    };
    let mut planner = FftPlanner::new();
    planner.plan_fft(buffer.len(), direction).process(&mut buffer);

    buffer.iter().map(|z| (z.re, z.im)).unzip()
}

/// Sum of squared magnitudes of a split complex signal.
pub fn energy<T: Float>(reals: &[T], imags: &[T]) -> T {
    reals
        .iter()
        .zip(imags.iter())
        .fold(T::zero(), |acc, (re, im)| acc + re.powi(2) + im.powi(2))
}
