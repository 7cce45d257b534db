//! In-place iterative radix-2 Cooley-Tukey FFT.
//!
//! Signals are passed as two caller-owned slices, one holding the real components and one the
//! imaginary components, whose length is `2^log_n`. The transform overwrites both slices with the
//! result.
//!
//! Normalization is asymmetric: [`Direction::Forward`] divides its output by `n`, while
//! [`Direction::Inverse`] leaves it unscaled. A forward transform followed by an inverse one
//! therefore returns the original signal with no extra scaling.
//!
//! ```
//! use radix2fft::{fft, Direction};
//!
//! let mut reals = vec![1.0, 1.0, 1.0, 1.0];
//! let mut imags = vec![0.0; 4];
//! fft(Direction::Forward, 2, &mut reals, &mut imags).unwrap();
//! assert_eq!(reals, vec![1.0, 0.0, 0.0, 0.0]);
//! ```
#![forbid(unsafe_code)]

#[cfg(feature = "complex-nums")]
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::algorithms::dit::fft_dit;
pub use crate::error::FftError;
use crate::options::Options;
#[cfg(feature = "complex-nums")]
use crate::utils::{combine_re_im, deinterleave_complex};

mod algorithms;
pub mod error;
pub mod options;
mod twiddles;
#[cfg(feature = "complex-nums")]
mod utils;

/// Inverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `exp(-2πi·k·t/n)` kernel, output divided by `n`
    Forward,
    /// `exp(+2πi·k·t/n)` kernel, output left unscaled
    Inverse,
}

/// Checks the slice lengths against each other and against `2^log_n`.
fn validate(log_n: usize, reals: usize, imags: usize) -> Result<(), FftError> {
    if reals != imags {
        return Err(FftError::LengthMismatch { reals, imags });
    }

    let big_n = u32::try_from(log_n)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift));
    if big_n != Some(reals) {
        return Err(FftError::InvalidSize { log_n, len: reals });
    }

    Ok(())
}

/// FFT using the default [`Options`]
///
/// See [`fft_with_opts`] for details.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `reals.len() != imags.len()`, and
/// [`FftError::InvalidSize`] if their length is not `2^log_n`.
pub fn fft<T: Float + FloatConst>(
    direction: Direction,
    log_n: usize,
    reals: &mut [T],
    imags: &mut [T],
) -> Result<(), FftError> {
    fft_with_opts(direction, log_n, reals, imags, &Options::default())
}

/// FFT with explicit [`Options`]
///
/// Transforms the signal held in `reals` and `imags` in place. Both slices must have length
/// `n = 2^log_n`; for a purely real signal, pass `imags` filled with zeros.
///
/// Input is validated before anything is written, so on error both slices are left untouched.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `reals.len() != imags.len()`, and
/// [`FftError::InvalidSize`] if their length is not `2^log_n`.
pub fn fft_with_opts<T: Float + FloatConst>(
    direction: Direction,
    log_n: usize,
    reals: &mut [T],
    imags: &mut [T],
    opts: &Options,
) -> Result<(), FftError> {
    if let Err(err) = validate(log_n, reals.len(), imags.len()) {
        tracing::debug!(%err, ?direction, "rejected FFT input");
        return Err(err);
    }

    tracing::trace!(
        n = reals.len(),
        ?direction,
        twiddles = ?opts.twiddles,
        "running radix-2 FFT"
    );

    fft_dit(reals, imags, log_n, direction, opts);
    Ok(())
}

#[cfg(feature = "complex-nums")]
macro_rules! impl_fft_interleaved_for {
    ($func_name:ident, $precision:ty) => {
        /// FFT of a signal stored as interleaved [`Complex`] numbers.
        ///
        /// The signal is split into scratch real/imaginary buffers, transformed with the default
        /// [`Options`], and written back into `signal`.
        ///
        /// # Errors
        ///
        /// Returns [`FftError::InvalidSize`] if `signal.len()` is not `2^log_n`. `signal` is left
        /// untouched in that case.
        pub fn $func_name(
            direction: Direction,
            log_n: usize,
            signal: &mut [Complex<$precision>],
        ) -> Result<(), FftError> {
            validate(log_n, signal.len(), signal.len())?;

            let (mut reals, mut imags) = deinterleave_complex(signal);
            fft(direction, log_n, &mut reals, &mut imags)?;
            combine_re_im(&reals, &imags, signal);
            Ok(())
        }
    };
}

#[cfg(feature = "complex-nums")]
impl_fft_interleaved_for!(fft_64_interleaved, f64);
#[cfg(feature = "complex-nums")]
impl_fft_interleaved_for!(fft_32_interleaved, f32);
