//! Errors reported when a transform is requested on malformed input.

use thiserror::Error;

/// Rejection reasons for an FFT call.
///
/// Both variants are detected before any element of the input is touched, so
/// the caller's buffers are unchanged whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// `2^log_n` is not the length of the supplied slices (or does not fit in `usize`).
    #[error("transform of size 2^{log_n} does not match sequence length {len}")]
    InvalidSize { log_n: usize, len: usize },
    /// The real and imaginary slices have different lengths.
    #[error("real and imaginary sequences differ in length: {reals} != {imags}")]
    LengthMismatch { reals: usize, imags: usize },
}
