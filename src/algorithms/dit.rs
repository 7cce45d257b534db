//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! bit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to input data
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input.
//!
//! Every butterfly of a stage that shares an offset within its span also shares a twiddle factor,
//! so the twiddle is fetched once per offset and then applied across the whole sequence.
use num_traits::{Float, FloatConst};

use crate::algorithms::bit_reversal::bit_reverse_permutation;
use crate::options::Options;
use crate::twiddles::Stages;
use crate::Direction;

/// Runs all `log_n` butterfly stages over a bit-reversed sequence.
fn butterfly_stages<T: Float + FloatConst>(
    reals: &mut [T],
    imags: &mut [T],
    log_n: usize,
    direction: Direction,
    opts: &Options,
) {
    let n = reals.len();
    let mut stages = Stages::<T>::new(direction, opts.twiddles);

    for stage in 0..log_n {
        let dist = 1 << stage;
        let chunk_size = dist << 1;

        for (offset, (w_re, w_im)) in stages.twiddles().take(dist).enumerate() {
            for i in (offset..n).step_by(chunk_size) {
                let i1 = i + dist;

                let t_re = w_re * reals[i1] - w_im * imags[i1];
                let t_im = w_re * imags[i1] + w_im * reals[i1];

                reals[i1] = reals[i] - t_re;
                imags[i1] = imags[i] - t_im;
                reals[i] = reals[i] + t_re;
                imags[i] = imags[i] + t_im;
            }
        }

        stages.advance();
    }
}

/// Divides every element by `n = 2^log_n`.
fn normalize<T: Float>(reals: &mut [T], imags: &mut [T], log_n: usize) {
    // Powers of two are exact in any binary float, so build `n` by doubling.
    let big_n = (0..log_n).fold(T::one(), |acc, _| acc + acc);

    for (z_re, z_im) in reals.iter_mut().zip(imags.iter_mut()) {
        *z_re = *z_re / big_n;
        *z_im = *z_im / big_n;
    }
}

/// In-place DIT FFT over already validated input.
///
/// `reals` and `imags` must both have length `2^log_n`. [`Direction::Forward`] output is divided
/// by `n`; [`Direction::Inverse`] output is left unscaled.
pub(crate) fn fft_dit<T: Float + FloatConst>(
    reals: &mut [T],
    imags: &mut [T],
    log_n: usize,
    direction: Direction,
    opts: &Options,
) {
    debug_assert_eq!(reals.len(), 1 << log_n);
    debug_assert_eq!(imags.len(), 1 << log_n);

    bit_reverse_permutation(reals, imags);
    butterfly_stages(reals, imags, log_n, direction, opts);

    if let Direction::Forward = direction {
        normalize(reals, imags, log_n);
    }
}
