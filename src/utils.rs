//! Utility functions such as interleave/deinterleave, used by the `complex-nums` entry points

use bytemuck::{cast_slice, Pod};

use num_complex::Complex;

/// Separates data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])` for any length
pub(crate) fn deinterleave<T: Copy>(input: &[T]) -> (Vec<T>, Vec<T>) {
    input.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
}

/// Utility function to separate a slice of [`Complex`] numbers into vectors of their real and
/// imaginary components.
pub(crate) fn deinterleave_complex<T: Pod>(signal: &[Complex<T>]) -> (Vec<T>, Vec<T>) {
    let complex_t: &[T] = cast_slice::<Complex<T>, T>(signal);
    deinterleave(complex_t)
}

/// Utility function to write separate real and imaginary components back into a slice of
/// [`Complex`] numbers.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or `reals.len() != signal.len()`.
pub(crate) fn combine_re_im<T: Copy>(reals: &[T], imags: &[T], signal: &mut [Complex<T>]) {
    assert_eq!(reals.len(), imags.len());
    assert_eq!(reals.len(), signal.len());

    signal
        .iter_mut()
        .zip(reals.iter().zip(imags.iter()))
        .for_each(|(z, (z_re, z_im))| {
            z.re = *z_re;
            z.im = *z_im;
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deinterleave_odd_length_drops_remainder() {
        let (evens, odds) = deinterleave(&[1, 2, 3, 4, 5]);
        assert_eq!(evens, vec![1, 3]);
        assert_eq!(odds, vec![2, 4]);
    }

    #[test]
    fn test_separate_and_combine_re_im() {
        let complex_vec: Vec<_> = vec![
            Complex::new(1.0, 2.0),
            Complex::new(3.0, 4.0),
            Complex::new(5.0, 6.0),
            Complex::new(7.0, 8.0),
        ];

        let (reals, imags) = deinterleave_complex(&complex_vec);
        assert_eq!(reals, vec![1.0, 3.0, 5.0, 7.0]);
        assert_eq!(imags, vec![2.0, 4.0, 6.0, 8.0]);

        let mut recombined_vec = vec![Complex::new(0.0, 0.0); 4];
        combine_re_im(&reals, &imags, &mut recombined_vec);

        assert_eq!(complex_vec, recombined_vec);
    }
}
