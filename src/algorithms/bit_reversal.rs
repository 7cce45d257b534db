//! Bit-reversal permutation of a split complex sequence.
//!
//! The iterative decimation-in-time FFT needs its input in bit-reversed index order: element `i`
//! must sit at the index obtained by reversing the low `log_n` bits of `i`. Rather than computing
//! each reversal from scratch, the partner index is advanced incrementally with a reversed carry,
//! which touches `O(1)` bits per step on average.

/// Permutes `reals` and `imags` together into bit-reversed order.
///
/// Both slices must have the same power-of-two length; the transform entry points validate this
/// before calling in here.
pub(crate) fn bit_reverse_permutation<T>(reals: &mut [T], imags: &mut [T]) {
    let n = reals.len();
    debug_assert_eq!(n, imags.len());
    debug_assert!(n.is_power_of_two());

    let half = n >> 1;
    let mut j = 0;

    for i in 0..n.saturating_sub(1) {
        if i < j {
            reals.swap(i, j);
            imags.swap(i, j);
        }

        // Increment `j` from the top bit down: clear leading ones, then set the next zero.
        let mut k = half;
        while k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Top down bit reverse interleaving. Obviously correct, only used to check the incremental
    /// version.
    fn top_down_bit_reverse_permutation<T: Copy + Clone>(x: &[T]) -> Vec<T> {
        if x.len() == 1 {
            return x.to_vec();
        }

        let (evens, odds): (Vec<T>, Vec<T>) = x.chunks_exact(2).map(|c| (c[0], c[1])).unzip();

        let mut y = Vec::with_capacity(x.len());
        y.extend_from_slice(&top_down_bit_reverse_permutation(&evens));
        y.extend_from_slice(&top_down_bit_reverse_permutation(&odds));
        y
    }

    #[test]
    fn small_sizes() {
        let mut reals: Vec<f64> = (0..8).map(f64::from).collect();
        let mut imags: Vec<f64> = (0..8).map(|i| -f64::from(i)).collect();
        bit_reverse_permutation(&mut reals, &mut imags);

        assert_eq!(reals, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);
        assert_eq!(imags, vec![0.0, -4.0, -2.0, -6.0, -1.0, -5.0, -3.0, -7.0]);

        let mut reals: Vec<f64> = (0..16).map(f64::from).collect();
        let mut imags = vec![0.0; 16];
        bit_reverse_permutation(&mut reals, &mut imags);
        assert_eq!(
            reals,
            vec![
                0.0, 8.0, 4.0, 12.0, 2.0, 10.0, 6.0, 14.0, 1.0, 9.0, 5.0, 13.0, 3.0, 11.0, 7.0,
                15.0,
            ]
        );
    }

    #[test]
    fn trivial_sizes_are_untouched() {
        let mut reals = vec![3.0];
        let mut imags = vec![4.0];
        bit_reverse_permutation(&mut reals, &mut imags);
        assert_eq!((reals[0], imags[0]), (3.0, 4.0));

        let mut reals = vec![1.0, 2.0];
        let mut imags = vec![5.0, 6.0];
        bit_reverse_permutation(&mut reals, &mut imags);
        assert_eq!(reals, vec![1.0, 2.0]);
        assert_eq!(imags, vec![5.0, 6.0]);
    }

    #[test]
    fn matches_top_down_permutation() {
        for log_n in 0..16 {
            let big_n = 1usize << log_n;
            let mut reals: Vec<usize> = (0..big_n).collect();
            let mut imags: Vec<usize> = (0..big_n).rev().collect();

            bit_reverse_permutation(&mut reals, &mut imags);

            let expected_re = top_down_bit_reverse_permutation(&(0..big_n).collect::<Vec<_>>());
            let expected_im =
                top_down_bit_reverse_permutation(&(0..big_n).rev().collect::<Vec<_>>());
            assert_eq!(reals, expected_re);
            assert_eq!(imags, expected_im);
        }
    }

    #[test]
    fn is_an_involution() {
        let big_n = 1 << 10;
        let original: Vec<usize> = (0..big_n).collect();
        let mut reals = original.clone();
        let mut imags = original.clone();

        bit_reverse_permutation(&mut reals, &mut imags);
        bit_reverse_permutation(&mut reals, &mut imags);

        assert_eq!(reals, original);
        assert_eq!(imags, original);
    }
}
