/// Options to tune how the transform computes its twiddle factors.
///
/// Calling [`fft`](crate::fft) without specifying options uses the defaults, which reproduce the
/// classic half-angle recurrence arithmetic exactly.
///
/// You only need to change these options if accuracy on very long sequences matters more to you
/// than bit-for-bit agreement with other implementations of the same recurrence.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub twiddles: TwiddleStrategy,
}

impl Options {
    /// Returns a copy of these options using the given twiddle strategy.
    #[must_use]
    pub fn with_twiddles(mut self, twiddles: TwiddleStrategy) -> Self {
        self.twiddles = twiddles;
        self
    }
}

/// How the twiddle factor of each butterfly is obtained.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TwiddleStrategy {
    #[default]
    /// Advance the twiddle by repeated complex multiplication with the stage's base rotation,
    /// and derive each base rotation from the previous one with the half-angle formulas.
    ///
    /// Needs no trigonometric calls at all. Rounding error accumulates along each stage.
    Recurrence,
    /// Evaluate `cos`/`sin` for every twiddle.
    ///
    /// Slower, but the error of each twiddle is independent of the sequence length.
    Direct,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_recurrence() {
        assert_eq!(Options::default().twiddles, TwiddleStrategy::Recurrence);
    }

    #[test]
    fn builder_overrides_strategy() {
        let opts = Options::default().with_twiddles(TwiddleStrategy::Direct);
        assert_eq!(opts.twiddles, TwiddleStrategy::Direct);
    }
}
