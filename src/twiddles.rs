use num_traits::{Float, FloatConst};

use crate::options::TwiddleStrategy;
use crate::Direction;

/// Per-stage source of twiddle factors.
///
/// Stage `s` combines pairs `2^s` apart, so its base rotation is `exp(∓iπ / 2^s)`: the first
/// stage rotates by π and every later stage by half the angle of the one before it.
pub(crate) struct Stages<T> {
    strategy: TwiddleStrategy,
    direction: Direction,
    c_re: T,
    c_im: T,
    angle: T,
}

impl<T: Float + FloatConst> Stages<T> {
    pub fn new(direction: Direction, strategy: TwiddleStrategy) -> Self {
        let angle = match direction {
            Direction::Forward => -T::PI(),
            Direction::Inverse => T::PI(),
        };
        Self {
            strategy,
            direction,
            c_re: -T::one(),
            c_im: T::zero(),
            angle,
        }
    }

    /// Twiddle factors of the current stage, starting at `1 + 0i`. The iterator never ends; the
    /// caller takes one per butterfly offset.
    pub fn twiddles(&self) -> Twiddles<T> {
        Twiddles {
            strategy: self.strategy,
            step_re: self.c_re,
            step_im: self.c_im,
            angle: self.angle,
            w_re: T::one(),
            w_im: T::zero(),
            k: T::zero(),
        }
    }

    /// Move on to the next stage by halving the base rotation angle.
    pub fn advance(&mut self) {
        let two = T::one() + T::one();

        // Half-angle formulas; the sine takes its sign from the direction.
        let mut c_im = ((T::one() - self.c_re) / two).sqrt();
        if let Direction::Forward = self.direction {
            c_im = -c_im;
        }
        self.c_re = ((T::one() + self.c_re) / two).sqrt();
        self.c_im = c_im;

        self.angle = self.angle / two;
    }
}

pub(crate) struct Twiddles<T> {
    strategy: TwiddleStrategy,
    step_re: T,
    step_im: T,
    angle: T,
    w_re: T,
    w_im: T,
    k: T,
}

impl<T: Float> Iterator for Twiddles<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        match self.strategy {
            TwiddleStrategy::Recurrence => {
                let w_re = self.w_re;
                let w_im = self.w_im;

                self.w_re = w_re * self.step_re - w_im * self.step_im;
                self.w_im = w_re * self.step_im + w_im * self.step_re;

                Some((w_re, w_im))
            }
            TwiddleStrategy::Direct => {
                let (sin, cos) = (self.angle * self.k).sin_cos();
                self.k = self.k + T::one();
                Some((cos, sin))
            }
        }
    }
}
