//! FFT Algorithm Implementations
//!
//! - `bit_reversal`: reorders a split complex sequence into bit-reversed index order.
//! - `dit`: iterative radix-2 Decimation-in-Time butterflies, small spans to large. Input is
//!   bit-reversed (done automatically), output is in natural order.

pub(crate) mod bit_reversal;
pub(crate) mod dit;
