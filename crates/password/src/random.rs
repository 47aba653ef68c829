//! Randomness drawn from a host supplied source.
use rand::{CryptoRng, RngCore};

// Largest double below one; quotients that round up to exactly
// 1.0 are clamped here to keep the interval half open.
const MAX_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;

/// Cryptographically secure stream of random draws.
///
/// Implemented for every [`RngCore`] + [`CryptoRng`] type so hosts can
/// plug in their own source; the library defaults to the operating
/// system generator. A source is exclusively borrowed by a single
/// generation call and failures of the underlying stream are fatal.
pub trait RandomSource: RngCore + CryptoRng {
    /// Draw the next uniform value in the half open interval `[0, 1)`.
    ///
    /// Takes one fresh 64 bit draw from the stream and divides it
    /// by [`u64::MAX`]. Raw draws close to the maximum would round
    /// up to exactly `1.0` under conversion so the quotient is
    /// clamped strictly below one.
    fn next_unit(&mut self) -> f64 {
        let unit = self.next_u64() as f64 / u64::MAX as f64;
        unit.min(MAX_UNIT)
    }
}

impl<R> RandomSource for R where R: RngCore + CryptoRng {}
