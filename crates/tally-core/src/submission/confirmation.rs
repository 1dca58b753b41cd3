use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::ConfirmationNumber;

/// Draws confirmation numbers from an injected random source.
pub struct ConfirmationIssuer<R> {
    rng: R,
}

impl<R: Rng> ConfirmationIssuer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn issue(&mut self) -> ConfirmationNumber {
        ConfirmationNumber(
            self.rng
                .gen_range(ConfirmationNumber::MIN..=ConfirmationNumber::MAX),
        )
    }
}

impl ConfirmationIssuer<StdRng> {
    /// Issuer seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Issuer with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}
