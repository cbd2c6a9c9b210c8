//! Reproducible record identifiers.

use uuid::{Builder, Uuid};

use crate::algorithm::random::RandomSource;

/// Build a version 4 UUID from 128 bits of the run's random source (two draws).
pub fn sample_id<R: RandomSource + ?Sized>(rng: &mut R) -> Uuid {
    let high = rng.bits();
    let low = rng.bits();
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&high.to_be_bytes());
    bytes[8..].copy_from_slice(&low.to_be_bytes());
    Builder::from_random_bytes(bytes).into_uuid()
}
