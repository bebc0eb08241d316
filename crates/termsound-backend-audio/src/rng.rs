//! Seeded RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Only the noise waveform consumes randomness. Production renders use a
//! thread-local entropy source; seeded renders and tests use the generators
//! built here so output can be reproduced.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a per-sound seed from a base seed and the sound name.
///
/// Hashes the base seed (little-endian) followed by the UTF-8 name with
/// BLAKE3 and keeps the first four bytes. Each sound gets an independent
/// stream, so a sound renders the same regardless of catalog order.
pub fn derive_sound_seed(base_seed: u32, name: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + name.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(name.as_bytes());

    let hash = blake3::hash(&input);

    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[0..4]);
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a named sound.
pub fn create_sound_rng(base_seed: u32, name: &str) -> Pcg32 {
    create_rng(derive_sound_seed(base_seed, name))
}
