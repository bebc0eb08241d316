//! Main entry point for sound generation.
//!
//! Ties synthesis and WAV encoding together: segments in, WAV bytes out.
//! Writing the bytes anywhere is left to the caller.

use rand::Rng;
use termsound_spec::{CatalogEntry, ToneSegment};

use crate::error::AudioResult;
use crate::synthesis::synthesize;
use crate::wav::WavResult;

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Result of rendering one sound.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// WAV file data.
    pub wav: WavResult,
    /// Number of segments rendered.
    pub num_segments: usize,
    /// Number of samples clamped during quantization.
    pub clipped_samples: usize,
}

/// Renders segments to a mono 16-bit WAV.
///
/// # Arguments
/// * `segments` - Segments, rendered back to back
/// * `sample_rate` - Output sample rate in Hz
/// * `rng` - Random source for noise segments
pub fn generate<R: Rng + ?Sized>(
    segments: &[ToneSegment],
    sample_rate: u32,
    rng: &mut R,
) -> AudioResult<GenerateResult> {
    let buffer = synthesize(segments, sample_rate, rng)?;
    let wav = WavResult::from_buffer(&buffer)?;

    Ok(GenerateResult {
        wav,
        num_segments: segments.len(),
        clipped_samples: buffer.clipped,
    })
}

/// Renders a catalog entry to a mono 16-bit WAV.
pub fn generate_entry<R: Rng + ?Sized>(
    entry: &CatalogEntry,
    sample_rate: u32,
    rng: &mut R,
) -> AudioResult<GenerateResult> {
    generate(&entry.segments, sample_rate, rng)
}
