//! Tone segment synthesis.
//!
//! Renders an ordered list of [`ToneSegment`]s into one buffer of signed
//! 16-bit samples. Each segment is rendered independently (phase restarts at
//! zero, envelope is local to the segment) and appended in order.
//!
//! Per sample `i` of a segment:
//!
//! ```text
//! t      = i / sample_rate
//! raw    = waveform(frequency, t)          // sine, square or noise
//! gain   = FadeEnvelope::gain(i)
//! sample = clamp(round(raw * gain * amplitude * 32767), -32768, 32767)
//! ```
//!
//! Rounding is half-up (`floor(x + 0.5)`). Values outside the 16-bit range
//! only happen for amplitudes above 1.0; they are clamped and counted in
//! [`SampleBuffer::clipped`], never reported as errors.

use rand::Rng;
use termsound_spec::ToneSegment;

use crate::envelope::{ms_to_samples, FadeEnvelope};
use crate::error::{AudioError, AudioResult};
use crate::oscillator;
use crate::wav::{WavFormat, MAX_PCM16_SAMPLES};

/// Full-scale multiplier for 16-bit PCM.
pub const PCM16_SCALE: f64 = 32767.0;

/// Rendered mono samples at a known sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    /// Samples in render order.
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples that were clamped to the 16-bit range.
    pub clipped: usize,
}

impl SampleBuffer {
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the rendered duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64 * 1000.0
    }
}

/// Returns the number of samples a segment renders to.
///
/// `floor(duration_ms / 1000 * sample_rate)`.
///
/// # Errors
/// [`AudioError::InvalidDuration`] if the duration is negative or not finite.
pub fn segment_sample_count(segment: &ToneSegment, sample_rate: u32) -> AudioResult<usize> {
    if !segment.duration_ms.is_finite() || segment.duration_ms < 0.0 {
        return Err(AudioError::InvalidDuration {
            duration_ms: segment.duration_ms,
        });
    }
    Ok(ms_to_samples(segment.duration_ms, sample_rate as f64))
}

/// Rounds half-up and clamps into the 16-bit range.
///
/// Returns the sample and whether it had to be clamped.
#[inline]
pub fn quantize_pcm16(scaled: f64) -> (i16, bool) {
    let rounded = (scaled + 0.5).floor();
    let min = i16::MIN as f64;
    let max = i16::MAX as f64;
    if rounded > max {
        (i16::MAX, true)
    } else if rounded < min {
        (i16::MIN, true)
    } else {
        // NaN falls through and saturates to 0.
        (rounded as i16, false)
    }
}

/// Renders every segment, in order, into one buffer.
///
/// `rng` is only consumed by noise segments. Pass a seeded generator (see
/// [`crate::rng`]) for reproducible output or `rand::thread_rng()` otherwise.
///
/// # Errors
/// - [`AudioError::InvalidSampleRate`] if `sample_rate` is 0 or too high for
///   a 16-bit mono WAV byte rate.
/// - [`AudioError::InvalidDuration`] for the first segment with a negative
///   or non-finite duration.
/// - [`AudioError::TooLong`] if the segments add up to more samples than a
///   WAV file can hold.
///
/// Nothing is rendered when any of these checks fail.
pub fn synthesize<R: Rng + ?Sized>(
    segments: &[ToneSegment],
    sample_rate: u32,
    rng: &mut R,
) -> AudioResult<SampleBuffer> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    WavFormat::mono(sample_rate).byte_rate()?;

    let counts = segments
        .iter()
        .map(|seg| segment_sample_count(seg, sample_rate))
        .collect::<AudioResult<Vec<usize>>>()?;
    let total = counts
        .iter()
        .try_fold(0usize, |acc, &n| acc.checked_add(n))
        .filter(|&total| total <= MAX_PCM16_SAMPLES)
        .ok_or_else(|| AudioError::TooLong {
            num_samples: counts.iter().fold(0usize, |acc, &n| acc.saturating_add(n)),
        })?;

    let mut buffer = SampleBuffer {
        samples: Vec::with_capacity(total),
        sample_rate,
        clipped: 0,
    };

    for (segment, &count) in segments.iter().zip(&counts) {
        buffer.clipped += render_segment(segment, count, sample_rate, rng, &mut buffer.samples);
    }

    Ok(buffer)
}

/// Renders a single segment.
pub fn synthesize_segment<R: Rng + ?Sized>(
    segment: &ToneSegment,
    sample_rate: u32,
    rng: &mut R,
) -> AudioResult<SampleBuffer> {
    synthesize(std::slice::from_ref(segment), sample_rate, rng)
}

/// Appends `sample_count` samples of `segment` to `out`, returning how many
/// were clamped.
fn render_segment<R: Rng + ?Sized>(
    segment: &ToneSegment,
    sample_count: usize,
    sample_rate: u32,
    rng: &mut R,
    out: &mut Vec<i16>,
) -> usize {
    let rate = sample_rate as f64;
    let envelope = FadeEnvelope::from_ms(sample_count, segment.fade_in_ms, segment.fade_out_ms, rate);
    let mut clipped = 0;

    for i in 0..sample_count {
        let t = i as f64 / rate;
        let raw = oscillator::raw_sample(segment.waveform, segment.frequency, t, rng);
        let scaled = raw * envelope.gain(i) * segment.amplitude * PCM16_SCALE;

        let (sample, was_clipped) = quantize_pcm16(scaled);
        if was_clipped {
            clipped += 1;
        }
        out.push(sample);
    }

    clipped
}
