//! Linear fade envelope.
//!
//! Shapes one segment with a linear fade-in ramp and a linear fade-out ramp.
//! The ramps are checked in order (fade-in first) and never blended, so when
//! the fades together are longer than the segment the envelope rises through
//! the fade-in and then drops straight into the tail of the fade-out.

/// Converts milliseconds to a whole number of samples, rounding down.
///
/// Negative and NaN inputs yield 0.
#[inline]
pub fn ms_to_samples(ms: f64, sample_rate: f64) -> usize {
    ((ms / 1000.0) * sample_rate).floor() as usize
}

/// Per-segment fade envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeEnvelope {
    /// Segment length in samples.
    pub sample_count: usize,
    /// Fade-in length in samples.
    pub fade_in_samples: usize,
    /// Fade-out length in samples.
    pub fade_out_samples: usize,
}

impl FadeEnvelope {
    /// Creates an envelope from sample counts.
    pub fn new(sample_count: usize, fade_in_samples: usize, fade_out_samples: usize) -> Self {
        Self {
            sample_count,
            fade_in_samples,
            fade_out_samples,
        }
    }

    /// Creates an envelope from fade times in milliseconds.
    pub fn from_ms(sample_count: usize, fade_in_ms: f64, fade_out_ms: f64, sample_rate: f64) -> Self {
        Self::new(
            sample_count,
            ms_to_samples(fade_in_ms, sample_rate),
            ms_to_samples(fade_out_ms, sample_rate),
        )
    }

    /// Returns the gain at sample `i` of the segment.
    ///
    /// - `i < fade_in`: `i / fade_in`
    /// - else `i > sample_count - fade_out`: `(sample_count - i) / fade_out`
    /// - else `1.0`
    ///
    /// A zero-length fade skips its branch.
    #[inline]
    pub fn gain(&self, i: usize) -> f64 {
        if self.fade_in_samples > 0 && i < self.fade_in_samples {
            i as f64 / self.fade_in_samples as f64
        } else if self.fade_out_samples > 0
            && i.saturating_add(self.fade_out_samples) > self.sample_count
        {
            self.sample_count.saturating_sub(i) as f64 / self.fade_out_samples as f64
        } else {
            1.0
        }
    }
}
