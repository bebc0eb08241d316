//! Tone segment types.
//!
//! A tone segment is one waveform fragment of a sound. Segments are rendered
//! back to back, in order, with no crossfade between them.

use serde::{Deserialize, Serialize};

/// Fade-in and fade-out time applied when a segment does not specify one.
pub const DEFAULT_FADE_MS: f64 = 5.0;

/// Waveform kinds a segment can render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    #[default]
    Sine,
    /// Square wave derived from the sign of the sine at the same phase.
    Square,
    /// Uniform white noise. Ignores the segment frequency.
    Noise,
}

impl Waveform {
    /// Returns the snake_case name used in catalog JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Noise => "noise",
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fragment of a sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneSegment {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// Peak amplitude, nominally 0.0 to 1.0.
    pub amplitude: f64,
    /// Linear fade-in time in milliseconds.
    #[serde(default = "default_fade_ms")]
    pub fade_in_ms: f64,
    /// Linear fade-out time in milliseconds.
    #[serde(default = "default_fade_ms")]
    pub fade_out_ms: f64,
    /// Waveform kind.
    #[serde(default)]
    pub waveform: Waveform,
}

fn default_fade_ms() -> f64 {
    DEFAULT_FADE_MS
}

impl ToneSegment {
    /// Creates a segment with default fades.
    pub fn new(waveform: Waveform, frequency: f64, duration_ms: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            duration_ms,
            amplitude,
            fade_in_ms: DEFAULT_FADE_MS,
            fade_out_ms: DEFAULT_FADE_MS,
            waveform,
        }
    }

    /// Creates a sine segment with default fades.
    pub fn sine(frequency: f64, duration_ms: f64, amplitude: f64) -> Self {
        Self::new(Waveform::Sine, frequency, duration_ms, amplitude)
    }

    /// Creates a square segment with default fades.
    pub fn square(frequency: f64, duration_ms: f64, amplitude: f64) -> Self {
        Self::new(Waveform::Square, frequency, duration_ms, amplitude)
    }

    /// Creates a noise segment with default fades.
    pub fn noise(duration_ms: f64, amplitude: f64) -> Self {
        Self::new(Waveform::Noise, 0.0, duration_ms, amplitude)
    }

    /// Sets both fade times.
    pub fn with_fades(mut self, fade_in_ms: f64, fade_out_ms: f64) -> Self {
        self.fade_in_ms = fade_in_ms;
        self.fade_out_ms = fade_out_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_waveform_serde() {
        let json = serde_json::to_string(&Waveform::Square).unwrap();
        assert_eq!(json, "\"square\"");

        let parsed: Waveform = serde_json::from_str("\"noise\"").unwrap();
        assert_eq!(parsed, Waveform::Noise);
    }

    #[test]
    fn test_segment_defaults_from_json() {
        let json = r#"{ "frequency": 523.25, "duration_ms": 80, "amplitude": 0.6 }"#;
        let seg: ToneSegment = serde_json::from_str(json).unwrap();

        assert_eq!(seg, ToneSegment::sine(523.25, 80.0, 0.6));
        assert_eq!(seg.fade_in_ms, DEFAULT_FADE_MS);
        assert_eq!(seg.fade_out_ms, DEFAULT_FADE_MS);
        assert_eq!(seg.waveform, Waveform::Sine);
    }

    #[test]
    fn test_segment_rejects_unknown_fields() {
        let json = r#"{ "frequency": 440, "duration_ms": 10, "amplitude": 0.5, "type": "square" }"#;
        assert!(serde_json::from_str::<ToneSegment>(json).is_err());
    }

    #[test]
    fn test_with_fades() {
        let seg = ToneSegment::square(800.0, 25.0, 0.4).with_fades(1.0, 5.0);
        assert_eq!(seg.fade_in_ms, 1.0);
        assert_eq!(seg.fade_out_ms, 5.0);
        assert_eq!(seg.waveform, Waveform::Square);
    }

    #[test]
    fn test_noise_has_no_frequency() {
        assert_eq!(ToneSegment::noise(10.0, 0.3).waveform, Waveform::Noise);
        assert_eq!(ToneSegment::noise(10.0, 0.3).frequency, 0.0);
    }
}
