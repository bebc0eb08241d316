//! Raw waveform generators.
//!
//! Every generator returns a value in `[-1.0, 1.0]` for elapsed time `t`
//! (seconds since the start of the segment). Phase is recomputed from `t`
//! for each sample rather than accumulated, so a segment always starts at
//! phase zero.

use rand::Rng;
use termsound_spec::Waveform;

/// 2 * PI.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Sine at `frequency` Hz.
#[inline]
pub fn sine(frequency: f64, t: f64) -> f64 {
    (TWO_PI * frequency * t).sin()
}

/// Square at `frequency` Hz: the sign of [`sine`], with zero mapped to `+1`.
#[inline]
pub fn square(frequency: f64, t: f64) -> f64 {
    if sine(frequency, t) >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Uniform white noise in `[-1.0, 1.0)`.
#[inline]
pub fn white_noise<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-1.0..1.0)
}

/// Returns the raw value of `waveform` at time `t`.
///
/// `rng` is only consumed by [`Waveform::Noise`].
#[inline]
pub fn raw_sample<R: Rng + ?Sized>(waveform: Waveform, frequency: f64, t: f64, rng: &mut R) -> f64 {
    match waveform {
        Waveform::Sine => sine(frequency, t),
        Waveform::Square => square(frequency, t),
        Waveform::Noise => white_noise(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_sine_quarter_period() {
        // 1 Hz at t = 0.25 s is the positive peak.
        assert!((sine(1.0, 0.25) - 1.0).abs() < 1e-12);
        assert!((sine(1.0, 0.75) + 1.0).abs() < 1e-12);
        assert_eq!(sine(440.0, 0.0), 0.0);
    }

    #[test]
    fn test_square_zero_maps_positive() {
        assert_eq!(square(440.0, 0.0), 1.0);
        assert_eq!(square(0.0, 0.3), 1.0);
        assert_eq!(square(1.0, 0.75), -1.0);
    }

    #[test]
    fn test_square_is_unit_magnitude() {
        for i in 0..1000 {
            let t = i as f64 / 44100.0;
            assert_eq!(square(523.25, t).abs(), 1.0);
        }
    }

    #[test]
    fn test_white_noise_range() {
        let mut rng = create_rng(42);
        for _ in 0..10000 {
            let v = white_noise(&mut rng);
            assert!((-1.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_tonal_waveforms_leave_rng_untouched() {
        let mut rng = create_rng(3);
        let mut fresh = create_rng(3);

        raw_sample(Waveform::Sine, 440.0, 0.01, &mut rng);
        raw_sample(Waveform::Square, 440.0, 0.01, &mut rng);

        assert_eq!(white_noise(&mut rng), white_noise(&mut fresh));
    }
}
