//! termsound Audio Backend
//!
//! Renders notification sounds described as tone segments into canonical
//! 16-bit mono PCM WAV files.
//!
//! # Overview
//!
//! Rendering is a two-step pipeline:
//!
//! 1. [`synthesis::synthesize`] turns an ordered list of segments into one
//!    buffer of 16-bit samples (waveform, fade envelope, quantization).
//! 2. [`wav`] wraps the buffer in a 44-byte RIFF/WAVE header.
//!
//! # Randomness
//!
//! Only noise segments are random. The random source is always passed in by
//! the caller: use [`rng::create_rng`] for reproducible output, or
//! `rand::thread_rng()` when every render should differ.
//!
//! # Example
//!
//! ```
//! use termsound_backend_audio::{generate, rng::create_rng, DEFAULT_SAMPLE_RATE};
//! use termsound_spec::ToneSegment;
//!
//! let segments = [ToneSegment::sine(523.25, 80.0, 0.6)];
//! let result = generate(&segments, DEFAULT_SAMPLE_RATE, &mut create_rng(42)).unwrap();
//!
//! assert_eq!(result.wav.num_samples, 3528);
//! assert_eq!(result.wav.wav_data.len(), 7100);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Segments to WAV bytes
//! - [`envelope`] - Linear fade envelope
//! - [`oscillator`] - Sine, square and noise generators
//! - [`rng`] - Seeded RNG with per-sound seed derivation
//! - [`synthesis`] - Segment rendering and 16-bit quantization
//! - [`wav`] - Deterministic WAV file writer

pub mod envelope;
pub mod error;
pub mod generate;
pub mod oscillator;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_entry, GenerateResult, DEFAULT_SAMPLE_RATE};
pub use synthesis::{synthesize, SampleBuffer};
pub use wav::{encode_pcm16, WavFormat, WavResult};
