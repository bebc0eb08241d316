//! Deterministic WAV file writer.
//!
//! This module writes canonical 16-bit PCM WAV files: a 12-byte RIFF
//! descriptor, a 16-byte `fmt ` chunk and a `data` chunk, with no extra
//! chunks, timestamps or padding. The header is always 44 bytes, so a file
//! is exactly `44 + 2 * samples * channels` bytes long.

use std::io::{self, Write};

use crate::error::{AudioError, AudioResult};
use crate::synthesis::SampleBuffer;

/// Size of the canonical PCM header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Largest mono 16-bit sample count whose file size fits the RIFF size field.
pub const MAX_PCM16_SAMPLES: usize = ((u32::MAX - 36) / 2) as usize;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates bytes per sample (per channel).
    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// # Errors
    /// [`AudioError::InvalidSampleRate`] if the byte rate overflows a `u32`.
    pub fn byte_rate(&self) -> AudioResult<u32> {
        self.sample_rate
            .checked_mul(self.block_align() as u32)
            .ok_or(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            })
    }
}

impl Default for WavFormat {
    fn default() -> Self {
        Self::mono(44100)
    }
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw little-endian PCM samples as bytes
///
/// # Errors
/// - [`AudioError::InvalidSampleRate`] if the byte rate overflows.
/// - [`AudioError::TooLong`] if the payload does not fit the 32-bit RIFF size
///   field.
/// - [`AudioError::Io`] if the writer fails.
///
/// Nothing is written when the format or size checks fail.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> AudioResult<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|size| size.checked_add(36).is_some())
        .ok_or(AudioError::TooLong {
            num_samples: pcm_data.len() / 2,
        })?;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header
    let byte_rate = format.byte_rate()?;

    write_header(writer, format, byte_rate, file_size, data_size)?;
    writer.write_all(pcm_data)?;

    Ok(())
}

fn write_header<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    byte_rate: u32,
    file_size: u32,
    data_size: u32,
) -> io::Result<()> {
    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())
}

/// Converts 16-bit samples to little-endian PCM bytes.
pub fn samples_to_pcm_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Encodes 16-bit samples as a complete in-memory WAV file.
///
/// # Errors
/// Same as [`write_wav`], except that an in-memory writer never fails.
pub fn encode_pcm16(samples: &[i16], format: &WavFormat) -> AudioResult<Vec<u8>> {
    let pcm = samples_to_pcm_bytes(samples);
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + pcm.len());
    write_wav(&mut buffer, format, &pcm)?;
    Ok(buffer)
}

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a mono sample buffer.
    pub fn from_buffer(buffer: &SampleBuffer) -> AudioResult<Self> {
        let wav_data = encode_pcm16(&buffer.samples, &WavFormat::mono(buffer.sample_rate))?;
        let pcm_hash = blake3::hash(&wav_data[WAV_HEADER_SIZE..]).to_hex().to_string();

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate,
            num_samples: buffer.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Returns the duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_seconds() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn u16_at(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([bytes[at], bytes[at + 1]])
    }

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_wav_format() {
        let mono = WavFormat::mono(44100);
        assert_eq!(mono.channels, 1);
        assert_eq!(mono.sample_rate, 44100);
        assert_eq!(mono.bits_per_sample, 16);
        assert_eq!(mono.byte_rate().unwrap(), 88200);
        assert_eq!(mono.block_align(), 2);
        assert_eq!(WavFormat::default(), mono);
    }

    #[test]
    fn test_header_layout() {
        let samples = vec![0i16; 3528];
        let wav = encode_pcm16(&samples, &WavFormat::mono(44100)).unwrap();

        assert_eq!(wav.len(), 7100);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32_at(&wav, 4), 36 + 7056);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u32_at(&wav, 16), 16);
        assert_eq!(u16_at(&wav, 20), 1);
        assert_eq!(u16_at(&wav, 22), 1);
        assert_eq!(u32_at(&wav, 24), 44100);
        assert_eq!(u32_at(&wav, 28), 88200);
        assert_eq!(u16_at(&wav, 32), 2);
        assert_eq!(u16_at(&wav, 34), 16);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, 40), 7056);
    }

    #[test]
    fn test_payload_is_little_endian_in_order() {
        let samples = [1i16, -1, 32767, -32768, 0x1234];
        let wav = encode_pcm16(&samples, &WavFormat::mono(8000)).unwrap();

        assert_eq!(
            &wav[44..],
            &[0x01u8, 0x00, 0xFF, 0xFF, 0xFF, 0x7F, 0x00, 0x80, 0x34, 0x12]
        );
    }

    #[test]
    fn test_empty_buffer_is_header_only() {
        let wav = encode_pcm16(&[], &WavFormat::mono(44100)).unwrap();
        assert_eq!(wav.len(), WAV_HEADER_SIZE);
        assert_eq!(u32_at(&wav, 4), 36);
        assert_eq!(u32_at(&wav, 40), 0);
    }

    #[test]
    fn test_write_wav_propagates_io_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_wav(&mut Broken, &WavFormat::mono(44100), &[0, 0]).unwrap_err();
        assert!(matches!(err, AudioError::Io(_)));
    }

    #[test]
    fn test_byte_rate_overflow_rejected() {
        let format = WavFormat::mono(u32::MAX);
        assert!(matches!(
            format.byte_rate(),
            Err(AudioError::InvalidSampleRate { rate: u32::MAX })
        ));

        let mut out = Vec::new();
        let err = write_wav(&mut out, &format, &[]).unwrap_err();
        assert!(matches!(err, AudioError::InvalidSampleRate { .. }));
        assert!(out.is_empty());

        assert!(matches!(
            encode_pcm16(&[0, 1], &WavFormat::mono(3_000_000_000)),
            Err(AudioError::InvalidSampleRate { .. })
        ));
    }

    #[test]
    fn test_wav_result_from_buffer() {
        let buffer = SampleBuffer {
            samples: vec![100, -100, 50, -50],
            sample_rate: 44100,
            clipped: 0,
        };
        let result = WavResult::from_buffer(&buffer).unwrap();

        assert_eq!(result.sample_rate, 44100);
        assert_eq!(result.num_samples, 4);
        assert_eq!(result.wav_data.len(), 52);
        assert_eq!(result.pcm_hash.len(), 64); // BLAKE3 produces 64 hex chars
        assert_eq!(
            result.pcm_hash,
            blake3::hash(&samples_to_pcm_bytes(&buffer.samples)).to_hex().to_string()
        );
        let encoded = encode_pcm16(&buffer.samples, &WavFormat::mono(44100)).unwrap();
        assert_eq!(result.wav_data, encoded);
    }

    #[test]
    fn test_wav_result_duration() {
        let buffer = SampleBuffer {
            samples: vec![0; 7056],
            sample_rate: 44100,
            clipped: 0,
        };
        let result = WavResult::from_buffer(&buffer).unwrap();
        assert!((result.duration_ms() - 160.0).abs() < 1e-9);
    }
}
