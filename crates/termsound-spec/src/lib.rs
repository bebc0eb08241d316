//! termsound Tone and Catalog Library
//!
//! This crate provides the declarative types that describe termsound
//! notification sounds, plus validation for sound catalogs.
//!
//! # Overview
//!
//! A sound is an ordered list of [`ToneSegment`]s. Each segment is one
//! waveform fragment (sine, square or noise) with its own duration, amplitude
//! and fade times. A [`Catalog`] maps unique sound names to segment lists; the
//! audio backend renders every entry to a WAV file named after the entry.
//!
//! # Example
//!
//! ```
//! use termsound_spec::{Catalog, CatalogEntry, ToneSegment};
//! use termsound_spec::validation::validate_catalog;
//!
//! let catalog = Catalog::new(vec![CatalogEntry::new(
//!     "ping",
//!     vec![ToneSegment::sine(880.0, 40.0, 0.5).with_fades(2.0, 10.0)],
//! )]);
//!
//! assert!(validate_catalog(&catalog).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes and validation results
//! - [`tone`]: Tone segment and waveform types
//! - [`catalog`]: Named sound catalog, built-in sounds and event file names
//! - [`validation`]: Catalog validation functions

pub mod catalog;
pub mod error;
pub mod tone;
pub mod validation;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, CatalogEntry, SoundEvent};
pub use error::{
    BackendError, ErrorCode, SpecError, SpecResult, ValidationError, ValidationResult,
};
pub use tone::{ToneSegment, Waveform, DEFAULT_FADE_MS};
pub use validation::{is_valid_sound_name, validate_catalog};
