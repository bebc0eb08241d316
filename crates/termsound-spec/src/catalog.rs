//! Sound catalog types.
//!
//! A catalog is an ordered list of named sounds. Every entry is rendered to
//! `<name>.wav`, so names double as file stems and must be unique.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecResult;
use crate::tone::ToneSegment;
use crate::validation::validate_catalog;

/// One named sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    /// Sound name, also the output file stem.
    pub name: String,
    /// Segments rendered back to back.
    pub segments: Vec<ToneSegment>,
}

impl CatalogEntry {
    /// Creates a catalog entry.
    pub fn new(name: impl Into<String>, segments: Vec<ToneSegment>) -> Self {
        Self {
            name: name.into(),
            segments,
        }
    }

    /// Returns the output file name (`<name>.wav`).
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name)
    }
}

/// An ordered collection of named sounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Sounds in render order.
    pub sounds: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates a catalog from entries.
    pub fn new(sounds: Vec<CatalogEntry>) -> Self {
        Self { sounds }
    }

    /// Returns the catalog that ships with termsound.
    ///
    /// One entry per [`SoundEvent`], in event order.
    pub fn builtin() -> Self {
        let command_fail = (0..10)
            .map(|i| ToneSegment::square(400.0 - i as f64 * 20.0, 20.0, 0.6).with_fades(1.0, 1.0))
            .collect();

        Self::new(vec![
            CatalogEntry::new(
                SoundEvent::TerminalOpened.sound_name(),
                vec![
                    ToneSegment::sine(523.25, 80.0, 0.6).with_fades(5.0, 10.0),
                    ToneSegment::sine(659.25, 80.0, 0.6).with_fades(5.0, 20.0),
                ],
            ),
            CatalogEntry::new(
                SoundEvent::TerminalClosed.sound_name(),
                vec![
                    ToneSegment::sine(659.25, 80.0, 0.5).with_fades(5.0, 10.0),
                    ToneSegment::sine(523.25, 80.0, 0.5).with_fades(5.0, 20.0),
                ],
            ),
            CatalogEntry::new(
                SoundEvent::CommandStarted.sound_name(),
                vec![ToneSegment::square(800.0, 25.0, 0.4).with_fades(1.0, 5.0)],
            ),
            CatalogEntry::new(
                SoundEvent::CommandSucceeded.sound_name(),
                vec![
                    ToneSegment::sine(523.25, 60.0, 0.5).with_fades(3.0, 10.0),
                    ToneSegment::sine(659.25, 60.0, 0.5).with_fades(3.0, 10.0),
                    ToneSegment::sine(783.99, 80.0, 0.5).with_fades(3.0, 25.0),
                ],
            ),
            CatalogEntry::new(SoundEvent::CommandFailed.sound_name(), command_fail),
        ])
    }

    /// Parses a catalog from a JSON string without validating it.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses and validates a catalog file.
    pub fn load(path: &Path) -> SpecResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        validate_catalog(&catalog).into_result()?;
        Ok(catalog)
    }

    /// Serializes the catalog to pretty JSON.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.sounds.iter().find(|e| e.name == name)
    }

    /// Returns the number of sounds.
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Returns true if the catalog has no sounds.
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

/// Terminal events that have a bundled sound.
///
/// Players look generated files up by [`SoundEvent::file_name`]; the names
/// are fixed so a custom sound can replace a bundled one by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEvent {
    /// A terminal was opened.
    TerminalOpened,
    /// A terminal was closed.
    TerminalClosed,
    /// A shell command started.
    CommandStarted,
    /// A shell command exited with status 0.
    CommandSucceeded,
    /// A shell command exited with a non-zero status.
    CommandFailed,
}

impl SoundEvent {
    /// All events, in catalog order.
    pub const ALL: [SoundEvent; 5] = [
        SoundEvent::TerminalOpened,
        SoundEvent::TerminalClosed,
        SoundEvent::CommandStarted,
        SoundEvent::CommandSucceeded,
        SoundEvent::CommandFailed,
    ];

    /// Returns the catalog entry name for this event.
    pub fn sound_name(&self) -> &'static str {
        match self {
            SoundEvent::TerminalOpened => "terminal-open",
            SoundEvent::TerminalClosed => "terminal-close",
            SoundEvent::CommandStarted => "command-start",
            SoundEvent::CommandSucceeded => "command-success",
            SoundEvent::CommandFailed => "command-fail",
        }
    }

    /// Returns the bundled file name for this event.
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.sound_name())
    }
}
