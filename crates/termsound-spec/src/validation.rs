//! Catalog validation logic.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::Catalog;
use crate::error::{ErrorCode, ValidationError, ValidationResult};

/// Regex pattern for valid sound names.
/// Format: starts with a lowercase letter, followed by up to 63 lowercase letters, digits or hyphens.
const SOUND_NAME_PATTERN: &str = r"^[a-z][a-z0-9-]{0,63}$";

static SOUND_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn sound_name_regex() -> &'static Regex {
    SOUND_NAME_REGEX.get_or_init(|| Regex::new(SOUND_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Checks if a sound name is usable as an output file stem.
pub fn is_valid_sound_name(name: &str) -> bool {
    sound_name_regex().is_match(name)
}

/// Validates a catalog before rendering.
///
/// Collects every problem rather than stopping at the first one. Amplitude
/// and frequency are not checked: the renderer clamps out-of-range amplitudes
/// and accepts any frequency.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::success();

    if catalog.sounds.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyCatalog,
            "catalog must contain at least one sound",
            "sounds",
        ));
        return result;
    }

    let mut seen = HashSet::new();
    for (i, entry) in catalog.sounds.iter().enumerate() {
        let entry_path = format!("sounds[{}]", i);

        if !is_valid_sound_name(&entry.name) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidSoundName,
                format!(
                    "sound name must match {}: '{}'",
                    SOUND_NAME_PATTERN, entry.name
                ),
                format!("{}.name", entry_path),
            ));
        }

        if !seen.insert(entry.name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateSoundName,
                format!("duplicate sound name: '{}'", entry.name),
                format!("{}.name", entry_path),
            ));
        }

        if entry.segments.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NoSegments,
                format!("sound '{}' has no segments", entry.name),
                format!("{}.segments", entry_path),
            ));
        }

        for (j, seg) in entry.segments.iter().enumerate() {
            let seg_path = format!("{}.segments[{}]", entry_path, j);

            if !is_non_negative(seg.duration_ms) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidDuration,
                    format!("duration must be finite and >= 0, got {}", seg.duration_ms),
                    format!("{}.duration_ms", seg_path),
                ));
            }

            for (field, value) in [("fade_in_ms", seg.fade_in_ms), ("fade_out_ms", seg.fade_out_ms)] {
                if !is_non_negative(value) {
                    result.add_error(ValidationError::with_path(
                        ErrorCode::InvalidFade,
                        format!("{} must be finite and >= 0, got {}", field, value),
                        format!("{}.{}", seg_path, field),
                    ));
                }
            }
        }
    }

    result
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
