//! Profile and field definitions for UID layouts.
//!
//! A [`Profile`] is an ordered list of [`FieldSpec`] entries describing how
//! one simulated access-control system lays out its card UIDs. The sum of
//! field widths does not have to match any card format's UID length: the
//! engine pads a short layout with random bytes and truncates a long one
//! from the end, so one profile can serve both 4-byte and 7-byte formats.

use serde::Serialize;

/// Maximum field width in bytes. Field values are carried as `u64`.
pub const MAX_FIELD_WIDTH: usize = 8;

/// Error type for profile and encode configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Profile has no fields
    #[error("Profile '{0}' has no fields")]
    EmptyProfile(String),

    /// Field width is zero or exceeds the supported maximum
    #[error("Field '{field}' in profile '{profile}' has invalid width {width} (must be 1..={MAX_FIELD_WIDTH})")]
    InvalidFieldWidth {
        profile: String,
        field: String,
        width: usize,
    },

    /// Choice-set field has no values to draw from
    #[error("Field '{field}' in profile '{profile}' has an empty choice set")]
    EmptyChoiceSet { profile: String, field: String },

    /// Requested UID length is zero
    #[error("Target UID length must be greater than zero")]
    ZeroTargetLength,
}

/// Value rule for a single field.
///
/// The set of rule kinds is closed; adding a kind means updating every
/// `match` over this enum, which is checked at compile time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldRule {
    /// Fixed value, emitted big-endian at the field's width
    Constant(u64),

    /// Uniformly random value in `[0, 2^(8*width) - 1]`
    RandomUniform,

    /// Uniform draw from a finite set of width-sized values
    ChoiceSet(Vec<u64>),

    /// XOR of all bytes emitted by earlier fields in the same encode.
    /// Zero when this is the first field.
    Checksum,

    /// Whole days from 1970-01-01 to the injected `now`, masked to the
    /// field's width
    DayCountSinceEpoch,

    /// `(ISO week number << 8) | (ISO year mod 100)`, masked to the
    /// field's width (declared as 2 bytes in all presets)
    IsoWeekYear,
}

/// One entry in a profile's ordered field list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field label, unique within its profile
    pub name: String,

    /// Byte count contributed by this field
    pub width: usize,

    /// How the field's value is resolved
    pub rule: FieldRule,
}

impl FieldSpec {
    /// Create a new field spec.
    pub fn new(name: impl Into<String>, width: usize, rule: FieldRule) -> Self {
        Self {
            name: name.into(),
            width,
            rule,
        }
    }
}

/// Named, ordered sequence of field specs.
///
/// Immutable once defined; the built-in profiles live in [`crate::presets`].
/// By convention the first field is a fixed prefix constant carrying the
/// simulated system's identity, which is why truncation drops trailing
/// fields rather than leading ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// Profile name (e.g. `property_gate`)
    pub name: String,

    /// Human-readable description for listings
    pub description: String,

    /// Ordered field list
    pub fields: Vec<FieldSpec>,
}

impl Profile {
    /// Create a new profile.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields,
        }
    }

    /// Validate the profile's field list.
    ///
    /// Rejects empty profiles, out-of-range widths, and empty choice sets.
    /// Called by the engine before every encode.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.is_empty() {
            return Err(ConfigError::EmptyProfile(self.name.clone()));
        }

        for field in &self.fields {
            if field.width == 0 || field.width > MAX_FIELD_WIDTH {
                return Err(ConfigError::InvalidFieldWidth {
                    profile: self.name.clone(),
                    field: field.name.clone(),
                    width: field.width,
                });
            }

            if let FieldRule::ChoiceSet(values) = &field.rule {
                if values.is_empty() {
                    return Err(ConfigError::EmptyChoiceSet {
                        profile: self.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Total width in bytes of all fields.
    pub fn total_width(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = Profile::new(
            "test",
            "test profile",
            vec![
                FieldSpec::new("prefix", 1, FieldRule::Constant(0x04)),
                FieldSpec::new("serial", 2, FieldRule::RandomUniform),
                FieldSpec::new("check", 1, FieldRule::Checksum),
            ],
        );

        assert!(profile.validate().is_ok());
        assert_eq!(profile.total_width(), 4);
    }

    #[test]
    fn test_empty_profile_rejected() {
        let profile = Profile::new("empty", "no fields", vec![]);
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::EmptyProfile(_))
        ));
    }

    #[test]
    fn test_zero_width_rejected() {
        let profile = Profile::new(
            "bad",
            "zero width",
            vec![FieldSpec::new("prefix", 0, FieldRule::Constant(0x04))],
        );
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::InvalidFieldWidth { width: 0, .. })
        ));
    }

    #[test]
    fn test_oversized_width_rejected() {
        let profile = Profile::new(
            "bad",
            "too wide",
            vec![FieldSpec::new("serial", 9, FieldRule::RandomUniform)],
        );
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::InvalidFieldWidth { width: 9, .. })
        ));
    }

    #[test]
    fn test_empty_choice_set_rejected() {
        let profile = Profile::new(
            "bad",
            "empty choices",
            vec![FieldSpec::new("site", 2, FieldRule::ChoiceSet(vec![]))],
        );
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::EmptyChoiceSet { .. })
        ));
    }
}
