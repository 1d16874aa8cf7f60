//! Generated UID value and its per-field breakdown.

use crate::hex::to_hex_upper;
use serde::Serialize;

/// One resolved field value, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    /// Field name from the profile
    pub name: String,

    /// Uppercase hex, exactly two digits per byte of field width
    pub hex: String,
}

/// The output of one encode: exactly the requested number of UID bytes,
/// plus the breakdown of every field that contributed to them.
///
/// Created fresh per encode and never mutated afterwards. Fields that fell
/// entirely past the truncation point are absent from the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedUid {
    /// UID bytes, length equals the encode's target length
    pub bytes: Vec<u8>,

    /// Field name → resolved hex value, in field order
    pub breakdown: Vec<FieldValue>,
}

impl GeneratedUid {
    /// Create a new generated UID.
    pub fn new(bytes: Vec<u8>, breakdown: Vec<FieldValue>) -> Self {
        Self { bytes, breakdown }
    }

    /// The UID as uppercase hex.
    pub fn hex(&self) -> String {
        to_hex_upper(&self.bytes)
    }

    /// Look up a field's resolved hex value by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.breakdown
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.hex.as_str())
    }

    /// Breakdown rendered as a `name=HEX name=HEX ..` comment body.
    pub fn breakdown_comment(&self) -> String {
        self.breakdown
            .iter()
            .map(|f| format!("{}={}", f.name, f.hex))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
