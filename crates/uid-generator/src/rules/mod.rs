//! Per-rule value resolution.
//!
//! This module provides the resolution logic for each field rule kind.
//! All functions take the RNG by reference so the engine keeps ownership
//! of the single shared random source.

pub mod time;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uid_core::hex::to_be_bytes;
use uid_core::FieldRule;

/// Resolve one field to its bytes.
///
/// `emitted` is the byte buffer accumulated by earlier fields in the same
/// encode; only the `Checksum` rule reads it. Multi-byte values are always
/// emitted most-significant byte first.
pub fn resolve_field<R: Rng>(
    rule: &FieldRule,
    width: usize,
    emitted: &[u8],
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<u8> {
    match rule {
        FieldRule::Constant(value) => to_be_bytes(*value, width),

        FieldRule::RandomUniform => {
            // width independent uniform bytes == uniform in [0, 2^(8*width))
            let mut bytes = vec![0u8; width];
            rng.fill_bytes(&mut bytes);
            bytes
        }

        FieldRule::ChoiceSet(values) => {
            // Non-empty is enforced by Profile::validate before encoding
            let value = values.choose(rng).copied().unwrap_or(0);
            to_be_bytes(value, width)
        }

        FieldRule::Checksum => {
            let xor = emitted.iter().fold(0u8, |acc, b| acc ^ b);
            to_be_bytes(u64::from(xor), width)
        }

        FieldRule::DayCountSinceEpoch => to_be_bytes(time::day_count_since_epoch(now), width),

        FieldRule::IsoWeekYear => to_be_bytes(time::iso_week_year(now), width),
    }
}
