//! Schema engine: encodes a profile's field list into a fixed-length UID.

use crate::rules::resolve_field;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uid_core::hex::to_hex_upper;
use uid_core::{ConfigError, FieldValue, GeneratedUid, Profile};

/// Encodes profiles into UIDs of a caller-chosen byte length.
///
/// The engine owns the random source so repeated encodes draw from one
/// stream; seed it for reproducible output in tests.
pub struct SchemaEngine {
    rng: StdRng,
}

impl SchemaEngine {
    /// Create an engine with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an engine seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Encode one UID of exactly `target_len` bytes.
    ///
    /// Fields resolve in declared order; `now` is injected so date-derived
    /// fields stay testable. A field list shorter than `target_len` is
    /// padded with random bytes, a longer one is truncated from the end so
    /// the leading prefix constant survives. Fields whose first byte lies
    /// at or past `target_len` are left out of the breakdown.
    pub fn encode(
        &mut self,
        profile: &Profile,
        target_len: usize,
        now: DateTime<Utc>,
    ) -> Result<GeneratedUid, ConfigError> {
        if target_len == 0 {
            return Err(ConfigError::ZeroTargetLength);
        }
        profile.validate()?;

        let mut bytes: Vec<u8> = Vec::with_capacity(target_len.max(profile.total_width()));
        let mut breakdown = Vec::with_capacity(profile.fields.len());

        for field in &profile.fields {
            let start = bytes.len();
            let value = resolve_field(&field.rule, field.width, &bytes, &mut self.rng, now);

            if start < target_len {
                breakdown.push(FieldValue {
                    name: field.name.clone(),
                    hex: to_hex_upper(&value),
                });
            }

            bytes.extend_from_slice(&value);
        }

        while bytes.len() < target_len {
            bytes.push(self.rng.gen());
        }
        bytes.truncate(target_len);

        Ok(GeneratedUid::new(bytes, breakdown))
    }
}
