//! Core types for the uid-forge UID generation tool.
//!
//! This crate provides the foundational types used across uid-forge:
//!
//! - [`FieldSpec`] / [`FieldRule`] - One field of a UID layout and its value rule
//! - [`Profile`] - Named, ordered field list describing one simulated system
//! - [`CardType`] - Card format table (UID byte length, default base pattern)
//! - [`GeneratedUid`] - One encoded UID plus its per-field breakdown
//!
//! # Architecture
//!
//! ```text
//! uid-core (this crate)
//!    │
//!    ├─── uid-generator  (schema engine + pattern fuzzer)
//!    │
//!    └─── uid-forge      (CLI shell, file emission)
//! ```
//!
//! Profiles are statically constructed in [`presets`] rather than parsed at
//! runtime, so a malformed profile is a bug caught by `Profile::validate`
//! (and the preset tests), not a user-facing parse error.

pub mod format;
pub mod hex;
pub mod presets;
pub mod profile;
pub mod uid;

// Re-exports for convenience
pub use format::CardType;
pub use profile::{ConfigError, FieldRule, FieldSpec, Profile};
pub use uid::{FieldValue, GeneratedUid};
