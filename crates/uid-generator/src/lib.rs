//! Schema engine and pattern fuzzer for uid-forge.
//!
//! This crate provides the two UID sources the CLI dispatches between.
//! Both are pure functions of their explicit inputs plus an injected RNG,
//! so tests seed a `StdRng` and get reproducible output.
//!
//! # Architecture
//!
//! ```text
//! Profile (uid-core)            Pattern string
//!        │                            │
//!        ▼                            ▼
//! ┌──────────────┐            ┌──────────────┐
//! │ SchemaEngine │            │ fuzzer::fuzz │
//! │              │            │              │
//! │  - rng       │            │  Wildcard /  │
//! │  - encode()  │            │  Mutate      │
//! └──────┬───────┘            └──────┬───────┘
//!        │                           │
//!        ▼                           ▼
//!   GeneratedUid                hex String
//! ```
//!
//! # Example
//!
//! ```rust
//! use uid_generator::SchemaEngine;
//! use uid_core::presets;
//!
//! let mut engine = SchemaEngine::seeded(42);
//! let uid = engine
//!     .encode(&presets::property_gate(), 4, chrono::Utc::now())
//!     .unwrap();
//! assert_eq!(uid.bytes.len(), 4);
//! assert_eq!(uid.field("prefix"), Some("12"));
//! ```

pub mod engine;
pub mod fuzzer;
pub mod rules;

// Re-exports for convenience
pub use engine::SchemaEngine;
pub use fuzzer::{FuzzError, FuzzMode};
