//! Library surface of the uid-forge CLI.
//!
//! The binary in `main.rs` only parses arguments and dispatches; the
//! command handlers here do the work so integration tests can drive them
//! without spawning a process.

pub mod emit;
pub mod encode;
pub mod fuzz;

pub use emit::write_uid_file;
pub use encode::{generate_encoded, EncodeOpts};
pub use fuzz::{generate_fuzzed, FuzzOpts};
