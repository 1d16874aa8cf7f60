//! Line-oriented output sink.
//!
//! UIDs are emitted as flat text: one line per identifier, newline
//! terminated. Writing happens after all lines are generated, so a
//! validation failure never leaves a partial file behind.

use anyhow::Context;
use std::path::Path;

/// Default output filename when the caller leaves it blank.
pub const DEFAULT_OUTPUT: &str = "nfc_uids.txt";

/// Write generated lines to `path`, one per line.
pub fn write_uid_file(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    let mut body = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }

    std::fs::write(path, body)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}
