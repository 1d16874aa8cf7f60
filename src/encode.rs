//! Encode command handler: schema-profile UID generation.

use chrono::Utc;
use serde_json::json;
use uid_core::{CardType, Profile};
use uid_generator::SchemaEngine;

/// Output shape for encoded UID lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeFormat {
    /// Bare uppercase hex
    #[default]
    Plain,
    /// Hex followed by a `# field=HEX ..` breakdown comment
    Breakdown,
    /// One JSON object per line with the UID and its field map
    Json,
}

/// Options for one encode batch.
pub struct EncodeOpts {
    /// Profile describing the UID layout
    pub profile: Profile,

    /// Card format supplying the target byte length
    pub card_type: CardType,

    /// Number of UIDs to generate
    pub count: u32,

    /// Deterministic seed; `None` seeds from the OS
    pub seed: Option<u64>,

    /// Line format
    pub format: EncodeFormat,
}

/// Generate `count` encoded UID lines for the profile/card-type pair.
pub fn generate_encoded(opts: &EncodeOpts) -> anyhow::Result<Vec<String>> {
    let mut engine = match opts.seed {
        Some(seed) => SchemaEngine::seeded(seed),
        None => SchemaEngine::from_entropy(),
    };
    let target_len = opts.card_type.uid_length();

    let mut lines = Vec::with_capacity(opts.count as usize);
    for _ in 0..opts.count {
        let uid = engine.encode(&opts.profile, target_len, Utc::now())?;

        let line = match opts.format {
            EncodeFormat::Plain => uid.hex(),
            EncodeFormat::Breakdown => format!("{} # {}", uid.hex(), uid.breakdown_comment()),
            EncodeFormat::Json => {
                let fields: serde_json::Map<String, serde_json::Value> = uid
                    .breakdown
                    .iter()
                    .map(|f| (f.name.clone(), json!(f.hex)))
                    .collect();
                serde_json::to_string(&json!({ "uid": uid.hex(), "fields": fields }))?
            }
        };
        lines.push(line);
    }

    Ok(lines)
}
