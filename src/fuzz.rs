//! Fuzz command handler: pattern-driven UID generation.
//!
//! With custom patterns, one is picked at random per UID and expanded
//! (wildcards) or mutated (literals); with none, the card type's base
//! pattern is mutated.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uid_core::CardType;
use uid_generator::fuzzer::{self, FuzzMode};

/// Options for one fuzz batch.
pub struct FuzzOpts {
    /// Card format the UIDs target
    pub card_type: CardType,

    /// Custom patterns; empty means "mutate the base pattern"
    pub patterns: Vec<String>,

    /// Number of UIDs to generate
    pub count: u32,

    /// Deterministic seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

/// Generate `count` fuzzed UID lines.
///
/// Every pattern is validated eagerly against the card type's hex length
/// before any UID is produced, so a bad pattern yields an error and no
/// partial output.
pub fn generate_fuzzed(opts: &FuzzOpts) -> anyhow::Result<Vec<String>> {
    let expected = opts.card_type.hex_length();
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Eager validation of the whole pattern list
    let mut validated: Vec<(String, FuzzMode)> = Vec::with_capacity(opts.patterns.len());
    for raw in &opts.patterns {
        let pattern = raw.trim().to_string();
        let mode = fuzzer::classify(&pattern, expected).with_context(|| {
            format!(
                "Pattern rejected for card type '{}'",
                opts.card_type.label()
            )
        })?;
        validated.push((pattern, mode));
    }

    let mut lines = Vec::with_capacity(opts.count as usize);
    for _ in 0..opts.count {
        let uid = match validated.as_slice() {
            [] => base_pattern_uid(opts.card_type, expected, &mut rng)?,
            candidates => {
                // One custom pattern is chosen at random per UID
                let (pattern, mode) = candidates
                    .choose(&mut rng)
                    .expect("candidates is non-empty");
                fuzzer::fuzz(pattern, expected, *mode, &mut rng)?
            }
        };
        lines.push(uid);
    }

    Ok(lines)
}

/// Mutate the card type's default base pattern, falling back to fully
/// random bytes if the base table ever disagrees with the format length.
fn base_pattern_uid<R: Rng>(
    card_type: CardType,
    expected: usize,
    rng: &mut R,
) -> anyhow::Result<String> {
    let base = card_type.base_pattern();
    if base.len() == expected {
        Ok(fuzzer::fuzz(base, expected, FuzzMode::Mutate, rng)?)
    } else {
        let mut bytes = vec![0u8; card_type.uid_length()];
        rng.fill_bytes(&mut bytes);
        Ok(uid_core::hex::to_hex_upper(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_pattern_fuzzing() {
        let opts = FuzzOpts {
            card_type: CardType::Classic1k,
            patterns: vec![],
            count: 20,
            seed: Some(42),
        };

        let lines = generate_fuzzed(&opts).unwrap();
        assert_eq!(lines.len(), 20);
        for line in &lines {
            assert_eq!(line.len(), 8);
            assert!(line.chars().all(|c| c.is_ascii_hexdigit()));
            assert_ne!(line, "12BA5AE0", "mutation must change the base");
        }
    }

    #[test]
    fn test_wildcard_patterns_respected() {
        let opts = FuzzOpts {
            card_type: CardType::Classic1k,
            patterns: vec!["12??5AE0".to_string()],
            count: 20,
            seed: Some(42),
        };

        for line in generate_fuzzed(&opts).unwrap() {
            assert_eq!(&line[..2], "12");
            assert_eq!(&line[4..], "5AE0");
        }
    }

    #[test]
    fn test_invalid_pattern_rejected_before_generation() {
        let opts = FuzzOpts {
            card_type: CardType::Classic1k,
            patterns: vec!["12BA5AE0".to_string(), "TOOSHORT!".to_string()],
            count: 20,
            seed: Some(42),
        };

        assert!(generate_fuzzed(&opts).is_err());
    }

    #[test]
    fn test_ultralight_length() {
        let opts = FuzzOpts {
            card_type: CardType::Ultralight,
            patterns: vec![],
            count: 5,
            seed: Some(42),
        };

        for line in generate_fuzzed(&opts).unwrap() {
            assert_eq!(line.len(), 14);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let opts = FuzzOpts {
            card_type: CardType::Classic4k,
            patterns: vec!["??BA5AE0".to_string()],
            count: 10,
            seed: Some(7),
        };

        assert_eq!(generate_fuzzed(&opts).unwrap(), generate_fuzzed(&opts).unwrap());
    }
}
