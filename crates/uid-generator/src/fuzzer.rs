//! Pattern fuzzer: wildcard expansion and nibble mutation of hex patterns.
//!
//! A pattern is a hex string of exactly the card format's hex length.
//! Patterns containing `?` are templates whose wildcard positions are
//! filled independently at random; patterns without `?` are literal seeds
//! mutated at a bounded number of nibble positions, each forced to a
//! different digit than it held.

use rand::seq::index;
use rand::Rng;
use uid_core::hex::{is_hex_digit, HEX_DIGITS};

/// Error type for fuzzer operations.
#[derive(Debug, thiserror::Error)]
pub enum FuzzError {
    /// Pattern length disagrees with the card format's hex length
    #[error("Pattern '{pattern}' must be exactly {expected} hex digits, got {actual}")]
    LengthMismatch {
        pattern: String,
        expected: usize,
        actual: usize,
    },

    /// A character outside the hex alphabet (and outside `?` in wildcard
    /// mode) appeared in the pattern
    #[error("Invalid character '{ch}' in pattern '{pattern}' (use hex digits or '?')")]
    InvalidHexCharacter { ch: char, pattern: String },

    /// Caller-fixed mutation count outside `[1, pattern length]`
    #[error("Change count {requested} out of range (must be 1..={max})")]
    ChangeCountOutOfRange { requested: usize, max: usize },
}

/// How a pattern is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzMode {
    /// Replace each `?` with a random hex digit, keep the rest
    Wildcard,
    /// Change a bounded number of positions to different digits
    Mutate,
}

/// Validate a pattern and classify it by `?` presence.
///
/// This is the eager shell-side check: wrong length or a disallowed
/// character is rejected before any generation happens.
pub fn classify(pattern: &str, expected_hex_len: usize) -> Result<FuzzMode, FuzzError> {
    check_length(pattern, expected_hex_len)?;

    let mut has_wildcard = false;
    for ch in pattern.chars() {
        if ch == '?' {
            has_wildcard = true;
        } else if !is_hex_digit(ch) {
            return Err(FuzzError::InvalidHexCharacter {
                ch,
                pattern: pattern.to_string(),
            });
        }
    }

    Ok(if has_wildcard {
        FuzzMode::Wildcard
    } else {
        FuzzMode::Mutate
    })
}

/// Produce one fuzzed UID string from a pattern.
///
/// Re-validates the pattern regardless of what the caller checked. In
/// `Mutate` mode the change count is drawn uniformly from
/// `[1, max(1, len/2)]`. Output is always uppercase and the same length
/// as the input.
pub fn fuzz<R: Rng>(
    pattern: &str,
    expected_hex_len: usize,
    mode: FuzzMode,
    rng: &mut R,
) -> Result<String, FuzzError> {
    match mode {
        FuzzMode::Wildcard => expand_wildcards(pattern, expected_hex_len, rng),
        FuzzMode::Mutate => {
            check_length(pattern, expected_hex_len)?;
            let max_changes = (pattern.len() / 2).max(1);
            let changes = rng.gen_range(1..=max_changes);
            mutate_exact(pattern, expected_hex_len, changes, rng)
        }
    }
}

/// Replace every `?` with an independent random hex digit.
fn expand_wildcards<R: Rng>(
    pattern: &str,
    expected_hex_len: usize,
    rng: &mut R,
) -> Result<String, FuzzError> {
    check_length(pattern, expected_hex_len)?;

    let mut out = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if ch == '?' {
            out.push(HEX_DIGITS[rng.gen_range(0..16)]);
        } else if is_hex_digit(ch) {
            out.push(ch.to_ascii_uppercase());
        } else {
            return Err(FuzzError::InvalidHexCharacter {
                ch,
                pattern: pattern.to_string(),
            });
        }
    }
    Ok(out)
}

/// Mutate exactly `changes` distinct positions of a literal hex seed.
///
/// Each chosen position is replaced with a uniform draw from the 15
/// digits excluding its current one, so every chosen position actually
/// changes value.
pub fn mutate_exact<R: Rng>(
    pattern: &str,
    expected_hex_len: usize,
    changes: usize,
    rng: &mut R,
) -> Result<String, FuzzError> {
    check_length(pattern, expected_hex_len)?;

    let mut digits: Vec<char> = Vec::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if !is_hex_digit(ch) {
            return Err(FuzzError::InvalidHexCharacter {
                ch,
                pattern: pattern.to_string(),
            });
        }
        digits.push(ch.to_ascii_uppercase());
    }

    if changes == 0 || changes > digits.len() {
        return Err(FuzzError::ChangeCountOutOfRange {
            requested: changes,
            max: digits.len(),
        });
    }

    for pos in index::sample(rng, digits.len(), changes) {
        let current = digits[pos];
        // 15 candidates: skip over the current digit
        let mut pick = rng.gen_range(0..15);
        if HEX_DIGITS[pick] >= current {
            pick += 1;
        }
        digits[pos] = HEX_DIGITS[pick];
    }

    Ok(digits.into_iter().collect())
}

fn check_length(pattern: &str, expected_hex_len: usize) -> Result<(), FuzzError> {
    if pattern.len() != expected_hex_len {
        return Err(FuzzError::LengthMismatch {
            pattern: pattern.to_string(),
            expected: expected_hex_len,
            actual: pattern.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn diff_positions(a: &str, b: &str) -> Vec<usize> {
        a.chars()
            .zip(b.chars())
            .enumerate()
            .filter(|(_, (x, y))| x != y)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_classify_wildcard() {
        assert_eq!(classify("12??5AE0", 8).unwrap(), FuzzMode::Wildcard);
    }

    #[test]
    fn test_classify_literal() {
        assert_eq!(classify("12BA5AE0", 8).unwrap(), FuzzMode::Mutate);
        assert_eq!(classify("12ba5ae0", 8).unwrap(), FuzzMode::Mutate);
    }

    #[test]
    fn test_classify_wrong_length() {
        assert!(matches!(
            classify("12BA5AE0", 14),
            Err(FuzzError::LengthMismatch {
                expected: 14,
                actual: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_classify_bad_character() {
        assert!(matches!(
            classify("12GA5AE0", 8),
            Err(FuzzError::InvalidHexCharacter { ch: 'G', .. })
        ));
    }

    #[test]
    fn test_wildcard_preserves_fixed_positions() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let out = fuzz("12??5AE0", 8, FuzzMode::Wildcard, &mut rng).unwrap();
            assert_eq!(out.len(), 8);
            assert_eq!(&out[..2], "12");
            assert_eq!(&out[4..], "5AE0");
            assert!(out.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_wildcard_normalizes_case() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = fuzz("ab??cdef", 8, FuzzMode::Wildcard, &mut rng).unwrap();
        assert_eq!(&out[..2], "AB");
        assert_eq!(&out[4..], "CDEF");
    }

    #[test]
    fn test_wildcard_varies_across_calls() {
        let mut rng = StdRng::seed_from_u64(42);
        // Four wild nibbles give 65536 possible outputs; 100 draws
        // collapsing to a single value would mean a broken RNG
        let outputs: std::collections::HashSet<String> = (0..100)
            .map(|_| fuzz("????5AE0", 8, FuzzMode::Wildcard, &mut rng).unwrap())
            .collect();
        assert!(outputs.len() > 1);
    }

    #[test]
    fn test_mutate_changes_bounded_positions() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let out = fuzz("12BA5AE0", 8, FuzzMode::Mutate, &mut rng).unwrap();
            assert_eq!(out.len(), 8);
            assert!(out.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(out.chars().all(|c| !c.is_ascii_lowercase()));

            let diffs = diff_positions("12BA5AE0", &out);
            assert!(!diffs.is_empty(), "mutation produced the seed unchanged");
            assert!(diffs.len() <= 4, "too many changes: {diffs:?}");
        }
    }

    #[test]
    fn test_mutate_exact_changes_exactly_k() {
        let mut rng = StdRng::seed_from_u64(42);

        for k in 1..=8 {
            let out = mutate_exact("12BA5AE0", 8, k, &mut rng).unwrap();
            let diffs = diff_positions("12BA5AE0", &out);
            assert_eq!(diffs.len(), k);
        }
    }

    #[test]
    fn test_mutate_never_reuses_current_digit() {
        let mut rng = StdRng::seed_from_u64(42);

        // Change every position; each must differ from the seed digit
        for _ in 0..100 {
            let out = mutate_exact("00000000", 8, 8, &mut rng).unwrap();
            assert!(out.chars().all(|c| c != '0'), "no-op mutation in {out}");
        }
    }

    #[test]
    fn test_mutate_rejects_wildcards() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            fuzz("12??5AE0", 8, FuzzMode::Mutate, &mut rng),
            Err(FuzzError::InvalidHexCharacter { ch: '?', .. })
        ));
    }

    #[test]
    fn test_mutate_exact_change_count_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            mutate_exact("12BA5AE0", 8, 0, &mut rng),
            Err(FuzzError::ChangeCountOutOfRange { requested: 0, .. })
        ));
        assert!(matches!(
            mutate_exact("12BA5AE0", 8, 9, &mut rng),
            Err(FuzzError::ChangeCountOutOfRange { requested: 9, .. })
        ));
    }

    #[test]
    fn test_length_mismatch_rejected_in_both_modes() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(fuzz("12BA", 8, FuzzMode::Mutate, &mut rng).is_err());
        assert!(fuzz("12??", 8, FuzzMode::Wildcard, &mut rng).is_err());
    }
}
