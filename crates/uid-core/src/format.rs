//! Card format table.
//!
//! Maps each supported card type to its UID byte length and the default
//! base pattern the fuzzer mutates when the caller supplies no patterns.

use serde::Serialize;

/// Supported card formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// MIFARE Classic 1K, 4-byte UID
    Classic1k,
    /// MIFARE Classic 4K, 4-byte UID
    Classic4k,
    /// MIFARE Ultralight, 7-byte UID
    Ultralight,
}

impl CardType {
    /// All supported card types, in menu order.
    pub const ALL: [CardType; 3] = [
        CardType::Classic1k,
        CardType::Classic4k,
        CardType::Ultralight,
    ];

    /// UID length in bytes.
    pub fn uid_length(&self) -> usize {
        match self {
            CardType::Classic1k | CardType::Classic4k => 4,
            CardType::Ultralight => 7,
        }
    }

    /// Expected pattern length in hex digits (two per byte).
    pub fn hex_length(&self) -> usize {
        self.uid_length() * 2
    }

    /// Default base pattern mutated when no custom patterns are given.
    pub fn base_pattern(&self) -> &'static str {
        match self {
            CardType::Classic1k | CardType::Classic4k => "12BA5AE0",
            CardType::Ultralight => "04BA5AE0D12345",
        }
    }

    /// Stable label used in listings and logs.
    pub fn label(&self) -> &'static str {
        match self {
            CardType::Classic1k => "classic_1k",
            CardType::Classic4k => "classic_4k",
            CardType::Ultralight => "ultralight",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_lengths() {
        assert_eq!(CardType::Classic1k.uid_length(), 4);
        assert_eq!(CardType::Classic4k.uid_length(), 4);
        assert_eq!(CardType::Ultralight.uid_length(), 7);
    }

    #[test]
    fn test_base_patterns_match_hex_length() {
        for card in CardType::ALL {
            assert_eq!(card.base_pattern().len(), card.hex_length());
        }
    }
}
