//! Command-line interface for uid-forge
//!
//! # Usage Examples
//!
//! ```bash
//! # Fuzz the default base pattern for 4-byte Classic cards
//! uid-forge fuzz classic-1k --count 100 --output nfc_uids.txt
//!
//! # Expand/mutate custom patterns (comma-separated, '?' = random nibble)
//! uid-forge fuzz classic-1k --patterns '12??5AE0,12BA5AE0' --count 50
//!
//! # Encode UIDs from a preset field layout, with per-field breakdown
//! uid-forge encode property-gate classic-1k --count 10 --breakdown
//!
//! # Deterministic output for regression fixtures
//! uid-forge encode public-transit ultralight --count 5 --seed 42 --json
//!
//! # Show available card types and profiles
//! uid-forge list
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uid_core::{presets, CardType};
use uid_forge::emit::{write_uid_file, DEFAULT_OUTPUT};
use uid_forge::encode::{generate_encoded, EncodeFormat, EncodeOpts};
use uid_forge::fuzz::{generate_fuzzed, FuzzOpts};

#[derive(Parser)]
#[command(name = "uid-forge")]
#[command(about = "A tool for generating and fuzzing NFC card UIDs for access-control reader testing")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate UIDs by fuzzing patterns (Flipper-style)
    Fuzz {
        /// Card format to target
        #[arg(value_enum)]
        card_type: CardTypeArg,

        /// Custom patterns, comma-separated; '?' marks a random nibble.
        /// Omit to mutate the card type's default base pattern.
        #[arg(long, value_delimiter = ',')]
        patterns: Vec<String>,

        /// Number of UIDs to generate
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,

        /// Output file (one UID per line)
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Seed for deterministic output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate UIDs from a preset field-layout profile
    Encode {
        /// Profile describing the UID field layout
        #[arg(value_enum)]
        profile: ProfileArg,

        /// Card format supplying the UID byte length
        #[arg(value_enum)]
        card_type: CardTypeArg,

        /// Number of UIDs to generate
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,

        /// Output file (one UID per line)
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Seed for deterministic output
        #[arg(long)]
        seed: Option<u64>,

        /// Append a '# field=HEX ..' breakdown comment to each line
        #[arg(long, conflicts_with = "json")]
        breakdown: bool,

        /// Emit one JSON object per line instead of bare hex
        #[arg(long)]
        json: bool,
    },

    /// List supported card types and preset profiles
    List,
}

/// Card format selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CardTypeArg {
    /// MIFARE Classic 1K (4-byte UID)
    Classic1k,
    /// MIFARE Classic 4K (4-byte UID)
    Classic4k,
    /// MIFARE Ultralight (7-byte UID)
    Ultralight,
}

impl From<CardTypeArg> for CardType {
    fn from(arg: CardTypeArg) -> Self {
        match arg {
            CardTypeArg::Classic1k => CardType::Classic1k,
            CardTypeArg::Classic4k => CardType::Classic4k,
            CardTypeArg::Ultralight => CardType::Ultralight,
        }
    }
}

/// Preset profile selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    PropertyGate,
    ApartmentDoor,
    IndustrialDoor,
    PublicTransit,
}

impl ProfileArg {
    fn profile(self) -> uid_core::Profile {
        match self {
            ProfileArg::PropertyGate => presets::property_gate(),
            ProfileArg::ApartmentDoor => presets::apartment_door(),
            ProfileArg::IndustrialDoor => presets::industrial_door(),
            ProfileArg::PublicTransit => presets::public_transit(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fuzz {
            card_type,
            patterns,
            count,
            output,
            seed,
        } => {
            let opts = FuzzOpts {
                card_type: card_type.into(),
                patterns,
                count,
                seed,
            };

            tracing::info!(
                "Generating {count} fuzzed UIDs for card type '{}'...",
                opts.card_type.label()
            );
            let lines = generate_fuzzed(&opts).context("UID fuzzing failed")?;
            write_uid_file(&output, &lines)?;

            tracing::info!("Wrote {} UIDs to {}", lines.len(), output.display());
            if let Some(sample) = lines.last() {
                tracing::info!("Sample UID: {sample}");
            }
        }

        Commands::Encode {
            profile,
            card_type,
            count,
            output,
            seed,
            breakdown,
            json,
        } => {
            let format = if json {
                EncodeFormat::Json
            } else if breakdown {
                EncodeFormat::Breakdown
            } else {
                EncodeFormat::Plain
            };

            let opts = EncodeOpts {
                profile: profile.profile(),
                card_type: card_type.into(),
                count,
                seed,
                format,
            };

            tracing::info!(
                "Encoding {count} UIDs from profile '{}' for card type '{}'...",
                opts.profile.name,
                opts.card_type.label()
            );
            let lines = generate_encoded(&opts).context("UID encoding failed")?;
            write_uid_file(&output, &lines)?;

            tracing::info!("Wrote {} UIDs to {}", lines.len(), output.display());
            if let Some(sample) = lines.last() {
                tracing::info!("Sample UID: {sample}");
            }
        }

        Commands::List => {
            println!("Card types:");
            for card in CardType::ALL {
                println!(
                    "  {} ({} bytes, base pattern {})",
                    card.label(),
                    card.uid_length(),
                    card.base_pattern()
                );
            }

            println!();
            println!("Profiles:");
            for profile in presets::all() {
                println!(
                    "  {} - {} ({} bytes of fields)",
                    profile.name,
                    profile.description,
                    profile.total_width()
                );
            }
        }
    }

    Ok(())
}
