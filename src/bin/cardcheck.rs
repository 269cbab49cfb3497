//! CLI tool for card number validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! cardcheck validate 4111111111111111
//!
//! # Same, as JSON
//! cardcheck validate 4111111111111111 --output json
//!
//! # Luhn checksum only
//! cardcheck luhn 79927398713
//!
//! # Detect the provider from the leading digit
//! cardcheck detect 4111
//!
//! # Mask a card number
//! cardcheck mask 4111111111111111 --with-bin
//! ```

use std::process::ExitCode;

use cards_service::{detect, mask, passes_luhn, validate_card_number, ServiceError};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Card number validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number
    Validate {
        /// Card number to validate
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check if a card number passes the Luhn algorithm
    Luhn {
        /// Card number to check (spaces allowed)
        card_number: String,
    },

    /// Detect the provider from the leading digit
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Mask a card number for display
    Mask {
        /// Card number to mask
        card_number: String,

        /// Keep the first 6 digits visible
        #[arg(short, long)]
        with_bin: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            card_number,
            output,
        } => cmd_validate(&card_number, output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Detect { card_number } => cmd_detect(&card_number),
        Commands::Mask {
            card_number,
            with_bin,
        } => cmd_mask(&card_number, with_bin),
    }
}

fn cmd_validate(card_number: &str, output: OutputFormat) -> ExitCode {
    match validate_card_number(card_number) {
        Ok(info) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: yes");
                    println!("Provider: {}", info.provider_name());
                    println!("Badge: {}", info.provider_badge());
                    println!("Masked: {}", info.masked());
                }
                OutputFormat::Json => {
                    let body = json!({
                        "valid": true,
                        "card_number": info.card_number(),
                        "provider_name": info.provider_name(),
                        "provider_badge": info.provider_badge(),
                    });
                    println!("{}", body);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    match &e {
                        ServiceError::Validation(failure) => {
                            for violation in failure.violations() {
                                println!("Error: {} ({})", violation, violation.reason);
                            }
                        }
                        ServiceError::Internal(_) => println!("Error: internal error"),
                    }
                }
                OutputFormat::Json => {
                    let body = match &e {
                        ServiceError::Validation(failure) => json!({
                            "valid": false,
                            "violations": failure.violations(),
                        }),
                        ServiceError::Internal(_) => json!({
                            "valid": false,
                            "error": "internal error",
                        }),
                    };
                    println!("{}", body);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if passes_luhn(card_number) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_detect(card_number: &str) -> ExitCode {
    match detect::classify(card_number) {
        Ok(provider) => {
            println!("Detected Provider: {}", provider);
            println!("Expected Length: {}", provider.length());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Detected Provider: Unknown ({})", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_mask(card_number: &str, with_bin: bool) -> ExitCode {
    if mask::last_four(card_number).is_empty() {
        eprintln!("Error: Card number too short");
        return ExitCode::FAILURE;
    }

    if with_bin {
        println!("{}", mask::mask_with_bin(card_number));
    } else {
        println!("{}", mask::mask_card_number(card_number));
    }
    ExitCode::SUCCESS
}
