// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the warden command-line interface.
//!
//! Three subcommands: `demo` runs the guarded form of each pattern, `avoid`
//! runs the forcing form and reports where it fails, and `list` prints the
//! catalog. Both runners can emit JSON instead of boxes.

pub mod display;

use clap::{Parser, Subcommand};
use warden::Pattern;

#[derive(Parser)]
#[command(
    name = "warden",
    about = "Guarded access to optional, deferred and type-erased values",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the safe variant of every pattern (or one)
    Demo {
        /// Only run this pattern (see `warden list`)
        #[arg(short, long, value_parser = parse_pattern)]
        pattern: Option<Pattern>,

        /// Print a JSON report instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Run the anti-pattern variant of every pattern (or one)
    ///
    /// Failures are reported, not propagated.
    Avoid {
        /// Only run this pattern (see `warden list`)
        #[arg(short, long, value_parser = parse_pattern)]
        pattern: Option<Pattern>,

        /// Print a JSON report instead of formatted output
        #[arg(long)]
        json: bool,

        /// Exit with status 1 if any anti-pattern failed
        #[arg(long)]
        strict: bool,
    },

    /// List catalog patterns
    List,
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    s.parse()
}
