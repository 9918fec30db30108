//! cmdwrap CLI
//!
//! Copyright 2026 CityMania Contributors
//! Licensed under the GNU General Public License v2.0; you may not use this file except in compliance with the GPL-2.0.
//! See the LICENSE file in the project root for details.

mod commands;
mod config;
mod error;
mod generator;
mod ops;

use clap::{Parser, Subcommand};
use commands::{check, generate};

/// cmdwrap CLI - Generate C++ command wrapper classes from engine headers
#[derive(Parser)]
#[command(name = "cmdwrap")]
#[command(about = "Generate C++ command wrapper classes from engine headers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the wrapper declarations/definitions pair
    Generate {
        /// Path to the generator manifest
        #[arg(long)]
        manifest: Option<String>,
        /// Output path stem, overriding the manifest
        #[arg(long)]
        output: Option<String>,
    },
    /// Parse the configured headers without writing output
    Check {
        /// Path to the generator manifest
        #[arg(long)]
        manifest: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Generate { manifest, output } => {
            let opts = generate::Options { manifest, output };
            generate::run(&opts)
        }
        Commands::Check { manifest } => {
            let opts = check::Options { manifest };
            check::run(&opts)
        }
    };

    std::process::exit(exit_code);
}
