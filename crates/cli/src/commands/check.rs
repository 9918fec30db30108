//! Check command implementation
//!
//! Parses and normalizes the configured headers without writing any output,
//! so a malformed header is caught before it reaches a generation run.

use crate::config::Manifest;
use crate::error::CliResult;
use crate::ops::scan::scan_headers;
use std::path::PathBuf;

pub struct Options {
    pub manifest: Option<String>,
}

fn determine_manifest_path(options: &Options) -> PathBuf {
    PathBuf::from(options.manifest.as_deref().unwrap_or("cmdwrap.yaml"))
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(total) => {
            println!("✓ {total} command(s) parsed");
            0
        }
        Err(e) => {
            eprintln!("✗ Check failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<usize> {
    let manifest_path = determine_manifest_path(options);
    let manifest = Manifest::load(&manifest_path)?;
    let base_dir = Manifest::base_dir(&manifest_path);

    let scanned = scan_headers(&manifest, &base_dir)?;

    let mut total = 0;
    for header in &scanned {
        println!("  {}: {} command(s)", header.header, header.commands.len());
        total += header.commands.len();
    }
    Ok(total)
}
