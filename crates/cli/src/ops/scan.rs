//! Header scanning shared by the generate and check commands

use crate::config::Manifest;
use crate::error::{CliError, CliResult};
use cmdwrap_parser::normalize::strip_conventional_parameters;
use cmdwrap_parser::scanner::HeaderScanner;
use cmdwrap_parser::CommandDeclaration;
use std::fs;
use std::path::Path;

/// Normalized commands extracted from one header, keyed by the manifest's
/// header path.
#[derive(Debug)]
pub struct HeaderCommands {
    pub header: String,
    pub commands: Vec<CommandDeclaration>,
}

/// Scan every manifest header in order and normalize the declarations.
///
/// Fails on the first unreadable header or malformed declaration; partial
/// results are never returned. A header contributing zero commands is valid.
pub fn scan_headers(manifest: &Manifest, base_dir: &Path) -> CliResult<Vec<HeaderCommands>> {
    let scanner = HeaderScanner::new(&manifest.command_prefix)?;

    let mut results = Vec::new();
    for header in &manifest.headers {
        let path = base_dir.join(header);
        let content = fs::read_to_string(&path).map_err(|e| {
            CliError::Message(format!("Failed to read header {}: {e}", path.display()))
        })?;

        let mut commands = Vec::new();
        for declaration in scanner.scan(&content)? {
            commands.push(strip_conventional_parameters(
                declaration,
                &manifest.location_type,
            )?);
        }
        results.push(HeaderCommands {
            header: header.clone(),
            commands,
        });
    }
    Ok(results)
}
