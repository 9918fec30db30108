//! cmdwrap Parser Library
//!
//! Copyright 2026 CityMania Contributors
//! Licensed under the GNU General Public License v2.0; you may not use this file except in compliance with the GPL-2.0.
//! See the LICENSE file in the project root for details.
//!
//! This library extracts command declarations from C++ engine headers and
//! normalizes their parameter lists for wrapper generation. It works only
//! with in-memory strings (no file I/O); reading headers and writing the
//! generated artifacts belongs to the CLI.
//!
//! # Example
//!
//! ```rust
//! use cmdwrap_parser::parse_header;
//!
//! let header = r#"
//! std::tuple<CommandCost, Money> CmdFoundTown(DoCommandFlags flags, TileIndex tile, TownSize size, bool city);
//! "#;
//!
//! let commands = parse_header(header, "Cmd", "TileIndex")?;
//! assert_eq!(commands[0].name, "CmdFoundTown");
//! assert_eq!(commands[0].parameters.len(), 2);
//! # Ok::<(), cmdwrap_parser::ParseError>(())
//! ```

pub mod error;
pub mod model;
pub mod normalize;
pub mod scanner;

pub use error::ParseError;
pub use model::{CommandDeclaration, ParameterSpec};

/// Scan a header's text and normalize every matched declaration.
///
/// Declarations are returned in textual order with the conventional leading
/// parameters already stripped; their names keep the marker prefix.
///
/// # Errors
///
/// Returns `ParseError` on a malformed parameter inside a matched
/// declaration or a declaration with fewer than two parameters. A header
/// that matches nothing yields an empty list.
pub fn parse_header(
    content: &str,
    command_prefix: &str,
    location_type: &str,
) -> Result<Vec<CommandDeclaration>, ParseError> {
    let scanner = scanner::HeaderScanner::new(command_prefix)?;
    scanner
        .scan(content)?
        .into_iter()
        .map(|declaration| normalize::strip_conventional_parameters(declaration, location_type))
        .collect()
}
