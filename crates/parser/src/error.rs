/*!
 * Copyright 2026 CityMania Contributors
 * Licensed under the GNU General Public License v2.0; you may not use this file except in compliance with the GPL-2.0.
 * See the LICENSE file in the project root for details.
 */
use thiserror::Error;

/// Errors raised while scanning command headers.
///
/// A header that matches no declarations at all is not an error; only a
/// malformed parameter inside an otherwise-matched declaration is. Headers
/// are trusted, version-controlled input, so every variant here is a source
/// defect to fix rather than a condition to recover from.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid scanner pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid parameter in {command}: {parameter:?}")]
    InvalidParameter { command: String, parameter: String },

    #[error("{command} declares fewer than the two conventional leading parameters")]
    MissingConventionalParameters { command: String },
}
