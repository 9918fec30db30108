/*!
 * Copyright 2026 CityMania Contributors
 * Licensed under the GNU General Public License v2.0; you may not use this file except in compliance with the GPL-2.0.
 * See the LICENSE file in the project root for details.
 *
 * Declaration extractor: scans header text for command declarations.
 */

use crate::error::ParseError;
use crate::model::{CommandDeclaration, ParameterSpec};
use regex::Regex;

/// Scans C++ header text for command declarations.
///
/// The grammar matches single-line declarations of the form
///
/// ```text
/// CommandCost CmdFoo(Type1 a, Type2 b);
/// std::tuple<CommandCost, Payload> CmdBar(Type1 a, const Type2 &b);
/// ```
///
/// where the function name starts with the configured marker prefix. The
/// tuple form's trailing type arguments are captured verbatim as the
/// declaration's payload type. Surrounding header content is ignored, so a
/// file that matches nothing yields an empty list.
pub struct HeaderScanner {
    command: Regex,
    parameter: Regex,
}

impl HeaderScanner {
    /// Compile the grammar for the given command marker prefix.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidPattern` if the prefix produces an
    /// uncompilable expression.
    pub fn new(command_prefix: &str) -> Result<Self, ParseError> {
        let command = Regex::new(&format!(
            r"(?:CommandCost|std::tuple<CommandCost, (?P<payload>[^>]*)>) (?P<name>{}\w*)\((?P<args>[^)]*)\);",
            regex::escape(command_prefix)
        ))
        .map_err(|e| ParseError::InvalidPattern(e.to_string()))?;

        // Optional qualifier/type run, then the trailing identifier. The
        // type capture keeps the separating space or " &" so emitted fields
        // reproduce the original spelling.
        let parameter = Regex::new(r"^(?P<type>(?:const )?[\w:]* &?)(?P<name>\w+)$")
            .map_err(|e| ParseError::InvalidPattern(e.to_string()))?;

        Ok(Self { command, parameter })
    }

    /// Extract every command declaration from `text`, in textual order.
    ///
    /// Re-scanning the same text yields the same sequence.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidParameter` when a parameter inside a
    /// matched declaration violates the parameter sub-grammar. Text that
    /// never matches the declaration grammar is skipped silently.
    pub fn scan(&self, text: &str) -> Result<Vec<CommandDeclaration>, ParseError> {
        let mut declarations = Vec::new();
        for caps in self.command.captures_iter(text) {
            let name = caps["name"].to_string();
            let payload_type = caps.name("payload").map(|m| m.as_str().to_string());

            let mut parameters = Vec::new();
            for piece in caps["args"].split(", ") {
                let param =
                    self.parameter
                        .captures(piece)
                        .ok_or_else(|| ParseError::InvalidParameter {
                            command: name.clone(),
                            parameter: piece.to_string(),
                        })?;
                parameters.push(ParameterSpec {
                    ctype: param["type"].to_string(),
                    name: param["name"].to_string(),
                });
            }

            declarations.push(CommandDeclaration {
                payload_type,
                name,
                parameters,
            });
        }
        Ok(declarations)
    }
}
