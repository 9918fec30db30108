/*!
 * Copyright 2026 CityMania Contributors
 * Licensed under the GNU General Public License v2.0; you may not use this file except in compliance with the GPL-2.0.
 * See the LICENSE file in the project root for details.
 *
 * Value types for extracted command declarations.
 */

use serde::Serialize;

/// A single formal parameter of a command declaration.
///
/// `ctype` is the type text captured verbatim from the header, including a
/// `const ` qualifier and the trailing space or ` &` that separates it from
/// the name. Concatenating `ctype` and `name` reproduces the parameter as it
/// was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub ctype: String,
    pub name: String,
}

/// One command declaration extracted from a header.
///
/// Parameter order is significant end-to-end: it defines constructor
/// parameter order, field declaration order, and forwarding-call argument
/// order in the generated wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDeclaration {
    /// Remainder of a `std::tuple<CommandCost, ...>` return clause, captured
    /// verbatim. `None` for a plain `CommandCost` return.
    pub payload_type: Option<String>,
    /// Function name with the marker prefix still attached (`CmdFoundTown`).
    pub name: String,
    /// Formal parameters in declaration order.
    pub parameters: Vec<ParameterSpec>,
}
