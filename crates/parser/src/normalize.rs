/*!
 * Copyright 2026 CityMania Contributors
 * Licensed under the GNU General Public License v2.0; you may not use this file except in compliance with the GPL-2.0.
 * See the LICENSE file in the project root for details.
 *
 * Parameter normalizer: strips the conventional leading parameters that the
 * wrapper base type already owns.
 */

use crate::error::ParseError;
use crate::model::CommandDeclaration;

/// Strip the conventional leading parameters from a command declaration.
///
/// Every command's first formal parameter is the flags/error-output
/// parameter owned by the wrapper base type; it is always dropped. When the
/// next parameter's type is `location_type` it is owned by the base type too
/// and is dropped as well. Not all commands carry a location parameter.
///
/// The location check is an exact textual match after trimming whitespace: a
/// qualified spelling such as `const TileIndex &` stays a field.
///
/// # Errors
///
/// Returns `ParseError::MissingConventionalParameters` for declarations with
/// fewer than two parameters; those are out of grammar for this domain.
pub fn strip_conventional_parameters(
    mut declaration: CommandDeclaration,
    location_type: &str,
) -> Result<CommandDeclaration, ParseError> {
    if declaration.parameters.len() < 2 {
        return Err(ParseError::MissingConventionalParameters {
            command: declaration.name,
        });
    }

    declaration.parameters.remove(0);
    if declaration.parameters[0].ctype.trim() == location_type {
        declaration.parameters.remove(0);
    }

    Ok(declaration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterSpec;

    fn declaration(params: &[(&str, &str)]) -> CommandDeclaration {
        CommandDeclaration {
            payload_type: None,
            name: "CmdFoundTown".to_string(),
            parameters: params
                .iter()
                .map(|(ctype, name)| ParameterSpec {
                    ctype: (*ctype).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_drops_flags_parameter() {
        let decl = declaration(&[("DoCommandFlags ", "flags"), ("PauseMode ", "mode")]);
        let normalized = strip_conventional_parameters(decl, "TileIndex").unwrap();

        assert_eq!(normalized.parameters.len(), 1);
        assert_eq!(normalized.parameters[0].name, "mode");
    }

    #[test]
    fn test_drops_location_parameter_after_flags() {
        let decl = declaration(&[
            ("DoCommandFlags ", "flags"),
            ("TileIndex ", "tile"),
            ("TownSize ", "size"),
            ("bool ", "city"),
        ]);
        let normalized = strip_conventional_parameters(decl, "TileIndex").unwrap();

        let names: Vec<&str> = normalized
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["size", "city"]);
    }

    #[test]
    fn test_qualified_location_spelling_is_kept() {
        // Exact-match policy: a const-reference location is not the
        // conventional location parameter and stays a field.
        let decl = declaration(&[
            ("DoCommandFlags ", "flags"),
            ("const TileIndex &", "tile"),
            ("bool ", "city"),
        ]);
        let normalized = strip_conventional_parameters(decl, "TileIndex").unwrap();

        assert_eq!(normalized.parameters.len(), 2);
        assert_eq!(normalized.parameters[0].name, "tile");
    }

    #[test]
    fn test_flags_and_location_only_leaves_no_fields() {
        let decl = declaration(&[("DoCommandFlags ", "flags"), ("TileIndex ", "tile")]);
        let normalized = strip_conventional_parameters(decl, "TileIndex").unwrap();

        assert!(normalized.parameters.is_empty());
    }

    #[test]
    fn test_single_parameter_is_out_of_grammar() {
        let decl = declaration(&[("DoCommandFlags ", "flags")]);
        let err = strip_conventional_parameters(decl, "TileIndex").unwrap_err();

        match err {
            ParseError::MissingConventionalParameters { command } => {
                assert_eq!(command, "CmdFoundTown");
            }
            other => panic!("Expected MissingConventionalParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_type_survives_normalization() {
        let mut decl = declaration(&[("DoCommandFlags ", "flags"), ("TileIndex ", "tile")]);
        decl.payload_type = Some("Money".to_string());
        let normalized = strip_conventional_parameters(decl, "TileIndex").unwrap();

        assert_eq!(normalized.payload_type.as_deref(), Some("Money"));
    }
}
