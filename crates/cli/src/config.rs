//! Generator manifest
//!
//! The manifest is the tool's only input surface: the ordered header list,
//! the output stem, and the engine conventions the emitters rely on. Every
//! convention has a default matching the CityMania layout, so a minimal
//! manifest only lists headers and an output stem.

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Header files scanned for command declarations, in order. Paths are
    /// relative to the manifest's directory.
    pub headers: Vec<String>,
    /// Output path stem; the artifact extensions are appended per file.
    pub output: String,
    /// Marker prefix on command function names, stripped for class names.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Type of the conventional location parameter owned by the base class.
    #[serde(default = "default_location_type")]
    pub location_type: String,
    /// Base class the generated wrappers derive from.
    #[serde(default = "default_base_class")]
    pub base_class: String,
    /// Template the submit body dispatches through.
    #[serde(default = "default_dispatch_primitive")]
    pub dispatch_primitive: String,
    /// Prefix of the command-identifying dispatch constants.
    #[serde(default = "default_dispatch_prefix")]
    pub dispatch_prefix: String,
    /// Enclosing namespaces, outermost first. Exactly two levels.
    #[serde(default = "default_namespace")]
    pub namespace: Vec<String>,
    /// Include-guard macro for the declarations artifact.
    #[serde(default = "default_include_guard")]
    pub include_guard: String,
    /// Include of the base-class header, relative to the output directory.
    #[serde(default = "default_base_include")]
    pub base_include: String,
    /// Precompiled-header include for the definitions artifact.
    #[serde(default = "default_pch_include")]
    pub pch_include: String,
    /// Prefix turning manifest header paths into includes usable from the
    /// output directory.
    #[serde(default = "default_header_include_prefix")]
    pub header_include_prefix: String,
}

fn default_command_prefix() -> String {
    "Cmd".to_string()
}

fn default_location_type() -> String {
    "TileIndex".to_string()
}

fn default_base_class() -> String {
    "Command".to_string()
}

fn default_dispatch_primitive() -> String {
    "Command".to_string()
}

fn default_dispatch_prefix() -> String {
    "CMD_".to_string()
}

fn default_namespace() -> Vec<String> {
    vec!["citymania".to_string(), "cmd".to_string()]
}

fn default_include_guard() -> String {
    "CM_GEN_COMMANDS_HPP".to_string()
}

fn default_base_include() -> String {
    "../cm_command_type.hpp".to_string()
}

fn default_pch_include() -> String {
    "../../stdafx.h".to_string()
}

fn default_header_include_prefix() -> String {
    "../../".to_string()
}

impl Manifest {
    /// Read and validate a manifest file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Message(format!("Failed to read manifest {}: {e}", path.display()))
        })?;
        let manifest: Manifest = serde_yaml::from_str(&content).map_err(|e| {
            CliError::Message(format!("Invalid manifest {}: {e}", path.display()))
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> CliResult<()> {
        if self.headers.is_empty() {
            return Err(CliError::Message(
                "Manifest must list at least one header".to_string(),
            ));
        }
        if self.namespace.len() != 2 {
            return Err(CliError::Message(format!(
                "Manifest namespace must have exactly two levels, got {}",
                self.namespace.len()
            )));
        }
        Ok(())
    }

    /// Directory the manifest's relative paths resolve against.
    pub fn base_dir(manifest_path: &Path) -> PathBuf {
        manifest_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_minimal_manifest_gets_defaults() {
        let manifest: Manifest =
            serde_yaml::from_str("headers: [src/town_cmd.h]\noutput: generated/cm_gen_commands")
                .unwrap();

        assert_eq!(manifest.headers, vec!["src/town_cmd.h"]);
        assert_eq!(manifest.output, "generated/cm_gen_commands");
        assert_eq!(manifest.command_prefix, "Cmd");
        assert_eq!(manifest.location_type, "TileIndex");
        assert_eq!(manifest.base_class, "Command");
        assert_eq!(manifest.dispatch_primitive, "Command");
        assert_eq!(manifest.dispatch_prefix, "CMD_");
        assert_eq!(manifest.namespace, vec!["citymania", "cmd"]);
        assert_eq!(manifest.include_guard, "CM_GEN_COMMANDS_HPP");
        assert_eq!(manifest.base_include, "../cm_command_type.hpp");
        assert_eq!(manifest.pch_include, "../../stdafx.h");
        assert_eq!(manifest.header_include_prefix, "../../");
    }

    #[test]
    fn test_manifest_overrides() {
        let yaml = r"
headers:
  - cmd/a.h
  - cmd/b.h
output: out/wrappers
command_prefix: Act
location_type: MapCoord
namespace: [engine, actions]
";
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(manifest.headers.len(), 2);
        assert_eq!(manifest.command_prefix, "Act");
        assert_eq!(manifest.location_type, "MapCoord");
        assert_eq!(manifest.namespace, vec!["engine", "actions"]);
    }

    #[test]
    fn test_load_rejects_empty_headers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "headers: []\noutput: out/wrappers").unwrap();

        let err = Manifest::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("at least one header"));
    }

    #[test]
    fn test_load_rejects_wrong_namespace_arity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "headers: [a.h]\noutput: out/wrappers\nnamespace: [one, two, three]"
        )
        .unwrap();

        let err = Manifest::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("exactly two levels"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Manifest::load(Path::new("/nonexistent/cmdwrap.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }

    #[test]
    fn test_base_dir() {
        assert_eq!(
            Manifest::base_dir(Path::new("project/cmdwrap.yaml")),
            PathBuf::from("project")
        );
        assert_eq!(
            Manifest::base_dir(Path::new("cmdwrap.yaml")),
            PathBuf::from(".")
        );
    }
}
