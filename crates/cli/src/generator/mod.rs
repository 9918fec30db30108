//! C++ wrapper generator
//!
//! Emits the paired declarations/definitions artifacts for the normalized
//! command list.

pub mod cpp;

use crate::config::Manifest;
use crate::error::CliResult;
use cmdwrap_parser::CommandDeclaration;
use std::path::Path;

/// Trait for wrapper generators
pub trait Generator {
    /// Write the wrapper artifacts for `commands` next to `output_stem`.
    fn generate(
        &self,
        commands: &[CommandDeclaration],
        manifest: &Manifest,
        output_stem: &Path,
    ) -> CliResult<()>;
}

/// Generate the C++ wrapper pair for the given commands.
pub fn generate_wrappers(
    commands: &[CommandDeclaration],
    manifest: &Manifest,
    output_stem: &Path,
) -> CliResult<()> {
    let generator = cpp::CppWrapperGenerator::new()?;
    generator.generate(commands, manifest, output_stem)
}
