//! Generate command implementation

use crate::config::Manifest;
use crate::error::CliResult;
use crate::generator::generate_wrappers;
use crate::ops::scan::scan_headers;
use std::path::PathBuf;

pub struct Options {
    pub manifest: Option<String>,
    pub output: Option<String>,
}

fn determine_manifest_path(options: &Options) -> PathBuf {
    PathBuf::from(options.manifest.as_deref().unwrap_or("cmdwrap.yaml"))
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(output_stem) => {
            println!(
                "✓ Generated {} and {}",
                output_stem.with_extension("hpp").display(),
                output_stem.with_extension("cpp").display()
            );
            0
        }
        Err(e) => {
            eprintln!("✗ Generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<PathBuf> {
    let manifest_path = determine_manifest_path(options);
    let manifest = Manifest::load(&manifest_path)?;
    let base_dir = Manifest::base_dir(&manifest_path);

    // Every header must parse before anything is written.
    let scanned = scan_headers(&manifest, &base_dir)?;
    let commands: Vec<_> = scanned
        .into_iter()
        .flat_map(|h| h.commands)
        .collect();

    let output_stem = options
        .output
        .as_ref()
        .map_or_else(|| base_dir.join(&manifest.output), PathBuf::from);

    generate_wrappers(&commands, &manifest, &output_stem)?;
    Ok(output_stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_manifest_path_default() {
        let options = Options {
            manifest: None,
            output: None,
        };
        assert_eq!(
            determine_manifest_path(&options),
            PathBuf::from("cmdwrap.yaml")
        );
    }

    #[test]
    fn test_determine_manifest_path_with_option() {
        let options = Options {
            manifest: Some("configs/commands.yaml".to_string()),
            output: None,
        };
        assert_eq!(
            determine_manifest_path(&options),
            PathBuf::from("configs/commands.yaml")
        );
    }
}
