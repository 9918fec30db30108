//! C++ wrapper generator
//!
//! Renders one wrapper class per command: fields for the normalized
//! parameters, a forwarding constructor, and a `DoPost()` body dispatching
//! through the engine's command primitive.

use crate::config::Manifest;
use crate::error::{CliError, CliResult};
use crate::generator::Generator;
use cmdwrap_parser::CommandDeclaration;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tera::{Context, Tera};

/// C++ wrapper generator
pub struct CppWrapperGenerator {
    tera: Tera,
}

#[derive(Debug, Serialize)]
struct WrapperField {
    ctype: String,
    name: String,
}

/// Per-class template record with every emitted string precomputed.
#[derive(Debug, Serialize)]
struct WrapperClass {
    name: String,
    fields: Vec<WrapperField>,
    has_fields: bool,
    args_list: String,
    args_init: String,
    dispatch_constant: String,
    forward_args: String,
}

impl CppWrapperGenerator {
    pub fn new() -> Result<Self, CliError> {
        // Always use embedded templates by writing them to temporary files
        // This ensures consistency and works in all environments (including tests)
        // Use a unique directory per instance to avoid race conditions in concurrent tests
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let temp_dir = std::env::temp_dir();
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| CliError::Message(format!("System clock error: {e}")))?
            .as_nanos();
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        let unique_id = format!("{}_{}", timestamp, counter);
        let temp_template_dir = temp_dir.join(format!("cmdwrap_templates_{}", unique_id));
        if fs::create_dir_all(&temp_template_dir).is_err() {
            return Err(CliError::Message(
                "Failed to create temporary template directory".to_string(),
            ));
        }

        let declarations_template_path = temp_template_dir.join("declarations.hpp.tera");
        let definitions_template_path = temp_template_dir.join("definitions.cpp.tera");

        fs::write(
            &declarations_template_path,
            include_str!("templates/declarations.hpp.tera"),
        )
        .map_err(|e| {
            CliError::Message(format!(
                "Failed to write temporary declarations template: {}",
                e
            ))
        })?;
        fs::write(
            &definitions_template_path,
            include_str!("templates/definitions.cpp.tera"),
        )
        .map_err(|e| {
            CliError::Message(format!(
                "Failed to write temporary definitions template: {}",
                e
            ))
        })?;

        let pattern = temp_template_dir.to_string_lossy().replace('\\', "/") + "/**/*.tera";
        let mut tera = Tera::new(&pattern).map_err(|e| {
            CliError::Message(format!("Failed to initialize Tera with templates: {e}"))
        })?;

        // Auto-escape is disabled for C++ code generation
        tera.autoescape_on(vec![]);

        Ok(Self { tera })
    }

    /// Insert `_` before every uppercase letter that is not the first
    /// character, then uppercase the result (`RemoveOrder` -> `REMOVE_ORDER`).
    fn camel_to_screaming_snake(s: &str) -> String {
        let mut result = String::new();
        for (i, c) in s.chars().enumerate() {
            if i != 0 && c.is_ascii_uppercase() {
                result.push('_');
            }
            for upper in c.to_uppercase() {
                result.push(upper);
            }
        }
        result
    }

    /// Build the per-class template record from a normalized declaration.
    fn wrapper_class(command: &CommandDeclaration, manifest: &Manifest) -> WrapperClass {
        let name = command
            .name
            .strip_prefix(manifest.command_prefix.as_str())
            .unwrap_or(&command.name)
            .to_string();

        let fields: Vec<WrapperField> = command
            .parameters
            .iter()
            .map(|p| WrapperField {
                ctype: p.ctype.clone(),
                name: p.name.clone(),
            })
            .collect();

        let args_list = fields
            .iter()
            .map(|f| format!("{}{}", f.ctype, f.name))
            .collect::<Vec<_>>()
            .join(", ");
        let args_init = fields
            .iter()
            .map(|f| format!("{0}{{{0}}}", f.name))
            .collect::<Vec<_>>()
            .join(", ");

        let dispatch_constant = format!(
            "{}{}",
            manifest.dispatch_prefix,
            Self::camel_to_screaming_snake(&name)
        );

        // The error sink and location always come from the base class, even
        // when the class declares no location field of its own.
        let mut forward = vec!["this->error".to_string(), "this->tile".to_string()];
        forward.extend(fields.iter().map(|f| format!("this->{}", f.name)));
        let forward_args = forward.join(", ");

        WrapperClass {
            name,
            has_fields: !fields.is_empty(),
            fields,
            args_list,
            args_init,
            dispatch_constant,
            forward_args,
        }
    }

    /// Render the declarations artifact (class definitions).
    fn render_declarations(
        &self,
        classes: &[WrapperClass],
        manifest: &Manifest,
    ) -> Result<String, CliError> {
        let mut tera_context = Context::new();
        tera_context.insert("include_guard", &manifest.include_guard);
        tera_context.insert("base_include", &manifest.base_include);
        tera_context.insert("base_class", &manifest.base_class);
        tera_context.insert("namespace_outer", &manifest.namespace[0]);
        tera_context.insert("namespace_inner", &manifest.namespace[1]);
        tera_context.insert("classes", classes);

        self.tera
            .render("declarations.hpp.tera", &tera_context)
            .map_err(|e| {
                CliError::Message(format!("Failed to render declarations template: {e}"))
            })
    }

    /// Render the definitions artifact (`DoPost` bodies).
    fn render_definitions(
        &self,
        classes: &[WrapperClass],
        manifest: &Manifest,
        declarations_include: &str,
    ) -> Result<String, CliError> {
        let headers: Vec<String> = manifest
            .headers
            .iter()
            .map(|h| format!("{}{}", manifest.header_include_prefix, h))
            .collect();

        let mut tera_context = Context::new();
        tera_context.insert("pch_include", &manifest.pch_include);
        tera_context.insert("declarations_include", declarations_include);
        tera_context.insert("headers", &headers);
        tera_context.insert("dispatch_primitive", &manifest.dispatch_primitive);
        tera_context.insert("namespace_outer", &manifest.namespace[0]);
        tera_context.insert("namespace_inner", &manifest.namespace[1]);
        tera_context.insert("classes", classes);

        self.tera
            .render("definitions.cpp.tera", &tera_context)
            .map_err(|e| CliError::Message(format!("Failed to render definitions template: {e}")))
    }
}

impl Generator for CppWrapperGenerator {
    fn generate(
        &self,
        commands: &[CommandDeclaration],
        manifest: &Manifest,
        output_stem: &Path,
    ) -> CliResult<()> {
        let classes: Vec<WrapperClass> = commands
            .iter()
            .map(|c| Self::wrapper_class(c, manifest))
            .collect();

        let declarations_path = output_stem.with_extension("hpp");
        let definitions_path = output_stem.with_extension("cpp");
        let declarations_include = declarations_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                CliError::Message(format!(
                    "Invalid output stem: {}",
                    output_stem.display()
                ))
            })?
            .to_string();

        // Render both artifacts before writing either; a failed run must not
        // leave a partial pair behind.
        let declarations = self.render_declarations(&classes, manifest)?;
        let definitions = self.render_definitions(&classes, manifest, &declarations_include)?;

        if let Some(parent) = declarations_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&declarations_path, declarations)?;
        fs::write(&definitions_path, definitions)?;

        Ok(())
    }
}
