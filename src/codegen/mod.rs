//! Generate Rust types and a typed client from a JSON API definition.
//!
//! The definition lists named actions with request and response JSON
//! schemas. Every object becomes a struct, every action a client method, and
//! JSON primitives map one to one onto Rust types.

pub mod emit;
pub mod manifest;
pub mod naming;
pub mod schema;

pub use emit::{render, EmitOptions, HEADER};
pub use manifest::Manifest;
pub use schema::ApiDefinition;

use crate::error::{AgentkitError, Result};
use std::fs;
use std::path::Path;

/// Outcome of generating one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateStatus {
    Written,
    Unchanged,
    /// `--check` found a file that differs from the generated code.
    Stale,
}

/// Generate `output` from the definition at `schema_path`.
///
/// With `check`, nothing is written and a differing file reports `Stale`.
pub fn generate_file(
    schema_path: &Path,
    output: &Path,
    options: &EmitOptions,
    check: bool,
) -> Result<GenerateStatus> {
    let text = fs::read_to_string(schema_path).map_err(|e| {
        AgentkitError::Codegen(format!("cannot read {}: {}", schema_path.display(), e))
    })?;
    let def = ApiDefinition::from_json(&text)
        .map_err(|e| AgentkitError::Codegen(format!("{}: {}", schema_path.display(), e)))?;
    let code = render(&def, options)?;

    let existing = fs::read_to_string(output).ok();
    if existing.as_deref() == Some(code.as_str()) {
        return Ok(GenerateStatus::Unchanged);
    }
    if check {
        return Ok(GenerateStatus::Stale);
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, code)?;
    log::info!(
        "generated {} ({} actions) -> {}",
        def.client,
        def.actions.len(),
        output.display()
    );
    Ok(GenerateStatus::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DEF: &str = r#"{
        "client": "PingClient",
        "description": "Ping service",
        "version": "2025-10-30",
        "actions": {"Ping": {"request": {"type": "object", "properties": {"Id": {"type": "string"}}}}}
    }"#;

    #[test]
    fn test_generate_then_check() {
        let dir = TempDir::new().unwrap();
        let schema = dir.path().join("ping.json");
        let output = dir.path().join("out/ping.rs");
        fs::write(&schema, DEF).unwrap();

        let options = EmitOptions::default();
        assert_eq!(generate_file(&schema, &output, &options, true).unwrap(), GenerateStatus::Stale);
        assert!(!output.exists());

        assert_eq!(generate_file(&schema, &output, &options, false).unwrap(), GenerateStatus::Written);
        assert_eq!(generate_file(&schema, &output, &options, true).unwrap(), GenerateStatus::Unchanged);

        let code = fs::read_to_string(&output).unwrap();
        assert!(code.contains("//! Ping service"));
        assert!(code.contains("pub struct PingClient"));
    }

    #[test]
    fn test_invalid_json_names_file() {
        let dir = TempDir::new().unwrap();
        let schema = dir.path().join("broken.json");
        fs::write(&schema, "{ not json").unwrap();
        let err = generate_file(&schema, &dir.path().join("x.rs"), &EmitOptions::default(), false)
            .unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
