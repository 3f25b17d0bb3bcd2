use super::{generate_file, EmitOptions, GenerateStatus};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// `codegen.toml`: drive several definitions in one run.
///
/// ```toml
/// crate_path = "agentkit"
///
/// [[service]]
/// schema = "api/runtime.json"
/// output = "src/generated/runtime.rs"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_crate_path")]
    pub crate_path: String,
    #[serde(default, rename = "service")]
    pub services: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub schema: PathBuf,
    pub output: PathBuf,
}

fn default_crate_path() -> String {
    "agentkit".to_string()
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Generate every entry; paths are relative to `base`.
    pub fn run(&self, base: &Path, check: bool) -> Result<Vec<(PathBuf, GenerateStatus)>> {
        let options = EmitOptions {
            crate_path: self.crate_path.clone(),
        };
        let mut results = Vec::with_capacity(self.services.len());
        for entry in &self.services {
            let output = base.join(&entry.output);
            let status = generate_file(&base.join(&entry.schema), &output, &options, check)?;
            results.push((output, status));
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_runs_relative_to_base() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("api")).unwrap();
        fs::write(
            dir.path().join("api/a.json"),
            r#"{"client": "AClient", "actions": {"GetA": {}}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("codegen.toml"),
            "crate_path = \"crate\"\n\n[[service]]\nschema = \"api/a.json\"\noutput = \"gen/a.rs\"\n",
        )
        .unwrap();

        let manifest = Manifest::load(&dir.path().join("codegen.toml")).unwrap();
        assert_eq!(manifest.services.len(), 1);
        let results = manifest.run(dir.path(), false).unwrap();
        assert_eq!(results[0].1, GenerateStatus::Written);

        let code = fs::read_to_string(dir.path().join("gen/a.rs")).unwrap();
        assert!(code.contains("use crate::client::ServiceClient;"));
    }

    #[test]
    fn test_manifest_defaults() {
        let manifest: Manifest = toml::from_str("").unwrap();
        assert_eq!(manifest.crate_path, "agentkit");
        assert!(manifest.services.is_empty());
    }
}
