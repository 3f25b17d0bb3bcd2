use crate::config::{self, ProjectConfig};
use crate::error::{AgentkitError, Result};
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config_path: PathBuf,
    default_name: String,
}

impl Project {
    /// Resolve the project directory and its config file path.
    ///
    /// `project_dir` defaults to the current directory; `config_file` is
    /// resolved relative to the project directory.
    pub fn detect(project_dir: Option<&Path>, config_file: Option<&Path>) -> Result<Self> {
        let root = match project_dir {
            Some(dir) => {
                let dir = expand_tilde(dir).unwrap_or_else(|| dir.to_path_buf());
                if !dir.is_dir() {
                    return Err(AgentkitError::ProjectDetection(format!(
                        "Project directory does not exist: {}",
                        dir.display()
                    )));
                }
                dir.canonicalize().unwrap_or(dir)
            }
            None => std::env::current_dir().map_err(|e| {
                AgentkitError::ProjectDetection(format!("Failed to get current directory: {}", e))
            })?,
        };

        let config_file = config_file.map(|p| expand_tilde(p).unwrap_or_else(|| p.to_path_buf()));
        let config_path = config::config_path(&root, config_file.as_deref());
        let default_name = Self::default_agent_name(&root);

        log::debug!("project root {} (config {})", root.display(), config_path.display());
        Ok(Self {
            root,
            config_path,
            default_name,
        })
    }

    /// Agent name derived from the directory name.
    fn default_agent_name(root: &Path) -> String {
        let basename = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("agentkit_app");
        let sanitized = Self::sanitize_name(basename);
        if sanitized.is_empty() {
            "agentkit_app".to_string()
        } else {
            sanitized
        }
    }

    /// Lowercase, keep `[a-z0-9_-]`, map anything else to `_`, collapse repeats.
    pub fn sanitize_name(name: &str) -> String {
        let mut result = String::new();
        let mut last_was_sep = false;

        for c in name.to_lowercase().chars() {
            if c.is_ascii_alphanumeric() || c == '-' {
                result.push(c);
                last_was_sep = false;
            } else if !last_was_sep {
                result.push('_');
                last_was_sep = true;
            }
        }

        result.trim_matches(|c| c == '_' || c == '-').to_string()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn has_config(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load_config(&self) -> Result<ProjectConfig> {
        ProjectConfig::load(&self.config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(Project::sanitize_name("MyProject"), "myproject");
        assert_eq!(Project::sanitize_name("my-project"), "my-project");
        assert_eq!(Project::sanitize_name("my project"), "my_project");
        assert_eq!(Project::sanitize_name("my...project"), "my_project");
        assert_eq!(Project::sanitize_name("__agent__"), "agent");
        assert_eq!(Project::sanitize_name("!!!"), "");
    }

    #[test]
    fn test_detect_explicit_dir() {
        let dir = TempDir::new().unwrap();
        let project_dir = dir.path().join("Weather Agent");
        std::fs::create_dir(&project_dir).unwrap();

        let project = Project::detect(Some(&project_dir), None).unwrap();
        assert_eq!(project.default_name(), "weather_agent");
        assert!(project.config_path().ends_with("agentkit.yaml"));
        assert!(!project.has_config());
    }

    #[test]
    fn test_detect_custom_config_file() {
        let dir = TempDir::new().unwrap();
        let project = Project::detect(Some(dir.path()), Some(Path::new("staging.yaml"))).unwrap();
        assert!(project.config_path().ends_with("staging.yaml"));
        assert!(project.config_path().starts_with(project.root()));
    }

    #[test]
    fn test_detect_missing_dir() {
        let err = Project::detect(Some(Path::new("/nonexistent/agentkit/project")), None).unwrap_err();
        assert!(matches!(err, AgentkitError::ProjectDetection(_)));
    }
}
