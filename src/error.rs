use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentkitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Manifest parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration file not found: {0}\nRun 'agentkit init' to create one.")]
    ConfigNotFound(PathBuf),

    #[error("Missing credentials: {0}")]
    Credentials(String),

    #[error("Unsupported service: {0}")]
    UnsupportedService(String),

    #[error("{action} failed: {code}: {message}")]
    Api {
        code: String,
        message: String,
        action: String,
    },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Docker not available: {0}")]
    DockerNotAvailable(String),

    #[error("Docker command failed: {0}")]
    Docker(String),

    #[error("Project detection failed: {0}")]
    ProjectDetection(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Agent is not deployed: {0}")]
    NotDeployed(String),

    #[error("Code generation failed: {0}")]
    Codegen(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Aborted by user")]
    Aborted,
}

impl AgentkitError {
    /// True for platform errors whose code marks a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AgentkitError::Api { code, .. } if code.contains("NotFound"))
    }

    /// True for creation errors on a resource that is already there.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, AgentkitError::Api { code, .. } if code.starts_with("AlreadyExists"))
    }
}

impl From<ureq::Error> for AgentkitError {
    fn from(err: ureq::Error) -> Self {
        AgentkitError::Http(err.to_string())
    }
}

impl From<walkdir::Error> for AgentkitError {
    fn from(err: walkdir::Error) -> Self {
        AgentkitError::Archive(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AgentkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = AgentkitError::Api {
            code: "InvalidAgentKitRuntime.NotFound".to_string(),
            message: "runtime r-1 not found".to_string(),
            action: "GetRuntime".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GetRuntime failed: InvalidAgentKitRuntime.NotFound: runtime r-1 not found"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_is_not_found_other_variants() {
        assert!(!AgentkitError::Http("timeout".to_string()).is_not_found());
        let err = AgentkitError::Api {
            code: "AccessDenied".to_string(),
            message: String::new(),
            action: "ListRuntimes".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_already_exists() {
        let err = AgentkitError::Api {
            code: "AlreadyExists.Namespace".to_string(),
            message: String::new(),
            action: "CreateNamespace".to_string(),
        };
        assert!(err.is_already_exists());
        assert!(!err.is_not_found());
    }
}
