//! build / deploy / invoke / status / destroy for each launch type.
//!
//! Every step that produces something (an image, a container, a runtime)
//! records it back into `agentkit.yaml`, so later steps and later runs pick
//! up where the previous one stopped.

pub mod build;
pub mod hybrid;
pub mod invoke;
pub mod local;
pub mod registry;
pub mod wait;

use crate::config::{LaunchType, ProjectConfig};
use crate::error::{AgentkitError, Result};
use crate::platform::{provider, CloudProvider, Env, GlobalConfig, PlatformContext};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

pub use build::BuildOptions;
pub use invoke::{Auth, InvokeRequest};

/// What `status` reports, whatever the launch type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    pub launch_type: String,
    pub state: String,
    pub endpoint: Option<String>,
    pub details: Vec<(String, String)>,
}

impl StatusReport {
    fn detail(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.details.push((key.to_string(), value));
        }
        self
    }
}

pub struct Lifecycle {
    config: ProjectConfig,
    verbose: bool,
    provider_override: Option<String>,
}

impl Lifecycle {
    pub fn new(config: ProjectConfig, verbose: bool) -> Self {
        Self {
            config,
            verbose,
            provider_override: None,
        }
    }

    pub fn with_provider(mut self, provider: Option<&str>) -> Self {
        self.provider_override = provider.map(str::to_string);
        self
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn launch_type(&self) -> LaunchType {
        self.config.config.common.launch_type
    }

    pub fn project_dir(&self) -> PathBuf {
        self.config.project_dir()
    }

    fn unsupported(&self, operation: &str) -> AgentkitError {
        AgentkitError::Unsupported(format!(
            "'{}' is not available for launch_type {}; use launch_type hybrid to build locally \
             and run on AgentKit Runtime",
            operation,
            self.launch_type()
        ))
    }

    /// Provider for this project: flag > env > project > global > default.
    pub fn provider(&self) -> Result<CloudProvider> {
        let global = GlobalConfig::load()?;
        let (provider, source) = provider::resolve_with_source(
            self.provider_override.as_deref(),
            self.config.config.common.cloud_provider.as_deref(),
            &Env::from_process(),
            &global,
        )?;
        log::debug!("cloud provider {} (from {})", provider, source.as_str());
        Ok(provider)
    }

    /// Platform context for the project's provider, pinned to `region` when set.
    pub fn platform(&self, region: &str) -> Result<PlatformContext> {
        let provider = self.provider()?;
        Ok(PlatformContext::new(provider, GlobalConfig::load()?, Env::from_process()).with_region(Some(region)))
    }

    pub fn build(&mut self, options: &BuildOptions) -> Result<()> {
        self.config.validate()?;
        match self.launch_type() {
            LaunchType::Local => local::build(self, options),
            LaunchType::Hybrid => hybrid::build(self, options),
            LaunchType::Cloud => Err(self.unsupported("build")),
        }
    }

    pub fn deploy(&mut self) -> Result<()> {
        self.config.validate()?;
        match self.launch_type() {
            LaunchType::Local => local::deploy(self),
            LaunchType::Hybrid => hybrid::deploy(self),
            LaunchType::Cloud => Err(self.unsupported("deploy")),
        }
    }

    /// Build then deploy.
    pub fn launch(&mut self, options: &BuildOptions) -> Result<()> {
        self.build(options)?;
        self.deploy()
    }

    pub fn invoke(&self, request: &InvokeRequest) -> Result<()> {
        let (endpoint, auth) = match self.launch_type() {
            LaunchType::Local => (local::endpoint(self), Auth::None),
            LaunchType::Hybrid => hybrid::endpoint(self)?,
            LaunchType::Cloud => return Err(self.unsupported("invoke")),
        };
        invoke::invoke(&endpoint, &self.config.config.common, &auth, request)
    }

    pub fn status(&self) -> Result<StatusReport> {
        match self.launch_type() {
            LaunchType::Local => local::status(self),
            LaunchType::Hybrid => hybrid::status(self),
            LaunchType::Cloud => Err(self.unsupported("status")),
        }
    }

    pub fn destroy(&mut self) -> Result<()> {
        match self.launch_type() {
            LaunchType::Local => local::destroy(self),
            LaunchType::Hybrid => hybrid::destroy(self),
            LaunchType::Cloud => Err(self.unsupported("destroy")),
        }
    }
}

/// Spinner for long waits; hidden when stderr is not a terminal.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

pub(crate) fn timestamp() -> String {
    chrono::Local::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentkitConfig;
    use tempfile::TempDir;

    fn lifecycle(launch_type: LaunchType) -> (TempDir, Lifecycle) {
        let dir = TempDir::new().unwrap();
        let mut config = AgentkitConfig::default();
        config.common.agent_name = "demo".to_string();
        config.common.launch_type = launch_type;
        let project = ProjectConfig::new(dir.path().join("agentkit.yaml"), config);
        (dir, Lifecycle::new(project, false))
    }

    #[test]
    fn test_cloud_is_unsupported() {
        let (_dir, mut lc) = lifecycle(LaunchType::Cloud);
        let err = lc.deploy().unwrap_err();
        assert!(matches!(err, AgentkitError::Unsupported(_)));
        assert!(err.to_string().contains("hybrid"));
        assert!(lc.status().is_err());
    }

    #[test]
    fn test_invalid_config_rejected_before_build() {
        let (_dir, mut lc) = lifecycle(LaunchType::Local);
        lc.config.config.common.agent_name = "bad name!".to_string();
        let err = lc.build(&BuildOptions::default()).unwrap_err();
        assert!(matches!(err, AgentkitError::InvalidConfig(_)));
    }

    #[test]
    fn test_status_report_details_skip_empty() {
        let report = StatusReport::default().detail("a", "1").detail("b", "");
        assert_eq!(report.details, vec![("a".to_string(), "1".to_string())]);
    }
}
