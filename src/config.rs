use crate::error::{AgentkitError, Result};
use crate::platform::GlobalConfig;
use crate::utils::yaml;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = "agentkit.yaml";

/// Placeholder meaning "create or generate this for me".
pub const AUTO: &str = "Auto";

pub const AUTH_KEY_AUTH: &str = "key_auth";
pub const AUTH_CUSTOM_JWT: &str = "custom_jwt";

pub const DEFAULT_CR_NAMESPACE: &str = "agentkit";
pub const DEFAULT_CR_INSTANCE_TEMPLATE: &str = "agentkit-platform-{{account_id}}";
pub const DEFAULT_IMAGE_TAG_TEMPLATE: &str = "{{timestamp}}";

static AGENT_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid agent name regex"));
static ENTRY_POINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\-/\.]+?\.(py|go|sh)$").expect("valid entry point regex"));

/// Empty and `Auto` both mean "not configured".
pub fn is_invalid_value(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == AUTO
}

pub fn is_valid_value(value: &str) -> bool {
    !is_invalid_value(value)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LaunchType {
    Local,
    #[default]
    Hybrid,
    Cloud,
}

impl LaunchType {
    pub const ALL: [LaunchType; 3] = [LaunchType::Local, LaunchType::Hybrid, LaunchType::Cloud];

    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchType::Local => "local",
            LaunchType::Hybrid => "hybrid",
            LaunchType::Cloud => "cloud",
        }
    }
}

impl fmt::Display for LaunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaunchType {
    type Err = AgentkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(LaunchType::Local),
            "hybrid" => Ok(LaunchType::Hybrid),
            "cloud" => Ok(LaunchType::Cloud),
            other => Err(AgentkitError::InvalidConfig(format!(
                "launch_type must be one of: local, hybrid, cloud (got '{}')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    #[serde(alias = "python")]
    Python,
    #[serde(alias = "golang", alias = "go", alias = "Go")]
    Golang,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Golang => "Golang",
        }
    }

    pub fn supported_versions(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["3.10", "3.11", "3.12", "3.13"],
            Language::Golang => &["1.24"],
        }
    }

    pub fn recommended_version(&self) -> &'static str {
        match self {
            Language::Python => "3.12",
            Language::Golang => "1.24",
        }
    }

    pub fn dependencies_file(&self) -> &'static str {
        match self {
            Language::Python => "requirements.txt",
            Language::Golang => "go.mod",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = AgentkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "golang" | "go" => Ok(Language::Golang),
            other => Err(AgentkitError::InvalidConfig(format!(
                "language must be Python or Golang (got '{}')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommonConfig {
    #[serde(default)]
    pub agent_name: String,

    #[serde(default = "default_entry_point")]
    pub entry_point: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub language_version: String,

    #[serde(default = "default_agent_type")]
    pub agent_type: String,

    #[serde(default)]
    pub dependencies_file: String,

    /// Shared by every launch type.
    #[serde(default)]
    pub runtime_envs: BTreeMap<String, String>,

    #[serde(default)]
    pub launch_type: LaunchType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        let mut common = Self {
            agent_name: String::new(),
            entry_point: default_entry_point(),
            description: String::new(),
            language: Language::default(),
            language_version: String::new(),
            agent_type: default_agent_type(),
            dependencies_file: String::new(),
            runtime_envs: BTreeMap::new(),
            launch_type: LaunchType::default(),
            cloud_provider: None,
        };
        common.apply_language_defaults();
        common
    }
}

fn default_entry_point() -> String {
    "agent.py".to_string()
}

fn default_agent_type() -> String {
    "Basic App".to_string()
}

impl CommonConfig {
    /// Fill or correct language_version and dependencies_file for the language.
    pub fn apply_language_defaults(&mut self) {
        let version = self.language_version.trim();
        let version_mismatch = match self.language {
            Language::Golang => version.starts_with("3."),
            Language::Python => version.starts_with("1."),
        };
        if version.is_empty() || version_mismatch {
            self.language_version = self.language.recommended_version().to_string();
        }

        let deps = self.dependencies_file.trim();
        let deps_mismatch = match self.language {
            Language::Golang => deps == "requirements.txt",
            Language::Python => deps == "go.mod",
        };
        if deps.is_empty() || deps_mismatch {
            self.dependencies_file = self.language.dependencies_file().to_string();
        }
    }

    /// Switch language, resetting version and dependencies file when they were defaults.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if ["3.12", "1.24"].contains(&self.language_version.as_str()) {
            self.language_version.clear();
        }
        if ["requirements.txt", "go.mod"].contains(&self.dependencies_file.as_str()) {
            self.dependencies_file.clear();
        }
        self.apply_language_defaults();
    }

    /// A2A agents speak JSON-RPC at `/`.
    pub fn is_a2a(&self) -> bool {
        self.agent_type.to_uppercase().contains("A2A")
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.agent_name.trim().is_empty() {
            errors.push("agent_name is required".to_string());
        } else if !AGENT_NAME_RE.is_match(&self.agent_name) {
            errors.push(
                "agent_name: only letters, numbers, underscore(_) and hyphen(-) are allowed".to_string(),
            );
        }

        if self.entry_point.trim().is_empty() {
            errors.push("entry_point is required".to_string());
        } else if !ENTRY_POINT_RE.is_match(&self.entry_point) {
            errors.push("entry_point: must be a .py, .go or .sh file path".to_string());
        }

        let versions = self.language.supported_versions();
        if !versions.contains(&self.language_version.as_str()) {
            errors.push(format!(
                "language_version: {} version must be one of: {}",
                self.language,
                versions.join(", ")
            ));
        }

        errors
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalStrategyConfig {
    #[serde(default = "default_local_image_tag")]
    pub image_tag: String,

    #[serde(default = "default_invoke_port")]
    pub invoke_port: u16,

    /// Derived from the agent name when empty.
    #[serde(default)]
    pub container_name: String,

    #[serde(default = "default_ports")]
    pub ports: Vec<String>,

    #[serde(default)]
    pub volumes: Vec<String>,

    #[serde(default = "default_restart_policy")]
    pub restart_policy: String,

    #[serde(default = "default_memory_limit")]
    pub memory_limit: String,

    #[serde(default = "default_cpu_limit")]
    pub cpu_limit: String,

    #[serde(default)]
    pub container_id: String,

    #[serde(default)]
    pub image_id: String,

    #[serde(default)]
    pub build_timestamp: String,

    #[serde(default)]
    pub deploy_timestamp: String,

    #[serde(default)]
    pub full_image_name: String,

    #[serde(default)]
    pub runtime_envs: BTreeMap<String, String>,
}

impl Default for LocalStrategyConfig {
    fn default() -> Self {
        Self {
            image_tag: default_local_image_tag(),
            invoke_port: default_invoke_port(),
            container_name: String::new(),
            ports: default_ports(),
            volumes: Vec::new(),
            restart_policy: default_restart_policy(),
            memory_limit: default_memory_limit(),
            cpu_limit: default_cpu_limit(),
            container_id: String::new(),
            image_id: String::new(),
            build_timestamp: String::new(),
            deploy_timestamp: String::new(),
            full_image_name: String::new(),
            runtime_envs: BTreeMap::new(),
        }
    }
}

fn default_local_image_tag() -> String {
    "latest".to_string()
}

fn default_invoke_port() -> u16 {
    8000
}

fn default_ports() -> Vec<String> {
    vec!["8000:8000".to_string()]
}

fn default_restart_policy() -> String {
    "unless-stopped".to_string()
}

fn default_memory_limit() -> String {
    "1g".to_string()
}

fn default_cpu_limit() -> String {
    "1".to_string()
}

impl LocalStrategyConfig {
    pub fn container_name_for(&self, agent_name: &str) -> String {
        if !self.container_name.trim().is_empty() {
            return self.container_name.clone();
        }
        let base = if agent_name.is_empty() { "agentkit-app" } else { agent_name };
        format!("{}-container", base)
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for port in &self.ports {
            let valid = port
                .split_once(':')
                .map(|(host, container)| host.parse::<u16>().is_ok() && container.parse::<u16>().is_ok())
                .unwrap_or(false);
            if !valid {
                errors.push(format!("launch_types.local.ports: '{}' must be host:container", port));
            }
        }
        if self.cpu_limit.parse::<f64>().map(|c| c <= 0.0).unwrap_or(true) {
            errors.push(format!(
                "launch_types.local.cpu_limit: '{}' must be a positive number",
                self.cpu_limit
            ));
        }
        errors
    }
}

/// Runtime and registry settings shared by the hybrid and cloud strategies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HybridStrategyConfig {
    #[serde(default = "default_image_tag_template")]
    pub image_tag: String,

    #[serde(default)]
    pub image_id: String,

    #[serde(default)]
    pub build_timestamp: String,

    #[serde(default)]
    pub deploy_timestamp: String,

    #[serde(default)]
    pub full_image_name: String,

    /// Empty means the platform default region.
    #[serde(default, alias = "ve_region")]
    pub region: String,

    #[serde(default)]
    pub region_overrides: BTreeMap<String, String>,

    #[serde(default = "default_auto", alias = "ve_cr_instance_name")]
    pub cr_instance_name: String,

    #[serde(default = "default_cr_namespace", alias = "ve_cr_namespace_name")]
    pub cr_namespace_name: String,

    /// Defaults to the agent name.
    #[serde(default, alias = "ve_cr_repo_name")]
    pub cr_repo_name: String,

    #[serde(default = "default_instance_type")]
    pub cr_auto_create_instance_type: String,

    #[serde(default, alias = "ve_cr_image_full_url")]
    pub cr_image_full_url: String,

    #[serde(default, alias = "ve_runtime_id")]
    pub runtime_id: String,

    #[serde(default = "default_auto", alias = "ve_runtime_name")]
    pub runtime_name: String,

    #[serde(default = "default_auto", alias = "ve_runtime_role_name")]
    pub runtime_role_name: String,

    #[serde(default = "default_auth_type")]
    pub runtime_auth_type: String,

    #[serde(default = "default_auto", alias = "ve_runtime_apikey_name")]
    pub runtime_apikey_name: String,

    #[serde(default, alias = "ve_runtime_apikey")]
    pub runtime_apikey: String,

    #[serde(default)]
    pub runtime_jwt_discovery_url: String,

    #[serde(default)]
    pub runtime_jwt_allowed_clients: Vec<String>,

    #[serde(default, alias = "ve_runtime_endpoint")]
    pub runtime_endpoint: String,

    #[serde(default)]
    pub runtime_envs: BTreeMap<String, String>,
}

impl Default for HybridStrategyConfig {
    fn default() -> Self {
        Self {
            image_tag: default_image_tag_template(),
            image_id: String::new(),
            build_timestamp: String::new(),
            deploy_timestamp: String::new(),
            full_image_name: String::new(),
            region: String::new(),
            region_overrides: BTreeMap::new(),
            cr_instance_name: default_auto(),
            cr_namespace_name: default_cr_namespace(),
            cr_repo_name: String::new(),
            cr_auto_create_instance_type: default_instance_type(),
            cr_image_full_url: String::new(),
            runtime_id: String::new(),
            runtime_name: default_auto(),
            runtime_role_name: default_auto(),
            runtime_auth_type: default_auth_type(),
            runtime_apikey_name: default_auto(),
            runtime_apikey: String::new(),
            runtime_jwt_discovery_url: String::new(),
            runtime_jwt_allowed_clients: Vec::new(),
            runtime_endpoint: String::new(),
            runtime_envs: BTreeMap::new(),
        }
    }
}

fn default_image_tag_template() -> String {
    DEFAULT_IMAGE_TAG_TEMPLATE.to_string()
}

fn default_auto() -> String {
    AUTO.to_string()
}

fn default_cr_namespace() -> String {
    DEFAULT_CR_NAMESPACE.to_string()
}

fn default_instance_type() -> String {
    "Micro".to_string()
}

fn default_auth_type() -> String {
    AUTH_KEY_AUTH.to_string()
}

impl HybridStrategyConfig {
    pub fn uses_custom_jwt(&self) -> bool {
        self.runtime_auth_type == AUTH_CUSTOM_JWT
    }

    /// Fill unset registry and region fields from the global config.
    pub fn apply_global_defaults(&mut self, global: &GlobalConfig) {
        fill(&mut self.cr_instance_name, &global.cr.instance_name, "cr_instance_name");
        fill(&mut self.cr_namespace_name, &global.cr.namespace_name, "cr_namespace_name");
        fill(
            &mut self.cr_auto_create_instance_type,
            &global.cr.auto_create_instance_type,
            "cr_auto_create_instance_type",
        );
        fill(&mut self.region, &global.volcengine.region, "region");
    }

    /// Region for one service (`cr`, `agentkit`, ...): its override, else `region`.
    pub fn region_for(&self, service: &str) -> &str {
        self.region_overrides
            .get(service)
            .map(String::as_str)
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(&self.region)
    }

    /// Clear everything recorded by a deploy.
    pub fn reset_runtime(&mut self) {
        self.runtime_id.clear();
        self.runtime_endpoint.clear();
        self.runtime_apikey.clear();
        self.deploy_timestamp.clear();
    }

    pub fn validate(&self, prefix: &str) -> Vec<String> {
        let mut errors = Vec::new();
        match self.runtime_auth_type.as_str() {
            AUTH_KEY_AUTH => {}
            AUTH_CUSTOM_JWT => {
                let url = self.runtime_jwt_discovery_url.trim();
                if url.is_empty() {
                    errors.push(format!("{}.runtime_jwt_discovery_url is required for custom_jwt", prefix));
                } else if !url.starts_with("https://") || url.len() <= "https://".len() {
                    errors.push(format!("{}.runtime_jwt_discovery_url: must be a valid https URL", prefix));
                }
            }
            other => errors.push(format!(
                "{}.runtime_auth_type must be one of: {}, {} (got '{}')",
                prefix, AUTH_KEY_AUTH, AUTH_CUSTOM_JWT, other
            )),
        }
        if !crate::sdk::cr::INSTANCE_TYPES.contains(&self.cr_auto_create_instance_type.as_str()) {
            errors.push(format!(
                "{}.cr_auto_create_instance_type must be Micro or Enterprise",
                prefix
            ));
        }
        errors
    }
}

fn fill(target: &mut String, global_value: &str, field: &str) {
    if is_invalid_value(target) && is_valid_value(global_value) {
        log::info!("using global config {} = {}", field, global_value);
        *target = global_value.to_string();
    }
}

/// Hybrid settings plus the remote build knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloudStrategyConfig {
    #[serde(flatten)]
    pub runtime: HybridStrategyConfig,

    #[serde(default = "default_auto")]
    pub tos_bucket: String,

    #[serde(default = "default_tos_prefix")]
    pub tos_prefix: String,

    #[serde(default)]
    pub tos_region: String,

    #[serde(default = "default_build_timeout")]
    pub build_timeout: u64,
}

impl Default for CloudStrategyConfig {
    fn default() -> Self {
        Self {
            runtime: HybridStrategyConfig::default(),
            tos_bucket: default_auto(),
            tos_prefix: default_tos_prefix(),
            tos_region: String::new(),
            build_timeout: default_build_timeout(),
        }
    }
}

fn default_tos_prefix() -> String {
    "agentkit-builds".to_string()
}

fn default_build_timeout() -> u64 {
    3600
}

impl CloudStrategyConfig {
    pub fn apply_global_defaults(&mut self, global: &GlobalConfig) {
        self.runtime.apply_global_defaults(global);
        fill(&mut self.tos_bucket, &global.tos.bucket, "tos_bucket");
        fill(&mut self.tos_prefix, &global.tos.prefix, "tos_prefix");
        fill(&mut self.tos_region, &global.tos.region, "tos_region");
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LaunchTypes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalStrategyConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid: Option<HybridStrategyConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudStrategyConfig>,
}

/// `docker_build.base_image`: one image, or a builder/runtime pair for Go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BaseImage {
    Single(String),
    Split {
        #[serde(default)]
        builder: Option<String>,
        #[serde(default)]
        runtime: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DockerBuildConfig {
    #[serde(default)]
    pub base_image: Option<BaseImage>,

    /// Script run during the image build, relative to the project root.
    #[serde(default)]
    pub build_script: Option<String>,

    #[serde(default)]
    pub regenerate_dockerfile: bool,

    /// Target platform, e.g. `linux/amd64`.
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AgentkitConfig {
    #[serde(default)]
    pub common: CommonConfig,

    #[serde(default)]
    pub launch_types: LaunchTypes,

    #[serde(default)]
    pub docker_build: DockerBuildConfig,
}

impl AgentkitConfig {
    pub fn local_mut(&mut self) -> &mut LocalStrategyConfig {
        self.launch_types.local.get_or_insert_with(Default::default)
    }

    pub fn hybrid_mut(&mut self) -> &mut HybridStrategyConfig {
        self.launch_types.hybrid.get_or_insert_with(Default::default)
    }

    pub fn cloud_mut(&mut self) -> &mut CloudStrategyConfig {
        self.launch_types.cloud.get_or_insert_with(Default::default)
    }

    pub fn local(&self) -> LocalStrategyConfig {
        self.launch_types.local.clone().unwrap_or_default()
    }

    pub fn hybrid(&self) -> HybridStrategyConfig {
        self.launch_types.hybrid.clone().unwrap_or_default()
    }

    pub fn cloud(&self) -> CloudStrategyConfig {
        self.launch_types.cloud.clone().unwrap_or_default()
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.common.validate();
        if let Some(local) = &self.launch_types.local {
            errors.extend(local.validate());
        }
        if let Some(hybrid) = &self.launch_types.hybrid {
            errors.extend(hybrid.validate("launch_types.hybrid"));
        }
        if let Some(cloud) = &self.launch_types.cloud {
            errors.extend(cloud.runtime.validate("launch_types.cloud"));
        }
        errors
    }
}

/// `agentkit.yaml` on disk: the typed view plus the raw document, so keys
/// this version does not know survive a save.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    path: PathBuf,
    raw: Value,
    pub config: AgentkitConfig,
}

/// Map-valued fields replaced wholesale on save so removed keys stay removed.
const REPLACED_ON_SAVE: &[&str] = &[
    "common.runtime_envs",
    "launch_types.local.runtime_envs",
    "launch_types.local.ports",
    "launch_types.local.volumes",
    "launch_types.hybrid.runtime_envs",
    "launch_types.hybrid.region_overrides",
    "launch_types.hybrid.runtime_jwt_allowed_clients",
    "launch_types.cloud.runtime_envs",
    "launch_types.cloud.region_overrides",
    "launch_types.cloud.runtime_jwt_allowed_clients",
    "docker_build.base_image",
];

/// Pre-rename keys still accepted on load; dropped on save.
const LEGACY_KEYS: &[&str] = &[
    "ve_region",
    "ve_cr_instance_name",
    "ve_cr_namespace_name",
    "ve_cr_repo_name",
    "ve_cr_image_full_url",
    "ve_runtime_id",
    "ve_runtime_name",
    "ve_runtime_role_name",
    "ve_runtime_apikey_name",
    "ve_runtime_apikey",
    "ve_runtime_endpoint",
];

impl ProjectConfig {
    /// Fresh config that will be written to `path`.
    pub fn new(path: impl Into<PathBuf>, config: AgentkitConfig) -> Self {
        Self {
            path: path.into(),
            raw: Value::Mapping(Default::default()),
            config,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AgentkitError::ConfigNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::parse(path, &contents)
    }

    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let raw: Value = if contents.trim().is_empty() {
            Value::Mapping(Default::default())
        } else {
            serde_yaml::from_str(contents)?
        };
        let mut config: AgentkitConfig = serde_yaml::from_value(raw.clone())?;
        config.common.apply_language_defaults();
        log::debug!("loaded {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            raw,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the config file.
    pub fn project_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// The document that `save` would write.
    pub fn document(&self) -> Result<Value> {
        let typed = serde_yaml::to_value(&self.config)?;
        let mut doc = self.raw.clone();
        yaml::deep_merge(&mut doc, typed.clone());
        for dotted in REPLACED_ON_SAVE {
            if let Some(value) = yaml::get_path(&typed, dotted) {
                yaml::set_path(&mut doc, dotted, value.clone())?;
            }
        }
        for section in ["hybrid", "cloud"] {
            let strategy = doc
                .get_mut("launch_types")
                .and_then(|types| types.get_mut(section))
                .and_then(Value::as_mapping_mut);
            if let Some(strategy) = strategy {
                for key in LEGACY_KEYS {
                    strategy.remove(*key);
                }
            }
        }
        Ok(doc)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.document()?)?)
    }

    pub fn save(&mut self) -> Result<()> {
        let doc = self.document()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_yaml::to_string(&doc)?)?;
        self.raw = doc;
        log::debug!("saved {}", self.path.display());
        Ok(())
    }

    pub fn get_raw(&self, dotted: &str) -> Result<Option<Value>> {
        let doc = self.document()?;
        Ok(yaml::get_path(&doc, dotted).cloned())
    }

    /// Set a dotted key from a YAML scalar string; the result must still parse.
    pub fn set_raw(&mut self, dotted: &str, raw_value: &str) -> Result<()> {
        let mut doc = self.document()?;
        yaml::set_path(&mut doc, dotted, yaml::parse_scalar(raw_value))?;
        let config: AgentkitConfig = serde_yaml::from_value(doc.clone()).map_err(|e| {
            AgentkitError::InvalidConfig(format!("{} = {}: {}", dotted, raw_value, e))
        })?;
        self.raw = doc;
        self.config = config;
        Ok(())
    }

    /// Merge `patch` into one strategy section, skipping empty values.
    pub fn update_strategy(&mut self, launch_type: LaunchType, patch: &BTreeMap<String, Value>) -> Result<()> {
        for (key, value) in patch {
            let empty = match value {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                Value::Sequence(seq) => seq.is_empty(),
                Value::Mapping(map) => map.is_empty(),
                _ => false,
            };
            if empty {
                continue;
            }
            let dotted = format!("launch_types.{}.{}", launch_type, key);
            self.set_raw(&dotted, &yaml::display(value))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let errors = self.config.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AgentkitError::InvalidConfig(errors.join("; ")))
        }
    }
}

/// Config file path for a project directory, or an explicit override.
pub fn config_path(project_dir: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => project_dir.join(path),
        None => project_dir.join(CONFIG_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_config() -> AgentkitConfig {
        let mut config = AgentkitConfig::default();
        config.common.agent_name = "demo_agent".to_string();
        config
    }

    #[test]
    fn test_defaults() {
        let config = AgentkitConfig::default();
        assert_eq!(config.common.entry_point, "agent.py");
        assert_eq!(config.common.language, Language::Python);
        assert_eq!(config.common.language_version, "3.12");
        assert_eq!(config.common.dependencies_file, "requirements.txt");
        assert_eq!(config.common.launch_type, LaunchType::Hybrid);

        let local = config.local();
        assert_eq!(local.invoke_port, 8000);
        assert_eq!(local.ports, vec!["8000:8000"]);
        assert_eq!(local.restart_policy, "unless-stopped");

        let hybrid = config.hybrid();
        assert_eq!(hybrid.image_tag, "{{timestamp}}");
        assert_eq!(hybrid.cr_instance_name, AUTO);
        assert_eq!(hybrid.cr_namespace_name, "agentkit");
        assert_eq!(hybrid.runtime_auth_type, AUTH_KEY_AUTH);

        let cloud = config.cloud();
        assert_eq!(cloud.tos_prefix, "agentkit-builds");
        assert_eq!(cloud.build_timeout, 3600);
    }

    #[test]
    fn test_is_invalid_value() {
        assert!(is_invalid_value(""));
        assert!(is_invalid_value("  "));
        assert!(is_invalid_value("Auto"));
        assert!(!is_invalid_value("my-registry"));
    }

    #[test]
    fn test_golang_language_defaults() {
        let mut common = CommonConfig::default();
        common.set_language(Language::Golang);
        assert_eq!(common.language_version, "1.24");
        assert_eq!(common.dependencies_file, "go.mod");

        common.set_language(Language::Python);
        assert_eq!(common.language_version, "3.12");
        assert_eq!(common.dependencies_file, "requirements.txt");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("go".parse::<Language>().unwrap(), Language::Golang);
        assert_eq!("Python".parse::<Language>().unwrap(), Language::Python);
        assert!("rust".parse::<Language>().is_err());
    }

    #[test]
    fn test_validate_common() {
        assert!(valid_config().validate().is_empty());

        let mut config = valid_config();
        config.common.agent_name = "bad name!".to_string();
        config.common.entry_point = "agent.rb".to_string();
        config.common.language_version = "3.9".to_string();
        let errors = config.validate();
        assert_eq!(errors.len(), 3, "{:?}", errors);

        let mut config = valid_config();
        config.common.entry_point = "src/app/main.go".to_string();
        config.common.set_language(Language::Golang);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_custom_jwt() {
        let mut config = valid_config();
        config.hybrid_mut().runtime_auth_type = AUTH_CUSTOM_JWT.to_string();
        assert_eq!(config.validate().len(), 1);

        config.hybrid_mut().runtime_jwt_discovery_url = "http://insecure".to_string();
        assert!(config.validate()[0].contains("https"));

        config.hybrid_mut().runtime_jwt_discovery_url =
            "https://userpool.example.com/.well-known/openid-configuration".to_string();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_local_ports() {
        let mut config = valid_config();
        config.local_mut().ports = vec!["8000".to_string(), "9000:9000".to_string()];
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("8000"));
    }

    #[test]
    fn test_container_name() {
        let local = LocalStrategyConfig::default();
        assert_eq!(local.container_name_for("demo"), "demo-container");
        assert_eq!(local.container_name_for(""), "agentkit-app-container");
    }

    #[test]
    fn test_base_image_forms() {
        let single: DockerBuildConfig = serde_yaml::from_str("base_image: python:3.12-slim").unwrap();
        assert_eq!(single.base_image, Some(BaseImage::Single("python:3.12-slim".to_string())));

        let split: DockerBuildConfig =
            serde_yaml::from_str("base_image:\n  builder: golang:1.24\n  runtime: alpine:latest\n").unwrap();
        assert_eq!(
            split.base_image,
            Some(BaseImage::Split {
                builder: Some("golang:1.24".to_string()),
                runtime: Some("alpine:latest".to_string()),
            })
        );
    }

    #[test]
    fn test_legacy_aliases() {
        let config: AgentkitConfig =
            serde_yaml::from_str("launch_types:\n  hybrid:\n    ve_runtime_id: r-123\n    ve_region: cn-shanghai\n")
                .unwrap();
        let hybrid = config.hybrid();
        assert_eq!(hybrid.runtime_id, "r-123");
        assert_eq!(hybrid.region, "cn-shanghai");
    }

    #[test]
    fn test_legacy_keys_dropped_on_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "common:\n  agent_name: demo\nlaunch_types:\n  hybrid:\n    ve_runtime_id: r-9\n").unwrap();

        let mut project = ProjectConfig::load(&path).unwrap();
        project.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("ve_runtime_id"));
        assert_eq!(ProjectConfig::load(&path).unwrap().config.hybrid().runtime_id, "r-9");
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "common:\n  agent_name: demo\n  team_note: keep me\n  runtime_envs:\n    A: '1'\n    B: '2'\nextra_section:\n  x: 1\n",
        )
        .unwrap();

        let mut project = ProjectConfig::load(&path).unwrap();
        project.config.common.runtime_envs.remove("B");
        project.config.hybrid_mut().runtime_id = "r-1".to_string();
        project.save().unwrap();

        let reloaded = ProjectConfig::load(&path).unwrap();
        assert_eq!(reloaded.config.hybrid().runtime_id, "r-1");
        assert!(reloaded.config.common.runtime_envs.get("B").is_none());
        assert_eq!(
            reloaded.get_raw("common.team_note").unwrap().and_then(|v| v.as_str().map(String::from)),
            Some("keep me".to_string())
        );
        assert!(reloaded.get_raw("extra_section.x").unwrap().is_some());
    }

    #[test]
    fn test_set_raw_and_get_raw() {
        let mut project = ProjectConfig::new("agentkit.yaml", valid_config());
        project.set_raw("launch_types.local.invoke_port", "9000").unwrap();
        assert_eq!(project.config.local().invoke_port, 9000);

        project.set_raw("launch_types.hybrid.image_tag", "{{timestamp}}").unwrap();
        assert_eq!(project.config.hybrid().image_tag, "{{timestamp}}");

        let value = project.get_raw("common.agent_name").unwrap().unwrap();
        assert_eq!(value.as_str(), Some("demo_agent"));
        assert!(project.get_raw("common.nope").unwrap().is_none());
    }

    #[test]
    fn test_set_raw_rejects_bad_type() {
        let mut project = ProjectConfig::new("agentkit.yaml", valid_config());
        let err = project.set_raw("launch_types.local.invoke_port", "not-a-port").unwrap_err();
        assert!(err.to_string().contains("invoke_port"));
        assert_eq!(project.config.local().invoke_port, 8000);
    }

    #[test]
    fn test_update_strategy_skips_empty() {
        let mut project = ProjectConfig::new("agentkit.yaml", valid_config());
        let patch = BTreeMap::from([
            ("region".to_string(), Value::from("cn-shanghai")),
            ("cr_repo_name".to_string(), Value::from("")),
        ]);
        project.update_strategy(LaunchType::Hybrid, &patch).unwrap();
        let hybrid = project.config.hybrid();
        assert_eq!(hybrid.region, "cn-shanghai");
        assert_eq!(hybrid.cr_repo_name, "");
    }

    #[test]
    fn test_apply_global_defaults() {
        let mut global = GlobalConfig::default();
        global.cr.instance_name = "team-registry".to_string();
        global.volcengine.region = "cn-shanghai".to_string();

        let mut hybrid = HybridStrategyConfig::default();
        hybrid.cr_namespace_name = "mine".to_string();
        hybrid.apply_global_defaults(&global);
        assert_eq!(hybrid.cr_instance_name, "team-registry");
        assert_eq!(hybrid.cr_namespace_name, "mine");
        assert_eq!(hybrid.region, "cn-shanghai");
    }

    #[test]
    fn test_region_for() {
        let mut hybrid = HybridStrategyConfig::default();
        hybrid.region = "cn-beijing".to_string();
        hybrid.region_overrides.insert("cr".to_string(), "cn-shanghai".to_string());
        hybrid.region_overrides.insert("tos".to_string(), String::new());
        assert_eq!(hybrid.region_for("cr"), "cn-shanghai");
        assert_eq!(hybrid.region_for("tos"), "cn-beijing");
        assert_eq!(hybrid.region_for("agentkit"), "cn-beijing");
    }

    #[test]
    fn test_missing_file() {
        let err = ProjectConfig::load(Path::new("/nonexistent/agentkit.yaml")).unwrap_err();
        assert!(matches!(err, AgentkitError::ConfigNotFound(_)));
    }

    #[test]
    fn test_config_path() {
        let dir = Path::new("/work/proj");
        assert_eq!(config_path(dir, None), PathBuf::from("/work/proj/agentkit.yaml"));
        assert_eq!(
            config_path(dir, Some(Path::new("custom.yaml"))),
            PathBuf::from("/work/proj/custom.yaml")
        );
        assert_eq!(config_path(dir, Some(Path::new("/abs/a.yaml"))), PathBuf::from("/abs/a.yaml"));
    }

    #[test]
    fn test_is_a2a() {
        let mut common = CommonConfig::default();
        assert!(!common.is_a2a());
        common.agent_type = "A2A App".to_string();
        assert!(common.is_a2a());
    }
}
