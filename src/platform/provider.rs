use super::env::Env;
use super::global_config::GlobalConfig;
use crate::error::{AgentkitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PROVIDER_ENV: &str = "AGENTKIT_CLOUD_PROVIDER";
pub const PROVIDER_ENV_ALIAS: &str = "CLOUD_PROVIDER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    #[default]
    Volcengine,
    Byteplus,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Volcengine => "volcengine",
            CloudProvider::Byteplus => "byteplus",
        }
    }

    /// Prefix of provider-specific environment variables.
    pub fn env_prefix(&self) -> &'static str {
        match self {
            CloudProvider::Volcengine => "VOLCENGINE",
            CloudProvider::Byteplus => "BYTEPLUS",
        }
    }

    /// Older variable prefix still honoured for Volcengine.
    pub fn legacy_env_prefix(&self) -> Option<&'static str> {
        match self {
            CloudProvider::Volcengine => Some("VOLC"),
            CloudProvider::Byteplus => None,
        }
    }

    pub fn default_region(&self) -> &'static str {
        match self {
            CloudProvider::Volcengine => "cn-beijing",
            CloudProvider::Byteplus => "ap-southeast-1",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CloudProvider::Volcengine => "Volcengine",
            CloudProvider::Byteplus => "BytePlus",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = AgentkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "volcengine" => Ok(CloudProvider::Volcengine),
            "byteplus" => Ok(CloudProvider::Byteplus),
            other => Err(AgentkitError::InvalidConfig(format!(
                "Unknown cloud provider '{}'. Expected 'volcengine' or 'byteplus'",
                other
            ))),
        }
    }
}

/// Where a resolved provider came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSource {
    Explicit,
    Env,
    Project,
    Global,
    Default,
}

impl ProviderSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderSource::Explicit => "explicit",
            ProviderSource::Env => "env",
            ProviderSource::Project => "project",
            ProviderSource::Global => "global",
            ProviderSource::Default => "default",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolve the provider with precedence explicit > env > global defaults > volcengine.
pub fn resolve(explicit: Option<&str>, env: &Env, global: &GlobalConfig) -> Result<CloudProvider> {
    resolve_with_source(explicit, None, env, global).map(|(provider, _)| provider)
}

/// Project-aware resolution: explicit > env > project > global > default.
pub fn resolve_with_source(
    explicit: Option<&str>,
    project: Option<&str>,
    env: &Env,
    global: &GlobalConfig,
) -> Result<(CloudProvider, ProviderSource)> {
    if let Some(value) = non_empty(explicit) {
        return Ok((value.parse()?, ProviderSource::Explicit));
    }
    if let Some(value) = env.first(&[PROVIDER_ENV, PROVIDER_ENV_ALIAS]) {
        return Ok((value.parse()?, ProviderSource::Env));
    }
    if let Some(value) = non_empty(project) {
        return Ok((value.parse()?, ProviderSource::Project));
    }
    if let Some(value) = non_empty(global.defaults.cloud_provider.as_deref()) {
        return Ok((value.parse()?, ProviderSource::Global));
    }
    Ok((CloudProvider::default(), ProviderSource::Default))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_with(provider: &str) -> GlobalConfig {
        let mut global = GlobalConfig::default();
        global.defaults.cloud_provider = Some(provider.to_string());
        global
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("BytePlus".parse::<CloudProvider>().unwrap(), CloudProvider::Byteplus);
        assert_eq!(" VOLCENGINE ".parse::<CloudProvider>().unwrap(), CloudProvider::Volcengine);
        assert!("aws".parse::<CloudProvider>().is_err());
    }

    #[test]
    fn test_default_when_nothing_set() {
        let (provider, source) =
            resolve_with_source(None, None, &Env::default(), &GlobalConfig::default()).unwrap();
        assert_eq!(provider, CloudProvider::Volcengine);
        assert_eq!(source, ProviderSource::Default);
    }

    #[test]
    fn test_env_alias_is_honoured() {
        let env = Env::from_pairs([("CLOUD_PROVIDER", "byteplus")]);
        assert_eq!(
            resolve(None, &env, &GlobalConfig::default()).unwrap(),
            CloudProvider::Byteplus
        );
    }

    #[test]
    fn test_primary_env_wins_over_alias() {
        let env = Env::from_pairs([
            ("AGENTKIT_CLOUD_PROVIDER", "volcengine"),
            ("CLOUD_PROVIDER", "byteplus"),
        ]);
        assert_eq!(
            resolve(None, &env, &GlobalConfig::default()).unwrap(),
            CloudProvider::Volcengine
        );
    }

    #[test]
    fn test_precedence_chain() {
        let global = global_with("byteplus");
        let env = Env::from_pairs([("AGENTKIT_CLOUD_PROVIDER", "volcengine")]);

        let (p, s) = resolve_with_source(Some("byteplus"), Some("volcengine"), &env, &global).unwrap();
        assert_eq!((p, s), (CloudProvider::Byteplus, ProviderSource::Explicit));

        let (p, s) = resolve_with_source(None, Some("byteplus"), &env, &global).unwrap();
        assert_eq!((p, s), (CloudProvider::Volcengine, ProviderSource::Env));

        let (p, s) =
            resolve_with_source(None, Some("volcengine"), &Env::default(), &global).unwrap();
        assert_eq!((p, s), (CloudProvider::Volcengine, ProviderSource::Project));

        let (p, s) = resolve_with_source(None, Some(""), &Env::default(), &global).unwrap();
        assert_eq!((p, s), (CloudProvider::Byteplus, ProviderSource::Global));
    }
}
