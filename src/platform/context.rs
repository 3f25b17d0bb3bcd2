use super::env::Env;
use super::global_config::{GlobalConfig, ProviderSection};
use super::provider::{self, CloudProvider};
use super::services;
use crate::error::{AgentkitError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Credential file mounted into managed runtimes.
pub const IAM_CREDENTIAL_PATH: &str = "/var/run/secrets/iam/credential";

/// Fully resolved location of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub scheme: String,
    pub api_version: String,
    pub service: String,
    pub region: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail: String = self
            .secret_key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &format!("****{}", tail))
            .field("session_token", &self.session_token.as_ref().map(|_| "****"))
            .finish()
    }
}

#[derive(Deserialize)]
struct IamCredentialFile {
    #[serde(default)]
    access_key_id: String,
    #[serde(default)]
    secret_access_key: String,
    #[serde(default)]
    session_token: String,
}

/// Provider, region, endpoint and credential resolution for one process.
#[derive(Debug, Clone)]
pub struct PlatformContext {
    provider: CloudProvider,
    region_override: Option<String>,
    credentials_override: Option<Credentials>,
    global: GlobalConfig,
    env: Env,
    iam_credential_path: PathBuf,
}

impl PlatformContext {
    pub fn new(provider: CloudProvider, global: GlobalConfig, env: Env) -> Self {
        Self {
            provider,
            region_override: None,
            credentials_override: None,
            global,
            env,
            iam_credential_path: PathBuf::from(IAM_CREDENTIAL_PATH),
        }
    }

    /// Build from the process environment and the user's global config.
    pub fn load(provider_override: Option<&str>) -> Result<Self> {
        let global = GlobalConfig::load()?;
        let env = Env::from_process();
        let provider = provider::resolve(provider_override, &env, &global)?;
        log::debug!("platform context: provider={}", provider);
        Ok(Self::new(provider, global, env))
    }

    pub fn with_region(mut self, region: Option<&str>) -> Self {
        self.region_override = region
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty());
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials_override = Some(credentials);
        self
    }

    pub fn with_iam_credential_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.iam_credential_path = path.into();
        self
    }

    pub fn provider(&self) -> CloudProvider {
        self.provider
    }

    pub fn global(&self) -> &GlobalConfig {
        &self.global
    }

    fn section(&self) -> &ProviderSection {
        match self.provider {
            CloudProvider::Volcengine => &self.global.volcengine,
            CloudProvider::Byteplus => &self.global.byteplus,
        }
    }

    /// Provider-prefixed then legacy-prefixed variable, e.g. `VOLCENGINE_CR_HOST`, `VOLC_CR_HOST`.
    fn env_var(&self, suffix: &str) -> Option<&str> {
        let primary = format!("{}_{}", self.provider.env_prefix(), suffix);
        if let Some(value) = self.env.get(&primary) {
            return Some(value);
        }
        self.provider
            .legacy_env_prefix()
            .and_then(|legacy| self.env.get(&format!("{}_{}", legacy, suffix)))
    }

    /// Logical region: explicit > env > global `region` > provider section > default.
    pub fn region(&self) -> String {
        if let Some(region) = &self.region_override {
            return region.clone();
        }
        if let Some(region) = self.env_var("REGION") {
            return region.to_string();
        }
        if self.provider == CloudProvider::Volcengine {
            if let Some(region) = self.global.region.as_deref().filter(|r| !r.is_empty()) {
                return region.to_string();
            }
        }
        if !self.section().region.is_empty() {
            return self.section().region.clone();
        }
        self.provider.default_region().to_string()
    }

    /// Region a given service is actually called in.
    pub fn service_region(&self, service_key: &str) -> Result<String> {
        let meta = services::lookup(service_key)?;
        let key_upper = meta.key.to_uppercase();

        if let Some(region) = self.env_var(&format!("{}_REGION", key_upper)) {
            return Ok(region.to_string());
        }
        if let Some(region) = self
            .global
            .services
            .get(meta.key)
            .and_then(|s| s.region.as_deref())
            .filter(|r| !r.is_empty())
        {
            return Ok(region.to_string());
        }

        let logical = self.region().to_lowercase();
        let mut rule = services::builtin_region_rules(self.provider)
            .remove(&logical)
            .unwrap_or_default();
        let custom = match self.provider {
            CloudProvider::Volcengine => self.global.volcengine_rules(),
            CloudProvider::Byteplus => &self.global.byteplus.region_policy.rules,
        };
        if let Some(user_rule) = custom.get(&logical) {
            rule.extend(user_rule.clone());
        }
        Ok(rule.remove(meta.key).unwrap_or(logical))
    }

    pub fn endpoint(&self, service_key: &str) -> Result<Endpoint> {
        let meta = services::lookup(service_key)?;
        let key_upper = meta.key.to_uppercase();
        let overrides = self.global.services.get(meta.key).cloned().unwrap_or_default();
        let region = self.service_region(meta.key)?;

        let pick = |suffix: &str, file: Option<String>, fallback: String| -> String {
            self.env_var(&format!("{}_{}", key_upper, suffix))
                .map(str::to_string)
                .or(file.filter(|v| !v.is_empty()))
                .unwrap_or(fallback)
        };

        Ok(Endpoint {
            host: pick(
                "HOST",
                overrides.host,
                services::default_host(self.provider, meta, &region),
            ),
            scheme: pick("SCHEME", overrides.scheme, meta.scheme.to_string()),
            api_version: pick(
                "API_VERSION",
                overrides.api_version,
                meta.default_version.to_string(),
            ),
            service: pick("SERVICE", overrides.service, meta.code.to_string()),
            region,
        })
    }

    /// Credentials for `service_key`, most specific source first.
    pub fn credentials(&self, service_key: &str) -> Result<Credentials> {
        if let Some(creds) = &self.credentials_override {
            return Ok(creds.clone());
        }

        let svc = service_key.to_uppercase();
        let prefix = self.provider.env_prefix();
        let legacy = self.provider.legacy_env_prefix();

        let pair = |ak_keys: Vec<String>, sk_keys: Vec<String>| -> Option<Credentials> {
            let ak = ak_keys.iter().find_map(|k| self.env.get(k))?;
            let sk = sk_keys.iter().find_map(|k| self.env.get(k))?;
            Some(Credentials::new(ak, sk))
        };

        let mut svc_ak = vec![format!("{}_{}_ACCESS_KEY", prefix, svc)];
        let mut svc_sk = vec![format!("{}_{}_SECRET_KEY", prefix, svc)];
        let mut ak = vec![format!("{}_ACCESS_KEY", prefix)];
        let mut sk = vec![format!("{}_SECRET_KEY", prefix)];
        if let Some(legacy) = legacy {
            svc_ak.push(format!("{}_{}_ACCESSKEY", legacy, svc));
            svc_sk.push(format!("{}_{}_SECRETKEY", legacy, svc));
            ak.push(format!("{}_ACCESSKEY", legacy));
            sk.push(format!("{}_SECRETKEY", legacy));
        }

        if let Some(creds) = pair(svc_ak, svc_sk) {
            log::debug!("credentials for {} from service environment", service_key);
            return Ok(creds);
        }
        if let Some(creds) = pair(ak, sk) {
            log::debug!("credentials for {} from environment", service_key);
            return Ok(creds);
        }

        let section = self.section();
        if !section.access_key.is_empty() && !section.secret_key.is_empty() {
            log::debug!("credentials for {} from global config", service_key);
            return Ok(Credentials::new(&section.access_key, &section.secret_key));
        }

        if self.provider == CloudProvider::Volcengine {
            if let Some(creds) = self.iam_file_credentials() {
                log::debug!("credentials for {} from IAM credential file", service_key);
                return Ok(creds);
            }
        }

        Err(AgentkitError::Credentials(format!(
            "{} credentials not found (service: {}). Set {}_ACCESS_KEY and {}_SECRET_KEY, \
             or configure {}.access_key / {}.secret_key in {}",
            self.provider.display_name(),
            service_key,
            prefix,
            prefix,
            self.provider.as_str(),
            self.provider.as_str(),
            GlobalConfig::default_path().display()
        )))
    }

    fn iam_file_credentials(&self) -> Option<Credentials> {
        let contents = std::fs::read_to_string(&self.iam_credential_path).ok()?;
        match serde_json::from_str::<IamCredentialFile>(&contents) {
            Ok(file) if !file.access_key_id.is_empty() && !file.secret_access_key.is_empty() => {
                Some(Credentials {
                    access_key: file.access_key_id,
                    secret_key: file.secret_access_key,
                    session_token: Some(file.session_token).filter(|t| !t.is_empty()),
                })
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!(
                    "found {} but failed to parse it: {}",
                    self.iam_credential_path.display(),
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::global_config::ServiceOverride;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn ctx(provider: CloudProvider, global: GlobalConfig, pairs: &[(&str, &str)]) -> PlatformContext {
        PlatformContext::new(provider, global, Env::from_pairs(pairs.iter().copied()))
            .with_iam_credential_path("/nonexistent/agentkit/credential")
    }

    #[test]
    fn test_region_precedence() {
        let mut global = GlobalConfig::default();
        global.volcengine.region = "cn-guangzhou".to_string();
        assert_eq!(ctx(CloudProvider::Volcengine, global.clone(), &[]).region(), "cn-guangzhou");

        global.region = Some("cn-shanghai".to_string());
        assert_eq!(ctx(CloudProvider::Volcengine, global.clone(), &[]).region(), "cn-shanghai");

        let env_ctx = ctx(CloudProvider::Volcengine, global.clone(), &[("VOLC_REGION", "cn-hongkong")]);
        assert_eq!(env_ctx.region(), "cn-hongkong");

        let explicit = env_ctx.with_region(Some(" CN-BEIJING "));
        assert_eq!(explicit.region(), "cn-beijing");

        assert_eq!(
            ctx(CloudProvider::Volcengine, GlobalConfig::default(), &[]).region(),
            "cn-beijing"
        );
        assert_eq!(
            ctx(CloudProvider::Byteplus, GlobalConfig::default(), &[]).region(),
            "ap-southeast-1"
        );
    }

    #[test]
    fn test_service_region_rules() {
        let shanghai = ctx(
            CloudProvider::Volcengine,
            GlobalConfig::default(),
            &[("VOLCENGINE_REGION", "cn-shanghai")],
        );
        assert_eq!(shanghai.service_region("tos").unwrap(), "cn-beijing");
        assert_eq!(shanghai.service_region("cr").unwrap(), "cn-shanghai");

        let mut global = GlobalConfig::default();
        let mut rule = BTreeMap::new();
        rule.insert("cr".to_string(), "cn-beijing".to_string());
        rule.insert("tos".to_string(), "cn-shanghai".to_string());
        global.region_policy.rules.insert("cn-shanghai".to_string(), rule);
        let custom = ctx(
            CloudProvider::Volcengine,
            global,
            &[("VOLCENGINE_REGION", "cn-shanghai")],
        );
        assert_eq!(custom.service_region("cr").unwrap(), "cn-beijing");
        assert_eq!(custom.service_region("tos").unwrap(), "cn-shanghai");
        assert_eq!(custom.service_region("cp").unwrap(), "cn-beijing");
    }

    #[test]
    fn test_service_region_env_and_file_overrides() {
        let mut global = GlobalConfig::default();
        global.services.insert(
            "cr".to_string(),
            ServiceOverride {
                region: Some("cn-guangzhou".to_string()),
                ..Default::default()
            },
        );
        let c = ctx(CloudProvider::Volcengine, global.clone(), &[]);
        assert_eq!(c.service_region("cr").unwrap(), "cn-guangzhou");

        let c = ctx(CloudProvider::Volcengine, global, &[("VOLCENGINE_CR_REGION", "cn-shanghai")]);
        assert_eq!(c.service_region("cr").unwrap(), "cn-shanghai");
    }

    #[test]
    fn test_byteplus_ignores_volcengine_rules() {
        let c = ctx(
            CloudProvider::Byteplus,
            GlobalConfig::default(),
            &[("BYTEPLUS_REGION", "cn-shanghai"), ("VOLCENGINE_REGION", "cn-beijing")],
        );
        assert_eq!(c.region(), "cn-shanghai");
        assert_eq!(c.service_region("tos").unwrap(), "cn-shanghai");

        let c = ctx(
            CloudProvider::Byteplus,
            GlobalConfig::default(),
            &[("BYTEPLUS_CR_REGION", "us-east-1")],
        );
        assert_eq!(c.endpoint("cr").unwrap().host, "cr.us-east-1.byteplusapi.com");
    }

    #[test]
    fn test_endpoint_resolution() {
        let c = ctx(CloudProvider::Volcengine, GlobalConfig::default(), &[]);
        let ep = c.endpoint("agentkit").unwrap();
        assert_eq!(ep.host, "open.volcengineapi.com");
        assert_eq!(ep.scheme, "https");
        assert_eq!(ep.api_version, "2025-10-30");
        assert_eq!(ep.service, "agentkit");
        assert_eq!(ep.region, "cn-beijing");

        let mut global = GlobalConfig::default();
        global.services.insert(
            "agentkit".to_string(),
            ServiceOverride {
                host: Some("agentkit.file".to_string()),
                api_version: Some("2026-01-01".to_string()),
                ..Default::default()
            },
        );
        let c = ctx(
            CloudProvider::Volcengine,
            global,
            &[("VOLC_AGENTKIT_HOST", "agentkit.env"), ("VOLCENGINE_AGENTKIT_SCHEME", "http")],
        );
        let ep = c.endpoint("AgentKit").unwrap();
        assert_eq!(ep.host, "agentkit.env");
        assert_eq!(ep.scheme, "http");
        assert_eq!(ep.api_version, "2026-01-01");

        assert!(c.endpoint("unknown").is_err());
    }

    #[test]
    fn test_credentials_precedence() {
        let mut global = GlobalConfig::default();
        global.volcengine.access_key = "AK_FILE".to_string();
        global.volcengine.secret_key = "SK_FILE".to_string();

        let c = ctx(CloudProvider::Volcengine, global.clone(), &[]);
        assert_eq!(c.credentials("agentkit").unwrap().access_key, "AK_FILE");

        let c = ctx(
            CloudProvider::Volcengine,
            global.clone(),
            &[("VOLC_ACCESSKEY", "AK_LEGACY"), ("VOLC_SECRETKEY", "SK_LEGACY")],
        );
        assert_eq!(c.credentials("agentkit").unwrap().access_key, "AK_LEGACY");

        let c = ctx(
            CloudProvider::Volcengine,
            global.clone(),
            &[
                ("VOLCENGINE_ACCESS_KEY", "AK_ENV"),
                ("VOLCENGINE_SECRET_KEY", "SK_ENV"),
                ("VOLCENGINE_CR_ACCESS_KEY", "AK_CR"),
                ("VOLCENGINE_CR_SECRET_KEY", "SK_CR"),
            ],
        );
        assert_eq!(c.credentials("cr").unwrap().access_key, "AK_CR");
        assert_eq!(c.credentials("agentkit").unwrap().access_key, "AK_ENV");

        let explicit = c.with_credentials(Credentials::new("AK_X", "SK_X"));
        assert_eq!(explicit.credentials("cr").unwrap().access_key, "AK_X");
    }

    #[test]
    fn test_byteplus_credentials_from_section() {
        let mut global = GlobalConfig::default();
        global.volcengine.access_key = "AK_VOLC".to_string();
        global.volcengine.secret_key = "SK_VOLC".to_string();
        global.byteplus.access_key = "AK_BP".to_string();
        global.byteplus.secret_key = "SK_BP".to_string();

        let c = ctx(CloudProvider::Byteplus, global, &[("VOLCENGINE_ACCESS_KEY", "AK_ENV")]);
        assert_eq!(c.credentials("agentkit").unwrap().access_key, "AK_BP");
    }

    #[test]
    fn test_missing_credentials_error() {
        let c = ctx(CloudProvider::Volcengine, GlobalConfig::default(), &[]);
        let err = c.credentials("agentkit").unwrap_err().to_string();
        assert!(err.contains("VOLCENGINE_ACCESS_KEY"));
    }

    #[test]
    fn test_iam_credential_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credential");
        std::fs::write(
            &path,
            r#"{"access_key_id":"AK_IAM","secret_access_key":"SK_IAM","session_token":"tok"}"#,
        )
        .unwrap();

        let c = ctx(CloudProvider::Volcengine, GlobalConfig::default(), &[])
            .with_iam_credential_path(&path);
        let creds = c.credentials("agentkit").unwrap();
        assert_eq!(creds.access_key, "AK_IAM");
        assert_eq!(creds.session_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_credentials_debug_masks_secret() {
        let creds = Credentials::new("AKID", "supersecretABCD");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("****ABCD"));
        assert!(!debug.contains("supersecret"));
    }
}
