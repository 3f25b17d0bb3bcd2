use crate::error::Result;
use crate::utils::yaml;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;

pub const GLOBAL_CONFIG_ENV: &str = "AGENTKIT_GLOBAL_CONFIG";

/// Region remapping rules: logical region -> service key -> service region.
pub type RegionRules = BTreeMap<String, BTreeMap<String, String>>;

/// User-wide settings stored in `~/.agentkit/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    pub volcengine: ProviderSection,

    #[serde(skip_serializing_if = "ProviderSection::is_empty")]
    pub byteplus: ProviderSection,

    pub cr: CrSection,

    pub tos: TosSection,

    pub defaults: DefaultsSection,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub services: BTreeMap<String, ServiceOverride>,

    #[serde(skip_serializing_if = "RegionPolicy::is_empty")]
    pub region_policy: RegionPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProviderSection {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    #[serde(skip_serializing_if = "RegionPolicy::is_empty")]
    pub region_policy: RegionPolicy,
}

impl ProviderSection {
    pub fn is_empty(&self) -> bool {
        self.access_key.is_empty()
            && self.secret_key.is_empty()
            && self.region.is_empty()
            && self.region_policy.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RegionPolicy {
    pub rules: RegionRules,
}

impl RegionPolicy {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrSection {
    pub instance_name: String,
    pub namespace_name: String,
    #[serde(default = "default_instance_type")]
    pub auto_create_instance_type: String,
}

impl Default for CrSection {
    fn default() -> Self {
        Self {
            instance_name: String::new(),
            namespace_name: String::new(),
            auto_create_instance_type: default_instance_type(),
        }
    }
}

fn default_instance_type() -> String {
    "Micro".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TosSection {
    pub bucket: String,
    pub prefix: String,
    pub region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DefaultsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preflight_mode: Option<String>,
}

/// Per-service endpoint overrides under `services.<key>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

static CACHE: Lazy<Mutex<HashMap<PathBuf, (SystemTime, GlobalConfig)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl GlobalConfig {
    /// Default location, overridable through `AGENTKIT_GLOBAL_CONFIG`.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(GLOBAL_CONFIG_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".agentkit")
            .join("config.yaml")
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Read the file at `path`; a missing file yields defaults.
    ///
    /// Parsed values are cached per path and reused until the file's
    /// modification time changes.
    pub fn load_from(path: &Path) -> Result<Self> {
        let modified = match std::fs::metadata(path) {
            Ok(meta) => meta.modified()?,
            Err(_) => {
                log::debug!("global config {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
        };

        if let Ok(cache) = CACHE.lock() {
            if let Some((mtime, cached)) = cache.get(path) {
                if *mtime == modified {
                    return Ok(cached.clone());
                }
            }
        }

        let contents = std::fs::read_to_string(path)?;
        let config: GlobalConfig = if contents.trim().is_empty() {
            GlobalConfig::default()
        } else {
            serde_yaml::from_str(&contents)?
        };

        if let Ok(mut cache) = CACHE.lock() {
            cache.insert(path.to_path_buf(), (modified, config.clone()));
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Write the config, restricting permissions to the owner.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        if let Ok(mut cache) = CACHE.lock() {
            cache.remove(path);
        }
        Ok(())
    }

    /// Read a dotted path such as `cr.instance_name`.
    pub fn get_path(&self, dotted: &str) -> Result<Option<serde_yaml::Value>> {
        let value = serde_yaml::to_value(self)?;
        Ok(yaml::get_path(&value, dotted).cloned())
    }

    /// Set a dotted path, parsing `raw` as a YAML scalar.
    pub fn set_path(&mut self, dotted: &str, raw: &str) -> Result<()> {
        let mut value = serde_yaml::to_value(&*self)?;
        yaml::set_path(&mut value, dotted, yaml::parse_scalar(raw))?;
        *self = serde_yaml::from_value(value)?;
        Ok(())
    }

    /// Custom region rules for the Volcengine provider.
    pub fn volcengine_rules(&self) -> &RegionRules {
        if self.region_policy.is_empty() {
            &self.volcengine.region_policy.rules
        } else {
            &self.region_policy.rules
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_default_path_env_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("global.yaml");
        std::env::set_var(GLOBAL_CONFIG_ENV, &path);
        assert_eq!(GlobalConfig::default_path(), path);

        let mut config = GlobalConfig::default();
        config.set_path("cr.instance_name", "shared-cr").unwrap();
        config.save().unwrap();
        assert_eq!(GlobalConfig::load().unwrap().cr.instance_name, "shared-cr");

        std::env::set_var(GLOBAL_CONFIG_ENV, "  ");
        assert!(GlobalConfig::default_path().ends_with(".agentkit/config.yaml"));
        std::env::remove_var(GLOBAL_CONFIG_ENV);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(config.cr.auto_create_instance_type, "Micro");
    }

    #[test]
    fn test_parse_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            r#"
volcengine:
  access_key: AK
  secret_key: SK
  region: cn-shanghai
cr:
  instance_name: my-cr
defaults:
  cloud_provider: byteplus
  launch_type: local
services:
  agentkit:
    host: agentkit.internal
region_policy:
  rules:
    cn-shanghai:
      cr: cn-beijing
"#,
        )
        .unwrap();

        let config = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(config.volcengine.access_key, "AK");
        assert_eq!(config.volcengine.region, "cn-shanghai");
        assert_eq!(config.cr.instance_name, "my-cr");
        assert_eq!(config.cr.auto_create_instance_type, "Micro");
        assert_eq!(config.defaults.cloud_provider.as_deref(), Some("byteplus"));
        assert_eq!(
            config.services["agentkit"].host.as_deref(),
            Some("agentkit.internal")
        );
        assert_eq!(config.volcengine_rules()["cn-shanghai"]["cr"], "cn-beijing");
    }

    #[test]
    fn test_save_roundtrip_and_permissions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = GlobalConfig::default();
        config.set_path("volcengine.access_key", "AKNEW").unwrap();
        config.set_path("tos.bucket", "bucket-1").unwrap();
        config.save_to(&path).unwrap();

        let loaded = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(loaded.volcengine.access_key, "AKNEW");
        assert_eq!(loaded.tos.bucket, "bucket-1");
        assert_eq!(
            loaded.get_path("tos.bucket").unwrap(),
            Some(serde_yaml::Value::String("bucket-1".to_string()))
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_reload_after_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        std::fs::write(&path, "cr:\n  instance_name: first\n").unwrap();
        assert_eq!(GlobalConfig::load_from(&path).unwrap().cr.instance_name, "first");

        let mut config = GlobalConfig::load_from(&path).unwrap();
        config.cr.instance_name = "second".to_string();
        config.save_to(&path).unwrap();
        assert_eq!(GlobalConfig::load_from(&path).unwrap().cr.instance_name, "second");
    }
}
