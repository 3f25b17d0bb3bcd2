use crate::error::{AgentkitError, Result};
use crate::utils::yaml;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parse `KEY=VALUE` arguments.
pub fn parse_env_args(env_args: &[String]) -> Result<BTreeMap<String, String>> {
    let mut env_vars = BTreeMap::new();

    for arg in env_args {
        match arg.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                env_vars.insert(key.trim().to_string(), value.to_string());
            }
            _ => {
                return Err(AgentkitError::InvalidConfig(format!(
                    "Invalid env format: {}. Expected KEY=VALUE",
                    arg
                )));
            }
        }
    }

    Ok(env_vars)
}

/// Read `<project_dir>/.env` without touching the process environment.
pub fn load_dotenv_file(project_dir: &Path) -> Result<BTreeMap<String, String>> {
    let path = project_dir.join(".env");
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let mut env_vars = BTreeMap::new();
    let iter = dotenvy::from_path_iter(&path).map_err(|e| {
        AgentkitError::InvalidConfig(format!("Failed to read env file {}: {}", path.display(), e))
    })?;
    for item in iter {
        let (key, value) = item.map_err(|e| {
            AgentkitError::InvalidConfig(format!("Invalid env file {}: {}", path.display(), e))
        })?;
        env_vars.insert(key, value);
    }

    log::debug!("loaded {} variables from {}", env_vars.len(), path.display());
    Ok(env_vars)
}

/// Read a veADK-style `config.yaml`, flattened into `PARENT_CHILD` keys.
///
/// Unreadable or malformed files are skipped with a warning.
pub fn load_veadk_yaml(project_dir: &Path) -> BTreeMap<String, String> {
    let path = project_dir.join("config.yaml");
    if !path.exists() {
        return BTreeMap::new();
    }

    let parsed = fs::read_to_string(&path)
        .map_err(AgentkitError::from)
        .and_then(|text| serde_yaml::from_str::<serde_yaml::Value>(&text).map_err(AgentkitError::from));

    match parsed {
        Ok(value) => yaml::flatten_upper(&value),
        Err(e) => {
            log::warn!("ignoring {}: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}

/// Environment passed to a deployed agent, lowest precedence first:
/// veADK `config.yaml`, `.env`, `common.runtime_envs`, strategy `runtime_envs`.
pub fn merge_runtime_envs(
    project_dir: &Path,
    common: &BTreeMap<String, String>,
    strategy: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>> {
    let mut merged = load_veadk_yaml(project_dir);
    merged.extend(load_dotenv_file(project_dir)?);
    merged.extend(common.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged.extend(strategy.iter().map(|(k, v)| (k.clone(), v.clone())));
    Ok(merged)
}
