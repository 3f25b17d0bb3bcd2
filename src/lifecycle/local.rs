//! `launch_type: local`: image and container on this machine.

use super::build::{build_image, BuildOptions};
use super::{timestamp, Lifecycle, StatusReport};
use crate::config::AgentkitConfig;
use crate::docker::{DockerCli, RunOptions};
use crate::error::{AgentkitError, Result};
use crate::utils::env::merge_runtime_envs;

const DEFAULT_IMAGE_NAME: &str = "agentkit-app";

pub const STATE_RUNNING: &str = "running";
pub const STATE_STOPPED: &str = "stopped";
pub const STATE_NOT_DEPLOYED: &str = "not_deployed";

fn image_name(config: &AgentkitConfig) -> String {
    let name = if config.common.agent_name.is_empty() {
        DEFAULT_IMAGE_NAME
    } else {
        config.common.agent_name.as_str()
    };
    format!("{}:{}", name, config.local().image_tag)
}

/// The recorded image, else the one `build` would produce.
fn deployed_image(config: &AgentkitConfig) -> String {
    let recorded = config.local().full_image_name;
    if recorded.is_empty() {
        image_name(config)
    } else {
        recorded
    }
}

fn container_name(config: &AgentkitConfig) -> String {
    config.local().container_name_for(&config.common.agent_name)
}

/// `docker run --cpu-quota` for a cpu count; one core is 100000.
fn cpu_quota(cpu_limit: &str) -> Option<u64> {
    cpu_limit
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|cpus| *cpus > 0.0)
        .map(|cpus| (cpus * 100_000.0).round() as u64)
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

pub fn endpoint(lc: &Lifecycle) -> String {
    format!("http://localhost:{}", lc.config.config.local().invoke_port)
}

pub fn build(lc: &mut Lifecycle, options: &BuildOptions) -> Result<()> {
    let provider = lc.provider()?;
    let project_dir = lc.project_dir();
    let image = image_name(&lc.config.config);
    let built = build_image(&lc.config.config, &project_dir, provider, &image, options, lc.verbose)?;

    let local = lc.config.config.local_mut();
    local.image_id = built.id;
    local.full_image_name = built.name;
    local.build_timestamp = timestamp();
    lc.config.save()?;
    Ok(())
}

pub fn deploy(lc: &mut Lifecycle) -> Result<()> {
    DockerCli::is_available()?;

    let config = &lc.config.config;
    let local = config.local();
    let image = deployed_image(config);
    if !DockerCli::image_exists(&image) {
        return Err(AgentkitError::NotDeployed(format!(
            "image {} not found, run `agentkit build` first",
            image
        )));
    }

    let name = container_name(config);
    if let Some(existing) = DockerCli::container_state(&name)? {
        println!("Replacing container {} ({})", name, existing.status);
        DockerCli::remove_container(&name, true, lc.verbose)?;
    }

    let env = merge_runtime_envs(&lc.project_dir(), &config.common.runtime_envs, &local.runtime_envs)?;
    log::debug!("container env keys: {:?}", env.keys().collect::<Vec<_>>());

    let options = RunOptions {
        name: &name,
        image: &image,
        ports: &local.ports,
        volumes: &local.volumes,
        env,
        memory_limit: non_empty(&local.memory_limit),
        cpu_quota: cpu_quota(&local.cpu_limit),
        restart_policy: non_empty(&local.restart_policy),
    };
    let container_id = DockerCli::run(&options)?;

    println!("✓ Container {} started", name);
    println!("  Endpoint: {}", endpoint(lc));

    let local = lc.config.config.local_mut();
    local.container_id = container_id;
    local.deploy_timestamp = timestamp();
    lc.config.save()?;
    Ok(())
}

pub fn status(lc: &Lifecycle) -> Result<StatusReport> {
    let config = &lc.config.config;
    let local = config.local();
    let name = container_name(config);

    let lookup = if local.container_id.is_empty() {
        None
    } else {
        DockerCli::container_state(&local.container_id)?
    };
    let state = match lookup {
        Some(state) => Some(state),
        None => DockerCli::container_state(&name)?,
    };

    let (state_name, running) = match &state {
        Some(s) if s.running => (STATE_RUNNING, true),
        Some(_) => (STATE_STOPPED, false),
        None => (STATE_NOT_DEPLOYED, false),
    };

    let image = deployed_image(config);
    let image_state = if DockerCli::image_exists(&image) { "built" } else { "not built" };

    Ok(StatusReport {
        launch_type: lc.launch_type().to_string(),
        state: state_name.to_string(),
        endpoint: running.then(|| endpoint(lc)),
        details: Vec::new(),
    }
    .detail("container", name)
    .detail("container_status", state.map(|s| s.status).unwrap_or_default())
    .detail("image", format!("{} ({})", image, image_state))
    .detail("image_id", local.image_id)
    .detail("deploy_timestamp", local.deploy_timestamp))
}

/// Remove the container and the image; missing ones are not an error.
pub fn destroy(lc: &mut Lifecycle) -> Result<()> {
    DockerCli::is_available()?;

    let config = &lc.config.config;
    let name = container_name(config);
    let image = deployed_image(config);

    match DockerCli::container_state(&name)? {
        Some(_) => {
            DockerCli::remove_container(&name, true, lc.verbose)?;
            println!("✓ Container {} removed", name);
        }
        None => println!("Container {} not found, skipping", name),
    }

    if DockerCli::image_exists(&image) {
        DockerCli::remove_image(&image, true, lc.verbose)?;
        println!("✓ Image {} removed", image);
    } else {
        println!("Image {} not found, skipping", image);
    }

    let local = lc.config.config.local_mut();
    local.container_id.clear();
    local.image_id.clear();
    local.deploy_timestamp.clear();
    local.build_timestamp.clear();
    local.full_image_name.clear();
    lc.config.save()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_quota() {
        assert_eq!(cpu_quota("1"), Some(100_000));
        assert_eq!(cpu_quota("0.5"), Some(50_000));
        assert_eq!(cpu_quota(" 2 "), Some(200_000));
        assert_eq!(cpu_quota("0"), None);
        assert_eq!(cpu_quota("lots"), None);
    }

    #[test]
    fn test_image_names() {
        let mut config = AgentkitConfig::default();
        assert_eq!(image_name(&config), "agentkit-app:latest");

        config.common.agent_name = "weather".to_string();
        config.local_mut().image_tag = "v2".to_string();
        assert_eq!(image_name(&config), "weather:v2");
        assert_eq!(deployed_image(&config), "weather:v2");

        config.local_mut().full_image_name = "weather:v1".to_string();
        assert_eq!(deployed_image(&config), "weather:v1");
        assert_eq!(container_name(&config), "weather-container");
    }
}
