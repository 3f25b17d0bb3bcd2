use crate::error::{AgentkitError, Result};
use crate::utils::shell::display_command;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

pub struct DockerCli;

/// Options for `docker run -d`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions<'a> {
    pub name: &'a str,
    pub image: &'a str,
    /// `host:container` pairs.
    pub ports: &'a [String],
    pub volumes: &'a [String],
    pub env: BTreeMap<String, String>,
    pub memory_limit: Option<&'a str>,
    /// Microseconds per 100ms period; 100000 is one core.
    pub cpu_quota: Option<u64>,
    pub restart_policy: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerState {
    pub id: String,
    pub status: String,
    pub running: bool,
}

impl DockerCli {
    /// Check if docker is on PATH
    pub fn is_installed() -> bool {
        which::which("docker").is_ok()
    }

    /// Check that the daemon answers; the error carries OS-specific help.
    pub fn is_available() -> Result<()> {
        if !Self::is_installed() {
            return Err(AgentkitError::DockerNotAvailable(format!(
                "docker executable not found\n\n{}",
                Self::help_text()
            )));
        }

        let output = Command::new("docker")
            .args(["info", "--format", "{{.ServerVersion}}"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AgentkitError::DockerNotAvailable(format!("Failed to run docker info: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AgentkitError::DockerNotAvailable(format!(
                "{}\n\n{}",
                stderr.trim(),
                Self::help_text()
            )));
        }

        log::debug!(
            "docker server {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(())
    }

    fn help_text() -> &'static str {
        if cfg!(target_os = "macos") {
            "Please ensure:\n\
             1. Docker Desktop is installed (https://www.docker.com/products/docker-desktop)\n\
             2. Docker Desktop is running\n\
             3. The Docker daemon has finished starting"
        } else if cfg!(target_os = "linux") {
            "Please ensure:\n\
             1. Docker is installed on your system\n\
             2. The Docker daemon is running (try 'sudo systemctl start docker')\n\
             3. You can access Docker (try 'sudo usermod -aG docker $USER')\n\
             4. The Docker socket is accessible (usually /var/run/docker.sock)"
        } else {
            "Please ensure:\n\
             1. Docker Desktop is installed and running\n\
             2. The Docker daemon has finished starting"
        }
    }

    /// Build an image and return its id. The build is killed after `timeout`.
    pub fn build(
        context: &Path,
        dockerfile: &Path,
        tag: &str,
        platform: Option<&str>,
        timeout: Duration,
        verbose: bool,
    ) -> Result<String> {
        let mut args = vec![
            "build".to_string(),
            "-t".to_string(),
            tag.to_string(),
            "-f".to_string(),
            dockerfile.to_string_lossy().into_owned(),
        ];
        if let Some(platform) = platform {
            args.push("--platform".to_string());
            args.push(platform.to_string());
        }
        args.push(context.to_string_lossy().into_owned());
        log::debug!("{}", display_command("docker", &args));

        let mut cmd = Command::new("docker");
        cmd.args(&args).stdin(Stdio::null());
        if !verbose {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| AgentkitError::Docker(format!("Failed to start docker build: {}", e)))?;

        let status = match child
            .wait_timeout(timeout)
            .map_err(|e| AgentkitError::Docker(format!("Failed to wait for docker build: {}", e)))?
        {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(AgentkitError::Docker(format!(
                    "Build of {} timed out after {}s",
                    tag,
                    timeout.as_secs()
                )));
            }
        };

        if !status.success() {
            return Err(AgentkitError::Docker(format!(
                "Failed to build image {}{}",
                tag,
                if verbose { "" } else { " (rerun with --verbose for build output)" }
            )));
        }

        Self::image_id(tag)
    }

    /// Id of a local image.
    pub fn image_id(image: &str) -> Result<String> {
        let output = Command::new("docker")
            .args(["image", "inspect", "--format", "{{.Id}}", image])
            .output()
            .map_err(|e| AgentkitError::Docker(format!("Failed to inspect image: {}", e)))?;

        if !output.status.success() {
            return Err(AgentkitError::Docker(format!("Image {} not found", image)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    pub fn image_exists(image: &str) -> bool {
        Command::new("docker")
            .args(["image", "inspect", image])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Tag an image
    pub fn tag(source: &str, target: &str, verbose: bool) -> Result<()> {
        Self::run_quiet(&["tag", source, target], verbose, "tag image")
    }

    /// Log in to a registry, passing the password on stdin.
    pub fn login(registry: &str, username: &str, password: &str) -> Result<()> {
        let mut child = Command::new("docker")
            .args(["login", registry, "-u", username, "--password-stdin"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AgentkitError::Docker(format!("Failed to run docker login: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(password.as_bytes())
                .map_err(|e| AgentkitError::Docker(format!("Failed to send registry password: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| AgentkitError::Docker(format!("Failed to run docker login: {}", e)))?;

        if !output.status.success() {
            return Err(AgentkitError::Docker(format!(
                "Failed to log in to {}: {}",
                registry,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }

    /// Push an image
    pub fn push(image: &str, verbose: bool) -> Result<()> {
        Self::run_quiet(&["push", image], verbose, "push image")
    }

    /// Start a detached container and return its id.
    pub fn run(options: &RunOptions<'_>) -> Result<String> {
        let args = Self::run_args(options);
        log::debug!("{}", display_command("docker", &args));

        let output = Command::new("docker")
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AgentkitError::Docker(format!("Failed to run container: {}", e)))?;

        if !output.status.success() {
            return Err(AgentkitError::Docker(format!(
                "Failed to run container {}: {}",
                options.name,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run_args(options: &RunOptions<'_>) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "-d".to_string(),
            "--name".to_string(),
            options.name.to_string(),
        ];
        for port in options.ports {
            args.push("-p".to_string());
            args.push(port.clone());
        }
        for volume in options.volumes {
            args.push("-v".to_string());
            args.push(volume.clone());
        }
        for (key, value) in &options.env {
            args.push("-e".to_string());
            args.push(format!("{}={}", key, value));
        }
        if let Some(memory) = options.memory_limit {
            args.push(format!("--memory={}", memory));
        }
        if let Some(quota) = options.cpu_quota {
            args.push(format!("--cpu-quota={}", quota));
        }
        if let Some(policy) = options.restart_policy {
            args.push(format!("--restart={}", policy));
        }
        args.push(options.image.to_string());
        args
    }

    /// State of a container, or `None` when it does not exist.
    pub fn container_state(name_or_id: &str) -> Result<Option<ContainerState>> {
        let output = Command::new("docker")
            .args([
                "inspect",
                "--type",
                "container",
                "--format",
                "{{.Id}}\t{{.State.Status}}\t{{.State.Running}}",
                name_or_id,
            ])
            .output()
            .map_err(|e| AgentkitError::Docker(format!("Failed to inspect container: {}", e)))?;

        if !output.status.success() {
            return Ok(None);
        }

        Ok(Self::parse_state(&String::from_utf8_lossy(&output.stdout)))
    }

    fn parse_state(stdout: &str) -> Option<ContainerState> {
        let line = stdout.lines().next()?;
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() >= 3 {
            Some(ContainerState {
                id: parts[0].to_string(),
                status: parts[1].to_string(),
                running: parts[2] == "true",
            })
        } else {
            None
        }
    }

    /// Stop a container
    pub fn stop(name_or_id: &str, verbose: bool) -> Result<()> {
        Self::run_quiet(&["stop", name_or_id], verbose, "stop container")
    }

    /// Remove a container, stopping it first when `force`.
    pub fn remove_container(name_or_id: &str, force: bool, verbose: bool) -> Result<()> {
        let mut args = vec!["rm"];
        if force {
            args.push("-f");
        }
        args.push(name_or_id);
        Self::run_quiet(&args, verbose, "remove container")
    }

    /// Remove an image
    pub fn remove_image(image: &str, force: bool, verbose: bool) -> Result<()> {
        let mut args = vec!["rmi"];
        if force {
            args.push("-f");
        }
        args.push(image);
        Self::run_quiet(&args, verbose, "remove image")
    }

    fn run_quiet(args: &[&str], verbose: bool, what: &str) -> Result<()> {
        log::debug!("{}", display_command("docker", args));

        let mut cmd = Command::new("docker");
        cmd.args(args).stdin(Stdio::null());

        let result = if verbose {
            cmd.status()
        } else {
            cmd.stdout(Stdio::null()).stderr(Stdio::null()).status()
        };

        let status = result.map_err(|e| AgentkitError::Docker(format!("Failed to {}: {}", what, e)))?;

        if !status.success() {
            return Err(AgentkitError::Docker(format!(
                "Failed to {} ({})",
                what,
                args.last().copied().unwrap_or_default()
            )));
        }

        Ok(())
    }
}
