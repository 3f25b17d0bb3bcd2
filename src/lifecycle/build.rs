use crate::config::{AgentkitConfig, Language};
use crate::docker::dockerfile::{self, Decision, DockerfileInputs};
use crate::docker::{base_images, ignore, DockerCli};
use crate::error::{AgentkitError, Result};
use crate::platform::CloudProvider;
use crate::utils::path::display_relative;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Upper bound for a local `docker build`.
pub const LOCAL_BUILD_TIMEOUT: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub regenerate_dockerfile: bool,
    /// Overrides `docker_build.platform`.
    pub platform: Option<String>,
}

/// Result of a local image build.
#[derive(Debug, Clone)]
pub struct BuiltImage {
    pub name: String,
    pub id: String,
}

/// Dockerfile, `.dockerignore`, then `docker build -t <image>`.
pub fn build_image(
    config: &AgentkitConfig,
    project_dir: &Path,
    provider: CloudProvider,
    image: &str,
    options: &BuildOptions,
    verbose: bool,
) -> Result<BuiltImage> {
    DockerCli::is_available()?;
    prepare_sources(config, project_dir)?;

    let common = &config.common;
    let docker_build = &config.docker_build;
    let images = base_images::resolve(common, docker_build, provider);
    let inputs = DockerfileInputs::new(common, docker_build);
    let force = options.regenerate_dockerfile || docker_build.regenerate_dockerfile;
    let prepared = dockerfile::prepare(
        project_dir,
        &inputs,
        || dockerfile::render(common, docker_build, &images),
        force,
    )?;
    report_decision(prepared.decision);
    if let Some(backup) = &prepared.backup {
        println!("  Backup created: {}", display_relative(backup, project_dir));
    }

    if ignore::ensure_dockerignore(project_dir, &[])? {
        println!("✓ Created {}", ignore::DOCKERIGNORE_NAME);
    }

    let platform = options
        .platform
        .as_deref()
        .or(docker_build.platform.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("auto"));
    if let Some(platform) = platform {
        println!("Target platform: {}", platform);
    }

    println!("Building Docker image {}...", image);
    // build output replaces the spinner in verbose mode
    let bar = (!verbose).then(|| super::spinner(&format!("docker build {}", image)));
    let result = DockerCli::build(project_dir, &prepared.path, image, platform, LOCAL_BUILD_TIMEOUT, verbose);
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    let id = result?;

    println!("✓ Image built: {}", image);
    Ok(BuiltImage {
        name: image.to_string(),
        id,
    })
}

/// Check the files the Dockerfile refers to, creating an empty
/// dependencies file for Python projects.
fn prepare_sources(config: &AgentkitConfig, project_dir: &Path) -> Result<()> {
    if let Some(script) = config.docker_build.build_script.as_deref().filter(|s| !s.trim().is_empty()) {
        if !project_dir.join(script).is_file() {
            return Err(AgentkitError::InvalidConfig(format!(
                "docker_build.build_script not found: {}",
                script
            )));
        }
    }

    let common = &config.common;
    match common.language {
        Language::Python => {
            let deps = project_dir.join(&common.dependencies_file);
            if !common.dependencies_file.is_empty() && !deps.exists() {
                log::info!("creating empty {}", deps.display());
                fs::write(&deps, "")?;
            }
        }
        Language::Golang => {
            let entry = project_dir.join(&common.entry_point);
            if !entry.exists() && !project_dir.join("go.mod").exists() {
                return Err(AgentkitError::InvalidConfig(format!(
                    "Go entry point not found: {} (and no go.mod in the project root)",
                    common.entry_point
                )));
            }
        }
    }
    Ok(())
}

fn report_decision(decision: Decision) {
    match decision {
        Decision::GenerateNew => println!("✓ Dockerfile generated"),
        Decision::GenerateConfigChanged => println!("✓ Dockerfile updated ({})", decision.reason()),
        Decision::KeepConfigConflict => eprintln!("⚠ {}", decision.reason()),
        Decision::KeepUpToDate | Decision::KeepUserModified | Decision::KeepUserCustom => {
            println!("Using existing Dockerfile: {}", decision.reason())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_sources_creates_requirements() {
        let dir = TempDir::new().unwrap();
        let config = AgentkitConfig::default();
        prepare_sources(&config, dir.path()).unwrap();
        assert!(dir.path().join("requirements.txt").exists());
    }

    #[test]
    fn test_prepare_sources_missing_build_script() {
        let dir = TempDir::new().unwrap();
        let mut config = AgentkitConfig::default();
        config.docker_build.build_script = Some("scripts/setup.sh".to_string());
        let err = prepare_sources(&config, dir.path()).unwrap_err();
        assert!(err.to_string().contains("scripts/setup.sh"));
    }

    #[test]
    fn test_prepare_sources_go_without_module() {
        let dir = TempDir::new().unwrap();
        let mut config = AgentkitConfig::default();
        config.common.set_language(Language::Golang);
        config.common.entry_point = "main.go".to_string();
        assert!(prepare_sources(&config, dir.path()).is_err());

        fs::write(dir.path().join("go.mod"), "module demo\n").unwrap();
        prepare_sources(&config, dir.path()).unwrap();
        assert!(!dir.path().join("requirements.txt").exists());
    }
}
