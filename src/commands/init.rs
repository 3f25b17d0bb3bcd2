use crate::cli::InitFlags;
use crate::config::{AgentkitConfig, Language, LaunchType, ProjectConfig};
use crate::docker::ignore;
use crate::error::{AgentkitError, Result};
use crate::project::Project;
use std::fs;

const GO_ENTRY_POINT: &str = "main.go";

/// Config for a new project: flags over defaults.
fn initial_config(project: &Project, flags: &InitFlags) -> Result<AgentkitConfig> {
    let mut config = AgentkitConfig::default();
    let common = &mut config.common;

    common.agent_name = match flags.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => project.default_name().to_string(),
    };

    if let Some(language) = &flags.language {
        let language: Language = language.parse()?;
        common.set_language(language);
        if language == Language::Golang {
            common.entry_point = GO_ENTRY_POINT.to_string();
        }
    }
    if let Some(entry_point) = &flags.entry_point {
        common.entry_point = entry_point.clone();
    }
    if let Some(launch_type) = &flags.launch_type {
        common.launch_type = launch_type.parse::<LaunchType>()?;
    }
    if let Some(agent_type) = &flags.agent_type {
        common.agent_type = agent_type.clone();
    }

    // Materialise the section for the chosen launch type so it is visible in the file.
    let launch_type = common.launch_type;
    match launch_type {
        LaunchType::Local => {
            config.local_mut();
        }
        LaunchType::Hybrid => {
            config.hybrid_mut();
        }
        LaunchType::Cloud => {
            config.cloud_mut();
        }
    }

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(AgentkitError::InvalidConfig(errors.join("; ")));
    }
    Ok(config)
}

pub fn execute(project: &Project, flags: &InitFlags) -> Result<()> {
    if project.has_config() && !flags.force {
        return Err(AgentkitError::InvalidConfig(format!(
            "{} already exists (use --force to overwrite)",
            project.config_path().display()
        )));
    }

    let config = initial_config(project, flags)?;
    let dependencies_file = config.common.dependencies_file.clone();
    let agent_name = config.common.agent_name.clone();
    let launch_type = config.common.launch_type;

    let mut project_config = ProjectConfig::new(project.config_path(), config);
    project_config.save()?;
    println!("✓ Wrote {}", project.config_path().display());

    if ignore::ensure_dockerignore(project.root(), &[])? {
        println!("✓ Wrote {}", ignore::DOCKERIGNORE_NAME);
    }

    let deps = project.root().join(&dependencies_file);
    if !deps.exists() {
        fs::write(&deps, "")?;
        println!("✓ Wrote {}", dependencies_file);
    }

    println!();
    println!("Agent {} initialised (launch type: {})", agent_name, launch_type);
    println!("Next: add your code, then run 'agentkit launch'");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(dir: &TempDir) -> Project {
        Project::detect(Some(dir.path()), None).unwrap()
    }

    #[test]
    fn test_initial_config_defaults() {
        let dir = TempDir::new().unwrap();
        let config = initial_config(&project(&dir), &InitFlags::default()).unwrap();
        assert_eq!(config.common.agent_name, project(&dir).default_name());
        assert_eq!(config.common.entry_point, "agent.py");
        assert!(config.launch_types.hybrid.is_some());
    }

    #[test]
    fn test_initial_config_golang_local() {
        let dir = TempDir::new().unwrap();
        let flags = InitFlags {
            name: Some("weather".to_string()),
            language: Some("go".to_string()),
            launch_type: Some("local".to_string()),
            ..Default::default()
        };
        let config = initial_config(&project(&dir), &flags).unwrap();
        assert_eq!(config.common.agent_name, "weather");
        assert_eq!(config.common.language, Language::Golang);
        assert_eq!(config.common.entry_point, "main.go");
        assert_eq!(config.common.dependencies_file, "go.mod");
        assert!(config.launch_types.local.is_some());
        assert!(config.launch_types.hybrid.is_none());
    }

    #[test]
    fn test_initial_config_rejects_bad_name() {
        let dir = TempDir::new().unwrap();
        let flags = InitFlags {
            name: Some("my agent!".to_string()),
            ..Default::default()
        };
        let err = initial_config(&project(&dir), &flags).unwrap_err();
        assert!(matches!(err, AgentkitError::InvalidConfig(_)));
    }

    #[test]
    fn test_execute_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let project = project(&dir);
        execute(&project, &InitFlags::default()).unwrap();
        assert!(dir.path().join("agentkit.yaml").exists());
        assert!(dir.path().join(".dockerignore").exists());
        assert!(dir.path().join("requirements.txt").exists());

        assert!(execute(&project, &InitFlags::default()).is_err());
        let forced = InitFlags {
            force: true,
            ..Default::default()
        };
        execute(&project, &forced).unwrap();
    }
}
