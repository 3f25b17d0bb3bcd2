use crate::cli::{ConfigCommands, GlobalCommands};
use crate::error::{AgentkitError, Result};
use crate::platform::GlobalConfig;
use crate::project::Project;
use crate::utils::yaml;

const MASK: &str = "********";

pub fn execute(project: &Project, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(project),
        ConfigCommands::Get { key } => get(project, key),
        ConfigCommands::Set { key, value } => set(project, key, value),
        ConfigCommands::Validate => validate(project),
        ConfigCommands::Global { command } => match command {
            GlobalCommands::Show => global_show(),
            GlobalCommands::Set { key, value } => global_set(key, value),
        },
    }
}

fn show(project: &Project) -> Result<()> {
    let config = project.load_config()?;
    println!("# {}", config.path().display());
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn get(project: &Project, key: &str) -> Result<()> {
    let config = project.load_config()?;
    match config.get_raw(key)? {
        Some(value) => {
            println!("{}", yaml::display(&value));
            Ok(())
        }
        None => Err(AgentkitError::InvalidConfig(format!("{} is not set", key))),
    }
}

fn set(project: &Project, key: &str, value: &str) -> Result<()> {
    let mut config = project.load_config()?;
    config.set_raw(key, value)?;
    config.save()?;
    println!("✓ {} = {}", key, value);
    Ok(())
}

fn validate(project: &Project) -> Result<()> {
    let path = project.config_path();
    println!("Validating {}...\n", path.display());

    let config = project.load_config()?;
    let errors = config.config.validate();
    if errors.is_empty() {
        println!("✓ Configuration is valid!");
        return Ok(());
    }

    println!("✗ Configuration is invalid!");
    for error in &errors {
        println!("  - {}", error);
    }
    Err(AgentkitError::InvalidConfig(format!("{} error(s) in {}", errors.len(), path.display())))
}

/// Global config with secrets masked, for display.
fn masked(config: &GlobalConfig) -> GlobalConfig {
    let mut config = config.clone();
    for section in [&mut config.volcengine, &mut config.byteplus] {
        if !section.secret_key.is_empty() {
            section.secret_key = MASK.to_string();
        }
    }
    config
}

fn global_show() -> Result<()> {
    let path = GlobalConfig::default_path();
    let config = GlobalConfig::load()?;
    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} - not found, showing defaults", path.display());
    }
    print!("{}", serde_yaml::to_string(&masked(&config))?);
    Ok(())
}

fn global_set(key: &str, value: &str) -> Result<()> {
    let mut config = GlobalConfig::load()?;
    config.set_path(key, value)?;
    config.save()?;
    if key.ends_with("secret_key") {
        println!("✓ {} = {}", key, MASK);
    } else {
        println!("✓ {} = {}", key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_secret_keys() {
        let mut config = GlobalConfig::default();
        config.volcengine.access_key = "AK".to_string();
        config.volcengine.secret_key = "SK".to_string();

        let shown = masked(&config);
        assert_eq!(shown.volcengine.access_key, "AK");
        assert_eq!(shown.volcengine.secret_key, MASK);
        assert!(shown.byteplus.secret_key.is_empty());
        assert_eq!(config.volcengine.secret_key, "SK");
    }
}
