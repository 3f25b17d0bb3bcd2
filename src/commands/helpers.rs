use crate::error::Result;
use crate::lifecycle::Lifecycle;
use crate::project::Project;
use serde::Serialize;
use std::io::{self, Write};

/// Options every lifecycle command takes from the global flags.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub verbose: bool,
    pub provider: Option<String>,
}

/// Load the project's agentkit.yaml and wrap it for lifecycle commands.
pub fn lifecycle(project: &Project, options: &GlobalOptions) -> Result<Lifecycle> {
    let config = project.load_config()?;
    Ok(Lifecycle::new(config, options.verbose).with_provider(options.provider.as_deref()))
}

/// Ask a `[y/N]` question on stdin; anything but y/yes is a no.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input == "y" || input == "yes"
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
