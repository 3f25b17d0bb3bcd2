use crate::error::Result;
use std::fs;
use std::path::Path;

pub const DOCKERIGNORE_NAME: &str = ".dockerignore";

const DEFAULT_ENTRIES: &[&str] = &[
    "# AgentKit configuration",
    "agentkit.yaml",
    "agentkit*.yaml",
    ".agentkit/",
    "",
    "# Python cache",
    "__pycache__/",
    "*.py[cod]",
    "*$py.class",
    "",
    "# Virtual environments",
    ".venv/",
    "venv/",
    "ENV/",
    "env/",
    "",
    "# IDE",
    ".vscode/",
    ".idea/",
    ".windsurf/",
    "",
    "# Git",
    ".git/",
    ".gitignore",
    "",
    "# Docker",
    "Dockerfile*",
    ".dockerignore",
];

pub fn default_contents(additional: &[String]) -> String {
    let mut lines: Vec<&str> = DEFAULT_ENTRIES.to_vec();
    if !additional.is_empty() {
        lines.push("");
        lines.push("# Additional entries");
        lines.extend(additional.iter().map(String::as_str));
    }
    let mut contents = lines.join("\n");
    contents.push('\n');
    contents
}

/// Write `.dockerignore` unless one exists. Returns whether it was created.
pub fn ensure_dockerignore(dir: &Path, additional: &[String]) -> Result<bool> {
    let path = dir.join(DOCKERIGNORE_NAME);
    if path.exists() {
        log::debug!("{} already exists, leaving it alone", path.display());
        return Ok(false);
    }
    fs::write(&path, default_contents(additional))?;
    log::info!("created {}", path.display());
    Ok(true)
}

/// Non-comment patterns of an existing `.dockerignore`.
pub fn read_patterns(dir: &Path) -> Result<Vec<String>> {
    let path = dir.join(DOCKERIGNORE_NAME);
    if !path.exists() {
        return Ok(Vec::new());
    }
    Ok(fs::read_to_string(&path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_once() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_dockerignore(dir.path(), &[]).unwrap());

        fs::write(dir.path().join(DOCKERIGNORE_NAME), "custom\n").unwrap();
        assert!(!ensure_dockerignore(dir.path(), &[]).unwrap());
        assert_eq!(fs::read_to_string(dir.path().join(DOCKERIGNORE_NAME)).unwrap(), "custom\n");
    }

    #[test]
    fn test_additional_entries() {
        let contents = default_contents(&["data/".to_string(), "*.ckpt".to_string()]);
        assert!(contents.contains("agentkit.yaml\n"));
        assert!(contents.ends_with("# Additional entries\ndata/\n*.ckpt\n"));
        assert!(!default_contents(&[]).contains("Additional"));
    }

    #[test]
    fn test_read_patterns() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DOCKERIGNORE_NAME), "# comment\n\nnode_modules/\n  *.log \n").unwrap();
        assert_eq!(read_patterns(dir.path()).unwrap(), vec!["node_modules/", "*.log"]);
    }
}
