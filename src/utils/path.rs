use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the current user's home directory.
///
/// ```
/// use agentkit::utils::path::expand_tilde;
///
/// let path = expand_tilde("/etc/hosts").unwrap();
/// assert_eq!(path.to_str(), Some("/etc/hosts"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_str()?;

    match path_str.strip_prefix('~') {
        None => Some(path.to_path_buf()),
        Some("") => dirs::home_dir(),
        Some(rest) if rest.starts_with('/') => {
            dirs::home_dir().map(|home| home.join(rest.trim_start_matches('/')))
        }
        // ~username is not supported
        Some(_) => None,
    }
}

/// Path relative to `base` for display, or the path itself.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~").unwrap(), home);
        assert_eq!(expand_tilde("~/.agentkit/config.yaml").unwrap(), home.join(".agentkit/config.yaml"));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("relative/path").unwrap(), PathBuf::from("relative/path"));
        assert_eq!(expand_tilde("/path/~user/file").unwrap(), PathBuf::from("/path/~user/file"));
        assert!(expand_tilde("~someone/file").is_none());
    }

    #[test]
    fn test_display_relative() {
        assert_eq!(display_relative(Path::new("/p/a/Dockerfile"), Path::new("/p/a")), "Dockerfile");
        assert_eq!(display_relative(Path::new("/other"), Path::new("/p")), "/other");
    }
}
