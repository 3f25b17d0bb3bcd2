// Compile-time constants from Cargo.toml and build.rs
pub const VERSION: &str = env!("AGENTKIT_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const GIT_HASH: &str = env!("AGENTKIT_GIT_HASH");

/// Version of the OpenAPI surface the bundled SDK was generated against.
pub const AGENTKIT_API_VERSION: &str = "2025-10-30";

/// Running platform, e.g. `linux-x86_64`.
pub fn current_platform() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(PKG_NAME, "agentkit");
        assert!(!GIT_HASH.is_empty());
    }

    #[test]
    fn test_version_format() {
        // Either "0.3.0" (release) or "0.3.0-dev+a1b2c3d4[.dirty]" (debug)
        assert!(
            VERSION.chars().next().unwrap().is_numeric(),
            "Version should start with a number"
        );
        let base = VERSION.split('-').next().unwrap();
        assert_eq!(base.split('.').count(), 3, "Base version should be x.y.z: {}", base);
    }

    #[test]
    fn test_current_platform() {
        let platform = current_platform();
        assert!(platform.contains('-'));
    }
}
