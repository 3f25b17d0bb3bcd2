use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let profile = env::var("PROFILE").unwrap_or_default();
    let git_hash = get_git_hash();

    let full_version = match (&git_hash, profile.as_str()) {
        // Dev builds carry the commit they were built from
        (Some(hash), "debug") if is_git_dirty() => format!("{}-dev+{}.dirty", version, hash),
        (Some(hash), "debug") => format!("{}-dev+{}", version, hash),
        _ => version,
    };

    println!("cargo:rustc-env=AGENTKIT_VERSION={}", full_version);
    println!(
        "cargo:rustc-env=AGENTKIT_GIT_HASH={}",
        git_hash.as_deref().unwrap_or("unknown")
    );

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

fn get_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}

fn is_git_dirty() -> bool {
    Command::new("git")
        .args(["status", "--porcelain", "--untracked-files=no"])
        .output()
        .map(|out| out.status.success() && !out.stdout.is_empty())
        .unwrap_or(false)
}
