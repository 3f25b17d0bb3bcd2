use assert_cmd::Command;
use predicates::prelude::*;

fn agentkit() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("agentkit"))
}

#[test]
fn test_help_output() {
    agentkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Build, deploy and operate agents on Volcengine AgentKit",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("TYPICAL FLOW:"));
}

#[test]
fn test_version_flag() {
    let output = agentkit().arg("--version").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);

    // "agentkit X.Y.Z" or "agentkit X.Y.Z-dev+hash[.dirty]"
    let version_part = stdout.strip_prefix("agentkit ").unwrap().trim();
    assert!(
        version_part.chars().next().unwrap().is_numeric(),
        "Version should start with a number: {}",
        version_part
    );

    #[cfg(not(debug_assertions))]
    assert!(
        !version_part.contains("-dev"),
        "Release build version should not contain -dev: {}",
        version_part
    );
}

#[test]
fn test_version_command() {
    agentkit()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("agentkit "))
        .stdout(predicate::str::contains("api version: 2025-10-30"))
        .stdout(predicate::str::contains("platform:"));
}

#[test]
fn test_invoke_help() {
    agentkit()
        .args(["invoke", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--payload"))
        .stdout(predicate::str::contains("--headers"))
        .stdout(predicate::str::contains("--apikey"));
}

#[test]
fn test_invoke_message_and_payload_conflict() {
    agentkit()
        .args(["invoke", "hello", "--payload", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_resource_commands_listed() {
    let output = agentkit().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    for command in ["runtime", "memory", "knowledge", "tools", "mcp", "skills"] {
        assert!(stdout.contains(command), "missing {} in help", command);
    }
}

#[test]
fn test_missing_project_dir() {
    agentkit()
        .args(["status", "--project-dir", "/nonexistent/agentkit/project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project directory does not exist"));
}
