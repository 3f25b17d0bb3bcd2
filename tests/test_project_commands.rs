use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command running in `dir` with an isolated global config.
fn agentkit(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agentkit"));
    cmd.current_dir(dir.path())
        .env("AGENTKIT_GLOBAL_CONFIG", dir.path().join("global.yaml"))
        .env_remove("VOLCENGINE_ACCESS_KEY")
        .env_remove("VOLCENGINE_SECRET_KEY")
        .env_remove("CLOUD_PROVIDER");
    cmd
}

fn init(dir: &TempDir, extra: &[&str]) {
    agentkit(dir)
        .args(["init", "demo_agent"])
        .args(extra)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Wrote"));
}

#[test]
fn test_init_writes_project_files() {
    let dir = TempDir::new().unwrap();
    init(&dir, &[]);

    let config = fs::read_to_string(dir.path().join("agentkit.yaml")).unwrap();
    assert!(config.contains("agent_name: demo_agent"));
    assert!(config.contains("launch_type: hybrid"));
    assert!(dir.path().join(".dockerignore").exists());
    assert!(dir.path().join("requirements.txt").exists());
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    init(&dir, &[]);

    agentkit(&dir)
        .args(["init", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    init(&dir, &["--force", "--language", "golang", "--launch-type", "local"]);
    let config = fs::read_to_string(dir.path().join("agentkit.yaml")).unwrap();
    assert!(config.contains("entry_point: main.go"));
    assert!(config.contains("launch_type: local"));
    assert!(dir.path().join("go.mod").exists());
}

#[test]
fn test_init_rejects_bad_name() {
    let dir = TempDir::new().unwrap();
    agentkit(&dir)
        .args(["init", "bad name!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("agent_name"));
    assert!(!dir.path().join("agentkit.yaml").exists());
}

#[test]
fn test_config_get_set_validate() {
    let dir = TempDir::new().unwrap();
    init(&dir, &[]);

    agentkit(&dir)
        .args(["config", "get", "common.agent_name"])
        .assert()
        .success()
        .stdout("demo_agent\n");

    agentkit(&dir)
        .args(["config", "set", "launch_types.hybrid.region", "cn-shanghai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ launch_types.hybrid.region = cn-shanghai"));

    agentkit(&dir)
        .args(["config", "get", "launch_types.hybrid.region"])
        .assert()
        .success()
        .stdout("cn-shanghai\n");

    agentkit(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"));

    agentkit(&dir)
        .args(["config", "set", "common.agent_name", "no spaces allowed"])
        .assert()
        .success();
    agentkit(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"));
}

#[test]
fn test_config_keeps_unknown_keys() {
    let dir = TempDir::new().unwrap();
    init(&dir, &[]);
    let path = dir.path().join("agentkit.yaml");
    let mut contents = fs::read_to_string(&path).unwrap();
    contents.push_str("custom_section:\n  owner: team-a\n");
    fs::write(&path, contents).unwrap();

    agentkit(&dir)
        .args(["config", "set", "common.description", "weather bot"])
        .assert()
        .success();

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("owner: team-a"));
    assert!(saved.contains("description: weather bot"));
}

#[test]
fn test_config_get_unset_key() {
    let dir = TempDir::new().unwrap();
    init(&dir, &[]);
    agentkit(&dir)
        .args(["config", "get", "common.nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("common.nope is not set"));
}

#[test]
fn test_config_without_project_file() {
    let dir = TempDir::new().unwrap();
    agentkit(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("agentkit init"));
}

#[test]
fn test_global_config_masks_secrets() {
    let dir = TempDir::new().unwrap();
    agentkit(&dir)
        .args(["config", "global", "set", "volcengine.secret_key", "super-secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"));
    agentkit(&dir)
        .args(["config", "global", "set", "cr.instance_name", "shared-cr"])
        .assert()
        .success();

    let raw = fs::read_to_string(dir.path().join("global.yaml")).unwrap();
    assert!(raw.contains("super-secret"));

    agentkit(&dir)
        .args(["config", "global", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("instance_name: shared-cr"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn test_custom_config_file() {
    let dir = TempDir::new().unwrap();
    agentkit(&dir)
        .args(["--config-file", "staging.yaml", "init", "staging_agent"])
        .assert()
        .success();
    assert!(dir.path().join("staging.yaml").exists());
    assert!(!dir.path().join("agentkit.yaml").exists());

    agentkit(&dir)
        .args(["--config-file", "staging.yaml", "config", "get", "common.agent_name"])
        .assert()
        .success()
        .stdout("staging_agent\n");
}

#[test]
fn test_hybrid_status_before_deploy() {
    let dir = TempDir::new().unwrap();
    init(&dir, &[]);
    agentkit(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("State:       not_deployed"));
}

#[test]
fn test_hybrid_invoke_before_deploy() {
    let dir = TempDir::new().unwrap();
    init(&dir, &[]);
    agentkit(&dir)
        .args(["invoke", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not deployed"));
}

#[test]
fn test_cloud_launch_type_unsupported() {
    let dir = TempDir::new().unwrap();
    init(&dir, &["--launch-type", "cloud"]);
    agentkit(&dir)
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("launch_type hybrid"));
}

#[test]
fn test_destroy_aborts_without_confirmation() {
    let dir = TempDir::new().unwrap();
    init(&dir, &["--launch-type", "local"]);
    agentkit(&dir)
        .arg("destroy")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
}

#[test]
fn test_package_writes_archive() {
    let dir = TempDir::new().unwrap();
    init(&dir, &[]);
    fs::write(dir.path().join("agent.py"), "print('hi')\n").unwrap();
    fs::create_dir(dir.path().join("__pycache__")).unwrap();
    fs::write(dir.path().join("__pycache__/agent.cpython-312.pyc"), "x").unwrap();

    agentkit(&dir)
        .arg("package")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo_agent.tar.gz"));
    assert!(dir.path().join("dist/demo_agent.tar.gz").exists());
}
