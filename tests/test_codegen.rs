use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn agentkit() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("agentkit"))
}

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/runtime_api.json")
}

#[test]
fn test_generate_single_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("generated/runtime.rs");

    agentkit()
        .arg("codegen")
        .arg(fixture())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Generated"));

    let code = fs::read_to_string(&output).unwrap();
    assert!(code.starts_with("// Auto-generated from API JSON definition\n// Do not edit manually\n"));
    assert!(code.contains("pub struct RuntimeApiClient"));
    assert!(code.contains("pub struct GetRuntimeRequest {"));
    assert!(code.contains("    pub runtime_id: String,"));
    assert!(code.contains("pub struct EnvsForGetRuntime {"));
    assert!(code.contains("self.inner.invoke(\"DeleteRuntime\", request)"));
}

#[test]
fn test_check_reports_stale_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("runtime.rs");

    agentkit().arg("codegen").arg(fixture()).arg("-o").arg(&output).assert().success();

    agentkit()
        .arg("codegen")
        .arg(fixture())
        .arg("-o")
        .arg(&output)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date"));

    let mut code = fs::read_to_string(&output).unwrap();
    code.push_str("\n// hand edit\n");
    fs::write(&output, &code).unwrap();

    agentkit()
        .arg("codegen")
        .arg(fixture())
        .arg("-o")
        .arg(&output)
        .arg("--check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("is out of date"))
        .stderr(predicate::str::contains("1 file(s) out of date"));

    // --check never writes
    assert_eq!(fs::read_to_string(&output).unwrap(), code);
}

#[test]
fn test_manifest_paths_are_relative_to_manifest() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("api")).unwrap();
    fs::copy(fixture(), dir.path().join("api/runtime.json")).unwrap();
    fs::write(
        dir.path().join("codegen.toml"),
        "crate_path = \"crate\"\n\n[[service]]\nschema = \"api/runtime.json\"\noutput = \"src/runtime.rs\"\n",
    )
    .unwrap();

    agentkit()
        .arg("codegen")
        .arg("--manifest")
        .arg(dir.path().join("codegen.toml"))
        .assert()
        .success();

    let code = fs::read_to_string(dir.path().join("src/runtime.rs")).unwrap();
    assert!(code.contains("crate::client::ServiceClient"));
}

#[test]
fn test_invalid_schema() {
    let dir = TempDir::new().unwrap();
    let schema = dir.path().join("broken.json");
    fs::write(&schema, r#"{"client": "X"}"#).unwrap();

    agentkit()
        .arg("codegen")
        .arg(&schema)
        .arg("-o")
        .arg(dir.path().join("out.rs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing 'actions' object"));
}
