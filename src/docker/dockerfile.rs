//! Dockerfile rendering and the managed-header bookkeeping that decides
//! whether an existing Dockerfile may be overwritten.
//!
//! A generated file starts with a header recording two hashes: the hash of
//! the config that produced it (`Checksum`) and the hash of the body below
//! the header (`ContentHash`). Comparing them against the current config and
//! the current body tells apart "config changed", "user edited" and both.

use super::base_images::BaseImages;
use crate::config::{BaseImage, CommonConfig, DockerBuildConfig};
use crate::error::Result;
use crate::version::VERSION;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCKERFILE_NAME: &str = "Dockerfile";
pub const BACKUP_DIR: &str = ".agentkit/dockerfile_backups";

/// Bumped whenever the built-in templates change, so managed files regenerate.
const TEMPLATE_REVISION: u32 = 1;

const RULE: &str = "# ============================================================================";
const MARKER: &str = "# AUTO-GENERATED by AgentKit";
const CHECKSUM_PREFIX: &str = "# Checksum: sha256:";
const CONTENT_HASH_PREFIX: &str = "# ContentHash: sha256:";

/// Files larger than this are not treated as Dockerfiles.
const MAX_DOCKERFILE_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    GenerateNew,
    GenerateConfigChanged,
    KeepUserCustom,
    KeepUpToDate,
    KeepUserModified,
    KeepConfigConflict,
}

impl Decision {
    pub fn generates(&self) -> bool {
        matches!(self, Decision::GenerateNew | Decision::GenerateConfigChanged)
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Decision::GenerateNew => "Dockerfile does not exist",
            Decision::GenerateConfigChanged => "Config updated, regenerating Dockerfile",
            Decision::KeepUserCustom => "Custom Dockerfile detected (no AgentKit header), keeping as-is",
            Decision::KeepUpToDate => "Dockerfile is up-to-date",
            Decision::KeepUserModified => "Dockerfile modified by user, keeping current version",
            Decision::KeepConfigConflict => {
                "Config changed but Dockerfile was modified by user; keeping your version \
                 (use --regenerate-dockerfile to replace it)"
            }
        }
    }
}

/// Everything that shapes the generated Dockerfile.
#[derive(Debug, Clone, Serialize)]
pub struct DockerfileInputs {
    pub language: String,
    pub language_version: String,
    pub entry_point: String,
    pub dependencies_file: String,
    pub base_image: Option<BaseImage>,
    pub build_script: Option<String>,
    pub template_revision: u32,
}

impl DockerfileInputs {
    pub fn new(common: &CommonConfig, docker_build: &DockerBuildConfig) -> Self {
        Self {
            language: common.language.to_string(),
            language_version: common.language_version.clone(),
            entry_point: common.entry_point.clone(),
            dependencies_file: common.dependencies_file.clone(),
            base_image: docker_build.base_image.clone(),
            build_script: docker_build.build_script.clone(),
            template_revision: TEMPLATE_REVISION,
        }
    }

    pub fn config_hash(&self) -> Result<String> {
        Ok(sha256_hex(&serde_json::to_vec(self)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderInfo {
    pub managed: bool,
    pub config_hash: Option<String>,
    pub content_hash: Option<String>,
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Body of a Dockerfile without the managed header.
pub fn strip_header(content: &str) -> &str {
    if !content.starts_with(RULE) {
        return content;
    }
    // header is RULE, marker, RULE, fields..., RULE, blank line
    let mut offset = 0;
    let mut rules = 0;
    for line in content.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == RULE {
            rules += 1;
            if rules == 3 {
                let rest = &content[offset..];
                return rest.strip_prefix('\n').unwrap_or(rest);
            }
        } else if !line.starts_with('#') {
            break;
        }
    }
    content
}

pub fn parse_header(content: &str) -> HeaderInfo {
    let mut lines = content.lines();
    let managed = lines.next() == Some(RULE)
        && lines.next().map(|l| l.starts_with(MARKER)).unwrap_or(false);
    if !managed {
        return HeaderInfo::default();
    }

    let mut info = HeaderInfo {
        managed,
        ..Default::default()
    };
    for line in content.lines().take_while(|l| l.starts_with('#')) {
        if let Some(hash) = line.strip_prefix(CHECKSUM_PREFIX) {
            info.config_hash = Some(hash.trim().to_string());
        } else if let Some(hash) = line.strip_prefix(CONTENT_HASH_PREFIX) {
            info.content_hash = Some(hash.trim().to_string());
        }
    }
    info
}

pub fn with_header(body: &str, config_hash: &str) -> String {
    format!(
        "{rule}\n\
         {marker} v{version}\n\
         {rule}\n\
         # Source: agentkit.yaml\n\
         {checksum}{config_hash}\n\
         {content}{content_hash}\n\
         # Generated: {generated}\n\
         #\n\
         # This file is managed by AgentKit:\n\
         #   - It is regenerated when agentkit.yaml changes (the old file is backed up)\n\
         #   - Remove this header to take over the file; AgentKit will leave it alone\n\
         #\n\
         # Force regenerate:\n\
         #   agentkit build --regenerate-dockerfile\n\
         {rule}\n\
         \n\
         {body}",
        rule = RULE,
        marker = MARKER,
        version = VERSION,
        checksum = CHECKSUM_PREFIX,
        config_hash = config_hash,
        content = CONTENT_HASH_PREFIX,
        content_hash = sha256_hex(body.as_bytes()),
        generated = chrono::Local::now().to_rfc3339(),
        body = body,
    )
}

/// Compare an existing Dockerfile (if any) against the current config hash.
pub fn decide(existing: Option<&str>, config_hash: &str, force: bool) -> Decision {
    if force {
        return Decision::GenerateConfigChanged;
    }
    let content = match existing {
        Some(content) if !content.trim().is_empty() => content,
        _ => return Decision::GenerateNew,
    };

    let header = parse_header(content);
    if !header.managed {
        return Decision::KeepUserCustom;
    }

    let body_hash = sha256_hex(strip_header(content).as_bytes());
    let modified = header.content_hash.as_deref() != Some(body_hash.as_str());
    let config_changed = header.config_hash.as_deref() != Some(config_hash);

    match (config_changed, modified) {
        (false, false) => Decision::KeepUpToDate,
        (false, true) => Decision::KeepUserModified,
        (true, false) => Decision::GenerateConfigChanged,
        (true, true) => Decision::KeepConfigConflict,
    }
}

#[derive(Debug, Clone)]
pub struct Prepared {
    pub path: PathBuf,
    pub decision: Decision,
    pub backup: Option<PathBuf>,
}

/// Write `<project_dir>/Dockerfile` when the decision allows it, backing up
/// whatever was there.
pub fn prepare(
    project_dir: &Path,
    inputs: &DockerfileInputs,
    render: impl FnOnce() -> String,
    force: bool,
) -> Result<Prepared> {
    let path = project_dir.join(DOCKERFILE_NAME);
    let existing = read_existing(&path);
    let config_hash = inputs.config_hash()?;
    let decision = decide(existing.as_deref(), &config_hash, force);
    log::debug!("dockerfile decision {:?}: {}", decision, decision.reason());

    if !decision.generates() {
        return Ok(Prepared {
            path,
            decision,
            backup: None,
        });
    }

    let backup = if path.exists() { Some(backup(project_dir, &path)?) } else { None };
    fs::write(&path, with_header(&render(), &config_hash))?;

    Ok(Prepared {
        path,
        decision,
        backup,
    })
}

fn read_existing(path: &Path) -> Option<String> {
    let metadata = fs::metadata(path).ok()?;
    if metadata.len() > MAX_DOCKERFILE_BYTES {
        log::warn!("{} is too large to be a Dockerfile, regenerating", path.display());
        return None;
    }
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            log::warn!("cannot read {}: {}", path.display(), e);
            None
        }
    }
}

fn backup(project_dir: &Path, path: &Path) -> Result<PathBuf> {
    let dir = project_dir.join(BACKUP_DIR);
    fs::create_dir_all(&dir)?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let mut target = dir.join(format!("Dockerfile.backup.{}", stamp));
    let mut n = 1;
    while target.exists() {
        target = dir.join(format!("Dockerfile.backup.{}.{}", stamp, n));
        n += 1;
    }
    fs::copy(path, &target)?;
    log::info!("backed up {} to {}", path.display(), target.display());
    Ok(target)
}

/// Dockerfile body for a project.
pub fn render(common: &CommonConfig, docker_build: &DockerBuildConfig, images: &BaseImages) -> String {
    match images {
        BaseImages::Python { image } => render_python(common, docker_build, image),
        BaseImages::Golang { builder, runtime } => render_golang(common, docker_build, builder, runtime),
    }
}

fn render_python(common: &CommonConfig, docker_build: &DockerBuildConfig, image: &str) -> String {
    let deps = common.dependencies_file.trim();
    let mut out = format!("FROM {}\n\nWORKDIR /app\nENV PYTHONUNBUFFERED=1\n\n", image);

    if !deps.is_empty() {
        if deps.ends_with("pyproject.toml") {
            out.push_str("COPY . /app\nRUN pip install --no-cache-dir /app\n");
        } else {
            out.push_str(&format!(
                "COPY {deps} /app/{deps}\nRUN pip install --no-cache-dir -r /app/{deps}\n",
                deps = deps
            ));
        }
    }
    out.push_str("\nCOPY . /app\n");

    if let Some(script) = build_script(docker_build) {
        out.push_str(&format!("RUN chmod +x /app/{script} && /app/{script}\n", script = script));
    }

    out.push_str(&format!(
        "\nEXPOSE 8000\nCMD [\"python\", \"{}\"]\n",
        common.entry_point
    ));
    out
}

fn render_golang(common: &CommonConfig, docker_build: &DockerBuildConfig, builder: &str, runtime: &str) -> String {
    let binary = binary_name(common);
    let mut out = format!("FROM {} AS builder\n\nWORKDIR /build\nCOPY . /build\n", builder);

    if let Some(script) = build_script(docker_build) {
        out.push_str(&format!("RUN sh ./{}\n", script));
    }

    if common.entry_point.ends_with(".sh") {
        // the script must leave the binary at $OUTPUT_DIR/$BINARY_NAME
        out.push_str(&format!(
            "RUN BINARY_NAME={} OUTPUT_DIR=/build/bin sh ./{}\n",
            binary, common.entry_point
        ));
    } else {
        let package = match Path::new(&common.entry_point).parent() {
            Some(dir) if !dir.as_os_str().is_empty() => format!("./{}", dir.display()),
            _ => ".".to_string(),
        };
        out.push_str(&format!(
            "RUN go mod download && CGO_ENABLED=0 go build -o /build/bin/{} {}\n",
            binary, package
        ));
    }

    out.push_str(&format!(
        "\nFROM {runtime}\n\nWORKDIR /app\nCOPY --from=builder /build/bin/{binary} /usr/local/bin/{binary}\n\n\
         EXPOSE 8000\nCMD [\"/usr/local/bin/{binary}\"]\n",
        runtime = runtime,
        binary = binary
    ));
    out
}

fn build_script(docker_build: &DockerBuildConfig) -> Option<&str> {
    docker_build
        .build_script
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn binary_name(common: &CommonConfig) -> String {
    if common.agent_name.trim().is_empty() {
        "agent".to_string()
    } else {
        common.agent_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use crate::docker::base_images;
    use crate::platform::CloudProvider;
    use tempfile::TempDir;

    fn inputs() -> DockerfileInputs {
        let mut common = CommonConfig::default();
        common.agent_name = "demo".to_string();
        DockerfileInputs::new(&common, &DockerBuildConfig::default())
    }

    #[test]
    fn test_header_round_trip() {
        let full = with_header("FROM python:3.12-slim\n", "abc123");
        let info = parse_header(&full);
        assert!(info.managed);
        assert_eq!(info.config_hash.as_deref(), Some("abc123"));
        assert_eq!(strip_header(&full), "FROM python:3.12-slim\n");
        assert_eq!(
            info.content_hash,
            Some(sha256_hex(b"FROM python:3.12-slim\n"))
        );
    }

    #[test]
    fn test_unmanaged_file() {
        let info = parse_header("FROM scratch\n");
        assert!(!info.managed);
        assert_eq!(strip_header("FROM scratch\n"), "FROM scratch\n");
        assert_eq!(decide(Some("FROM scratch\n"), "h", false), Decision::KeepUserCustom);
    }

    #[test]
    fn test_decision_table() {
        let body = "FROM python:3.12-slim\n";
        let current = with_header(body, "v1");
        let edited = format!("{}RUN echo user-modified\n", current);

        assert_eq!(decide(None, "v1", false), Decision::GenerateNew);
        assert_eq!(decide(Some(""), "v1", false), Decision::GenerateNew);
        assert_eq!(decide(Some(&current), "v1", true), Decision::GenerateConfigChanged);
        assert_eq!(decide(Some(&current), "v1", false), Decision::KeepUpToDate);
        assert_eq!(decide(Some(&edited), "v1", false), Decision::KeepUserModified);
        assert_eq!(decide(Some(&current), "v2", false), Decision::GenerateConfigChanged);
        assert_eq!(decide(Some(&edited), "v2", false), Decision::KeepConfigConflict);
    }

    #[test]
    fn test_config_hash_tracks_inputs() {
        let a = inputs();
        let mut b = inputs();
        assert_eq!(a.config_hash().unwrap(), b.config_hash().unwrap());
        b.build_script = Some("scripts/setup.sh".to_string());
        assert_ne!(a.config_hash().unwrap(), b.config_hash().unwrap());
    }

    #[test]
    fn test_prepare_generates_then_keeps() {
        let dir = TempDir::new().unwrap();
        let inputs = inputs();

        let first = prepare(dir.path(), &inputs, || "FROM a\n".to_string(), false).unwrap();
        assert_eq!(first.decision, Decision::GenerateNew);
        assert!(first.backup.is_none());

        let second = prepare(dir.path(), &inputs, || "FROM a\n".to_string(), false).unwrap();
        assert_eq!(second.decision, Decision::KeepUpToDate);
        assert!(!dir.path().join(BACKUP_DIR).exists());
    }

    #[test]
    fn test_prepare_backs_up_on_config_change() {
        let dir = TempDir::new().unwrap();
        let v1 = inputs();
        prepare(dir.path(), &v1, || "FROM a\n".to_string(), false).unwrap();

        let mut v2 = inputs();
        v2.language_version = "3.13".to_string();
        let result = prepare(dir.path(), &v2, || "FROM b\n".to_string(), false).unwrap();
        assert_eq!(result.decision, Decision::GenerateConfigChanged);

        let backup = result.backup.unwrap();
        assert!(backup
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("Dockerfile.backup."));
        assert!(fs::read_to_string(&backup).unwrap().contains("FROM a"));
        assert!(fs::read_to_string(&result.path).unwrap().contains("FROM b"));
    }

    #[test]
    fn test_prepare_keeps_user_edits_on_config_change() {
        let dir = TempDir::new().unwrap();
        let v1 = inputs();
        let prepared = prepare(dir.path(), &v1, || "FROM a\n".to_string(), false).unwrap();
        let edited = format!("{}RUN echo user-modified\n", fs::read_to_string(&prepared.path).unwrap());
        fs::write(&prepared.path, edited).unwrap();

        let mut v2 = inputs();
        v2.entry_point = "main.py".to_string();
        let result = prepare(dir.path(), &v2, || "FROM b\n".to_string(), false).unwrap();
        assert_eq!(result.decision, Decision::KeepConfigConflict);
        assert!(fs::read_to_string(&result.path).unwrap().contains("user-modified"));
    }

    #[test]
    fn test_render_python() {
        let mut common = CommonConfig::default();
        common.entry_point = "src/agent.py".to_string();
        let build = DockerBuildConfig {
            build_script: Some("scripts/setup.sh".to_string()),
            ..Default::default()
        };
        let images = base_images::resolve(&common, &build, CloudProvider::Volcengine);
        let body = render(&common, &build, &images);

        assert!(body.starts_with("FROM agentkit-prod-public-cn-beijing.cr.volces.com/base/py-simple:python3.12"));
        assert!(body.contains("RUN pip install --no-cache-dir -r /app/requirements.txt"));
        assert!(body.contains("/app/scripts/setup.sh"));
        assert!(body.contains("CMD [\"python\", \"src/agent.py\"]"));
    }

    #[test]
    fn test_render_golang() {
        let mut common = CommonConfig::default();
        common.set_language(Language::Golang);
        common.agent_name = "weather".to_string();
        common.entry_point = "cmd/server/main.go".to_string();
        let build = DockerBuildConfig::default();
        let images = base_images::resolve(&common, &build, CloudProvider::Volcengine);
        let body = render(&common, &build, &images);

        assert!(body.contains("AS builder"));
        assert!(body.contains("go build -o /build/bin/weather ./cmd/server"));
        assert!(body.contains("CMD [\"/usr/local/bin/weather\"]"));
    }
}
