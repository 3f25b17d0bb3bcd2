//! Source archives (`<name>.tar.gz`) of an agent project.

use crate::docker::dockerfile::DOCKERFILE_NAME;
use crate::docker::ignore::{self, DOCKERIGNORE_NAME};
use crate::error::{AgentkitError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use glob::{MatchOptions, Pattern};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const DEFAULT_EXCLUDES: &[&str] = &[
    "__pycache__",
    "agentkit.yaml",
    ".env",
    "*.pyc",
    "*.pyo",
    ".git",
    ".gitignore",
    ".DS_Store",
    "*.log",
    "tmp/",
    "dist/",
    "build/",
    "*.egg-info/",
    ".agentkit/",
];

pub const DEFAULT_INCLUDES: &[&str] = &[
    "*.py",
    "*.go",
    "*.mod",
    "*.sum",
    "*.sh",
    "*.txt",
    "*.md",
    "*.json",
    "*.yaml",
    "*.yml",
    "Dockerfile*",
    "requirements*",
    "setup.py",
    "pyproject.toml",
];

/// Always shipped when present, whatever the ignore rules say.
const ALWAYS_INCLUDED: &[&str] = &[DOCKERFILE_NAME, DOCKERIGNORE_NAME];

const SEGMENT_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

fn compile(patterns: &[&str]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p.trim_end_matches('/'))
                .map_err(|e| AgentkitError::Archive(format!("invalid pattern '{}': {}", p, e)))
        })
        .collect()
}

/// One `.dockerignore` line.
#[derive(Debug)]
struct IgnoreRule {
    pattern: Pattern,
    negated: bool,
    dir_only: bool,
    /// Contains a `/` (or starts with one): matched against the whole
    /// relative path instead of any single component.
    anchored: bool,
}

impl IgnoreRule {
    fn parse(line: &str) -> Result<Self> {
        let (negated, rest) = match line.strip_prefix('!') {
            Some(rest) => (true, rest.trim()),
            None => (false, line),
        };
        let dir_only = rest.ends_with('/');
        let body = rest.trim_end_matches('/');
        let anchored = body.contains('/');
        let body = body.trim_start_matches('/');
        let pattern = Pattern::new(body)
            .map_err(|e| AgentkitError::Archive(format!("invalid .dockerignore pattern '{}': {}", line, e)))?;
        Ok(Self {
            pattern,
            negated,
            dir_only,
            anchored,
        })
    }

    fn matches(&self, rel: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if self.anchored {
            self.pattern.matches_with(rel, SEGMENT_MATCH)
        } else {
            let name = rel.rsplit('/').next().unwrap_or(rel);
            self.pattern.matches_with(name, SEGMENT_MATCH)
        }
    }
}

#[derive(Debug, Default)]
struct DockerIgnore {
    rules: Vec<IgnoreRule>,
}

impl DockerIgnore {
    /// Rules of `dir/.dockerignore`, or `None` when there is no such file.
    fn load(dir: &Path) -> Result<Option<Self>> {
        if !dir.join(DOCKERIGNORE_NAME).is_file() {
            return Ok(None);
        }
        let rules = ignore::read_patterns(dir)?
            .iter()
            .map(|line| IgnoreRule::parse(line))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(Self { rules }))
    }

    fn has_negations(&self) -> bool {
        self.rules.iter().any(|r| r.negated)
    }

    fn is_ignored(&self, rel: &str) -> bool {
        self.is_ignored_as(rel, false)
    }

    /// Last matching rule wins; a path is also ignored through its parents.
    fn is_ignored_as(&self, rel: &str, is_dir: bool) -> bool {
        let mut ignored = false;
        let parts: Vec<&str> = rel.split('/').collect();
        for rule in &self.rules {
            let hit = (1..=parts.len()).any(|n| {
                let prefix = parts[..n].join("/");
                rule.matches(&prefix, n < parts.len() || is_dir)
            });
            if hit {
                ignored = !rule.negated;
            }
        }
        ignored
    }
}

/// How the walk decides what to ship.
enum Filter {
    /// A `.dockerignore` exists: everything it does not ignore is shipped.
    DockerIgnore(DockerIgnore),
    /// No `.dockerignore`: built-in excludes, then include patterns.
    Defaults {
        excludes: Vec<Pattern>,
        includes: Vec<Pattern>,
    },
}

pub struct ProjectArchiver {
    source: PathBuf,
    filter: Filter,
    skip: Option<PathBuf>,
}

impl ProjectArchiver {
    pub fn new(source: &Path) -> Result<Self> {
        let source = source.canonicalize().map_err(|e| {
            AgentkitError::Archive(format!("cannot read project directory {}: {}", source.display(), e))
        })?;
        let filter = match DockerIgnore::load(&source)? {
            Some(dockerignore) => {
                log::debug!("filtering {} with {}", source.display(), DOCKERIGNORE_NAME);
                Filter::DockerIgnore(dockerignore)
            }
            None => Filter::Defaults {
                excludes: compile(DEFAULT_EXCLUDES)?,
                includes: compile(DEFAULT_INCLUDES)?,
            },
        };
        Ok(Self {
            source,
            filter,
            skip: None,
        })
    }

    /// Never descend into `dir`, typically where the archive is written.
    pub fn skipping(mut self, dir: &Path) -> Self {
        self.skip = Some(dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()));
        self
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.source)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn name_matches(patterns: &[Pattern], entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        patterns.iter().any(|p| p.matches(&name))
    }

    fn keep_dir(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        if self.skip.as_deref() == Some(entry.path()) {
            return false;
        }
        match &self.filter {
            // a negation may re-include something below an ignored directory
            Filter::DockerIgnore(rules) => {
                rules.has_negations() || !rules.is_ignored_as(&self.relative(entry.path()), true)
            }
            Filter::Defaults { excludes, .. } => !Self::name_matches(excludes, entry),
        }
    }

    fn keep_file(&self, entry: &DirEntry) -> bool {
        let rel = self.relative(entry.path());
        if ALWAYS_INCLUDED.contains(&rel.as_str()) {
            return true;
        }
        match &self.filter {
            Filter::DockerIgnore(rules) => !rules.is_ignored(&rel),
            Filter::Defaults { excludes, includes } => {
                !Self::name_matches(excludes, entry) && Self::name_matches(includes, entry)
            }
        }
    }

    /// Relative paths that would go into the archive, sorted.
    pub fn files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.source)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !e.file_type().is_dir() || self.keep_dir(e));
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && self.keep_file(&entry) {
                files.push(self.relative(entry.path()));
            }
        }
        files.sort();
        Ok(files)
    }

    /// Write `<out_dir>/<name>.tar.gz` and return its path.
    pub fn create(&self, out_dir: &Path, name: &str) -> Result<PathBuf> {
        let files = self.files()?;
        if files.is_empty() {
            return Err(AgentkitError::Archive(format!(
                "no files to archive in {}",
                self.source.display()
            )));
        }

        fs::create_dir_all(out_dir)?;
        let archive_path = out_dir.join(format!("{}.tar.gz", name));
        let file = File::create(&archive_path)?;
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
        for rel in &files {
            log::debug!("adding {}", rel);
            builder.append_path_with_name(self.source.join(rel), rel)?;
        }
        builder.into_inner()?.finish()?;

        log::info!("archived {} files into {}", files.len(), archive_path.display());
        Ok(archive_path)
    }
}

/// Archive `dir` into `<out_dir>/<name>.tar.gz`.
pub fn archive_project(dir: &Path, out_dir: &Path, name: &str) -> Result<PathBuf> {
    ProjectArchiver::new(dir)?.skipping(out_dir).create(out_dir, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn members(archive: &Path) -> Vec<String> {
        let mut tar = tar::Archive::new(GzDecoder::new(File::open(archive).unwrap()));
        let mut names: Vec<String> = tar
            .entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_default_filters() {
        let src = TempDir::new().unwrap();
        write(src.path(), "agent.py", "print('ok')\n");
        write(src.path(), "requirements.txt", "");
        write(src.path(), "agentkit.yaml", "common: {}\n");
        write(src.path(), ".env", "SECRET=1\n");
        write(src.path(), "notes.log", "log\n");
        write(src.path(), "image.png", "png");
        write(src.path(), "__pycache__/agent.cpython-312.pyc", "");
        write(src.path(), ".git/config", "");
        write(src.path(), "dist/bundle.txt", "");
        write(src.path(), "pkg/tools.py", "");

        let archiver = ProjectArchiver::new(src.path()).unwrap();
        assert_eq!(archiver.files().unwrap(), vec!["agent.py", "pkg/tools.py", "requirements.txt"]);
    }

    #[test]
    fn test_hidden_dirs_kept_without_dockerignore() {
        let src = TempDir::new().unwrap();
        write(src.path(), "app.py", "print('ok')\n");
        write(src.path(), ".hidden/secret.txt", "secret\n");

        let files = ProjectArchiver::new(src.path()).unwrap().files().unwrap();
        assert_eq!(files, vec![".hidden/secret.txt", "app.py"]);
    }

    #[test]
    fn test_dockerignore_replaces_defaults() {
        let src = TempDir::new().unwrap();
        write(src.path(), "app.py", "");
        write(src.path(), "notes.log", "");
        write(src.path(), "dist/bundle.js", "");
        write(src.path(), ".venv/pyvenv.cfg", "");
        write(src.path(), "build/out.bin", "");
        write(src.path(), ".dockerignore", "dist/\n*.log\n.venv/\n");

        let files = ProjectArchiver::new(src.path()).unwrap().files().unwrap();
        assert_eq!(files, vec![".dockerignore", "app.py", "build/out.bin"]);
    }

    #[test]
    fn test_anchored_dir_keeps_nested_match() {
        let src = TempDir::new().unwrap();
        write(src.path(), "dist/root.txt", "");
        write(src.path(), "nested/dist/nested.txt", "");
        write(src.path(), ".dockerignore", "/dist/\n");

        let files = ProjectArchiver::new(src.path()).unwrap().files().unwrap();
        assert_eq!(files, vec![".dockerignore", "nested/dist/nested.txt"]);
    }

    #[test]
    fn test_segment_glob_stays_in_its_dir() {
        let src = TempDir::new().unwrap();
        write(src.path(), "dist/root.txt", "");
        write(src.path(), "dist/root.md", "");
        write(src.path(), "dist/nested/deep.txt", "");
        write(src.path(), ".dockerignore", "dist/*.txt\n");

        let files = ProjectArchiver::new(src.path()).unwrap().files().unwrap();
        assert_eq!(files, vec![".dockerignore", "dist/nested/deep.txt", "dist/root.md"]);
    }

    #[test]
    fn test_negation_under_ignored_dir() {
        let src = TempDir::new().unwrap();
        write(src.path(), "app.py", "");
        write(src.path(), "assets/big.bin", "");
        write(src.path(), "assets/keep.json", "{}");
        write(src.path(), ".dockerignore", "assets\n!assets/keep.json\n.dockerignore\n");

        let files = ProjectArchiver::new(src.path()).unwrap().files().unwrap();
        assert_eq!(files, vec![".dockerignore", "app.py", "assets/keep.json"]);
    }

    #[test]
    fn test_archive_written() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(src.path(), "agent.py", "print('ok')\n");
        write(src.path(), "Dockerfile", "FROM scratch\n");

        let path = archive_project(src.path(), out.path(), "demo").unwrap();
        assert_eq!(path, out.path().join("demo.tar.gz"));
        assert_eq!(members(&path), vec!["Dockerfile", "agent.py"]);
    }

    #[test]
    fn test_output_dir_not_archived() {
        let src = TempDir::new().unwrap();
        write(src.path(), "app.py", "");
        write(src.path(), ".dockerignore", "*.log\n");

        let out = src.path().join("dist");
        archive_project(src.path(), &out, "demo").unwrap();
        let second = archive_project(src.path(), &out, "demo").unwrap();
        assert_eq!(members(&second), vec![".dockerignore", "app.py"]);
    }

    #[test]
    fn test_empty_project_fails() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(src.path(), "image.png", "png");
        let err = archive_project(src.path(), out.path(), "demo").unwrap_err();
        assert!(matches!(err, AgentkitError::Archive(_)));
    }

    #[test]
    fn test_dockerignore_rules() {
        let src = TempDir::new().unwrap();
        write(src.path(), "app.py", "");
        write(src.path(), "data/keep.json", "{}");
        write(src.path(), "data/drop.json", "{}");
        write(src.path(), "data/keep.txt", "");
        write(src.path(), "out/root.txt", "");
        write(src.path(), "nested/out/nested.txt", "");
        write(src.path(), "docs/a.txt", "");
        write(src.path(), "docs/a.md", "");
        write(src.path(), "docs/deep/b.txt", "");
        write(
            src.path(),
            ".dockerignore",
            "data/*.json\n!data/keep.json\n/out/\ndocs/*.txt\nDockerfile*\n",
        );
        write(src.path(), "Dockerfile", "FROM scratch\n");

        let files = ProjectArchiver::new(src.path()).unwrap().files().unwrap();
        assert!(files.contains(&"app.py".to_string()));
        assert!(files.contains(&"data/keep.json".to_string()));
        assert!(!files.contains(&"data/drop.json".to_string()));
        assert!(files.contains(&"data/keep.txt".to_string()));
        assert!(!files.contains(&"out/root.txt".to_string()));
        assert!(files.contains(&"nested/out/nested.txt".to_string()));
        assert!(!files.contains(&"docs/a.txt".to_string()));
        assert!(files.contains(&"docs/a.md".to_string()));
        assert!(files.contains(&"docs/deep/b.txt".to_string()));
        assert!(files.contains(&"Dockerfile".to_string()));
        assert!(files.contains(&".dockerignore".to_string()));
    }

    #[test]
    fn test_unanchored_dir_rule() {
        let ignore = DockerIgnore {
            rules: vec![IgnoreRule::parse("cache/").unwrap(), IgnoreRule::parse("*.tmp").unwrap()],
        };
        assert!(ignore.is_ignored("cache/a.py"));
        assert!(ignore.is_ignored("pkg/cache/a.py"));
        assert!(!ignore.is_ignored("cache"));
        assert!(ignore.is_ignored("pkg/x.tmp"));
        assert!(!ignore.is_ignored("pkg/x.py"));
    }
}
