use crate::error::{AgentkitError, Result};
use crate::sdk::runtime::{GetRuntimeResponse, STATUS_ERROR};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const POLL_INTERVAL: Duration = Duration::from_secs(3);
pub const READY_TIMEOUT: Duration = Duration::from_secs(600);
pub const RELEASE_TIMEOUT: Duration = Duration::from_secs(300);
pub const LOG_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const LOG_PREVIEW_LINES: usize = 50;

#[derive(Debug, Clone)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub interval: Duration,
    /// Where downloaded failure logs are kept.
    pub log_dir: Option<PathBuf>,
}

impl WaitPolicy {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            interval: POLL_INTERVAL,
            log_dir: None,
        }
    }

    pub fn with_log_dir(mut self, dir: &Path) -> Self {
        self.log_dir = Some(dir.to_path_buf());
        self
    }
}

/// Download a runtime's failure log, keep a copy in `dir` and return the
/// first lines for display.
pub fn fetch_failure_log(url: &str, runtime_id: &str, dir: Option<&Path>) -> Result<String> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(LOG_DOWNLOAD_TIMEOUT))
        .build()
        .into();
    let mut response = agent.get(url).call()?;
    let bytes = response.body_mut().read_to_vec()?;

    let saved = match dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = dir.join(format!(
                "runtime_failed_{}_{}.log",
                runtime_id,
                chrono::Utc::now().timestamp()
            ));
            fs::write(&path, &bytes)?;
            Some(path)
        }
        None => None,
    };
    Ok(preview(&String::from_utf8_lossy(&bytes), saved.as_deref()))
}

fn preview(text: &str, saved: Option<&Path>) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out = format!("Runtime failure logs (first {} lines):\n", LOG_PREVIEW_LINES);
    for line in lines.iter().take(LOG_PREVIEW_LINES) {
        out.push_str(line);
        out.push('\n');
    }
    if lines.len() > LOG_PREVIEW_LINES {
        out.push_str(&format!("... {} more lines\n", lines.len() - LOG_PREVIEW_LINES));
    }
    if let Some(path) = saved {
        out.push_str(&format!("Full logs saved to: {}", path.display()));
    }
    out.trim_end().to_string()
}

/// Poll `fetch` until the runtime reaches one of `targets`.
///
/// `Error` fails immediately with the failure log URL when the platform
/// provides one, plus the start of the log when it can be downloaded.
pub fn wait_for_status<F>(mut fetch: F, targets: &[&str], policy: WaitPolicy, what: &str) -> Result<GetRuntimeResponse>
where
    F: FnMut() -> Result<GetRuntimeResponse>,
{
    let started = Instant::now();
    let bar = super::spinner(what);
    let mut last = String::new();

    loop {
        let runtime = match fetch() {
            Ok(runtime) => runtime,
            Err(e) => {
                bar.finish_and_clear();
                return Err(e);
            }
        };
        let status = runtime.status().to_string();

        if targets.contains(&status.as_str()) {
            bar.finish_and_clear();
            return Ok(runtime);
        }

        if status == STATUS_ERROR {
            bar.finish_and_clear();
            let mut message = format!(
                "runtime {} entered Error state",
                runtime.runtime_id.as_deref().unwrap_or_default()
            );
            if let Some(reason) = runtime.status_message.as_deref().filter(|m| !m.is_empty()) {
                message.push_str(&format!(": {}", reason));
            }
            if let Some(url) = runtime.failed_log_file_url.as_deref().filter(|u| !u.is_empty()) {
                message.push_str(&format!("\nFailure logs: {}", url));
                let runtime_id = runtime.runtime_id.as_deref().unwrap_or("unknown");
                match fetch_failure_log(url, runtime_id, policy.log_dir.as_deref()) {
                    Ok(logs) => message.push_str(&format!("\n{}", logs)),
                    Err(e) => log::warn!("could not download failure logs: {}", e),
                }
            }
            return Err(AgentkitError::Runtime(message));
        }

        if status != last {
            log::debug!("runtime status {}", status);
            bar.set_message(format!("{} (status: {})", what, status));
            last = status;
        }

        if started.elapsed() >= policy.timeout {
            bar.finish_and_clear();
            return Err(AgentkitError::Runtime(format!(
                "timed out after {}s waiting for {} (last status: {})",
                policy.timeout.as_secs(),
                targets.join(" or "),
                last
            )));
        }

        std::thread::sleep(policy.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::runtime::{STATUS_READY, STATUS_UNRELEASED, STATUS_UPDATING};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use tempfile::TempDir;

    /// Answer one HTTP request with `body`, returning the URL to fetch.
    fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/logs/r-1.log", addr)
    }

    fn runtime(status: &str) -> GetRuntimeResponse {
        GetRuntimeResponse {
            runtime_id: Some("r-1".to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    fn fast(timeout_ms: u64) -> WaitPolicy {
        WaitPolicy {
            timeout: Duration::from_millis(timeout_ms),
            interval: Duration::from_millis(1),
            log_dir: None,
        }
    }

    #[test]
    fn test_reaches_target() {
        let mut statuses = vec![STATUS_UPDATING, STATUS_UPDATING, STATUS_UNRELEASED].into_iter();
        let result = wait_for_status(
            || Ok(runtime(statuses.next().unwrap())),
            &[STATUS_UNRELEASED, STATUS_READY],
            fast(5_000),
            "waiting",
        )
        .unwrap();
        assert_eq!(result.status(), STATUS_UNRELEASED);
    }

    #[test]
    fn test_error_status_reports_logs() {
        let err = wait_for_status(
            || {
                let mut failed = runtime(STATUS_ERROR);
                failed.failed_log_file_url = Some("http://127.0.0.1:1/r-1.log".to_string());
                Ok(failed)
            },
            &[STATUS_READY],
            fast(5_000),
            "waiting",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("r-1"));
        assert!(msg.contains("http://127.0.0.1:1/r-1.log"));
        assert!(!msg.contains("Runtime failure logs"));
    }

    #[test]
    fn test_error_status_downloads_logs() {
        let dir = TempDir::new().unwrap();
        let url = serve_once("Traceback (most recent call last):\nImportError: no module named fastapi\n");
        let policy = fast(5_000).with_log_dir(dir.path());
        let err = wait_for_status(
            || {
                let mut failed = runtime(STATUS_ERROR);
                failed.failed_log_file_url = Some(url.clone());
                Ok(failed)
            },
            &[STATUS_READY],
            policy,
            "waiting",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ImportError: no module named fastapi"));
        assert!(msg.contains("Full logs saved to:"));

        let saved: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().path()).collect();
        assert_eq!(saved.len(), 1);
        let name = saved[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("runtime_failed_r-1_"));
        assert!(fs::read_to_string(&saved[0]).unwrap().starts_with("Traceback"));
    }

    #[test]
    fn test_preview_truncates() {
        let text: String = (1..=60).map(|i| format!("line {}\n", i)).collect();
        let out = preview(&text, None);
        assert!(out.contains("line 50"));
        assert!(!out.contains("line 51"));
        assert!(out.ends_with("... 10 more lines"));
    }

    #[test]
    fn test_timeout() {
        let err = wait_for_status(|| Ok(runtime(STATUS_UPDATING)), &[STATUS_READY], fast(5), "waiting").unwrap_err();
        assert!(err.to_string().contains("timed out"));
        assert!(err.to_string().contains("Updating"));
    }

    #[test]
    fn test_fetch_error_propagates() {
        let err = wait_for_status(
            || Err(AgentkitError::Http("connection reset".to_string())),
            &[STATUS_READY],
            fast(5_000),
            "waiting",
        )
        .unwrap_err();
        assert!(matches!(err, AgentkitError::Http(_)));
    }
}
