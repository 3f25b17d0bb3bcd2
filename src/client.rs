//! Signed JSON client for Volcengine-style OpenAPI services.

use crate::error::{AgentkitError, Result};
use crate::platform::{Credentials, Endpoint, PlatformContext};
use crate::sign::{self, RequestTarget, SigningKey};
use crate::version;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope {
    #[serde(default)]
    response_metadata: ResponseMetadata,
    #[serde(default)]
    result: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ResponseMetadata {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

pub struct ServiceClient {
    service_key: String,
    endpoint: Endpoint,
    credentials: Credentials,
    agent: ureq::Agent,
}

impl ServiceClient {
    /// Resolve endpoint and credentials for `service_key` and build a client.
    pub fn new(service_key: &str, ctx: &PlatformContext) -> Result<Self> {
        let endpoint = ctx.endpoint(service_key)?;
        let credentials = ctx.credentials(service_key)?;
        log::debug!(
            "{} client: {}://{} region={} version={}",
            service_key,
            endpoint.scheme,
            endpoint.host,
            endpoint.region,
            endpoint.api_version
        );
        Ok(Self::from_parts(service_key, endpoint, credentials))
    }

    pub fn from_parts(service_key: &str, endpoint: Endpoint, credentials: Credentials) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(DEFAULT_TIMEOUT))
            .http_status_as_error(false)
            .build();
        Self {
            service_key: service_key.to_string(),
            endpoint,
            credentials,
            agent: config.into(),
        }
    }

    pub fn service_key(&self) -> &str {
        &self.service_key
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// POST `action` with a JSON body and decode the `Result` section.
    pub fn invoke<Req, Resp>(&self, action: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_string(request)?;
        self.send("POST", action, &BTreeMap::new(), body)
    }

    /// GET `action` with query parameters only.
    pub fn invoke_get<Resp>(&self, action: &str, query: &BTreeMap<String, String>) -> Result<Resp>
    where
        Resp: DeserializeOwned,
    {
        self.send("GET", action, query, String::new())
    }

    fn send<Resp>(
        &self,
        method: &str,
        action: &str,
        query: &BTreeMap<String, String>,
        body: String,
    ) -> Result<Resp>
    where
        Resp: DeserializeOwned,
    {
        let target = RequestTarget {
            method,
            scheme: &self.endpoint.scheme,
            host: &self.endpoint.host,
            region: &self.endpoint.region,
            service: &self.endpoint.service,
            action,
            version: &self.endpoint.api_version,
        };
        let key = SigningKey {
            access_key: &self.credentials.access_key,
            secret_key: &self.credentials.secret_key,
            session_token: self.credentials.session_token.as_deref(),
        };
        let signed = sign::sign(&target, query, &body, &key)?;
        log::debug!("{} {} {}", signed.method, action, signed.url);

        let user_agent = format!("{}/{}", version::PKG_NAME, version::VERSION);
        let mut response = if method == "GET" {
            let mut request = self.agent.get(&signed.url);
            for (name, value) in signed.headers.iter().filter(|(k, _)| k != "Host") {
                request = request.header(name.as_str(), value.as_str());
            }
            request
                .header("Accept", "application/json")
                .header("User-Agent", user_agent.as_str())
                .call()?
        } else {
            let mut request = self.agent.post(&signed.url);
            for (name, value) in signed.headers.iter().filter(|(k, _)| k != "Host") {
                request = request.header(name.as_str(), value.as_str());
            }
            request
                .header("Accept", "application/json")
                .header("User-Agent", user_agent.as_str())
                .header("X-Agentkit-Client", version::PKG_NAME)
                .send(signed.body.as_str())?
        };

        let status = response.status().as_u16();
        let text = response.body_mut().read_to_string()?;
        decode_response(action, status, &text)
    }
}

/// Decode an OpenAPI response envelope.
///
/// `ResponseMetadata.Error` wins over the HTTP status; a missing `Result`
/// decodes as an empty object.
pub fn decode_response<Resp: DeserializeOwned>(action: &str, status: u16, text: &str) -> Result<Resp> {
    let envelope: Envelope = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(e) => {
            let excerpt: String = text.chars().take(200).collect();
            return Err(if (200..300).contains(&status) {
                AgentkitError::Http(format!("{}: invalid response body: {}", action, e))
            } else {
                AgentkitError::Http(format!("{}: HTTP {}: {}", action, status, excerpt))
            });
        }
    };

    if let Some(error) = envelope.response_metadata.error {
        log::debug!(
            "{} returned error {} (request id {})",
            action,
            error.code,
            envelope.response_metadata.request_id.as_deref().unwrap_or("-")
        );
        return Err(AgentkitError::Api {
            code: error.code,
            message: error.message,
            action: action.to_string(),
        });
    }

    if !(200..300).contains(&status) {
        return Err(AgentkitError::Http(format!("{}: HTTP {}", action, status)));
    }

    let result = envelope
        .result
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| serde_json::Value::Object(Default::default()));
    Ok(serde_json::from_value(result)?)
}

/// Run `f` up to `attempts` times, sleeping `delay` between failures.
pub fn retry<T>(attempts: u32, delay: Duration, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    let mut attempt = 1;
    loop {
        match f() {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                log::debug!("attempt {}/{} failed: {}", attempt, attempts, e);
                attempt += 1;
                std::thread::sleep(delay);
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct Sample {
        #[serde(default)]
        runtime_id: Option<String>,
    }

    #[test]
    fn test_decode_result() {
        let body = r#"{"ResponseMetadata":{"RequestId":"r1"},"Result":{"RuntimeId":"rt-1"}}"#;
        let sample: Sample = decode_response("CreateRuntime", 200, body).unwrap();
        assert_eq!(sample.runtime_id.as_deref(), Some("rt-1"));
    }

    #[test]
    fn test_decode_missing_result() {
        let body = r#"{"ResponseMetadata":{"RequestId":"r1"}}"#;
        let sample: Sample = decode_response("DeleteRuntime", 200, body).unwrap();
        assert!(sample.runtime_id.is_none());
    }

    #[test]
    fn test_decode_error_metadata_wins() {
        let body = r#"{"ResponseMetadata":{"Error":{"Code":"InvalidAgentKitRuntime.NotFound","Message":"gone"}}}"#;
        let err = decode_response::<Sample>("GetRuntime", 200, body).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "GetRuntime failed: InvalidAgentKitRuntime.NotFound: gone");

        let err = decode_response::<Sample>("GetRuntime", 404, body).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_non_json_error() {
        let err = decode_response::<Sample>("ListRuntimes", 502, "<html>bad gateway</html>").unwrap_err();
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[test]
    fn test_retry_eventually_succeeds() {
        let mut calls = 0;
        let value = retry(3, Duration::from_millis(1), || {
            calls += 1;
            if calls < 3 {
                Err(AgentkitError::Http("flaky".to_string()))
            } else {
                Ok(calls)
            }
        })
        .unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_retry_gives_up() {
        let mut calls = 0;
        let result: Result<()> = retry(2, Duration::from_millis(1), || {
            calls += 1;
            Err(AgentkitError::Http("down".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(calls, 2);
    }
}
