//! Calling a deployed agent over HTTP.
//!
//! Plain agents take `POST /invoke` with a JSON payload; A2A agents take a
//! JSON-RPC `message/stream` envelope on `/`. Responses are either one JSON
//! document or a server-sent event stream.

use crate::config::CommonConfig;
use crate::error::{AgentkitError, Result};
use crate::version;
use rand::Rng;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Write};
use std::time::Duration;

const INVOKE_TIMEOUT: Duration = Duration::from_secs(600);
const SSE_PREFIX: &str = "data:";

/// How the caller authenticates against the agent.
#[derive(Debug, Clone, PartialEq)]
pub enum Auth {
    None,
    ApiKey(String),
    /// The caller must bring its own `Authorization` header.
    Jwt,
}

#[derive(Debug, Clone, Default)]
pub struct InvokeRequest {
    pub message: Option<String>,
    /// Raw JSON body, exclusive with `message`.
    pub payload: Option<String>,
    /// JSON object of extra headers; replaces the defaults.
    pub headers: Option<String>,
    /// Overrides the recorded API key.
    pub apikey: Option<String>,
}

pub fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("user_id".to_string(), "agentkit_user".to_string()),
        ("session_id".to_string(), "agentkit_sample_session".to_string()),
    ])
}

pub fn parse_headers(raw: Option<&str>) -> Result<BTreeMap<String, String>> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(default_headers());
    };
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| AgentkitError::InvalidConfig(format!("--headers is not valid JSON: {}", e)))?;
    let Value::Object(map) = value else {
        return Err(AgentkitError::InvalidConfig("--headers must be a JSON object".to_string()));
    };
    Ok(map
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => (key, s),
            other => (key, other.to_string()),
        })
        .collect())
}

fn parse_payload(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| AgentkitError::InvalidConfig(format!("--payload is not valid JSON: {}", e)))
}

fn check_exclusive(request: &InvokeRequest) -> Result<()> {
    match (&request.message, &request.payload) {
        (Some(_), Some(_)) => Err(AgentkitError::InvalidConfig(
            "pass either a message or --payload, not both".to_string(),
        )),
        (None, None) => Err(AgentkitError::InvalidConfig(
            "nothing to send: pass a message or --payload".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Body for `/invoke`: `{"prompt": message}` or the user's JSON.
pub fn build_payload(request: &InvokeRequest) -> Result<Value> {
    check_exclusive(request)?;
    match &request.message {
        Some(message) => Ok(json!({ "prompt": message })),
        None => parse_payload(request.payload.as_deref().unwrap_or_default()),
    }
}

/// JSON-RPC envelope for A2A agents. A payload that already is JSON-RPC is
/// sent unchanged.
pub fn a2a_envelope(request: &InvokeRequest, headers: &BTreeMap<String, String>) -> Result<Value> {
    check_exclusive(request)?;
    let parsed = request.payload.as_deref().and_then(|p| serde_json::from_str::<Value>(p).ok());
    if let Some(rpc) = parsed.as_ref().filter(|v| v.get("jsonrpc").is_some()) {
        return Ok(rpc.clone());
    }

    let text = match (&request.message, &parsed, &request.payload) {
        (Some(message), _, _) => message.clone(),
        (None, Some(value), _) => value.to_string(),
        (None, None, payload) => payload.clone().unwrap_or_default(),
    };

    Ok(json!({
        "jsonrpc": "2.0",
        "method": "message/stream",
        "params": {
            "message": {
                "role": "user",
                "messageId": uuid::Uuid::new_v4().to_string(),
                "parts": [{ "kind": "text", "text": text }],
            },
            "metadata": headers,
        },
        "id": rand::thread_rng().gen_range(1..=999_999),
    }))
}

pub fn invoke_url(endpoint: &str, a2a: bool) -> String {
    if a2a {
        endpoint.to_string()
    } else {
        format!("{}/invoke", endpoint.trim_end_matches('/'))
    }
}

fn authorize(headers: &mut BTreeMap<String, String>, auth: &Auth) -> Result<()> {
    if headers.keys().any(|k| k.eq_ignore_ascii_case("authorization")) {
        return Ok(());
    }
    match auth {
        Auth::None => Ok(()),
        Auth::ApiKey(key) => {
            headers.insert("Authorization".to_string(), format!("Bearer {}", key));
            Ok(())
        }
        Auth::Jwt => Err(AgentkitError::Credentials(
            "this runtime uses JWT auth; pass --headers '{\"Authorization\": \"Bearer <token>\"}'".to_string(),
        )),
    }
}

/// Text pieces and control flags carried by one stream event.
#[derive(Debug, Default, PartialEq)]
pub struct EventOutput {
    pub text: Vec<String>,
    pub error: Option<String>,
    pub done: bool,
}

fn parts_of(event: &Map<String, Value>) -> Option<&Vec<Value>> {
    if let Some(parts) = event.get("parts").and_then(Value::as_array) {
        return Some(parts);
    }
    for key in ["message", "content"] {
        if let Some(parts) = event.get(key).and_then(|m| m.get("parts")).and_then(Value::as_array) {
            return Some(parts);
        }
    }
    let message = event.get("status").and_then(|s| s.get("message"))?;
    if message.get("role").and_then(Value::as_str) == Some("agent") {
        return message.get("parts").and_then(Value::as_array);
    }
    None
}

/// Pull the printable text out of an ADK or A2A event.
pub fn event_output(event: &Value) -> EventOutput {
    let event = match event.get("jsonrpc").and(event.get("result")) {
        Some(result) => result,
        None => event,
    };
    let mut output = EventOutput::default();
    let Some(map) = event.as_object() else {
        return output;
    };

    // the final aggregate repeats every partial chunk
    if map.get("partial").and_then(Value::as_bool) == Some(false) {
        log::debug!("skipping final aggregate event");
        return output;
    }

    if let Some(parts) = parts_of(map) {
        for part in parts {
            let text = part.get("text").and_then(Value::as_str).or_else(|| part.as_str());
            if let Some(text) = text.filter(|t| !t.is_empty()) {
                output.text.push(text.to_string());
            }
        }
    }

    output.error = map.get("error").map(|e| match e {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    });
    output.done = map.get("final").and_then(Value::as_bool) == Some(true)
        || map.get("status").and_then(|s| s.get("state")).and_then(Value::as_str) == Some("completed");
    output
}

/// JSON carried by one `data:` line; other lines are `None`.
pub fn parse_sse_line(line: &str) -> Option<Value> {
    let data = line.trim().strip_prefix(SSE_PREFIX)?.trim();
    if data.is_empty() || data == "[DONE]" {
        return None;
    }
    match serde_json::from_str(data) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("skipping unparsable event: {}", e);
            None
        }
    }
}

fn print_stream<R: BufRead>(reader: R) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in reader.lines() {
        let Some(event) = parse_sse_line(&line?) else {
            continue;
        };
        let output = event_output(&event);
        for text in &output.text {
            write!(out, "{}", text)?;
        }
        out.flush()?;
        if let Some(error) = output.error {
            writeln!(out)?;
            eprintln!("Error: {}", error);
        }
        if output.done {
            break;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn print_body(text: &str) -> Result<()> {
    if text.trim_start().starts_with(SSE_PREFIX) {
        return print_stream(text.as_bytes());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}

/// Send `request` to the agent at `endpoint` and print the reply.
pub fn invoke(endpoint: &str, common: &CommonConfig, auth: &Auth, request: &InvokeRequest) -> Result<()> {
    let a2a = common.is_a2a();
    let mut headers = parse_headers(request.headers.as_deref())?;
    let body = if a2a {
        a2a_envelope(request, &headers)?
    } else {
        build_payload(request)?
    };

    let auth = match &request.apikey {
        Some(key) if !key.is_empty() => Auth::ApiKey(key.clone()),
        _ => auth.clone(),
    };
    authorize(&mut headers, &auth)?;

    let url = invoke_url(endpoint, a2a);
    println!("Invoking {}", url);
    log::debug!("payload: {}", body);

    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(INVOKE_TIMEOUT))
        .http_status_as_error(false)
        .build()
        .into();
    let user_agent = format!("{}/{}", version::PKG_NAME, version::VERSION);
    let mut call = agent
        .post(&url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json, text/event-stream")
        .header("User-Agent", user_agent.as_str());
    for (name, value) in &headers {
        call = call.header(name.as_str(), value.as_str());
    }
    let mut response = call.send(serde_json::to_string(&body)?.as_str())?;

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        let text = response.body_mut().read_to_string().unwrap_or_default();
        let hint = match status {
            401 | 403 => "\nCheck the API key (--apikey) or the Authorization header",
            _ => "",
        };
        return Err(AgentkitError::Http(format!(
            "{} returned HTTP {}: {}{}",
            url,
            status,
            text.trim(),
            hint
        )));
    }

    let streaming = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("text/event-stream"))
        .unwrap_or(false);

    if streaming {
        log::debug!("streaming response");
        print_stream(BufReader::new(response.body_mut().as_reader()))
    } else {
        let text = response.body_mut().read_to_string()?;
        print_body(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> InvokeRequest {
        InvokeRequest {
            message: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn payload(raw: &str) -> InvokeRequest {
        InvokeRequest {
            payload: Some(raw.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_payload() {
        assert_eq!(build_payload(&message("hi")).unwrap(), json!({"prompt": "hi"}));
        assert_eq!(
            build_payload(&payload(r#"{"prompt": "x", "n": 1}"#)).unwrap(),
            json!({"prompt": "x", "n": 1})
        );
        assert!(build_payload(&payload("{broken")).is_err());
        assert!(build_payload(&InvokeRequest::default()).is_err());

        let both = InvokeRequest {
            message: Some("hi".to_string()),
            payload: Some("{}".to_string()),
            ..Default::default()
        };
        assert!(build_payload(&both).is_err());
    }

    #[test]
    fn test_headers() {
        let defaults = parse_headers(None).unwrap();
        assert_eq!(defaults.get("user_id").map(String::as_str), Some("agentkit_user"));
        assert_eq!(
            defaults.get("session_id").map(String::as_str),
            Some("agentkit_sample_session")
        );

        let custom = parse_headers(Some(r#"{"user_id": "u1", "retries": 3}"#)).unwrap();
        assert_eq!(custom.get("user_id").map(String::as_str), Some("u1"));
        assert_eq!(custom.get("retries").map(String::as_str), Some("3"));
        assert!(!custom.contains_key("session_id"));

        assert!(parse_headers(Some("[1, 2]")).is_err());
    }

    #[test]
    fn test_a2a_envelope() {
        let headers = default_headers();
        let envelope = a2a_envelope(&message("hello"), &headers).unwrap();
        assert_eq!(envelope["jsonrpc"], "2.0");
        assert_eq!(envelope["method"], "message/stream");
        assert_eq!(envelope["params"]["message"]["role"], "user");
        assert_eq!(envelope["params"]["message"]["parts"][0]["text"], "hello");
        assert_eq!(envelope["params"]["metadata"]["user_id"], "agentkit_user");
        let id = envelope["id"].as_i64().unwrap();
        assert!((1..=999_999).contains(&id));

        let wrapped = a2a_envelope(&payload(r#"{"q": 1}"#), &headers).unwrap();
        assert_eq!(wrapped["params"]["message"]["parts"][0]["text"], r#"{"q":1}"#);

        let rpc = r#"{"jsonrpc": "2.0", "method": "message/send", "id": 7}"#;
        let passthrough = a2a_envelope(&payload(rpc), &headers).unwrap();
        assert_eq!(passthrough["method"], "message/send");
        assert_eq!(passthrough["id"], 7);
    }

    #[test]
    fn test_invoke_url() {
        assert_eq!(invoke_url("http://localhost:8000", false), "http://localhost:8000/invoke");
        assert_eq!(invoke_url("https://x.example.com/", false), "https://x.example.com/invoke");
        assert_eq!(invoke_url("https://x.example.com/", true), "https://x.example.com/");
    }

    #[test]
    fn test_authorize() {
        let mut headers = default_headers();
        authorize(&mut headers, &Auth::ApiKey("k1".to_string())).unwrap();
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer k1"));

        let mut headers = default_headers();
        assert!(matches!(authorize(&mut headers, &Auth::Jwt), Err(AgentkitError::Credentials(_))));

        let mut headers = BTreeMap::from([("authorization".to_string(), "Bearer jwt".to_string())]);
        authorize(&mut headers, &Auth::Jwt).unwrap();
        authorize(&mut headers, &Auth::ApiKey("ignored".to_string())).unwrap();
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_parse_sse_line() {
        assert_eq!(parse_sse_line(r#"data: {"a": 1}"#), Some(json!({"a": 1})));
        assert_eq!(parse_sse_line(r#"data:{"a": 1}"#), Some(json!({"a": 1})));
        assert_eq!(parse_sse_line("event: message"), None);
        assert_eq!(parse_sse_line("data: [DONE]"), None);
        assert_eq!(parse_sse_line("data: not json"), None);
        assert_eq!(parse_sse_line(""), None);
    }

    #[test]
    fn test_event_output_adk() {
        let event = json!({"content": {"parts": [{"text": "Hel"}, {"text": "lo"}]}, "partial": true});
        let output = event_output(&event);
        assert_eq!(output.text, vec!["Hel", "lo"]);
        assert!(!output.done);

        let aggregate = json!({"content": {"parts": [{"text": "Hello"}]}, "partial": false});
        assert!(event_output(&aggregate).text.is_empty());
    }

    #[test]
    fn test_event_output_a2a() {
        let event = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "status": {
                    "state": "working",
                    "message": {"role": "agent", "parts": [{"kind": "text", "text": "sunny"}]}
                }
            }
        });
        assert_eq!(event_output(&event).text, vec!["sunny"]);

        let done = json!({"jsonrpc": "2.0", "result": {"status": {"state": "completed"}, "final": true}});
        assert!(event_output(&done).done);

        let user_echo = json!({"status": {"message": {"role": "user", "parts": [{"text": "q"}]}}});
        assert!(event_output(&user_echo).text.is_empty());

        let failed = json!({"error": {"code": 500}});
        assert_eq!(event_output(&failed).error.as_deref(), Some(r#"{"code":500}"#));
    }
}
