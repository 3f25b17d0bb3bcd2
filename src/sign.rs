//! Volcengine V4 request signing (HMAC-SHA256).
//!
//! Every OpenAPI call carries `Action` and `Version` in the query string and a
//! JSON body. The signature covers the canonical query, four headers and the
//! SHA-256 of the body, scoped to `date/region/service/request`.

use crate::error::{AgentkitError, Result};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "HMAC-SHA256";
pub const SIGNED_HEADERS: &str = "content-type;host;x-content-sha256;x-date";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Key material used for one signature.
#[derive(Clone)]
pub struct SigningKey<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub session_token: Option<&'a str>,
}

/// Everything that identifies the call being signed.
#[derive(Debug, Clone)]
pub struct RequestTarget<'a> {
    pub method: &'a str,
    pub scheme: &'a str,
    pub host: &'a str,
    pub region: &'a str,
    pub service: &'a str,
    pub action: &'a str,
    pub version: &'a str,
}

/// A request ready to hand to the HTTP layer.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl SignedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Sign a request at the current time.
pub fn sign(
    target: &RequestTarget<'_>,
    query: &BTreeMap<String, String>,
    body: &str,
    key: &SigningKey<'_>,
) -> Result<SignedRequest> {
    sign_at(target, query, body, key, Utc::now())
}

/// Sign a request at a fixed instant. Output is deterministic for a given `now`.
pub fn sign_at(
    target: &RequestTarget<'_>,
    query: &BTreeMap<String, String>,
    body: &str,
    key: &SigningKey<'_>,
    now: DateTime<Utc>,
) -> Result<SignedRequest> {
    let x_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let short_date = &x_date[..8];

    let mut params = query.clone();
    params.insert("Action".to_string(), target.action.to_string());
    params.insert("Version".to_string(), target.version.to_string());
    let canonical_query = canonical_query(&params);

    let body_hash = sha256_hex(body.as_bytes());
    let canonical_request = [
        target.method.to_uppercase(),
        "/".to_string(),
        canonical_query.clone(),
        format!("content-type:{}", CONTENT_TYPE_JSON),
        format!("host:{}", target.host),
        format!("x-content-sha256:{}", body_hash),
        format!("x-date:{}", x_date),
        String::new(),
        SIGNED_HEADERS.to_string(),
        body_hash.clone(),
    ]
    .join("\n");

    let scope = format!(
        "{}/{}/{}/request",
        short_date, target.region, target.service
    );
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        x_date,
        scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let k_date = hmac_sha256(key.secret_key.as_bytes(), short_date.as_bytes())?;
    let k_region = hmac_sha256(&k_date, target.region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, target.service.as_bytes())?;
    let k_signing = hmac_sha256(&k_service, b"request")?;
    let signature = hex(&hmac_sha256(&k_signing, string_to_sign.as_bytes())?);

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, key.access_key, scope, SIGNED_HEADERS, signature
    );

    let mut headers = vec![
        ("Host".to_string(), target.host.to_string()),
        ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
        ("X-Date".to_string(), x_date),
        ("X-Content-Sha256".to_string(), body_hash),
        ("Authorization".to_string(), authorization),
    ];
    if let Some(token) = key.session_token.filter(|t| !t.is_empty()) {
        headers.push(("X-Security-Token".to_string(), token.to_string()));
    }

    Ok(SignedRequest {
        method: target.method.to_uppercase(),
        url: format!("{}://{}/?{}", target.scheme, target.host, canonical_query),
        headers,
        body: body.to_string(),
    })
}

/// Sorted `k=v` pairs, both sides percent-encoded with `-_.~` left as is.
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex(&Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| AgentkitError::Credentials(format!("invalid signing key: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
