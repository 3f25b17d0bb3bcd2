use crate::client::ServiceClient;
use crate::error::{AgentkitError, Result};
use crate::platform::PlatformContext;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Minimal STS client: only caller identity is needed (account id templating).
pub struct StsClient {
    inner: ServiceClient,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetCallerIdentityResponse {
    pub account_id: serde_json::Value,
    pub user_id: Option<String>,
    pub trn: Option<String>,
}

impl GetCallerIdentityResponse {
    /// Account id as a string; the service returns it as a number.
    pub fn account_id(&self) -> Option<String> {
        match &self.account_id {
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

impl StsClient {
    pub fn new(ctx: &PlatformContext) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new("sts", ctx)?,
        })
    }

    pub fn get_caller_identity(&self) -> Result<GetCallerIdentityResponse> {
        self.inner.invoke_get("GetCallerIdentity", &BTreeMap::new())
    }

    pub fn account_id(&self) -> Result<String> {
        self.get_caller_identity()?
            .account_id()
            .ok_or_else(|| AgentkitError::Credentials("GetCallerIdentity returned no AccountId".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_id_number_or_string() {
        let numeric: GetCallerIdentityResponse =
            serde_json::from_value(json!({"AccountId": 2100012345})).unwrap();
        assert_eq!(numeric.account_id().as_deref(), Some("2100012345"));

        let text: GetCallerIdentityResponse = serde_json::from_value(json!({"AccountId": "42"})).unwrap();
        assert_eq!(text.account_id().as_deref(), Some("42"));

        let missing: GetCallerIdentityResponse = serde_json::from_value(json!({})).unwrap();
        assert!(missing.account_id().is_none());
    }
}
