//! Container Registry actions used to publish hybrid images.

use serde::{Deserialize, Serialize};

pub const PHASE_RUNNING: &str = "Running";
pub const PHASE_FAILED: &str = "Failed";
/// Pseudo-phase reported when no registry matches the name filter.
pub const PHASE_NONEXIST: &str = "NONEXIST";

pub const INSTANCE_TYPES: &[&str] = &["Micro", "Enterprise"];

service_client! {
    /// Client for the Container Registry (`cr`) service.
    CrClient => "cr" {
        create_endpoint_acl_policies("CreateEndpointAclPolicies"): CreateEndpointAclPoliciesRequest => EmptyResponse;
        create_namespace("CreateNamespace"): CreateNamespaceRequest => EmptyResponse;
        create_registry("CreateRegistry"): CreateRegistryRequest => EmptyResponse;
        create_repository("CreateRepository"): CreateRepositoryRequest => EmptyResponse;
        get_authorization_token("GetAuthorizationToken"): RegistryRequest => GetAuthorizationTokenResponse;
        get_public_endpoint("GetPublicEndpoint"): RegistryRequest => GetPublicEndpointResponse;
        list_domains("ListDomains"): RegistryRequest => ListDomainsResponse;
        list_registries("ListRegistries"): ListRegistriesRequest => ListRegistriesResponse;
        update_public_endpoint("UpdatePublicEndpoint"): UpdatePublicEndpointRequest => EmptyResponse;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EmptyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegistryRequest {
    pub registry: String,
}

impl RegistryRequest {
    pub fn new(registry: &str) -> Self {
        Self {
            registry: registry.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceTag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRegistryRequest {
    pub name: String,
    pub r#type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_tags: Vec<ResourceTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNamespaceRequest {
    pub name: String,
    pub registry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRepositoryRequest {
    pub name: String,
    pub registry: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegistryFilter {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRegistriesRequest {
    pub filter: RegistryFilter,
}

impl ListRegistriesRequest {
    pub fn by_name(name: &str) -> Self {
        Self {
            filter: RegistryFilter {
                names: vec![name.to_string()],
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegistryStatus {
    pub phase: String,
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegistryItem {
    pub name: String,
    pub r#type: String,
    pub status: RegistryStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRegistriesResponse {
    pub total_count: i64,
    pub items: Vec<RegistryItem>,
}

impl ListRegistriesResponse {
    /// Phase of the first match, or [`PHASE_NONEXIST`].
    pub fn phase(&self) -> &str {
        match self.items.first() {
            Some(item) if self.total_count > 0 => item.status.phase.as_str(),
            _ => PHASE_NONEXIST,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAuthorizationTokenResponse {
    pub username: String,
    pub token: String,
    pub expire_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DomainItem {
    pub domain: String,
    pub r#type: String,
    pub default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListDomainsResponse {
    pub items: Vec<DomainItem>,
}

impl ListDomainsResponse {
    /// The only domain, else the one flagged as default.
    pub fn default_domain(&self) -> Option<&str> {
        if let [single] = self.items.as_slice() {
            return Some(single.domain.as_str());
        }
        self.items
            .iter()
            .find(|item| item.default)
            .map(|item| item.domain.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetPublicEndpointResponse {
    pub registry: String,
    pub enabled: bool,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdatePublicEndpointRequest {
    pub registry: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateEndpointAclPoliciesRequest {
    pub registry: String,
    pub r#type: String,
    pub entries: Vec<String>,
    pub description: String,
}

/// `<domain>/<namespace>/<repo>:<tag>`
pub fn remote_image(domain: &str, namespace: &str, repo: &str, tag: &str) -> String {
    format!("{}/{}/{}:{}", domain, namespace, repo, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_phase() {
        let empty: ListRegistriesResponse = serde_json::from_value(json!({"TotalCount": 0})).unwrap();
        assert_eq!(empty.phase(), PHASE_NONEXIST);

        let running: ListRegistriesResponse = serde_json::from_value(json!({
            "TotalCount": 1,
            "Items": [{"Name": "agentkit-platform-1", "Status": {"Phase": "Running"}}]
        }))
        .unwrap();
        assert_eq!(running.phase(), PHASE_RUNNING);
    }

    #[test]
    fn test_default_domain() {
        let single: ListDomainsResponse =
            serde_json::from_value(json!({"Items": [{"Domain": "a.cr.volces.com"}]})).unwrap();
        assert_eq!(single.default_domain(), Some("a.cr.volces.com"));

        let many: ListDomainsResponse = serde_json::from_value(json!({"Items": [
            {"Domain": "vpc.cr.volces.com", "Default": false},
            {"Domain": "pub.cr.volces.com", "Default": true}
        ]}))
        .unwrap();
        assert_eq!(many.default_domain(), Some("pub.cr.volces.com"));

        assert!(ListDomainsResponse::default().default_domain().is_none());
    }

    #[test]
    fn test_create_registry_wire_shape() {
        let request = CreateRegistryRequest {
            name: "agentkit-platform-1".to_string(),
            r#type: "Micro".to_string(),
            resource_tags: vec![ResourceTag {
                key: "provider".to_string(),
                value: "agentkit-cli".to_string(),
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["Type"], "Micro");
        assert_eq!(value["ResourceTags"][0]["Key"], "provider");
    }

    #[test]
    fn test_remote_image() {
        assert_eq!(
            remote_image("reg.example.com", "agentkit", "demo", "20250101"),
            "reg.example.com/agentkit/demo:20250101"
        );
    }
}
