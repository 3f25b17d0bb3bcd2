//! Account-level queries (linked services).

use serde::{Deserialize, Serialize};

service_client! {
    /// Client for the AgentKit account actions.
    AgentkitAccountClient => "agentkit" {
        list_account_linked_services("ListAccountLinkedServices"): ListAccountLinkedServicesRequest => ListAccountLinkedServicesResponse;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceStatusesForListAccountLinkedServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListAccountLinkedServicesRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListAccountLinkedServicesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_statuses: Option<Vec<ServiceStatusesForListAccountLinkedServices>>,
}
