//! Agent runtimes: create, update, release and inspect.

use serde::{Deserialize, Serialize};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_ERROR: &str = "Error";
pub const STATUS_UPDATING: &str = "Updating";
pub const STATUS_UNRELEASED: &str = "UnReleased";

pub const ARTIFACT_TYPE_IMAGE: &str = "image";
pub const API_KEY_LOCATION_HEADER: &str = "HEADER";
pub const DEFAULT_PROJECT_NAME: &str = "default";

service_client! {
    /// Client for the AgentKit runtime actions.
    AgentkitRuntimeClient => "agentkit" {
        create_runtime("CreateRuntime"): CreateRuntimeRequest => CreateRuntimeResponse;
        delete_runtime("DeleteRuntime"): DeleteRuntimeRequest => DeleteRuntimeResponse;
        get_runtime("GetRuntime"): GetRuntimeRequest => GetRuntimeResponse;
        get_runtime_coze_token("GetRuntimeCozeToken"): GetRuntimeCozeTokenRequest => GetRuntimeCozeTokenResponse;
        get_runtime_instance_logs("GetRuntimeInstanceLogs"): GetRuntimeInstanceLogsRequest => GetRuntimeInstanceLogsResponse;
        get_runtime_version("GetRuntimeVersion"): GetRuntimeVersionRequest => GetRuntimeVersionResponse;
        list_runtime_cr_registries("ListRuntimeCrRegistries"): ListRuntimeCrRegistriesRequest => ListRuntimeCrRegistriesResponse;
        list_runtime_instances("ListRuntimeInstances"): ListRuntimeInstancesRequest => ListRuntimeInstancesResponse;
        list_runtime_versions("ListRuntimeVersions"): ListRuntimeVersionsRequest => ListRuntimeVersionsResponse;
        list_runtimes("ListRuntimes"): ListRuntimesRequest => ListRuntimesResponse;
        release_runtime("ReleaseRuntime"): ReleaseRuntimeRequest => ReleaseRuntimeResponse;
        update_runtime("UpdateRuntime"): UpdateRuntimeRequest => UpdateRuntimeResponse;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AgentKitRuntimeVersionsForListRuntimeVersions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apmplus_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerConfigurationForListRuntimeVersions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_milli: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvsForListRuntimeVersions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AgentKitRuntimesForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apmplus_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerConfigurationForListRuntimes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_milli: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvsForListRuntimes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_id: Option<String>,
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configurations: Option<Vec<NetworkConfigurationsForListRuntimes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsForListRuntimes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_configuration: Option<TlsConfigurationForListRuntimes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerConfigurationForGetRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<CustomJwtAuthorizerForGetRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthForGetRuntime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerConfigurationForGetRuntimeVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<CustomJwtAuthorizerForGetRuntimeVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthForGetRuntimeVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerConfigurationForListRuntimeVersions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<CustomJwtAuthorizerForListRuntimeVersions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthForListRuntimeVersions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerConfigurationForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<CustomJwtAuthorizerForListRuntimes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthForListRuntimes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CrRegistriesForListRuntimeCrRegistries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomJwtAuthorizerForGetRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomJwtAuthorizerForGetRuntimeVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomJwtAuthorizerForListRuntimeVersions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomJwtAuthorizerForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvsForGetRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvsForGetRuntimeVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvsForListRuntimeVersions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvsForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstanceItemsForListRuntimeInstances {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyAuthForGetRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyAuthForGetRuntimeVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyAuthForListRuntimeVersions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyAuthForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfigurationsForGetRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfigurationForGetRuntime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfigurationsForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfigurationForListRuntimes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsForGetRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsForGetRuntimeVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TlsConfigurationForGetRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_topic_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TlsConfigurationForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_topic_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfigurationForGetRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfigurationForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerForCreateRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<AuthorizerCustomJwtAuthorizerForCreateRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<AuthorizerKeyAuthForCreateRuntime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerCustomJwtAuthorizerForCreateRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    pub discovery_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerKeyAuthForCreateRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkForCreateRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<NetworkVpcForCreateRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_private_network: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_public_network: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkVpcForCreateRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    pub vpc_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TlsForCreateRuntime {
    pub enable_log: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_topic_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvsItemForCreateRuntime {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsItemForCreateRuntime {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRuntimeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apmplus_enable: Option<bool>,
    pub artifact_type: String,
    pub artifact_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_milli: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_id: Option<String>,
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_instance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_agent_name: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub role_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerForCreateRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkForCreateRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_configuration: Option<TlsForCreateRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvsItemForCreateRuntime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsItemForCreateRuntime>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRuntimeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteRuntimeRequest {
    pub runtime_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteRuntimeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRuntimeRequest {
    pub runtime_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRuntimeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apmplus_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerConfigurationForGetRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_milli: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvsForGetRuntime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_log_file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_id: Option<String>,
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_instance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_agent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configurations: Option<Vec<NetworkConfigurationsForGetRuntime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsForGetRuntime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_configuration: Option<TlsConfigurationForGetRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRuntimeCozeTokenRequest {
    pub runtime_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRuntimeCozeTokenResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRuntimeInstanceLogsRequest {
    pub function_id: String,
    pub instance_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRuntimeInstanceLogsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRuntimeVersionRequest {
    pub runtime_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetRuntimeVersionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apmplus_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerConfigurationForGetRuntimeVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_milli: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvsForGetRuntimeVersion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_agent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsForGetRuntimeVersion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRuntimeCrRegistriesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRuntimeCrRegistriesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cr_registries: Option<Vec<CrRegistriesForListRuntimeCrRegistries>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRuntimeInstancesRequest {
    pub runtime_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRuntimeInstancesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_items: Option<Vec<InstanceItemsForListRuntimeInstances>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_instance: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRuntimeVersionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    pub runtime_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRuntimeVersionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_kit_runtime_versions: Option<Vec<AgentKitRuntimeVersionsForListRuntimeVersions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FiltersItemForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagFiltersItemForListRuntimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRuntimesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<FiltersItemForListRuntimes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<Vec<TagFiltersItemForListRuntimes>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRuntimesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_kit_runtimes: Option<Vec<AgentKitRuntimesForListRuntimes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReleaseRuntimeRequest {
    pub runtime_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReleaseRuntimeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvsItemForUpdateRuntime {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsItemForUpdateRuntime {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateRuntimeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apmplus_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_milli: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_id: Option<String>,
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_instance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_agent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_enable: Option<bool>,
    pub runtime_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvsItemForUpdateRuntime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsItemForUpdateRuntime>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateRuntimeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
}

impl GetRuntimeResponse {
    /// Endpoint of the `public` network configuration, if any.
    pub fn public_endpoint(&self) -> Option<&str> {
        self.network_configurations
            .iter()
            .flatten()
            .find(|net| net.network_type.as_deref() == Some("public"))
            .and_then(|net| net.endpoint.as_deref())
    }

    /// API key of a key-auth runtime.
    pub fn api_key(&self) -> Option<&str> {
        self.authorizer_configuration
            .as_ref()
            .and_then(|auth| auth.key_auth.as_ref())
            .and_then(|key| key.api_key.as_deref())
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_wire_shape() {
        let request = CreateRuntimeRequest {
            name: "demo-abcd1234".to_string(),
            artifact_type: ARTIFACT_TYPE_IMAGE.to_string(),
            artifact_url: "cr.example.com/ns/demo:1".to_string(),
            role_name: "role".to_string(),
            mcp_toolset_id: Some("ts-1".to_string()),
            envs: Some(vec![EnvsItemForCreateRuntime {
                key: "A".to_string(),
                value: Some("1".to_string()),
            }]),
            authorizer_configuration: Some(AuthorizerForCreateRuntime {
                key_auth: Some(AuthorizerKeyAuthForCreateRuntime {
                    api_key_name: Some("API-KEY-1".to_string()),
                    api_key_location: Some(API_KEY_LOCATION_HEADER.to_string()),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["Name"], "demo-abcd1234");
        assert_eq!(value["MCPToolsetId"], "ts-1");
        assert_eq!(value["Envs"][0]["Key"], "A");
        assert_eq!(value["AuthorizerConfiguration"]["KeyAuth"]["ApiKeyLocation"], "HEADER");
        assert!(value.get("Description").is_none());
        assert!(value["AuthorizerConfiguration"].get("CustomJwtAuthorizer").is_none());
    }

    #[test]
    fn test_get_runtime_helpers() {
        let response: GetRuntimeResponse = serde_json::from_value(json!({
            "RuntimeId": "r-1",
            "Status": "Ready",
            "NetworkConfigurations": [
                {"NetworkType": "private", "Endpoint": "http://10.0.0.1"},
                {"NetworkType": "public", "Endpoint": "https://r-1.example.com"}
            ],
            "AuthorizerConfiguration": {"KeyAuth": {"ApiKey": "secret"}}
        }))
        .unwrap();

        assert_eq!(response.status(), STATUS_READY);
        assert_eq!(response.public_endpoint(), Some("https://r-1.example.com"));
        assert_eq!(response.api_key(), Some("secret"));
    }

    #[test]
    fn test_get_runtime_sparse() {
        let response: GetRuntimeResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.status(), "");
        assert!(response.public_endpoint().is_none());
        assert!(response.api_key().is_none());
    }

    #[test]
    fn test_action_table() {
        assert_eq!(AgentkitRuntimeClient::SERVICE, "agentkit");
        assert_eq!(AgentkitRuntimeClient::ACTIONS.len(), 12);
        assert!(AgentkitRuntimeClient::ACTIONS.contains(&"ReleaseRuntime"));
    }
}
