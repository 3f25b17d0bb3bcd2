//! MCP services and toolsets.

use serde::{Deserialize, Serialize};

service_client! {
    /// Client for the AgentKit mcp actions.
    AgentkitMcpClient => "agentkit" {
        create_mcp_service("CreateMCPService"): CreateMCPServiceRequest => CreateMCPServiceResponse;
        create_mcp_toolset("CreateMCPToolset"): CreateMCPToolsetRequest => CreateMCPToolsetResponse;
        delete_mcp_service("DeleteMCPService"): DeleteMCPServiceRequest => DeleteMCPServiceResponse;
        delete_mcp_toolset("DeleteMCPToolset"): DeleteMCPToolsetRequest => DeleteMCPToolsetResponse;
        get_mcp_service("GetMCPService"): GetMCPServiceRequest => GetMCPServiceResponse;
        get_mcp_tools("GetMCPTools"): GetMCPToolsRequest => GetMCPToolsResponse;
        get_mcp_toolset("GetMCPToolset"): GetMCPToolsetRequest => GetMCPToolsetResponse;
        list_mcp_services("ListMCPServices"): ListMCPServicesRequest => ListMCPServicesResponse;
        list_mcp_tools("ListMCPTools"): ListMCPToolsRequest => ListMCPToolsResponse;
        list_mcp_toolsets("ListMCPToolsets"): ListMCPToolsetsRequest => ListMCPToolsetsResponse;
        update_mcp_service("UpdateMCPService"): UpdateMCPServiceRequest => UpdateMCPServiceResponse;
        update_mcp_tools("UpdateMCPTools"): UpdateMCPToolsRequest => UpdateMCPToolsResponse;
        update_mcp_toolset("UpdateMCPToolset"): UpdateMCPToolsetRequest => UpdateMCPToolsetResponse;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiKeysForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiKeysForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiKeysForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociatedRuntimesForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerConfigurationForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<AuthorizerForGetMCPToolset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerConfigurationForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<AuthorizerForListMCPToolsets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerForGetMCPServiceForInboundAuthorizerConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthForGetMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerForGetMCPServiceForOutboundAuthorizerConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthForGetMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<CustomJwtAuthorizerForGetMCPToolset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthForGetMCPToolset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<CustomJwtAuthorizerForListMCPToolsets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthForListMCPToolsets>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendConfigurationForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_configuration: Option<CustomConfigurationForGetMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_mcp_configuration: Option<CustomMcpConfigurationForGetMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_configuration: Option<FunctionConfigurationForGetMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomConfigurationForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomJwtAuthorizerForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomJwtAuthorizerForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomMcpConfigurationForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_apmplus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_package: Option<PrivatePackageForGetMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_package: Option<PublicPackageForGetMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnvsForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FunctionConfigurationForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerConfigurationForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<AuthorizerForGetMCPServiceForInboundAuthorizerConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyAuthForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<ApiKeysForGetMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyAuthForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<ApiKeysForGetMCPToolset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyAuthForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<ApiKeysForListMCPToolsets>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MCPServiceForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_configuration: Option<BackendConfigurationForGetMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_authorizer_configuration: Option<InboundAuthorizerConfigurationForGetMCPService>,
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configurations: Option<Vec<NetworkConfigurationsForGetMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_authorizer_configuration: Option<OutboundAuthorizerConfigurationForGetMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_configuration: Option<ProtocolConfigurationForGetMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsForGetMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MCPServiceToolsForListMCPTools {
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MCPServicesForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configurations: Option<Vec<NetworkConfigurationsForGetMCPToolsetForMCPServices>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_configuration: Option<ProtocolConfigurationForGetMCPToolset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsForGetMCPToolsetForMCPServices>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MCPServicesForListMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configurations: Option<Vec<NetworkConfigurationsForListMCPServices>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_configuration: Option<ProtocolConfigurationForListMCPServices>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsForListMCPServices>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MCPServicesForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configurations: Option<Vec<NetworkConfigurationsForListMCPToolsetsForMCPServices>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_configuration: Option<ProtocolConfigurationForListMCPToolsets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MCPToolsetForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_runtimes: Option<Vec<AssociatedRuntimesForGetMCPToolset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerConfigurationForGetMCPToolset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "MCPServices")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_services: Option<Vec<MCPServicesForGetMCPToolset>>,
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configurations: Option<Vec<NetworkConfigurationsForGetMCPToolsetForMCPToolset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsForGetMCPToolsetForMCPToolset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MCPToolsetsForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerConfigurationForListMCPToolsets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "MCPServices")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_services: Option<Vec<MCPServicesForListMCPToolsets>>,
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configurations: Option<Vec<NetworkConfigurationsForListMCPToolsetsForMCPToolsets>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsForListMCPToolsets>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfigurationsForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfigurationForGetMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfigurationsForGetMCPToolsetForMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfigurationForGetMCPToolset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfigurationsForGetMCPToolsetForMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfigurationForGetMCPToolset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfigurationsForListMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfigurationForListMCPServices>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfigurationsForListMCPToolsetsForMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfigurationForListMCPToolsets>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfigurationsForListMCPToolsetsForMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfigurationForListMCPToolsets>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerConfigurationForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<AuthorizerForGetMCPServiceForOutboundAuthorizerConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PrivatePackageForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<EnvsForGetMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProtocolConfigurationForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_convert_configuration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProtocolConfigurationForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_convert_configuration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProtocolConfigurationForListMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_convert_configuration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProtocolConfigurationForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_convert_configuration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PublicPackageForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_config: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsForGetMCPToolsetForMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsForGetMCPToolsetForMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsForListMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfigurationForGetMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfigurationForGetMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfigurationForListMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfigurationForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_configuration: Option<BackendCustomForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_mcp_configuration: Option<BackendCustomMcpForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_configuration: Option<BackendFunctionForCreateMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_settings: Option<BackendCustomTlsSettingsForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomTlsSettingsForCreateMCPService {
    pub tls_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomMcpForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_package: Option<BackendCustomMcpPrivatePackageForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_package: Option<BackendCustomMcpPublicPackageForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_apmplus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomMcpPrivatePackageForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<BackendCustomMcpPrivatePackageEnvsItemForCreateMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomMcpPublicPackageForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_config: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendFunctionForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<InboundAuthorizerAuthorizerForCreateMCPService>,
    pub authorizer_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerAuthorizerForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<InboundAuthorizerAuthorizerCustomJwtAuthorizerForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<InboundAuthorizerAuthorizerKeyAuthForCreateMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerAuthorizerCustomJwtAuthorizerForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    pub discovery_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerAuthorizerKeyAuthForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<InboundAuthorizerAuthorizerKeyAuthApiKeysItemForCreateMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<NetworkVpcForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_private_network: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_public_network: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkVpcForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    pub vpc_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<OutboundAuthorizerAuthorizerForCreateMCPService>,
    pub authorizer_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerAuthorizerForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<OutboundAuthorizerAuthorizerKeyAuthForCreateMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerAuthorizerKeyAuthForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<OutboundAuthorizerAuthorizerKeyAuthApiKeysItemForCreateMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProtocolForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_api_configuration: Option<ProtocolHttpApiForCreateMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProtocolHttpApiForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomMcpPrivatePackageEnvsItemForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerAuthorizerKeyAuthApiKeysItemForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerAuthorizerKeyAuthApiKeysItemForCreateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsItemForCreateMCPService {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMCPServiceRequest {
    pub backend_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub protocol_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_configuration: Option<BackendForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_authorizer_configuration: Option<InboundAuthorizerForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_authorizer_configuration: Option<OutboundAuthorizerForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_configuration: Option<ProtocolForCreateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsItemForCreateMCPService>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMCPServiceResponse {
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerForCreateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<AuthorizerAuthorizerForCreateMCPToolset>,
    pub authorizer_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerAuthorizerForCreateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<AuthorizerAuthorizerCustomJwtAuthorizerForCreateMCPToolset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<AuthorizerAuthorizerKeyAuthForCreateMCPToolset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerAuthorizerCustomJwtAuthorizerForCreateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    pub discovery_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerAuthorizerKeyAuthForCreateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<AuthorizerAuthorizerKeyAuthApiKeysItemForCreateMCPToolset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkForCreateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<NetworkVpcForCreateMCPToolset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_private_network: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_public_network: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkVpcForCreateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    pub vpc_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerAuthorizerKeyAuthApiKeysItemForCreateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagsItemForCreateMCPToolset {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMCPToolsetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "MCPServiceIds")]
    pub mcp_service_ids: String,
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerForCreateMCPToolset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkForCreateMCPToolset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagsItemForCreateMCPToolset>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMCPToolsetResponse {
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteMCPServiceRequest {
    #[serde(rename = "MCPServiceId")]
    pub mcp_service_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteMCPServiceResponse {
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteMCPToolsetRequest {
    #[serde(rename = "MCPToolsetId")]
    pub mcp_toolset_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteMCPToolsetResponse {
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMCPServiceRequest {
    #[serde(rename = "MCPServiceId")]
    pub mcp_service_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMCPServiceResponse {
    #[serde(rename = "MCPService")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service: Option<MCPServiceForGetMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMCPToolsRequest {
    #[serde(rename = "MCPToolsetId")]
    pub mcp_toolset_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMCPToolsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMCPToolsetRequest {
    #[serde(rename = "MCPToolsetId")]
    pub mcp_toolset_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMCPToolsetResponse {
    #[serde(rename = "MCPToolset")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset: Option<MCPToolsetForGetMCPToolset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FiltersItemForListMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagFiltersItemForListMCPServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMCPServicesRequest {
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
    pub filters: Option<Vec<FiltersItemForListMCPServices>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<Vec<TagFiltersItemForListMCPServices>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMCPServicesResponse {
    #[serde(rename = "MCPServices")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_services: Option<Vec<MCPServicesForListMCPServices>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMCPToolsRequest {
    #[serde(rename = "MCPToolsetIds")]
    pub mcp_toolset_ids: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMCPToolsResponse {
    #[serde(rename = "MCPServiceTools")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_tools: Option<Vec<MCPServiceToolsForListMCPTools>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FiltersItemForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagFiltersItemForListMCPToolsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMCPToolsetsRequest {
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
    pub filters: Option<Vec<FiltersItemForListMCPToolsets>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<Vec<TagFiltersItemForListMCPToolsets>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMCPToolsetsResponse {
    #[serde(rename = "MCPToolsets")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolsets: Option<Vec<MCPToolsetsForListMCPToolsets>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_configuration: Option<BackendCustomForUpdateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_mcp_configuration: Option<BackendCustomMcpForUpdateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_configuration: Option<BackendFunctionForUpdateMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_settings: Option<BackendCustomTlsSettingsForUpdateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomTlsSettingsForUpdateMCPService {
    pub tls_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomMcpForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_package: Option<BackendCustomMcpPrivatePackageForUpdateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_package: Option<BackendCustomMcpPublicPackageForUpdateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_apmplus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomMcpPrivatePackageForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<BackendCustomMcpPrivatePackageEnvsItemForUpdateMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomMcpPublicPackageForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_config: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendFunctionForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<InboundAuthorizerAuthorizerForUpdateMCPService>,
    pub authorizer_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerAuthorizerForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_jwt_authorizer: Option<InboundAuthorizerAuthorizerCustomJwtAuthorizerForUpdateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<InboundAuthorizerAuthorizerKeyAuthForUpdateMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerAuthorizerCustomJwtAuthorizerForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,
    pub discovery_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerAuthorizerKeyAuthForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<InboundAuthorizerAuthorizerKeyAuthApiKeysItemForUpdateMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<OutboundAuthorizerAuthorizerForUpdateMCPService>,
    pub authorizer_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerAuthorizerForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<OutboundAuthorizerAuthorizerKeyAuthForUpdateMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerAuthorizerKeyAuthForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<OutboundAuthorizerAuthorizerKeyAuthApiKeysItemForUpdateMCPService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendCustomMcpPrivatePackageEnvsItemForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InboundAuthorizerAuthorizerKeyAuthApiKeysItemForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundAuthorizerAuthorizerKeyAuthApiKeysItemForUpdateMCPService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMCPServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_type: Option<String>,
    #[serde(rename = "MCPServiceId")]
    pub mcp_service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_configuration: Option<BackendForUpdateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_authorizer_configuration: Option<InboundAuthorizerForUpdateMCPService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_authorizer_configuration: Option<OutboundAuthorizerForUpdateMCPService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMCPServiceResponse {
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMCPToolsRequest {
    #[serde(rename = "MCPServiceId")]
    pub mcp_service_id: String,
    pub tools: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMCPToolsResponse {
    #[serde(rename = "MCPServiceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerForUpdateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<AuthorizerAuthorizerForUpdateMCPToolset>,
    pub authorizer_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerAuthorizerForUpdateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<AuthorizerAuthorizerKeyAuthForUpdateMCPToolset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerAuthorizerKeyAuthForUpdateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<Vec<AuthorizerAuthorizerKeyAuthApiKeysItemForUpdateMCPToolset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizerAuthorizerKeyAuthApiKeysItemForUpdateMCPToolset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMCPToolsetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "MCPServiceIds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_service_ids: Option<String>,
    #[serde(rename = "MCPToolsetId")]
    pub mcp_toolset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer_configuration: Option<AuthorizerForUpdateMCPToolset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMCPToolsetResponse {
    #[serde(rename = "MCPToolsetId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_toolset_id: Option<String>,
}
