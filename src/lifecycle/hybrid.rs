//! `launch_type: hybrid`: build on this machine, push to Container Registry,
//! run on AgentKit Runtime.
//!
//! Global config defaults (CR instance, namespace, region) are applied to a
//! working copy of the strategy and never written back; only values this
//! module produces are recorded in `agentkit.yaml`.

use super::build::{build_image, BuildOptions};
use super::invoke::Auth;
use super::registry::{Registry, RegistryTarget};
use super::wait::{wait_for_status, WaitPolicy, READY_TIMEOUT, RELEASE_TIMEOUT};
use super::{timestamp, Lifecycle, StatusReport};
use crate::client::retry;
use crate::config::{
    is_invalid_value, CommonConfig, HybridStrategyConfig, DEFAULT_CR_INSTANCE_TEMPLATE, DEFAULT_CR_NAMESPACE,
};
use crate::docker::DockerCli;
use crate::error::{AgentkitError, Result};
use crate::platform::GlobalConfig;
use crate::sdk::cr::remote_image;
use crate::sdk::runtime::{
    AuthorizerCustomJwtAuthorizerForCreateRuntime, AuthorizerForCreateRuntime, AuthorizerKeyAuthForCreateRuntime,
    CreateRuntimeRequest, DeleteRuntimeRequest, EnvsItemForCreateRuntime, EnvsItemForUpdateRuntime,
    GetRuntimeRequest, GetRuntimeResponse, ReleaseRuntimeRequest, UpdateRuntimeRequest, API_KEY_LOCATION_HEADER,
    ARTIFACT_TYPE_IMAGE, DEFAULT_PROJECT_NAME, STATUS_READY, STATUS_UNRELEASED,
};
use crate::sdk::{AgentkitRuntimeClient, CrClient, StsClient};
use crate::template::{has_placeholders, TemplateRenderer};
use crate::utils::env::merge_runtime_envs;
use crate::utils::ids;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

const DEFAULT_AGENT_NAME: &str = "agentkit-app";
/// Downloaded runtime failure logs, relative to the project.
const FAILURE_LOG_DIR: &str = ".agentkit/logs";
const CR_SERVICE: &str = "cr";
const RUNTIME_SERVICE: &str = "agentkit";

pub const STATE_NOT_DEPLOYED: &str = "not_deployed";
pub const STATE_NOT_FOUND: &str = "not_found";

/// What a successful deploy leaves behind.
#[derive(Debug, Clone, Default, PartialEq)]
struct Deployed {
    runtime_id: String,
    endpoint: String,
    apikey: String,
}

/// Generated runtime names, filled in for every `Auto` field.
#[derive(Debug, Clone, PartialEq)]
struct RuntimeNames {
    runtime: String,
    role: String,
    apikey: String,
}

impl RuntimeNames {
    fn resolve(agent_name: &str, strategy: &HybridStrategyConfig) -> Self {
        let pick = |value: &str, generate: &dyn Fn() -> String| {
            if is_invalid_value(value) {
                generate()
            } else {
                value.to_string()
            }
        };
        Self {
            runtime: pick(&strategy.runtime_name, &|| ids::runtime_name(agent_name)),
            role: pick(&strategy.runtime_role_name, &ids::role_name),
            apikey: pick(&strategy.runtime_apikey_name, &ids::api_key_name),
        }
    }
}

fn agent_name(common: &CommonConfig) -> &str {
    if common.agent_name.is_empty() {
        DEFAULT_AGENT_NAME
    } else {
        &common.agent_name
    }
}

/// The hybrid section with global defaults applied.
fn effective_strategy(lc: &Lifecycle) -> Result<HybridStrategyConfig> {
    let mut strategy = lc.config.config.hybrid();
    strategy.apply_global_defaults(&GlobalConfig::load()?);
    Ok(strategy)
}

pub fn build(lc: &mut Lifecycle, options: &BuildOptions) -> Result<()> {
    let provider = lc.provider()?;
    let strategy = effective_strategy(lc)?;
    let common = lc.config.config.common.clone();
    let agent = agent_name(&common).to_string();

    let cr_ctx = lc.platform(strategy.region_for(CR_SERVICE))?;
    let renderer = TemplateRenderer::new()
        .with_account_resolver(|| StsClient::new(&cr_ctx)?.account_id())
        .with_var("agent_name", &agent);

    let image_tag = renderer.render(&strategy.image_tag)?;
    let local_image = format!("{}:{}", agent, image_tag);
    let built = build_image(
        &lc.config.config,
        &lc.project_dir(),
        provider,
        &local_image,
        options,
        lc.verbose,
    )?;

    let instance_from_template = is_invalid_value(&strategy.cr_instance_name);
    let target = RegistryTarget {
        instance: renderer.render(if instance_from_template {
            DEFAULT_CR_INSTANCE_TEMPLATE
        } else {
            &strategy.cr_instance_name
        })?,
        namespace: renderer.render(if is_invalid_value(&strategy.cr_namespace_name) {
            DEFAULT_CR_NAMESPACE
        } else {
            &strategy.cr_namespace_name
        })?,
        repository: if strategy.cr_repo_name.trim().is_empty() {
            agent.clone()
        } else {
            renderer.render(&strategy.cr_repo_name)?
        },
        instance_type: strategy.cr_auto_create_instance_type.clone(),
    };
    log::info!(
        "CR target {}/{}/{}",
        target.instance,
        target.namespace,
        target.repository
    );

    let registry = Registry::new(CrClient::new(&cr_ctx)?);
    registry.ensure(&target)?;
    registry.ensure_public_endpoint(&target.instance)?;
    let push = registry.push_target(&target.instance)?;

    DockerCli::login(&push.domain, &push.username, &push.token)?;
    println!("✓ Logged in to {}", push.domain);

    let remote = remote_image(&push.domain, &target.namespace, &target.repository, &image_tag);
    DockerCli::tag(&built.name, &remote, lc.verbose)?;
    println!("Pushing {}...", remote);
    let bar = (!lc.verbose).then(|| super::spinner(&format!("docker push {}", remote)));
    let pushed = DockerCli::push(&remote, lc.verbose);
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    pushed?;
    println!("✓ Image pushed: {}", remote);

    let hybrid = lc.config.config.hybrid_mut();
    hybrid.image_id = built.id;
    hybrid.full_image_name = built.name;
    hybrid.build_timestamp = timestamp();
    hybrid.cr_image_full_url = remote;
    if hybrid.cr_repo_name.trim().is_empty() {
        hybrid.cr_repo_name = target.repository;
    }
    // a name taken from the global config stays there
    if instance_from_template && is_invalid_value(&hybrid.cr_instance_name) {
        hybrid.cr_instance_name = target.instance;
    }
    lc.config.save()?;
    Ok(())
}

fn check_image(strategy: &HybridStrategyConfig) -> Result<()> {
    if !strategy.cr_image_full_url.is_empty() {
        return Ok(());
    }
    if has_placeholders(&strategy.cr_instance_name) || has_placeholders(&strategy.cr_namespace_name) {
        return Err(AgentkitError::InvalidConfig(
            "CR names contain unrendered template variables; configure credentials so the account id can be \
             resolved, then run `agentkit build`"
                .to_string(),
        ));
    }
    Err(AgentkitError::NotDeployed(
        "no image in Container Registry yet, run `agentkit build` first".to_string(),
    ))
}

fn authorizer(strategy: &HybridStrategyConfig, apikey_name: &str) -> AuthorizerForCreateRuntime {
    if strategy.uses_custom_jwt() {
        let clients: Vec<String> = strategy
            .runtime_jwt_allowed_clients
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        AuthorizerForCreateRuntime {
            custom_jwt_authorizer: Some(AuthorizerCustomJwtAuthorizerForCreateRuntime {
                discovery_url: strategy.runtime_jwt_discovery_url.trim().to_string(),
                allowed_clients: (!clients.is_empty()).then_some(clients),
            }),
            key_auth: None,
        }
    } else {
        AuthorizerForCreateRuntime {
            custom_jwt_authorizer: None,
            key_auth: Some(AuthorizerKeyAuthForCreateRuntime {
                api_key_location: Some(API_KEY_LOCATION_HEADER.to_string()),
                api_key_name: Some(apikey_name.to_string()),
            }),
        }
    }
}

fn create_request(
    common: &CommonConfig,
    strategy: &HybridStrategyConfig,
    names: &RuntimeNames,
    envs: &BTreeMap<String, String>,
) -> CreateRuntimeRequest {
    CreateRuntimeRequest {
        name: names.runtime.clone(),
        role_name: names.role.clone(),
        artifact_type: ARTIFACT_TYPE_IMAGE.to_string(),
        artifact_url: strategy.cr_image_full_url.clone(),
        description: Some(common.description.clone()).filter(|d| !is_invalid_value(d)),
        project_name: Some(DEFAULT_PROJECT_NAME.to_string()),
        authorizer_configuration: Some(authorizer(strategy, &names.apikey)),
        client_token: Some(ids::client_token()),
        apmplus_enable: Some(true),
        min_instance: Some(1),
        envs: Some(
            envs.iter()
                .map(|(key, value)| EnvsItemForCreateRuntime {
                    key: key.clone(),
                    value: Some(value.clone()),
                })
                .collect(),
        ),
        ..Default::default()
    }
}

fn update_request(
    common: &CommonConfig,
    strategy: &HybridStrategyConfig,
    envs: &BTreeMap<String, String>,
) -> UpdateRuntimeRequest {
    UpdateRuntimeRequest {
        runtime_id: strategy.runtime_id.clone(),
        artifact_url: Some(strategy.cr_image_full_url.clone()),
        description: Some(common.description.clone()).filter(|d| !is_invalid_value(d)),
        envs: Some(
            envs.iter()
                .map(|(key, value)| EnvsItemForUpdateRuntime {
                    key: key.clone(),
                    value: Some(value.clone()),
                })
                .collect(),
        ),
        ..Default::default()
    }
}

/// Endpoint and API key from a ready runtime.
fn deployed_from(runtime: &GetRuntimeResponse, runtime_id: &str, strategy: &HybridStrategyConfig) -> Deployed {
    let apikey = if strategy.uses_custom_jwt() {
        String::new()
    } else {
        runtime.api_key().unwrap_or_default().to_string()
    };
    Deployed {
        runtime_id: runtime_id.to_string(),
        endpoint: runtime.public_endpoint().unwrap_or_default().to_string(),
        apikey,
    }
}

fn get_runtime(client: &AgentkitRuntimeClient, runtime_id: &str) -> Result<GetRuntimeResponse> {
    retry(3, Duration::from_secs(1), || {
        client.get_runtime(&GetRuntimeRequest {
            runtime_id: runtime_id.to_string(),
        })
    })
}

fn create_runtime(
    client: &AgentkitRuntimeClient,
    request: &CreateRuntimeRequest,
    strategy: &HybridStrategyConfig,
    log_dir: &Path,
) -> Result<Deployed> {
    println!("Creating runtime {}...", request.name);
    let response = client.create_runtime(request)?;
    let runtime_id = response
        .runtime_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AgentkitError::Runtime("CreateRuntime returned no RuntimeId".to_string()))?;
    println!("✓ Runtime created: {}", runtime_id);

    let ready = wait_for_status(
        || get_runtime(client, &runtime_id),
        &[STATUS_READY],
        WaitPolicy::new(READY_TIMEOUT).with_log_dir(log_dir),
        "waiting for runtime to be ready",
    )?;
    Ok(deployed_from(&ready, &runtime_id, strategy))
}

fn update_runtime(
    client: &AgentkitRuntimeClient,
    request: &UpdateRuntimeRequest,
    strategy: &HybridStrategyConfig,
    log_dir: &Path,
) -> Result<Deployed> {
    let runtime_id = request.runtime_id.as_str();
    println!("Updating runtime {}...", runtime_id);

    let current = match get_runtime(client, runtime_id) {
        Ok(current) => current,
        Err(e) if e.is_not_found() => {
            return Err(AgentkitError::NotDeployed(format!(
                "runtime {} not found; clear launch_types.hybrid.runtime_id to create a new one",
                runtime_id
            )))
        }
        Err(e) => return Err(e),
    };
    if let Some(kind) = current.artifact_type.as_deref().filter(|k| *k != ARTIFACT_TYPE_IMAGE) {
        return Err(AgentkitError::Unsupported(format!(
            "runtime {} has artifact type {}, only {} runtimes can be updated",
            runtime_id, kind, ARTIFACT_TYPE_IMAGE
        )));
    }

    client.update_runtime(request)?;
    println!("✓ Update submitted");

    let mut runtime = wait_for_status(
        || get_runtime(client, runtime_id),
        &[STATUS_UNRELEASED, STATUS_READY],
        WaitPolicy::new(READY_TIMEOUT).with_log_dir(log_dir),
        "waiting for runtime update",
    )?;

    if runtime.status() == STATUS_UNRELEASED {
        println!("Releasing runtime {}...", runtime_id);
        client.release_runtime(&ReleaseRuntimeRequest {
            runtime_id: runtime_id.to_string(),
            version_number: None,
        })?;
        runtime = wait_for_status(
            || get_runtime(client, runtime_id),
            &[STATUS_READY],
            WaitPolicy::new(RELEASE_TIMEOUT).with_log_dir(log_dir),
            "waiting for runtime release",
        )?;
    }

    Ok(deployed_from(&runtime, runtime_id, strategy))
}

pub fn deploy(lc: &mut Lifecycle) -> Result<()> {
    let strategy = effective_strategy(lc)?;
    check_image(&strategy)?;

    let common = lc.config.config.common.clone();
    let envs = merge_runtime_envs(&lc.project_dir(), &common.runtime_envs, &strategy.runtime_envs)?;
    let ctx = lc.platform(strategy.region_for(RUNTIME_SERVICE))?;
    let client = AgentkitRuntimeClient::new(&ctx)?;

    let names = RuntimeNames::resolve(agent_name(&common), &strategy);
    let log_dir = lc.project_dir().join(FAILURE_LOG_DIR);
    let deployed = if is_invalid_value(&strategy.runtime_id) {
        create_runtime(&client, &create_request(&common, &strategy, &names, &envs), &strategy, &log_dir)?
    } else {
        update_runtime(&client, &update_request(&common, &strategy, &envs), &strategy, &log_dir)?
    };

    println!("✓ Runtime {} is ready", deployed.runtime_id);
    if !deployed.endpoint.is_empty() {
        println!("  Endpoint: {}", deployed.endpoint);
    }

    let hybrid = lc.config.config.hybrid_mut();
    hybrid.runtime_id = deployed.runtime_id;
    hybrid.runtime_endpoint = deployed.endpoint;
    hybrid.runtime_apikey = deployed.apikey;
    hybrid.runtime_name = names.runtime;
    hybrid.runtime_role_name = names.role;
    if !strategy.uses_custom_jwt() {
        hybrid.runtime_apikey_name = names.apikey;
    }
    hybrid.deploy_timestamp = timestamp();
    lc.config.save()?;
    Ok(())
}

/// Recorded endpoint and how to authenticate against it.
pub fn endpoint(lc: &Lifecycle) -> Result<(String, Auth)> {
    let strategy = lc.config.config.hybrid();
    if strategy.runtime_endpoint.is_empty() {
        return Err(AgentkitError::NotDeployed(
            "no runtime endpoint recorded, run `agentkit deploy` first".to_string(),
        ));
    }
    let auth = if strategy.uses_custom_jwt() {
        Auth::Jwt
    } else if strategy.runtime_apikey.is_empty() {
        log::warn!("no API key recorded for runtime {}", strategy.runtime_id);
        Auth::None
    } else {
        Auth::ApiKey(strategy.runtime_apikey)
    };
    Ok((strategy.runtime_endpoint, auth))
}

pub fn status(lc: &Lifecycle) -> Result<StatusReport> {
    let strategy = effective_strategy(lc)?;
    let report = StatusReport {
        launch_type: lc.launch_type().to_string(),
        ..Default::default()
    };

    if is_invalid_value(&strategy.runtime_id) {
        return Ok(StatusReport {
            state: STATE_NOT_DEPLOYED.to_string(),
            ..report
        }
        .detail("image", strategy.cr_image_full_url));
    }

    let ctx = lc.platform(strategy.region_for(RUNTIME_SERVICE))?;
    let client = AgentkitRuntimeClient::new(&ctx)?;
    let runtime = match get_runtime(&client, &strategy.runtime_id) {
        Ok(runtime) => runtime,
        Err(e) if e.is_not_found() => {
            return Ok(StatusReport {
                state: STATE_NOT_FOUND.to_string(),
                ..report
            }
            .detail("runtime_id", strategy.runtime_id))
        }
        Err(e) => return Err(e),
    };

    let endpoint = runtime
        .public_endpoint()
        .map(str::to_string)
        .or_else(|| Some(strategy.runtime_endpoint.clone()))
        .filter(|e| !e.is_empty());

    Ok(StatusReport {
        state: runtime.status().to_string(),
        endpoint,
        ..report
    }
    .detail("runtime_id", strategy.runtime_id)
    .detail("runtime_name", runtime.name.unwrap_or_default())
    .detail("region", ctx.service_region(RUNTIME_SERVICE)?)
    .detail("image", runtime.artifact_url.unwrap_or_default())
    .detail("status_message", runtime.status_message.unwrap_or_default())
    .detail("failed_logs", runtime.failed_log_file_url.unwrap_or_default())
    .detail("updated_at", runtime.updated_at.unwrap_or_default()))
}

/// Delete the runtime; one that is already gone only clears the record.
pub fn destroy(lc: &mut Lifecycle) -> Result<()> {
    let strategy = effective_strategy(lc)?;
    if is_invalid_value(&strategy.runtime_id) {
        println!("No runtime deployed, nothing to destroy");
        return Ok(());
    }

    let ctx = lc.platform(strategy.region_for(RUNTIME_SERVICE))?;
    let client = AgentkitRuntimeClient::new(&ctx)?;
    let request = DeleteRuntimeRequest {
        runtime_id: strategy.runtime_id.clone(),
    };
    match client.delete_runtime(&request) {
        Ok(_) => println!("✓ Runtime {} deleted", strategy.runtime_id),
        Err(e) if e.is_not_found() => println!("Runtime {} not found, clearing record", strategy.runtime_id),
        Err(e) => return Err(e),
    }

    lc.config.config.hybrid_mut().reset_runtime();
    lc.config.save()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AUTH_CUSTOM_JWT, AUTO};
    use crate::sdk::runtime::{KeyAuthForGetRuntime, NetworkConfigurationsForGetRuntime};

    fn strategy() -> HybridStrategyConfig {
        HybridStrategyConfig {
            cr_image_full_url: "cr.example.com/agentkit/demo:20240101".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_runtime_names_generated_for_auto() {
        let names = RuntimeNames::resolve("demo", &strategy());
        assert!(names.runtime.starts_with("demo-"));
        assert!(names.role.starts_with("AgentKit-Runtime-Default-ServiceRole-"));
        assert!(names.apikey.starts_with("API-KEY-"));

        let mut named = strategy();
        named.runtime_name = "fixed".to_string();
        named.runtime_role_name = "MyRole".to_string();
        named.runtime_apikey_name = AUTO.to_string();
        let names = RuntimeNames::resolve("demo", &named);
        assert_eq!(names.runtime, "fixed");
        assert_eq!(names.role, "MyRole");
        assert!(names.apikey.starts_with("API-KEY-"));
    }

    #[test]
    fn test_create_request_key_auth() {
        let mut common = CommonConfig::default();
        common.description = "weather agent".to_string();
        let names = RuntimeNames {
            runtime: "demo-abc".to_string(),
            role: "Role".to_string(),
            apikey: "API-KEY-1".to_string(),
        };
        let envs = BTreeMap::from([("MODEL".to_string(), "doubao".to_string())]);

        let request = create_request(&common, &strategy(), &names, &envs);
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["Name"], "demo-abc");
        assert_eq!(wire["RoleName"], "Role");
        assert_eq!(wire["ArtifactType"], "image");
        assert_eq!(wire["ProjectName"], "default");
        assert_eq!(wire["ApmplusEnable"], true);
        assert_eq!(wire["MinInstance"], 1);
        assert_eq!(wire["Description"], "weather agent");
        assert_eq!(wire["ClientToken"].as_str().unwrap().len(), 16);
        assert_eq!(wire["AuthorizerConfiguration"]["KeyAuth"]["ApiKeyName"], "API-KEY-1");
        assert_eq!(wire["AuthorizerConfiguration"]["KeyAuth"]["ApiKeyLocation"], "HEADER");
        assert_eq!(wire["Envs"][0]["Key"], "MODEL");
        assert_eq!(wire["Envs"][0]["Value"], "doubao");
    }

    #[test]
    fn test_create_request_custom_jwt() {
        let mut jwt = strategy();
        jwt.runtime_auth_type = AUTH_CUSTOM_JWT.to_string();
        jwt.runtime_jwt_discovery_url = "https://idp.example.com/.well-known/openid-configuration".to_string();
        jwt.runtime_jwt_allowed_clients = vec!["web".to_string(), " ".to_string()];

        let auth = authorizer(&jwt, "unused");
        assert!(auth.key_auth.is_none());
        let custom = auth.custom_jwt_authorizer.unwrap();
        assert_eq!(custom.allowed_clients, Some(vec!["web".to_string()]));

        jwt.runtime_jwt_allowed_clients.clear();
        let custom = authorizer(&jwt, "unused").custom_jwt_authorizer.unwrap();
        assert!(custom.allowed_clients.is_none());
    }

    #[test]
    fn test_update_request() {
        let mut existing = strategy();
        existing.runtime_id = "r-123".to_string();
        let request = update_request(&CommonConfig::default(), &existing, &BTreeMap::new());
        assert_eq!(request.runtime_id, "r-123");
        assert_eq!(request.artifact_url.as_deref(), Some("cr.example.com/agentkit/demo:20240101"));
        assert!(request.description.is_none());
        assert_eq!(request.envs, Some(Vec::new()));
    }

    #[test]
    fn test_check_image() {
        assert!(check_image(&strategy()).is_ok());

        let missing = HybridStrategyConfig::default();
        assert!(matches!(check_image(&missing), Err(AgentkitError::NotDeployed(_))));

        let mut templated = HybridStrategyConfig::default();
        templated.cr_instance_name = "agentkit-platform-{{account_id}}".to_string();
        assert!(matches!(check_image(&templated), Err(AgentkitError::InvalidConfig(_))));
    }

    #[test]
    fn test_deployed_from_runtime() {
        let runtime = GetRuntimeResponse {
            status: Some(STATUS_READY.to_string()),
            network_configurations: Some(vec![NetworkConfigurationsForGetRuntime {
                network_type: Some("public".to_string()),
                endpoint: Some("https://demo.apigateway.example.com".to_string()),
                ..Default::default()
            }]),
            authorizer_configuration: Some(crate::sdk::runtime::AuthorizerConfigurationForGetRuntime {
                key_auth: Some(KeyAuthForGetRuntime {
                    api_key: Some("secret".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let deployed = deployed_from(&runtime, "r-1", &strategy());
        assert_eq!(deployed.endpoint, "https://demo.apigateway.example.com");
        assert_eq!(deployed.apikey, "secret");

        let mut jwt = strategy();
        jwt.runtime_auth_type = AUTH_CUSTOM_JWT.to_string();
        assert_eq!(deployed_from(&runtime, "r-1", &jwt).apikey, "");
    }
}
