//! Container Registry plumbing for hybrid deploys: make sure the instance,
//! namespace and repository exist, open the public endpoint, and hand out
//! push credentials.

use crate::client::retry;
use crate::error::{AgentkitError, Result};
use crate::sdk::cr::{
    CreateEndpointAclPoliciesRequest, CreateNamespaceRequest, CreateRegistryRequest, CreateRepositoryRequest,
    GetAuthorizationTokenResponse, ListRegistriesRequest, RegistryRequest, ResourceTag, UpdatePublicEndpointRequest,
    PHASE_FAILED, PHASE_NONEXIST, PHASE_RUNNING,
};
use crate::sdk::CrClient;
use std::time::{Duration, Instant};

const PROVIDER_TAG: (&str, &str) = ("provider", "agentkit-cli");
const REGISTRY_POLL_INTERVAL: Duration = Duration::from_secs(30);
const REGISTRY_READY_TIMEOUT: Duration = Duration::from_secs(1800);
const ENDPOINT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const ENDPOINT_READY_TIMEOUT: Duration = Duration::from_secs(120);
const ENDPOINT_ENABLED: &str = "Enabled";

/// Names of the registry resources to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryTarget {
    pub instance: String,
    pub namespace: String,
    pub repository: String,
    pub instance_type: String,
}

/// Where a pushed image lives and how to log in.
#[derive(Debug, Clone)]
pub struct PushTarget {
    pub domain: String,
    pub username: String,
    pub token: String,
}

pub struct Registry {
    client: CrClient,
    poll_interval: Duration,
}

fn create_error(resource: &str, err: AgentkitError) -> AgentkitError {
    let text = err.to_string();
    let message = if text.contains("QuotaExceeded") {
        format!(
            "Failed to create CR {}: account quota exceeded.\n  \
             Micro and Enterprise instance quotas are counted separately.\n  \
             To reuse an existing instance set launch_types.hybrid.cr_instance_name \
             (agentkit config set launch_types.hybrid.cr_instance_name <name>) \
             or cr.instance_name in ~/.agentkit/config.yaml",
            resource
        )
    } else if text.contains("Insufficient.Balance") {
        format!(
            "Failed to create CR {}: insufficient balance. Top up the account to create a registry instance",
            resource
        )
    } else {
        format!("Failed to create CR {}: {}", resource, text)
    };
    AgentkitError::Runtime(message)
}

impl Registry {
    pub fn new(client: CrClient) -> Self {
        Self {
            client,
            poll_interval: REGISTRY_POLL_INTERVAL,
        }
    }

    /// Instance, namespace and repository, in that order.
    pub fn ensure(&self, target: &RegistryTarget) -> Result<()> {
        self.ensure_instance(&target.instance, &target.instance_type)?;
        self.ensure_namespace(&target.instance, &target.namespace)?;
        self.ensure_repository(target)?;
        Ok(())
    }

    fn phase(&self, instance: &str) -> Result<String> {
        let response = self.client.list_registries(&ListRegistriesRequest::by_name(instance))?;
        Ok(response.phase().to_string())
    }

    pub fn ensure_instance(&self, instance: &str, instance_type: &str) -> Result<()> {
        let phase = self.phase(instance)?;
        if phase == PHASE_RUNNING {
            println!("✓ CR instance {} is running", instance);
            return Ok(());
        }

        if phase == PHASE_NONEXIST {
            println!("Creating {} CR instance {}...", instance_type, instance);
            let request = CreateRegistryRequest {
                name: instance.to_string(),
                r#type: instance_type.to_string(),
                resource_tags: vec![ResourceTag {
                    key: PROVIDER_TAG.0.to_string(),
                    value: PROVIDER_TAG.1.to_string(),
                }],
            };
            match self.client.create_registry(&request) {
                Ok(_) => {}
                Err(e) if e.is_already_exists() => {
                    log::info!("CR instance {} already exists", instance);
                }
                Err(e) => return Err(create_error("instance", e)),
            }
        } else {
            println!("CR instance {} is {}, waiting for it to be ready...", instance, phase);
        }

        self.wait_running(instance)
    }

    fn wait_running(&self, instance: &str) -> Result<()> {
        let started = Instant::now();
        let bar = super::spinner(&format!("waiting for CR instance {}", instance));
        loop {
            let phase = match self.phase(instance) {
                Ok(phase) => phase,
                Err(e) => {
                    bar.finish_and_clear();
                    return Err(e);
                }
            };
            if phase == PHASE_RUNNING {
                bar.finish_and_clear();
                println!("✓ CR instance {} is running", instance);
                return Ok(());
            }
            if phase == PHASE_FAILED || started.elapsed() >= REGISTRY_READY_TIMEOUT {
                bar.finish_and_clear();
                return Err(AgentkitError::Runtime(format!(
                    "CR instance {} did not become ready (phase {})",
                    instance, phase
                )));
            }
            bar.set_message(format!("waiting for CR instance {} (phase: {})", instance, phase));
            std::thread::sleep(self.poll_interval);
        }
    }

    pub fn ensure_namespace(&self, instance: &str, namespace: &str) -> Result<()> {
        let request = CreateNamespaceRequest {
            name: namespace.to_string(),
            registry: instance.to_string(),
        };
        match self.client.create_namespace(&request) {
            Ok(_) => println!("✓ CR namespace {} created", namespace),
            Err(e) if e.is_already_exists() => println!("✓ CR namespace {} exists", namespace),
            Err(e) => return Err(create_error("namespace", e)),
        }
        Ok(())
    }

    pub fn ensure_repository(&self, target: &RegistryTarget) -> Result<()> {
        let request = CreateRepositoryRequest {
            name: target.repository.clone(),
            registry: target.instance.clone(),
            namespace: target.namespace.clone(),
            description: Some("Created by agentkit".to_string()),
        };
        match self.client.create_repository(&request) {
            Ok(_) => println!("✓ CR repository {} created", target.repository),
            Err(e) if e.is_already_exists() => println!("✓ CR repository {} exists", target.repository),
            Err(e) => return Err(create_error("repository", e)),
        }
        Ok(())
    }

    /// Open the public endpoint to everyone and wait until it is enabled.
    pub fn ensure_public_endpoint(&self, instance: &str) -> Result<()> {
        let current = self.client.get_public_endpoint(&RegistryRequest::new(instance))?;
        if current.enabled && current.status == ENDPOINT_ENABLED {
            return Ok(());
        }

        if !current.enabled {
            println!("Enabling public endpoint of CR instance {}...", instance);
            self.client.update_public_endpoint(&UpdatePublicEndpointRequest {
                registry: instance.to_string(),
                enabled: true,
            })?;
            let acl = CreateEndpointAclPoliciesRequest {
                registry: instance.to_string(),
                r#type: "Public".to_string(),
                entries: vec!["0.0.0.0/0".to_string()],
                description: "Created by agentkit".to_string(),
            };
            match self.client.create_endpoint_acl_policies(&acl) {
                Ok(_) => {}
                Err(e) if e.is_already_exists() => {}
                Err(e) => return Err(e),
            }
        }

        let started = Instant::now();
        loop {
            let endpoint = self.client.get_public_endpoint(&RegistryRequest::new(instance))?;
            if endpoint.status == ENDPOINT_ENABLED {
                println!("✓ CR public endpoint enabled");
                return Ok(());
            }
            if started.elapsed() >= ENDPOINT_READY_TIMEOUT {
                return Err(AgentkitError::Runtime(format!(
                    "public endpoint of CR instance {} is still {}",
                    instance, endpoint.status
                )));
            }
            std::thread::sleep(ENDPOINT_POLL_INTERVAL);
        }
    }

    /// Default domain and a temporary login token.
    pub fn push_target(&self, instance: &str) -> Result<PushTarget> {
        let domains = self.client.list_domains(&RegistryRequest::new(instance))?;
        let domain = domains
            .default_domain()
            .ok_or_else(|| AgentkitError::Runtime(format!("CR instance {} has no default domain", instance)))?
            .to_string();

        let GetAuthorizationTokenResponse { username, token, .. } = retry(3, Duration::from_secs(1), || {
            self.client.get_authorization_token(&RegistryRequest::new(instance))
        })?;
        if token.is_empty() {
            return Err(AgentkitError::Credentials(format!(
                "CR instance {} returned an empty authorization token",
                instance
            )));
        }

        Ok(PushTarget { domain, username, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(code: &str) -> AgentkitError {
        AgentkitError::Api {
            code: code.to_string(),
            message: "boom".to_string(),
            action: "CreateRegistry".to_string(),
        }
    }

    #[test]
    fn test_create_error_messages() {
        let quota = create_error("instance", api_error("QuotaExceeded.Registry")).to_string();
        assert!(quota.contains("quota exceeded"));
        assert!(quota.contains("cr_instance_name"));

        let balance = create_error("instance", api_error("Insufficient.Balance")).to_string();
        assert!(balance.contains("insufficient balance"));

        let other = create_error("namespace", api_error("InternalError")).to_string();
        assert!(other.contains("Failed to create CR namespace"));
        assert!(other.contains("InternalError"));
    }
}
