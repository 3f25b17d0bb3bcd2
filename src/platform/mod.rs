//! Cloud provider selection and per-service endpoint, region and credential
//! resolution.

pub mod context;
pub mod env;
pub mod global_config;
pub mod provider;
pub mod services;

pub use context::{Credentials, Endpoint, PlatformContext};
pub use env::Env;
pub use global_config::GlobalConfig;
pub use provider::{CloudProvider, ProviderSource};
