//! Typed clients for the AgentKit OpenAPI services.
//!
//! Every client wraps a [`ServiceClient`](crate::client::ServiceClient) and
//! exposes one method per action. Request and response types mirror the wire
//! shapes (PascalCase keys, optional fields omitted when unset).

/// Declare a typed client: one method per `(Action)` with its request and
/// response types.
macro_rules! service_client {
    (
        $(#[$meta:meta])*
        $name:ident => $service:literal {
            $( $method:ident($action:literal): $req:ty => $resp:ty; )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            inner: $crate::client::ServiceClient,
        }

        impl $name {
            /// Service key used for endpoint and credential resolution.
            pub const SERVICE: &'static str = $service;

            /// Every action this client can call, in declaration order.
            pub const ACTIONS: &'static [&'static str] = &[$($action),*];

            pub fn new(ctx: &$crate::platform::PlatformContext) -> $crate::error::Result<Self> {
                Ok(Self::from_client($crate::client::ServiceClient::new($service, ctx)?))
            }

            pub fn from_client(inner: $crate::client::ServiceClient) -> Self {
                Self { inner }
            }

            pub fn client(&self) -> &$crate::client::ServiceClient {
                &self.inner
            }

            $(
                #[doc = concat!("Call `", $action, "`.")]
                pub fn $method(&self, request: &$req) -> $crate::error::Result<$resp> {
                    self.inner.invoke($action, request)
                }
            )*
        }
    };
}

pub mod account;
pub mod cr;
pub mod knowledge;
pub mod mcp;
pub mod memory;
pub mod runtime;
pub mod skills;
pub mod sts;
pub mod tools;

pub use account::AgentkitAccountClient;
pub use cr::CrClient;
pub use knowledge::AgentkitKnowledgeClient;
pub use mcp::AgentkitMcpClient;
pub use memory::AgentkitMemoryClient;
pub use runtime::AgentkitRuntimeClient;
pub use skills::AgentkitSkillsClient;
pub use sts::StsClient;
pub use tools::AgentkitToolsClient;
