//! `list` / `get` / `delete` for the control-plane resources.

use super::helpers::{confirm, print_json, GlobalOptions};
use crate::cli::ResourceCommands;
use crate::error::Result;
use crate::platform::{provider, Env, GlobalConfig, PlatformContext};
use crate::project::Project;
use crate::sdk::{
    knowledge, mcp, memory, runtime, skills, tools, AgentkitKnowledgeClient, AgentkitMcpClient,
    AgentkitMemoryClient, AgentkitRuntimeClient, AgentkitSkillsClient, AgentkitToolsClient,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Runtime,
    Memory,
    Knowledge,
    Tools,
    Mcp,
    Skills,
}

impl Resource {
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Runtime => "runtime",
            Resource::Memory => "memory collection",
            Resource::Knowledge => "knowledge base",
            Resource::Tools => "tool",
            Resource::Mcp => "MCP service",
            Resource::Skills => "skill",
        }
    }
}

/// Platform context for the project's provider, or the global default
/// when run outside a project.
fn platform(project: &Project, explicit: Option<&str>) -> Result<PlatformContext> {
    let global = GlobalConfig::load()?;
    let env = Env::from_process();
    let project_provider = if project.has_config() {
        project.load_config()?.config.common.cloud_provider
    } else {
        None
    };
    let (provider, source) = provider::resolve_with_source(explicit, project_provider.as_deref(), &env, &global)?;
    log::debug!("cloud provider {} (from {})", provider, source.as_str());
    Ok(PlatformContext::new(provider, global, env))
}

pub fn execute(
    project: &Project,
    options: &GlobalOptions,
    resource: Resource,
    command: &ResourceCommands,
) -> Result<()> {
    let ctx = platform(project, options.provider.as_deref())?;
    match command {
        ResourceCommands::List { page_size, page } => list(&ctx, resource, *page_size, *page),
        ResourceCommands::Get { id } => get(&ctx, resource, id),
        ResourceCommands::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete {} {}?", resource.label(), id))? {
                println!("Aborted.");
                return Ok(());
            }
            delete(&ctx, resource, id)?;
            println!("✓ Deleted {} {}", resource.label(), id);
            Ok(())
        }
    }
}

fn list(ctx: &PlatformContext, resource: Resource, page_size: i64, page: i64) -> Result<()> {
    let page_size = Some(page_size);
    let page_number = Some(page);
    match resource {
        Resource::Runtime => print_json(&AgentkitRuntimeClient::new(ctx)?.list_runtimes(
            &runtime::ListRuntimesRequest {
                page_size,
                page_number,
                ..Default::default()
            },
        )?),
        Resource::Memory => print_json(&AgentkitMemoryClient::new(ctx)?.list_memory_collections(
            &memory::ListMemoryCollectionsRequest {
                page_size,
                page_number,
                ..Default::default()
            },
        )?),
        Resource::Knowledge => print_json(&AgentkitKnowledgeClient::new(ctx)?.list_knowledge_bases(
            &knowledge::ListKnowledgeBasesRequest {
                page_size,
                page_number,
                ..Default::default()
            },
        )?),
        Resource::Tools => print_json(&AgentkitToolsClient::new(ctx)?.list_tools(&tools::ListToolsRequest {
            page_size,
            page_number,
            ..Default::default()
        })?),
        Resource::Mcp => print_json(&AgentkitMcpClient::new(ctx)?.list_mcp_services(
            &mcp::ListMCPServicesRequest {
                page_size,
                page_number,
                ..Default::default()
            },
        )?),
        Resource::Skills => print_json(&AgentkitSkillsClient::new(ctx)?.list_skills(&skills::ListSkillsRequest {
            page_size,
            page_number,
            ..Default::default()
        })?),
    }
}

fn get(ctx: &PlatformContext, resource: Resource, id: &str) -> Result<()> {
    let id = id.to_string();
    match resource {
        Resource::Runtime => print_json(
            &AgentkitRuntimeClient::new(ctx)?.get_runtime(&runtime::GetRuntimeRequest { runtime_id: id })?,
        ),
        Resource::Memory => print_json(
            &AgentkitMemoryClient::new(ctx)?
                .get_memory_collection(&memory::GetMemoryCollectionRequest { memory_id: id })?,
        ),
        Resource::Knowledge => print_json(
            &AgentkitKnowledgeClient::new(ctx)?
                .get_knowledge_base(&knowledge::GetKnowledgeBaseRequest { knowledge_id: id })?,
        ),
        Resource::Tools => {
            print_json(&AgentkitToolsClient::new(ctx)?.get_tool(&tools::GetToolRequest { tool_id: id })?)
        }
        Resource::Mcp => print_json(
            &AgentkitMcpClient::new(ctx)?.get_mcp_service(&mcp::GetMCPServiceRequest { mcp_service_id: id })?,
        ),
        Resource::Skills => print_json(&AgentkitSkillsClient::new(ctx)?.get_skill(&skills::GetSkillRequest { id })?),
    }
}

fn delete(ctx: &PlatformContext, resource: Resource, id: &str) -> Result<()> {
    let id = id.to_string();
    match resource {
        Resource::Runtime => {
            AgentkitRuntimeClient::new(ctx)?.delete_runtime(&runtime::DeleteRuntimeRequest { runtime_id: id })?;
        }
        Resource::Memory => {
            AgentkitMemoryClient::new(ctx)?
                .delete_memory_collection(&memory::DeleteMemoryCollectionRequest { memory_id: id })?;
        }
        Resource::Knowledge => {
            AgentkitKnowledgeClient::new(ctx)?
                .delete_knowledge_base(&knowledge::DeleteKnowledgeBaseRequest { knowledge_id: id })?;
        }
        Resource::Tools => {
            AgentkitToolsClient::new(ctx)?.delete_tool(&tools::DeleteToolRequest { tool_id: Some(id) })?;
        }
        Resource::Mcp => {
            AgentkitMcpClient::new(ctx)?.delete_mcp_service(&mcp::DeleteMCPServiceRequest { mcp_service_id: id })?;
        }
        Resource::Skills => {
            AgentkitSkillsClient::new(ctx)?.delete_skill(&skills::DeleteSkillRequest { id })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Resource::Memory.label(), "memory collection");
        assert_eq!(Resource::Mcp.label(), "MCP service");
    }
}
