use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod flags;
pub use flags::{BuildFlags, InitFlags, InvokeFlags};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print agentkit.yaml as it would be saved
    Show,

    /// Print one value by dotted key (e.g. common.agent_name)
    Get {
        /// Dotted key
        key: String,
    },

    /// Set one value by dotted key and save
    Set {
        /// Dotted key
        key: String,

        /// Value, parsed as a YAML scalar
        value: String,
    },

    /// Validate agentkit.yaml
    Validate,

    /// Global configuration (~/.agentkit/config.yaml)
    Global {
        #[command(subcommand)]
        command: GlobalCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum GlobalCommands {
    /// Print the global configuration
    Show,

    /// Set one value by dotted key and save
    Set {
        /// Dotted key (e.g. volcengine.region)
        key: String,

        /// Value, parsed as a YAML scalar
        value: String,
    },
}

/// list / get / delete, shared by every control-plane resource.
#[derive(Subcommand, Debug)]
pub enum ResourceCommands {
    /// List resources
    List {
        /// Page size
        #[arg(long, default_value = "20")]
        page_size: i64,

        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: i64,
    },

    /// Show one resource
    Get {
        /// Resource id
        id: String,
    },

    /// Delete one resource
    #[command(alias = "rm")]
    Delete {
        /// Resource id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "agentkit")]
#[command(about = "Build, deploy and operate agents on Volcengine AgentKit", long_about = None)]
#[command(version = env!("AGENTKIT_VERSION"))]
#[command(after_help = "\
TYPICAL FLOW:
  agentkit init my_agent             Write agentkit.yaml and .dockerignore
  agentkit launch                    Build the image and deploy it
  agentkit invoke \"hello\"            Send a prompt to the deployed agent
  agentkit destroy                   Tear everything down

For details about a specific command, use:
  agentkit <command> --help")]
pub struct Cli {
    /// Show verbose output including docker logs
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Project directory (default: current directory)
    #[arg(long = "project-dir", global = true)]
    pub project_dir: Option<PathBuf>,

    /// Config file, relative to the project directory (default: agentkit.yaml)
    #[arg(long = "config-file", global = true)]
    pub config_file: Option<PathBuf>,

    /// Cloud provider: volcengine or byteplus
    #[arg(long, global = true)]
    pub provider: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create agentkit.yaml for a new agent project
    Init(InitFlags),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Build the agent image
    Build(BuildFlags),

    /// Deploy the last built image
    Deploy,

    /// Build then deploy
    #[command(long_about = "Build then deploy.\n\n\
        Equivalent to 'agentkit build' followed by 'agentkit deploy'.")]
    Launch(BuildFlags),

    /// Send a request to the deployed agent
    Invoke(InvokeFlags),

    /// Show deployment status
    Status,

    /// Remove the deployment and everything it recorded
    Destroy {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show version information
    Version,

    /// Generate a Rust client from an API definition
    #[command(long_about = "Generate a Rust client from an API definition.\n\n\
        With SCHEMA and --output: generate one file.\n\
        With --manifest: generate every entry listed in the manifest.\n\
        --check fails instead of writing when a file is out of date.")]
    Codegen {
        /// API definition (JSON)
        #[arg(required_unless_present = "manifest", requires = "output")]
        schema: Option<PathBuf>,

        /// Output file
        #[arg(short = 'o', long, conflicts_with = "manifest")]
        output: Option<PathBuf>,

        /// Manifest listing schema/output pairs
        #[arg(long, conflicts_with = "schema")]
        manifest: Option<PathBuf>,

        /// Report stale files without writing
        #[arg(long)]
        check: bool,
    },

    /// Write a source archive of the project
    Package {
        /// Output directory (default: <project>/dist)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// AgentKit runtimes
    Runtime {
        #[command(subcommand)]
        command: ResourceCommands,
    },

    /// Memory collections
    Memory {
        #[command(subcommand)]
        command: ResourceCommands,
    },

    /// Knowledge bases
    Knowledge {
        #[command(subcommand)]
        command: ResourceCommands,
    },

    /// Tools
    Tools {
        #[command(subcommand)]
        command: ResourceCommands,
    },

    /// MCP services
    Mcp {
        #[command(subcommand)]
        command: ResourceCommands,
    },

    /// Skills
    Skills {
        #[command(subcommand)]
        command: ResourceCommands,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["agentkit", "status", "-v", "--project-dir", "/tmp/demo"]);
        assert!(cli.verbose);
        assert_eq!(cli.project_dir, Some(PathBuf::from("/tmp/demo")));
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_codegen_requires_schema_or_manifest() {
        assert!(Cli::try_parse_from(["agentkit", "codegen"]).is_err());
        assert!(Cli::try_parse_from(["agentkit", "codegen", "--manifest", "codegen.toml", "--check"]).is_ok());
        assert!(Cli::try_parse_from(["agentkit", "codegen", "api.json", "-o", "out.rs"]).is_ok());
        assert!(Cli::try_parse_from(["agentkit", "codegen", "api.json"]).is_err());
    }

    #[test]
    fn test_resource_delete() {
        let cli = Cli::parse_from(["agentkit", "memory", "rm", "mem-123", "-y"]);
        match cli.command {
            Commands::Memory {
                command: ResourceCommands::Delete { id, yes },
            } => {
                assert_eq!(id, "mem-123");
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
