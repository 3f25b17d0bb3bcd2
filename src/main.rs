#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use agentkit::cli::{Cli, Commands};
use agentkit::commands;
use agentkit::commands::helpers::GlobalOptions;
use agentkit::commands::resources::Resource;
use agentkit::project::Project;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Commands that don't need a project
    match &cli.command {
        Commands::Version => {
            commands::version::execute()?;
            return Ok(());
        }
        Commands::Codegen {
            schema,
            output,
            manifest,
            check,
        } => {
            commands::codegen::execute(schema.as_deref(), output.as_deref(), manifest.as_deref(), *check)?;
            return Ok(());
        }
        _ => {}
    }

    let project = Project::detect(cli.project_dir.as_deref(), cli.config_file.as_deref())?;
    let options = GlobalOptions {
        verbose: cli.verbose,
        provider: cli.provider.clone(),
    };

    match &cli.command {
        Commands::Init(flags) => commands::init::execute(&project, flags)?,
        Commands::Config { command } => commands::config::execute(&project, command)?,
        Commands::Build(flags) => commands::build::execute(&project, flags, &options)?,
        Commands::Deploy => commands::deploy::execute(&project, &options)?,
        Commands::Launch(flags) => commands::launch::execute(&project, flags, &options)?,
        Commands::Invoke(flags) => commands::invoke::execute(&project, flags, &options)?,
        Commands::Status => commands::status::execute(&project, &options)?,
        Commands::Destroy { yes } => commands::destroy::execute(&project, *yes, &options)?,
        Commands::Package { output } => commands::package::execute(&project, output.as_deref())?,
        Commands::Runtime { command } => commands::resources::execute(&project, &options, Resource::Runtime, command)?,
        Commands::Memory { command } => commands::resources::execute(&project, &options, Resource::Memory, command)?,
        Commands::Knowledge { command } => commands::resources::execute(&project, &options, Resource::Knowledge, command)?,
        Commands::Tools { command } => commands::resources::execute(&project, &options, Resource::Tools, command)?,
        Commands::Mcp { command } => commands::resources::execute(&project, &options, Resource::Mcp, command)?,
        Commands::Skills { command } => commands::resources::execute(&project, &options, Resource::Skills, command)?,
        Commands::Version | Commands::Codegen { .. } => {}
    }

    Ok(())
}
