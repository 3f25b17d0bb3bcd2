use super::helpers::{self, GlobalOptions};
use crate::cli::BuildFlags;
use crate::error::Result;
use crate::lifecycle::BuildOptions;
use crate::project::Project;

pub fn execute(project: &Project, flags: &BuildFlags, options: &GlobalOptions) -> Result<()> {
    let mut lc = helpers::lifecycle(project, options)?;
    println!("Launching {} ({})", lc.config().config.common.agent_name, lc.launch_type());
    lc.launch(&BuildOptions::from(flags))?;
    println!("✓ Launch complete");
    Ok(())
}
