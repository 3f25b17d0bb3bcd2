use super::helpers::{self, GlobalOptions};
use crate::error::Result;
use crate::project::Project;

pub fn execute(project: &Project, options: &GlobalOptions) -> Result<()> {
    let mut lc = helpers::lifecycle(project, options)?;
    println!("Deploying {} ({})", lc.config().config.common.agent_name, lc.launch_type());
    lc.deploy()?;
    println!("✓ Deploy complete");
    Ok(())
}
