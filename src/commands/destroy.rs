use super::helpers::{self, GlobalOptions};
use crate::error::Result;
use crate::project::Project;

pub fn execute(project: &Project, yes: bool, options: &GlobalOptions) -> Result<()> {
    let mut lc = helpers::lifecycle(project, options)?;
    let agent_name = lc.config().config.common.agent_name.clone();

    println!("Agent: {} ({})", agent_name, lc.launch_type());
    println!("This will remove the deployment and clear its recorded state.");
    println!();

    if !yes && !helpers::confirm("Destroy deployment?")? {
        println!("Aborted.");
        return Ok(());
    }

    lc.destroy()?;
    println!("✓ Destroyed {}", agent_name);
    Ok(())
}
