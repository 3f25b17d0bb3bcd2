use super::helpers::{self, GlobalOptions};
use crate::cli::BuildFlags;
use crate::error::Result;
use crate::lifecycle::BuildOptions;
use crate::project::Project;

impl From<&BuildFlags> for BuildOptions {
    fn from(flags: &BuildFlags) -> Self {
        BuildOptions {
            regenerate_dockerfile: flags.regenerate_dockerfile,
            platform: flags.platform.clone(),
        }
    }
}

pub fn execute(project: &Project, flags: &BuildFlags, options: &GlobalOptions) -> Result<()> {
    let mut lc = helpers::lifecycle(project, options)?;
    println!("Building {} ({})", lc.config().config.common.agent_name, lc.launch_type());
    lc.build(&BuildOptions::from(flags))?;
    println!("✓ Build complete");
    Ok(())
}
