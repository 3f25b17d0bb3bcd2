use crate::error::Result;
use crate::version;

pub fn execute() -> Result<()> {
    println!("{} {}", version::PKG_NAME, version::VERSION);
    println!("  commit:      {}", version::GIT_HASH);
    println!("  api version: {}", version::AGENTKIT_API_VERSION);
    println!("  platform:    {}", version::current_platform());
    Ok(())
}
