use crate::archive::ProjectArchiver;
use crate::error::Result;
use crate::project::Project;
use crate::utils::path::display_relative;
use std::path::Path;

const DEFAULT_OUTPUT_DIR: &str = "dist";

pub fn execute(project: &Project, output: Option<&Path>) -> Result<()> {
    let name = if project.has_config() {
        project.load_config()?.config.common.agent_name
    } else {
        project.default_name().to_string()
    };
    let out_dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => project.root().join(DEFAULT_OUTPUT_DIR),
    };

    let archiver = ProjectArchiver::new(project.root())?.skipping(&out_dir);
    let files = archiver.files()?;
    log::debug!("packaging {} files", files.len());

    let archive = archiver.create(&out_dir, &name)?;
    println!(
        "✓ Packaged {} files into {}",
        files.len(),
        display_relative(&archive, project.root())
    );
    Ok(())
}
