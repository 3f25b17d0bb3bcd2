//! Local Docker: the `docker` CLI wrapper plus the files a build needs.

pub mod base_images;
pub mod cli;
pub mod dockerfile;
pub mod ignore;

pub use base_images::BaseImages;
pub use cli::{ContainerState, DockerCli, RunOptions};
pub use dockerfile::{Decision, DockerfileInputs};
