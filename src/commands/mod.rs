pub mod build;
pub mod codegen;
pub mod config;
pub mod deploy;
pub mod destroy;
pub mod helpers;
pub mod init;
pub mod invoke;
pub mod launch;
pub mod package;
pub mod resources;
pub mod status;
pub mod version;
