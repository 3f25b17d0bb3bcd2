#![forbid(unsafe_code)]

pub mod archive;
pub mod cli;
pub mod client;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod docker;
pub mod error;
pub mod lifecycle;
pub mod platform;
pub mod project;
pub mod sdk;
pub mod sign;
pub mod template;
pub mod utils;
pub mod version;
