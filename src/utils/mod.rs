pub mod env;
pub mod ids;
pub mod path;
pub mod shell;
pub mod yaml;
