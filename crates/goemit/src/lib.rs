pub mod config;
pub mod project;
pub mod regenerate;
pub mod runner;

pub use config::CliArgs;
pub use runner::{execute, RunConfig, RunReport};
