//! Infrastructure layer - External I/O and runtime configuration

pub mod config;
pub mod logging;
pub mod target;

pub use config::{Config, RootSource, ROOT_ENV};
pub use target::TargetFile;
