//! Runtime configuration: project root and log level

use crate::error::{PatchError, Result};
use std::path::PathBuf;

/// Environment variable naming the agent project root.
pub const ROOT_ENV: &str = "DASHPATCH_ROOT";

/// Where the project root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Flag,
    Env,
    CurrentDir,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub root_source: RootSource,
    pub verbosity: u8,
}

impl Config {
    /// Resolve configuration: `--root` wins, then DASHPATCH_ROOT, then the current directory.
    pub fn resolve(root_flag: Option<PathBuf>, verbosity: u8) -> Result<Self> {
        Self::resolve_with(root_flag, std::env::var(ROOT_ENV).ok(), verbosity)
    }

    fn resolve_with(
        root_flag: Option<PathBuf>,
        root_env: Option<String>,
        verbosity: u8,
    ) -> Result<Self> {
        if let Some(root) = root_flag {
            return Ok(Config {
                root,
                root_source: RootSource::Flag,
                verbosity,
            });
        }

        if let Some(value) = root_env {
            if value.trim().is_empty() {
                return Err(PatchError::Config(format!(
                    "{} is set but empty. Unset it or point it at the project root.",
                    ROOT_ENV
                )));
            }
            return Ok(Config {
                root: PathBuf::from(value),
                root_source: RootSource::Env,
                verbosity,
            });
        }

        Ok(Config {
            root: std::env::current_dir()?,
            root_source: RootSource::CurrentDir,
            verbosity,
        })
    }

    /// Default tracing filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
