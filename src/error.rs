//! Error types for dashpatch

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dashpatch
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Target file not found: {0}")]
    TargetNotFound(PathBuf),

    #[error("Cannot decode byte 0x{byte:02X} at offset {offset} as cp1252")]
    Decode { byte: u8, offset: usize },

    #[error("Cannot encode character {ch:?} at index {index} as cp1252")]
    Encode { ch: char, index: usize },

    #[error("Patch already applied to {} at line {}", path.display(), index + 1)]
    AlreadyApplied { path: PathBuf, index: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PatchError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchError::TargetNotFound(_) => 2,
            PatchError::Decode { .. } | PatchError::Encode { .. } => 3,
            PatchError::AlreadyApplied { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PatchError::TargetNotFound(path) => {
                format!(
                    "Target file not found: {}\n\n\
                    Suggestions:\n\
                    • Run dashpatch from the agent project root\n\
                    • Pass the project root explicitly: dashpatch --root <DIR>\n\
                    • Set DASHPATCH_ROOT environment variable to the project root",
                    path.display()
                )
            }
            PatchError::Decode { .. } => {
                format!(
                    "{}\n\n\
                    The target must be stored as Windows-1252 (cp1252).\n\
                    Bytes 0x81, 0x8D, 0x8F, 0x90 and 0x9D are undefined in that encoding.",
                    self
                )
            }
            PatchError::AlreadyApplied { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Nothing to do, the banners are already in place\n\
                    • Re-run with --force to insert the block a second time",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PatchError
pub type Result<T> = std::result::Result<T, PatchError>;
