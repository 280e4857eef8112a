//! Application layer - Use cases and orchestration

pub mod apply_patch;

pub use apply_patch::{apply_patch, PatchOptions, PatchReport};
