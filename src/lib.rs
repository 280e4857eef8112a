//! dashpatch - One-shot dashboard screen patcher
//!
//! Splices the idle-rolls and deferred-credits banners into the agent's
//! cp1252-encoded `DashboardScreen.kt` at a fixed line, then rewrites the file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PatchError;
