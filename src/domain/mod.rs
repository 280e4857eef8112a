//! Domain layer - Codec, line model and the fixed patch

pub mod cp1252;
pub mod lines;
pub mod payload;

pub use lines::FileLines;
pub use payload::{DashboardPatch, INSERT_INDEX, PAYLOAD_LINES, TARGET_RELATIVE_PATH};
