//! Shared utilities

pub mod process;
pub mod props;

pub use process::ProcessBuilder;
pub use props::Properties;
