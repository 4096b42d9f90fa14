//! Command implementations for the plugin-detect CLI

pub mod completions;
pub mod detect;
pub mod version;
