//! Version command implementation

use crate::error::Result;
use crate::plugin::{LEGACY_PLUGIN_FILES, MERGED_PLUGIN_FILE};

/// Run version command
pub fn run() -> Result<()> {
    println!("plugin-detect {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Recognized plugin files:");
    println!("  merged: {MERGED_PLUGIN_FILE}");
    println!("  legacy: {}", LEGACY_PLUGIN_FILES.join(", "));

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
