//! Plugin file naming
//!
//! The editor plugin is identified purely by file name. These names must match
//! exactly what the plugin generator produces, so they are compared
//! case-sensitively.

use std::path::Path;

/// Two-file layout shipped up to v1.8
pub const LEGACY_PLUGIN_FILES: [&str; 2] = ["RiderAssetPostprocessor.cs", "RiderPlugin.cs"];

/// Single-file layout shipped from v1.9 on
pub const MERGED_PLUGIN_FILE: &str = "Unity3DRider.cs";

/// Directory that marks a Unity project root
pub const ASSETS_DIR: &str = "Assets";

/// Default install location, relative to the `Assets` directory
pub const DEFAULT_INSTALL_SUBDIR: [&str; 3] = ["Plugins", "Editor", "JetBrains"];

/// True for any of the legacy or merged plugin file names.
pub fn is_plugin_file_name(name: &str) -> bool {
    name == MERGED_PLUGIN_FILE || LEGACY_PLUGIN_FILES.contains(&name)
}

/// True if the last component of `path` is a plugin file name.
pub fn is_plugin_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(is_plugin_file_name)
}

/// True if the file name of `path` is exactly the merged plugin file.
pub fn is_merged_plugin_file(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some(MERGED_PLUGIN_FILE)
}

/// `<root>/Assets/Plugins/Editor/JetBrains`
pub fn default_install_dir(assets_dir: &Path) -> std::path::PathBuf {
    DEFAULT_INSTALL_SUBDIR
        .iter()
        .fold(assets_dir.to_path_buf(), |dir, part| dir.join(part))
}
