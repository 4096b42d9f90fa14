//! Plugin version stamps
//!
//! The generator writes a human-readable version into the header comment of
//! the merged plugin file, e.g. `// Version: 2.0.1.0`. This module parses that
//! stamp into a [`PluginVersion`].

use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{Result, fs as fs_error};
use crate::fs::FileSystem;

const COMMENT_MARKER: &str = "//";

#[allow(clippy::expect_used)]
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//\s+(?:Version:)?\s*((?:[0-9]+\.)+[0-9]+)").expect("valid version regex")
});

/// A dotted version with two to four numeric components.
///
/// Components missing from the source text stay `None`, so `2.0` and `2.0.0`
/// are different versions and `2.0` sorts before `2.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PluginVersion {
    pub major: u32,
    pub minor: u32,
    pub build: Option<u32>,
    pub revision: Option<u32>,
}

impl PluginVersion {
    /// "No version": unknown, unparseable, or not installed
    pub const ZERO: PluginVersion = PluginVersion {
        major: 0,
        minor: 0,
        build: None,
        revision: None,
    };

    /// Version reported for the two-file legacy layout
    pub const LEGACY: PluginVersion = PluginVersion::new(1, 8, Some(0), Some(0));

    pub const fn new(major: u32, minor: u32, build: Option<u32>, revision: Option<u32>) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for PluginVersion {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Why a version string was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version '{0}'")]
pub struct ParseVersionError(String);

impl FromStr for PluginVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_string());

        // Each component must fit a signed 32-bit integer.
        let components = s
            .split('.')
            .map(|part| {
                part.parse::<i32>()
                    .ok()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(invalid)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        match components.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor, None, None)),
            [major, minor, build] => Ok(Self::new(*major, *minor, Some(*build), None)),
            [major, minor, build, revision] => {
                Ok(Self::new(*major, *minor, Some(*build), Some(*revision)))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{build}")?;
            if let Some(revision) = self.revision {
                write!(f, ".{revision}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for PluginVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Read the leading `//` comment block of `file` and parse its version stamp.
///
/// The line that ends the block is kept in the buffer too. Returns
/// [`PluginVersion::ZERO`] when there is no block, no stamp, or the stamp does
/// not parse. Only I/O failures are errors.
pub fn extract_version(fs: &dyn FileSystem, file: &Path) -> Result<PluginVersion> {
    let reader = fs.open_read(file)?;
    let block = read_comment_block(reader).map_err(|e| fs_error::read_failed(file, e))?;
    Ok(parse_comment_block(&block))
}

fn read_comment_block(mut reader: Box<dyn BufRead + '_>) -> std::io::Result<String> {
    let mut block = String::new();
    let mut line = Vec::new();
    let mut first = true;
    while read_line(&mut reader, &mut line)? {
        let decoded = String::from_utf8_lossy(&line);
        let text = if first {
            decoded.strip_prefix('\u{feff}').unwrap_or(&*decoded)
        } else {
            &*decoded
        };
        first = false;

        block.push_str(text);
        block.push('\n');

        if !text.starts_with(COMMENT_MARKER) {
            break;
        }
    }
    Ok(block)
}

/// Read one line into `line`, ending at `\n`, `\r\n` or a lone `\r`.
///
/// Returns `false` once the reader is exhausted.
fn read_line<R: BufRead + ?Sized>(reader: &mut R, line: &mut Vec<u8>) -> std::io::Result<bool> {
    line.clear();
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(!line.is_empty());
        }

        if let Some(end) = available.iter().position(|b| matches!(b, b'\n' | b'\r')) {
            let terminator = available[end];
            line.extend_from_slice(&available[..end]);
            reader.consume(end + 1);
            if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                reader.consume(1);
            }
            return Ok(true);
        }

        let len = available.len();
        line.extend_from_slice(available);
        reader.consume(len);
    }
}

fn parse_comment_block(block: &str) -> PluginVersion {
    if block.trim().is_empty() {
        return PluginVersion::ZERO;
    }

    VERSION_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(PluginVersion::ZERO)
}
