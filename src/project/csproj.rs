//! MSBuild project files
//!
//! Unity regenerates `*.csproj` files listing every script as
//! `<Compile Include="Assets\Plugins\Editor\JetBrains\Unity3DRider.cs" />`.
//! Only the member list matters here, so the file is scanned for `Include`
//! attributes instead of being parsed as full XML. Attribute values are
//! unescaped twice: XML references first, then MSBuild `%XX` escapes.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::Project;
use crate::error::{Result, project as project_error};

#[allow(clippy::expect_used)]
static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:Compile|None|Content)\s+Include\s*=\s*"([^"]+)""#)
        .expect("valid include regex")
});

/// A project loaded from an MSBuild project file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsprojProject {
    location: PathBuf,
    files: Vec<PathBuf>,
}

impl CsprojProject {
    /// Project with an already resolved member list
    pub fn new(location: impl Into<PathBuf>, files: Vec<PathBuf>) -> Self {
        Self {
            location: location.into(),
            files,
        }
    }

    /// Read the project file at `path` and resolve its members
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| project_error::read_failed(path, e))?;
        let project_dir = path
            .parent()
            .ok_or_else(|| project_error::without_directory(path))?;

        Ok(Self::new(path, parse_members(&content, project_dir)))
    }
}

impl Project for CsprojProject {
    fn file_location(&self) -> Option<&Path> {
        Some(&self.location)
    }

    fn declared_files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Resolve every `Include` attribute in `content` against `project_dir`.
fn parse_members(content: &str, project_dir: &Path) -> Vec<PathBuf> {
    INCLUDE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| resolve_member(m.as_str(), project_dir))
        .collect()
}

fn resolve_member(include: &str, project_dir: &Path) -> PathBuf {
    let unescaped = decode_msbuild_escapes(&decode_xml_entities(include));
    let relative: PathBuf = unescaped
        .split(['\\', '/'])
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();

    let as_given = Path::new(&unescaped);
    if as_given.is_absolute() {
        as_given.to_path_buf()
    } else {
        project_dir.join(relative)
    }
}

/// Replace predefined XML entities and character references.
///
/// Anything that is not a recognized reference stays as written.
fn decode_xml_entities(value: &str) -> String {
    let mut decoded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        let tail = &rest[start..];
        let reference = tail
            .find(';')
            .and_then(|end| decode_entity(&tail[1..end]).map(|c| (c, end)));
        match reference {
            Some((c, end)) => {
                decoded.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &tail[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) if is_digits(hex, 16) => u32::from_str_radix(hex, 16).ok(),
                None if is_digits(digits, 10) => digits.parse().ok(),
                _ => None,
            };
            code.and_then(char::from_u32)
        }
    }
}

/// Replace MSBuild `%XX` escapes with the bytes they stand for.
fn decode_msbuild_escapes(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = bytes
            .get(i + 1..i + 3)
            .filter(|hex| bytes[i] == b'%' && hex.iter().all(u8::is_ascii_hexdigit))
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                decoded.push(byte);
                i += 3;
            }
            None => {
                decoded.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn is_digits(text: &str, radix: u32) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_digit(radix))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, create_test_files};

    const GENERATED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <Compile Include="Assets\Scripts\Player.cs" />
    <Compile Include="Assets\Plugins\Editor\JetBrains\Unity3DRider.cs" />
    <None Include="Assets\Readme &amp; Notes.txt" />
  </ItemGroup>
</Project>
"#;

    #[test]
    fn test_parse_members_resolves_backslash_paths() {
        let members = parse_members(GENERATED, Path::new("/game"));
        assert_eq!(
            members,
            vec![
                PathBuf::from("/game/Assets/Scripts/Player.cs"),
                PathBuf::from("/game/Assets/Plugins/Editor/JetBrains/Unity3DRider.cs"),
                PathBuf::from("/game/Assets/Readme & Notes.txt"),
            ]
        );
    }

    #[test]
    fn test_parse_members_decodes_xml_entities() {
        let members = parse_members(
            r#"<Compile Include="Assets\Bob&apos;s &lt;Tools&gt;\Unity3DRider.cs" />"#,
            Path::new("/game"),
        );
        assert_eq!(
            members,
            vec![PathBuf::from("/game/Assets/Bob's <Tools>/Unity3DRider.cs")]
        );
    }

    #[test]
    fn test_parse_members_decodes_character_references_and_escapes() {
        let members = parse_members(
            r#"<Compile Include="Assets\Q&#39;s&#x20;Kit\100%25%3B\Unity3DRider.cs" />"#,
            Path::new("/game"),
        );
        assert_eq!(
            members,
            vec![PathBuf::from("/game/Assets/Q's Kit/100%;/Unity3DRider.cs")]
        );
    }

    #[test]
    fn test_unknown_references_are_kept() {
        assert_eq!(decode_xml_entities("A & B &nbsp; &#xZZ;"), "A & B &nbsp; &#xZZ;");
        assert_eq!(decode_msbuild_escapes("50%off %2"), "50%off %2");
        assert_eq!(decode_msbuild_escapes("Caf%C3%A9"), "Café");
    }

    #[test]
    fn test_parse_members_empty_project() {
        assert!(parse_members("<Project></Project>", Path::new("/game")).is_empty());
    }

    #[test]
    fn test_load_reads_file_and_sets_location() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("Assembly-CSharp.csproj", GENERATED)]);
        let path = temp.path().join("Assembly-CSharp.csproj");

        let project = CsprojProject::load(&path).expect("project should load");

        assert_eq!(project.file_location(), Some(path.as_path()));
        assert_eq!(project.declared_files().len(), 3);
        assert!(project.declared_files()[1].starts_with(temp.path()));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = create_temp_dir();
        let result = CsprojProject::load(&temp.path().join("Nope.csproj"));
        assert!(matches!(
            result,
            Err(crate::error::DetectError::ProjectReadFailed { .. })
        ));
    }
}
