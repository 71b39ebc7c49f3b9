//! Host-native path primitives
//!
//! Thin wrappers over `std::path` that present the operations the path
//! services expose. They understand only the host's own conventions; the
//! dispatcher is what makes them usable with foreign-style input.

use crate::error::{PathError, Result};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

fn lossy(s: &OsStr) -> String {
    s.to_string_lossy().into_owned()
}

/// Parent directory, `None` for a root or empty path, `""` without a directory part.
pub(crate) fn directory_name(path: &str) -> Option<String> {
    Path::new(path)
        .parent()
        .map(|parent| lossy(parent.as_os_str()))
}

/// Extension including its leading `.`, or `""`.
pub(crate) fn extension(path: &str) -> String {
    match Path::new(path).extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy()),
        _ => String::new(),
    }
}

pub(crate) fn file_name(path: &str) -> String {
    Path::new(path).file_name().map(lossy).unwrap_or_default()
}

pub(crate) fn file_name_without_extension(path: &str) -> String {
    Path::new(path).file_stem().map(lossy).unwrap_or_default()
}

/// Absolute form of `path` against the current directory, with `.` and `..`
/// resolved lexically. The filesystem is not touched beyond reading the
/// working directory, so symlinks are not followed.
pub(crate) fn full_path(path: &str) -> Result<String> {
    if path.trim().is_empty() {
        return Err(PathError::EmptyArgument { name: "path" });
    }
    let absolute = std::path::absolute(path)?;
    Ok(lossy(resolve_dots(&absolute).as_os_str()))
}

// `..` never climbs above the root.
fn resolve_dots(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(resolved.components().next_back(), Some(Component::Normal(_))) {
                    resolved.pop();
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Prefix and root directory of `path`, or `""` for a relative path.
pub(crate) fn path_root(path: &str) -> String {
    let root: PathBuf = Path::new(path)
        .components()
        .take_while(|component| matches!(component, Component::Prefix(_) | Component::RootDir))
        .collect();
    lossy(root.as_os_str())
}

pub(crate) fn has_extension(path: &str) -> bool {
    Path::new(path).extension().is_some_and(|ext| !ext.is_empty())
}

pub(crate) fn is_path_rooted(path: &str) -> bool {
    let path = Path::new(path);
    path.has_root() || matches!(path.components().next(), Some(Component::Prefix(_)))
}

/// Replace the extension of `path`. The new extension may carry a leading
/// `.`; `None` removes the current one. An empty path is returned as is.
pub(crate) fn change_extension(path: &str, extension: Option<&str>) -> String {
    if path.is_empty() {
        return String::new();
    }
    let extension = extension.map_or("", |ext| ext.strip_prefix('.').unwrap_or(ext));
    lossy(Path::new(path).with_extension(extension).as_os_str())
}
