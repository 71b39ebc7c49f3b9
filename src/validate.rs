//! Invalid-character sets and path validation
//!
//! Each platform family forbids a different set of characters in paths and in
//! file names. The sets are built once per process and shared read-only.

use crate::error::{PathError, Result};
use crate::platform::Platform;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Device names Windows reserves regardless of extension.
const WINDOWS_RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

static WINDOWS_PATH_CHARS: LazyLock<InvalidCharSet> = LazyLock::new(|| {
    InvalidCharSet::from_chars(['"', '<', '>', '|'].into_iter().chain(control_chars()))
});

static WINDOWS_FILE_NAME_CHARS: LazyLock<InvalidCharSet> = LazyLock::new(|| {
    InvalidCharSet::from_chars(
        WINDOWS_PATH_CHARS
            .iter()
            .chain([':', '*', '?', '\\', '/']),
    )
});

static POSIX_PATH_CHARS: LazyLock<InvalidCharSet> =
    LazyLock::new(|| InvalidCharSet::from_chars(['\0']));

static POSIX_FILE_NAME_CHARS: LazyLock<InvalidCharSet> =
    LazyLock::new(|| InvalidCharSet::from_chars(['\0', '/']));

fn control_chars() -> impl Iterator<Item = char> {
    '\u{0}'..='\u{1F}'
}

/// An immutable set of characters a platform does not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCharSet {
    chars: BTreeSet<char>,
}

impl InvalidCharSet {
    fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Characters that may not appear anywhere in a path for `platform`.
    ///
    /// # Examples
    /// ```
    /// use path_bridge::{InvalidCharSet, Platform};
    ///
    /// assert!(InvalidCharSet::path(Platform::Windows).contains('|'));
    /// assert!(!InvalidCharSet::path(Platform::Posix).contains('|'));
    /// ```
    pub fn path(platform: Platform) -> &'static InvalidCharSet {
        match platform {
            Platform::Windows => &WINDOWS_PATH_CHARS,
            Platform::Posix => &POSIX_PATH_CHARS,
        }
    }

    /// Characters that may not appear in a single file name for `platform`.
    pub fn file_name(platform: Platform) -> &'static InvalidCharSet {
        match platform {
            Platform::Windows => &WINDOWS_FILE_NAME_CHARS,
            Platform::Posix => &POSIX_FILE_NAME_CHARS,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// First character of `s` that belongs to this set.
    pub fn first_in(&self, s: &str) -> Option<char> {
        s.chars().find(|c| self.contains(*c))
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn to_vec(&self) -> Vec<char> {
        self.iter().collect()
    }
}

/// Check whether `path` is free of characters `platform` forbids in paths
///
/// # Examples
/// ```
/// use path_bridge::{is_valid_path, Platform};
///
/// assert!(is_valid_path("C:\\safe\\file.txt", Platform::Windows));
/// assert!(!is_valid_path("file|pipe", Platform::Windows));
/// assert!(is_valid_path("file|pipe", Platform::Posix));
/// ```
pub fn is_valid_path(path: &str, platform: Platform) -> bool {
    validate_path(path, platform).is_ok()
}

/// Validate a path and report the first offending character
///
/// Only the character set is checked; an empty path is valid here because the
/// combiner legitimately produces one from all-empty input.
pub fn validate_path(path: &str, platform: Platform) -> Result<()> {
    match InvalidCharSet::path(platform).first_in(path) {
        Some(character) => Err(PathError::InvalidPath {
            path: path.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// Validate a single file name (no directory part) for `platform`
///
/// On Windows this also rejects trailing dots and spaces and the reserved
/// device names, matching what the filesystem itself would refuse.
///
/// # Examples
/// ```
/// use path_bridge::{validate_file_name, Platform};
///
/// assert!(validate_file_name("report.txt", Platform::Windows).is_ok());
/// assert!(validate_file_name("report.txt.", Platform::Windows).is_err());
/// assert!(validate_file_name("report.txt.", Platform::Posix).is_ok());
/// assert!(validate_file_name("a/b", Platform::Posix).is_err());
/// ```
pub fn validate_file_name(file_name: &str, platform: Platform) -> Result<()> {
    if file_name.trim().is_empty() {
        return Err(PathError::EmptyArgument { name: "file_name" });
    }

    if let Some(character) = InvalidCharSet::file_name(platform).first_in(file_name) {
        return Err(PathError::InvalidPath {
            path: file_name.to_string(),
            character,
        });
    }

    if platform == Platform::Windows {
        if let Some(character) = file_name.chars().last().filter(|c| matches!(*c, '.' | ' ')) {
            return Err(PathError::InvalidPath {
                path: file_name.to_string(),
                character,
            });
        }

        let upper = file_name.to_uppercase();
        let base_name = upper.split('.').next().unwrap_or("");
        if WINDOWS_RESERVED_NAMES.contains(&base_name) {
            return Err(PathError::ReservedFileName {
                file_name: file_name.to_string(),
            });
        }
    }

    Ok(())
}
