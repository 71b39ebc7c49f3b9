//! Platform families and their separator conventions

use std::fmt;

/// Separator used by POSIX paths.
pub const POSIX_SEPARATOR: char = '/';

/// Separator used by Windows paths.
pub const WINDOWS_SEPARATOR: char = '\\';

/// The two path families this crate knows how to speak.
///
/// A `Platform` is a value, not a compile-time switch: the sanitizer and the
/// invalid-character sets can target either family on any host, while the
/// native-backed path services only exist for [`Platform::host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// The family of the OS this process runs on.
    pub const fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Character separating directory levels.
    pub const fn directory_separator(self) -> char {
        match self {
            Platform::Windows => WINDOWS_SEPARATOR,
            Platform::Posix => POSIX_SEPARATOR,
        }
    }

    /// Alternate directory separator. POSIX has none, so it repeats `/`.
    pub const fn alt_directory_separator(self) -> char {
        POSIX_SEPARATOR
    }

    /// Separator between entries of a PATH-like environment variable.
    pub const fn path_list_separator(self) -> char {
        match self {
            Platform::Windows => ';',
            Platform::Posix => ':',
        }
    }

    /// Volume separator (`C:`). POSIX has no volumes and reports `/`.
    pub const fn volume_separator(self) -> char {
        match self {
            Platform::Windows => ':',
            Platform::Posix => POSIX_SEPARATOR,
        }
    }

    /// The separator a path written for the other family would use.
    pub const fn foreign_separator(self) -> char {
        match self {
            Platform::Windows => POSIX_SEPARATOR,
            Platform::Posix => WINDOWS_SEPARATOR,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("Windows"),
            Platform::Posix => f.write_str("Posix"),
        }
    }
}
