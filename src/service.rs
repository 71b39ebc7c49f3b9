//! The path service facade and backend selection
//!
//! [`PathService`] is the one interface callers program against. Each host
//! family has its own backend; which one runs is decided once, either by the
//! caller through [`path_service_for`] or lazily through [`host_path_service`].

use crate::combine::combine;
use crate::error::{PathError, Result};
use crate::platform::Platform;
use crate::sanitize::sanitize_file_name;
use crate::validate::InvalidCharSet;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Path operations that accept Windows and POSIX separators interchangeably
///
/// Single-path queries return what the host's `std::path` would return had the
/// input been written natively, with drive roots and separator style kept in
/// any path-shaped result.
pub trait PathService: fmt::Debug + Send + Sync {
    /// Family whose native path rules back this service.
    fn platform(&self) -> Platform;

    fn directory_separator_char(&self) -> char {
        self.platform().directory_separator()
    }

    fn alt_directory_separator_char(&self) -> char {
        self.platform().alt_directory_separator()
    }

    /// Separator between entries of PATH-like environment variables.
    fn path_separator(&self) -> char {
        self.platform().path_list_separator()
    }

    fn volume_separator_char(&self) -> char {
        self.platform().volume_separator()
    }

    /// Join segments written in either convention; see [`combine`].
    fn combine(&self, segments: &[&str]) -> Result<String> {
        combine(segments, self.platform())
    }

    /// Replace the extension; `None` removes it.
    fn change_extension(&self, path: &str, extension: Option<&str>) -> Result<String>;

    /// Parent directory, or `None` when `path` is a root.
    fn directory_name(&self, path: &str) -> Result<Option<String>>;

    /// Extension including the leading `.`, or `""`.
    fn extension(&self, path: &str) -> Result<String>;

    fn file_name(&self, path: &str) -> Result<String>;

    fn file_name_without_extension(&self, path: &str) -> Result<String>;

    /// Absolute path resolved against the current directory.
    fn full_path(&self, path: &str) -> Result<String>;

    /// Root of `path` (`/`, `C:\`), or `""` when relative.
    fn path_root(&self, path: &str) -> Result<String>;

    fn has_extension(&self, path: &str) -> Result<bool>;

    fn is_path_rooted(&self, path: &str) -> Result<bool>;

    fn invalid_path_chars(&self) -> &'static InvalidCharSet {
        InvalidCharSet::path(self.platform())
    }

    fn invalid_file_name_chars(&self) -> &'static InvalidCharSet {
        InvalidCharSet::file_name(self.platform())
    }

    /// Random 8.3 style name such as `d41d8cd9.8f0`. Nothing is created.
    fn random_file_name(&self) -> String {
        let id = uuid::Uuid::new_v4().simple().to_string();
        format!("{}.{}", &id[..8], &id[8..11])
    }

    /// The user's temporary directory, ending with the directory separator.
    fn temp_path(&self) -> String {
        let mut temp = std::env::temp_dir().to_string_lossy().into_owned();
        let separator = self.directory_separator_char();
        if !temp.ends_with(separator) {
            temp.push(separator);
        }
        temp
    }

    /// Create a uniquely named, empty `.tmp` file and return its full path.
    /// The file is left on disk for the caller to remove.
    fn temp_file_name(&self) -> Result<String> {
        let file = tempfile::Builder::new().suffix(".tmp").tempfile()?;
        let path = file.into_temp_path().keep().map_err(|err| err.error)?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Sanitize a file name for this service's own platform.
    fn replace_invalid_chars_for_file_name(&self, filename: &str, replacement: &str) -> Result<String> {
        sanitize_file_name(filename, self.platform(), replacement)
    }

    /// Sanitize a file name for an explicit target platform, e.g. a Windows
    /// share written to from a Linux build agent.
    fn replace_invalid_chars_for_platform(
        &self,
        filename: &str,
        platform: Platform,
        replacement: &str,
    ) -> Result<String> {
        sanitize_file_name(filename, platform, replacement)
    }
}

/// Build the service for `platform`
///
/// Native path rules are only available for the host's own family, so asking
/// for the other one fails with [`PathError::PlatformFeature`].
///
/// # Examples
/// ```
/// use path_bridge::{path_service_for, Platform};
///
/// let service = path_service_for(Platform::host()).unwrap();
/// assert_eq!(service.platform(), Platform::host());
/// ```
pub fn path_service_for(platform: Platform) -> Result<Box<dyn PathService>> {
    match platform {
        #[cfg(not(windows))]
        Platform::Posix => Ok(Box::new(crate::posix::PosixPathService::new())),
        #[cfg(windows)]
        Platform::Windows => Ok(Box::new(crate::windows::WindowsPathService::new())),
        #[allow(unreachable_patterns)]
        _ => Err(PathError::PlatformFeature {
            feature: "native path semantics",
            platform,
        }),
    }
}

static HOST: LazyLock<Box<dyn PathService>> = LazyLock::new(|| {
    debug!(platform = %Platform::host(), "initializing host path service");
    #[cfg(windows)]
    let service: Box<dyn PathService> = Box::new(crate::windows::WindowsPathService::new());
    #[cfg(not(windows))]
    let service: Box<dyn PathService> = Box::new(crate::posix::PosixPathService::new());
    service
});

/// Process-wide service for the host platform, created on first use
///
/// # Examples
/// ```
/// use path_bridge::host_path_service;
///
/// let path = host_path_service();
/// assert!(path.has_extension("C:\\a\\Newtonsoft.Json.dll").unwrap());
/// assert_eq!(
///     path.file_name_without_extension("C:\\a\\Newtonsoft.Json.dll").unwrap(),
///     "Newtonsoft.Json"
/// );
/// ```
pub fn host_path_service() -> &'static dyn PathService {
    HOST.as_ref()
}
