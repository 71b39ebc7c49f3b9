//! Path service for Windows hosts
//!
//! Windows' own path rules already accept `/` next to `\`, so queries go
//! straight to the native primitives without any rewriting.

use crate::error::Result;
use crate::native;
use crate::platform::Platform;
use crate::service::PathService;

/// [`PathService`] backed directly by Windows `std::path`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPathService {
    _private: (),
}

impl WindowsPathService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathService for WindowsPathService {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn change_extension(&self, path: &str, extension: Option<&str>) -> Result<String> {
        Ok(native::change_extension(path, extension))
    }

    fn directory_name(&self, path: &str) -> Result<Option<String>> {
        Ok(native::directory_name(path))
    }

    fn extension(&self, path: &str) -> Result<String> {
        Ok(native::extension(path))
    }

    fn file_name(&self, path: &str) -> Result<String> {
        Ok(native::file_name(path))
    }

    fn file_name_without_extension(&self, path: &str) -> Result<String> {
        Ok(native::file_name_without_extension(path))
    }

    fn full_path(&self, path: &str) -> Result<String> {
        native::full_path(path)
    }

    fn path_root(&self, path: &str) -> Result<String> {
        Ok(native::path_root(path))
    }

    fn has_extension(&self, path: &str) -> Result<bool> {
        Ok(native::has_extension(path))
    }

    fn is_path_rooted(&self, path: &str) -> Result<bool> {
        Ok(native::is_path_rooted(path))
    }
}
