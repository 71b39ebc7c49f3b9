//! Path service for POSIX hosts
//!
//! Every single-path query goes through [`emulate`], so Windows-style input
//! such as `C:\Folder\file.dll` or `Folder\file.dll` is answered the way the
//! host would answer the equivalent `/`-separated path.

use crate::dispatch::{emulate, ResultShape};
use crate::error::Result;
use crate::native;
use crate::platform::Platform;
use crate::service::PathService;

/// [`PathService`] backed by POSIX `std::path` with Windows-path emulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixPathService {
    _private: (),
}

impl PosixPathService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathService for PosixPathService {
    fn platform(&self) -> Platform {
        Platform::Posix
    }

    fn change_extension(&self, path: &str, extension: Option<&str>) -> Result<String> {
        emulate(path, ResultShape::Fragment, |native_path| {
            Ok(native::change_extension(native_path, extension))
        })
    }

    fn directory_name(&self, path: &str) -> Result<Option<String>> {
        emulate(path, ResultShape::Fragment, |p| Ok(native::directory_name(p)))
    }

    fn extension(&self, path: &str) -> Result<String> {
        emulate(path, ResultShape::Name, |p| Ok(native::extension(p)))
    }

    fn file_name(&self, path: &str) -> Result<String> {
        emulate(path, ResultShape::Name, |p| Ok(native::file_name(p)))
    }

    fn file_name_without_extension(&self, path: &str) -> Result<String> {
        emulate(path, ResultShape::Name, |p| {
            Ok(native::file_name_without_extension(p))
        })
    }

    fn full_path(&self, path: &str) -> Result<String> {
        emulate(path, ResultShape::Fragment, native::full_path)
    }

    fn path_root(&self, path: &str) -> Result<String> {
        emulate(path, ResultShape::Fragment, |p| Ok(native::path_root(p)))
    }

    fn has_extension(&self, path: &str) -> Result<bool> {
        emulate(path, ResultShape::Name, |p| Ok(native::has_extension(p)))
    }

    fn is_path_rooted(&self, path: &str) -> Result<bool> {
        emulate(path, ResultShape::Name, |p| Ok(native::is_path_rooted(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;

    const WINDOWS_DLL: &str = "C:\\Skyline DataMiner\\ProtocolScripts\\DllImport\\newtonsoft.json\\13.0.2-beta3\\lib\\net45\\Newtonsoft.Json.dll";
    const POSIX_XML: &str = "/github/workspace/FolderA/MyFile.xml";

    #[test]
    fn test_change_extension() {
        let path = PosixPathService::new();
        assert_eq!(
            path.change_extension(POSIX_XML, Some(".txt")).unwrap(),
            "/github/workspace/FolderA/MyFile.txt"
        );
        assert_eq!(
            path.change_extension(WINDOWS_DLL, Some(".txt")).unwrap(),
            "C:\\Skyline DataMiner\\ProtocolScripts\\DllImport\\newtonsoft.json\\13.0.2-beta3\\lib\\net45\\Newtonsoft.Json.txt"
        );
        assert_eq!(
            path.change_extension("lib\\MyFile.xml", None).unwrap(),
            "lib\\MyFile"
        );
        assert_eq!(path.change_extension("C:", Some(".txt")).unwrap(), "C:");
    }

    #[test]
    fn test_directory_name() {
        let path = PosixPathService::new();
        assert_eq!(
            path.directory_name(POSIX_XML).unwrap().as_deref(),
            Some("/github/workspace/FolderA")
        );
        assert_eq!(
            path.directory_name(WINDOWS_DLL).unwrap().as_deref(),
            Some("C:\\Skyline DataMiner\\ProtocolScripts\\DllImport\\newtonsoft.json\\13.0.2-beta3\\lib\\net45")
        );
        assert_eq!(
            path.directory_name("C:\\file.dll").unwrap().as_deref(),
            Some("C:\\")
        );
        assert_eq!(path.directory_name("C:\\").unwrap(), None);
        assert_eq!(path.directory_name("/").unwrap(), None);
        // Trailing separators follow std::path: the last directory is dropped
        assert_eq!(
            path.directory_name("C:\\a\\b\\").unwrap().as_deref(),
            Some("C:\\a")
        );
        assert_eq!(path.directory_name("/a/b/").unwrap().as_deref(), Some("/a"));
    }

    #[test]
    fn test_file_names() {
        let path = PosixPathService::new();
        assert_eq!(path.file_name(POSIX_XML).unwrap(), "MyFile.xml");
        assert_eq!(path.file_name(WINDOWS_DLL).unwrap(), "Newtonsoft.Json.dll");
        assert_eq!(path.file_name_without_extension(POSIX_XML).unwrap(), "MyFile");
        assert_eq!(
            path.file_name_without_extension(WINDOWS_DLL).unwrap(),
            "Newtonsoft.Json"
        );
        assert_eq!(path.extension(WINDOWS_DLL).unwrap(), ".dll");
        assert_eq!(path.extension("MyFile").unwrap(), "");
    }

    #[test]
    fn test_has_extension() {
        let path = PosixPathService::new();
        assert!(path.has_extension(POSIX_XML).unwrap());
        assert!(!path.has_extension("/github/workspace/FolderA/MyFile").unwrap());
        assert!(path.has_extension(WINDOWS_DLL).unwrap());
        assert!(!path
            .has_extension("C:\\Skyline DataMiner\\ProtocolScripts\\Newtonsoft")
            .unwrap());
        assert!(path.has_extension("SubFolderTest\\TestFile.xml").unwrap());
    }

    #[test]
    fn test_is_path_rooted() {
        let path = PosixPathService::new();
        assert!(path.is_path_rooted("/github/workspace/FolderA/MyFile").unwrap());
        assert!(path.is_path_rooted("C:\\Skyline DataMiner\\Newtonsoft").unwrap());
        assert!(!path
            .is_path_rooted("ProtocolScripts\\DllImport\\newtonsoft.json\\Newtonsoft")
            .unwrap());
        assert!(!path.is_path_rooted("relative/file").unwrap());
    }

    #[test]
    fn test_path_root() {
        let path = PosixPathService::new();
        assert_eq!(path.path_root("/github/workspace").unwrap(), "/");
        assert_eq!(path.path_root("D:\\data\\file.txt").unwrap(), "D:\\");
        assert_eq!(path.path_root("data\\file.txt").unwrap(), "");
        assert_eq!(path.path_root("C:").unwrap(), "C:");
    }

    #[test]
    fn test_full_path() {
        let path = PosixPathService::new();
        let cwd = std::env::current_dir().unwrap();
        let cwd = cwd.to_string_lossy();

        assert_eq!(
            path.full_path("SubFolderTest/TestFile.xml").unwrap(),
            format!("{cwd}/SubFolderTest/TestFile.xml")
        );
        assert_eq!(
            path.full_path("SubFolderTest\\TestFile.xml").unwrap(),
            format!("{}\\SubFolderTest\\TestFile.xml", cwd.replace('/', "\\"))
        );
        assert_eq!(
            path.full_path("C:\\Folder\\.\\file.xml").unwrap(),
            "C:\\Folder\\file.xml"
        );
        assert_eq!(
            path.full_path("C:\\a\\..\\b\\file.xml").unwrap(),
            "C:\\b\\file.xml"
        );
        assert_eq!(path.full_path("/a/../b").unwrap(), "/b");
        assert_eq!(path.full_path("C:\\..\\..").unwrap(), "C:\\");
        assert!(matches!(
            path.full_path(""),
            Err(PathError::EmptyArgument { .. })
        ));
    }

    #[test]
    fn test_malformed_colon_is_not_supported() {
        let path = PosixPathService::new();
        assert!(matches!(
            path.file_name("C:\\folder\\file.txt:stream"),
            Err(PathError::NotSupported { .. })
        ));
    }

    #[test]
    fn test_combine_uses_posix_fallback() {
        let path = PosixPathService::new();
        assert_eq!(path.combine(&["a\\b", "c"]).unwrap(), "a/b/c");
        assert_eq!(
            path.combine(&["C:\\FolderA", "File.xml"]).unwrap(),
            "C:\\FolderA\\File.xml"
        );
    }
}
