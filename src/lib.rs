//! # path-bridge
//!
//! Cross-platform path handling that accepts Windows (`\`) and POSIX (`/`)
//! separators interchangeably on any host.
//!
//! Build tooling often runs on Linux CI while processing paths authored on
//! Windows, or the other way round. Handing such a path to the host's native
//! path routines gives wrong answers: on Linux, `C:\a\b.dll` is one long file
//! name. This crate detects the foreign form, rewrites it into native form,
//! runs the native routine and rewrites the result back, keeping drive roots
//! and the caller's separator style intact.
//!
//! ## Features
//!
//! - **Universal combine**: join segments written in either convention
//! - **Foreign-path emulation**: directory name, extension, root and friends
//!   on Windows-style input while hosted on POSIX
//! - **Sanitization**: per-platform file name cleaning
//! - **Validation**: per-platform invalid character sets
//!
//! ## Examples
//!
//! ### Combining
//!
//! ```rust
//! use path_bridge::{combine, Platform};
//!
//! let joined = combine(&["C:\\FolderA\\folderB", "FolderC/FolderD", "File.xml"], Platform::host()).unwrap();
//! assert_eq!(joined, "C:\\FolderA\\folderB\\FolderC\\FolderD\\File.xml");
//!
//! let joined = combine(&["/github/", "FolderC\\FolderD\\", "File.xml"], Platform::host()).unwrap();
//! assert_eq!(joined, "/github/FolderC/FolderD/File.xml");
//! ```
//!
//! ### Querying paths from either platform
//!
//! ```rust
//! use path_bridge::host_path_service;
//!
//! let path = host_path_service();
//! assert_eq!(path.file_name("C:\\a\\Newtonsoft.Json.dll").unwrap(), "Newtonsoft.Json.dll");
//! assert_eq!(path.extension("/a/b/MyFile.xml").unwrap(), ".xml");
//! ```
//!
//! ### Sanitizing file names
//!
//! ```rust
//! use path_bridge::{sanitize_file_name, Platform};
//!
//! assert_eq!(sanitize_file_name("report: v2?.txt", Platform::Windows, "_").unwrap(), "report_ v2_.txt");
//! assert!(sanitize_file_name("   ", Platform::Posix, "_").is_err());
//! ```

mod combine;
pub mod dispatch;
mod error;
mod native;
mod platform;
mod sanitize;
mod segments;
mod service;
mod validate;

#[cfg(not(windows))]
mod posix;
#[cfg(windows)]
mod windows;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use combine::combine;
pub use error::{PathError, Result};
pub use platform::{Platform, POSIX_SEPARATOR, WINDOWS_SEPARATOR};
pub use sanitize::{sanitize_file_name, DEFAULT_REPLACEMENT};
pub use segments::{RootMarker, SegmentedPath, SeparatorStyle};
pub use service::{host_path_service, path_service_for, PathService};
pub use validate::{is_valid_path, validate_file_name, validate_path, InvalidCharSet};

#[cfg(not(windows))]
pub use posix::PosixPathService;
#[cfg(windows)]
pub use windows::WindowsPathService;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
