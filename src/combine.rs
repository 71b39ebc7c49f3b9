//! Universal path combining
//!
//! Joins any number of segments written with either separator into one path,
//! choosing the output separator from the first segment rather than the host.

use crate::error::{PathError, Result};
use crate::platform::{Platform, POSIX_SEPARATOR, WINDOWS_SEPARATOR};
use crate::segments::{RootMarker, SegmentedPath};
use crate::validate::validate_path;
use tracing::debug;

/// Combine path segments into a single path
///
/// Every segment is split on both `/` and `\`, empty pieces are dropped, and
/// the pieces are joined again with one separator:
/// - `/` when the first segment starts with `/`
/// - `\` when the first piece is a drive designator (ends with `:`)
/// - otherwise the native separator of `platform`
///
/// A drive designator is kept as the piece it was written as: `["C:\\"]`
/// combines to `C:` and a drive-relative `C:foo` is not turned into `C:\foo`.
///
/// The result is checked against the invalid path characters of `platform`.
///
/// # Examples
/// ```
/// use path_bridge::{combine, Platform};
///
/// assert_eq!(
///     combine(&["C:\\FolderA\\folderB", "FolderC/FolderD", "File.xml"], Platform::Posix).unwrap(),
///     "C:\\FolderA\\folderB\\FolderC\\FolderD\\File.xml"
/// );
/// assert_eq!(
///     combine(&["/github/", "FolderC\\FolderD", "File.xml"], Platform::Windows).unwrap(),
///     "/github/FolderC/FolderD/File.xml"
/// );
/// assert_eq!(combine(&["a", "b"], Platform::Windows).unwrap(), "a\\b");
/// assert!(combine(&["a", "b|c"], Platform::Windows).is_err());
/// ```
pub fn combine<S: AsRef<str>>(segments: &[S], platform: Platform) -> Result<String> {
    let Some(first) = segments.first() else {
        return Err(PathError::NullSegment);
    };

    // Only a leading '/' is kept as a root. A drive designator stays an
    // ordinary token, so "C:foo" remains drive-relative.
    let root = if first.as_ref().starts_with(POSIX_SEPARATOR) {
        RootMarker::PosixRoot
    } else {
        RootMarker::NoRoot
    };
    let mut path = SegmentedPath::with_root(root);
    for segment in segments {
        path.push(segment.as_ref());
    }

    let separator = if path.is_rooted() {
        POSIX_SEPARATOR
    } else if path
        .segments()
        .first()
        .is_some_and(|token| token.ends_with(':'))
    {
        WINDOWS_SEPARATOR
    } else {
        platform.directory_separator()
    };

    let combined = path.render(separator);
    if let Err(err) = validate_path(&combined, platform) {
        debug!(path = %combined, %platform, "rejecting combined path");
        return Err(err);
    }

    Ok(combined)
}
