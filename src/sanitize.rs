//! File name sanitization for a target platform

use crate::error::{PathError, Result};
use crate::platform::Platform;
use crate::validate::InvalidCharSet;

/// Replacement used when the caller has no preference.
pub const DEFAULT_REPLACEMENT: &str = "_";

/// Replace characters `platform` forbids in file names
///
/// - Windows: `<>:"/\|?*` and control characters are replaced, then trailing
///   dots and spaces are trimmed since Windows silently drops them.
/// - Posix: only NUL and `/` are replaced; trailing dots and spaces are legal.
///
/// A name cleaned for one platform is not necessarily valid on the other.
///
/// # Examples
/// ```
/// use path_bridge::{sanitize_file_name, Platform, DEFAULT_REPLACEMENT};
///
/// assert_eq!(sanitize_file_name("a/b.ext", Platform::Windows, DEFAULT_REPLACEMENT).unwrap(), "a_b.ext");
/// assert_eq!(sanitize_file_name("a/b.ext", Platform::Posix, DEFAULT_REPLACEMENT).unwrap(), "a_b.ext");
/// assert_eq!(sanitize_file_name("trailing.ext.", Platform::Windows, "_").unwrap(), "trailing.ext");
/// assert_eq!(sanitize_file_name("trailing.ext.", Platform::Posix, "_").unwrap(), "trailing.ext.");
/// ```
pub fn sanitize_file_name(filename: &str, platform: Platform, replacement: &str) -> Result<String> {
    if filename.trim().is_empty() {
        return Err(PathError::EmptyArgument { name: "filename" });
    }

    let invalid = InvalidCharSet::file_name(platform);
    let mut cleaned = String::with_capacity(filename.len());
    for c in filename.chars() {
        if invalid.contains(c) {
            cleaned.push_str(replacement);
        } else {
            cleaned.push(c);
        }
    }

    if platform == Platform::Windows {
        let trimmed_len = cleaned.trim_end_matches(['.', ' ']).len();
        cleaned.truncate(trimmed_len);
    }

    Ok(cleaned)
}
