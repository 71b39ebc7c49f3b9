//! Foreign-separator emulation around native path operations
//!
//! Native path routines only understand the host's separator. To run one on
//! a path written for Windows while hosted on POSIX, the path is rewritten
//! into native form, the routine runs, and any path-shaped result is rewritten
//! back so callers see the convention they wrote in.

use crate::error::{PathError, Result};
use crate::platform::{Platform, POSIX_SEPARATOR};
use crate::segments::{RootMarker, SeparatorStyle};
use tracing::trace;

/// What kind of string a native operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// A path or part of one (directory name, full path, root). Gets the
    /// drive root and foreign separators restored.
    Fragment,
    /// A bare name or extension. Returned untouched.
    Name,
}

/// How a raw path has to be presented to a POSIX-native routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignForm<'a> {
    /// Already native, or carries no separator at all.
    Native,
    /// Windows separators without a drive root.
    ForeignSeparators,
    /// `X:` followed by `body`, written in either separator.
    DriveRooted { drive: char, body: &'a str },
}

impl<'a> ForeignForm<'a> {
    /// Classify `path`. A second colon after the drive designator cannot be
    /// expressed natively and is rejected.
    pub fn classify(path: &'a str) -> Result<Self> {
        let root = RootMarker::detect(path);
        if let RootMarker::WindowsDriveRoot(drive) = root {
            let body = root.strip(path);
            if body.contains(':') {
                return Err(PathError::NotSupported {
                    path: path.to_string(),
                    reason: "colon outside of the drive designator".to_string(),
                });
            }
            return Ok(ForeignForm::DriveRooted { drive, body });
        }

        match SeparatorStyle::detect(path) {
            SeparatorStyle::Windows => Ok(ForeignForm::ForeignSeparators),
            SeparatorStyle::Posix | SeparatorStyle::Ambiguous => Ok(ForeignForm::Native),
        }
    }
}

const FOREIGN_SEPARATOR: char = Platform::Posix.foreign_separator();

/// Result of a native operation that can be mapped back into foreign form.
pub trait NativeResult: Sized {
    /// Rewrite a native result for a caller that used `form`.
    fn restore(self, form: &ForeignForm<'_>, shape: ResultShape) -> Self;
}

fn to_windows(native: &str) -> String {
    native.replace(POSIX_SEPARATOR, &FOREIGN_SEPARATOR.to_string())
}

impl NativeResult for String {
    fn restore(self, form: &ForeignForm<'_>, shape: ResultShape) -> Self {
        match (shape, form) {
            (ResultShape::Name, _) | (_, ForeignForm::Native) => self,
            (ResultShape::Fragment, ForeignForm::ForeignSeparators) => to_windows(&self),
            // A bare "X:" was handed over as "/"; that root is not given back.
            (ResultShape::Fragment, ForeignForm::DriveRooted { drive, body })
                if body.is_empty() =>
            {
                let unrooted = self.trim_start_matches(POSIX_SEPARATOR);
                format!("{drive}:{}", to_windows(unrooted))
            }
            (ResultShape::Fragment, ForeignForm::DriveRooted { drive, .. }) => {
                format!("{drive}:{}", to_windows(&self))
            }
        }
    }
}

impl NativeResult for Option<String> {
    fn restore(self, form: &ForeignForm<'_>, shape: ResultShape) -> Self {
        self.map(|value| value.restore(form, shape))
    }
}

impl NativeResult for bool {
    fn restore(self, _form: &ForeignForm<'_>, _shape: ResultShape) -> Self {
        self
    }
}

/// Run a POSIX-native `op` on `path`, whichever separator style it uses
///
/// # Examples
/// ```
/// use path_bridge::dispatch::{emulate, ResultShape};
///
/// // Stand-in native routine: everything up to the last '/'
/// let parent = |p: &str| Ok(p.rsplit_once('/').map(|(dir, _)| dir.to_string()).unwrap_or_default());
///
/// assert_eq!(emulate("C:\\Folder\\Sub\\file.dll", ResultShape::Fragment, parent).unwrap(), "C:\\Folder\\Sub");
/// assert_eq!(emulate("dir\\file.dll", ResultShape::Fragment, parent).unwrap(), "dir");
/// assert_eq!(emulate("/a/b/c.txt", ResultShape::Fragment, parent).unwrap(), "/a/b");
/// ```
pub fn emulate<T, F>(path: &str, shape: ResultShape, op: F) -> Result<T>
where
    T: NativeResult,
    F: FnOnce(&str) -> Result<T>,
{
    let form = ForeignForm::classify(path)?;
    let output = match form {
        ForeignForm::Native => return op(path),
        ForeignForm::ForeignSeparators => {
            let native = path.replace(FOREIGN_SEPARATOR, &POSIX_SEPARATOR.to_string());
            trace!(path, native = %native, "emulating foreign separators");
            op(&native)?
        }
        ForeignForm::DriveRooted { drive, body } => {
            let mut native = body.replace(FOREIGN_SEPARATOR, &POSIX_SEPARATOR.to_string());
            if !native.starts_with(POSIX_SEPARATOR) {
                native.insert(0, POSIX_SEPARATOR);
            }
            trace!(path, %drive, native = %native, "emulating drive-rooted path");
            op(&native)?
        }
    };

    Ok(output.restore(&form, shape))
}
