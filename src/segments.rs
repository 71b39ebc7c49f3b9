//! Raw path classification and the segmented path model
//!
//! Everything here works on plain strings and never consults the host: a path
//! written for Windows is classified the same way on Linux and vice versa.

use crate::platform::{POSIX_SEPARATOR, WINDOWS_SEPARATOR};

/// The root a raw path string starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootMarker {
    /// Relative path, or a root this crate does not model (`\share`).
    #[default]
    NoRoot,
    /// Leading `/`.
    PosixRoot,
    /// Single ASCII letter followed by `:` at the very start.
    WindowsDriveRoot(char),
}

impl RootMarker {
    /// Detect the root marker of `raw`.
    ///
    /// # Examples
    /// ```
    /// use path_bridge::RootMarker;
    ///
    /// assert_eq!(RootMarker::detect("C:\\Folder"), RootMarker::WindowsDriveRoot('C'));
    /// assert_eq!(RootMarker::detect("/github/workspace"), RootMarker::PosixRoot);
    /// assert_eq!(RootMarker::detect("relative\\path"), RootMarker::NoRoot);
    /// assert_eq!(RootMarker::detect("ab:cd"), RootMarker::NoRoot);
    /// ```
    pub fn detect(raw: &str) -> Self {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => {
                RootMarker::WindowsDriveRoot(letter)
            }
            (Some(POSIX_SEPARATOR), _) => RootMarker::PosixRoot,
            _ => RootMarker::NoRoot,
        }
    }

    pub fn is_rooted(&self) -> bool {
        !matches!(self, RootMarker::NoRoot)
    }

    /// The part of `raw` after a drive designator. Other roots keep their
    /// separator because it is part of the path body.
    pub fn strip<'a>(&self, raw: &'a str) -> &'a str {
        match self {
            RootMarker::WindowsDriveRoot(_) => &raw[2..],
            RootMarker::NoRoot | RootMarker::PosixRoot => raw,
        }
    }
}

/// Which separator convention a raw path string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeparatorStyle {
    /// Uses `/` only.
    Posix,
    /// Uses `\` somewhere, or starts with a drive root.
    Windows,
    /// Contains no separator and no drive root (a bare file name).
    Ambiguous,
}

impl SeparatorStyle {
    /// Detect the style of `raw`. A path mixing both separators counts as
    /// Windows since `\` never appears in a POSIX path written by hand.
    ///
    /// # Examples
    /// ```
    /// use path_bridge::SeparatorStyle;
    ///
    /// assert_eq!(SeparatorStyle::detect("/a/b"), SeparatorStyle::Posix);
    /// assert_eq!(SeparatorStyle::detect("a\\b"), SeparatorStyle::Windows);
    /// assert_eq!(SeparatorStyle::detect("D:file.txt"), SeparatorStyle::Windows);
    /// assert_eq!(SeparatorStyle::detect("file.txt"), SeparatorStyle::Ambiguous);
    /// ```
    pub fn detect(raw: &str) -> Self {
        if raw.contains(WINDOWS_SEPARATOR)
            || matches!(RootMarker::detect(raw), RootMarker::WindowsDriveRoot(_))
        {
            SeparatorStyle::Windows
        } else if raw.contains(POSIX_SEPARATOR) {
            SeparatorStyle::Posix
        } else {
            SeparatorStyle::Ambiguous
        }
    }
}

/// Split on both separators, dropping empty and whitespace-only tokens.
pub(crate) fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split([POSIX_SEPARATOR, WINDOWS_SEPARATOR])
        .filter(|token| !token.trim().is_empty())
}

/// A path as a root marker plus its non-empty segments
///
/// Separators are not stored; they are chosen when the path is rendered, which
/// is what lets the same value come out in either convention.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentedPath {
    root: RootMarker,
    segments: Vec<String>,
}

impl SegmentedPath {
    /// Parse a raw path written with either separator
    ///
    /// # Examples
    /// ```
    /// use path_bridge::{RootMarker, SegmentedPath};
    ///
    /// let path = SegmentedPath::parse("C:\\FolderA//folderB\\");
    /// assert_eq!(path.root(), RootMarker::WindowsDriveRoot('C'));
    /// assert_eq!(path.segments(), ["FolderA", "folderB"]);
    /// assert_eq!(path.render('\\'), "C:\\FolderA\\folderB");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let root = RootMarker::detect(raw);
        let mut path = Self::with_root(root);
        path.push(root.strip(raw));
        path
    }

    /// An empty path carrying `root`.
    pub fn with_root(root: RootMarker) -> Self {
        Self {
            root,
            segments: Vec::new(),
        }
    }

    pub fn root(&self) -> RootMarker {
        self.root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_rooted(&self) -> bool {
        self.root().is_rooted()
    }

    /// Append every segment of `raw`, ignoring any root it might carry.
    pub fn push(&mut self, raw: &str) {
        self.segments
            .extend(split_tokens(raw).map(|token| token.to_string()));
    }

    /// Render with `separator` between segments and after the root.
    pub fn render(&self, separator: char) -> String {
        let body = self.segments.join(&separator.to_string());
        match self.root() {
            RootMarker::NoRoot => body,
            RootMarker::PosixRoot => format!("{POSIX_SEPARATOR}{body}"),
            RootMarker::WindowsDriveRoot(letter) => format!("{letter}:{separator}{body}"),
        }
    }
}
