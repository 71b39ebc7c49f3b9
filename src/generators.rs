//! Property test generators for path handling
//!
//! Generators produce paths in both conventions, with and without roots, plus
//! file names that are clean or deliberately dirty for a given platform.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate valid name components (no separators, no colons, safe characters)
    pub fn name_component() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_ .-]{0,20}[a-zA-Z0-9_]"
            .prop_filter("Non-empty component", |s| !s.trim().is_empty())
    }

    /// Generate file extensions commonly found in build output
    pub fn file_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("dll".to_string()),
            Just("xml".to_string()),
            Just("json".to_string()),
            Just("txt".to_string()),
            Just("rs".to_string()),
            Just("".to_string()), // Files without extension
        ]
    }

    /// Generate a complete file name with extension
    pub fn file_name() -> impl Strategy<Value = String> {
        (Self::name_component(), Self::file_extension()).prop_map(|(name, ext)| {
            if ext.is_empty() {
                name
            } else {
                format!("{}.{}", name, ext)
            }
        })
    }

    /// Generate directory lists followed by a file name
    pub fn relative_parts() -> impl Strategy<Value = Vec<String>> {
        (
            prop::collection::vec(Self::name_component(), 0..=4),
            Self::file_name(),
        )
            .prop_map(|(mut dirs, file)| {
                dirs.push(file);
                dirs
            })
    }

    /// Generate absolute POSIX paths
    pub fn posix_absolute_path() -> impl Strategy<Value = String> {
        Self::relative_parts().prop_map(|parts| format!("/{}", parts.join("/")))
    }

    /// Generate drive-rooted Windows paths
    pub fn windows_absolute_path() -> impl Strategy<Value = String> {
        (prop::char::range('A', 'Z'), Self::relative_parts())
            .prop_map(|(drive, parts)| format!("{}:\\{}", drive, parts.join("\\")))
    }

    /// Generate relative paths with mixed separators
    pub fn mixed_relative_path() -> impl Strategy<Value = String> {
        (Self::relative_parts(), any::<bool>()).prop_map(|(parts, slash_first)| {
            let mut result = String::new();
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    // Alternate forward and backward slashes
                    if (i % 2 == 0) == slash_first {
                        result.push('/');
                    } else {
                        result.push('\\');
                    }
                }
                result.push_str(part);
            }
            result
        })
    }

    /// Generate any of the above
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            2 => Self::posix_absolute_path(),
            2 => Self::windows_absolute_path(),
            2 => Self::mixed_relative_path(),
            1 => Self::file_name(),
        ]
    }

    /// Generate file names containing characters Windows rejects
    pub fn windows_dirty_file_name() -> impl Strategy<Value = String> {
        (
            Self::name_component(),
            prop::sample::select(vec!['<', '>', ':', '"', '/', '\\', '|', '?', '*', '\u{7}']),
            Self::name_component(),
        )
            .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ForeignForm;
    use crate::platform::Platform;
    use crate::segments::{RootMarker, SegmentedPath, SeparatorStyle};
    use crate::validate::{validate_file_name, validate_path};

    proptest! {
        #[test]
        fn generated_file_names_are_valid_on_posix(
            name in PathGenerators::file_name()
        ) {
            prop_assert!(validate_file_name(&name, Platform::Posix).is_ok());
        }

        #[test]
        fn dirty_file_names_are_invalid_on_windows(
            name in PathGenerators::windows_dirty_file_name()
        ) {
            prop_assert!(validate_file_name(&name, Platform::Windows).is_err());
        }

        #[test]
        fn windows_paths_classify_as_drive_rooted(
            path in PathGenerators::windows_absolute_path()
        ) {
            prop_assert_eq!(SeparatorStyle::detect(&path), SeparatorStyle::Windows);
            let is_drive_rooted = matches!(
                ForeignForm::classify(&path),
                Ok(ForeignForm::DriveRooted { .. })
            );
            prop_assert!(is_drive_rooted);
        }

        #[test]
        fn posix_paths_need_no_emulation(
            path in PathGenerators::posix_absolute_path()
        ) {
            prop_assert_eq!(RootMarker::detect(&path), RootMarker::PosixRoot);
            prop_assert_eq!(ForeignForm::classify(&path), Ok(ForeignForm::Native));
        }

        #[test]
        fn parse_render_is_stable(
            path in PathGenerators::any_path()
        ) {
            let parsed = SegmentedPath::parse(&path);
            let rendered = parsed.render('/');
            prop_assert_eq!(SegmentedPath::parse(&rendered), parsed);
            prop_assert!(!rendered.contains("//"));
        }

        #[test]
        fn generated_paths_are_valid_everywhere(
            path in PathGenerators::any_path()
        ) {
            prop_assert!(validate_path(&path, Platform::Windows).is_ok());
            prop_assert!(validate_path(&path, Platform::Posix).is_ok());
        }
    }
}
