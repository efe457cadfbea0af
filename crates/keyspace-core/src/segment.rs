//! Segment splitting and checks shared by the forward and reverse mappings.

use crate::error::{NamespaceError, NamespaceResult};

/// Path separator.
pub const SEPARATOR: char = '/';

/// Check one caller-supplied segment.
///
/// Empty segments are always rejected. A separator inside a segment is only
/// rejected when `strict` is set.
pub(crate) fn check_segment(field: &'static str, value: &str, strict: bool) -> NamespaceResult<()> {
    if value.is_empty() {
        return Err(NamespaceError::empty(field));
    }
    if strict && value.contains(SEPARATOR) {
        return Err(NamespaceError::InvalidArgument {
            field,
            reason: format!("'{value}' contains the path separator '{SEPARATOR}'"),
        });
    }
    Ok(())
}

/// Split a path on the separator, dropping trailing empty segments.
///
/// Index 0 is the empty string before a leading separator, so for
/// `/c/INSTANCES/n` the instance sits at index 3.
pub(crate) fn split_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_segment_empty() {
        let result = check_segment("instance", "", false);
        assert!(matches!(
            result,
            Err(NamespaceError::InvalidArgument { field: "instance", .. })
        ));
    }

    #[test]
    fn test_check_segment_separator_lenient() {
        assert!(check_segment("resource", "db/0", false).is_ok());
    }

    #[test]
    fn test_check_segment_separator_strict() {
        let err = check_segment("resource", "db/0", true).unwrap_err();
        assert!(err.to_string().contains("path separator"), "{err}");
    }

    #[test]
    fn test_split_segments_leading_separator() {
        assert_eq!(split_segments("/c/INSTANCES/n"), vec!["", "c", "INSTANCES", "n"]);
    }

    #[test]
    fn test_split_segments_trims_trailing_empties() {
        assert_eq!(split_segments("/c/INSTANCES//"), vec!["", "c", "INSTANCES"]);
        assert_eq!(split_segments("/c//x"), vec!["", "c", "", "x"]);
        assert!(split_segments("").is_empty());
        assert!(split_segments("///").is_empty());
    }
}
