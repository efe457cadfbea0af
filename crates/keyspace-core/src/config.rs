//! Namer configuration.

use serde::{Deserialize, Serialize};

/// Environment variable enabling strict segment checks.
pub const STRICT_SEGMENTS_ENV: &str = "KEYSPACE_STRICT_SEGMENTS";

/// Options for [`PathNamer`](crate::PathNamer).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamerConfig {
    /// Reject selectors containing the path separator.
    ///
    /// Off by default: the reference scheme concatenates selectors verbatim, so
    /// a `/` inside a selector silently produces extra segments.
    pub strict_segments: bool,
}

impl NamerConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `KEYSPACE_STRICT_SEGMENTS` | `1`/`true` rejects separators inside selectors |
    pub fn from_env() -> Self {
        Self {
            strict_segments: std::env::var(STRICT_SEGMENTS_ENV)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Enable or disable strict segment checks.
    pub fn with_strict_segments(mut self, strict: bool) -> Self {
        self.strict_segments = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_is_lenient() {
        assert!(!NamerConfig::default().strict_segments);
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(STRICT_SEGMENTS_ENV, "TRUE");
        assert!(NamerConfig::from_env().strict_segments);

        std::env::set_var(STRICT_SEGMENTS_ENV, "0");
        assert!(!NamerConfig::from_env().strict_segments);

        std::env::remove_var(STRICT_SEGMENTS_ENV);
        assert!(!NamerConfig::from_env().strict_segments);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let config: NamerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NamerConfig::default());

        let config: NamerConfig = serde_json::from_str(r#"{"strict_segments": true}"#).unwrap();
        assert_eq!(config, NamerConfig::default().with_strict_segments(true));
    }
}
