pub mod categories;
pub mod dispatch;
pub mod extract;
pub mod parse;
pub mod path;

pub use dispatch::dispatch;

use keyspace_core::{NamerConfig, PathNamer};

/// Namer from the environment, with `--strict-segments` forcing strict mode on.
pub(crate) fn namer(strict_flag: bool) -> PathNamer {
    let mut config = NamerConfig::from_env();
    if strict_flag {
        config = config.with_strict_segments(true);
    }
    tracing::debug!(strict_segments = config.strict_segments, "namer configured");
    PathNamer::new(config)
}
