//! Instance-name recovery from paths.
//!
//! Two readers exist. [`extract_instance_name`] keeps the established
//! fixed-offset behavior that deployed participants rely on.
//! [`extract_instance_name_strict`] matches the path structure instead.

use tracing::debug;

use crate::property::PropertyType;
use crate::segment::{split_segments, SEPARATOR};

/// Segment index of the instance name in `/<cluster>/INSTANCES/<instance>/...`.
pub const INSTANCE_SEGMENT_INDEX: usize = 3;

/// Recover the instance name from a path such as
/// `/<cluster>/INSTANCES/<instance>/MESSAGES`.
///
/// The read is triggered when the raw path contains `/INSTANCES/`. The
/// segment at [`INSTANCE_SEGMENT_INDEX`] is then returned, wherever the
/// `INSTANCES` segment actually was; trailing separators are dropped before
/// indexing. Paths without that token, or too short, yield `None`.
///
/// # Examples
///
/// ```
/// use keyspace_core::extract_instance_name;
///
/// assert_eq!(
///     extract_instance_name("/myCluster/INSTANCES/node1/MESSAGES").as_deref(),
///     Some("node1")
/// );
/// assert_eq!(extract_instance_name("/clusterX/IDEALSTATES/resourceY"), None);
/// ```
pub fn extract_instance_name(path: &str) -> Option<String> {
    let marker = format!(
        "{SEPARATOR}{token}{SEPARATOR}",
        token = PropertyType::Instances.token()
    );
    if !path.contains(&marker) {
        return None;
    }

    let name = split_segments(path)
        .get(INSTANCE_SEGMENT_INDEX)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let strict = extract_instance_name_strict(path);
    if name != strict {
        debug!(
            path,
            fixed_offset = ?name,
            structural = ?strict,
            "instance name read at fixed offset disagrees with path structure"
        );
    }
    name
}

/// Recover the instance name only when the path has the exact shape
/// `/<cluster>/INSTANCES/<instance>[/...]`.
pub fn extract_instance_name_strict(path: &str) -> Option<String> {
    let rest = path.strip_prefix(SEPARATOR)?;
    let mut parts = rest.split(SEPARATOR);

    let cluster = parts.next()?;
    if cluster.is_empty() {
        return None;
    }
    if parts.next()? != PropertyType::Instances.token() {
        return None;
    }
    match parts.next()? {
        "" => None,
        instance => Some(instance.to_string()),
    }
}
