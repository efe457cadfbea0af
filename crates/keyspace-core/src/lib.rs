//! Hierarchical namespace addressing for cluster coordination stores.
//!
//! This crate maps structured identifiers (cluster, property category,
//! instance, session, unit key) to the canonical node paths a controller and
//! its participants share in a ZooKeeper-like tree, and partially inverts that
//! mapping.
//!
//! - Category registry with stable persisted tokens
//! - Path construction for every category, cluster- or instance-scoped
//! - Fixed-offset instance-name extraction, plus a structural variant
//! - Structural parsing of paths back into property keys
//!
//! # Quick Start
//!
//! ```
//! use keyspace_core::{extract_instance_name, PathNamer, PropertyType};
//!
//! let namer = PathNamer::default();
//! let path = namer.messages_path("myCluster", "node1").unwrap();
//! assert_eq!(path, "/myCluster/INSTANCES/node1/MESSAGES");
//! assert_eq!(extract_instance_name(&path).as_deref(), Some("node1"));
//!
//! let ideal = namer.cluster_scoped_path("myCluster", PropertyType::IdealStates).unwrap();
//! assert_eq!(ideal, "/myCluster/IDEALSTATES");
//! ```
//!
//! # Path layout
//!
//! ```text
//! /<cluster>/<CATEGORY_TOKEN>[/<selector1>[/<selector2>[...]]]
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `KEYSPACE_STRICT_SEGMENTS` | Reject selectors containing `/` (default: off) |

pub mod config;
pub mod error;
pub mod extract;
pub mod key;
pub mod namer;
pub mod property;
mod segment;

pub use config::{NamerConfig, STRICT_SEGMENTS_ENV};
pub use error::{NamespaceError, NamespaceResult};
pub use extract::{extract_instance_name, extract_instance_name_strict, INSTANCE_SEGMENT_INDEX};
pub use key::PropertyKey;
pub use namer::{
    cluster_scoped_path, current_state_path, instance_path, instance_scoped_path,
    live_instance_path, property_path, resource_path, PathNamer,
};
pub use property::{PropertyScope, PropertyType};
pub use segment::SEPARATOR;

/// Parse a path back into its cluster name and [`PropertyKey`].
pub fn parse_property_path(path: &str) -> NamespaceResult<(String, PropertyKey)> {
    PropertyKey::parse(path)
}
