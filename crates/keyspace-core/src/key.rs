//! Property keys: every node shape the naming scheme can produce.
//!
//! Key hierarchy under one cluster:
//! ```text
//! /<cluster>/<TOKEN>                                        ClusterRoot
//! /<cluster>/<TOKEN>/<resource>                             Resource
//! /<cluster>/INSTANCES/<instance>                           Instance
//! /<cluster>/INSTANCES/<instance>/<TOKEN>                   InstanceProperty
//! /<cluster>/INSTANCES/<instance>/CURRENTSTATES/<session>   CurrentStateSession
//! /<cluster>/INSTANCES/<instance>/CURRENTSTATES/<session>/<unit>
//!                                                           CurrentState
//! /<cluster>/LIVEINSTANCES/<instance>                       LiveInstance
//! /<cluster>/CONTROLLER/<TOKEN>                             ControllerProperty
//! ```
//!
//! Live instances sit flat under the cluster, never under `INSTANCES`.
//! Current states nest by session, then by unit key.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NamespaceError, NamespaceResult};
use crate::property::PropertyType;
use crate::segment::{check_segment, SEPARATOR};

/// One addressable node in a cluster's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyKey {
    /// Root node of a category: `/<cluster>/<TOKEN>`.
    ClusterRoot { category: PropertyType },
    /// A participant's subtree root.
    Instance { instance: String },
    /// A category nested under a participant.
    InstanceProperty {
        instance: String,
        category: PropertyType,
    },
    /// A participant's liveness node.
    LiveInstance { instance: String },
    /// A named child of a cluster-level category (ideal state, external view).
    Resource {
        category: PropertyType,
        resource: String,
    },
    /// All current states a participant wrote during one session.
    CurrentStateSession { instance: String, session: String },
    /// Current state of one unit for one session.
    CurrentState {
        instance: String,
        session: String,
        unit: String,
    },
    /// A category owned by the distributed controller.
    ControllerProperty { category: PropertyType },
}

impl PropertyKey {
    /// The category whose token appears directly under the cluster root.
    pub fn root_category(&self) -> PropertyType {
        match self {
            Self::ClusterRoot { category } | Self::Resource { category, .. } => *category,
            Self::Instance { .. }
            | Self::InstanceProperty { .. }
            | Self::CurrentStateSession { .. }
            | Self::CurrentState { .. } => PropertyType::Instances,
            Self::LiveInstance { .. } => PropertyType::LiveInstances,
            Self::ControllerProperty { .. } => PropertyType::Controller,
        }
    }

    /// The participant this key belongs to, if any.
    pub fn instance(&self) -> Option<&str> {
        match self {
            Self::Instance { instance }
            | Self::InstanceProperty { instance, .. }
            | Self::LiveInstance { instance }
            | Self::CurrentStateSession { instance, .. }
            | Self::CurrentState { instance, .. } => Some(instance.as_str()),
            _ => None,
        }
    }

    /// Named selectors in path order, checked by `render`.
    fn selectors(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::ClusterRoot { .. } | Self::ControllerProperty { .. } => Vec::new(),
            Self::Instance { instance }
            | Self::InstanceProperty { instance, .. }
            | Self::LiveInstance { instance } => vec![("instance", instance.as_str())],
            Self::Resource { resource, .. } => vec![("resource", resource.as_str())],
            Self::CurrentStateSession { instance, session } => vec![
                ("instance", instance.as_str()),
                ("session", session.as_str()),
            ],
            Self::CurrentState {
                instance,
                session,
                unit,
            } => vec![
                ("instance", instance.as_str()),
                ("session", session.as_str()),
                ("unit", unit.as_str()),
            ],
        }
    }

    /// Segments after the cluster name, in order.
    pub fn segments(&self) -> Vec<&str> {
        let root = self.root_category().token();
        match self {
            Self::ClusterRoot { .. } => vec![root],
            Self::Instance { instance } | Self::LiveInstance { instance } => {
                vec![root, instance.as_str()]
            }
            Self::InstanceProperty { instance, category } => {
                vec![root, instance.as_str(), category.token()]
            }
            Self::Resource { resource, .. } => vec![root, resource.as_str()],
            Self::CurrentStateSession { instance, session } => vec![
                root,
                instance.as_str(),
                PropertyType::CurrentStates.token(),
                session.as_str(),
            ],
            Self::CurrentState {
                instance,
                session,
                unit,
            } => vec![
                root,
                instance.as_str(),
                PropertyType::CurrentStates.token(),
                session.as_str(),
                unit.as_str(),
            ],
            Self::ControllerProperty { category } => vec![root, category.token()],
        }
    }

    /// Build the path for this key under `cluster`.
    pub(crate) fn render(&self, cluster: &str, strict: bool) -> NamespaceResult<String> {
        check_segment("cluster", cluster, strict)?;
        for (field, value) in self.selectors() {
            check_segment(field, value, strict)?;
        }
        if let Self::Resource { category, .. } = self {
            if !category.accepts_resource_selector() {
                return Err(NamespaceError::InvalidArgument {
                    field: "category",
                    reason: format!("{category} does not take a resource selector"),
                });
            }
        }

        let mut path = String::with_capacity(64);
        path.push(SEPARATOR);
        path.push_str(cluster);
        for segment in self.segments() {
            path.push(SEPARATOR);
            path.push_str(segment);
        }
        Ok(path)
    }

    /// Parse a path produced by [`PathNamer`](crate::PathNamer) back into its
    /// cluster name and key.
    ///
    /// Matching is structural: every segment must sit exactly where the
    /// naming scheme puts it.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyspace_core::{PropertyKey, PropertyType};
    ///
    /// let (cluster, key) = PropertyKey::parse("/c1/INSTANCES/node1/MESSAGES").unwrap();
    /// assert_eq!(cluster, "c1");
    /// assert_eq!(
    ///     key,
    ///     PropertyKey::InstanceProperty {
    ///         instance: "node1".to_string(),
    ///         category: PropertyType::Messages,
    ///     }
    /// );
    /// ```
    pub fn parse(path: &str) -> NamespaceResult<(String, Self)> {
        let rest = path
            .strip_prefix(SEPARATOR)
            .ok_or_else(|| NamespaceError::invalid_path(path, "must start with '/'"))?;
        let parts: Vec<&str> = rest.split(SEPARATOR).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(NamespaceError::invalid_path(path, "empty segment"));
        }
        if parts.len() < 2 {
            return Err(NamespaceError::invalid_path(
                path,
                "expected /<cluster>/<category>",
            ));
        }

        let cluster = parts[0].to_string();
        let category = category_at(path, parts[1])?;

        let key = match (category, &parts[2..]) {
            (category, []) => Self::ClusterRoot { category },
            (PropertyType::Instances, [instance]) => Self::Instance {
                instance: instance.to_string(),
            },
            (PropertyType::Instances, [instance, token]) => Self::InstanceProperty {
                instance: instance.to_string(),
                category: category_at(path, token)?,
            },
            (PropertyType::Instances, [instance, token, session])
                if *token == PropertyType::CurrentStates.token() =>
            {
                Self::CurrentStateSession {
                    instance: instance.to_string(),
                    session: session.to_string(),
                }
            }
            (PropertyType::Instances, [instance, token, session, unit])
                if *token == PropertyType::CurrentStates.token() =>
            {
                Self::CurrentState {
                    instance: instance.to_string(),
                    session: session.to_string(),
                    unit: unit.to_string(),
                }
            }
            (PropertyType::LiveInstances, [instance]) => Self::LiveInstance {
                instance: instance.to_string(),
            },
            (PropertyType::Controller, [token]) => Self::ControllerProperty {
                category: category_at(path, token)?,
            },
            (category, [resource]) if category.accepts_resource_selector() => Self::Resource {
                category,
                resource: resource.to_string(),
            },
            _ => {
                return Err(NamespaceError::invalid_path(
                    path,
                    format!("no key shape under {category} has {} segments", parts.len()),
                ))
            }
        };

        debug!(path, ?key, "parsed property path");
        Ok((cluster, key))
    }
}

fn category_at(path: &str, token: &str) -> NamespaceResult<PropertyType> {
    PropertyType::from_token(token)
        .ok_or_else(|| NamespaceError::invalid_path(path, format!("unknown category '{token}'")))
}
