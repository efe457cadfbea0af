//! Path construction for every property category.
//!
//! Every helper describes its node as a [`PropertyKey`] and hands it to
//! [`PathNamer::property_path`], so the layout rules live in one place.
//! The free functions at the bottom of this module use the default
//! configuration, which matches the reference scheme exactly.

use tracing::debug;

use crate::config::NamerConfig;
use crate::error::NamespaceResult;
use crate::key::PropertyKey;
use crate::property::PropertyType;

/// Builds coordination-store paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathNamer {
    config: NamerConfig,
}

impl PathNamer {
    pub fn new(config: NamerConfig) -> Self {
        Self { config }
    }

    /// Namer configured from environment variables.
    pub fn from_env() -> Self {
        Self::new(NamerConfig::from_env())
    }

    pub fn config(&self) -> &NamerConfig {
        &self.config
    }

    /// Render any key under `cluster`.
    pub fn property_path(&self, cluster: &str, key: &PropertyKey) -> NamespaceResult<String> {
        let path = key.render(cluster, self.config.strict_segments)?;
        debug!(cluster, ?key, %path, "built property path");
        Ok(path)
    }

    /// `/<cluster>/<TOKEN>`.
    pub fn cluster_scoped_path(
        &self,
        cluster: &str,
        category: PropertyType,
    ) -> NamespaceResult<String> {
        self.property_path(cluster, &PropertyKey::ClusterRoot { category })
    }

    /// `/<cluster>/INSTANCES/<instance>/<TOKEN>`.
    ///
    /// Accepts any category; cluster-scoped ones simply land under the
    /// instance subtree, which never aliases their cluster-level node.
    pub fn instance_scoped_path(
        &self,
        cluster: &str,
        instance: &str,
        category: PropertyType,
    ) -> NamespaceResult<String> {
        self.property_path(
            cluster,
            &PropertyKey::InstanceProperty {
                instance: instance.to_string(),
                category,
            },
        )
    }

    /// `/<cluster>/INSTANCES/<instance>`: everything one participant owns.
    pub fn instance_path(&self, cluster: &str, instance: &str) -> NamespaceResult<String> {
        self.property_path(
            cluster,
            &PropertyKey::Instance {
                instance: instance.to_string(),
            },
        )
    }

    /// `/<cluster>/LIVEINSTANCES/<instance>`.
    ///
    /// Liveness nodes are ephemeral session markers kept flat at cluster
    /// level. This is not `instance_scoped_path(.., LiveInstances)`.
    pub fn live_instance_path(&self, cluster: &str, instance: &str) -> NamespaceResult<String> {
        self.property_path(
            cluster,
            &PropertyKey::LiveInstance {
                instance: instance.to_string(),
            },
        )
    }

    /// `/<cluster>/<TOKEN>/<resource>`, for ideal states and external views.
    ///
    /// `INSTANCES`, `LIVEINSTANCES` and `CONTROLLER` are rejected with
    /// [`InvalidArgument`](crate::NamespaceError::InvalidArgument) on
    /// `category`: their children are built by
    /// [`instance_path`](Self::instance_path),
    /// [`live_instance_path`](Self::live_instance_path) and
    /// [`controller_property_path`](Self::controller_property_path). This is
    /// stricter than plain concatenation, which accepted any category.
    pub fn resource_path(
        &self,
        cluster: &str,
        category: PropertyType,
        resource: &str,
    ) -> NamespaceResult<String> {
        self.property_path(
            cluster,
            &PropertyKey::Resource {
                category,
                resource: resource.to_string(),
            },
        )
    }

    /// `/<cluster>/INSTANCES/<instance>/CURRENTSTATES/<session>/<unit>`.
    ///
    /// Current states are bucketed by session, then by unit key. One node per
    /// unit under a single watch point would grow without bound, while one
    /// watched node per partition replica multiplies controller watches by
    /// partitions x replicas x resources. Keep both levels.
    pub fn current_state_path(
        &self,
        cluster: &str,
        instance: &str,
        session: &str,
        unit: &str,
    ) -> NamespaceResult<String> {
        self.property_path(
            cluster,
            &PropertyKey::CurrentState {
                instance: instance.to_string(),
                session: session.to_string(),
                unit: unit.to_string(),
            },
        )
    }

    /// `/<cluster>/INSTANCES/<instance>/CURRENTSTATES/<session>`.
    pub fn current_state_session_path(
        &self,
        cluster: &str,
        instance: &str,
        session: &str,
    ) -> NamespaceResult<String> {
        self.property_path(
            cluster,
            &PropertyKey::CurrentStateSession {
                instance: instance.to_string(),
                session: session.to_string(),
            },
        )
    }

    /// `/<cluster>/CONTROLLER/<TOKEN>`: the distributed controller's subtree.
    pub fn controller_property_path(
        &self,
        cluster: &str,
        category: PropertyType,
    ) -> NamespaceResult<String> {
        self.property_path(cluster, &PropertyKey::ControllerProperty { category })
    }

    pub fn member_instances_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::Instances)
    }

    pub fn ideal_states_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::IdealStates)
    }

    pub fn ideal_state_path(&self, cluster: &str, resource: &str) -> NamespaceResult<String> {
        self.resource_path(cluster, PropertyType::IdealStates, resource)
    }

    pub fn live_instances_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::LiveInstances)
    }

    pub fn external_views_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::ExternalView)
    }

    pub fn external_view_path(&self, cluster: &str, resource: &str) -> NamespaceResult<String> {
        self.resource_path(cluster, PropertyType::ExternalView, resource)
    }

    pub fn state_model_defs_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::StateModelDefs)
    }

    pub fn messages_path(&self, cluster: &str, instance: &str) -> NamespaceResult<String> {
        self.instance_scoped_path(cluster, instance, PropertyType::Messages)
    }

    pub fn current_state_base_path(
        &self,
        cluster: &str,
        instance: &str,
    ) -> NamespaceResult<String> {
        self.instance_scoped_path(cluster, instance, PropertyType::CurrentStates)
    }

    pub fn errors_path(&self, cluster: &str, instance: &str) -> NamespaceResult<String> {
        self.instance_scoped_path(cluster, instance, PropertyType::Errors)
    }

    pub fn status_updates_path(&self, cluster: &str, instance: &str) -> NamespaceResult<String> {
        self.instance_scoped_path(cluster, instance, PropertyType::StatusUpdates)
    }

    pub fn health_report_path(&self, cluster: &str, instance: &str) -> NamespaceResult<String> {
        self.instance_scoped_path(cluster, instance, PropertyType::HealthReport)
    }

    pub fn persistent_stats_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::PersistentStats)
    }

    pub fn alerts_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::Alerts)
    }

    pub fn alert_status_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::AlertStatus)
    }

    pub fn controller_path(&self, cluster: &str) -> NamespaceResult<String> {
        self.cluster_scoped_path(cluster, PropertyType::Controller)
    }
}

/// [`PathNamer::cluster_scoped_path`] with the default configuration.
pub fn cluster_scoped_path(cluster: &str, category: PropertyType) -> NamespaceResult<String> {
    PathNamer::default().cluster_scoped_path(cluster, category)
}

/// [`PathNamer::instance_scoped_path`] with the default configuration.
pub fn instance_scoped_path(
    cluster: &str,
    instance: &str,
    category: PropertyType,
) -> NamespaceResult<String> {
    PathNamer::default().instance_scoped_path(cluster, instance, category)
}

/// [`PathNamer::instance_path`] with the default configuration.
pub fn instance_path(cluster: &str, instance: &str) -> NamespaceResult<String> {
    PathNamer::default().instance_path(cluster, instance)
}

/// [`PathNamer::live_instance_path`] with the default configuration.
pub fn live_instance_path(cluster: &str, instance: &str) -> NamespaceResult<String> {
    PathNamer::default().live_instance_path(cluster, instance)
}

/// [`PathNamer::resource_path`] with the default configuration. Owned roots
/// (`INSTANCES`, `LIVEINSTANCES`, `CONTROLLER`) are rejected the same way.
pub fn resource_path(
    cluster: &str,
    category: PropertyType,
    resource: &str,
) -> NamespaceResult<String> {
    PathNamer::default().resource_path(cluster, category, resource)
}

/// [`PathNamer::current_state_path`] with the default configuration.
///
/// ```
/// assert_eq!(
///     keyspace_core::current_state_path("myCluster", "node1", "session42", "db_0").unwrap(),
///     "/myCluster/INSTANCES/node1/CURRENTSTATES/session42/db_0"
/// );
/// ```
pub fn current_state_path(
    cluster: &str,
    instance: &str,
    session: &str,
    unit: &str,
) -> NamespaceResult<String> {
    PathNamer::default().current_state_path(cluster, instance, session, unit)
}

/// [`PathNamer::property_path`] with the default configuration.
pub fn property_path(cluster: &str, key: &PropertyKey) -> NamespaceResult<String> {
    PathNamer::default().property_path(cluster, key)
}
