//! Property categories.
//!
//! Every category owns one top-level token under the cluster root. Tokens are
//! persisted as node names in the coordination store, so they never change.
//!
//! | Token | Scope |
//! |-------|-------|
//! | `INSTANCES` | cluster |
//! | `IDEALSTATES` | cluster |
//! | `LIVEINSTANCES` | cluster |
//! | `EXTERNALVIEW` | cluster |
//! | `STATEMODELDEFS` | cluster |
//! | `MESSAGES` | instance |
//! | `CURRENTSTATES` | instance |
//! | `ERRORS` | instance |
//! | `STATUSUPDATES` | instance |
//! | `HEALTHREPORT` | instance |
//! | `PERSISTENTSTATS` | cluster |
//! | `ALERTS` | cluster |
//! | `ALERT_STATUS` | cluster |
//! | `CONTROLLER` | cluster |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NamespaceError;

/// Where a category's nodes live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyScope {
    /// Directly under `/<cluster>/<TOKEN>`.
    Cluster,
    /// Under `/<cluster>/INSTANCES/<instance>/<TOKEN>`.
    Instance,
}

/// A property category of cluster metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "INSTANCES")]
    Instances,
    #[serde(rename = "IDEALSTATES")]
    IdealStates,
    #[serde(rename = "LIVEINSTANCES")]
    LiveInstances,
    #[serde(rename = "EXTERNALVIEW")]
    ExternalView,
    #[serde(rename = "STATEMODELDEFS")]
    StateModelDefs,
    #[serde(rename = "MESSAGES")]
    Messages,
    #[serde(rename = "CURRENTSTATES")]
    CurrentStates,
    #[serde(rename = "ERRORS")]
    Errors,
    #[serde(rename = "STATUSUPDATES")]
    StatusUpdates,
    #[serde(rename = "HEALTHREPORT")]
    HealthReport,
    #[serde(rename = "PERSISTENTSTATS")]
    PersistentStats,
    #[serde(rename = "ALERTS")]
    Alerts,
    #[serde(rename = "ALERT_STATUS")]
    AlertStatus,
    #[serde(rename = "CONTROLLER")]
    Controller,
}

/// (category, token, scope). Single source for every lookup below.
static REGISTRY: [(PropertyType, &str, PropertyScope); 14] = [
    (PropertyType::Instances, "INSTANCES", PropertyScope::Cluster),
    (PropertyType::IdealStates, "IDEALSTATES", PropertyScope::Cluster),
    (PropertyType::LiveInstances, "LIVEINSTANCES", PropertyScope::Cluster),
    (PropertyType::ExternalView, "EXTERNALVIEW", PropertyScope::Cluster),
    (PropertyType::StateModelDefs, "STATEMODELDEFS", PropertyScope::Cluster),
    (PropertyType::Messages, "MESSAGES", PropertyScope::Instance),
    (PropertyType::CurrentStates, "CURRENTSTATES", PropertyScope::Instance),
    (PropertyType::Errors, "ERRORS", PropertyScope::Instance),
    (PropertyType::StatusUpdates, "STATUSUPDATES", PropertyScope::Instance),
    (PropertyType::HealthReport, "HEALTHREPORT", PropertyScope::Instance),
    (PropertyType::PersistentStats, "PERSISTENTSTATS", PropertyScope::Cluster),
    (PropertyType::Alerts, "ALERTS", PropertyScope::Cluster),
    (PropertyType::AlertStatus, "ALERT_STATUS", PropertyScope::Cluster),
    (PropertyType::Controller, "CONTROLLER", PropertyScope::Cluster),
];

impl PropertyType {
    /// Every category, in registry order.
    pub const ALL: [PropertyType; 14] = [
        Self::Instances,
        Self::IdealStates,
        Self::LiveInstances,
        Self::ExternalView,
        Self::StateModelDefs,
        Self::Messages,
        Self::CurrentStates,
        Self::Errors,
        Self::StatusUpdates,
        Self::HealthReport,
        Self::PersistentStats,
        Self::Alerts,
        Self::AlertStatus,
        Self::Controller,
    ];

    fn entry(self) -> &'static (PropertyType, &'static str, PropertyScope) {
        // REGISTRY is laid out in declaration order.
        &REGISTRY[self as usize]
    }

    /// The path segment for this category.
    pub fn token(self) -> &'static str {
        self.entry().1
    }

    pub fn scope(self) -> PropertyScope {
        self.entry().2
    }

    /// Whether this category nests under a participant's subtree.
    pub fn is_instance_scoped(self) -> bool {
        self.scope() == PropertyScope::Instance
    }

    /// Whether a single resource selector may follow the category root.
    ///
    /// `INSTANCES`, `LIVEINSTANCES` and `CONTROLLER` children are owned by
    /// dedicated key shapes, so a generic selector there would alias them.
    pub fn accepts_resource_selector(self) -> bool {
        !matches!(self, Self::Instances | Self::LiveInstances | Self::Controller)
    }

    /// Look up a category by its exact token.
    pub fn from_token(token: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(_, t, _)| *t == token)
            .map(|(category, _, _)| *category)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PropertyType {
    type Err = NamespaceError;

    /// Accepts the token case-insensitively (`currentstates`, `ALERT_STATUS`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::from_token(&upper).ok_or_else(|| NamespaceError::InvalidArgument {
            field: "category",
            reason: format!("unknown property category '{s}'"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_matches_declaration_order() {
        for (idx, category) in PropertyType::ALL.iter().enumerate() {
            assert_eq!(REGISTRY[idx].0, *category);
            assert_eq!(*category as usize, idx);
        }
    }

    #[test]
    fn test_tokens_are_distinct() {
        let tokens: HashSet<&str> = PropertyType::ALL.iter().map(|c| c.token()).collect();
        assert_eq!(tokens.len(), PropertyType::ALL.len());
    }

    #[test]
    fn test_tokens_have_no_separator() {
        for category in PropertyType::ALL {
            assert!(!category.token().contains('/'), "{category:?}");
            assert!(!category.token().is_empty());
        }
    }

    #[test]
    fn test_instance_scoped_set() {
        let scoped: Vec<PropertyType> = PropertyType::ALL
            .into_iter()
            .filter(|c| c.is_instance_scoped())
            .collect();
        assert_eq!(
            scoped,
            vec![
                PropertyType::Messages,
                PropertyType::CurrentStates,
                PropertyType::Errors,
                PropertyType::StatusUpdates,
                PropertyType::HealthReport,
            ]
        );
        assert_eq!(PropertyType::Instances.scope(), PropertyScope::Cluster);
        assert_eq!(PropertyType::LiveInstances.scope(), PropertyScope::Cluster);
    }

    #[test]
    fn test_resource_selector_excludes_owned_roots() {
        assert!(PropertyType::IdealStates.accepts_resource_selector());
        assert!(PropertyType::ExternalView.accepts_resource_selector());
        assert!(!PropertyType::Instances.accepts_resource_selector());
        assert!(!PropertyType::LiveInstances.accepts_resource_selector());
        assert!(!PropertyType::Controller.accepts_resource_selector());
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for category in PropertyType::ALL {
            let parsed: PropertyType = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            "alert_status".parse::<PropertyType>().unwrap(),
            PropertyType::AlertStatus
        );
        assert_eq!(
            " CurrentStates ".parse::<PropertyType>().unwrap(),
            PropertyType::CurrentStates
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let result = "CONFIGS".parse::<PropertyType>();
        assert!(matches!(
            result,
            Err(NamespaceError::InvalidArgument { field: "category", .. })
        ));
    }

    #[test]
    fn test_from_token_is_exact() {
        assert_eq!(PropertyType::from_token("MESSAGES"), Some(PropertyType::Messages));
        assert_eq!(PropertyType::from_token("messages"), None);
    }

    #[test]
    fn test_serde_uses_token() {
        for category in PropertyType::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.token()));
            let back: PropertyType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }
}
