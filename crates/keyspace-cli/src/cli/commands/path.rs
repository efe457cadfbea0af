//! `keyspace path`: render one property node path.
//!
//! The category decides the key shape:
//! - `INSTANCES --instance n` is the participant root
//! - `LIVEINSTANCES --instance n` is the flat liveness node
//! - `CURRENTSTATES --instance n --session s [--unit u]` nests by session
//! - any other category with `--instance` nests under the participant
//! - `--resource r` names a child of a cluster-level category
//! - `--controller` places the category under `CONTROLLER`

use anyhow::{bail, Context};
use keyspace_core::{PropertyKey, PropertyType};
use serde::Serialize;

use super::super::args::PathArgs;
use crate::exit_codes;

#[derive(Debug, Serialize)]
struct PathOutput<'a> {
    cluster: &'a str,
    key: &'a PropertyKey,
    path: &'a str,
}

pub fn run(args: PathArgs, strict_segments: bool) -> anyhow::Result<i32> {
    let key = resolve_key(&args)?;
    let path = super::namer(strict_segments)
        .property_path(&args.cluster, &key)
        .with_context(|| format!("cannot build path for {}", args.category))?;

    if args.json {
        let out = PathOutput {
            cluster: &args.cluster,
            key: &key,
            path: &path,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{path}");
    }
    Ok(exit_codes::SUCCESS)
}

pub(crate) fn resolve_key(args: &PathArgs) -> anyhow::Result<PropertyKey> {
    let category = args.category;

    if args.session.is_some() && category != PropertyType::CurrentStates {
        bail!("--session only applies to {}", PropertyType::CurrentStates);
    }
    if args.controller {
        return Ok(PropertyKey::ControllerProperty { category });
    }
    if let Some(resource) = &args.resource {
        return Ok(PropertyKey::Resource {
            category,
            resource: resource.clone(),
        });
    }

    let Some(instance) = args.instance.clone() else {
        return Ok(PropertyKey::ClusterRoot { category });
    };

    let key = match (category, args.session.clone(), args.unit.clone()) {
        (PropertyType::Instances, _, _) => PropertyKey::Instance { instance },
        (PropertyType::LiveInstances, _, _) => PropertyKey::LiveInstance { instance },
        (PropertyType::CurrentStates, Some(session), Some(unit)) => PropertyKey::CurrentState {
            instance,
            session,
            unit,
        },
        (PropertyType::CurrentStates, Some(session), None) => {
            PropertyKey::CurrentStateSession { instance, session }
        }
        (category, _, _) => PropertyKey::InstanceProperty { instance, category },
    };
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(category: PropertyType) -> PathArgs {
        PathArgs {
            category,
            cluster: "c".to_string(),
            instance: None,
            resource: None,
            session: None,
            unit: None,
            controller: false,
            json: false,
        }
    }

    #[test]
    fn test_cluster_root() {
        let key = resolve_key(&args(PropertyType::IdealStates)).unwrap();
        assert_eq!(
            key,
            PropertyKey::ClusterRoot {
                category: PropertyType::IdealStates
            }
        );
    }

    #[test]
    fn test_live_instance_stays_flat() {
        let mut a = args(PropertyType::LiveInstances);
        a.instance = Some("n".into());
        assert_eq!(
            resolve_key(&a).unwrap(),
            PropertyKey::LiveInstance {
                instance: "n".into()
            }
        );
    }

    #[test]
    fn test_current_state_levels() {
        let mut a = args(PropertyType::CurrentStates);
        a.instance = Some("n".into());
        assert_eq!(
            resolve_key(&a).unwrap(),
            PropertyKey::InstanceProperty {
                instance: "n".into(),
                category: PropertyType::CurrentStates
            }
        );

        a.session = Some("s".into());
        assert_eq!(
            resolve_key(&a).unwrap(),
            PropertyKey::CurrentStateSession {
                instance: "n".into(),
                session: "s".into()
            }
        );

        a.unit = Some("u".into());
        assert_eq!(
            resolve_key(&a).unwrap(),
            PropertyKey::CurrentState {
                instance: "n".into(),
                session: "s".into(),
                unit: "u".into()
            }
        );
    }

    #[test]
    fn test_session_outside_current_states() {
        let mut a = args(PropertyType::Messages);
        a.instance = Some("n".into());
        a.session = Some("s".into());
        assert!(resolve_key(&a).is_err());
    }

    #[test]
    fn test_resource_and_controller() {
        let mut a = args(PropertyType::ExternalView);
        a.resource = Some("db".into());
        assert_eq!(
            resolve_key(&a).unwrap(),
            PropertyKey::Resource {
                category: PropertyType::ExternalView,
                resource: "db".into()
            }
        );

        let mut a = args(PropertyType::Alerts);
        a.controller = true;
        assert_eq!(
            resolve_key(&a).unwrap(),
            PropertyKey::ControllerProperty {
                category: PropertyType::Alerts
            }
        );
    }
}
