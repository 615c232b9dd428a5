//! Resource types
//!
//! Core resources and their list forms. Each type is registered with
//! [`api_object!`](crate::api_object) so it can be referenced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api_object;
use crate::meta::{ListMeta, ObjectMeta};
use crate::reference::ObjectReference;

/// A group of containers scheduled together on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: PodSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    /// Node the pod is bound to (empty while unscheduled)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub node_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PodList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<Pod>,
}

/// A named, load-balanced endpoint in front of a set of pods.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    /// Port the service is exposed on
    #[serde(default)]
    pub port: u16,

    /// Label query selecting the backing pods
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub selector: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<Service>,
}

/// A worker machine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: NodeSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodeSpec {
    /// Pod IP range assigned to the node
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pod_cidr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodeList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<Node>,
}

/// A report of something that happened to another resource.
///
/// The affected resource is pointed at by reference, not embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Resource this event is about
    #[serde(default)]
    pub involved_object: ObjectReference,

    /// Short, machine-readable reason (e.g., "Scheduled")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(default)]
    pub source: EventSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_timestamp: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<chrono::DateTime<chrono::Utc>>,

    /// Number of times this event has occurred
    #[serde(default)]
    pub count: i32,
}

/// Component that reported an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub component: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<Event>,
}

impl Event {
    /// Create an event about `involved_object`, occurring now.
    pub fn new(involved_object: ObjectReference, reason: &str, message: &str) -> Self {
        let now = chrono::Utc::now();
        Self {
            metadata: ObjectMeta {
                namespace: involved_object.namespace.clone(),
                ..Default::default()
            },
            involved_object,
            reason: reason.to_string(),
            message: message.to_string(),
            first_timestamp: Some(now),
            last_timestamp: Some(now),
            count: 1,
            ..Default::default()
        }
    }
}

api_object!(
    Pod => metadata,
    PodList => metadata,
    Service => metadata,
    ServiceList => metadata,
    Node => metadata,
    NodeList => metadata,
    Event => metadata,
    EventList => metadata,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::get_reference;
    use crate::Object;

    #[test]
    fn test_kinds_match_type_names() {
        let objects: [&dyn Object; 8] = [
            &Pod::default(),
            &PodList::default(),
            &Service::default(),
            &ServiceList::default(),
            &Node::default(),
            &NodeList::default(),
            &Event::default(),
            &EventList::default(),
        ];
        let kinds: Vec<&str> = objects.iter().map(|o| o.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                "Pod",
                "PodList",
                "Service",
                "ServiceList",
                "Node",
                "NodeList",
                "Event",
                "EventList"
            ]
        );
    }

    #[test]
    fn test_event_points_at_pod_by_reference() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: "foo".to_string(),
                namespace: "default".to_string(),
                uid: "bar".to_string(),
                resource_version: "42".to_string(),
                self_link: "/api/v1beta1/pods/foo".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let reference = get_reference(Some(&pod)).expect("Failed to reference pod");
        let event = Event::new(reference.clone(), "Scheduled", "Successfully assigned foo");

        assert_eq!(event.involved_object, reference);
        assert_eq!(event.metadata.namespace, "default");
        assert_eq!(event.count, 1);
        assert_eq!(event.first_timestamp, event.last_timestamp);
    }
}
