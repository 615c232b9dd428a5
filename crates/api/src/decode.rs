//! Manifest decoding
//!
//! Decodes a JSON or YAML manifest into the concrete resource type named by
//! its `kind` field.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::object::Object;
use crate::types::{Event, EventList, Node, NodeList, Pod, PodList, Service, ServiceList};

/// Any known resource, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum AnyObject {
    Pod(Pod),
    PodList(PodList),
    Service(Service),
    ServiceList(ServiceList),
    Node(Node),
    NodeList(NodeList),
    Event(Event),
    EventList(EventList),
}

impl AnyObject {
    /// Decode a JSON manifest
    pub fn from_json(manifest: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(manifest)?)
    }

    /// Decode a YAML manifest
    pub fn from_yaml(manifest: &str) -> Result<Self, DecodeError> {
        Ok(serde_yaml::from_str(manifest)?)
    }

    /// The decoded resource, typed as its concrete kind.
    pub fn as_object(&self) -> &dyn Object {
        match self {
            Self::Pod(pod) => pod,
            Self::PodList(list) => list,
            Self::Service(service) => service,
            Self::ServiceList(list) => list,
            Self::Node(node) => node,
            Self::NodeList(list) => list,
            Self::Event(event) => event,
            Self::EventList(list) => list,
        }
    }
}
