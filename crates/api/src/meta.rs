//! Resource metadata
//!
//! Identity and versioning fields carried by every API resource. Singular
//! resources embed [`ObjectMeta`], list resources embed [`ListMeta`]. Both are
//! read through the [`ResourceMeta`] accessor so callers never need to know
//! which block a resource carries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata of a singular resource.
///
/// Empty strings mean "not set"; they are skipped on serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Name, unique within the namespace
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Namespace (empty for cluster-scoped resources)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Unique identity assigned at creation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,

    /// Opaque version used for optimistic concurrency
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,

    /// Canonical path this resource is served at, e.g. `/api/v1beta1/pods/foo`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub self_link: String,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// Metadata of a list resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Version of the collection as a whole
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,

    /// Canonical path of the collection, e.g. `/api/v1beta2/services`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub self_link: String,
}

/// Read-only view over a resource's metadata block.
///
/// Fields a block does not carry are reported as `""`.
pub trait ResourceMeta {
    fn name(&self) -> &str;
    fn namespace(&self) -> &str;
    fn uid(&self) -> &str;
    fn resource_version(&self) -> &str;
    fn self_link(&self) -> &str;
}

impl ResourceMeta for ObjectMeta {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn uid(&self) -> &str {
        &self.uid
    }

    fn resource_version(&self) -> &str {
        &self.resource_version
    }

    fn self_link(&self) -> &str {
        &self.self_link
    }
}

impl ResourceMeta for ListMeta {
    fn name(&self) -> &str {
        ""
    }

    fn namespace(&self) -> &str {
        ""
    }

    fn uid(&self) -> &str {
        ""
    }

    fn resource_version(&self) -> &str {
        &self.resource_version
    }

    fn self_link(&self) -> &str {
        &self.self_link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_meta_has_no_identity() {
        let meta = ListMeta {
            resource_version: "42".to_string(),
            self_link: "/api/v1beta2/services".to_string(),
        };
        assert_eq!(meta.name(), "");
        assert_eq!(meta.namespace(), "");
        assert_eq!(meta.uid(), "");
        assert_eq!(meta.resource_version(), "42");
        assert_eq!(meta.self_link(), "/api/v1beta2/services");
    }

    #[test]
    fn test_object_meta_serializes_camel_case_and_skips_empty() {
        let meta = ObjectMeta {
            name: "foo".to_string(),
            resource_version: "42".to_string(),
            self_link: "/api/v1beta1/pods/foo".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&meta).expect("Failed to serialize ObjectMeta");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "foo",
                "resourceVersion": "42",
                "selfLink": "/api/v1beta1/pods/foo",
            })
        );
    }

    #[test]
    fn test_object_meta_deserializes_missing_fields_as_empty() {
        let meta: ObjectMeta = serde_json::from_str(r#"{"name": "foo", "uid": "bar"}"#)
            .expect("Failed to deserialize ObjectMeta");
        assert_eq!(meta.name(), "foo");
        assert_eq!(meta.uid(), "bar");
        assert_eq!(meta.namespace(), "", "Missing namespace should be empty");
        assert_eq!(meta.self_link(), "", "Missing selfLink should be empty");
        assert!(meta.labels.is_empty());
    }
}
