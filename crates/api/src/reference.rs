//! Object references
//!
//! An [`ObjectReference`] points at a resource by kind, version and identity
//! instead of embedding it. References are built from any [`Object`]: the
//! kind comes from the object's type, the API version from the second
//! segment of its self-link, and the identity fields are copied from its
//! metadata.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ReferenceError;
use crate::object::Object;

/// Reference to an API resource.
///
/// Empty fields are omitted on serialization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    /// Kind of the referent (e.g., "Pod", "ServiceList")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Namespace of the referent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Name of the referent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// UID of the referent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,

    /// API version of the referent (e.g., "v1beta1")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    /// Resource version the reference was taken at
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,

    /// Path to a sub-object of the referent, e.g. `spec.containers{nginx}`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field_path: String,
}

/// Build a reference to `obj`.
///
/// Fails with [`ReferenceError::NilObject`] when no object is given,
/// [`ReferenceError::NotAnApiObject`] when the object carries no metadata,
/// and [`ReferenceError::MalformedSelfLink`] when a non-empty self-link is
/// not of the form `/<root>/<version>/...`. An empty self-link yields an
/// empty API version.
pub fn get_reference(obj: Option<&dyn Object>) -> Result<ObjectReference, ReferenceError> {
    let obj = obj.ok_or(ReferenceError::NilObject)?;
    let kind = obj.kind();
    let meta = obj
        .as_metadata()
        .ok_or(ReferenceError::NotAnApiObject { kind })?
        .resource_meta();

    let api_version = match meta.self_link() {
        "" => "",
        self_link => parse_api_version(self_link)?,
    };

    Ok(ObjectReference {
        kind: kind.to_string(),
        namespace: meta.namespace().to_string(),
        name: meta.name().to_string(),
        uid: meta.uid().to_string(),
        api_version: api_version.to_string(),
        resource_version: meta.resource_version().to_string(),
        field_path: String::new(),
    })
}

/// Build a reference to a sub-object of `obj` addressed by `field_path`.
pub fn get_partial_reference(
    obj: Option<&dyn Object>,
    field_path: &str,
) -> Result<ObjectReference, ReferenceError> {
    let mut reference = get_reference(obj)?;
    reference.field_path = field_path.to_string();
    Ok(reference)
}

/// Extract the API version from a self-link.
///
/// The self-link must start with `/` and carry at least two non-empty
/// segments; the second one is the version. `/api/v1beta1/pods/foo` yields
/// `v1beta1`.
pub fn parse_api_version(self_link: &str) -> Result<&str, ReferenceError> {
    let malformed = || ReferenceError::MalformedSelfLink(self_link.to_string());
    let path = self_link.strip_prefix('/').ok_or_else(malformed)?;
    let mut segments = path.split('/');
    match (segments.next(), segments.next()) {
        (Some(root), Some(version)) if !root.is_empty() && !version.is_empty() => Ok(version),
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_version_takes_second_segment() {
        assert_eq!(parse_api_version("/api/v1beta1/pods/foo"), Ok("v1beta1"));
        assert_eq!(parse_api_version("/api/v1beta2/services"), Ok("v1beta2"));
        assert_eq!(parse_api_version("/api/v1beta3"), Ok("v1beta3"));
        assert_eq!(parse_api_version("/anything/v2/a/b/c/"), Ok("v2"));
    }

    #[test]
    fn test_parse_api_version_requires_leading_slash() {
        assert_eq!(
            parse_api_version("v1beta2/services"),
            Err(ReferenceError::MalformedSelfLink("v1beta2/services".to_string()))
        );
        assert_eq!(
            parse_api_version("api/v1beta1/pods"),
            Err(ReferenceError::MalformedSelfLink("api/v1beta1/pods".to_string()))
        );
    }

    #[test]
    fn test_parse_api_version_requires_two_segments() {
        for self_link in ["/", "/api", "/api/", "//v1", "//"] {
            assert_eq!(
                parse_api_version(self_link),
                Err(ReferenceError::MalformedSelfLink(self_link.to_string())),
                "Self link {self_link:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_self_link_message_names_the_link() {
        let err = parse_api_version("v1beta2/services").unwrap_err();
        assert!(err.to_string().contains("v1beta2/services"));
    }

    #[test]
    fn test_get_reference_nil() {
        assert_eq!(get_reference(None), Err(ReferenceError::NilObject));
        assert_eq!(
            get_partial_reference(None, "spec"),
            Err(ReferenceError::NilObject)
        );
    }

    #[test]
    fn test_reference_serializes_camel_case_and_skips_empty() {
        let reference = ObjectReference {
            kind: "Pod".to_string(),
            name: "foo".to_string(),
            api_version: "v1beta1".to_string(),
            resource_version: "42".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&reference).expect("Failed to serialize reference");
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "Pod",
                "name": "foo",
                "apiVersion": "v1beta1",
                "resourceVersion": "42",
            })
        );
    }
}
