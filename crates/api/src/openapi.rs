//! k8s-openapi interop
//!
//! Lets upstream `k8s_openapi` resources be referenced through the same
//! resolver, and converts references to and from the upstream
//! `ObjectReference`.

use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

use crate::api_object;
use crate::meta::ResourceMeta;
use crate::reference::ObjectReference;

impl ResourceMeta for metav1::ObjectMeta {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or_default()
    }

    fn uid(&self) -> &str {
        self.uid.as_deref().unwrap_or_default()
    }

    fn resource_version(&self) -> &str {
        self.resource_version.as_deref().unwrap_or_default()
    }

    fn self_link(&self) -> &str {
        self.self_link.as_deref().unwrap_or_default()
    }
}

impl ResourceMeta for metav1::ListMeta {
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
        self.resource_version.as_deref().unwrap_or_default()
    }

    fn self_link(&self) -> &str {
        self.self_link.as_deref().unwrap_or_default()
    }
}

api_object!(
    corev1::Pod => metadata,
    corev1::Service => metadata,
    corev1::Node => metadata,
);

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl From<ObjectReference> for corev1::ObjectReference {
    fn from(reference: ObjectReference) -> Self {
        Self {
            api_version: non_empty(reference.api_version),
            field_path: non_empty(reference.field_path),
            kind: non_empty(reference.kind),
            name: non_empty(reference.name),
            namespace: non_empty(reference.namespace),
            resource_version: non_empty(reference.resource_version),
            uid: non_empty(reference.uid),
        }
    }
}

impl From<corev1::ObjectReference> for ObjectReference {
    fn from(reference: corev1::ObjectReference) -> Self {
        Self {
            kind: reference.kind.unwrap_or_default(),
            namespace: reference.namespace.unwrap_or_default(),
            name: reference.name.unwrap_or_default(),
            uid: reference.uid.unwrap_or_default(),
            api_version: reference.api_version.unwrap_or_default(),
            resource_version: reference.resource_version.unwrap_or_default(),
            field_path: reference.field_path.unwrap_or_default(),
        }
    }
}
