//! Marker and capability traits for API resources
//!
//! [`Object`] tags a type as an API-managed resource. It carries no data and
//! every method has a default, so `impl Object for MyType {}` is a complete
//! registration. Resources that carry metadata additionally implement
//! [`HasResourceMetadata`], usually through [`api_object!`](crate::api_object).

use std::fmt;

use crate::meta::ResourceMeta;

/// Marker for any API-managed resource.
pub trait Object: fmt::Debug + Send + Sync {
    /// Unqualified name of the implementing type, e.g. `"ServiceList"`.
    fn kind(&self) -> &'static str {
        type_kind(std::any::type_name::<Self>())
    }

    /// Probe for the metadata capability.
    ///
    /// Returns `None` for types that only carry the marker.
    fn as_metadata(&self) -> Option<&dyn HasResourceMetadata> {
        None
    }
}

/// Capability of exposing a metadata block.
pub trait HasResourceMetadata {
    fn resource_meta(&self) -> &dyn ResourceMeta;
}

/// Reduce a fully qualified type path to its last segment.
///
/// Generic arguments are dropped: `a::b::List<a::b::Pod>` becomes `List`.
pub fn type_kind(type_name: &str) -> &str {
    let base = type_name
        .split_once('<')
        .map_or(type_name, |(base, _)| base);
    base.rsplit_once("::").map_or(base, |(_, last)| last)
}

/// Register resource types whose metadata lives in a named field.
///
/// ```
/// use api::{api_object, ObjectMeta};
///
/// #[derive(Debug, Default)]
/// pub struct Widget {
///     pub metadata: ObjectMeta,
/// }
///
/// api_object!(Widget => metadata);
/// ```
#[macro_export]
macro_rules! api_object {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl $crate::HasResourceMetadata for $ty {
                fn resource_meta(&self) -> &dyn $crate::ResourceMeta {
                    &self.$field
                }
            }

            impl $crate::Object for $ty {
                fn as_metadata(&self) -> Option<&dyn $crate::HasResourceMetadata> {
                    Some(self)
                }
            }
        )+
    };
}
