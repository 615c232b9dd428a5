//! API resource types and object references
//!
//! Resource metadata, a small set of core resource types, and the resolver
//! that turns any resource into an [`ObjectReference`].
//!
//! # Example
//!
//! ```
//! use api::{get_reference, ObjectMeta, Pod};
//!
//! let pod = Pod {
//!     metadata: ObjectMeta {
//!         name: "foo".to_string(),
//!         uid: "bar".to_string(),
//!         resource_version: "42".to_string(),
//!         self_link: "/api/v1beta1/pods/foo".to_string(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let reference = get_reference(Some(&pod)).unwrap();
//! assert_eq!(reference.kind, "Pod");
//! assert_eq!(reference.api_version, "v1beta1");
//! ```
//!
//! # Registering a resource type
//!
//! Any type implementing [`Object`] can be passed to the resolver. Types
//! that carry metadata are registered with [`api_object!`], which names the
//! field holding the metadata block. Types implementing only the marker are
//! rejected with [`ReferenceError::NotAnApiObject`].

pub mod decode;
pub mod error;
pub mod meta;
pub mod object;
pub mod openapi;
pub mod reference;
pub mod types;

pub use decode::AnyObject;
pub use error::{DecodeError, ReferenceError};
pub use meta::{ListMeta, ObjectMeta, ResourceMeta};
pub use object::{HasResourceMetadata, Object, type_kind};
pub use reference::{ObjectReference, get_partial_reference, get_reference, parse_api_version};
pub use types::*;
