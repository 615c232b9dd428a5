//! API errors

use thiserror::Error;

/// Errors returned when a reference cannot be built for an object.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// No object was given
    #[error("object is nil")]
    NilObject,

    /// The object does not carry a metadata block
    #[error("{kind} is not an API object: no metadata")]
    NotAnApiObject {
        /// Kind of the rejected object
        kind: &'static str,
    },

    /// Self-link is not of the form `/<root>/<version>/...`
    #[error("unexpected self link format: {0:?}")]
    MalformedSelfLink(String),
}

/// Errors that can occur when decoding a resource manifest
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON deserialization error
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error
    #[error("YAML decode error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
