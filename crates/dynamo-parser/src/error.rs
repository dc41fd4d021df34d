//! The single error kind of the mapping layer.

use thiserror::Error;

/// Raised when a field declared required is absent, or present but not
/// decodable as its declared scalar kind, during serialize or deserialize.
///
/// The display message is exactly `"<type_name>.<attr_name>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}.{attr_name}")]
pub struct RequiredValueError {
    /// Display name of the domain type whose field was missing.
    pub type_name: String,
    /// Name of the missing attribute.
    pub attr_name: String,
}

impl RequiredValueError {
    pub fn new(type_name: impl Into<String>, attr_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attr_name: attr_name.into(),
        }
    }
}
