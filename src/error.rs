//! Error types for inventory-menu
//!
//! Uses `thiserror` for library errors. Construction over an
//! already-validated [`ResourceCollection`](crate::models::ResourceCollection)
//! is infallible; the only failure surface is the deserialization boundary.

use thiserror::Error;

/// Result type alias for menu-building operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu-building operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// The payload does not deserialize into a resource collection
    #[error("malformed resource collection: {0}")]
    MalformedCollection(#[from] serde_json::Error),
}
