//! inventory-menu - grouped menu trees for cloud resource inventories
//!
//! inventory-menu turns a flat collection of typed resource records into a
//! two-level menu tree (main type → sub type → individual resources) with
//! human-readable labels, metadata-sourced counts, and deterministic ordering,
//! ready to serialize for a nested, expandable selector UI.

pub mod error;
pub mod menu;
pub mod models;

// Re-exports for convenience
pub use error::{MenuError, MenuResult};
pub use menu::{
    build_resource_types, build_resource_types_or_empty, build_resources,
    build_resources_or_empty, MainTypeNode, MenuBuilder, ResourceFilter, ResourceLeaf,
    SubTypeNode, TypeFilter,
};
pub use models::{resource_type_count, ResourceCollection, ResourceMeta, ResourceRecord};
