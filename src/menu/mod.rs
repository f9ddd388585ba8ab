//! Resource Menu Construction
//!
//! Turns a flat [`ResourceCollection`](crate::models::ResourceCollection) into
//! a deterministically ordered two-level menu tree.
//!
//! # Module Structure
//!
//! - `node` - output tree shapes (leaves, sub-type and main-type nodes)
//! - `builder` - grouping, aggregation, labeling, and sorting

mod builder;
mod node;

// Re-export public API
pub use builder::{
    build_resource_types, build_resource_types_or_empty, build_resources,
    build_resources_or_empty, MenuBuilder,
};
pub use node::{MainTypeNode, ResourceFilter, ResourceLeaf, SubTypeNode, TypeFilter};
