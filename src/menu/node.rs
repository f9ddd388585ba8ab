//! Menu tree node shapes.
//!
//! The tree is homogeneous per level, so each level gets its own type:
//! the root is a `Vec<MainTypeNode>`, each main-type node holds sub-type
//! nodes, and each sub-type node holds leaves for individual resources.
//! All shapes serialize with camelCase keys for the consuming UI.

use serde::Serialize;

/// Downstream query filter carried by a leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFilter {
    /// Id of the resource the leaf represents
    pub resource_id: String,
    /// Composite type key (`"AWS::EC2::Instance"`)
    pub resource_type: String,
}

/// Downstream query filter carried by a sub-type node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeFilter {
    /// Composite type key (`"AWS::EC2::Instance"`)
    pub resource_type: String,
}

/// Menu entry for one individual resource record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLeaf {
    /// Record id, doubles as the menu key
    pub key: String,

    /// Truncated title, or the record's label when no title exists
    pub label: String,

    /// Untruncated title; absent when the record has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_label: Option<String>,

    /// Filter selecting exactly this resource
    pub filter: ResourceFilter,

    /// Same as `key`; consumers use it to address the rendered node
    pub node_id: String,
}

/// Menu entry for one sub type, optionally holding its leaves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTypeNode {
    /// The sub type (e.g. "Instance")
    pub key: String,

    /// `"<subType> (<count>)"`, with `?` standing in for an unknown count
    pub label: String,

    /// Metadata-sourced count; `None` when the composite key has no entry.
    /// May diverge from `nodes.len()` when the metadata is stale - the
    /// metadata is authoritative, serialized as `null` when unknown.
    pub count: Option<u64>,

    /// Leaves for the individual resources of this sub type
    pub nodes: Vec<ResourceLeaf>,

    /// Filter selecting every resource of this sub type
    pub filter: TypeFilter,
}

/// Menu entry for one main type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainTypeNode {
    /// The main type (e.g. "EC2")
    pub key: String,

    /// `"<mainType> (<sum of child counts>)"`
    pub label: String,

    /// Sub-type nodes, sorted ascending by case-insensitive label
    pub nodes: Vec<SubTypeNode>,
}
