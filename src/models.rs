//! Core data models for inventory-menu
//!
//! Defines the input shapes consumed by the menu builders:
//! - `ResourceRecord`: one typed resource from the inventory
//! - `ResourceMeta`: authoritative per-type counts keyed by composite type
//! - `ResourceCollection`: the full inventory payload (records + metadata)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;

/// One typed resource record from the inventory
///
/// `main_type`/`sub_type` form a two-level classification (e.g. a service and
/// a resource kind within it). `title` is optional; `label` is the display
/// fallback when no title exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Unique identifier of the record
    pub id: String,

    /// Coarse classification (e.g. "EC2")
    pub main_type: String,

    /// Specific kind within the main type (e.g. "Instance")
    pub sub_type: String,

    /// Human-readable title; `label` is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short display label, always present
    pub label: String,
}

impl ResourceRecord {
    /// Create a record without a title
    pub fn new(
        id: impl Into<String>,
        main_type: impl Into<String>,
        sub_type: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            main_type: main_type.into(),
            sub_type: sub_type.into(),
            title: None,
            label: label.into(),
        }
    }

    /// Attach a title to the record
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Authoritative per-type metadata for a collection
///
/// `resource_types` maps a composite type key (`"AWS::EC2::Instance"`) to the
/// number of resources of that type. The map is expected, not guaranteed, to
/// hold an entry for every (main type, sub type) pair present in the records;
/// a missing entry yields an unknown count downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMeta {
    /// Count per composite type key
    #[serde(default)]
    pub resource_types: HashMap<String, u64>,
}

impl ResourceMeta {
    /// Number of distinct resource types recorded in the metadata
    pub fn type_count(&self) -> usize {
        self.resource_types.len()
    }
}

/// The full inventory payload: flat records plus authoritative counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCollection {
    /// Flat list of typed resource records
    pub nodes: Vec<ResourceRecord>,

    /// Authoritative per-type counts
    pub meta_data: ResourceMeta,
}

impl ResourceCollection {
    /// Parse a collection from a JSON document
    pub fn from_json(json: &str) -> MenuResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already-parsed JSON value into a collection
    pub fn from_value(value: serde_json::Value) -> MenuResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Total number of records in the collection
    pub fn resource_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Total number of distinct resource types across several collections
///
/// Sums each collection's metadata map size; the records themselves are not
/// consulted.
pub fn resource_type_count(collections: &[ResourceCollection]) -> usize {
    collections
        .iter()
        .map(|collection| collection.meta_data.type_count())
        .sum()
}
