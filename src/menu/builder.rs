//! Menu tree construction from resource collections.
//!
//! Groups flat records by main type and sub type in one pass, attaches
//! labels and metadata-sourced counts, and converts the accumulated groups
//! into sorted arrays at assembly time.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::MenuResult;
use crate::models::{ResourceCollection, ResourceRecord};

use super::node::{MainTypeNode, ResourceFilter, ResourceLeaf, SubTypeNode, TypeFilter};

/// Composite-key namespace of the stock resource taxonomy
const DEFAULT_NAMESPACE: &str = "AWS";

/// Titles longer than this many characters are cut and marked with `...`
const DEFAULT_TITLE_LIMIT: usize = 30;

/// Configurable menu builder
///
/// The defaults reproduce the stock behavior: `AWS` composite-key namespace,
/// titles cut at 30 characters, and type summaries carrying one
/// representative leaf per sub type.
#[derive(Debug, Clone)]
pub struct MenuBuilder {
    namespace: String,
    title_limit: usize,
    summary_leaves: bool,
}

impl Default for MenuBuilder {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            title_limit: DEFAULT_TITLE_LIMIT,
            summary_leaves: true,
        }
    }
}

impl MenuBuilder {
    /// Create a builder with the stock settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the composite-key namespace prefix
    ///
    /// Must match the prefix used by the collection's metadata keys, or
    /// every count lookup will miss.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Override the display-label truncation length (in characters)
    pub fn with_title_limit(mut self, limit: usize) -> Self {
        self.title_limit = limit;
        self
    }

    /// Whether type summaries attach one representative leaf per sub type
    ///
    /// On (the default), each summary sub-type node carries the leaf of the
    /// last record encountered for that sub type. Off, summary nodes carry
    /// no leaves at all.
    pub fn with_summary_leaves(mut self, attach: bool) -> Self {
        self.summary_leaves = attach;
        self
    }

    /// Build the type-summary menu: one node per (main type, sub type) pair
    ///
    /// Records are not accumulated; each pass over a sub type replaces its
    /// entry, so the representative leaf (when enabled) belongs to the last
    /// record seen for that sub type.
    pub fn build_resource_types(&self, collection: &ResourceCollection) -> Vec<MainTypeNode> {
        let mut grouped: HashMap<&str, HashMap<&str, SubTypeNode>> = HashMap::new();

        for record in &collection.nodes {
            let node = if self.summary_leaves {
                self.seeded_sub_type(record, collection)
            } else {
                self.bare_sub_type(record, collection)
            };
            grouped
                .entry(record.main_type.as_str())
                .or_default()
                .insert(record.sub_type.as_str(), node);
        }

        self.assemble(grouped, false)
    }

    /// Build the complete menu: every record becomes a leaf
    pub fn build_resources(&self, collection: &ResourceCollection) -> Vec<MainTypeNode> {
        let mut grouped: HashMap<&str, HashMap<&str, SubTypeNode>> = HashMap::new();

        for record in &collection.nodes {
            let sub_types = grouped.entry(record.main_type.as_str()).or_default();
            match sub_types.get_mut(record.sub_type.as_str()) {
                Some(node) => node.nodes.push(self.leaf(record)),
                None => {
                    sub_types.insert(
                        record.sub_type.as_str(),
                        self.seeded_sub_type(record, collection),
                    );
                }
            }
        }

        self.assemble(grouped, true)
    }

    /// Parse a JSON payload and build the type-summary menu
    ///
    /// `Ok(vec![])` means a valid but empty inventory; `Err` means the
    /// payload does not have the collection shape.
    pub fn try_build_resource_types(
        &self,
        value: serde_json::Value,
    ) -> MenuResult<Vec<MainTypeNode>> {
        let collection = ResourceCollection::from_value(value)?;
        Ok(self.build_resource_types(&collection))
    }

    /// Parse a JSON payload and build the complete menu
    pub fn try_build_resources(&self, value: serde_json::Value) -> MenuResult<Vec<MainTypeNode>> {
        let collection = ResourceCollection::from_value(value)?;
        Ok(self.build_resources(&collection))
    }

    /// Convert the grouping accumulator into sorted main-type nodes
    ///
    /// Leaf lists are only sorted for the full tree; summary nodes hold at
    /// most one representative leaf.
    fn assemble(
        &self,
        grouped: HashMap<&str, HashMap<&str, SubTypeNode>>,
        sort_leaves: bool,
    ) -> Vec<MainTypeNode> {
        let mut mains: Vec<MainTypeNode> = grouped
            .into_iter()
            .map(|(main_type, sub_types)| {
                let mut subs: Vec<SubTypeNode> = sub_types.into_values().collect();
                if sort_leaves {
                    for sub in &mut subs {
                        sub.nodes
                            .sort_by(|a, b| label_order(&a.label, &b.label, &a.key, &b.key));
                    }
                }
                subs.sort_by(|a, b| label_order(&a.label, &b.label, &a.key, &b.key));
                main_type_node(main_type, subs)
            })
            .collect();

        mains.sort_by(|a, b| label_order(&a.label, &b.label, &a.key, &b.key));
        mains
    }

    /// Format one record as a menu leaf
    fn leaf(&self, record: &ResourceRecord) -> ResourceLeaf {
        ResourceLeaf {
            key: record.id.clone(),
            label: self.display_label(record),
            full_label: record.title.clone(),
            filter: ResourceFilter {
                resource_id: record.id.clone(),
                resource_type: self.composite_type(record),
            },
            node_id: record.id.clone(),
        }
    }

    /// Sub-type node carrying the seed record's leaf as its sole element
    fn seeded_sub_type(
        &self,
        record: &ResourceRecord,
        collection: &ResourceCollection,
    ) -> SubTypeNode {
        let mut node = self.bare_sub_type(record, collection);
        node.nodes.push(self.leaf(record));
        node
    }

    /// Sub-type node with an empty leaf list
    fn bare_sub_type(
        &self,
        record: &ResourceRecord,
        collection: &ResourceCollection,
    ) -> SubTypeNode {
        let resource_type = self.composite_type(record);
        let count = collection
            .meta_data
            .resource_types
            .get(&resource_type)
            .copied();

        SubTypeNode {
            key: record.sub_type.clone(),
            label: counted_label(&record.sub_type, count),
            count,
            nodes: Vec::new(),
            filter: TypeFilter { resource_type },
        }
    }

    /// Display label for a leaf: non-empty title (truncated), else the label
    fn display_label(&self, record: &ResourceRecord) -> String {
        match record.title.as_deref() {
            Some(title) if !title.is_empty() => {
                if title.chars().count() > self.title_limit {
                    let cut: String = title.chars().take(self.title_limit).collect();
                    format!("{cut}...")
                } else {
                    title.to_string()
                }
            }
            _ => record.label.clone(),
        }
    }

    /// Synthesize the composite type key for a record
    fn composite_type(&self, record: &ResourceRecord) -> String {
        format!(
            "{}::{}::{}",
            self.namespace, record.main_type, record.sub_type
        )
    }
}

/// Aggregate sorted sub-type nodes into a main-type node
///
/// The displayed count is the sum of the children's metadata-sourced counts.
/// Any unknown child count makes the sum unknown; leaf tallies are never
/// used as a substitute.
fn main_type_node(main_type: &str, nodes: Vec<SubTypeNode>) -> MainTypeNode {
    let total: Option<u64> = nodes.iter().map(|node| node.count).sum();

    MainTypeNode {
        key: main_type.to_string(),
        label: counted_label(main_type, total),
        nodes,
    }
}

/// `"<name> (<count>)"`, with `?` standing in for an unknown count
fn counted_label(name: &str, count: Option<u64>) -> String {
    match count {
        Some(count) => format!("{name} ({count})"),
        None => format!("{name} (?)"),
    }
}

/// Case-insensitive label ordering, with keys breaking ties
///
/// The key tie-break keeps the output deterministic even when two distinct
/// keys produce lowercase-equal labels.
fn label_order(a_label: &str, b_label: &str, a_key: &str, b_key: &str) -> Ordering {
    a_label
        .to_lowercase()
        .cmp(&b_label.to_lowercase())
        .then_with(|| a_key.cmp(b_key))
}

/// Build the type-summary menu with the stock settings
pub fn build_resource_types(collection: &ResourceCollection) -> Vec<MainTypeNode> {
    MenuBuilder::default().build_resource_types(collection)
}

/// Build the complete menu with the stock settings
pub fn build_resources(collection: &ResourceCollection) -> Vec<MainTypeNode> {
    MenuBuilder::default().build_resources(collection)
}

/// Parse and build the type-summary menu, collapsing any failure to empty
///
/// This is the fail-soft policy: callers that do not care why a payload was
/// bad get an empty menu instead of an error. Partial trees are never
/// returned.
pub fn build_resource_types_or_empty(value: serde_json::Value) -> Vec<MainTypeNode> {
    MenuBuilder::default()
        .try_build_resource_types(value)
        .unwrap_or_default()
}

/// Parse and build the complete menu, collapsing any failure to empty
pub fn build_resources_or_empty(value: serde_json::Value) -> Vec<MainTypeNode> {
    MenuBuilder::default()
        .try_build_resources(value)
        .unwrap_or_default()
}
