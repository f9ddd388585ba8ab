//! Property tests for the menu builders.

use proptest::prelude::*;

use inventory_menu::{
    build_resource_types, build_resource_types_or_empty, build_resources,
    build_resources_or_empty, MainTypeNode, ResourceCollection, ResourceMeta, ResourceRecord,
};

fn type_name() -> impl Strategy<Value = String> {
    // Mixed-case type names so the case-insensitive ordering actually gets
    // exercised.
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,8}").unwrap()
}

fn record() -> impl Strategy<Value = ResourceRecord> {
    (
        proptest::string::string_regex("[a-z0-9-]{1,12}").unwrap(),
        type_name(),
        type_name(),
        proptest::option::of(proptest::string::string_regex("[ -~]{0,40}").unwrap()),
        proptest::string::string_regex("[a-z0-9-]{1,12}").unwrap(),
    )
        .prop_map(|(id, main_type, sub_type, title, label)| {
            let record = ResourceRecord::new(id, main_type, sub_type, label);
            match title {
                Some(title) => record.with_title(title),
                None => record,
            }
        })
}

/// Collection whose metadata counts agree with the record pass.
fn with_complete_metadata(records: Vec<ResourceRecord>) -> ResourceCollection {
    let mut meta = ResourceMeta::default();
    for record in &records {
        *meta
            .resource_types
            .entry(format!("AWS::{}::{}", record.main_type, record.sub_type))
            .or_insert(0) += 1;
    }
    ResourceCollection {
        nodes: records,
        meta_data: meta,
    }
}

fn is_sorted_case_insensitive(labels: &[&str]) -> bool {
    labels
        .windows(2)
        .all(|pair| pair[0].to_lowercase() <= pair[1].to_lowercase())
}

fn leaf_total(menu: &[MainTypeNode]) -> usize {
    menu.iter()
        .flat_map(|main| &main.nodes)
        .map(|sub| sub.nodes.len())
        .sum()
}

/// Object keys biased toward the ones the builders look for.
fn json_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("nodes".to_string()),
        Just("metaData".to_string()),
        Just("resourceTypes".to_string()),
        Just("mainType".to_string()),
        proptest::string::string_regex("[a-z]{1,6}").unwrap(),
    ]
}

/// Arbitrary JSON values, shallow but shaped like inventory payloads.
fn json_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        proptest::string::string_regex("[ -~]{0,10}")
            .unwrap()
            .prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::from),
            proptest::collection::hash_map(json_key(), inner, 0..4)
                .prop_map(|map| serde_json::Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The full tree holds exactly one leaf per input record.
    #[test]
    fn property_full_tree_preserves_leaf_count(
        records in proptest::collection::vec(record(), 0..24)
    ) {
        let collection = with_complete_metadata(records.clone());
        let menu = build_resources(&collection);

        prop_assert_eq!(leaf_total(&menu), records.len());
    }

    /// PROPERTY: Every level of the full tree is sorted ascending by
    /// case-insensitive label.
    #[test]
    fn property_full_tree_is_sorted_at_every_level(
        records in proptest::collection::vec(record(), 0..24)
    ) {
        let collection = with_complete_metadata(records);
        let menu = build_resources(&collection);

        let root_labels: Vec<&str> = menu.iter().map(|main| main.label.as_str()).collect();
        prop_assert!(is_sorted_case_insensitive(&root_labels));

        for main in &menu {
            let sub_labels: Vec<&str> = main.nodes.iter().map(|sub| sub.label.as_str()).collect();
            prop_assert!(is_sorted_case_insensitive(&sub_labels));

            for sub in &main.nodes {
                let leaf_labels: Vec<&str> =
                    sub.nodes.iter().map(|leaf| leaf.label.as_str()).collect();
                prop_assert!(is_sorted_case_insensitive(&leaf_labels));
            }
        }
    }

    /// PROPERTY: With complete metadata, every main-type label carries the
    /// sum of its children's counts.
    #[test]
    fn property_main_label_sums_child_counts(
        records in proptest::collection::vec(record(), 1..24)
    ) {
        let collection = with_complete_metadata(records);
        let menu = build_resources(&collection);

        for main in &menu {
            let mut sum = 0u64;
            for sub in &main.nodes {
                let count = sub.count.expect("complete metadata has every count");
                sum += count;
            }
            prop_assert_eq!(&main.label, &format!("{} ({})", main.key, sum));
        }
    }

    /// PROPERTY: Building twice from the same collection yields structurally
    /// equal trees.
    #[test]
    fn property_builds_are_idempotent(
        records in proptest::collection::vec(record(), 0..24)
    ) {
        let collection = with_complete_metadata(records);

        prop_assert_eq!(build_resources(&collection), build_resources(&collection));
        prop_assert_eq!(
            build_resource_types(&collection),
            build_resource_types(&collection)
        );
    }

    /// PROPERTY: The type summary holds one node per distinct
    /// (main type, sub type) pair, each with at most one representative leaf.
    #[test]
    fn property_summary_has_one_node_per_distinct_pair(
        records in proptest::collection::vec(record(), 0..24)
    ) {
        let collection = with_complete_metadata(records.clone());
        let menu = build_resource_types(&collection);

        let distinct: std::collections::HashSet<(&str, &str)> = records
            .iter()
            .map(|record| (record.main_type.as_str(), record.sub_type.as_str()))
            .collect();
        let sub_total: usize = menu.iter().map(|main| main.nodes.len()).sum();

        prop_assert_eq!(sub_total, distinct.len());
        for main in &menu {
            for sub in &main.nodes {
                prop_assert!(sub.nodes.len() <= 1);
            }
        }
    }

    /// PROPERTY: The fail-soft builders never panic on arbitrary JSON.
    #[test]
    fn property_or_empty_never_panics(value in json_value()) {
        let _ = build_resources_or_empty(value.clone());
        let _ = build_resource_types_or_empty(value);
    }
}
