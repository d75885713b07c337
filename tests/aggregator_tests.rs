use cost_tree::aggregator::{build_tree, sorted_children, CostTree, NodeId, SortKey};
use cost_tree::parser::{parse_cost_data, CostEntry, FlatCostMap, Mode};
use pretty_assertions::assert_eq;
use std::collections::{HashMap, HashSet};

fn flat(entries: &[(&str, f64, u64)]) -> FlatCostMap {
    entries
        .iter()
        .map(|&(k, cost, count)| (k, CostEntry::new(cost, count)))
        .collect()
}

/// Deterministic pseudo-random flat maps over a small segment alphabet,
/// so prefixes, shared names and odd separators all show up
fn generated_maps() -> Vec<FlatCostMap> {
    let segments = ["a", "b", "c", "", "a"];
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };

    let mut maps = Vec::new();
    for _ in 0..40 {
        let mut map = FlatCostMap::new();
        let entries = next() % 12;
        for _ in 0..entries {
            let depth = 1 + next() % 4;
            let mut key = Vec::new();
            for _ in 0..depth {
                key.push(segments[(next() % segments.len() as u64) as usize]);
            }
            let cost = (next() % 1000) as f64;
            let count = next() % 20;
            map.insert(key.join("/"), CostEntry::new(cost, count));
        }
        maps.push(map);
    }
    maps
}

fn normalize(key: &str) -> Vec<&str> {
    key.split('/').filter(|s| !s.is_empty()).collect()
}

/// Totals of the entries that survive normalization (last write wins)
fn effective_totals(map: &FlatCostMap) -> (f64, u64) {
    let mut latest: HashMap<String, CostEntry> = HashMap::new();
    for (key, entry) in map.iter() {
        let segments = normalize(key);
        if !segments.is_empty() {
            latest.insert(segments.join("/"), *entry);
        }
    }
    (
        latest.values().map(|e| e.cost).sum(),
        latest.values().map(|e| e.count).sum(),
    )
}

fn assert_sums(tree: &CostTree, id: NodeId) {
    let node = &tree[id];
    let child_cost: f64 = node.children.iter().map(|&c| tree[c].cost).sum();
    let child_count: u64 = node.children.iter().map(|&c| tree[c].count).sum();

    assert_eq!(node.cost, node.direct_cost + child_cost, "cost at {}", node.path);
    assert_eq!(node.count, node.direct_count + child_count, "count at {}", node.path);

    for &child in &node.children {
        assert_sums(tree, child);
    }
}

#[test]
fn test_three_entry_example() {
    let tree = build_tree(&flat(&[
        ("A/B", 10.0, 2),
        ("A/C", 5.0, 1),
        ("A", 3.0, 1),
    ]));

    assert_eq!(tree.roots().len(), 1);
    let a = &tree[tree.roots()[0]];
    assert_eq!(a.name, "A");
    assert_eq!((a.cost, a.count, a.direct_cost, a.direct_count), (18.0, 4, 3.0, 1));

    let b = &tree[tree.find("A/B").unwrap()];
    let c = &tree[tree.find("A/C").unwrap()];
    assert_eq!((b.cost, b.count, b.direct_cost, b.direct_count), (10.0, 2, 10.0, 2));
    assert_eq!((c.cost, c.count, c.direct_cost, c.direct_count), (5.0, 1, 5.0, 1));
    assert!(b.children.is_empty());
    assert!(c.children.is_empty());
}

#[test]
fn test_ancestor_sums_on_generated_maps() {
    for map in generated_maps() {
        let tree = build_tree(&map);
        for &root in tree.roots() {
            assert_sums(&tree, root);
        }
    }
}

#[test]
fn test_conservation_on_generated_maps() {
    // Generated costs are integers, so float sums are exact
    for map in generated_maps() {
        let tree = build_tree(&map);
        let order = tree.walk();
        let direct_cost: f64 = order.iter().map(|&id| tree[id].direct_cost).sum();
        let direct_count: u64 = order.iter().map(|&id| tree[id].direct_count).sum();

        let (cost, count) = effective_totals(&map);
        assert_eq!(direct_cost, cost);
        assert_eq!(direct_count, count);
        assert_eq!(tree.total_cost(), cost);
        assert_eq!(tree.total_count(), count);
    }
}

#[test]
fn test_nodes_exist_only_for_keys_and_prefixes() {
    for map in generated_maps() {
        let tree = build_tree(&map);

        let mut expected = HashSet::new();
        for (key, _) in map.iter() {
            let segments = normalize(key);
            for end in 1..=segments.len() {
                expected.insert(segments[..end].join("/"));
            }
        }

        let actual: HashSet<String> = tree.walk().iter().map(|&id| tree[id].path.clone()).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_conservation_simple() {
    let map = flat(&[("x/y/z", 4.0, 2), ("x/y", 6.0, 1), ("q", 1.0, 0)]);
    let tree = build_tree(&map);
    let direct_cost: f64 = tree.walk().iter().map(|&id| tree[id].direct_cost).sum();

    assert_eq!(direct_cost, map.total_cost());
    assert_eq!(tree.total_count(), map.total_count());
}

#[test]
fn test_missing_fields_treated_as_zero() {
    let map: FlatCostMap =
        serde_json::from_str(r#"{"a/b": {"count": 2}, "a/c": {"cost": 4}, "a": {}}"#).unwrap();
    let tree = build_tree(&map);
    let a = &tree[tree.find("a").unwrap()];

    assert_eq!(a.cost, 4.0);
    assert_eq!(a.count, 2);
}

#[test]
fn test_ranking_switch() {
    // heavy: higher cost, lower average than light
    let tree = build_tree(&flat(&[("heavy", 60.0, 6), ("light", 40.0, 2)]));

    let by_total = sorted_children(&tree, tree.roots(), SortKey::Total);
    assert_eq!(tree[by_total[0]].name, "heavy");

    let by_avg = sorted_children(&tree, tree.roots(), SortKey::Avg);
    assert_eq!(tree[by_avg[0]].name, "light");
}

#[test]
fn test_sorted_children_is_descending() {
    for map in generated_maps() {
        let tree = build_tree(&map);
        for key in [SortKey::Total, SortKey::Avg] {
            let sorted = sorted_children(&tree, tree.roots(), key);
            for pair in sorted.windows(2) {
                assert!(key.rank(&tree[pair[0]]) >= key.rank(&tree[pair[1]]));
            }
        }
    }
}

#[test]
fn test_huge_counts_do_not_abort_the_build() {
    let document = r#"{
        "init": {
            "a/b": {"cost": 1, "count": 18446744073709551615},
            "a/c": {"cost": 1, "count": 2}
        }
    }"#;
    let data = parse_cost_data(document).unwrap().unwrap();
    let map = data.select(Mode::Init);
    let tree = build_tree(map);

    let a = &tree[tree.find("a").unwrap()];
    assert_eq!(a.count, u64::MAX);
    assert_eq!(tree.total_count(), u64::MAX);
    assert_eq!(map.total_count(), u64::MAX);
}
