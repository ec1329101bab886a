pub mod fixtures;

use waypost::NavTreeStore;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Collects a store's pre-order walk as (depth, label, target) triples.
pub fn collect_walk(store: &NavTreeStore) -> Vec<(usize, String, Option<String>)> {
    store
        .walk()
        .map(|(depth, node)| {
            (
                depth,
                node.label.clone(),
                node.target.anchor().map(|a| a.to_string()),
            )
        })
        .collect()
}
