use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::Record;

/// Identity of a bar across renders.
///
/// Built from the record's category in the keyed field. Repeated categories
/// are told apart by their occurrence ordinal, so every record gets its own
/// bar even when categories collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoinKey {
    pub category: String,
    pub occurrence: usize,
}

impl JoinKey {
    #[must_use]
    pub fn new(category: impl Into<String>, occurrence: usize) -> Self {
        Self {
            category: category.into(),
            occurrence,
        }
    }
}

/// Keys for `data` in order, keyed by `field`.
#[must_use]
pub fn join_keys(data: &[Record], field: &str) -> Vec<JoinKey> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(data.len());
    data.iter()
        .map(|record| {
            let category = record.category(field);
            let occurrence = seen.entry(category.clone()).or_insert(0);
            let key = JoinKey::new(category, *occurrence);
            *occurrence += 1;
            key
        })
        .collect()
}

/// Outcome of reconciling existing elements against new data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinPlan {
    /// Data indices that need a new element.
    pub enter: Vec<usize>,
    /// `(data index, existing element index)` pairs that persist.
    pub update: Vec<(usize, usize)>,
    /// Existing element indices with no matching datum.
    pub exit: Vec<usize>,
}

impl JoinPlan {
    #[must_use]
    pub fn is_noop_structurally(&self) -> bool {
        self.enter.is_empty() && self.exit.is_empty()
    }
}

/// Classifies each datum as entering or updating, and each existing element
/// as updating or exiting.
#[must_use]
pub fn plan_join(existing: &[JoinKey], incoming: &[JoinKey]) -> JoinPlan {
    let by_key: HashMap<&JoinKey, usize> = existing
        .iter()
        .enumerate()
        .map(|(index, key)| (key, index))
        .collect();

    let mut plan = JoinPlan::default();
    let mut matched = vec![false; existing.len()];
    for (data_index, key) in incoming.iter().enumerate() {
        match by_key.get(key) {
            Some(&element_index) if !matched[element_index] => {
                matched[element_index] = true;
                plan.update.push((data_index, element_index));
            }
            _ => plan.enter.push(data_index),
        }
    }
    plan.exit = matched
        .iter()
        .enumerate()
        .filter(|(_, matched)| !**matched)
        .map(|(index, _)| index)
        .collect();
    plan
}
