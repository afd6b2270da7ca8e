//! Index resolution: which indices a request targets and their boosts.

use std::collections::HashMap;

use serde_json::{Value, json};

/// Resolves the target index list and the per-index boost map.
///
/// Index names are backend configuration; the defaults target the
/// translation indices alongside the primary text index.
#[derive(Debug, Clone)]
pub struct IndexResolver {
    /// Indices every request is issued against, in preference order.
    indices: Vec<String>,
    /// Baseline per-index boosts merged under caller-supplied ones.
    default_boost: HashMap<String, f32>,
}

impl Default for IndexResolver {
    fn default() -> Self {
        let mut default_boost = HashMap::new();
        default_boost.insert("text-font".to_string(), 4.0);

        IndexResolver {
            indices: vec!["text-font".to_string(), "translation-*".to_string()],
            default_boost,
        }
    }
}

impl IndexResolver {
    /// Create a resolver with the default index configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the target index list.
    pub fn with_indices(mut self, indices: Vec<String>) -> Self {
        self.indices = indices;
        self
    }

    /// Override the baseline boost map.
    pub fn with_default_boost(mut self, boost: HashMap<String, f32>) -> Self {
        self.default_boost = boost;
        self
    }

    /// The target index list.
    pub fn indices(&self) -> &[String] {
        &self.indices
    }

    /// Merge caller boosts over the baseline.
    ///
    /// Returns `None` when the merged map is empty so the request body can
    /// omit the member entirely.
    pub fn indices_boost(&self, caller: Option<&HashMap<String, f32>>) -> Option<Value> {
        let mut merged = self.default_boost.clone();
        if let Some(caller) = caller {
            for (index, weight) in caller {
                merged.insert(index.clone(), *weight);
            }
        }

        if merged.is_empty() {
            None
        } else {
            Some(json!(merged))
        }
    }
}
