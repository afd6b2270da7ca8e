//! Aggregation spec construction for the key-resolution phase.

use serde_json::{Value, json};

/// Builds the terms aggregation that resolves the ordered document key set.
///
/// Buckets are keyed by the document key field and ordered by key ascending,
/// which is document order for zero-padded-free keys like `2_1`. The bucket
/// cap bounds the resolvable result set.
#[derive(Debug, Clone)]
pub struct AggregationSpecBuilder {
    /// Name of the emitted aggregation.
    name: String,
    /// Maximum number of buckets the backend may return.
    bucket_cap: usize,
}

impl Default for AggregationSpecBuilder {
    fn default() -> Self {
        AggregationSpecBuilder {
            name: "by_ayah_key".to_string(),
            bucket_cap: 10_000,
        }
    }
}

impl AggregationSpecBuilder {
    /// Create a builder with the default aggregation name and bucket cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the aggregation name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Override the bucket cap.
    pub fn with_bucket_cap(mut self, bucket_cap: usize) -> Self {
        self.bucket_cap = bucket_cap;
        self
    }

    /// The aggregation name the response is keyed under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the aggregation spec over `key_field`.
    pub fn build(&self, key_field: &str) -> Value {
        json!({
            self.name.as_str(): {
                "terms": {
                    "field": key_field,
                    "size": self.bucket_cap,
                    "order": {"_key": "asc"},
                }
            }
        })
    }
}
