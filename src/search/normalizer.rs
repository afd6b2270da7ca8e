//! Normalization of raw backend responses into uniform result values.

use chrono::TimeDelta;
use serde_json::Value;

use crate::error::{MinaretError, Result};
use crate::search::outcome::SearchOutcome;
use crate::search::transport::RawResponse;

/// The uniform caller-facing result view.
///
/// Keys were resolved in the aggregations phase and are not re-derived from
/// the hits payload. The payload itself stays opaque for downstream
/// rendering.
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Ordered document keys for the whole match set.
    pub keys: Vec<String>,
    /// Total match count.
    pub total: u64,
    /// Wall-clock duration of the two-phase execution.
    pub elapsed: TimeDelta,
    /// True when either phase failed.
    pub errored: bool,
    /// The hits-phase payload, absent on error.
    pub raw_result: Option<Value>,
}

/// Maps raw backend responses into uniform result values.
#[derive(Debug, Clone)]
pub struct ResultNormalizer {
    /// Aggregation name the key buckets are keyed under.
    aggregation_name: String,
}

impl ResultNormalizer {
    /// Create a normalizer reading buckets under `aggregation_name`.
    pub fn new<S: Into<String>>(aggregation_name: S) -> Self {
        ResultNormalizer {
            aggregation_name: aggregation_name.into(),
        }
    }

    /// Extract the ordered document key sequence from an aggregations-phase
    /// response.
    ///
    /// Reads the terms-aggregation buckets; when the backend returned no
    /// aggregation member, falls back to hit ids so degraded dialects still
    /// resolve. A response with neither shape is malformed and reported as
    /// a transport failure.
    pub fn resolve_keys(&self, response: &RawResponse) -> Result<Vec<String>> {
        let payload = response.payload();

        if let Some(buckets) = payload
            .get("aggregations")
            .and_then(|aggs| aggs.get(&self.aggregation_name))
            .and_then(|agg| agg.get("buckets"))
            .and_then(Value::as_array)
        {
            return buckets
                .iter()
                .map(|bucket| {
                    bucket
                        .get("key")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .ok_or_else(|| {
                            MinaretError::transport("aggregation bucket without a string key")
                        })
                })
                .collect();
        }

        if let Some(hits) = payload
            .get("hits")
            .and_then(|hits| hits.get("hits"))
            .and_then(Value::as_array)
        {
            return Ok(hits
                .iter()
                .filter_map(|hit| hit.get("_id").and_then(Value::as_str))
                .map(str::to_string)
                .collect());
        }

        Err(MinaretError::transport(
            "response carries neither aggregation buckets nor hits",
        ))
    }

    /// Shape a completed outcome into the caller-facing view.
    pub fn normalize(&self, outcome: &SearchOutcome) -> SearchResults {
        SearchResults {
            keys: outcome.keys().to_vec(),
            total: outcome.total(),
            elapsed: outcome.elapsed(),
            errored: outcome.errored(),
            raw_result: outcome.raw_result().map(|r| r.payload().clone()),
        }
    }
}

impl Default for ResultNormalizer {
    fn default() -> Self {
        ResultNormalizer::new("by_ayah_key")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalizer() -> ResultNormalizer {
        ResultNormalizer::new("by_ayah_key")
    }

    #[test]
    fn test_resolve_keys_from_buckets() {
        let response = RawResponse::from(json!({
            "aggregations": {
                "by_ayah_key": {
                    "buckets": [
                        {"key": "2_1", "doc_count": 3},
                        {"key": "2_2", "doc_count": 1},
                    ]
                }
            }
        }));

        let keys = normalizer().resolve_keys(&response).unwrap();
        assert_eq!(keys, vec!["2_1", "2_2"]);
    }

    #[test]
    fn test_resolve_keys_preserves_bucket_order() {
        let response = RawResponse::from(json!({
            "aggregations": {
                "by_ayah_key": {
                    "buckets": [
                        {"key": "3_7", "doc_count": 1},
                        {"key": "1_1", "doc_count": 9},
                    ]
                }
            }
        }));

        let keys = normalizer().resolve_keys(&response).unwrap();
        assert_eq!(keys, vec!["3_7", "1_1"]);
    }

    #[test]
    fn test_resolve_keys_falls_back_to_hit_ids() {
        let response = RawResponse::from(json!({
            "hits": {
                "total": 2,
                "hits": [
                    {"_id": "2_1", "_source": {}},
                    {"_id": "2_2", "_source": {}},
                ]
            }
        }));

        let keys = normalizer().resolve_keys(&response).unwrap();
        assert_eq!(keys, vec!["2_1", "2_2"]);
    }

    #[test]
    fn test_resolve_keys_rejects_malformed_response() {
        let response = RawResponse::from(json!({"took": 5}));

        match normalizer().resolve_keys(&response) {
            Err(MinaretError::Transport(_)) => {}
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_keys_rejects_non_string_bucket_key() {
        let response = RawResponse::from(json!({
            "aggregations": {
                "by_ayah_key": {"buckets": [{"key": 21, "doc_count": 1}]}
            }
        }));

        assert!(normalizer().resolve_keys(&response).is_err());
    }

    #[test]
    fn test_resolve_keys_empty_buckets() {
        let response = RawResponse::from(json!({
            "aggregations": {"by_ayah_key": {"buckets": []}}
        }));

        assert!(normalizer().resolve_keys(&response).unwrap().is_empty());
    }
}
