//! Per-invocation search options.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MinaretError, Result};
use crate::query::clause::{FuzzyHints, PhraseMatchFlavor};

/// Whether the current phase seeks aggregated bucket counts or full
/// document hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultMode {
    /// Full document hits with source fields and highlighting.
    Hits,
    /// Bucket counts only; no documents returned.
    Aggregations,
}

/// Validated options for one search invocation.
///
/// Created once per search from caller input and immutable thereafter. The
/// executor derives each phase's mode itself; `result_mode` here is the
/// starting mode.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// 1-based page number.
    pub page: usize,
    /// Number of documents per page. Zero is valid and yields no hits.
    pub page_size: usize,
    /// Starting result mode.
    pub result_mode: ResultMode,
    /// Advisory fuzzy-matching hints.
    pub hints: FuzzyHints,
    /// Per-index relevance weights, when the caller wants index boosting.
    pub indices_boost: Option<HashMap<String, f32>>,
    /// Which phrase-match clause shape the live query path uses.
    pub flavor: PhraseMatchFlavor,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            page: 1,
            page_size: 20,
            result_mode: ResultMode::Aggregations,
            hints: FuzzyHints::default(),
            indices_boost: None,
            flavor: PhraseMatchFlavor::default(),
        }
    }
}

impl SearchOptions {
    /// Create options with the defaults (page 1, 20 per page, aggregations
    /// first, lenient phrase matching).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 1-based page number.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the starting result mode.
    pub fn with_result_mode(mut self, result_mode: ResultMode) -> Self {
        self.result_mode = result_mode;
        self
    }

    /// Set the fuzziness edit distance.
    pub fn with_fuzziness(mut self, fuzziness: u32) -> Self {
        self.hints.fuzziness = fuzziness;
        self
    }

    /// Set the fuzzy prefix length.
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.hints.prefix_length = prefix_length;
        self
    }

    /// Set per-index boost weights.
    pub fn with_indices_boost(mut self, boost: HashMap<String, f32>) -> Self {
        self.indices_boost = Some(boost);
        self
    }

    /// Select the phrase-match clause flavor.
    pub fn with_flavor(mut self, flavor: PhraseMatchFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Validate pagination bounds.
    ///
    /// Fails with [`MinaretError::InvalidOptions`] when `page < 1`. The
    /// page size is unsigned, so the lower bound there holds by type.
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(MinaretError::invalid_options(format!(
                "page must be >= 1, got {}",
                self.page
            )));
        }
        Ok(())
    }

    /// The result offset shared by both phases: `(page - 1) * page_size`.
    pub fn from_offset(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SearchOptions::new();

        assert_eq!(options.page, 1);
        assert_eq!(options.page_size, 20);
        assert_eq!(options.result_mode, ResultMode::Aggregations);
        assert_eq!(options.hints.fuzziness, 1);
        assert_eq!(options.hints.prefix_length, 1);
        assert_eq!(options.flavor, PhraseMatchFlavor::Lenient);
        assert!(options.indices_boost.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_page() {
        let options = SearchOptions::new().with_page(0);

        match options.validate() {
            Err(MinaretError::InvalidOptions(_)) => {}
            other => panic!("Expected InvalidOptions, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_accepts_zero_page_size() {
        let options = SearchOptions::new().with_page_size(0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_offset() {
        assert_eq!(SearchOptions::new().from_offset(), 0);
        assert_eq!(
            SearchOptions::new().with_page(3).with_page_size(20).from_offset(),
            40
        );
        assert_eq!(
            SearchOptions::new().with_page(5).with_page_size(0).from_offset(),
            0
        );
    }

    #[test]
    fn test_builder_chain() {
        let options = SearchOptions::new()
            .with_page(2)
            .with_page_size(10)
            .with_fuzziness(2)
            .with_prefix_length(0)
            .with_flavor(PhraseMatchFlavor::Strict);

        assert_eq!(options.page, 2);
        assert_eq!(options.page_size, 10);
        assert_eq!(options.hints.fuzziness, 2);
        assert_eq!(options.hints.prefix_length, 0);
        assert_eq!(options.flavor, PhraseMatchFlavor::Strict);
    }
}
