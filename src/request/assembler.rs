//! Request assembly: one structured request body per execution phase.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::query::clause::{bool_must, phrase_match, term_filter};
use crate::query::expression::QueryExpression;
use crate::query::paginate::paginate_keys;
use crate::request::aggregations::AggregationSpecBuilder;
use crate::request::fields::FieldResolver;
use crate::request::highlight::HighlightSpecBuilder;
use crate::request::indices::IndexResolver;
use crate::request::options::{ResultMode, SearchOptions};

/// The structured body of one request to the transport.
///
/// One instance is built fresh per phase and owned by the executor for a
/// single request-response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Target indices.
    pub index: Vec<String>,
    /// Backend document type.
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Backend scoring-explanation toggle. Constant off.
    pub explain: bool,
    /// The query body proper.
    pub body: RequestBody,
}

/// The query body of a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Per-index relevance weights, omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indices_boost: Option<Value>,
    /// Highlight spec; hits mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Value>,
    /// Aggregation spec; aggregations mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Value>,
    /// Result offset: `(page - 1) * page_size` in both modes.
    pub from: usize,
    /// Result limit: the page size in hits mode, zero in aggregations mode.
    pub size: usize,
    /// Source-field projection.
    #[serde(rename = "_source")]
    pub source: Value,
    /// The boolean clause tree.
    pub query: Value,
}

/// Composes pagination, projection, highlighting, aggregation, index
/// boosting, and the boolean clause into one [`SearchRequest`].
///
/// The four injected strategies own all backend mapping configuration; the
/// assembler owns only the mode table.
#[derive(Debug, Clone, Default)]
pub struct RequestAssembler {
    fields: FieldResolver,
    indices: IndexResolver,
    aggregations: AggregationSpecBuilder,
    highlight: HighlightSpecBuilder,
}

impl RequestAssembler {
    /// Create an assembler with the default strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler from explicit strategies.
    pub fn with_strategies(
        fields: FieldResolver,
        indices: IndexResolver,
        aggregations: AggregationSpecBuilder,
        highlight: HighlightSpecBuilder,
    ) -> Self {
        RequestAssembler {
            fields,
            indices,
            aggregations,
            highlight,
        }
    }

    /// The field resolver in use.
    pub fn fields(&self) -> &FieldResolver {
        &self.fields
    }

    /// The aggregation name responses are keyed under.
    pub fn aggregation_name(&self) -> &str {
        self.aggregations.name()
    }

    /// Assemble the request for one phase.
    ///
    /// `mode` is the phase's mode, not the starting mode in `options`.
    /// `resolved_keys` is the full key sequence from the aggregations phase;
    /// in hits mode the term filter is built from its paginated slice. Fails
    /// fast with `InvalidOptions`/`InvalidQuery` on bad input; never touches
    /// the transport.
    pub fn assemble(
        &self,
        expression: &QueryExpression,
        options: &SearchOptions,
        mode: ResultMode,
        resolved_keys: Option<&[String]>,
    ) -> Result<SearchRequest> {
        options.validate()?;

        let phrase = phrase_match(expression, options.flavor, options.hints)?;
        let filter = match (mode, resolved_keys) {
            (ResultMode::Hits, Some(keys)) => {
                let slice = paginate_keys(keys, options.page, options.page_size);
                Some(term_filter(self.fields.key_field(), slice))
            }
            _ => None,
        };
        let query = bool_must(filter, phrase);

        let (size, aggregations, highlight) = match mode {
            ResultMode::Hits => (options.page_size, None, Some(self.highlight.build())),
            ResultMode::Aggregations => (
                0,
                Some(self.aggregations.build(self.fields.key_field())),
                None,
            ),
        };

        Ok(SearchRequest {
            index: self.indices.indices().to_vec(),
            doc_type: "data".to_string(),
            explain: false,
            body: RequestBody {
                indices_boost: self.indices.indices_boost(options.indices_boost.as_ref()),
                highlight,
                aggregations,
                from: options.from_offset(),
                size,
                source: self.fields.source_projection(mode),
                query,
            },
        })
    }
}
