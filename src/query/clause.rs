//! Pure clause constructors for the backend query body.
//!
//! Each function returns the backend-shaped JSON clause object; none of
//! them hold state. The boolean combinator keeps the term filter ahead of
//! the phrase match so the backend filters the key set before scoring.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{MinaretError, Result};
use crate::query::expression::QueryExpression;

/// Which phrase-match clause shape to emit.
///
/// Both flavors score documents by approximate text similarity across
/// weighted fields; they differ in parse strictness and match threshold.
/// The live query path defaults to [`PhraseMatchFlavor::Lenient`]; the
/// strict flavor is a selectable alternative for backend dialects with a
/// full query-string parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseMatchFlavor {
    /// Simplified, robust parse: `simple_query_string`, 85% minimum match.
    #[default]
    Lenient,
    /// Full linguistic parse: `query_string`, 95% minimum match, with
    /// phrase sub-queries auto-generated from the raw text.
    Strict,
}

impl PhraseMatchFlavor {
    /// Minimum-should-match threshold for this flavor.
    pub fn minimum_should_match(&self) -> &'static str {
        match self {
            PhraseMatchFlavor::Lenient => "85%",
            PhraseMatchFlavor::Strict => "95%",
        }
    }
}

/// Advisory fuzziness tuning threaded into phrase-match clauses.
///
/// Fuzziness is the edit distance allowed per term; prefix length is the
/// number of leading characters exempt from fuzzy expansion. Zero values
/// are omitted from the clause rather than emitted, so dialects without
/// fuzzy support still accept the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyHints {
    /// Allowed edit distance per term.
    pub fuzziness: u32,
    /// Leading characters excluded from fuzzy expansion.
    pub prefix_length: u32,
}

impl Default for FuzzyHints {
    fn default() -> Self {
        FuzzyHints {
            fuzziness: 1,
            prefix_length: 1,
        }
    }
}

/// Build a term-filter clause restricting results to `keys`.
///
/// Used only in hits mode, with the paginated slice of the keys resolved by
/// the aggregations phase. An empty slice is a valid clause that matches
/// nothing.
pub fn term_filter(key_field: &str, keys: &[String]) -> Value {
    json!({
        "terms": {
            key_field: keys,
        }
    })
}

/// Build a phrase-match clause over the expression's weighted fields.
///
/// Fails with [`MinaretError::InvalidQuery`] when the expression carries no
/// match fields.
pub fn phrase_match(
    expression: &QueryExpression,
    flavor: PhraseMatchFlavor,
    hints: FuzzyHints,
) -> Result<Value> {
    if expression.field_weights().is_empty() {
        return Err(MinaretError::invalid_query(
            "phrase match requires a non-empty field list",
        ));
    }

    let fields = expression.rendered_fields();
    let mut clause = match flavor {
        PhraseMatchFlavor::Lenient => json!({
            "simple_query_string": {
                "query": expression.text(),
                "fields": fields,
                "lenient": true,
                "minimum_should_match": flavor.minimum_should_match(),
            }
        }),
        PhraseMatchFlavor::Strict => json!({
            "query_string": {
                "query": expression.text(),
                "fields": fields,
                "auto_generate_phrase_queries": true,
                "lenient": true,
                "minimum_should_match": flavor.minimum_should_match(),
            }
        }),
    };

    attach_fuzzy_hints(&mut clause, flavor, hints);

    Ok(clause)
}

/// Wrap clauses in a must-all boolean combinator.
///
/// Clause order is significant: the term filter, when present, goes first
/// and the phrase match goes last.
pub fn bool_must(term_filter: Option<Value>, phrase_match: Value) -> Value {
    let mut must = Vec::with_capacity(2);
    if let Some(filter) = term_filter {
        must.push(filter);
    }
    must.push(phrase_match);

    json!({
        "bool": {
            "must": must,
        }
    })
}

// Hints are advisory: only the parameters the clause dialect understands
// are attached. The lenient shape has no per-term fuzziness parameter.
fn attach_fuzzy_hints(clause: &mut Value, flavor: PhraseMatchFlavor, hints: FuzzyHints) {
    let inner = match flavor {
        PhraseMatchFlavor::Lenient => clause.get_mut("simple_query_string"),
        PhraseMatchFlavor::Strict => clause.get_mut("query_string"),
    };
    let Some(Value::Object(map)) = inner else {
        return;
    };

    if flavor == PhraseMatchFlavor::Strict && hints.fuzziness > 0 {
        map.insert("fuzziness".to_string(), json!(hints.fuzziness));
    }
    if hints.prefix_length > 0 {
        map.insert("fuzzy_prefix_length".to_string(), json!(hints.prefix_length));
    }
}
