//! Query expression: the user's raw search text plus weighted match fields.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{MinaretError, Result};

lazy_static! {
    /// Default field-weight table used when the caller supplies none.
    ///
    /// The concrete field names are backend mapping configuration; these
    /// defaults mirror the verse-search mapping (translation text weighted
    /// highest, then resource/language metadata).
    static ref DEFAULT_FIELD_WEIGHTS: Vec<FieldWeight> = vec![
        FieldWeight::new("text", 5.0),
        FieldWeight::new("text.stemmed", 3.0),
        FieldWeight::new("resource.name", 4.0),
        FieldWeight::new("language.name", 1.0),
    ];
}

/// The default ordered field-weight list.
pub fn default_field_weights() -> Vec<FieldWeight> {
    DEFAULT_FIELD_WEIGHTS.clone()
}

/// A match field paired with its relevance boost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWeight {
    /// The field name, possibly a multi-field path like `text.stemmed`.
    pub field: String,
    /// The boost factor applied to matches in this field.
    pub boost: f32,
}

impl FieldWeight {
    /// Create a new field weight.
    pub fn new<S: Into<String>>(field: S, boost: f32) -> Self {
        FieldWeight {
            field: field.into(),
            boost,
        }
    }

    /// Render in the backend's `field^boost` notation.
    ///
    /// A boost of 1.0 is the backend default and is omitted.
    pub fn render(&self) -> String {
        if self.boost == 1.0 {
            self.field.clone()
        } else {
            format!("{}^{}", self.field, self.boost)
        }
    }
}

/// An immutable search expression.
///
/// Holds the trimmed raw query text and the ordered list of weighted fields
/// that phrase-match clauses are built over. Construction fails when the
/// text is empty after trimming.
#[derive(Debug, Clone)]
pub struct QueryExpression {
    /// The trimmed search text.
    text: String,
    /// Ordered weighted fields for phrase matching.
    field_weights: Vec<FieldWeight>,
}

impl QueryExpression {
    /// Create an expression from raw text, trimming surrounding whitespace.
    ///
    /// Fails with [`MinaretError::InvalidQuery`] if the text is empty after
    /// the trim.
    pub fn new<S: AsRef<str>>(text: S) -> Result<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MinaretError::invalid_query(
                "search text is empty after trimming",
            ));
        }

        Ok(QueryExpression {
            text: trimmed.to_string(),
            field_weights: default_field_weights(),
        })
    }

    /// Replace the default field weights with a caller-supplied list.
    pub fn with_field_weights(mut self, field_weights: Vec<FieldWeight>) -> Self {
        self.field_weights = field_weights;
        self
    }

    /// Get the trimmed search text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the ordered field-weight list.
    pub fn field_weights(&self) -> &[FieldWeight] {
        &self.field_weights
    }

    /// Render the weight list in the backend's `field^boost` notation.
    pub fn rendered_fields(&self) -> Vec<String> {
        self.field_weights.iter().map(|fw| fw.render()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_trims_text() {
        let expr = QueryExpression::new("  mercy  ").unwrap();
        assert_eq!(expr.text(), "mercy");
    }

    #[test]
    fn test_expression_rejects_empty_text() {
        assert!(QueryExpression::new("").is_err());
        assert!(QueryExpression::new("   \t\n").is_err());

        match QueryExpression::new(" ") {
            Err(MinaretError::InvalidQuery(_)) => {}
            other => panic!("Expected InvalidQuery, got {other:?}"),
        }
    }

    #[test]
    fn test_expression_default_field_weights() {
        let expr = QueryExpression::new("mercy").unwrap();
        assert!(!expr.field_weights().is_empty());
        assert_eq!(expr.field_weights()[0].field, "text");
    }

    #[test]
    fn test_expression_with_field_weights() {
        let expr = QueryExpression::new("mercy")
            .unwrap()
            .with_field_weights(vec![FieldWeight::new("title", 2.0)]);

        assert_eq!(expr.rendered_fields(), vec!["title^2"]);
    }

    #[test]
    fn test_field_weight_render() {
        assert_eq!(FieldWeight::new("text", 5.0).render(), "text^5");
        assert_eq!(FieldWeight::new("language.name", 1.0).render(), "language.name");
        assert_eq!(FieldWeight::new("text.stemmed", 2.5).render(), "text.stemmed^2.5");
    }
}
