//! Highlight spec construction for the hits phase.

use serde_json::{Value, json};

/// Builds the highlight spec attached to hits-mode requests.
///
/// Fragment formatting of the returned snippets is the renderer's job; this
/// strategy only tells the backend which field to highlight and how to tag
/// matches.
#[derive(Debug, Clone)]
pub struct HighlightSpecBuilder {
    /// Field to highlight.
    field: String,
    /// Opening tag wrapped around matched terms.
    pre_tag: String,
    /// Closing tag wrapped around matched terms.
    post_tag: String,
    /// Maximum fragment length in characters.
    fragment_size: usize,
    /// Number of fragments per hit. Zero means highlight the whole field.
    fragment_count: usize,
}

impl Default for HighlightSpecBuilder {
    fn default() -> Self {
        HighlightSpecBuilder {
            field: "text".to_string(),
            pre_tag: "<em class=\"hlt\">".to_string(),
            post_tag: "</em>".to_string(),
            fragment_size: 150,
            fragment_count: 0,
        }
    }
}

impl HighlightSpecBuilder {
    /// Create a builder with the default highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the highlighted field.
    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = field.into();
        self
    }

    /// Override the match tags.
    pub fn with_tags<S: Into<String>>(mut self, pre: S, post: S) -> Self {
        self.pre_tag = pre.into();
        self.post_tag = post.into();
        self
    }

    /// Override fragment sizing.
    pub fn with_fragments(mut self, size: usize, count: usize) -> Self {
        self.fragment_size = size;
        self.fragment_count = count;
        self
    }

    /// Build the highlight spec.
    pub fn build(&self) -> Value {
        json!({
            "pre_tags": [self.pre_tag],
            "post_tags": [self.post_tag],
            "fields": {
                self.field.as_str(): {
                    "fragment_size": self.fragment_size,
                    "number_of_fragments": self.fragment_count,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_shape() {
        let spec = HighlightSpecBuilder::new().build();

        assert_eq!(spec["pre_tags"], json!(["<em class=\"hlt\">"]));
        assert_eq!(spec["post_tags"], json!(["</em>"]));
        assert_eq!(spec["fields"]["text"]["number_of_fragments"], 0);
    }

    #[test]
    fn test_overrides() {
        let spec = HighlightSpecBuilder::new()
            .with_field("body")
            .with_tags("<b>", "</b>")
            .with_fragments(80, 3)
            .build();

        assert_eq!(spec["pre_tags"], json!(["<b>"]));
        assert_eq!(spec["fields"]["body"]["fragment_size"], 80);
        assert_eq!(spec["fields"]["body"]["number_of_fragments"], 3);
    }
}
