//! Field resolution: source projection and the document key field.

use serde_json::{Value, json};

use crate::request::options::ResultMode;

/// Resolves backend field names for projection and key filtering.
///
/// The concrete names (`ayah.ayah_key`, the hits-mode projection set) are
/// backend mapping configuration, not part of the query logic; this
/// strategy owns them so the assembler stays mapping-agnostic.
#[derive(Debug, Clone)]
pub struct FieldResolver {
    /// Field holding the document key in the backend mapping.
    key_field: String,
    /// Source fields projected in hits mode.
    hits_projection: Vec<String>,
}

impl Default for FieldResolver {
    fn default() -> Self {
        FieldResolver {
            key_field: "ayah.ayah_key".to_string(),
            hits_projection: vec![
                "text".to_string(),
                "resource.*".to_string(),
                "language.*".to_string(),
            ],
        }
    }
}

impl FieldResolver {
    /// Create a resolver with the default mapping names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the document key field.
    pub fn with_key_field<S: Into<String>>(mut self, key_field: S) -> Self {
        self.key_field = key_field.into();
        self
    }

    /// Override the hits-mode projection set.
    pub fn with_hits_projection(mut self, projection: Vec<String>) -> Self {
        self.hits_projection = projection;
        self
    }

    /// The document key field name.
    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// The `_source` projection for the given mode.
    ///
    /// Aggregations mode returns no documents, so it projects nothing.
    pub fn source_projection(&self, mode: ResultMode) -> Value {
        match mode {
            ResultMode::Hits => json!(self.hits_projection),
            ResultMode::Aggregations => json!([]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_field() {
        assert_eq!(FieldResolver::new().key_field(), "ayah.ayah_key");
    }

    #[test]
    fn test_hits_projection() {
        let resolver = FieldResolver::new();
        assert_eq!(
            resolver.source_projection(ResultMode::Hits),
            json!(["text", "resource.*", "language.*"])
        );
    }

    #[test]
    fn test_aggregations_projection_is_empty() {
        let resolver = FieldResolver::new();
        assert_eq!(resolver.source_projection(ResultMode::Aggregations), json!([]));
    }

    #[test]
    fn test_overrides() {
        let resolver = FieldResolver::new()
            .with_key_field("verse.key")
            .with_hits_projection(vec!["body".to_string()]);

        assert_eq!(resolver.key_field(), "verse.key");
        assert_eq!(resolver.source_projection(ResultMode::Hits), json!(["body"]));
    }
}
