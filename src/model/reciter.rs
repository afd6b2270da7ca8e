//! Reciter reference data: a plain keyed-record lookup with no logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One reciter record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reciter {
    /// Primary key.
    pub reciter_id: u32,
    /// Audio path segment.
    pub path: String,
    /// URL slug.
    pub slug: String,
    /// English display name.
    pub english: String,
    /// Arabic display name.
    pub arabic: String,
}

/// In-memory lookup table over reciter records.
#[derive(Debug, Clone, Default)]
pub struct ReciterTable {
    by_id: HashMap<u32, Reciter>,
    by_slug: HashMap<String, u32>,
}

impl ReciterTable {
    /// Build a table from records. Later duplicates win.
    pub fn new(reciters: Vec<Reciter>) -> Self {
        let mut table = ReciterTable::default();
        for reciter in reciters {
            table.by_slug.insert(reciter.slug.clone(), reciter.reciter_id);
            table.by_id.insert(reciter.reciter_id, reciter);
        }
        table
    }

    /// Look up a reciter by primary key.
    pub fn get(&self, reciter_id: u32) -> Option<&Reciter> {
        self.by_id.get(&reciter_id)
    }

    /// Look up a reciter by slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Reciter> {
        self.by_slug.get(slug).and_then(|id| self.by_id.get(id))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reciter(id: u32, slug: &str) -> Reciter {
        Reciter {
            reciter_id: id,
            path: format!("audio/{slug}"),
            slug: slug.to_string(),
            english: "Test Reciter".to_string(),
            arabic: "قارئ".to_string(),
        }
    }

    #[test]
    fn test_lookup_by_id_and_slug() {
        let table = ReciterTable::new(vec![reciter(1, "alafasy"), reciter(2, "husary")]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).unwrap().slug, "alafasy");
        assert_eq!(table.get_by_slug("husary").unwrap().reciter_id, 2);
        assert!(table.get(3).is_none());
        assert!(table.get_by_slug("missing").is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = ReciterTable::new(vec![]);
        assert!(table.is_empty());
    }
}
