//! Category buckets for the tab bar and grid.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::EmojiRecord;

/// All emoji of one category, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub title: String,
    /// Glyph shown on the category's tab
    pub symbol: String,
    pub members: Vec<EmojiRecord>,
}

/// Categorizer output; `representatives[i]` belongs to `buckets[i]`
#[derive(Debug, Clone, Default)]
pub struct Categories {
    representatives: Vec<EmojiRecord>,
    buckets: Vec<CategoryBucket>,
}

impl Categories {
    /// First record of each category, in first-seen order
    pub fn representatives(&self) -> &[EmojiRecord] {
        &self.representatives
    }

    pub fn buckets(&self) -> &[CategoryBucket] {
        &self.buckets
    }

    pub fn get(&self, index: usize) -> Option<&CategoryBucket> {
        self.buckets.get(index)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Partition `catalog` into category buckets.
///
/// Categories appear in the order they are first seen; each bucket keeps
/// catalog order and every record lands in exactly one bucket.
pub fn categorize(catalog: &[EmojiRecord]) -> Categories {
    let mut seen: HashSet<&str> = HashSet::new();
    let representatives: Vec<EmojiRecord> = catalog
        .iter()
        .filter(|record| seen.insert(record.category.as_str()))
        .cloned()
        .collect();

    let buckets = representatives
        .iter()
        .map(|rep| CategoryBucket {
            title: rep.category.clone(),
            symbol: rep.glyph.clone(),
            members: catalog
                .iter()
                .filter(|record| record.category == rep.category)
                .cloned()
                .collect(),
        })
        .collect();

    Categories {
        representatives,
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn record(glyph: &str, category: &str) -> EmojiRecord {
        EmojiRecord {
            glyph: glyph.to_string(),
            description: glyph.to_string(),
            category: category.to_string(),
            tags: Vec::new(),
            aliases: Vec::new(),
            unicode_version: "6.0".to_string(),
            ios_min_version: "6.0".to_string(),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let categories = categorize(&[]);
        assert!(categories.is_empty());
        assert!(categories.representatives().is_empty());
    }

    #[test]
    fn test_first_seen_order_with_interleaving() {
        let catalog = vec![
            record("1", "Smileys"),
            record("2", "Animals"),
            record("3", "Smileys"),
            record("4", "Food"),
            record("5", "Animals"),
        ];
        let categories = categorize(&catalog);

        let titles: Vec<&str> = categories.buckets().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Smileys", "Animals", "Food"]);

        let smileys: Vec<&str> = categories.buckets()[0]
            .members
            .iter()
            .map(|r| r.glyph.as_str())
            .collect();
        assert_eq!(smileys, vec!["1", "3"]);
        assert_eq!(categories.buckets()[1].symbol, "2");
    }

    #[test]
    fn test_partitions_catalog() {
        let catalog = Catalog::builtin().records();
        let categories = categorize(catalog);

        let total: usize = categories.buckets().iter().map(|b| b.members.len()).sum();
        assert_eq!(total, catalog.len());

        let mut glyphs = HashSet::new();
        for bucket in categories.buckets() {
            for member in &bucket.members {
                assert_eq!(member.category, bucket.title);
                assert!(glyphs.insert(member.glyph.clone()), "duplicate {}", member.glyph);
            }
        }

        for (rep, bucket) in categories.representatives().iter().zip(categories.buckets()) {
            let first = catalog.iter().find(|r| r.category == bucket.title).unwrap();
            assert_eq!(rep, first);
            assert_eq!(bucket.symbol, first.glyph);
        }
    }
}
