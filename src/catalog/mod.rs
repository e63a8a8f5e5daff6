//! The component catalog: categories, component records, and the pure
//! queries the rest of the application derives its views from.
//!
//! A [`Catalog`] is built once at startup from the compiled-in tables in
//! [`data`] and never mutated afterwards. All queries return records in
//! declaration order.

pub mod data;

use std::collections::{HashMap, HashSet};

/// A named bucket partitioning the catalog for browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Symbolic icon key, resolved to a glyph by the renderer.
    pub icon: String,
    pub description: String,
}

/// A single design-system component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    /// Id of the [`Category`] this record belongs to.
    pub group: String,
    pub description: String,
    /// Empty means "no image".
    pub preview_image_url: String,
    pub tags: Vec<String>,
    /// The exportable artifact for this component.
    pub markup: String,
    pub notes: String,
}

impl ComponentRecord {
    pub fn preview_image(&self) -> Option<&str> {
        if self.preview_image_url.is_empty() {
            None
        } else {
            Some(&self.preview_image_url)
        }
    }

    /// Case-insensitive substring match against name, description and tags.
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Immutable catalog of categories and component records.
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<Category>,
    components: Vec<ComponentRecord>,
    by_category: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog. Duplicate category ids collapse to their first
    /// definition.
    pub fn new(categories: Vec<Category>, components: Vec<ComponentRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(categories.len());
        for category in categories {
            if seen.insert(category.id.clone()) {
                unique.push(category);
            } else {
                tracing::warn!(id = %category.id, "duplicate category id ignored");
            }
        }

        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, component) in components.iter().enumerate() {
            if !seen.contains(&component.group) {
                continue;
            }
            by_category
                .entry(component.group.clone())
                .or_default()
                .push(idx);
        }

        Self {
            categories: unique,
            components,
            by_category,
        }
    }

    /// The compiled-in design-system catalog.
    pub fn builtin() -> Self {
        Self::new(data::categories(), data::components())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn component(&self, id: &str) -> Option<&ComponentRecord> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Every record whose group equals `category_id`. Unknown ids yield an
    /// empty list.
    pub fn components_by_category(&self, category_id: &str) -> Vec<&ComponentRecord> {
        self.by_category
            .get(category_id)
            .map(|indices| indices.iter().map(|&i| &self.components[i]).collect())
            .unwrap_or_default()
    }

    /// Records whose name, description or any tag contains `query`,
    /// ignoring case. The empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&ComponentRecord> {
        let needle = query.to_lowercase();
        self.components
            .iter()
            .filter(|c| c.matches(&needle))
            .collect()
    }

    /// Record count for every defined category, including empty ones.
    pub fn counts_by_category(&self) -> HashMap<&str, usize> {
        self.categories
            .iter()
            .map(|c| {
                let count = self.by_category.get(&c.id).map_or(0, Vec::len);
                (c.id.as_str(), count)
            })
            .collect()
    }

    /// Number of records reachable through category browsing.
    pub fn total_categorized(&self) -> usize {
        self.counts_by_category().values().sum()
    }

    /// Records whose group does not name any defined category. They are
    /// only reachable through search.
    pub fn orphans(&self) -> Vec<&ComponentRecord> {
        self.components
            .iter()
            .filter(|c| self.category(&c.group).is_none())
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn ids(records: &[&ComponentRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_components_by_category_preserves_order() {
        let catalog = small_catalog();
        assert_eq!(
            ids(&catalog.components_by_category("buttons")),
            vec!["btn-primary", "btn-destructive"]
        );
        assert_eq!(ids(&catalog.components_by_category("cards")), vec!["card-basic"]);
        assert!(catalog.components_by_category("nope").is_empty());
    }

    #[test]
    fn test_components_by_category_only_returns_group_members() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            let records = catalog.components_by_category(&category.id);
            assert!(records.iter().all(|r| r.group == category.id));
        }
    }

    #[test]
    fn test_counts_match_category_lists() {
        let catalog = small_catalog();
        let counts = catalog.counts_by_category();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["buttons"], 2);
        assert_eq!(counts["cards"], 1);

        let builtin = Catalog::builtin();
        let counts = builtin.counts_by_category();
        for category in builtin.categories() {
            assert_eq!(
                counts[category.id.as_str()],
                builtin.components_by_category(&category.id).len()
            );
        }
    }

    #[test]
    fn test_counts_include_empty_categories() {
        let catalog = Catalog::new(
            vec![category("buttons", "Buttons"), category("empty", "Empty")],
            vec![component("b", "B", "buttons", &[])],
        );
        assert_eq!(catalog.counts_by_category()["empty"], 0);
    }

    #[test]
    fn test_search_matches_any_field_ignoring_case() {
        let catalog = small_catalog();
        // name
        assert_eq!(ids(&catalog.search("destructive")), vec!["btn-destructive"]);
        assert_eq!(ids(&catalog.search("DESTRUCTIVE")), vec!["btn-destructive"]);
        // description
        assert_eq!(ids(&catalog.search("irreversible")), vec!["btn-destructive"]);
        // tag
        assert_eq!(ids(&catalog.search("Submi")), vec!["btn-primary"]);
        // spans categories, including orphans
        assert_eq!(
            ids(&catalog.search("basic")),
            vec!["card-basic", "modal-basic"]
        );
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_search_result_is_exactly_the_matching_set() {
        let catalog = Catalog::builtin();
        for query in ["button", "ICON", "data", "header", "status", "a"] {
            let needle = query.to_lowercase();
            let found = catalog.search(query);
            let expected: Vec<&ComponentRecord> = catalog
                .components()
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&needle)
                        || c.description.to_lowercase().contains(&needle)
                        || c.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                })
                .collect();
            assert_eq!(found, expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let catalog = small_catalog();
        assert_eq!(catalog.search("").len(), catalog.components().len());
    }

    #[test]
    fn test_duplicate_category_ids_keep_first() {
        let mut second = category("buttons", "Buttons Again");
        second.icon = "bell".into();
        let catalog = Catalog::new(
            vec![category("buttons", "Buttons"), second, category("cards", "Cards")],
            vec![],
        );
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.category("buttons").map(|c| c.name.as_str()), Some("Buttons"));
    }

    #[test]
    fn test_orphans_are_search_only() {
        let catalog = small_catalog();
        assert_eq!(ids(&catalog.orphans()), vec!["modal-basic"]);
        assert_eq!(catalog.total_categorized(), 3);
        assert_eq!(ids(&catalog.search("overlay")), vec!["modal-basic"]);
    }

    #[test]
    fn test_orphan_group_is_not_browsable() {
        let catalog = small_catalog();
        assert!(catalog.components_by_category("modals").is_empty());
        assert!(!catalog.counts_by_category().contains_key("modals"));

        let builtin = Catalog::builtin();
        for group in ["modals", "tables", "alerts", "badges"] {
            assert!(builtin.components_by_category(group).is_empty(), "{group} is browsable");
        }
        let counted: usize = builtin.counts_by_category().values().sum();
        assert_eq!(counted + builtin.orphans().len(), builtin.components().len());
    }

    #[test]
    fn test_preview_image() {
        let mut record = component("x", "X", "buttons", &[]);
        assert_eq!(record.preview_image(), None);
        record.preview_image_url = "https://example.com/x.png".into();
        assert_eq!(record.preview_image(), Some("https://example.com/x.png"));
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = small_catalog();
        assert_eq!(catalog.component("card-basic").map(|c| c.name.as_str()), Some("Basic Card"));
        assert!(catalog.component("missing").is_none());
        assert!(catalog.category("modals").is_none());
    }
}
