//! View-state coordinator.
//!
//! Holds what the user has asked to see (category, search text, open
//! detail) and derives the displayed list from the catalog on every call.
//! Search always wins over the selected category and is global across all
//! categories.

use crate::catalog::{Catalog, Category, ComponentRecord};
use crate::clipboard::{Clipboard, ClipboardError};
use std::collections::HashMap;

pub struct ViewState<'c> {
    catalog: &'c Catalog,
    selected_category_id: String,
    search_query: String,
    /// `Some` exactly when the detail view is visible.
    detail: Option<&'c ComponentRecord>,
}

impl<'c> ViewState<'c> {
    pub fn new(catalog: &'c Catalog, initial_category: impl Into<String>) -> Self {
        Self {
            catalog,
            selected_category_id: initial_category.into(),
            search_query: String::new(),
            detail: None,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn categories(&self) -> &'c [Category] {
        self.catalog.categories()
    }

    pub fn counts_by_category(&self) -> HashMap<&'c str, usize> {
        self.catalog.counts_by_category()
    }

    pub fn selected_category_id(&self) -> &str {
        &self.selected_category_id
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_component(&self) -> Option<&'c ComponentRecord> {
        self.detail
    }

    pub fn is_detail_visible(&self) -> bool {
        self.detail.is_some()
    }

    /// Does not touch the search query.
    pub fn select_category(&mut self, category_id: impl Into<String>) {
        self.selected_category_id = category_id.into();
        tracing::debug!(category = %self.selected_category_id, "category selected");
    }

    /// Stored verbatim, no trimming.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn open_detail(&mut self, component: &'c ComponentRecord) {
        tracing::debug!(component = %component.id, "detail opened");
        self.detail = Some(component);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn is_search_active(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    pub fn displayed_components(&self) -> Vec<&'c ComponentRecord> {
        if self.is_search_active() {
            self.catalog.search(&self.search_query)
        } else {
            self.catalog.components_by_category(&self.selected_category_id)
        }
    }

    /// `None` while searching or when the selected id names no category.
    pub fn displayed_category(&self) -> Option<&'c Category> {
        if self.is_search_active() {
            return None;
        }
        self.catalog.category(&self.selected_category_id)
    }

    /// Hand the component's markup to `clipboard`. The outcome is returned
    /// untouched for the caller to report.
    pub fn request_copy(
        &self,
        component: &ComponentRecord,
        clipboard: &mut dyn Clipboard,
    ) -> Result<(), ClipboardError> {
        clipboard.set_text(&component.markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;
    use crate::clipboard::mock::MemoryClipboard;

    fn ids(records: &[&ComponentRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_defaults() {
        let catalog = small_catalog();
        let view = ViewState::new(&catalog, "buttons");
        assert_eq!(view.selected_category_id(), "buttons");
        assert_eq!(view.search_query(), "");
        assert!(view.selected_component().is_none());
        assert!(!view.is_detail_visible());
        assert!(!view.is_search_active());
    }

    #[test]
    fn test_select_category_lists_members_in_order() {
        let catalog = small_catalog();
        let mut view = ViewState::new(&catalog, "cards");
        view.select_category("buttons");
        assert_eq!(
            ids(&view.displayed_components()),
            vec!["btn-primary", "btn-destructive"]
        );
        assert_eq!(view.displayed_category().map(|c| c.id.as_str()), Some("buttons"));

        let counts = view.counts_by_category();
        assert_eq!(counts["buttons"], 2);
        assert_eq!(counts["cards"], 1);
    }

    #[test]
    fn test_search_overrides_category_and_is_global() {
        let catalog = small_catalog();
        let mut view = ViewState::new(&catalog, "cards");
        view.set_search_query("destructive");
        assert!(view.is_search_active());
        assert_eq!(ids(&view.displayed_components()), vec!["btn-destructive"]);
        assert!(view.displayed_category().is_none());

        // category selection is kept underneath the search
        view.select_category("buttons");
        assert_eq!(view.search_query(), "destructive");
        assert_eq!(ids(&view.displayed_components()), vec!["btn-destructive"]);

        view.set_search_query("");
        assert_eq!(
            ids(&view.displayed_components()),
            vec!["btn-primary", "btn-destructive"]
        );
    }

    #[test]
    fn test_whitespace_query_is_not_a_search() {
        let catalog = small_catalog();
        let mut view = ViewState::new(&catalog, "cards");
        view.set_search_query("   ");
        assert_eq!(view.search_query(), "   ");
        assert!(!view.is_search_active());
        assert_eq!(ids(&view.displayed_components()), vec!["card-basic"]);
        assert!(view.displayed_category().is_some());
    }

    #[test]
    fn test_query_is_searched_untrimmed() {
        let catalog = small_catalog();
        let mut view = ViewState::new(&catalog, "cards");
        // "basic " only matches where a space follows "basic"
        view.set_search_query("basic ");
        assert_eq!(ids(&view.displayed_components()), vec!["card-basic", "modal-basic"]);
        view.set_search_query(" basic");
        assert!(view.displayed_components().is_empty());
    }

    #[test]
    fn test_search_active_implies_no_category() {
        let catalog = small_catalog();
        let mut view = ViewState::new(&catalog, "buttons");
        for q in ["a", "zzz", " x ", "Button"] {
            view.set_search_query(q);
            assert!(view.is_search_active());
            assert!(view.displayed_category().is_none());
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = small_catalog();
        let view = ViewState::new(&catalog, "modals");
        assert!(view.displayed_components().is_empty());
        assert!(view.displayed_category().is_none());
    }

    #[test]
    fn test_close_detail_clears_selection() {
        let catalog = small_catalog();
        let mut view = ViewState::new(&catalog, "buttons");
        view.close_detail();
        assert!(!view.is_detail_visible());
        assert!(view.selected_component().is_none());

        let x = &catalog.components()[0];
        view.open_detail(x);
        assert!(view.is_detail_visible());
        view.close_detail();
        assert!(!view.is_detail_visible());
        assert!(view.selected_component().is_none());
    }

    #[test]
    fn test_reopen_detail_has_no_residue() {
        let catalog = small_catalog();
        let mut view = ViewState::new(&catalog, "buttons");
        let x = &catalog.components()[0];
        let y = &catalog.components()[1];
        view.open_detail(x);
        view.close_detail();
        view.open_detail(y);
        assert!(view.is_detail_visible());
        assert_eq!(view.selected_component().map(|c| c.id.as_str()), Some("card-basic"));
    }

    #[test]
    fn test_request_copy_hands_over_markup() {
        let catalog = small_catalog();
        let view = ViewState::new(&catalog, "buttons");
        let record = &catalog.components()[1];

        let mut clip = MemoryClipboard::default();
        view.request_copy(record, &mut clip).unwrap();
        assert_eq!(clip.contents, vec![record.markup.clone()]);

        clip.reject = true;
        assert!(view.request_copy(record, &mut clip).is_err());
        // a failed copy leaves view state alone
        assert_eq!(view.selected_category_id(), "buttons");
    }
}
