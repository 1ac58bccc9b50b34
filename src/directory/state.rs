//! View parameters for the employee list and their page-reset rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Role;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [6, 12, 24, 48];

/// Default number of records per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Field the list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    Email,
    Department,
    #[value(name = "date-started", alias = "dateStarted")]
    DateStarted,
}

impl SortField {
    pub fn name(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Email => "Email",
            SortField::Department => "Department",
            SortField::DateStarted => "Date Started",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[value(alias = "asc")]
    Ascending,
    #[value(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Layout hint for rendering. Does not affect filtering or sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Department,
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
            ViewMode::Department => "By Department",
        }
    }
}

/// Client-controlled view parameters.
///
/// Fields are only reachable through the setters so that every change that
/// alters the result set also sends the user back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_query: String,
    role_filters: BTreeSet<Role>,
    department_filters: BTreeSet<String>,
    squad_filters: BTreeSet<String>,
    sort_field: SortField,
    sort_order: SortOrder,
    current_page: usize,
    items_per_page: usize,
    view_mode: ViewMode,
    show_filters: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            role_filters: BTreeSet::new(),
            department_filters: BTreeSet::new(),
            squad_filters: BTreeSet::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            view_mode: ViewMode::default(),
            show_filters: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn role_filters(&self) -> &BTreeSet<Role> {
        &self.role_filters
    }

    pub fn department_filters(&self) -> &BTreeSet<String> {
        &self.department_filters
    }

    pub fn squad_filters(&self) -> &BTreeSet<String> {
        &self.squad_filters
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Current 1-based page. Never below 1.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Records per page. Never below 1.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn show_filters(&self) -> bool {
        self.show_filters
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        debug!(query = %self.search_query, "search query changed");
        self.reset_page();
    }

    pub fn set_role_filters<I: IntoIterator<Item = Role>>(&mut self, roles: I) {
        self.role_filters = roles.into_iter().collect();
        debug!(count = self.role_filters.len(), "role filters changed");
        self.reset_page();
    }

    pub fn set_department_filters<I, S>(&mut self, departments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.department_filters = departments.into_iter().map(Into::into).collect();
        debug!(count = self.department_filters.len(), "department filters changed");
        self.reset_page();
    }

    pub fn set_squad_filters<I, S>(&mut self, squads: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.squad_filters = squads.into_iter().map(Into::into).collect();
        debug!(count = self.squad_filters.len(), "squad filters changed");
        self.reset_page();
    }

    /// Set the page size. Zero is clamped to 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        debug!(items_per_page = self.items_per_page, "page size changed");
        self.reset_page();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        debug!(?mode, "view mode changed");
        self.reset_page();
    }

    /// Jump to a page. Zero is clamped to 1; pages past the end are allowed
    /// and simply yield an empty slice.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort_field = field;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Column-header click: toggle direction on the active field, otherwise
    /// switch to `field` ascending.
    pub fn handle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Ascending;
        }
        debug!(field = ?self.sort_field, order = ?self.sort_order, "sort changed");
    }

    /// Reset search and all filter sets. Sort and view mode are kept.
    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.role_filters.clear();
        self.department_filters.clear();
        self.squad_filters.clear();
        debug!("filters cleared");
        self.reset_page();
    }

    pub fn set_show_filters(&mut self, show: bool) {
        self.show_filters = show;
    }

    /// True if a search or any filter value is in effect.
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty()
            || !self.role_filters.is_empty()
            || !self.department_filters.is_empty()
            || !self.squad_filters.is_empty()
    }

    /// Number of selected filter values, counting a non-empty search as one.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search_query.is_empty())
            + self.role_filters.len()
            + self.department_filters.len()
            + self.squad_filters.len()
    }

    fn reset_page(&mut self) {
        self.current_page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_three() -> ViewState {
        let mut state = ViewState::new();
        state.set_current_page(3);
        assert_eq!(state.current_page(), 3);
        state
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.search_query(), "");
        assert_eq!(state.sort_field(), SortField::Name);
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.items_per_page(), 12);
        assert_eq!(state.view_mode(), ViewMode::Grid);
        assert!(!state.show_filters());
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_resetting_mutators() {
        let mutators: [(&str, fn(&mut ViewState)); 7] = [
            ("search", |s: &mut ViewState| s.set_search_query("x")),
            ("roles", |s: &mut ViewState| s.set_role_filters([Role::Admin])),
            ("departments", |s: &mut ViewState| s.set_department_filters(["Design"])),
            ("squads", |s: &mut ViewState| s.set_squad_filters(["Backend"])),
            ("items_per_page", |s: &mut ViewState| s.set_items_per_page(24)),
            ("view_mode", |s: &mut ViewState| s.set_view_mode(ViewMode::List)),
            ("clear_filters", |s: &mut ViewState| s.clear_filters()),
        ];

        for (name, mutate) in mutators {
            let mut state = on_page_three();
            mutate(&mut state);
            assert_eq!(state.current_page(), 1, "{name} should reset the page");
        }
    }

    #[test]
    fn test_non_resetting_mutators() {
        let mutators: [(&str, fn(&mut ViewState)); 5] = [
            ("sort_field", |s: &mut ViewState| s.set_sort_field(SortField::Email)),
            ("sort_order", |s: &mut ViewState| s.set_sort_order(SortOrder::Descending)),
            ("handle_sort_same", |s: &mut ViewState| s.handle_sort(SortField::Name)),
            ("handle_sort_other", |s: &mut ViewState| s.handle_sort(SortField::Department)),
            ("show_filters", |s: &mut ViewState| s.set_show_filters(true)),
        ];

        for (name, mutate) in mutators {
            let mut state = on_page_three();
            mutate(&mut state);
            assert_eq!(state.current_page(), 3, "{name} should keep the page");
        }
    }

    #[test]
    fn test_handle_sort_toggles_and_switches() {
        let mut state = ViewState::new();

        state.handle_sort(SortField::Name);
        assert_eq!(state.sort_order(), SortOrder::Descending);

        state.handle_sort(SortField::Name);
        assert_eq!(state.sort_order(), SortOrder::Ascending);

        state.set_sort_order(SortOrder::Descending);
        state.handle_sort(SortField::Email);
        assert_eq!(state.sort_field(), SortField::Email);
        assert_eq!(state.sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn test_clear_filters_keeps_sort_and_view() {
        let mut state = ViewState::new();
        state.set_search_query("ali");
        state.set_role_filters([Role::Admin, Role::Employee]);
        state.set_department_filters(["Engineering"]);
        state.set_squad_filters(["Frontend"]);
        state.set_sort_field(SortField::DateStarted);
        state.set_sort_order(SortOrder::Descending);
        state.set_view_mode(ViewMode::Department);
        state.set_show_filters(true);
        assert_eq!(state.active_filter_count(), 5);

        state.clear_filters();

        assert!(!state.has_active_filters());
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.sort_field(), SortField::DateStarted);
        assert_eq!(state.sort_order(), SortOrder::Descending);
        assert_eq!(state.view_mode(), ViewMode::Department);
        assert!(state.show_filters());
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let mut state = ViewState::new();
        state.set_current_page(0);
        assert_eq!(state.current_page(), 1);

        state.set_items_per_page(0);
        assert_eq!(state.items_per_page(), 1);
    }
}
