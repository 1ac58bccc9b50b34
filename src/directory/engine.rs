//! Employee list engine: holds the snapshot and view state, derives every view.

use tracing::debug;

use crate::models::EmployeeRecord;

use super::filter;
use super::group::{DepartmentGroup, group_by_department};
use super::sort::sort_employees;
use super::state::ViewState;

/// Number of pages needed for `count` records. Zero when there are no records.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page.max(1))
}

/// Slice for a 1-based page, clipped to the list. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let per = items_per_page.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(per).min(items.len());
    let end = start.saturating_add(per).min(items.len());
    &items[start..end]
}

/// Every projection of one `(employees, state)` pair.
#[derive(Debug, Clone)]
pub struct EmployeeListView<'a> {
    pub departments: Vec<String>,
    pub squads: Vec<String>,
    pub filtered: Vec<&'a EmployeeRecord>,
    pub sorted: Vec<&'a EmployeeRecord>,
    pub paginated: Vec<&'a EmployeeRecord>,
    pub total_pages: usize,
    pub state: &'a ViewState,
}

impl EmployeeListView<'_> {
    /// "Showing X of Y employees" line for the list header.
    pub fn summary(&self, total: usize) -> String {
        format!("Showing {} of {} employees", self.filtered.len(), total)
    }

    /// 1-based `(first, last)` positions shown on the current page.
    pub fn page_range(&self) -> Option<(usize, usize)> {
        if self.paginated.is_empty() {
            return None;
        }
        let first = (self.state.current_page() - 1) * self.state.items_per_page() + 1;
        Some((first, first + self.paginated.len() - 1))
    }

    /// Current page grouped for the department view mode.
    pub fn page_by_department(&self) -> Vec<DepartmentGroup<'_>> {
        group_by_department(&self.paginated)
    }
}

/// Derive every projection from a snapshot and a view state.
pub fn derive_view<'a>(employees: &'a [EmployeeRecord], state: &'a ViewState) -> EmployeeListView<'a> {
    let filtered = filter::filter_employees(employees, state);

    let mut sorted = filtered.clone();
    sort_employees(&mut sorted, state.sort_field(), state.sort_order());

    let paginated = page_slice(&sorted, state.current_page(), state.items_per_page()).to_vec();

    EmployeeListView {
        departments: filter::departments(employees),
        squads: filter::squads(employees),
        total_pages: total_pages(filtered.len(), state.items_per_page()),
        filtered,
        sorted,
        paginated,
        state,
    }
}

/// In-memory employee list plus the view parameters applied to it.
///
/// Mutators live on [`ViewState`]; reach them through [`state_mut`](Self::state_mut).
#[derive(Debug, Clone, Default)]
pub struct EmployeeListEngine {
    employees: Vec<EmployeeRecord>,
    state: ViewState,
}

impl EmployeeListEngine {
    /// Create an engine over a snapshot. `None` is treated as an empty list.
    pub fn new(employees: Option<Vec<EmployeeRecord>>) -> Self {
        Self::with_state(employees, ViewState::default())
    }

    /// Create an engine with a pre-configured view state.
    pub fn with_state(employees: Option<Vec<EmployeeRecord>>, state: ViewState) -> Self {
        Self {
            employees: employees.unwrap_or_default(),
            state,
        }
    }

    /// Replace the snapshot with a newer one. The view state is untouched.
    pub fn set_employees(&mut self, employees: Option<Vec<EmployeeRecord>>) {
        self.employees = employees.unwrap_or_default();
        debug!(count = self.employees.len(), "employee snapshot replaced");
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub fn departments(&self) -> Vec<String> {
        filter::departments(&self.employees)
    }

    pub fn squads(&self) -> Vec<String> {
        filter::squads(&self.employees)
    }

    pub fn filtered_employees(&self) -> Vec<&EmployeeRecord> {
        filter::filter_employees(&self.employees, &self.state)
    }

    pub fn sorted_employees(&self) -> Vec<&EmployeeRecord> {
        let mut sorted = self.filtered_employees();
        sort_employees(&mut sorted, self.state.sort_field(), self.state.sort_order());
        sorted
    }

    pub fn paginated_employees(&self) -> Vec<&EmployeeRecord> {
        let sorted = self.sorted_employees();
        page_slice(&sorted, self.state.current_page(), self.state.items_per_page()).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_employees().len(), self.state.items_per_page())
    }

    /// All projections at once.
    pub fn view(&self) -> EmployeeListView<'_> {
        derive_view(&self.employees, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_page_slice_clips() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 1, 2), &[1, 2]);
        assert_eq!(page_slice(&items, 3, 2), &[5]);
        assert!(page_slice(&items, 4, 2).is_empty());
        assert!(page_slice(&items, usize::MAX, 2).is_empty());
        assert_eq!(page_slice(&items, 0, 2), &[1, 2]);
    }

    #[test]
    fn test_absent_snapshot_is_empty() {
        let engine = EmployeeListEngine::new(None);
        let view = engine.view();

        assert!(view.departments.is_empty());
        assert!(view.squads.is_empty());
        assert!(view.filtered.is_empty());
        assert!(view.sorted.is_empty());
        assert!(view.paginated.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page_range(), None);
    }
}
