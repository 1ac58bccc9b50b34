//! Employee directory: search, filter, sort and paginate an employee snapshot.
//!
//! Everything here is pure and synchronous. Views are recomputed from the
//! current snapshot and [`ViewState`] on every call.

mod engine;
mod filter;
mod group;
mod sort;
mod state;


// Re-export public API
pub use engine::{EmployeeListEngine, EmployeeListView, derive_view, page_slice, total_pages};
pub use filter::{departments, filter_employees, matches, squads};
pub use group::{DepartmentGroup, UNASSIGNED, group_by_department};
pub use sort::{compare, sort_employees};
pub use state::{DEFAULT_ITEMS_PER_PAGE, PAGE_SIZE_OPTIONS, SortField, SortOrder, ViewMode, ViewState};
