//! Search and filter predicates, plus the facet lists used to build filter menus.

use std::collections::BTreeSet;

use crate::models::EmployeeRecord;

use super::state::ViewState;

/// Distinct non-empty departments, sorted alphabetically.
pub fn departments(employees: &[EmployeeRecord]) -> Vec<String> {
    employees
        .iter()
        .filter_map(EmployeeRecord::department_label)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct squad names across all employees, sorted alphabetically.
pub fn squads(employees: &[EmployeeRecord]) -> Vec<String> {
    employees
        .iter()
        .flat_map(EmployeeRecord::squad_names)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Case-insensitive substring search over names, email, department, title and squads.
///
/// `needle` must already be lowercased.
fn matches_search(emp: &EmployeeRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let hit = |value: &str| value.to_lowercase().contains(needle);

    hit(&emp.first_name)
        || hit(&emp.last_name)
        || hit(&emp.full_name())
        || hit(&emp.email)
        || emp.department.as_deref().is_some_and(hit)
        || emp.title.as_deref().is_some_and(hit)
        || emp.squad_names().any(hit)
}

/// Check a record against every filter category in `state`.
///
/// Categories are ANDed; values within a category are ORed. An empty
/// category matches everything.
pub fn matches(emp: &EmployeeRecord, state: &ViewState) -> bool {
    let needle = state.search_query().to_lowercase();
    matches_with_needle(emp, state, &needle)
}

fn matches_with_needle(emp: &EmployeeRecord, state: &ViewState, needle: &str) -> bool {
    let search_match = matches_search(emp, needle);

    let role_match = state.role_filters().is_empty() || state.role_filters().contains(&emp.role);

    let dept_match = state.department_filters().is_empty()
        || emp
            .department
            .as_ref()
            .is_some_and(|d| state.department_filters().contains(d));

    let squad_match =
        state.squad_filters().is_empty() || emp.squad_names().any(|name| state.squad_filters().contains(name));

    search_match && role_match && dept_match && squad_match
}

/// Records passing the current filters, in input order.
pub fn filter_employees<'a>(employees: &'a [EmployeeRecord], state: &ViewState) -> Vec<&'a EmployeeRecord> {
    let needle = state.search_query().to_lowercase();
    employees
        .iter()
        .filter(|emp| matches_with_needle(emp, state, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Squad};

    fn employee(first: &str, dept: Option<&str>, squads: &[&str]) -> EmployeeRecord {
        EmployeeRecord {
            id: first.to_lowercase(),
            first_name: first.to_string(),
            last_name: "Smith".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            title: Some("Analyst".to_string()),
            department: dept.map(str::to_string),
            role: Role::Employee,
            squads: squads
                .iter()
                .map(|s| Squad {
                    id: s.to_lowercase(),
                    name: s.to_string(),
                })
                .collect(),
            date_started: None,
        }
    }

    #[test]
    fn test_departments_skip_missing_and_empty() {
        let list = vec![
            employee("A", Some("Sales"), &[]),
            employee("B", None, &[]),
            employee("C", Some(""), &[]),
            employee("D", Some("Ops"), &[]),
            employee("E", Some("Sales"), &[]),
        ];
        assert_eq!(departments(&list), vec!["Ops", "Sales"]);
    }

    #[test]
    fn test_squads_deduplicated_and_sorted() {
        let list = vec![
            employee("A", None, &["Zeta", "Alpha"]),
            employee("B", None, &[]),
            employee("C", None, &["Alpha"]),
        ];
        assert_eq!(squads(&list), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_search_spans_full_name() {
        let emp = employee("Jane", None, &[]);
        assert!(matches_search(&emp, "jane smith"));
        assert!(matches_search(&emp, "e sm"));
        assert!(!matches_search(&emp, "janet"));
    }

    #[test]
    fn test_search_checks_title_and_squads() {
        let emp = employee("Jane", None, &["Platform"]);
        assert!(matches_search(&emp, "analyst"));
        assert!(matches_search(&emp, "platf"));
    }

    #[test]
    fn test_search_matches_email_only() {
        let mut emp = employee("Jane", Some("Sales"), &["Platform"]);
        emp.email = "zq@corp.test".to_string();

        assert!(matches_search(&emp, "corp.test"));
        assert!(matches_search(&emp, "zq@"));
        assert!(!matches_search(&employee("Jane", Some("Sales"), &[]), "corp.test"));
    }

    #[test]
    fn test_search_matches_last_name_only() {
        let mut emp = employee("Jane", None, &[]);
        emp.last_name = "Okafor".to_string();
        emp.email = "j1@example.com".to_string();

        assert!(matches_search(&emp, "okaf"));
        assert!(!matches_search(&emp, "smith"));
    }

    #[test]
    fn test_department_filter_excludes_unassigned() {
        let mut state = ViewState::new();
        state.set_department_filters(["Sales"]);

        assert!(matches(&employee("A", Some("Sales"), &[]), &state));
        assert!(!matches(&employee("B", None, &[]), &state));
    }

    #[test]
    fn test_squad_filter_any_of() {
        let mut state = ViewState::new();
        state.set_squad_filters(["Backend", "DevOps"]);

        assert!(matches(&employee("A", None, &["Frontend", "DevOps"]), &state));
        assert!(!matches(&employee("B", None, &["Frontend"]), &state));
        assert!(!matches(&employee("C", None, &[]), &state));
    }

    #[test]
    fn test_empty_input() {
        let state = ViewState::new();
        assert!(departments(&[]).is_empty());
        assert!(squads(&[]).is_empty());
        assert!(filter_employees(&[], &state).is_empty());
    }
}
