//! Grouping for the department view mode.

use std::collections::BTreeMap;

use crate::models::EmployeeRecord;

/// Heading for records without a department.
pub const UNASSIGNED: &str = "Unassigned";

/// Records sharing one department heading.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentGroup<'a> {
    pub department: String,
    pub employees: Vec<&'a EmployeeRecord>,
}

/// Group records by department, alphabetically, with [`UNASSIGNED`] last.
/// Records keep their incoming order within a group.
pub fn group_by_department<'a>(records: &[&'a EmployeeRecord]) -> Vec<DepartmentGroup<'a>> {
    let mut named: BTreeMap<&str, Vec<&'a EmployeeRecord>> = BTreeMap::new();
    let mut unassigned = Vec::new();

    for &emp in records {
        match emp.department_label() {
            Some(dept) => named.entry(dept).or_default().push(emp),
            None => unassigned.push(emp),
        }
    }

    let mut groups: Vec<DepartmentGroup<'a>> = named
        .into_iter()
        .map(|(department, employees)| DepartmentGroup {
            department: department.to_string(),
            employees,
        })
        .collect();

    if !unassigned.is_empty() {
        groups.push(DepartmentGroup {
            department: UNASSIGNED.to_string(),
            employees: unassigned,
        });
    }

    groups
}
