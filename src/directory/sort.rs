//! Ordering of filtered records.

use std::cmp::Ordering;

use crate::models::EmployeeRecord;

use super::state::{SortField, SortOrder};

/// Bytes of "First Last", compared without allocating the joined string.
fn joined_name(e: &EmployeeRecord) -> impl Iterator<Item = u8> + '_ {
    e.first_name
        .bytes()
        .chain(std::iter::once(b' '))
        .chain(e.last_name.bytes())
}

/// Ascending comparison on a single field.
///
/// Missing departments compare as "", missing start dates as the earliest date.
pub fn compare(a: &EmployeeRecord, b: &EmployeeRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => joined_name(a).cmp(joined_name(b)),
        SortField::Email => a.email.cmp(&b.email),
        SortField::Department => a
            .department
            .as_deref()
            .unwrap_or("")
            .cmp(b.department.as_deref().unwrap_or("")),
        SortField::DateStarted => a.date_started.cmp(&b.date_started),
    }
}

/// Stable sort in place. Equal keys keep their input order in both directions.
pub fn sort_employees(employees: &mut [&EmployeeRecord], field: SortField, order: SortOrder) {
    employees.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use chrono::{TimeZone, Utc};

    fn employee(id: &str, first: &str, last: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{id}@example.com"),
            title: None,
            department: None,
            role: Role::Employee,
            squads: Vec::new(),
            date_started: None,
        }
    }

    fn ids(list: &[&EmployeeRecord]) -> Vec<String> {
        list.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_name_compares_joined_string() {
        // "A Z" > "A B C" as joined strings even though "A" < "A B".
        let a = employee("1", "A", "Z");
        let b = employee("2", "A B", "C");
        assert_eq!(compare(&a, &b, SortField::Name), Ordering::Greater);
    }

    #[test]
    fn test_name_is_case_sensitive() {
        let upper = employee("1", "Zed", "X");
        let lower = employee("2", "adam", "X");
        assert_eq!(compare(&upper, &lower, SortField::Name), Ordering::Less);
    }

    #[test]
    fn test_missing_department_sorts_as_empty() {
        let mut a = employee("1", "A", "A");
        let mut b = employee("2", "B", "B");
        a.department = Some("Ops".to_string());
        b.department = None;
        assert_eq!(compare(&b, &a, SortField::Department), Ordering::Less);
    }

    #[test]
    fn test_missing_date_sorts_first() {
        let mut dated = employee("1", "A", "A");
        dated.date_started = Some(Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap());
        let undated = employee("2", "B", "B");

        let mut list = vec![&dated, &undated];
        sort_employees(&mut list, SortField::DateStarted, SortOrder::Ascending);
        assert_eq!(ids(&list), vec!["2", "1"]);

        sort_employees(&mut list, SortField::DateStarted, SortOrder::Descending);
        assert_eq!(ids(&list), vec!["1", "2"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = employee("a", "Same", "Name");
        let b = employee("b", "Same", "Name");
        let c = employee("c", "Other", "Name");

        let mut list = vec![&a, &b, &c];
        sort_employees(&mut list, SortField::Name, SortOrder::Ascending);
        assert_eq!(ids(&list), vec!["c", "a", "b"]);

        let mut list = vec![&a, &b, &c];
        sort_employees(&mut list, SortField::Name, SortOrder::Descending);
        assert_eq!(ids(&list), vec!["a", "b", "c"]);
    }
}
