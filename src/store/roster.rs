//! Employee roster with add, edit, remove, and search.

use chrono::Local;
use tracing::{debug, info};

use super::timestamp_id;
use crate::models::employee::{Employee, EmployeeDraft};

/// Ordered collection of employees. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct EmployeeRoster {
    employees: Vec<Employee>,
}

impl EmployeeRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster seeded with existing records.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    fn contains_id(&self, id: &str) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    /// Append a new employee built from the draft.
    ///
    /// Missing text fields become empty strings, status defaults to active,
    /// and the join date is today.
    pub fn add(&mut self, draft: EmployeeDraft) -> &Employee {
        let id = timestamp_id(|id| self.contains_id(id));
        let employee = Employee {
            id,
            name: draft.name.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
            position: draft.position.unwrap_or_default(),
            department: draft.department,
            status: draft.status.unwrap_or_default(),
            join_date: Local::now().date_naive(),
            avatar: draft.avatar,
        };
        info!(id = %employee.id, name = %employee.name, status = employee.status.as_str(), "Employee added");

        self.employees.push(employee);
        &self.employees[self.employees.len() - 1]
    }

    /// Merge the draft into the employee with `id`.
    ///
    /// Returns `None` without touching anything if no employee matches.
    pub fn edit(&mut self, id: &str, draft: EmployeeDraft) -> Option<&Employee> {
        let Some(employee) = self.employees.iter_mut().find(|e| e.id == id) else {
            debug!(id, "Edit ignored, no such employee");
            return None;
        };
        employee.merge(draft);
        info!(id, name = %employee.name, "Employee updated");
        Some(employee)
    }

    /// Remove the employee with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Employee> {
        let index = self.employees.iter().position(|e| e.id == id)?;
        let removed = self.employees.remove(index);
        info!(id, name = %removed.name, "Employee removed");
        Some(removed)
    }

    /// Employees whose name, email, position, or department contains `query`,
    /// ignoring case. An empty query returns everyone.
    pub fn search(&self, query: &str) -> Vec<&Employee> {
        let needle = query.to_lowercase();
        self.iter().filter(|e| e.matches(&needle)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleData;
    use crate::models::employee::{Department, EmployeeStatus};
    use chrono::Local;

    fn seeded() -> EmployeeRoster {
        EmployeeRoster::with_employees(SampleData::load().unwrap().employees)
    }

    fn names(list: &[&Employee]) -> Vec<String> {
        list.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_add_appends_active_employee() {
        let mut roster = seeded();
        roster.add(EmployeeDraft::named("Ana Lee"));

        let last = roster.employees().last().unwrap();
        assert_eq!(last.name, "Ana Lee");
        assert_eq!(last.status, EmployeeStatus::Active);
        assert_eq!(last.join_date, Local::now().date_naive());
        assert_eq!(roster.len(), 5);
    }

    #[test]
    fn test_add_defaults_missing_fields() {
        let mut roster = EmployeeRoster::new();
        let emp = roster.add(EmployeeDraft::default()).clone();

        assert_eq!(emp.name, "");
        assert_eq!(emp.email, "");
        assert_eq!(emp.position, "");
        assert_eq!(emp.department, None);
        assert_eq!(emp.status, EmployeeStatus::Active);
    }

    #[test]
    fn test_add_respects_supplied_status() {
        let mut roster = EmployeeRoster::new();
        let emp = roster.add(EmployeeDraft {
            name: Some("Rae Kim".to_string()),
            status: Some(EmployeeStatus::Inactive),
            department: Some(Department::Finance),
            ..Default::default()
        });
        assert_eq!(emp.status, EmployeeStatus::Inactive);
        assert_eq!(emp.department, Some(Department::Finance));
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let mut roster = EmployeeRoster::new();
        for i in 0..50 {
            roster.add(EmployeeDraft::named(format!("Employee {i}")));
        }
        let mut ids: Vec<_> = roster.employees().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_edit_merges_into_matching_record() {
        let mut roster = seeded();
        let updated = roster
            .edit(
                "2",
                EmployeeDraft {
                    position: Some("Head of Product".to_string()),
                    ..Default::default()
                },
            )
            .cloned()
            .unwrap();

        assert_eq!(updated.name, "Mike Chen");
        assert_eq!(updated.position, "Head of Product");
        assert_eq!(roster.get("2").unwrap().position, "Head of Product");
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut roster = seeded();
        let before = roster.employees().to_vec();
        assert!(roster.edit("missing", EmployeeDraft::named("Nobody")).is_none());
        assert_eq!(roster.employees(), before.as_slice());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut roster = seeded();
        let removed = roster.remove("2").unwrap();
        assert_eq!(removed.name, "Mike Chen");
        assert_eq!(
            names(&roster.search("")),
            vec!["Sarah Johnson", "Emma Davis", "John Smith"]
        );
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut roster = seeded();
        assert!(roster.remove("42").is_none());
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_search_design() {
        let roster = seeded();
        let found = roster.search("design");
        assert_eq!(names(&found), vec!["Emma Davis"]);
        for emp in found {
            assert!(
                emp.department_str().to_lowercase().contains("design")
                    || emp.position.to_lowercase().contains("design")
            );
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let roster = seeded();
        assert_eq!(names(&roster.search("SARAH")), vec!["Sarah Johnson"]);
        assert_eq!(names(&roster.search("Company.COM")).len(), 4);
    }

    #[test]
    fn test_search_matches_department_code() {
        let mut roster = EmployeeRoster::new();
        roster.add(EmployeeDraft {
            name: Some("Pat Doe".to_string()),
            department: Some(Department::Hr),
            ..Default::default()
        });
        assert_eq!(roster.search("hr").len(), 1);
        assert!(roster.search("human").is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let roster = seeded();
        let all: Vec<&Employee> = roster.employees().iter().collect();
        assert_eq!(roster.search(""), all);
    }

    #[test]
    fn test_search_no_match() {
        let roster = seeded();
        assert!(roster.search("zzz").is_empty());
    }
}
