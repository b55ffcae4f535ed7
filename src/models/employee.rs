//! Employee records and the draft used by the add/edit form.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Product,
    Design,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl Department {
    /// All departments in form order.
    pub const ALL: [Department; 7] = [
        Department::Engineering,
        Department::Product,
        Department::Design,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
    ];

    /// Stored value, also used for search matching.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Product => "Product",
            Department::Design => "Design",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
        }
    }

    /// Label shown in the department picker.
    pub fn label(&self) -> &'static str {
        match self {
            Department::Hr => "Human Resources",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::Active, EmployeeStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EmployeeStatus::Active)
    }
}

/// A team member held in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: Option<Department>,
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Employee {
    /// Department value as stored, empty when unassigned.
    pub fn department_str(&self) -> &'static str {
        self.department.map(|d| d.as_str()).unwrap_or("")
    }

    /// Initials for the avatar fallback ("Sarah Johnson" -> "SJ").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Case-insensitive match against name, email, position, or department.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.position.to_lowercase().contains(needle)
            || self.department_str().to_lowercase().contains(needle)
    }

    /// Overwrite the fields the draft supplies, leaving the rest untouched.
    pub fn merge(&mut self, draft: EmployeeDraft) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(email) = draft.email {
            self.email = email;
        }
        if let Some(position) = draft.position {
            self.position = position;
        }
        if let Some(department) = draft.department {
            self.department = Some(department);
        }
        if let Some(status) = draft.status {
            self.status = status;
        }
        if let Some(avatar) = draft.avatar {
            self.avatar = Some(avatar);
        }
    }
}

/// Partial employee record submitted by the form.
///
/// `None` means "not supplied": defaulted on add, left as-is on edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<Department>,
    pub status: Option<EmployeeStatus>,
    pub avatar: Option<String>,
}

impl EmployeeDraft {
    /// Draft carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
