//! Form state for the employee, training, and settings dialogs.

use crate::config::SettingsDefaults;
use crate::error::{AppError, Result};
use crate::models::employee::{Department, Employee, EmployeeDraft, EmployeeStatus};
use crate::models::training::{MaterialType, TrainingCategory, TrainingDraft};

/// Form state for employee add/edit.
#[derive(Default, Clone)]
pub struct EmployeeForm {
    /// Id of the employee being edited; `None` means the form adds.
    pub editing_id: Option<String>,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: Option<Department>,
    pub status: EmployeeStatus,
    pub is_open: bool,
    /// Set after a rejected submit so required fields get highlighted.
    pub show_errors: bool,
}

impl EmployeeForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Empty form opened for a new employee.
    pub fn add() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    /// Create a form pre-filled for editing an existing employee.
    pub fn edit(emp: &Employee) -> Self {
        Self {
            editing_id: Some(emp.id.clone()),
            name: emp.name.clone(),
            email: emp.email.clone(),
            position: emp.position.clone(),
            department: emp.department,
            status: emp.status,
            is_open: true,
            show_errors: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn name_missing(&self) -> bool {
        self.name.trim().is_empty()
    }

    pub fn email_missing(&self) -> bool {
        self.email.trim().is_empty()
    }

    /// Blank, or missing the `@` every address needs.
    pub fn email_invalid(&self) -> bool {
        self.email_missing() || !self.email.contains('@')
    }

    pub fn position_missing(&self) -> bool {
        self.position.trim().is_empty()
    }

    /// Check required fields and build the draft to submit.
    pub fn validate(&self) -> Result<EmployeeDraft> {
        if self.name_missing() {
            return Err(AppError::validation("Full name is required"));
        }
        if self.email_missing() {
            return Err(AppError::validation("Email is required"));
        }
        if self.email_invalid() {
            return Err(AppError::validation("Email must be a valid address"));
        }
        if self.position_missing() {
            return Err(AppError::validation("Position is required"));
        }

        Ok(EmployeeDraft {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            position: Some(self.position.trim().to_string()),
            department: self.department,
            status: Some(self.status),
            avatar: None,
        })
    }
}

/// Form state for the training upload dialog.
#[derive(Default, Clone)]
pub struct TrainingForm {
    pub title: String,
    pub description: String,
    pub material_type: MaterialType,
    pub category: Option<TrainingCategory>,
    pub duration: String,
    pub content_url: String,
    pub is_open: bool,
    pub show_errors: bool,
}

impl TrainingForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open() -> Self {
        Self {
            is_open: true,
            ..Default::default()
        }
    }

    pub fn title_missing(&self) -> bool {
        self.title.trim().is_empty()
    }

    pub fn duration_missing(&self) -> bool {
        self.duration.trim().is_empty()
    }

    /// Check required fields and build the draft to submit.
    pub fn validate(&self) -> Result<TrainingDraft> {
        if self.title_missing() {
            return Err(AppError::validation("Title is required"));
        }
        if self.duration_missing() {
            return Err(AppError::validation("Duration is required"));
        }

        let content_url = self.content_url.trim();
        Ok(TrainingDraft {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            material_type: Some(self.material_type),
            category: self.category,
            duration: Some(self.duration.trim().to_string()),
            completion_rate: None,
            content_url: (!content_url.is_empty()).then(|| content_url.to_string()),
        })
    }
}

/// Local copy of the settings shown on the settings page.
///
/// Edits stay in memory; saving does not write them anywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsForm {
    pub values: SettingsDefaults,
    pub session_duration_input: String,
    pub retention_days_input: String,
}

impl SettingsForm {
    pub fn new(defaults: &SettingsDefaults) -> Self {
        Self {
            values: defaults.clone(),
            session_duration_input: defaults.session_duration_minutes.to_string(),
            retention_days_input: defaults.retention_days.to_string(),
        }
    }

    /// Restore every field to the configured defaults.
    pub fn reset(&mut self, defaults: &SettingsDefaults) {
        *self = Self::new(defaults);
    }

    /// Apply the numeric text inputs. Non-numeric input keeps the previous value.
    pub fn apply_numeric_inputs(&mut self) {
        if let Ok(minutes) = self.session_duration_input.trim().parse() {
            self.values.session_duration_minutes = minutes;
        }
        if let Ok(days) = self.retention_days_input.trim().parse() {
            self.values.retention_days = days;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee() -> Employee {
        Employee {
            id: "7".to_string(),
            name: "Mike Chen".to_string(),
            email: "mike.chen@company.com".to_string(),
            position: "Product Manager".to_string(),
            department: Some(Department::Product),
            status: EmployeeStatus::Active,
            join_date: NaiveDate::from_ymd_opt(2022, 8, 20).unwrap(),
            avatar: None,
        }
    }

    #[test]
    fn test_add_form_defaults_to_active() {
        let form = EmployeeForm::add();
        assert!(form.is_open);
        assert!(!form.is_editing());
        assert_eq!(form.status, EmployeeStatus::Active);
    }

    #[test]
    fn test_edit_form_prefills() {
        let form = EmployeeForm::edit(&employee());
        assert!(form.is_editing());
        assert_eq!(form.editing_id.as_deref(), Some("7"));
        assert_eq!(form.name, "Mike Chen");
        assert_eq!(form.department, Some(Department::Product));
    }

    #[test]
    fn test_employee_form_requires_fields() {
        let mut form = EmployeeForm::add();
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));

        form.name = "Ana Lee".to_string();
        form.email = "ana.lee@company.com".to_string();
        assert!(form.validate().is_err());

        form.position = "  ".to_string();
        assert!(form.validate().is_err());

        form.position = "Designer".to_string();
        let draft = form.validate().unwrap();
        assert_eq!(draft.name.as_deref(), Some("Ana Lee"));
        assert_eq!(draft.status, Some(EmployeeStatus::Active));
    }

    #[test]
    fn test_employee_form_rejects_malformed_email() {
        let mut form = EmployeeForm::add();
        form.name = "Ana Lee".to_string();
        form.email = "not-an-email".to_string();
        form.position = "Designer".to_string();

        assert!(form.email_invalid());
        assert!(!form.email_missing());
        match form.validate() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("valid address")),
            other => panic!("expected validation error, got {other:?}"),
        }

        form.email = "ana.lee@company.com".to_string();
        assert!(!form.email_invalid());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_employee_form_trims_input() {
        let mut form = EmployeeForm::edit(&employee());
        form.name = "  Mike  Chen ".to_string();
        let draft = form.validate().unwrap();
        assert_eq!(draft.name.as_deref(), Some("Mike  Chen"));
    }

    #[test]
    fn test_training_form_requires_title_and_duration() {
        let mut form = TrainingForm::open();
        form.duration = "20 min".to_string();
        assert!(form.validate().is_err());

        form.title = "Onboarding".to_string();
        form.duration.clear();
        assert!(form.validate().is_err());

        form.duration = "20 min".to_string();
        let draft = form.validate().unwrap();
        assert_eq!(draft.material_type, Some(MaterialType::Document));
        assert_eq!(draft.completion_rate, None);
        assert_eq!(draft.content_url, None);
    }

    #[test]
    fn test_training_form_keeps_content_url() {
        let form = TrainingForm {
            title: "Policies".to_string(),
            duration: "5 min".to_string(),
            content_url: " https://example.com/policies.pdf ".to_string(),
            ..TrainingForm::open()
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.content_url.as_deref(), Some("https://example.com/policies.pdf"));
    }

    #[test]
    fn test_settings_numeric_inputs() {
        let defaults = SettingsDefaults::default();
        let mut form = SettingsForm::new(&defaults);

        form.session_duration_input = "45".to_string();
        form.retention_days_input = "ten".to_string();
        form.apply_numeric_inputs();

        assert_eq!(form.values.session_duration_minutes, 45);
        assert_eq!(form.values.retention_days, defaults.retention_days);
    }

    #[test]
    fn test_settings_reset_restores_defaults() {
        let defaults = SettingsDefaults::default();
        let mut form = SettingsForm::new(&defaults);
        form.values.company_name = "Other Corp".to_string();
        form.values.two_factor = false;

        form.reset(&defaults);
        assert_eq!(form, SettingsForm::new(&defaults));
    }
}
