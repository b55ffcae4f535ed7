//! Display-only datasets for the dashboard and analytics views.
//!
//! These values are sample figures. Nothing here is computed from the
//! roster or the training catalog.

use serde::{Deserialize, Serialize};

/// Headline number with its month-over-month change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub change: String,
    /// Accent color as `#rrggbb`.
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Add,
    Training,
    Update,
    Review,
}

/// Entry in the dashboard's recent activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub action: String,
    pub employee: String,
    pub time: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: Vec<Metric>,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPerformance {
    pub name: String,
    pub employees: u32,
    pub performance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProgress {
    pub month: String,
    pub completed: f64,
    pub in_progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightTone {
    Positive,
    Info,
    Warning,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub detail: String,
    pub tone: InsightTone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub metrics: Vec<Metric>,
    pub departments: Vec<DepartmentPerformance>,
    pub training_progress: Vec<MonthlyProgress>,
    pub employee_status: Vec<StatusSlice>,
    pub insights: Vec<Insight>,
}

impl AnalyticsData {
    /// Sum of all status slice values.
    pub fn status_total(&self) -> u32 {
        self.employee_status.iter().map(|s| s.value).sum()
    }

    /// Share of a slice as a 0.0..=1.0 fraction. Zero when the total is zero.
    pub fn status_share(&self, slice: &StatusSlice) -> f64 {
        let total = self.status_total();
        if total == 0 {
            return 0.0;
        }
        f64::from(slice.value) / f64::from(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(name: &str, value: u32) -> StatusSlice {
        StatusSlice {
            name: name.to_string(),
            value,
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_status_share() {
        let data = AnalyticsData {
            metrics: Vec::new(),
            departments: Vec::new(),
            training_progress: Vec::new(),
            employee_status: vec![slice("Active", 3), slice("Inactive", 1)],
            insights: Vec::new(),
        };
        assert_eq!(data.status_total(), 4);
        assert!((data.status_share(&data.employee_status[0]) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_share_empty_total() {
        let data = AnalyticsData {
            metrics: Vec::new(),
            departments: Vec::new(),
            training_progress: Vec::new(),
            employee_status: vec![slice("Active", 0)],
            insights: Vec::new(),
        };
        assert_eq!(data.status_share(&data.employee_status[0]), 0.0);
    }
}
