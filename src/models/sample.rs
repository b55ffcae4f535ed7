//! Sample content bundled with the application.

use serde::{Deserialize, Serialize};

use super::analytics::{AnalyticsData, DashboardData};
use super::employee::Employee;
use super::training::TrainingMaterial;
use crate::error::Result;

const SAMPLE_DATA: &str = include_str!("../../assets/sample_data.json");

/// Seed records and display datasets loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    pub employees: Vec<Employee>,
    pub training: Vec<TrainingMaterial>,
    pub dashboard: DashboardData,
    pub analytics: AnalyticsData,
}

impl SampleData {
    /// Parse the bundled sample data.
    pub fn load() -> Result<Self> {
        Ok(serde_json::from_str(SAMPLE_DATA)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::training::TrainingCategory;

    #[test]
    fn test_bundled_sample_data_parses() {
        let data = SampleData::load().unwrap();
        assert_eq!(data.employees.len(), 4);
        assert_eq!(data.training.len(), 4);
        assert_eq!(data.dashboard.stats.len(), 4);
        assert_eq!(data.dashboard.activities.len(), 4);
        assert_eq!(data.analytics.metrics.len(), 4);
        assert_eq!(data.analytics.departments.len(), 5);
        assert_eq!(data.analytics.training_progress.len(), 6);
        assert_eq!(data.analytics.status_total(), 153);
    }

    #[test]
    fn test_seed_employees_have_no_avatar() {
        let data = SampleData::load().unwrap();
        assert!(data.employees.iter().all(|e| e.avatar.is_none()));
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let data = SampleData::load().unwrap();
        let mut ids: Vec<_> = data.employees.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), data.employees.len());
    }

    #[test]
    fn test_sample_training_categories() {
        let data = SampleData::load().unwrap();
        let engineering = data
            .training
            .iter()
            .filter(|m| m.category == Some(TrainingCategory::Engineering))
            .count();
        assert_eq!(engineering, 1);
    }
}
