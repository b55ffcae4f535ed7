//! Data models for employees, training materials, and sample datasets.

pub mod analytics;
pub mod employee;
pub mod sample;
pub mod training;

pub use analytics::{AnalyticsData, DashboardData};
pub use employee::{Department, Employee, EmployeeDraft, EmployeeStatus};
pub use sample::SampleData;
pub use training::{CategoryFilter, MaterialType, TrainingCategory, TrainingDraft, TrainingMaterial};
