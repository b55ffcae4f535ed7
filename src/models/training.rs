//! Training materials, their categories, and the catalog filter.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Duration label used when the form leaves it blank.
pub const DEFAULT_DURATION: &str = "0 min";

/// Kind of training content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Video,
    #[default]
    Document,
    Quiz,
}

impl MaterialType {
    pub const ALL: [MaterialType; 3] = [MaterialType::Video, MaterialType::Document, MaterialType::Quiz];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Video => "video",
            MaterialType::Document => "document",
            MaterialType::Quiz => "quiz",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Video => "Video",
            MaterialType::Document => "Document",
            MaterialType::Quiz => "Quiz",
        }
    }
}

/// Subject area of a training material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingCategory {
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "IT Security")]
    ItSecurity,
    Sales,
    Engineering,
    Management,
    Compliance,
}

impl TrainingCategory {
    pub const ALL: [TrainingCategory; 6] = [
        TrainingCategory::Hr,
        TrainingCategory::ItSecurity,
        TrainingCategory::Sales,
        TrainingCategory::Engineering,
        TrainingCategory::Management,
        TrainingCategory::Compliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingCategory::Hr => "HR",
            TrainingCategory::ItSecurity => "IT Security",
            TrainingCategory::Sales => "Sales",
            TrainingCategory::Engineering => "Engineering",
            TrainingCategory::Management => "Management",
            TrainingCategory::Compliance => "Compliance",
        }
    }
}

impl fmt::Display for TrainingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector state. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(TrainingCategory),
}

impl CategoryFilter {
    /// Exact category equality, or always true for `All`.
    pub fn matches(&self, category: Option<TrainingCategory>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(*wanted),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Selector entries: the sentinel first, then every category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(TrainingCategory::ALL.into_iter().map(CategoryFilter::Only))
    }
}

/// A piece of training content in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMaterial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub material_type: MaterialType,
    pub category: Option<TrainingCategory>,
    pub duration: String,
    pub completion_rate: u8,
    pub upload_date: NaiveDate,
    #[serde(default)]
    pub content_url: Option<String>,
}

impl TrainingMaterial {
    pub fn category_str(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }

    /// Case-insensitive match against title, description, or category.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category_str().to_lowercase().contains(needle)
    }

    /// Completion rate as a 0.0..=1.0 fraction for progress bars.
    pub fn completion_fraction(&self) -> f32 {
        f32::from(self.completion_rate.min(100)) / 100.0
    }
}

/// Partial training material submitted by the upload form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub material_type: Option<MaterialType>,
    pub category: Option<TrainingCategory>,
    pub duration: Option<String>,
    /// Ignored on add; new material always starts at 0%.
    pub completion_rate: Option<u8>,
    pub content_url: Option<String>,
}
