//! Training catalog with add and search/category filtering.

use chrono::Local;
use tracing::info;

use super::timestamp_id;
use crate::models::training::{CategoryFilter, DEFAULT_DURATION, TrainingDraft, TrainingMaterial};

/// Ordered collection of training materials. Append-only.
#[derive(Debug, Clone, Default)]
pub struct TrainingCatalog {
    materials: Vec<TrainingMaterial>,
}

impl TrainingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_materials(materials: Vec<TrainingMaterial>) -> Self {
        Self { materials }
    }

    pub fn materials(&self) -> &[TrainingMaterial] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Append a new material. Completion rate always starts at zero and a
    /// blank duration becomes "0 min".
    pub fn add(&mut self, draft: TrainingDraft) -> &TrainingMaterial {
        let id = timestamp_id(|id| self.materials.iter().any(|m| m.id == id));
        let duration = draft
            .duration
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DURATION.to_string());

        let material = TrainingMaterial {
            id,
            title: draft.title.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            material_type: draft.material_type.unwrap_or_default(),
            category: draft.category,
            duration,
            completion_rate: 0,
            upload_date: Local::now().date_naive(),
            content_url: draft.content_url,
        };
        info!(
            id = %material.id,
            title = %material.title,
            kind = material.material_type.as_str(),
            "Training material added"
        );

        self.materials.push(material);
        &self.materials[self.materials.len() - 1]
    }

    /// Materials matching both the text query (title, description, or
    /// category, ignoring case) and the category selector.
    pub fn filter(&self, query: &str, category: CategoryFilter) -> Vec<&TrainingMaterial> {
        let needle = query.to_lowercase();
        self.materials
            .iter()
            .filter(|m| m.matches(&needle) && category.matches(m.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleData;
    use crate::models::training::{MaterialType, TrainingCategory};

    fn seeded() -> TrainingCatalog {
        TrainingCatalog::with_materials(SampleData::load().unwrap().training)
    }

    fn titles(list: &[&TrainingMaterial]) -> Vec<String> {
        list.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn test_add_forces_zero_completion() {
        let mut catalog = seeded();
        let added = catalog.add(TrainingDraft {
            title: Some("Leadership 101".to_string()),
            completion_rate: Some(75),
            ..Default::default()
        });
        assert_eq!(added.completion_rate, 0);
        assert_eq!(catalog.materials().last().unwrap().title, "Leadership 101");
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_add_defaults() {
        let mut catalog = TrainingCatalog::new();
        let added = catalog.add(TrainingDraft::default()).clone();
        assert_eq!(added.duration, "0 min");
        assert_eq!(added.material_type, MaterialType::Document);
        assert_eq!(added.category, None);
        assert_eq!(added.upload_date, Local::now().date_naive());
    }

    #[test]
    fn test_blank_duration_becomes_default() {
        let mut catalog = TrainingCatalog::new();
        let added = catalog.add(TrainingDraft {
            duration: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(added.duration, "0 min");
    }

    #[test]
    fn test_add_keeps_supplied_duration() {
        let mut catalog = TrainingCatalog::new();
        let added = catalog.add(TrainingDraft {
            duration: Some("15 min".to_string()),
            material_type: Some(MaterialType::Quiz),
            ..Default::default()
        });
        assert_eq!(added.duration, "15 min");
        assert_eq!(added.material_type, MaterialType::Quiz);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let mut catalog = seeded();
        catalog.add(TrainingDraft {
            title: Some("Engineering management basics".to_string()),
            category: Some(TrainingCategory::Management),
            ..Default::default()
        });

        let found = catalog.filter("", CategoryFilter::Only(TrainingCategory::Engineering));
        assert_eq!(titles(&found), vec!["Code Review Best Practices"]);
        assert!(
            found
                .iter()
                .all(|m| m.category == Some(TrainingCategory::Engineering))
        );
    }

    #[test]
    fn test_search_and_category_combine() {
        let catalog = seeded();
        assert_eq!(
            titles(&catalog.filter("training", CategoryFilter::Only(TrainingCategory::ItSecurity))),
            vec!["Cybersecurity Awareness Training"]
        );
        assert!(
            catalog
                .filter("training", CategoryFilter::Only(TrainingCategory::Sales))
                .is_empty()
        );
    }

    #[test]
    fn test_search_matches_category_text() {
        let catalog = seeded();
        assert_eq!(
            titles(&catalog.filter("it sec", CategoryFilter::All)),
            vec!["Cybersecurity Awareness Training"]
        );
    }

    #[test]
    fn test_empty_query_all_categories_is_identity() {
        let catalog = seeded();
        let all: Vec<&TrainingMaterial> = catalog.materials().iter().collect();
        assert_eq!(catalog.filter("", CategoryFilter::All), all);
    }

    #[test]
    fn test_uncategorised_material_hidden_by_category_filter() {
        let mut catalog = TrainingCatalog::new();
        catalog.add(TrainingDraft::default());
        assert_eq!(catalog.filter("", CategoryFilter::All).len(), 1);
        assert!(
            catalog
                .filter("", CategoryFilter::Only(TrainingCategory::Hr))
                .is_empty()
        );
    }
}
