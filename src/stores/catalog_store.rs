//! Read-only store for the project catalog

use std::collections::HashMap;

use crate::models::Project;

/// The project catalog, loaded once at startup and never mutated.
///
/// Lookups by id go through an index so handlers stay O(1) regardless of
/// catalog size.
pub struct CatalogStore {
    projects: Vec<Project>,
    by_id: HashMap<i64, usize>,
}

impl CatalogStore {
    pub fn new(projects: Vec<Project>) -> Self {
        let by_id = projects
            .iter()
            .enumerate()
            .map(|(index, project)| (project.id, index))
            .collect();

        Self { projects, by_id }
    }

    /// All projects, in catalog order
    pub fn get_all(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by id
    pub fn get_by_id(&self, id: i64) -> Option<&Project> {
        self.by_id.get(&id).map(|&index| &self.projects[index])
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn count(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_projects;

    #[test]
    fn lookup_by_id_returns_the_matching_project() {
        let store = CatalogStore::new(sample_projects());

        let project = store.get_by_id(4).unwrap();
        assert_eq!(project.name, "Weather Dashboard");

        assert!(store.get_by_id(99).is_none());
        assert!(!store.contains(99));
    }

    #[test]
    fn get_all_preserves_catalog_order() {
        let store = CatalogStore::new(sample_projects());

        let ids: Vec<i64> = store.get_all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(store.count(), 6);
    }
}
