//! Serializers for converting internal models to API responses
//!
//! This module provides structures to serialize internal models into
//! JSON-friendly shapes for API responses.

use serde::{Deserialize, Serialize};

use crate::models::Project;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tech: String,
    pub link: String,
    pub is_favorite: bool,
}

impl ProjectResponse {
    pub fn new(project: &Project, is_favorite: bool) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            description: project.description.clone(),
            tech: project.tech.clone(),
            link: project.link.clone(),
            is_favorite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_response_carries_the_favorite_flag() {
        let project = Project::new(1, "Sample", "A sample project", "React", "#");

        let response = ProjectResponse::new(&project, true);
        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Sample");
        assert!(response.is_favorite);

        let response = ProjectResponse::new(&project, false);
        assert!(!response.is_favorite);
    }
}
