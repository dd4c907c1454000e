//! The built-in project catalog
//!
//! The catalog is fixed at compile time. Projects are identified by their
//! integer id everywhere else in the app.

use crate::models::Project;

/// Build the sample project catalog.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "E-Commerce Platform",
            "Full-stack e-commerce solution with React and Node.js backend",
            "React, Node.js, MongoDB",
            "#",
        ),
        Project::new(
            2,
            "Social Media App",
            "Real-time social networking application with REST API",
            "React, Express, PostgreSQL",
            "#",
        ),
        Project::new(
            3,
            "Task Management Tool",
            "Collaborative to-do list with real-time updates",
            "React, Firebase, Tailwind CSS",
            "#",
        ),
        Project::new(
            4,
            "Weather Dashboard",
            "Weather app with geolocation and forecast data",
            "React, Weather API, Charts.js",
            "#",
        ),
        Project::new(
            5,
            "Blog Platform",
            "Content management system for creating and sharing articles",
            "React, Strapi CMS, GraphQL",
            "#",
        ),
        Project::new(
            6,
            "Fitness Tracker",
            "Track workouts and monitor personal fitness goals",
            "React Native, Django, SQLite",
            "#",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_six_projects_with_unique_ids() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 6);

        let ids: HashSet<i64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn catalog_entries_are_fully_populated() {
        for project in sample_projects() {
            assert!(!project.name.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tech.is_empty());
            assert!(!project.link.is_empty());
        }
    }
}
