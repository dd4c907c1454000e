//! Project model

use serde::{Deserialize, Serialize};

/// A catalog entry describing a sample software project.
///
/// Catalog entries are immutable: they are defined in source, loaded once
/// at startup, and only ever referenced by `id` after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique integer identifier, stable for the process lifetime
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Comma-separated technology list, e.g. "React, Node.js, MongoDB"
    pub tech: String,
    /// Project URL (may be a placeholder)
    pub link: String,
}

impl Project {
    /// Create a new project
    pub fn new(id: i64, name: &str, description: &str, tech: &str, link: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            tech: tech.to_string(),
            link: link.to_string(),
        }
    }
}
