//! Derived analytics over the favorites collection

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::enums::Category;

/// A technology and how many favorited projects list it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCount {
    pub tech: String,
    pub count: u32,
}

impl TechCount {
    pub fn new(tech: &str, count: u32) -> Self {
        Self {
            tech: tech.to_string(),
            count,
        }
    }
}

/// Favorites partitioned by category. Every favorite lands in exactly
/// one bucket, so the bucket sum always equals the favorites total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub frontend: u32,
    pub backend: u32,
    pub fullstack: u32,
}

impl CategoryCounts {
    pub fn bump(&mut self, category: Category) {
        match category {
            Category::Frontend => self.frontend += 1,
            Category::Backend => self.backend += 1,
            Category::Fullstack => self.fullstack += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.frontend + self.backend + self.fullstack
    }
}

/// Snapshot of everything the analytics view shows, computed from the
/// favorites collection alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_favorites: usize,
    pub tech_stack: HashMap<String, u32>,
    pub top_techs: Vec<TechCount>,
    pub categories: CategoryCounts,
    pub average_length: u32,
    pub unique_techs: usize,
}

impl AnalyticsSummary {
    /// The summary of an empty favorites collection: all counts zero,
    /// no tech entries.
    pub fn empty() -> Self {
        Self {
            total_favorites: 0,
            tech_stack: HashMap::new(),
            top_techs: Vec::new(),
            categories: CategoryCounts::default(),
            average_length: 0,
            unique_techs: 0,
        }
    }
}
