//! Analytics over the favorites collection
//!
//! [`compute_summary`] is a pure projection of the favorites list, and
//! [`AnalyticsCache`] memoizes it keyed on the store version so repeated
//! reads between changes never recompute.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::{AnalyticsSummary, Category, CategoryCounts, Project, TechCount};
use crate::stores::FavoritesStore;

/// Separator between entries in a project's tech string
const TECH_SEPARATOR: &str = ", ";

/// How many technologies the top list shows
const TOP_TECH_LIMIT: usize = 5;

/// Compute the full analytics summary for a favorites collection.
///
/// Tech counts split each project's tech string on `", "` and count every
/// token as written, including empty ones. The top list ranks techs by
/// count, breaking ties by first appearance in the collection, and keeps
/// at most five entries. The average description length is measured in
/// characters and rounded to the nearest whole number, halves up.
pub fn compute_summary(favorites: &[Project]) -> AnalyticsSummary {
    if favorites.is_empty() {
        return AnalyticsSummary::empty();
    }

    let mut tech_stack: HashMap<String, u32> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    let mut categories = CategoryCounts::default();

    for project in favorites {
        for tech in project.tech.split(TECH_SEPARATOR) {
            let count = tech_stack.entry(tech.to_string()).or_insert(0);
            if *count == 0 {
                first_seen.push(tech.to_string());
            }
            *count += 1;
        }

        categories.bump(Category::classify(&project.tech));
    }

    let mut top_techs: Vec<TechCount> = first_seen
        .iter()
        .map(|tech| TechCount::new(tech, tech_stack[tech]))
        .collect();
    // stable sort keeps first-seen order between equal counts
    top_techs.sort_by(|a, b| b.count.cmp(&a.count));
    top_techs.truncate(TOP_TECH_LIMIT);

    let total_chars: usize = favorites
        .iter()
        .map(|p| p.description.chars().count())
        .sum();
    let average_length = (total_chars as f64 / favorites.len() as f64).round() as u32;

    AnalyticsSummary {
        total_favorites: favorites.len(),
        unique_techs: tech_stack.len(),
        tech_stack,
        top_techs,
        categories,
        average_length,
    }
}

/// Version-keyed memo of the latest analytics summary.
///
/// A hit hands back the cached summary without touching the favorites
/// list. Any applied change bumps the store version, which invalidates
/// the cache on the next read.
pub struct AnalyticsCache {
    cached: RwLock<Option<(u64, Arc<AnalyticsSummary>)>>,
}

impl AnalyticsCache {
    pub fn new() -> Self {
        Self {
            cached: RwLock::new(None),
        }
    }

    /// The summary for the store's current state, reusing the cached one
    /// when the store has not changed since it was computed.
    pub fn summary(&self, favorites: &FavoritesStore) -> Arc<AnalyticsSummary> {
        let (items, version) = favorites.snapshot();

        if let Some((cached_version, cached)) = &*self.cached.read() {
            if *cached_version == version {
                return cached.clone();
            }
        }

        let fresh = Arc::new(compute_summary(&items));
        *self.cached.write() = Some((version, fresh.clone()));
        fresh
    }
}

impl Default for AnalyticsCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, description: &str, tech: &str) -> Project {
        Project::new(id, &format!("Project {id}"), description, tech, "#")
    }

    #[test]
    fn empty_favorites_yield_an_empty_summary() {
        assert_eq!(compute_summary(&[]), AnalyticsSummary::empty());
    }

    #[test]
    fn summary_counts_match_a_known_collection() {
        let favorites = vec![
            project(1, &"x".repeat(10), "React, Node.js, MongoDB"),
            project(2, &"y".repeat(20), "React, Express, PostgreSQL"),
        ];

        let summary = compute_summary(&favorites);

        assert_eq!(summary.total_favorites, 2);
        assert_eq!(summary.average_length, 15);
        assert_eq!(summary.unique_techs, 5);

        assert_eq!(summary.tech_stack["React"], 2);
        assert_eq!(summary.tech_stack["Node.js"], 1);
        assert_eq!(summary.tech_stack["MongoDB"], 1);
        assert_eq!(summary.tech_stack["Express"], 1);
        assert_eq!(summary.tech_stack["PostgreSQL"], 1);

        // both list React first, so both classify frontend
        assert_eq!(summary.categories.frontend, 2);
        assert_eq!(summary.categories.total(), 2);

        assert_eq!(summary.top_techs[0], TechCount::new("React", 2));
    }

    #[test]
    fn removal_is_reflected_in_the_next_summary() {
        let mut favorites = vec![
            project(1, &"x".repeat(10), "React, Node.js, MongoDB"),
            project(2, &"y".repeat(20), "React, Express, PostgreSQL"),
        ];

        favorites.retain(|p| p.id != 1);
        let summary = compute_summary(&favorites);

        assert_eq!(summary.total_favorites, 1);
        assert_eq!(summary.average_length, 20);
        assert!(!summary.tech_stack.contains_key("MongoDB"));
        assert_eq!(summary.tech_stack["React"], 1);
    }

    #[test]
    fn every_favorite_lands_in_exactly_one_category() {
        let favorites = vec![
            project(1, "a", "React, Node.js"),
            project(2, "b", "Node.js, Express"),
            project(3, "c", "Rust, Postgres"),
            project(4, "d", "Vue"),
        ];

        let summary = compute_summary(&favorites);

        assert_eq!(summary.categories.frontend, 2);
        assert_eq!(summary.categories.backend, 1);
        assert_eq!(summary.categories.fullstack, 1);
        assert_eq!(summary.categories.total() as usize, favorites.len());
    }

    #[test]
    fn empty_tech_string_counts_as_one_empty_token() {
        let summary = compute_summary(&[project(1, "a", "")]);

        assert_eq!(summary.tech_stack[""], 1);
        assert_eq!(summary.unique_techs, 1);
        assert_eq!(summary.categories.fullstack, 1);
    }

    #[test]
    fn top_techs_cap_at_five_in_first_seen_order() {
        let favorites = vec![
            project(1, "a", "One, Two, Three"),
            project(2, "b", "Four, Five, Six, Seven"),
        ];

        let summary = compute_summary(&favorites);

        // all tied at one, so first appearance decides the order
        let names: Vec<&str> = summary.top_techs.iter().map(|t| t.tech.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Three", "Four", "Five"]);
        assert_eq!(summary.unique_techs, 7);
    }

    #[test]
    fn average_length_rounds_halves_up_and_counts_characters() {
        let favorites = vec![project(1, "x", "React"), project(2, "yy", "React")];
        assert_eq!(compute_summary(&favorites).average_length, 2);

        // character count, not byte count
        let summary = compute_summary(&[project(1, "héllo", "React")]);
        assert_eq!(summary.average_length, 5);
    }

    #[test]
    fn cache_reuses_the_summary_until_the_store_changes() {
        let store = FavoritesStore::new();
        let cache = AnalyticsCache::new();

        store.add(project(1, &"x".repeat(10), "React"));

        let first = cache.summary(&store);
        let second = cache.summary(&store);
        assert!(Arc::ptr_eq(&first, &second));

        // a no-op dispatch keeps the cache warm
        store.add(project(1, &"x".repeat(10), "React"));
        assert!(Arc::ptr_eq(&first, &cache.summary(&store)));

        store.add(project(2, &"y".repeat(20), "Vue"));
        let third = cache.summary(&store);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(third.total_favorites, 2);
        assert_eq!(third.average_length, 15);
    }
}
