//! Shared application state
//!
//! One [`AppState`] is built at startup and handed to every handler
//! through `web::Data`. Nothing here lives in a global.

use crate::catalog;
use crate::core::AnalyticsCache;
use crate::models::Project;
use crate::stores::{CatalogStore, FavoritesStore, ThemeStore};

pub struct AppState {
    pub catalog: CatalogStore,
    pub favorites: FavoritesStore,
    pub theme: ThemeStore,
    pub analytics: AnalyticsCache,
}

impl AppState {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            catalog: CatalogStore::new(projects),
            favorites: FavoritesStore::new(),
            theme: ThemeStore::new(),
            analytics: AnalyticsCache::new(),
        }
    }

    /// State over the built-in sample catalog, as served in production
    pub fn with_sample_catalog() -> Self {
        Self::new(catalog::sample_projects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;

    #[test]
    fn fresh_state_has_a_catalog_and_no_favorites() {
        let state = AppState::with_sample_catalog();

        assert_eq!(state.catalog.count(), 6);
        assert!(state.favorites.is_empty());
        assert_eq!(state.theme.current(), Theme::Light);
        assert_eq!(state.analytics.summary(&state.favorites).total_favorites, 0);
    }
}
