//! In-memory stores for the catalog, favorites, and theme

mod catalog_store;
mod favorites_store;
mod theme_store;

pub use catalog_store::CatalogStore;
pub use favorites_store::{FavoritesAction, FavoritesStore};
pub use theme_store::ThemeStore;
