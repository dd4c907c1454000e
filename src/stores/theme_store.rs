//! In-memory store for the UI theme

use parking_lot::RwLock;

use crate::models::Theme;

/// Session-scoped theme state. Starts light on every process start and
/// is never persisted.
pub struct ThemeStore {
    current: RwLock<Theme>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Theme::default()),
        }
    }

    pub fn current(&self) -> Theme {
        *self.current.read()
    }

    /// Flip the theme and return the new value
    pub fn toggle(&self) -> Theme {
        let mut current = self.current.write();
        *current = current.toggled();
        *current
    }

    pub fn set(&self, theme: Theme) {
        *self.current.write() = theme;
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}
