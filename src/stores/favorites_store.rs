//! In-memory store for favorited projects
//!
//! All mutation goes through [`FavoritesStore::dispatch`], which applies a
//! closed set of actions through a pure reducer. The stored list is replaced
//! wholesale on every change, so readers always see a consistent snapshot
//! and never a half-applied update.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::models::Project;

/// The closed set of mutations the favorites collection supports
#[derive(Debug, Clone)]
pub enum FavoritesAction {
    /// Add a project, ignored when its id is already present
    Add(Project),
    /// Remove the project with this id, ignored when absent
    Remove(i64),
    /// Remove everything, ignored when already empty
    Clear,
}

struct FavoritesInner {
    items: Arc<Vec<Project>>,
    version: u64,
}

/// Session-scoped favorites collection.
///
/// The collection keeps insertion order, holds at most one entry per
/// project id, and starts empty on every process start. `version` counts
/// applied changes and only moves when the contents actually changed,
/// which makes it a cheap cache key for anything derived from the list.
pub struct FavoritesStore {
    inner: RwLock<FavoritesInner>,
    notify: watch::Sender<u64>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            inner: RwLock::new(FavoritesInner {
                items: Arc::new(Vec::new()),
                version: 0,
            }),
            notify,
        }
    }

    /// Apply an action. Returns true when the collection changed.
    ///
    /// No-op actions (duplicate add, remove of an absent id, clear on an
    /// empty list) leave the version untouched and wake no subscribers.
    pub fn dispatch(&self, action: FavoritesAction) -> bool {
        let mut inner = self.inner.write();

        match reduce(&inner.items, &action) {
            Some(next) => {
                inner.items = Arc::new(next);
                inner.version += 1;
                // notify while still holding the lock so subscribers
                // observe versions in dispatch order
                self.notify.send_replace(inner.version);
                true
            }
            None => false,
        }
    }

    /// Add a project to the favorites. Returns false when it was
    /// already favorited.
    pub fn add(&self, project: Project) -> bool {
        self.dispatch(FavoritesAction::Add(project))
    }

    /// Remove a project by id. Returns false when it was not favorited.
    pub fn remove(&self, id: i64) -> bool {
        self.dispatch(FavoritesAction::Remove(id))
    }

    /// Remove all favorites. Returns false when already empty.
    pub fn clear(&self) -> bool {
        self.dispatch(FavoritesAction::Clear)
    }

    /// Current favorites, in insertion order
    pub fn items(&self) -> Arc<Vec<Project>> {
        self.inner.read().items.clone()
    }

    /// Current favorites together with the version they belong to
    pub fn snapshot(&self) -> (Arc<Vec<Project>>, u64) {
        let inner = self.inner.read();
        (inner.items.clone(), inner.version)
    }

    /// Whether the project with this id is favorited
    pub fn contains(&self, id: i64) -> bool {
        self.inner.read().items.iter().any(|p| p.id == id)
    }

    pub fn count(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }

    /// Number of changes applied since startup
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Subscribe to change notifications. The receiver yields the version
    /// of each applied change and starts out caught up with the current
    /// state, so only future changes wake it.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the next favorites list for an action, or `None` when the
/// action does not change anything.
fn reduce(current: &[Project], action: &FavoritesAction) -> Option<Vec<Project>> {
    match action {
        FavoritesAction::Add(project) => {
            if current.iter().any(|p| p.id == project.id) {
                return None;
            }
            let mut next = current.to_vec();
            next.push(project.clone());
            Some(next)
        }
        FavoritesAction::Remove(id) => {
            if !current.iter().any(|p| p.id == *id) {
                return None;
            }
            Some(current.iter().filter(|p| p.id != *id).cloned().collect())
        }
        FavoritesAction::Clear => {
            if current.is_empty() {
                return None;
            }
            Some(Vec::new())
        }
    }
}
