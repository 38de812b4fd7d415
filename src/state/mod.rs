pub mod catalog;
pub mod game;
pub mod validation;

use std::sync::Arc;

use tokio::sync::RwLock;

use self::catalog::GameCatalog;

/// Handle to the application state shared by every request handler.
pub type SharedState = Arc<AppState>;

/// Central application state owning the game catalog.
///
/// The catalog sits behind a single lock: reads share it, and each mutation holds the write
/// guard for its whole validate, look up and mutate sequence.
pub struct AppState {
    catalog: RwLock<GameCatalog>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(catalog: GameCatalog) -> SharedState {
        Arc::new(Self {
            catalog: RwLock::new(catalog),
        })
    }

    /// The game catalog guarded by its lock.
    pub fn catalog(&self) -> &RwLock<GameCatalog> {
        &self.catalog
    }
}
