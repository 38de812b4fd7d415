use thiserror::Error;
use tracing::warn;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::state::game::{Game, GameDraft};

/// Errors raised by [`GameCatalog`] operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload violates one or more field constraints.
    #[error("invalid game: {0}")]
    Invalid(#[from] ValidationErrors),
    /// No game is stored under the identifier.
    #[error("game `{0}` not found")]
    NotFound(Uuid),
}

/// In-memory, insertion-ordered collection of games.
///
/// Every operation validates and looks up before mutating, so a failed call leaves the
/// collection untouched. The catalog itself is not synchronised; callers share it behind
/// the lock held by [`crate::state::AppState`].
#[derive(Debug, Default)]
pub struct GameCatalog {
    games: Vec<Game>,
}

impl GameCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from seed drafts, skipping the ones that fail validation.
    pub fn seeded(seeds: impl IntoIterator<Item = GameDraft>) -> Self {
        let mut catalog = Self::new();
        for seed in seeds {
            let name = seed.name.clone();
            if let Err(err) = catalog.create(seed) {
                warn!(name = %name, error = %err, "skipping invalid seed game");
            }
        }
        catalog
    }

    /// All stored games in insertion order.
    pub fn list(&self) -> &[Game] {
        &self.games
    }

    /// Look up a game by identifier.
    pub fn get(&self, id: Uuid) -> Result<&Game, CatalogError> {
        self.games
            .iter()
            .find(|game| game.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Validate the draft, assign it a fresh identifier and append it.
    pub fn create(&mut self, draft: GameDraft) -> Result<Game, CatalogError> {
        draft.validate()?;

        let game = Game::new(self.next_id(), draft);
        self.games.push(game.clone());
        Ok(game)
    }

    /// Replace every field but the identifier of the game stored under `id`.
    ///
    /// The draft is validated before the lookup, so an invalid draft is rejected even when
    /// `id` is unknown.
    pub fn update(&mut self, id: Uuid, draft: GameDraft) -> Result<(), CatalogError> {
        draft.validate()?;

        let game = self
            .games
            .iter_mut()
            .find(|game| game.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        game.apply(draft);
        Ok(())
    }

    /// Remove the game stored under `id`.
    pub fn delete(&mut self, id: Uuid) -> Result<(), CatalogError> {
        let index = self
            .games
            .iter()
            .position(|game| game.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        self.games.remove(index);
        Ok(())
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the catalog holds no game.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn contains(&self, id: Uuid) -> bool {
        self.games.iter().any(|game| game.id == id)
    }

    fn next_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.contains(id) {
                return id;
            }
        }
    }
}
