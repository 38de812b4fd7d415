use rust_decimal::Decimal;
use time::Date;
use uuid::Uuid;
use validator::Validate;

use crate::state::validation::{validate_not_blank, validate_price};

/// A game stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Identifier assigned by the catalog, immutable once set.
    pub id: Uuid,
    /// Display title.
    pub name: String,
    /// Free-form genre label.
    pub genre: String,
    /// Price in the store currency.
    pub price: Decimal,
    /// Calendar release date.
    pub release_date: Date,
}

/// Every client-controlled field of a [`Game`], checked before it reaches the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct GameDraft {
    /// Required, 3 to 50 characters.
    #[validate(
        custom(function = "validate_not_blank", message = "name is required"),
        length(min = 3, max = 50, message = "name must be between 3 and 50 characters")
    )]
    pub name: String,
    /// Required, 3 to 20 characters.
    #[validate(
        custom(function = "validate_not_blank", message = "genre is required"),
        length(min = 3, max = 20, message = "genre must be between 3 and 20 characters")
    )]
    pub genre: String,
    /// Between 1 and 100, inclusive.
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    /// Calendar release date, unconstrained.
    pub release_date: Date,
}

impl Game {
    /// Build a game from a draft under the given identifier.
    pub fn new(id: Uuid, draft: GameDraft) -> Self {
        let GameDraft {
            name,
            genre,
            price,
            release_date,
        } = draft;

        Self {
            id,
            name,
            genre,
            price,
            release_date,
        }
    }

    /// Replace every field except the identifier.
    pub fn apply(&mut self, draft: GameDraft) {
        self.name = draft.name;
        self.genre = draft.genre;
        self.price = draft.price;
        self.release_date = draft.release_date;
    }
}
