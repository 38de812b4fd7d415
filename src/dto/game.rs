use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::game::{Game, GameDraft};

/// Payload accepted when creating or replacing a game.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    /// Ignored: identifiers are assigned by the server and addressed through the path.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Between 3 and 50 characters.
    pub name: String,
    /// Between 3 and 20 characters.
    pub genre: String,
    /// Between 1 and 100, inclusive.
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,
    /// Calendar date formatted as `YYYY-MM-DD`.
    #[schema(value_type = String, format = Date, example = "1993-12-10")]
    pub release_date: Date,
}

impl From<GamePayload> for GameDraft {
    fn from(payload: GamePayload) -> Self {
        Self {
            name: payload.name,
            genre: payload.genre,
            price: payload.price,
            release_date: payload.release_date,
        }
    }
}

/// Public projection of a stored game.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Display title.
    pub name: String,
    /// Genre label.
    pub genre: String,
    /// Price in the store currency.
    #[schema(value_type = f64, example = 19.99)]
    pub price: Decimal,
    /// Calendar date formatted as `YYYY-MM-DD`.
    #[schema(value_type = String, format = Date, example = "1992-07-15")]
    pub release_date: Date,
}

impl From<Game> for GameSummary {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            genre: game.genre,
            price: game.price,
            release_date: game.release_date,
        }
    }
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        game.clone().into()
    }
}
