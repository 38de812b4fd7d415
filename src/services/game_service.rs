use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    dto::game::{GamePayload, GameSummary},
    error::ServiceError,
    state::SharedState,
};

/// Return every game in insertion order.
pub async fn list_games(state: &SharedState) -> Vec<GameSummary> {
    let catalog = state.catalog().read().await;
    catalog.list().iter().map(Into::into).collect()
}

/// Fetch a single game by identifier.
pub async fn get_game(state: &SharedState, id: Uuid) -> Result<GameSummary, ServiceError> {
    let catalog = state.catalog().read().await;
    Ok(catalog.get(id)?.into())
}

/// Validate and store a new game, ignoring any identifier carried by the payload.
pub async fn create_game(
    state: &SharedState,
    payload: GamePayload,
) -> Result<GameSummary, ServiceError> {
    if let Some(ignored) = payload.id {
        debug!(%ignored, "discarding client-supplied game id");
    }

    let game = {
        let mut catalog = state.catalog().write().await;
        catalog.create(payload.into()).inspect_err(|err| {
            debug!(error = %err, "rejected game creation");
        })?
    };

    info!(id = %game.id, name = %game.name, "game created");
    Ok(game.into())
}

/// Replace every field of the game stored under `id`; the path identifier is authoritative.
pub async fn update_game(
    state: &SharedState,
    id: Uuid,
    payload: GamePayload,
) -> Result<(), ServiceError> {
    {
        let mut catalog = state.catalog().write().await;
        catalog.update(id, payload.into()).inspect_err(|err| {
            debug!(%id, error = %err, "rejected game update");
        })?;
    }

    info!(%id, "game updated");
    Ok(())
}

/// Remove the game stored under `id`.
pub async fn delete_game(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    {
        let mut catalog = state.catalog().write().await;
        catalog.delete(id)?;
    }

    info!(%id, "game deleted");
    Ok(())
}
