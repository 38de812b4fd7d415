use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::game::{GamePayload, GameSummary},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes exposing the game catalog.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{id}",
            get(get_game_by_id).put(update_game).delete(delete_game),
        )
}

/// Location of a stored game, as served by [`get_game_by_id`].
pub fn game_location(id: Uuid) -> String {
    format!("/games/{id}")
}

/// List every game in the catalog.
#[utoipa::path(
    get,
    path = "/games",
    operation_id = "GetAllGames",
    tag = "Games",
    responses(
        (status = 200, description = "All games", body = [GameSummary]),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn list_games(State(state): State<SharedState>) -> Json<Vec<GameSummary>> {
    Json(game_service::list_games(&state).await)
}

/// Retrieve a game by its identifier.
#[utoipa::path(
    get,
    path = "/games/{id}",
    operation_id = "GetGameById",
    tag = "Games",
    params(("id" = Uuid, Path, description = "Identifier of the game to retrieve")),
    responses(
        (status = 200, description = "Game", body = GameSummary),
        (status = 404, description = "No game with this identifier"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn get_game_by_id(
    State(state): State<SharedState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<GameSummary>, AppError> {
    let Path(id) = id?;
    Ok(Json(game_service::get_game(&state, id).await?))
}

/// Create a game; the server assigns its identifier.
#[utoipa::path(
    post,
    path = "/games",
    operation_id = "CreateGame",
    tag = "Games",
    request_body = GamePayload,
    responses(
        (status = 201, description = "Game created", body = GameSummary,
            headers(("Location" = String, description = "Path of the created game"))),
        (status = 400, description = "Invalid payload"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    payload: Result<Json<GamePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let game = game_service::create_game(&state, payload).await?;
    let location = game_location(game.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(game),
    ))
}

/// Replace every field of an existing game except its identifier.
#[utoipa::path(
    put,
    path = "/games/{id}",
    operation_id = "UpdateGame",
    tag = "Games",
    params(("id" = Uuid, Path, description = "Identifier of the game to update")),
    request_body = GamePayload,
    responses(
        (status = 204, description = "Game updated"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "No game with this identifier"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<GamePayload>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    game_service::update_game(&state, id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a game by its identifier.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    operation_id = "DeleteGame",
    tag = "Games",
    params(("id" = Uuid, Path, description = "Identifier of the game to delete")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "No game with this identifier"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    game_service::delete_game(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
