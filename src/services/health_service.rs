use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness along with the current catalog size.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let games = state.catalog().read().await.len();
    HealthResponse::ok(games)
}
