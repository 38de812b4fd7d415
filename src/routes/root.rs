use axum::{Json, Router, routing::get};

use crate::{dto::banner::WelcomeBanner, state::SharedState};

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = WelcomeBanner))
)]
/// Greet the caller with a per-request identifier and the current UTC time.
pub async fn welcome() -> Json<WelcomeBanner> {
    Json(WelcomeBanner::now())
}

/// Configure the root route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/", get(welcome))
}
