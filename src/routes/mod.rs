use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod game;
pub mod health;
pub mod root;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    root::router()
        .merge(health::router())
        .merge(game::router())
        .merge(docs::router())
        .with_state(state)
}
