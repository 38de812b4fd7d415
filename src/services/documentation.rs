use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the Game Store API.
#[openapi(
    paths(
        crate::routes::root::welcome,
        crate::routes::health::healthcheck,
        crate::routes::game::list_games,
        crate::routes::game::get_game_by_id,
        crate::routes::game::create_game,
        crate::routes::game::update_game,
        crate::routes::game::delete_game,
    ),
    components(
        schemas(
            crate::dto::banner::WelcomeBanner,
            crate::dto::health::HealthResponse,
            crate::dto::game::GamePayload,
            crate::dto::game::GameSummary,
        )
    ),
    tags(
        (name = "Games", description = "Game catalog operations"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
