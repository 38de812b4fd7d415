/// OpenAPI documentation generation.
pub mod documentation;
/// Catalog operations exposed over HTTP.
pub mod game_service;
/// Health check service.
pub mod health_service;
