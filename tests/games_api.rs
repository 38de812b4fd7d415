use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use game_store_api::{
    config::AppConfig,
    routes,
    state::{AppState, SharedState, catalog::GameCatalog},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

fn test_app() -> (Router, SharedState) {
    let catalog = GameCatalog::seeded(AppConfig::default().seed_games().to_vec());
    let state = AppState::new(catalog);
    (routes::router(state.clone()), state)
}

fn doom() -> Value {
    json!({
        "name": "Doom",
        "genre": "Shooter",
        "price": 9.99,
        "releaseDate": "1993-12-10"
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(res: Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_is_empty(res: Response) -> bool {
    res.into_body().collect().await.unwrap().to_bytes().is_empty()
}

#[tokio::test]
async fn lists_seed_games() {
    let (app, _) = test_app();

    let res = send(&app, Method::GET, "/games", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let games = json_body(res).await;
    let games = games.as_array().unwrap();
    assert_eq!(games.len(), 3);
    assert_eq!(games[0]["name"], "Street Fighter II");
    assert_eq!(games[0]["price"], json!(19.99));
    assert_eq!(games[0]["releaseDate"], "1992-07-15");
    assert!(games[0]["id"].as_str().unwrap().parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn listing_twice_returns_same_sequence() {
    let (app, _) = test_app();

    let first = json_body(send(&app, Method::GET, "/games", None).await).await;
    let second = json_body(send(&app, Method::GET, "/games", None).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn create_then_get_returns_same_record() {
    let (app, state) = test_app();

    let res = send(&app, Method::POST, "/games", Some(doom())).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap();

    let created = json_body(res).await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(location, format!("/games/{id}"));
    assert_eq!(created["name"], "Doom");
    assert_eq!(created["genre"], "Shooter");
    assert_eq!(created["price"], json!(9.99));
    assert_eq!(created["releaseDate"], "1993-12-10");

    let res = send(&app, Method::GET, &location, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, created);
    assert_eq!(state.catalog().read().await.len(), 4);
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let (app, _) = test_app();
    let supplied = Uuid::new_v4();

    let mut payload = doom();
    payload["id"] = json!(supplied);
    let res = send(&app, Method::POST, "/games", Some(payload)).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let created = json_body(res).await;
    assert_ne!(created["id"], json!(supplied));

    let res = send(&app, Method::GET, &format!("/games/{supplied}"), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_short_name_is_rejected() {
    let (app, state) = test_app();

    let mut payload = doom();
    payload["name"] = json!("Aa");
    let res = send(&app, Method::POST, "/games", Some(payload)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = json_body(res).await;
    let messages = body["errors"]["name"].as_array().unwrap();
    assert!(messages[0].as_str().unwrap().contains("name"));
    assert_eq!(state.catalog().read().await.len(), 3);
}

#[tokio::test]
async fn create_rejects_each_out_of_range_field() {
    let cases = [
        ("price", json!(0)),
        ("price", json!(150)),
        ("genre", json!("g".repeat(25))),
    ];

    for (field, value) in cases {
        let (app, state) = test_app();
        let mut payload = doom();
        payload[field] = value;

        let res = send(&app, Method::POST, "/games", Some(payload)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "field {field}");
        let body = json_body(res).await;
        assert!(body["errors"].get(field).is_some(), "field {field}");
        assert_eq!(state.catalog().read().await.len(), 3);
    }
}

#[tokio::test]
async fn create_accepts_boundary_prices() {
    let (app, _) = test_app();

    for price in [json!(1), json!(100)] {
        let mut payload = doom();
        payload["price"] = price;
        let res = send(&app, Method::POST, "/games", Some(payload)).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }
}

#[tokio::test]
async fn create_with_blank_text_is_rejected() {
    let (app, state) = test_app();

    let mut payload = doom();
    payload["name"] = json!("   ");
    payload["genre"] = json!("   ");
    let res = send(&app, Method::POST, "/games", Some(payload)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = json_body(res).await;
    assert_eq!(body["errors"]["name"], json!(["name is required"]));
    assert_eq!(body["errors"]["genre"], json!(["genre is required"]));
    assert_eq!(state.catalog().read().await.len(), 3);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let (app, state) = test_app();

    let mut payload = doom();
    payload["name"] = json!("x".repeat(3 * 1024 * 1024));
    let res = send(&app, Method::POST, "/games", Some(payload)).await;
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(state.catalog().read().await.len(), 3);
}

#[tokio::test]
async fn create_with_missing_field_is_bad_request() {
    let (app, _) = test_app();

    let res = send(
        &app,
        Method::POST,
        "/games",
        Some(json!({ "name": "Doom", "genre": "Shooter" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let (app, _) = test_app();
    let games = json_body(send(&app, Method::GET, "/games", None).await).await;
    let id = games[0]["id"].as_str().unwrap().to_owned();

    let mut payload = doom();
    payload["id"] = json!(Uuid::new_v4());
    let res = send(&app, Method::PUT, &format!("/games/{id}"), Some(payload)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(body_is_empty(res).await);

    let updated = json_body(send(&app, Method::GET, &format!("/games/{id}"), None).await).await;
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["name"], "Doom");
    assert_eq!(updated["genre"], "Shooter");
    assert_eq!(updated["price"], json!(9.99));
    assert_eq!(updated["releaseDate"], "1993-12-10");
}

#[tokio::test]
async fn update_with_invalid_payload_is_rejected() {
    let cases = [
        ("name", json!("Aa")),
        ("name", json!("   ")),
        ("genre", json!("g".repeat(25))),
        ("price", json!(0)),
        ("price", json!(150)),
    ];

    for (field, value) in cases {
        let (app, _) = test_app();
        let before = json_body(send(&app, Method::GET, "/games", None).await).await;
        let id = before[1]["id"].as_str().unwrap().to_owned();

        let mut payload = doom();
        payload[field] = value;
        let res = send(&app, Method::PUT, &format!("/games/{id}"), Some(payload.clone())).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "field {field}");
        assert!(json_body(res).await["errors"].get(field).is_some(), "field {field}");

        // Validation runs before the lookup, so an unknown id is still a 400.
        let unknown = Uuid::new_v4();
        let res = send(&app, Method::PUT, &format!("/games/{unknown}"), Some(payload)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "field {field}");

        let after = json_body(send(&app, Method::GET, "/games", None).await).await;
        assert_eq!(before, after, "field {field}");
    }
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let (app, _) = test_app();
    let unknown = Uuid::new_v4();

    let res = send(&app, Method::PUT, &format!("/games/{unknown}"), Some(doom())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_is_empty(res).await);
}

#[tokio::test]
async fn delete_removes_game_once() {
    let (app, state) = test_app();
    let games = json_body(send(&app, Method::GET, "/games", None).await).await;
    let uri = format!("/games/{}", games[2]["id"].as_str().unwrap());

    let res = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(body_is_empty(res).await);

    let res = send(&app, Method::GET, &uri, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.catalog().read().await.len(), 2);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let (app, state) = test_app();
    let unknown = Uuid::new_v4();

    let res = send(&app, Method::DELETE, &format!("/games/{unknown}"), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.catalog().read().await.len(), 3);
}

#[tokio::test]
async fn malformed_id_never_reaches_the_catalog() {
    let (app, state) = test_app();

    for method in [Method::GET, Method::DELETE] {
        let res = send(&app, method, "/games/not-a-uuid", None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
    let res = send(&app, Method::PUT, "/games/42", Some(doom())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    assert_eq!(state.catalog().read().await.len(), 3);
}

#[tokio::test]
async fn root_returns_banner() {
    let (app, _) = test_app();

    let res = send(&app, Method::GET, "/", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let banner = json_body(res).await;
    assert_eq!(banner["message"], "Welcome to the Games API");
    assert!(banner["requestId"].as_str().unwrap().parse::<Uuid>().is_ok());
    assert!(banner["dateTime"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn healthcheck_reports_catalog_size() {
    let (app, _) = test_app();

    let res = send(&app, Method::GET, "/healthcheck", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["games"], 3);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = test_app();

    let res = send(&app, Method::GET, "/api-doc/openapi.json", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let doc = json_body(res).await;
    assert!(doc["paths"].get("/games/{id}").is_some());
}
