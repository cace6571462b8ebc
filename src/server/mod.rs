//! HTTP transport
//!
//! Maps the hangman routes onto [`GameService`] operations and serializes
//! games through [`GameView`], which never carries the secret word.

mod error;
mod routes;
mod view;

use crate::service::GameService;
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::{ApiError, ErrorResponse};
pub use routes::{GuessParams, Welcome};
pub use view::GameView;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GameService>,
}

impl AppState {
    pub fn new(service: GameService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Builds the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::welcome))
        .route("/games", get(routes::list_games))
        .route("/games/new", post(routes::create_game))
        .route("/games/{id}", get(routes::show_game))
        .route("/games/{id}/guess", post(routes::guess))
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Not found")),
            )
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!("Hangman ready on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameId;
    use crate::store::{FileStore, GameStore, MemoryStore};
    use crate::wordlists::loader::words_from_slice;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn json_body(res: axum::response::Response) -> Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn test_app(words: &[&str]) -> Router {
        let service = GameService::new(
            Arc::new(MemoryStore::new()),
            words_from_slice(words),
            Some(5),
        );
        router(AppState::new(service))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Body) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if uri.ends_with("/guess") {
            builder = builder.header("content-type", "application/json");
        }
        app.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn create(app: &Router) -> Value {
        let res = send(app, Method::POST, "/games/new", Body::empty()).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        json_body(res).await
    }

    async fn guess(app: &Router, id: &Value, letter: &str) -> axum::response::Response {
        let body = json!({ "letter": letter }).to_string();
        send(app, Method::POST, &format!("/games/{id}/guess"), Body::from(body)).await
    }

    #[tokio::test]
    async fn welcome_message() {
        let app = test_app(&["cat"]);
        let res = send(&app, Method::GET, "/", Body::empty()).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await, json!({ "success": "welcome to hangman" }));
    }

    #[tokio::test]
    async fn create_game_returns_masked_view() {
        let app = test_app(&["cape town"]);
        let body = create(&app).await;

        assert_eq!(body["game_id"], 1);
        assert_eq!(body["display_word"], "____ ____");
        assert_eq!(body["guesses_remaining"], 10);
        assert_eq!(body["state"], "in_progress");
        assert_eq!(body["letters_used"], json!([]));
        assert!(!body.to_string().contains("CAPE"));
    }

    #[tokio::test]
    async fn show_game_and_unknown_ids() {
        let app = test_app(&["cat"]);
        let created = create(&app).await;

        let res = send(&app, Method::GET, "/games/1", Body::empty()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await, created);

        let res = send(&app, Method::GET, "/games/2", Body::empty()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = send(&app, Method::GET, "/games/abc", Body::empty()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cat_game_over_http() {
        let app = test_app(&["cat"]);
        let id = create(&app).await["game_id"].clone();

        let res = guess(&app, &id, "a").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["display_word"], "_A_");
        assert_eq!(body["guesses_remaining"], 10);

        let body = json_body(guess(&app, &id, "z").await).await;
        assert_eq!(body["display_word"], "_A_");
        assert_eq!(body["guesses_remaining"], 9);

        let body = json_body(guess(&app, &id, "C").await).await;
        assert_eq!(body["display_word"], "CA_");

        let body = json_body(guess(&app, &id, "t").await).await;
        assert_eq!(body["display_word"], "CAT");
        assert_eq!(body["state"], "won");
        assert_eq!(body["letters_used"], json!(["A", "C", "T", "Z"]));
    }

    #[tokio::test]
    async fn guess_validation_errors() {
        let app = test_app(&["cat"]);
        let id = create(&app).await["game_id"].clone();

        let cases = [
            ("ab", "Not so fast – only one letter at a time"),
            ("5", "That's not in the alphabet"),
            ("", "Missing a letter"),
        ];
        for (letter, message) in cases {
            let res = guess(&app, &id, letter).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "letter {letter:?}");
            assert_eq!(json_body(res).await, json!({ "error": message }));
        }

        let res = send(&app, Method::POST, "/games/1/guess", Body::empty()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await, json!({ "error": "Missing a letter" }));
    }

    #[tokio::test]
    async fn guess_letter_from_query_string() {
        let app = test_app(&["cat"]);
        create(&app).await;

        let res = send(&app, Method::POST, "/games/1/guess?letter=t", Body::empty()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await["display_word"], "__T");
    }

    #[tokio::test]
    async fn repeated_letter_is_rejected() {
        let app = test_app(&["cat"]);
        let id = create(&app).await["game_id"].clone();

        guess(&app, &id, "q").await;
        let res = guess(&app, &id, "Q").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await, json!({ "error": "Letter already used" }));

        let res = send(&app, Method::GET, "/games/1", Body::empty()).await;
        assert_eq!(json_body(res).await["guesses_remaining"], 9);
    }

    #[tokio::test]
    async fn go_game_is_lost_then_closed() {
        let app = test_app(&["go"]);
        let id = create(&app).await["game_id"].clone();

        let mut last = Value::Null;
        for letter in ["b", "d", "f", "h", "j", "k", "l", "m", "n", "p"] {
            let res = guess(&app, &id, letter).await;
            assert_eq!(res.status(), StatusCode::OK);
            last = json_body(res).await;
        }
        assert_eq!(last["guesses_remaining"], 0);
        assert_eq!(last["state"], "lost");
        assert_eq!(last["display_word"], "__");

        let res = guess(&app, &id, "q").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await, json!({ "error": "Game is already over" }));
    }

    #[tokio::test]
    async fn guess_on_unknown_game() {
        let app = test_app(&["cat"]);

        let res = send(
            &app,
            Method::POST,
            "/games/9/guess",
            Body::from(r#"{"letter":"a"}"#),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = send(
            &app,
            Method::POST,
            "/games/nine/guess",
            Body::from(r#"{"letter":"ab"}"#),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_games_newest_first() {
        let app = test_app(&["london", "beijing"]);
        for _ in 0..3 {
            create(&app).await;
        }

        let res = send(&app, Method::GET, "/games", Body::empty()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        let ids: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["game_id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let text = body.to_string();
        assert!(!text.contains("LONDON"));
        assert!(!text.contains("BEIJING"));
    }

    #[tokio::test]
    async fn create_without_words_is_server_error() {
        let app = test_app(&[]);
        let res = send(&app, Method::POST, "/games/new", Body::empty()).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = test_app(&["cat"]);
        let res = send(&app, Method::GET, "/nope", Body::empty()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn guess_letter_from_form_body() {
        let app = test_app(&["cat"]);
        create(&app).await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/games/1/guess")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("letter=a"))
            .unwrap();
        let res = app.clone().oneshot(request).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await["display_word"], "_A_");
    }

    #[tokio::test]
    async fn repeated_query_letter_is_a_json_error() {
        let app = test_app(&["cat"]);
        create(&app).await;

        let res = send(
            &app,
            Method::POST,
            "/games/1/guess?letter=a&letter=b",
            Body::empty(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(res).await,
            json!({ "error": "Not so fast – only one letter at a time" })
        );

        let res = send(&app, Method::GET, "/games/1", Body::empty()).await;
        assert_eq!(json_body(res).await["letters_used"], json!([]));
    }

    #[tokio::test]
    async fn file_backed_games_round_trip_over_http() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        let store = FileStore::open(&path).unwrap();
        let service = GameService::new(Arc::new(store), words_from_slice(&["cat"]), Some(1));
        let app = router(AppState::new(service));

        let id = create(&app).await["game_id"].clone();
        let res = guess(&app, &id, "t").await;
        assert_eq!(res.status(), StatusCode::OK);

        let reopened = FileStore::open(&path).unwrap();
        let game = reopened.get(GameId::new(1)).unwrap().unwrap();
        assert_eq!(game.mask(), "__T");
    }
}
