//! HTTP handlers
//!
//! Service calls may touch the snapshot file, so they run on the blocking
//! pool rather than on the async workers.

use super::AppState;
use super::error::ApiError;
use super::view::GameView;
use crate::core::{GameId, Guess, GuessError};
use crate::service::{GameService, ServiceError};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Greeting returned from the root path.
#[derive(Debug, Serialize)]
pub struct Welcome {
    pub success: &'static str,
}

/// JSON body of a guess request.
#[derive(Debug, Default, Deserialize)]
pub struct GuessParams {
    #[serde(default)]
    pub letter: Option<String>,
}

/// GET /
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        success: "welcome to hangman",
    })
}

/// GET /games
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameView>>, ApiError> {
    let games = run_blocking(&state, GameService::list_games).await?;
    Ok(Json(games.iter().map(GameView::from).collect()))
}

/// POST /games/new
pub async fn create_game(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let game = run_blocking(&state, GameService::new_game).await?;
    Ok((StatusCode::CREATED, Json(GameView::from(&game))))
}

/// GET /games/{id}
pub async fn show_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    let id = parse_id(&raw_id)?;
    let game = run_blocking(&state, move |service| service.get_game(id)).await?;
    Ok(Json(GameView::from(&game)))
}

/// POST /games/{id}/guess
///
/// `letter` comes from the query string, else from a form-encoded or JSON
/// body. A body of any other shape counts as no letter at all, and more than
/// one `letter` in the same source is more than one letter at a time.
pub async fn guess(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<GameView>, ApiError> {
    let letter = request_letter(query.as_deref(), &headers, &body).map_err(ServiceError::from)?;

    let Ok(id) = parse_id(&raw_id) else {
        // Malformed input is still reported ahead of the unknown game
        Guess::parse(letter.as_deref()).map_err(ServiceError::from)?;
        return Err(ApiError::InvalidId(raw_id));
    };

    let report = run_blocking(&state, move |service| service.guess(id, letter.as_deref())).await?;
    Ok(Json(GameView::from(&report.game)))
}

/// Run a service call on the blocking pool
async fn run_blocking<T, F>(state: &AppState, call: F) -> Result<T, ApiError>
where
    F: FnOnce(&GameService) -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    let service = Arc::clone(&state.service);
    Ok(tokio::task::spawn_blocking(move || call(&service)).await??)
}

fn parse_id(raw: &str) -> Result<GameId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidId(raw.to_owned()))
}

fn request_letter(
    query: Option<&str>,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Option<String>, GuessError> {
    if let Some(letter) = letter_from_form(query.unwrap_or_default().as_bytes())? {
        return Ok(Some(letter));
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if content_type.starts_with("application/x-www-form-urlencoded") {
        letter_from_form(body)
    } else {
        Ok(letter_from_json(body))
    }
}

/// The `letter` pair of a urlencoded query or body
fn letter_from_form(input: &[u8]) -> Result<Option<String>, GuessError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(input).unwrap_or_default();
    let mut letters = pairs
        .into_iter()
        .filter(|(key, _)| key == "letter")
        .map(|(_, value)| value);

    let letter = letters.next();
    if letters.next().is_some() {
        return Err(GuessError::TooManyCharacters);
    }
    Ok(letter)
}

fn letter_from_json(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    serde_json::from_slice::<GuessParams>(body)
        .ok()
        .and_then(|params| params.letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers
    }

    #[test]
    fn letter_from_json_body() {
        assert_eq!(letter_from_json(br#"{"letter":"a"}"#), Some("a".to_string()));
        assert_eq!(letter_from_json(br#"{"letter":""}"#), Some(String::new()));
    }

    #[test]
    fn unusable_bodies_have_no_letter() {
        assert_eq!(letter_from_json(b""), None);
        assert_eq!(letter_from_json(b"{}"), None);
        assert_eq!(letter_from_json(br#"{"letter":5}"#), None);
        assert_eq!(letter_from_json(b"letter=a"), None);
    }

    #[test]
    fn letter_from_form_pairs() {
        assert_eq!(letter_from_form(b"letter=a"), Ok(Some("a".to_string())));
        assert_eq!(letter_from_form(b"x=1&letter=%C3%A9"), Ok(Some("é".to_string())));
        assert_eq!(letter_from_form(b""), Ok(None));
        assert_eq!(letter_from_form(b"other=a"), Ok(None));
        assert_eq!(
            letter_from_form(b"letter=a&letter=b"),
            Err(GuessError::TooManyCharacters)
        );
    }

    #[test]
    fn query_wins_over_body() {
        let letter = request_letter(Some("letter=q"), &form_headers(), b"letter=z");
        assert_eq!(letter, Ok(Some("q".to_string())));
    }

    #[test]
    fn body_is_read_by_content_type() {
        assert_eq!(
            request_letter(None, &form_headers(), b"letter=z"),
            Ok(Some("z".to_string()))
        );
        assert_eq!(
            request_letter(None, &HeaderMap::new(), br#"{"letter":"z"}"#),
            Ok(Some("z".to_string()))
        );
        assert_eq!(request_letter(None, &HeaderMap::new(), b"letter=z"), Ok(None));
    }

    #[test]
    fn parse_id_rejects_non_numbers() {
        assert_eq!(parse_id("12").unwrap(), GameId::new(12));
        assert!(matches!(parse_id("new"), Err(ApiError::InvalidId(raw)) if raw == "new"));
        assert!(parse_id("-1").is_err());
    }
}
