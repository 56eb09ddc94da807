//! Game session API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::dto::{AnswerOutcome, GameSnapshot};
use crate::application::services::GameError;
use crate::domain::entities::PokemonId;
use crate::domain::value_objects::SessionId;
use crate::infrastructure::session::SharedGameSession;
use crate::infrastructure::state::AppState;

type ApiResult<T> = Result<T, (StatusCode, String)>;

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
    pub created_at: i64,
    pub snapshot: GameSnapshot,
}

#[derive(Debug, Default, Deserialize)]
pub struct NextRoundRequest {
    #[serde(default)]
    pub size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub pokemon_id: PokemonId,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub outcome: AnswerOutcome,
    pub snapshot: GameSnapshot,
}

/// Create a session, load its pool and draw the first round.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<SessionCreatedResponse>)> {
    let mut session = state.new_game_session();
    session.start().await.map_err(game_error_response)?;
    let snapshot = session.snapshot(&state.config.sprite_base_url);

    let mut sessions = state.sessions.write().await;
    let session_id = sessions.insert(session);
    let created_at = sessions
        .created_at(session_id)
        .map(|created| created.timestamp())
        .unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id: session_id.to_string(),
            created_at,
            snapshot,
        }),
    ))
}

/// Current state of a session.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<GameSnapshot>> {
    let session = find_session(&state, &id).await?;
    let session = session.lock().await;
    Ok(Json(session.snapshot(&state.config.sprite_base_url)))
}

/// Draw the next round, optionally with a custom number of options.
///
/// The body may be omitted entirely.
pub async fn next_round(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<NextRoundRequest>>,
) -> ApiResult<Json<GameSnapshot>> {
    let body = body.map(|Json(body)| body).unwrap_or_default();
    let session = find_session(&state, &id).await?;
    let mut session = session.lock().await;
    match body.size {
        Some(size) => session.start_next_round(size).await,
        None => session.next_round().await,
    }
    Ok(Json(session.snapshot(&state.config.sprite_base_url)))
}

/// Submit a guess for the live round.
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<SubmitAnswerRequest>,
) -> ApiResult<Json<AnswerResponse>> {
    let session = find_session(&state, &id).await?;
    let mut session = session.lock().await;
    let outcome = session
        .submit_answer(body.pokemon_id)
        .map_err(game_error_response)?;
    tracing::debug!(
        "Session {} answered {}: correct = {}",
        id,
        body.pokemon_id,
        outcome.is_correct()
    );

    Ok(Json(AnswerResponse {
        outcome,
        snapshot: session.snapshot(&state.config.sprite_base_url),
    }))
}

/// Start over, keeping the best streak.
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<GameSnapshot>> {
    let session = find_session(&state, &id).await?;
    let mut session = session.lock().await;
    session.reset_session().await.map_err(game_error_response)?;
    Ok(Json(session.snapshot(&state.config.sprite_base_url)))
}

/// Start over and forget the best streak.
pub async fn reset_statistics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<GameSnapshot>> {
    let session = find_session(&state, &id).await?;
    let mut session = session.lock().await;
    session.reset_statistics().await.map_err(game_error_response)?;
    Ok(Json(session.snapshot(&state.config.sprite_base_url)))
}

/// End a session.
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let session_id = parse_session_id(&id)?;
    state
        .sessions
        .write()
        .await
        .remove(session_id)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn find_session(state: &AppState, id: &str) -> ApiResult<SharedGameSession> {
    let session_id = parse_session_id(id)?;
    state
        .sessions
        .write()
        .await
        .get(session_id)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))
}

fn parse_session_id(id: &str) -> ApiResult<SessionId> {
    id.parse::<SessionId>()
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid session ID format".to_string()))
}

fn game_error_response(error: GameError) -> (StatusCode, String) {
    match &error {
        GameError::Network(_) | GameError::DataFormat(_) => {
            tracing::error!("Pokemon catalog unavailable: {}", error);
            (StatusCode::BAD_GATEWAY, error.to_string())
        }
        GameError::Precondition(_) => {
            tracing::warn!("Rejected game operation: {}", error);
            (StatusCode::CONFLICT, error.to_string())
        }
    }
}
