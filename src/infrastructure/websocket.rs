//! WebSocket stream of game events
//!
//! Browser clients subscribe to a session and receive every `SessionEvent`
//! as a JSON text frame (round draws, resolved answers, celebration
//! requests). The stream is one-way; client frames other than close are
//! ignored.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::domain::events::SessionEvent;
use crate::infrastructure::http::session_routes::find_session;
use crate::infrastructure::state::AppState;

/// WebSocket upgrade handler for a session's event stream
pub async fn session_events_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let session = find_session(&state, &id).await?;
    let events = session.lock().await.subscribe();

    tracing::info!("Event stream opened for session {}", id);
    Ok(ws.on_upgrade(move |socket| stream_events(socket, events, id)))
}

/// Forward session events to the socket until either side goes away
async fn stream_events(
    socket: WebSocket,
    mut events: broadcast::Receiver<SessionEvent>,
    session_id: String,
) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    let json = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(e) => {
                            tracing::error!("Failed to serialize game event: {}", e);
                            continue;
                        }
                    };
                    if ws_sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Event stream for session {} lagged, skipped {} events",
                        session_id,
                        skipped
                    );
                }
                // Session was dropped
                Err(RecvError::Closed) => break,
            },
            incoming = ws_receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(e)) => {
                    tracing::warn!("WebSocket error on session {}: {}", session_id, e);
                    break;
                }
                Some(Ok(_)) => {}
            },
        }
    }

    tracing::info!("Event stream closed for session {}", session_id);
}
