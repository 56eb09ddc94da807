//! Game Session - Round progression, answer evaluation and scoring
//!
//! A session owns the remaining pool of Pokemon, the live round and the
//! statistics block. It is not internally synchronized: callers that share a
//! session across tasks must serialize access (the infrastructure layer keeps
//! each session behind its own mutex).
//!
//! State changes are announced as [`SessionEvent`]s on a broadcast channel;
//! publishing with no subscribers is not an error.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use crate::application::dto::{AnswerOutcome, GameSnapshot, StatisticsDto};
use crate::application::services::{GameError, PokemonPoolLoader, PreconditionViolation};
use crate::domain::entities::{Pokemon, PokemonId};
use crate::domain::events::{GameEvent, SessionEvent};
use crate::domain::value_objects::{CelebrationIntensity, GameStatus, SessionStatistics};

/// Number of options offered per round unless configured otherwise
pub const DEFAULT_ROUND_SIZE: usize = 4;

const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct GameSession {
    loader: PokemonPoolLoader,
    rng: StdRng,
    round_size: usize,
    pool: Vec<Pokemon>,
    round_options: Vec<Pokemon>,
    correct_answer: Option<Pokemon>,
    status: GameStatus,
    statistics: SessionStatistics,
    events: broadcast::Sender<SessionEvent>,
}

impl GameSession {
    /// Create an empty session; call [`GameSession::start`] to load the pool
    pub fn new(loader: PokemonPoolLoader) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            loader,
            rng: StdRng::from_entropy(),
            round_size: DEFAULT_ROUND_SIZE,
            pool: Vec::new(),
            round_options: Vec::new(),
            correct_answer: None,
            status: GameStatus::Playing,
            statistics: SessionStatistics::default(),
            events,
        }
    }

    /// Set the number of options drawn by [`GameSession::next_round`]
    pub fn with_round_size(mut self, round_size: usize) -> Self {
        self.round_size = round_size;
        self
    }

    /// Use a deterministic generator for picking the target of each round
    #[cfg(test)]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn round_options(&self) -> &[Pokemon] {
        &self.round_options
    }

    pub fn correct_answer(&self) -> Option<&Pokemon> {
        self.correct_answer.as_ref()
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Number of Pokemon left to draw from
    pub fn remaining_pool(&self) -> usize {
        self.pool.len()
    }

    /// True while no pool is available to draw from
    pub fn is_loading(&self) -> bool {
        self.pool.is_empty()
    }

    /// Build a serializable view
    ///
    /// `picture_url` embeds the target's id, so the target is not secret from
    /// the client. `revealed_answer` is only filled in once the round has
    /// been resolved, for showing the correct option after a guess.
    pub fn snapshot(&self, sprite_base: &str) -> GameSnapshot {
        GameSnapshot {
            status: self.status(),
            is_loading: self.is_loading(),
            remaining_pool: self.remaining_pool(),
            options: self.round_options().to_vec(),
            picture_url: self
                .correct_answer()
                .map(|pokemon| pokemon.sprite_url(sprite_base)),
            revealed_answer: self
                .correct_answer()
                .filter(|_| self.status.is_resolved())
                .cloned(),
            statistics: StatisticsDto::from(self.statistics()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Load the pool and draw the first round
    ///
    /// On failure the session stays in the loading state with no round.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), GameError> {
        self.reload_pool().await?;
        self.next_round().await;
        info!(round_number = self.statistics.round_number, "Game session started");
        Ok(())
    }

    /// Draw a round of the configured size
    pub async fn next_round(&mut self) {
        self.start_next_round(self.round_size).await;
    }

    /// Draw up to `size` options from the front of the pool and pick the target
    ///
    /// When fewer than `size` Pokemon remain afterwards the pool is reloaded so
    /// the following draw is full again. A failed reload leaves the drawn
    /// round live; the next draw retries it.
    #[instrument(skip(self))]
    pub async fn start_next_round(&mut self, size: usize) {
        self.status = GameStatus::Playing;

        let take = size.min(self.pool.len());
        self.round_options = self.pool.drain(..take).collect();
        self.statistics.advance_round();
        self.correct_answer = self.round_options.choose(&mut self.rng).cloned();

        debug!(
            round_number = self.statistics.round_number,
            options = self.round_options.len(),
            remaining = self.pool.len(),
            "Round drawn"
        );
        self.publish(GameEvent::RoundStarted {
            round_number: self.statistics.round_number,
            options: self.round_options.clone(),
            remaining_pool: self.pool.len(),
        });

        if self.pool.len() < size {
            if let Err(e) = self.reload_pool().await {
                warn!("Failed to refill pokemon pool: {}", e);
            }
        }
    }

    /// Evaluate a guess against the live round
    #[instrument(skip(self))]
    pub fn submit_answer(&mut self, candidate: PokemonId) -> Result<AnswerOutcome, GameError> {
        let correct_answer = self
            .correct_answer
            .clone()
            .ok_or(PreconditionViolation::NoActiveRound)?;
        if self.status.is_resolved() {
            return Err(PreconditionViolation::RoundAlreadyResolved.into());
        }

        let (points_awarded, celebration) = if candidate == correct_answer.id {
            self.status = GameStatus::Won;
            let points = self.statistics.record_correct();
            let intensity = CelebrationIntensity::for_streak(self.statistics.current_streak);
            (points, Some(intensity))
        } else {
            self.status = GameStatus::Lost;
            self.statistics.record_incorrect();
            (0, None)
        };

        debug!(
            status = %self.status,
            score = self.statistics.score,
            streak = self.statistics.current_streak,
            "Answer evaluated"
        );
        self.publish(GameEvent::AnswerResolved {
            status: self.status,
            candidate_id: candidate,
            correct_answer: correct_answer.clone(),
            points_awarded,
            score: self.statistics.score,
            current_streak: self.statistics.current_streak,
        });
        if let Some(intensity) = celebration {
            self.publish(GameEvent::Celebrate { intensity });
        }

        Ok(AnswerOutcome {
            status: self.status,
            points_awarded,
            correct_answer,
            celebration,
        })
    }

    /// Clear the session counters (best streak kept), reload and redraw
    ///
    /// If the reload fails the session is left loading with no round; calling
    /// this again retries.
    #[instrument(skip(self))]
    pub async fn reset_session(&mut self) -> Result<(), GameError> {
        self.statistics.reset_session();
        self.clear_round();
        self.pool.clear();
        self.publish(GameEvent::SessionReset);

        self.reload_pool().await?;
        self.next_round().await;
        info!("Game session reset");
        Ok(())
    }

    /// Clear every counter including the best streak, then reset the session
    pub async fn reset_statistics(&mut self) -> Result<(), GameError> {
        self.statistics.reset_all();
        self.publish(GameEvent::StatisticsReset);
        self.reset_session().await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn reload_pool(&mut self) -> Result<(), GameError> {
        let pool = self.loader.load().await?;
        self.pool = pool;
        self.publish(GameEvent::PoolRefilled {
            pool_size: self.pool.len(),
        });
        Ok(())
    }

    fn clear_round(&mut self) {
        self.status = GameStatus::Playing;
        self.round_options.clear();
        self.correct_answer = None;
    }

    fn publish(&self, event: GameEvent) {
        // Err only means nobody is listening
        let _ = self.events.send(SessionEvent::now(event));
    }
}
