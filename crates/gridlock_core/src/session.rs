//! Mode-aware command handling and AI-move scheduling.
//!
//! The engine itself is synchronous. The one asynchronous element of the
//! game is the CPU "thinking" delay between the human's move and the
//! heuristic's reply. [`Session`] models that as a ticket handed to the
//! caller: schedule [`Session::fire_ai`] after the delay, and the ticket is
//! validated against the engine's epoch at fire time. A reset or mode
//! change during the delay invalidates the ticket, so a stale deferred move
//! can never land on the new board.

use crate::engine::{Engine, MoveOutcome};
use crate::events::EventSink;
use crate::heuristic;
use crate::position::Position;
use crate::types::{GameStatus, Mode, Player};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default CPU thinking delay before a deferred AI move fires.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(600);

/// Capability to fire one deferred AI move.
///
/// Carries the engine epoch at schedule time; stale tickets are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTicket {
    epoch: u64,
}

/// Game session: engine plus the heuristic's RNG and turn discipline.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    rng: SmallRng,
}

impl Session {
    /// Creates a session in the given mode.
    pub fn new(mode: Mode, events: EventSink) -> Self {
        Self::seeded(mode, events, rand::random())
    }

    /// Creates a session with a deterministic RNG seed.
    pub fn seeded(mode: Mode, events: EventSink, seed: u64) -> Self {
        let mut engine = Engine::with_events(events);
        engine.set_mode(mode);
        Self {
            engine,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns the engine for read access.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Handles a human move request.
    ///
    /// In AI mode, O's turn belongs to the scheduled heuristic move, so a
    /// human request while O is to move is dropped - this is the guard
    /// against clicking during the thinking delay. If the applied move
    /// leaves an in-progress game with O to move in AI mode, a ticket is
    /// returned for the caller to schedule.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, pos: Position) -> Option<AiTicket> {
        if self.ai_to_move() {
            debug!("human move dropped: CPU is thinking");
            return None;
        }
        if !self.engine.apply_move(pos).is_applied() {
            return None;
        }
        self.ticket()
    }

    /// Applies the deferred AI move if its ticket is still valid.
    ///
    /// A ticket is stale once the epoch moved (reset or mode change since
    /// scheduling), the mode left PlayerVsAi, the game ended, or the turn
    /// is no longer O's. Stale tickets are discarded without touching the
    /// board. Returns whether a move was applied.
    #[instrument(skip(self))]
    pub fn fire_ai(&mut self, ticket: AiTicket) -> bool {
        if ticket.epoch != self.engine.epoch() {
            debug!("stale AI ticket discarded");
            return false;
        }
        if !self.ai_to_move() {
            debug!("AI ticket no longer applicable");
            return false;
        }
        let Some(pos) = heuristic::choose(self.engine.board(), &mut self.rng) else {
            return false;
        };
        self.engine.apply_move(pos).is_applied()
    }

    /// Handles a reset request. Pending AI tickets become stale.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) {
        self.engine.reset();
    }

    /// Handles a mode change request. Clears the score and resets;
    /// pending AI tickets become stale.
    #[instrument(skip(self))]
    pub fn request_mode_change(&mut self, mode: Mode) {
        self.engine.set_mode(mode);
    }

    fn ai_to_move(&self) -> bool {
        self.engine.mode() == Mode::PlayerVsAi
            && self.engine.status() == GameStatus::InProgress
            && self.engine.current_player() == Player::O
    }

    fn ticket(&self) -> Option<AiTicket> {
        self.ai_to_move().then(|| AiTicket {
            epoch: self.engine.epoch(),
        })
    }
}
