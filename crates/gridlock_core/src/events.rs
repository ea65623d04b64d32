//! Boundary events emitted by the engine.
//!
//! Presentation, audio, and celebration effects are all driven by these
//! notifications. The engine always emits; whether a consumer renders,
//! beeps, or ignores an event is entirely its own concern (muting included).

use crate::position::Position;
use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Notification sent from the engine to its collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cell was filled.
    MoveMade {
        /// Where the mark was placed.
        position: Position,
        /// Who placed it.
        player: Player,
    },
    /// The turn passed to the other player.
    TurnChanged {
        /// Player now to move.
        next: Player,
    },
    /// The game reached a terminal state.
    GameEnded {
        /// Win or draw.
        outcome: Outcome,
        /// The completed line, for highlighting. `None` on draws.
        line: Option<[Position; 3]>,
    },
    /// The board was cleared for a new game.
    Reset,
}

/// Fire-and-forget sender for [`GameEvent`]s.
///
/// A sink with no consumer (or whose consumer has gone away) swallows
/// events silently - the engine never fails because nobody is listening.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl EventSink {
    /// Creates a sink delivering to the given channel.
    pub fn new(tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Creates a sink that drops every event (useful in tests and headless use).
    pub fn disconnected() -> Self {
        Self { tx: None }
    }

    pub(crate) fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}

/// Creates a connected sink/receiver pair.
pub fn channel() -> (EventSink, mpsc::UnboundedReceiver<GameEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSink::new(tx), rx)
}
