//! Gridlock core - tic-tac-toe game engine with a heuristic opponent.
//!
//! This crate owns the whole game state machine: board, turn alternation,
//! win/draw detection, per-mode score tracking, and the opponent heuristic
//! used in player-vs-AI mode. Presentation concerns (rendering, sound,
//! celebration effects) live behind the [`GameEvent`] boundary - the engine
//! emits events and never depends on who consumes them.
//!
//! # Example
//!
//! ```
//! use gridlock_core::{Engine, GameStatus, Position};
//!
//! let mut engine = Engine::new();
//! engine.apply_move(Position::Center);
//! engine.apply_move(Position::TopLeft);
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod events;
mod position;
mod session;
mod types;

/// Win and draw detection over the fixed winning lines.
pub mod rules;

/// Move selection for the AI opponent.
pub mod heuristic;

// Crate-level exports - engine
pub use engine::{Engine, MoveOutcome, Rejection};

// Crate-level exports - boundary events
pub use events::{EventSink, GameEvent, channel};

// Crate-level exports - session and AI scheduling
pub use session::{AiTicket, DEFAULT_THINK_DELAY, Session};

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, GameStatus, Mode, Outcome, Player, ScoreBoard, Square};
