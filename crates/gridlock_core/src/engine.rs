//! The game engine: board, turns, status, mode, and score.

use crate::events::{EventSink, GameEvent};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Mode, Outcome, Player, ScoreBoard, Square};
use tracing::{debug, instrument};

/// Why a requested move was not applied.
///
/// Rejections are expected UI races (double-click, click during the CPU
/// thinking delay, click after game end), not errors. Nothing is surfaced
/// to the user; the board simply does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed; carries the status after the move.
    Applied(GameStatus),
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// True if the mark was placed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the full game state and emits [`GameEvent`]s at its boundary.
/// No operation returns an error: invalid input is silently rejected and
/// leaves every field untouched.
#[derive(Debug)]
pub struct Engine {
    board: Board,
    current: Player,
    status: GameStatus,
    mode: Mode,
    score: ScoreBoard,
    events: EventSink,
    epoch: u64,
}

impl Engine {
    /// Creates a new engine with no event consumer, in player-vs-player mode.
    #[instrument]
    pub fn new() -> Self {
        Self::with_events(EventSink::disconnected())
    }

    /// Creates a new engine delivering events to the given sink.
    pub fn with_events(events: EventSink) -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            status: GameStatus::InProgress,
            mode: Mode::default(),
            score: ScoreBoard::new(),
            events,
            epoch: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the score counters.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Generation counter, bumped on every reset and mode change.
    ///
    /// Deferred work scheduled against the engine (the AI thinking delay)
    /// captures the epoch and is discarded if it no longer matches at fire
    /// time.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Precondition: the game is in progress and the square is empty.
    /// Otherwise the call is a no-op and reports the reason; no state
    /// changes and no event fires.
    ///
    /// On success the engine emits `MoveMade`, then resolves the move in
    /// order: win check for the mover, full-board draw check, otherwise
    /// the turn passes and `TurnChanged` fires. The status transitions at
    /// most once per call, only away from `InProgress`.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        if self.status != GameStatus::InProgress {
            debug!("move rejected: game over");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("move rejected: square occupied");
            return MoveOutcome::Rejected(Rejection::SquareOccupied(pos));
        }

        let mover = self.current;
        self.board.set(pos, Square::Occupied(mover));
        self.events.emit(GameEvent::MoveMade {
            position: pos,
            player: mover,
        });

        if let Some(winner) = rules::check_winner(&self.board) {
            let line = rules::winning_line(&self.board, winner);
            self.end_game(Outcome::Win(winner), line);
        } else if rules::is_full(&self.board) {
            self.end_game(Outcome::Draw, None);
        } else {
            self.current = mover.opponent();
            self.events.emit(GameEvent::TurnChanged { next: self.current });
        }

        MoveOutcome::Applied(self.status)
    }

    /// Moves to a terminal status and settles the score.
    ///
    /// Only reachable from `apply_move`, exactly once per game, so the
    /// corresponding counter increments exactly once.
    fn end_game(&mut self, outcome: Outcome, line: Option<[Position; 3]>) {
        self.status = match outcome {
            Outcome::Win(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        };
        self.score.record(outcome);
        debug!(?outcome, board = %self.board.display(), "game ended");
        self.events.emit(GameEvent::GameEnded { outcome, line });
    }

    /// Starts a fresh game: empty board, X to move, status in progress.
    ///
    /// The score is kept; pending deferred moves are invalidated by the
    /// epoch bump.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Player::X;
        self.status = GameStatus::InProgress;
        self.epoch += 1;
        self.events.emit(GameEvent::Reset);
    }

    /// Switches mode, clears the score, and resets the board.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.score.clear();
        self.reset();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
