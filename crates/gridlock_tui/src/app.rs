//! Application state and the main event loop.

use crate::audio::{Chime, Cue};
use crate::cli::Cli;
use crate::confetti::Confetti;
use crate::{input, ui};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use gridlock_core::{
    AiTicket, GameEvent, Mode, Outcome, Position, Session, channel,
};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main application state: the session plus everything the consumers of
/// the engine's events need to render, beep, and celebrate.
pub struct App {
    session: Session,
    chime: Chime,
    confetti: Confetti,
    cursor: Position,
    status_line: String,
    banner: Option<String>,
    highlight: Option<[Position; 3]>,
    viewport: (u16, u16),
    should_quit: bool,
}

impl App {
    /// Creates the application around an existing session.
    pub fn new(session: Session, chime: Chime) -> Self {
        Self {
            session,
            chime,
            confetti: Confetti::new(),
            cursor: Position::Center,
            status_line: "Player X's turn".to_string(),
            banner: None,
            highlight: None,
            viewport: (80, 24),
            should_quit: false,
        }
    }

    /// Read access to the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status line.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Game-over banner text, if showing.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Winning line to highlight, if any.
    pub fn highlight(&self) -> Option<[Position; 3]> {
        self.highlight
    }

    /// The celebration particles.
    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    /// Whether sound cues are audible.
    pub fn sound_on(&self) -> bool {
        self.chime.enabled()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the terminal size for layout-dependent effects.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    /// Advances time-based visuals one frame.
    pub fn tick(&mut self) {
        if self.confetti.is_active() {
            self.confetti.step(self.viewport.1);
        }
    }

    /// Fires a deferred AI move whose thinking delay elapsed.
    pub fn fire_ai(&mut self, ticket: AiTicket) -> bool {
        self.session.fire_ai(ticket)
    }

    /// Reacts to an engine notification.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "handling game event");

        match event {
            GameEvent::MoveMade { position, player } => {
                self.chime.play(Cue::Click);
                self.status_line = format!("{player} played {}", position.label());
            }
            GameEvent::TurnChanged { next } => {
                let cpu_turn = next == gridlock_core::Player::O
                    && self.session.engine().mode() == Mode::PlayerVsAi;
                self.status_line = if cpu_turn {
                    "CPU thinking...".to_string()
                } else {
                    format!("Player {next}'s turn")
                };
            }
            GameEvent::GameEnded { outcome, line } => {
                self.highlight = line;
                match outcome {
                    Outcome::Win(player) => {
                        self.status_line = format!("Player {player} wins!");
                        self.banner = Some(format!("{player} WINS!"));
                        self.chime.play(Cue::Win);
                        self.confetti.burst(self.viewport.0, self.viewport.1);
                    }
                    Outcome::Draw => {
                        self.status_line = "Game drawn".to_string();
                        self.banner = Some("DRAW!".to_string());
                        self.chime.play(Cue::Draw);
                    }
                }
            }
            GameEvent::Reset => {
                self.highlight = None;
                self.banner = None;
                self.confetti.clear();
                self.status_line = "Player X's turn".to_string();
            }
        }
    }

    /// Handles a key press. Returns a ticket when an AI move needs to be
    /// scheduled after the thinking delay.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<AiTicket> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('r') => {
                self.session.request_reset();
                None
            }
            KeyCode::Char('m') => {
                let next = match self.session.engine().mode() {
                    Mode::PlayerVsPlayer => Mode::PlayerVsAi,
                    Mode::PlayerVsAi => Mode::PlayerVsPlayer,
                };
                info!(mode = next.name(), "mode change");
                self.session.request_mode_change(next);
                None
            }
            KeyCode::Char('s') => {
                self.chime.toggle();
                None
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.session.request_move(self.cursor),
            KeyCode::Char(c) => {
                let pos = input::digit_position(c)?;
                self.cursor = pos;
                self.session.request_move(pos)
            }
            _ => None,
        }
    }
}

/// Runs the TUI event loop until the user quits.
pub async fn run(terminal: &mut DefaultTerminal, cli: Cli) -> Result<()> {
    let (sink, mut events) = channel();
    let session = Session::new(cli.mode.into(), sink);
    let mut app = App::new(session, Chime::new(!cli.muted));
    let think_delay = Duration::from_millis(cli.delay_ms);

    // Deferred AI moves come back through this channel after their delay.
    let (ticket_tx, mut ticket_rx) = mpsc::unbounded_channel::<AiTicket>();

    info!(mode = app.session().engine().mode().name(), "starting game loop");

    while !app.should_quit() {
        let size = terminal.size()?;
        app.set_viewport(size.width, size.height);

        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }
        while let Ok(ticket) = ticket_rx.try_recv() {
            app.fire_ai(ticket);
        }
        app.tick();

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(33))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(ticket) = app.handle_key(key.code)
        {
            let tx = ticket_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(think_delay).await;
                // Receiver gone means we're shutting down.
                let _ = tx.send(ticket);
            });
        }
    }

    info!(
        score = %serde_json::to_string(app.session().engine().score())?,
        "session over"
    );
    Ok(())
}
