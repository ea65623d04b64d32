//! Stateless rendering of the application state.

use crate::app::App;
use gridlock_core::{Board, GameStatus, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Renders one frame: title, score row, board, status, banner, confetti.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Score row
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let engine = app.session().engine();

    let sound = if app.sound_on() { "sound on" } else { "muted" };
    let title = Paragraph::new(format!("Gridlock - {} ({sound})", engine.mode().name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_score(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    if let Some(text) = app.banner() {
        draw_banner(frame, area, text);
    }

    draw_confetti(frame, area, app);
}

fn draw_score(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.session().engine();
    let score = engine.score();
    let in_progress = engine.status() == GameStatus::InProgress;

    let active = |player: Player| {
        if in_progress && engine.current_player() == player {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let line = Line::from(vec![
        Span::styled(format!(" X: {} ", score.x_wins()), active(Player::X)),
        Span::raw("   "),
        Span::styled(
            format!(" Draws: {} ", score.draws()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled(format!(" O: {} ", score.o_wins()), active(Player::O)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (chunk, row) in [rows[0], rows[2], rows[4]]
        .into_iter()
        .zip(Position::ALL.chunks(3))
    {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (chunk, &pos) in [cols[0], cols[2], cols[4]].into_iter().zip(positions) {
        draw_cell(frame, chunk, app, pos);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let board: &Board = app.session().engine().board();

    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = app
        .highlight()
        .is_some_and(|line| line.contains(&pos));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, text: &str) {
    let banner_area = center_rect(area, 24, 5);
    frame.render_widget(Clear, banner_area);

    let banner = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw("r: play again  q: quit"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, banner_area);
}

fn draw_confetti(frame: &mut Frame, area: Rect, app: &App) {
    let buf = frame.buffer_mut();
    for particle in app.confetti().particles() {
        let (x, y) = (particle.x.round(), particle.y.round());
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol("▪").set_fg(particle.color);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
