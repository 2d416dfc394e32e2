//! ratatui view: board grid, status line, and outcome banner.

use minefield_core::{GamePhase, GameState, Position};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PLAYER_GLYPH: &str = "P ";
const HAZARD_GLYPH: &str = "M ";
const EMPTY_GLYPH: &str = ". ";

/// Render one frame. Hazards stay hidden while the game is running and
/// are revealed once it ends.
pub fn render(frame: &mut Frame, game: &GameState, seed: u64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(game.size() as u16 + 2), // Board (+ borders)
            Constraint::Length(3),                      // Status
            Constraint::Min(1),                         // Help / banner
        ])
        .split(frame.area());

    render_board(frame, chunks[0], game);
    render_status(frame, chunks[1], game, seed);
    render_footer(frame, chunks[2], game);
}

fn render_board(frame: &mut Frame, area: Rect, game: &GameState) {
    let snapshot = game.board();
    let player = game.player();
    let reveal = game.is_over();

    let mut lines = Vec::with_capacity(snapshot.size() as usize);
    for (row, cells) in snapshot.rows().enumerate() {
        let spans: Vec<Span> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let position = Position::new(row as i32, col as i32);
                if position == player {
                    Span::styled(
                        PLAYER_GLYPH,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if reveal && cell.is_hazard() {
                    Span::styled(HAZARD_GLYPH, Style::default().fg(Color::Red))
                } else {
                    Span::styled(EMPTY_GLYPH, Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Minefield"));
    frame.render_widget(board, area);
}

fn render_status(frame: &mut Frame, area: Rect, game: &GameState, seed: u64) {
    let status = Line::from(vec![
        Span::raw("Lives: "),
        Span::styled(
            game.lives().to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Moves: "),
        Span::styled(game.moves().to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(format!("  Seed: {seed}")),
    ]);

    let panel = Paragraph::new(status).block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect, game: &GameState) {
    let line = match game.phase() {
        GamePhase::Playing => Line::from("Move: WASD/arrows | Quit: q"),
        GamePhase::Won => Line::styled(
            format!(
                "You reached the goal in {} moves! Press any key to exit.",
                game.moves()
            ),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        GamePhase::Lost => Line::styled(
            "You lost all your lives. Press any key to exit.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}
