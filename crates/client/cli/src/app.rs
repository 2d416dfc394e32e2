//! Synchronous run loop driving one game.

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use minefield_core::{GameState, MoveOutcome};

use crate::config::CliConfig;
use crate::input::{self, Command};
use crate::terminal::{self, Tui};
use crate::ui;

/// Owns the single `GameState` instance and the terminal loop.
pub struct App {
    game: GameState,
    seed: u64,
}

impl App {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let game = GameState::new(&config.game).context("invalid game configuration")?;
        Ok(Self {
            game,
            seed: config.game.seed,
        })
    }

    pub fn run(mut self) -> Result<()> {
        let (mut tui, _guard) = terminal::init()?;
        // Guard restores the terminal even when the loop errors out
        self.event_loop(&mut tui)
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            tui.draw(|frame| ui::render(frame, &self.game, self.seed))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            match input::map_key(key) {
                Some(Command::Quit) => {
                    tracing::info!("Player quit after {} moves", self.game.moves());
                    return Ok(());
                }
                Some(Command::Move(direction)) => {
                    let outcome = self.game.attempt_move(direction);
                    self.log_outcome(direction, outcome);
                    if outcome.is_terminal() {
                        return self.finish(tui);
                    }
                }
                // Unrecognized key: no move consumed
                None => {}
            }
        }
    }

    fn log_outcome(&self, direction: minefield_core::Direction, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Continue => {
                tracing::debug!("Moved {:?} to {}", direction, self.game.player());
            }
            MoveOutcome::OutOfBounds => {
                tracing::debug!("Rejected {:?}: out of bounds", direction);
            }
            MoveOutcome::HitHazard { lives_remaining } => {
                tracing::info!("Hit a mine at {}; {} lives left", self.game.player(), lives_remaining);
            }
            MoveOutcome::Won => {
                tracing::info!("Won in {} moves", self.game.moves());
            }
            MoveOutcome::Lost => {
                tracing::info!("Lost after {} moves", self.game.moves());
            }
        }
    }

    /// Show the revealed board until a key is pressed, then exit.
    fn finish(&mut self, tui: &mut Tui) -> Result<()> {
        match serde_json::to_string(&self.game) {
            Ok(json) => tracing::info!("Final state: {json}"),
            Err(error) => tracing::warn!("Could not serialize final state: {error}"),
        }

        tui.draw(|frame| ui::render(frame, &self.game, self.seed))?;
        loop {
            if let Event::Key(key) = event::read()? {
                use crossterm::event::KeyEventKind;
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    }
}
