//! Terminal setup/teardown for the TUI.
use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
///
/// Keep the returned guard alive for as long as the TUI runs; dropping
/// it restores the terminal, including during a panic unwind.
pub fn init() -> Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let tui = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((tui, TerminalGuard))
}

fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}
