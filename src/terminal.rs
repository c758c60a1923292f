//! Raw-mode terminal setup for the quiz screens.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, so early returns leave the shell usable.
pub struct TerminalGuard {
    terminal: QuizTerminal,
}

impl TerminalGuard {
    pub fn terminal(&mut self) -> &mut QuizTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

pub fn init() -> io::Result<TerminalGuard> {
    setup_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    debug!("terminal switched to alternate screen");
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok(TerminalGuard { terminal })
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    debug!("terminal restored");
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
