use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
    },
};
use ratatui::prelude::*;
use std::io::{self, Stdout, stdout};

/// The terminal type used throughout the application.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Smallest terminal the lesson layouts stay readable in.
const MIN_WIDTH: u16 = 80;
const MIN_HEIGHT: u16 = 24;

pub fn init() -> io::Result<Tui> {
    let (width, height) = size()?;
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(io::Error::other(format!(
            "Terminal too small: need at least {}x{}, got {}x{}.",
            MIN_WIDTH, MIN_HEIGHT, width, height
        )));
    }

    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
