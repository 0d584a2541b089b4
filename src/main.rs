mod app;
mod badges;
mod config;
mod content;
mod error;
mod events;
mod help;
mod lessons;
mod models;
mod password;
mod progress;
mod reports;
mod storage;
mod tui;
mod ui;

use crate::{app::App, error::AppError, events::AppAction};

fn main() -> Result<(), AppError> {
    let mut app = App::default();
    let mut tui = tui::init()?;

    // Main loop
    while !app.should_quit {
        app.tick();
        tui.draw(|frame| ui::render(&mut app, frame))?;

        if let Some(action) = events::handle_events(&mut app)? {
            match action {
                AppAction::OpenLesson(index) => app.open_lesson(index),
                AppAction::CompleteLesson => app.complete_lesson(),
            }
        }
    }

    tui::restore()?;
    Ok(())
}
