use crate::app::{App, ViewMode};
use crate::content;
use crate::error::AppError;
use crate::lessons::Lesson;
use rat_text::event::HandleEvent;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

/// Event polling interval in milliseconds
const EVENT_POLL_INTERVAL_MS: u64 = 100;

pub enum AppAction {
    OpenLesson(usize),
    CompleteLesson,
}

pub fn handle_events(app: &mut App) -> Result<Option<AppAction>, AppError> {
    if event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
        let ev = event::read()?;
        if let Event::Key(key) = ev {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            // A badge celebration captures all input until dismissed.
            if !app.pending_awards.is_empty() {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
                ) {
                    app.dismiss_award();
                }
                return Ok(None);
            }

            match app.view_mode {
                ViewMode::ModuleList => return Ok(handle_module_list_events(app, key)),
                ViewMode::Badges => handle_badges_events(app, key),
                ViewMode::Help => handle_help_events(app, key),
                ViewMode::Lesson => return Ok(handle_lesson_events(app, ev, key)),
            }
        }
    }
    Ok(None)
}

fn handle_module_list_events(app: &mut App, key: event::KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if app.selected_module > 0 {
                app.selected_module -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.selected_module < content::MODULES.len() - 1 {
                app.selected_module += 1;
            }
        }
        KeyCode::Enter => return Some(AppAction::OpenLesson(app.selected_module)),
        KeyCode::Char('b') => {
            app.view_mode = ViewMode::Badges;
            app.badges_scroll = 0;
            app.status_message = "Badges. Press 'b' to close.".to_string();
        }
        KeyCode::Char('h') => {
            app.view_mode = ViewMode::Help;
            app.help_scroll = 0;
            app.status_message = "Help. Press 'h' to close.".to_string();
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        _ => {}
    }
    None
}

fn handle_badges_events(app: &mut App, key: event::KeyEvent) {
    match key.code {
        KeyCode::Char('b') | KeyCode::Esc => {
            app.return_to_module_list();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.badges_scroll = app
                .badges_scroll
                .saturating_add(1)
                .min(badges_max_scroll(app));
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.badges_scroll = app.badges_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        _ => {}
    }
}

/// Scroll limit for the badge list: two lines per catalog entry plus the
/// section headings, minus what fits under the header/totals/status chrome.
fn badges_max_scroll(app: &App) -> u16 {
    let total_lines = (content::BADGES.len() * 2 + 3) as u16;
    let visible_height = app.terminal_height.saturating_sub(11);
    total_lines.saturating_sub(visible_height)
}

fn handle_help_events(app: &mut App, key: event::KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Esc => {
            app.return_to_module_list();
            app.help_scroll = 0;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        _ => {}
    }
}

fn handle_lesson_events(app: &mut App, ev: Event, key: event::KeyEvent) -> Option<AppAction> {
    if app.is_editing {
        handle_password_editing(app, ev, key);
        return None;
    }

    match key.code {
        KeyCode::Esc => {
            app.close_lesson();
            return None;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Char('c') => {
            if app.lesson.as_ref().is_some_and(Lesson::can_complete) {
                return Some(AppAction::CompleteLesson);
            }
            return None;
        }
        _ => {}
    }

    // Whether the key moved the lesson to a new position worth recording.
    let mut progressed = false;
    match app.lesson.as_mut() {
        Some(Lesson::Password(lesson)) => {
            if matches!(key.code, KeyCode::Char('i') | KeyCode::Enter) {
                lesson.input.focus.set(true);
                lesson.input.scroll_cursor_to_visible();
                app.is_editing = true;
                app.status_message = "Type a password. Esc: done typing.".to_string();
            }
        }
        Some(Lesson::Auth(lesson)) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => lesson.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => lesson.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => lesson.show_demo = true,
            _ => {}
        },
        Some(Lesson::Transaction(lesson)) => match key.code {
            KeyCode::Char('s') => {
                lesson.answer(false);
            }
            KeyCode::Char('r') => {
                lesson.answer(true);
            }
            KeyCode::Char('n') | KeyCode::Enter => {
                let before = lesson.current;
                lesson.advance();
                progressed = lesson.current != before;
            }
            _ => {}
        },
        Some(Lesson::Device(lesson)) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => lesson.move_up(),
            KeyCode::Down | KeyCode::Char('j') => lesson.move_down(),
            KeyCode::Char(' ') => {
                lesson.toggle_current();
                progressed = true;
            }
            _ => {}
        },
        Some(Lesson::Phishing(lesson)) => match key.code {
            KeyCode::Left => lesson.classify(true),
            KeyCode::Right => lesson.classify(false),
            KeyCode::Char('n') | KeyCode::Enter => {
                let before = lesson.index;
                lesson.acknowledge();
                progressed = lesson.index != before;
            }
            _ => {}
        },
        None => {}
    }

    if progressed {
        app.tick_lesson_progress();
    }
    None
}

fn handle_password_editing(app: &mut App, ev: Event, key: event::KeyEvent) {
    if key.code == KeyCode::Esc {
        app.is_editing = false;
        if let Some(Lesson::Password(lesson)) = app.lesson.as_mut() {
            lesson.input.focus.set(false);
        }
        app.status_message = "i: edit password | c: mark complete | Esc: back".to_string();
        return;
    }

    if let Some(Lesson::Password(lesson)) = app.lesson.as_mut() {
        let _ = lesson.input.handle(&ev, rat_text::event::Regular);
    }
    // Every edit is one activity tick at the checker position.
    app.tick_lesson_progress();
}
