use crate::badges::{self, BadgeStore};
use crate::config;
use crate::content;
use crate::lessons::Lesson;
use crate::models::EarnedBadge;
use crate::progress::ProgressStore;
use crate::storage::FileStorage;
use std::collections::VecDeque;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ViewMode {
    ModuleList,
    Lesson,
    Badges,
    Help,
}

/// Application state. The stores are the durable core; everything else is
/// per-session view state.
pub struct App {
    pub progress: ProgressStore,
    pub badges: BadgeStore,
    pub view_mode: ViewMode,
    pub selected_module: usize,
    pub lesson: Option<Lesson>,
    pub is_editing: bool,
    /// Newly earned badges waiting for their celebration overlay.
    pub pending_awards: VecDeque<EarnedBadge>,
    pub status_message: String,
    pub should_quit: bool,
    pub badges_scroll: u16,
    pub help_scroll: u16,
    pub terminal_height: u16,
}

impl Default for App {
    fn default() -> Self {
        let config = config::load().unwrap_or_default();
        let data_dir = config::data_dir(&config)
            .unwrap_or_else(|_| std::env::temp_dir().join("sectrain"));
        let progress = ProgressStore::load(Box::new(FileStorage::new(data_dir.clone())));
        let badges = BadgeStore::load(Box::new(FileStorage::new(data_dir)));
        Self::with_stores(progress, badges)
    }
}

impl App {
    /// Store injection point; tests construct the app over in-memory storage.
    pub fn with_stores(progress: ProgressStore, badges: BadgeStore) -> Self {
        Self {
            progress,
            badges,
            view_mode: ViewMode::ModuleList,
            selected_module: 0,
            lesson: None,
            is_editing: false,
            pending_awards: VecDeque::new(),
            status_message: "j/k: select | Enter: open | b: badges | h: help | q: quit"
                .to_string(),
            should_quit: false,
            badges_scroll: 0,
            help_scroll: 0,
            terminal_height: 30, // Default, updated on first render
        }
    }

    /// Open the module at the given list index. Entering a lesson counts as
    /// an activity tick at its entry position.
    pub fn open_lesson(&mut self, index: usize) {
        let Some(module) = content::MODULES.get(index) else {
            return;
        };
        let Some(lesson) = Lesson::open(module.id) else {
            return;
        };
        self.progress
            .update_module_progress(module.id, &lesson.position());
        self.lesson = Some(lesson);
        self.view_mode = ViewMode::Lesson;
        self.is_editing = false;
        self.status_message = format!("{} | Esc: back | q: quit", module.title);
    }

    /// Record an activity tick at the lesson's current position.
    pub fn tick_lesson_progress(&mut self) {
        if let Some(lesson) = &self.lesson {
            self.progress
                .update_module_progress(lesson.module_id(), &lesson.position());
        }
    }

    /// Finish the active lesson: completion is recorded first, then the
    /// award pass runs against the new aggregates and any new badges are
    /// queued for celebration.
    pub fn complete_lesson(&mut self) {
        let Some(lesson) = &self.lesson else {
            return;
        };
        if !lesson.can_complete() {
            return;
        }
        let module_id = lesson.module_id();
        self.progress.mark_module_complete(module_id);
        let newly_earned = badges::evaluate_awards(&self.progress, &mut self.badges);
        self.pending_awards.extend(newly_earned);
        self.close_lesson();
        let title = content::module(module_id).map(|m| m.title).unwrap_or("Module");
        self.status_message = format!("{} completed.", title);
    }

    pub fn close_lesson(&mut self) {
        self.lesson = None;
        self.is_editing = false;
        self.return_to_module_list();
    }

    pub fn return_to_module_list(&mut self) {
        self.view_mode = ViewMode::ModuleList;
        self.status_message =
            "j/k: select | Enter: open | b: badges | h: help | q: quit".to_string();
    }

    pub fn dismiss_award(&mut self) {
        self.pending_awards.pop_front();
    }

    /// Per-frame upkeep for UI-only timers.
    pub fn tick(&mut self) {
        if let Some(Lesson::Auth(auth)) = &mut self.lesson {
            auth.tick();
        }
    }

    pub fn completed_modules(&self) -> usize {
        self.progress
            .completed_count(content::MODULES.iter().map(|m| m.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::MemoryStorage;

    fn app() -> App {
        App::with_stores(
            ProgressStore::load(Box::new(MemoryStorage::default())),
            BadgeStore::load(Box::new(MemoryStorage::default())),
        )
    }

    #[test]
    fn test_opening_a_lesson_ticks_entry_position() {
        let mut app = app();
        app.open_lesson(2);
        assert_eq!(app.view_mode, ViewMode::Lesson);
        let progress = app.progress.module_progress("transaction-safety").unwrap();
        assert_eq!(progress.last_position, "scenario-0");
        assert_eq!(progress.time_spent, 1);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut app = app();
        app.open_lesson(99);
        assert!(app.lesson.is_none());
        assert_eq!(app.view_mode, ViewMode::ModuleList);
    }

    #[test]
    fn test_complete_lesson_awards_and_queues_overlay() {
        let mut app = app();
        app.open_lesson(0); // password-security, always completable
        app.complete_lesson();

        assert!(app.progress.is_module_completed("password-security"));
        assert!(app.badges.has_badge("securityTrainee"));
        assert!(app.badges.has_badge("passwordMaster"));
        let queued: Vec<_> = app.pending_awards.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(queued, ["securityTrainee", "passwordMaster"]);
        assert_eq!(app.view_mode, ViewMode::ModuleList);
        assert!(app.lesson.is_none());
    }

    #[test]
    fn test_complete_refused_while_quiz_unfinished() {
        let mut app = app();
        app.open_lesson(2); // transaction-safety quiz
        app.complete_lesson();
        assert!(!app.progress.is_module_completed("transaction-safety"));
        assert_eq!(app.view_mode, ViewMode::Lesson);
    }

    #[test]
    fn test_recompleting_a_module_awards_nothing_new() {
        let mut app = app();
        app.open_lesson(0);
        app.complete_lesson();
        app.pending_awards.clear();

        app.open_lesson(0);
        app.complete_lesson();
        assert!(app.pending_awards.is_empty());
    }

    #[test]
    fn test_dismiss_award_pops_in_order() {
        let mut app = app();
        app.open_lesson(0);
        app.complete_lesson();
        assert_eq!(app.pending_awards.len(), 2);
        app.dismiss_award();
        assert_eq!(app.pending_awards.front().unwrap().id, "passwordMaster");
        app.dismiss_award();
        assert!(app.pending_awards.is_empty());
    }

    #[test]
    fn test_completed_modules_aggregate() {
        let mut app = app();
        assert_eq!(app.completed_modules(), 0);
        app.open_lesson(0);
        app.complete_lesson();
        assert_eq!(app.completed_modules(), 1);
    }
}
