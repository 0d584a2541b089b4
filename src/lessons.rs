use crate::content::{self, PHISHING_EXAMPLES, SCENARIOS, SECURITY_CHECKS};
use rand::Rng;
use rat_text::text_area::{TextAreaState, TextWrap};
use std::collections::HashSet;
use std::time::Instant;

/// Seconds a demo authenticator code stays valid.
const DEMO_CODE_PERIOD_SECS: u64 = 30;

/// Interaction state of the active lesson screen. All of this is transient
/// view-adjacent state; only the progress/badge stores persist anything.
pub enum Lesson {
    Password(PasswordLesson),
    Auth(AuthLesson),
    Transaction(TransactionLesson),
    Device(DeviceLesson),
    Phishing(PhishingLesson),
}

impl Lesson {
    pub fn open(module_id: &str) -> Option<Self> {
        match module_id {
            "password-security" => Some(Lesson::Password(PasswordLesson::new())),
            "secure-auth" => Some(Lesson::Auth(AuthLesson::new())),
            "transaction-safety" => Some(Lesson::Transaction(TransactionLesson::new())),
            "device-security" => Some(Lesson::Device(DeviceLesson::new())),
            "phishing-prevention" => Some(Lesson::Phishing(PhishingLesson::new())),
            _ => None,
        }
    }

    pub fn module_id(&self) -> &'static str {
        match self {
            Lesson::Password(_) => "password-security",
            Lesson::Auth(_) => "secure-auth",
            Lesson::Transaction(_) => "transaction-safety",
            Lesson::Device(_) => "device-security",
            Lesson::Phishing(_) => "phishing-prevention",
        }
    }

    /// Furthest-reached sub-step marker recorded as `last_position`.
    pub fn position(&self) -> String {
        match self {
            Lesson::Password(_) => "strength-checker".to_string(),
            Lesson::Auth(_) => "exploring-mfa".to_string(),
            Lesson::Transaction(lesson) => format!("scenario-{}", lesson.current),
            Lesson::Device(lesson) => format!("completed-{}", lesson.checked.len()),
            Lesson::Phishing(lesson) => format!("example-{}", lesson.index),
        }
    }

    /// Whether the "mark as complete" action is currently offered.
    pub fn can_complete(&self) -> bool {
        match self {
            Lesson::Password(_) | Lesson::Auth(_) => true,
            Lesson::Transaction(lesson) => lesson.finished(),
            Lesson::Device(lesson) => lesson.all_checked(),
            Lesson::Phishing(lesson) => lesson.completed,
        }
    }
}

/// Free-text strength checker backed by a rat-text area.
pub struct PasswordLesson {
    pub input: TextAreaState,
}

impl PasswordLesson {
    pub fn new() -> Self {
        let mut input = TextAreaState::default();
        input.set_text_wrap(TextWrap::Word(2));
        Self { input }
    }

    /// The candidate password is the first line of the input area.
    pub fn password(&self) -> String {
        self.input
            .value()
            .to_string()
            .lines()
            .next()
            .unwrap_or("")
            .to_string()
    }
}

/// MFA method browser with a rotating authenticator-demo code. The countdown
/// is UI-only and touches no persisted state.
pub struct AuthLesson {
    pub selected: usize,
    pub show_demo: bool,
    code: String,
    issued: Instant,
}

impl AuthLesson {
    pub fn new() -> Self {
        Self {
            selected: 0,
            show_demo: false,
            code: generate_demo_code(),
            issued: Instant::now(),
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.show_demo = false;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < content::MFA_TYPES.len() - 1 {
            self.selected += 1;
            self.show_demo = false;
        }
    }

    /// Rotate the demo code once its period elapses.
    pub fn tick(&mut self) {
        if self.issued.elapsed().as_secs() >= DEMO_CODE_PERIOD_SECS {
            self.code = generate_demo_code();
            self.issued = Instant::now();
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn seconds_left(&self) -> u64 {
        DEMO_CODE_PERIOD_SECS.saturating_sub(self.issued.elapsed().as_secs())
    }
}

fn generate_demo_code() -> String {
    let mut rng = rand::rng();
    format!("{:06}", rng.random_range(0..1_000_000))
}

/// Safe/Risky classification over the fixed transaction scenarios.
pub struct TransactionLesson {
    pub current: usize,
    pub score: usize,
    pub show_result: bool,
}

impl TransactionLesson {
    pub fn new() -> Self {
        Self {
            current: 0,
            score: 0,
            show_result: false,
        }
    }

    /// Returns whether the answer was correct; ignored while the result of
    /// the previous answer is still showing.
    pub fn answer(&mut self, risky: bool) -> Option<bool> {
        if self.show_result {
            return None;
        }
        let correct = risky == SCENARIOS[self.current].risky;
        if correct {
            self.score += 1;
        }
        self.show_result = true;
        Some(correct)
    }

    /// Move on after the result has been shown. No-op on the last scenario.
    pub fn advance(&mut self) {
        if self.show_result && self.current + 1 < SCENARIOS.len() {
            self.current += 1;
            self.show_result = false;
        }
    }

    pub fn finished(&self) -> bool {
        self.current == SCENARIOS.len() - 1 && self.show_result
    }
}

/// Grouped checklist, flattened to a single cursor over all items.
pub struct DeviceLesson {
    pub cursor: usize,
    pub checked: HashSet<usize>,
}

impl DeviceLesson {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            checked: HashSet::new(),
        }
    }

    pub fn item_count() -> usize {
        SECURITY_CHECKS.iter().map(|s| s.items.len()).sum()
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < Self::item_count() {
            self.cursor += 1;
        }
    }

    pub fn toggle_current(&mut self) {
        if !self.checked.remove(&self.cursor) {
            self.checked.insert(self.cursor);
        }
    }

    pub fn progress_percent(&self) -> u16 {
        let total = Self::item_count();
        if total == 0 {
            return 0;
        }
        (self.checked.len() * 100 / total) as u16
    }

    pub fn all_checked(&self) -> bool {
        self.checked.len() == Self::item_count()
    }
}

/// Suspicious/Legitimate classification over the fixed message examples.
pub struct PhishingLesson {
    pub index: usize,
    pub score: usize,
    /// Whether the last classification was correct, while feedback shows.
    pub feedback: Option<bool>,
    pub completed: bool,
}

impl PhishingLesson {
    pub fn new() -> Self {
        Self {
            index: 0,
            score: 0,
            feedback: None,
            completed: false,
        }
    }

    pub fn classify(&mut self, suspicious: bool) {
        if self.feedback.is_some() || self.completed {
            return;
        }
        let correct = suspicious == PHISHING_EXAMPLES[self.index].suspicious;
        if correct {
            self.score += 1;
        }
        self.feedback = Some(correct);
    }

    /// Dismiss feedback: advance, or finish after the last example.
    pub fn acknowledge(&mut self) {
        if self.feedback.take().is_none() {
            return;
        }
        if self.index + 1 < PHISHING_EXAMPLES.len() {
            self.index += 1;
        } else {
            self.completed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_unknown_module_is_none() {
        assert!(Lesson::open("no-such-module").is_none());
    }

    #[test]
    fn test_every_catalog_module_opens() {
        for module in &content::MODULES {
            let lesson = Lesson::open(module.id).unwrap();
            assert_eq!(lesson.module_id(), module.id);
        }
    }

    #[test]
    fn test_transaction_scoring_and_finish() {
        let mut lesson = TransactionLesson::new();

        assert_eq!(lesson.answer(true), Some(true)); // risky scenario
        assert_eq!(lesson.answer(true), None); // blocked while result shows
        lesson.advance();

        assert_eq!(lesson.answer(true), Some(false)); // safe scenario
        lesson.advance();

        assert!(!lesson.finished());
        assert_eq!(lesson.answer(true), Some(true));
        assert!(lesson.finished());
        assert_eq!(lesson.score, 2);

        // Advancing past the end is a no-op; completion stays offered.
        lesson.advance();
        assert!(lesson.finished());
    }

    #[test]
    fn test_transaction_position_tracks_scenario() {
        let mut lesson = TransactionLesson::new();
        lesson.answer(true);
        lesson.advance();
        let wrapped = Lesson::Transaction(lesson);
        assert_eq!(wrapped.position(), "scenario-1");
    }

    #[test]
    fn test_device_checklist_toggle_and_percent() {
        let mut lesson = DeviceLesson::new();
        assert_eq!(lesson.progress_percent(), 0);

        lesson.toggle_current();
        assert_eq!(lesson.checked.len(), 1);
        lesson.toggle_current();
        assert_eq!(lesson.checked.len(), 0);

        for i in 0..DeviceLesson::item_count() {
            lesson.cursor = i;
            lesson.toggle_current();
        }
        assert_eq!(lesson.progress_percent(), 100);
        assert!(lesson.all_checked());
        assert!(Lesson::Device(lesson).can_complete());
    }

    #[test]
    fn test_device_cursor_stays_in_bounds() {
        let mut lesson = DeviceLesson::new();
        lesson.move_up();
        assert_eq!(lesson.cursor, 0);
        for _ in 0..100 {
            lesson.move_down();
        }
        assert_eq!(lesson.cursor, DeviceLesson::item_count() - 1);
    }

    #[test]
    fn test_phishing_flow_to_completion() {
        let mut lesson = PhishingLesson::new();

        lesson.classify(true); // suspicious email
        assert_eq!(lesson.feedback, Some(true));
        lesson.classify(false); // ignored while feedback shows
        assert_eq!(lesson.score, 1);
        lesson.acknowledge();

        lesson.classify(false); // wrong: the sms is suspicious
        assert_eq!(lesson.feedback, Some(false));
        lesson.acknowledge();

        lesson.classify(false); // legitimate statement
        lesson.acknowledge();

        assert!(lesson.completed);
        assert_eq!(lesson.score, 2);
        assert!(Lesson::Phishing(lesson).can_complete());
    }

    #[test]
    fn test_quizzes_not_completable_up_front() {
        assert!(!Lesson::open("transaction-safety").unwrap().can_complete());
        assert!(!Lesson::open("device-security").unwrap().can_complete());
        assert!(!Lesson::open("phishing-prevention").unwrap().can_complete());
        assert!(Lesson::open("password-security").unwrap().can_complete());
        assert!(Lesson::open("secure-auth").unwrap().can_complete());
    }

    #[test]
    fn test_demo_code_is_six_digits() {
        let lesson = AuthLesson::new();
        assert_eq!(lesson.code().len(), 6);
        assert!(lesson.code().chars().all(|c| c.is_ascii_digit()));
        assert!(lesson.seconds_left() <= DEMO_CODE_PERIOD_SECS);
    }

    #[test]
    fn test_auth_selection_bounds() {
        let mut lesson = AuthLesson::new();
        lesson.select_previous();
        assert_eq!(lesson.selected, 0);
        for _ in 0..10 {
            lesson.select_next();
        }
        assert_eq!(lesson.selected, content::MFA_TYPES.len() - 1);
    }

    #[test]
    fn test_entry_positions() {
        assert_eq!(Lesson::open("password-security").unwrap().position(), "strength-checker");
        assert_eq!(Lesson::open("secure-auth").unwrap().position(), "exploring-mfa");
        assert_eq!(Lesson::open("transaction-safety").unwrap().position(), "scenario-0");
        assert_eq!(Lesson::open("device-security").unwrap().position(), "completed-0");
        assert_eq!(Lesson::open("phishing-prevention").unwrap().position(), "example-0");
    }
}
