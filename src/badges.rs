use crate::content;
use crate::error::AppError;
use crate::models::{EarnedBadge, EarnedBadgeList};
use crate::progress::ProgressStore;
use crate::storage::Storage;
use chrono::Local;

const STORAGE_KEY: &str = "badges";

/// Earned-badge ledger over the fixed catalog. Each badge id is awarded at
/// most once; the list keeps award order. Same write-through and
/// failure-swallowing contract as the progress store.
pub struct BadgeStore {
    storage: Box<dyn Storage>,
    earned: EarnedBadgeList,
}

impl BadgeStore {
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let earned = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                eprintln!("Ignoring unreadable badge data: {}", e);
                EarnedBadgeList::new()
            }),
            Ok(None) => EarnedBadgeList::new(),
            Err(e) => {
                eprintln!("Failed to load badges: {}", e);
                EarnedBadgeList::new()
            }
        };
        Self { storage, earned }
    }

    pub fn earned(&self) -> &[EarnedBadge] {
        &self.earned
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.earned.iter().any(|b| b.id == badge_id)
    }

    /// Award a badge by id. Already-held and unknown ids are ignored.
    /// Returns the new entry when one was actually appended.
    pub fn award_badge(&mut self, badge_id: &str) -> Option<EarnedBadge> {
        if self.has_badge(badge_id) {
            return None;
        }
        let badge = content::badge(badge_id)?;
        let earned = EarnedBadge::from_catalog(badge, Local::now());
        self.earned.push(earned.clone());
        self.persist();
        Some(earned)
    }

    pub fn latest_badge(&self) -> Option<&EarnedBadge> {
        self.earned.last()
    }

    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            eprintln!("Failed to save badges: {}", e);
        }
    }

    fn try_persist(&mut self) -> Result<(), AppError> {
        let raw = serde_json::to_string(&self.earned)?;
        self.storage.set(STORAGE_KEY, &raw)
    }
}

/// Award pass, run after a completion changes the aggregate counts.
///
/// The milestone rules form a strict if/else-if chain: at most one milestone
/// badge per call, even if a burst of completions made several thresholds
/// satisfiable at once. The per-module awards run on every call regardless,
/// so several module badges can land in a single pass.
///
/// Returns newly earned badges in award order.
pub fn evaluate_awards(progress: &ProgressStore, badges: &mut BadgeStore) -> Vec<EarnedBadge> {
    let completed = progress.completed_count(content::MODULES.iter().map(|m| m.id));
    let total = content::MODULES.len();
    let mut newly_earned = Vec::new();

    if completed >= 1 && !badges.has_badge(content::BADGE_TRAINEE) {
        newly_earned.extend(badges.award_badge(content::BADGE_TRAINEE));
    } else if completed >= 3 && !badges.has_badge(content::BADGE_APPRENTICE) {
        newly_earned.extend(badges.award_badge(content::BADGE_APPRENTICE));
    } else if completed == total && !badges.has_badge(content::BADGE_EXPERT) {
        newly_earned.extend(badges.award_badge(content::BADGE_EXPERT));
    }

    for module in &content::MODULES {
        if progress.is_module_completed(module.id) && !badges.has_badge(module.badge_id) {
            newly_earned.extend(badges.award_badge(module.badge_id));
        }
    }

    newly_earned
}
