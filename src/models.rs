use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Advancement record for one learning module.
///
/// `completed` is monotonic: no store operation ever resets it to false.
/// `time_spent` is a tick counter, bumped once per progress update, not
/// wall-clock time.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ModuleProgress {
    pub completed: bool,
    #[serde(default)]
    pub last_position: String,
    #[serde(default)]
    pub time_spent: u32,
}

/// Module id to progress. An absent key means the module was never visited.
pub type ProgressMap = HashMap<String, ModuleProgress>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    Bronze,
    Silver,
    Gold,
}

impl BadgeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeLevel::Bronze => "Bronze",
            BadgeLevel::Silver => "Silver",
            BadgeLevel::Gold => "Gold",
        }
    }
}

/// Catalog entry, fixed at build time. Earned badges copy these fields so
/// the persisted list stays readable without the catalog at hand.
#[derive(Clone, Copy, Debug)]
pub struct Badge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub level: BadgeLevel,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EarnedBadge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub level: BadgeLevel,
    pub date_earned: DateTime<Local>,
}

impl EarnedBadge {
    pub fn from_catalog(badge: &Badge, date_earned: DateTime<Local>) -> Self {
        Self {
            id: badge.id.to_string(),
            title: badge.title.to_string(),
            description: badge.description.to_string(),
            icon: badge.icon.to_string(),
            level: badge.level,
            date_earned,
        }
    }
}

/// Award order is insertion order; an id appears at most once.
pub type EarnedBadgeList = Vec<EarnedBadge>;

/// One self-contained lesson/quiz unit shown on the module list.
#[derive(Clone, Copy, Debug)]
pub struct Module {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Badge awarded once this module is completed.
    pub badge_id: &'static str,
}
