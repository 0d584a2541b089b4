use crate::error::AppError;
use crate::models::{ModuleProgress, ProgressMap};
use crate::storage::Storage;

const STORAGE_KEY: &str = "progress";

/// Authoritative record of per-module advancement, written through to the
/// key-value store after every mutation. Persistence failures are logged and
/// swallowed; the in-memory map stays the source of truth for the session.
pub struct ProgressStore {
    storage: Box<dyn Storage>,
    progress: ProgressMap,
}

impl ProgressStore {
    /// Construct the store and load persisted state in one step. Missing or
    /// unreadable data is treated as first use.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let progress = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                eprintln!("Ignoring unreadable progress data: {}", e);
                ProgressMap::new()
            }),
            Ok(None) => ProgressMap::new(),
            Err(e) => {
                eprintln!("Failed to load progress: {}", e);
                ProgressMap::new()
            }
        };
        Self { storage, progress }
    }

    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    /// Record one activity tick: overwrite the position marker and bump the
    /// tick counter, creating the record if the module was never visited.
    /// The same position still counts as a tick.
    pub fn update_module_progress(&mut self, module_id: &str, position: &str) {
        let entry = self.progress.entry(module_id.to_string()).or_default();
        entry.last_position = position.to_string();
        entry.time_spent += 1;
        self.persist();
    }

    /// Completion keeps the existing position and tick count.
    pub fn mark_module_complete(&mut self, module_id: &str) {
        self.progress
            .entry(module_id.to_string())
            .or_default()
            .completed = true;
        self.persist();
    }

    pub fn module_progress(&self, module_id: &str) -> Option<&ModuleProgress> {
        self.progress.get(module_id)
    }

    /// Unknown modules are simply not completed, never an error.
    pub fn is_module_completed(&self, module_id: &str) -> bool {
        self.progress
            .get(module_id)
            .map(|p| p.completed)
            .unwrap_or(false)
    }

    pub fn completed_count<'a, I>(&self, module_ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        module_ids
            .into_iter()
            .filter(|id| self.is_module_completed(id))
            .count()
    }

    // Flush the whole map. A failed flush leaves the in-memory state intact.
    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            eprintln!("Failed to save progress: {}", e);
        }
    }

    fn try_persist(&mut self) -> Result<(), AppError> {
        let raw = serde_json::to_string(&self.progress)?;
        self.storage.set(STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStorage;
    use crate::storage::testing::{FailingStorage, MemoryStorage};

    fn store() -> ProgressStore {
        ProgressStore::load(Box::new(MemoryStorage::default()))
    }

    #[test]
    fn test_unknown_module_is_absent_and_not_completed() {
        let store = store();
        assert!(store.module_progress("device-security").is_none());
        assert!(!store.is_module_completed("device-security"));
    }

    #[test]
    fn test_update_initializes_then_ticks() {
        let mut store = store();
        store.update_module_progress("transaction-safety", "scenario-0");
        let progress = store.module_progress("transaction-safety").unwrap();
        assert!(!progress.completed);
        assert_eq!(progress.last_position, "scenario-0");
        assert_eq!(progress.time_spent, 1);
    }

    #[test]
    fn test_repeated_update_ticks_and_overwrites_position() {
        let mut store = store();
        store.update_module_progress("phishing-prevention", "example-0");
        store.update_module_progress("phishing-prevention", "example-1");
        let progress = store.module_progress("phishing-prevention").unwrap();
        assert_eq!(progress.time_spent, 2);
        assert_eq!(progress.last_position, "example-1");
    }

    #[test]
    fn test_same_position_still_counts_as_a_tick() {
        let mut store = store();
        store.update_module_progress("password-security", "strength-checker");
        store.update_module_progress("password-security", "strength-checker");
        let progress = store.module_progress("password-security").unwrap();
        assert_eq!(progress.time_spent, 2);
    }

    #[test]
    fn test_complete_is_monotonic_across_updates() {
        let mut store = store();
        store.mark_module_complete("secure-auth");
        store.update_module_progress("secure-auth", "exploring-mfa");
        store.update_module_progress("secure-auth", "exploring-mfa");
        assert!(store.is_module_completed("secure-auth"));
    }

    #[test]
    fn test_complete_preserves_position_and_ticks() {
        let mut store = store();
        store.update_module_progress("device-security", "completed-3");
        store.mark_module_complete("device-security");
        let progress = store.module_progress("device-security").unwrap();
        assert!(progress.completed);
        assert_eq!(progress.last_position, "completed-3");
        assert_eq!(progress.time_spent, 1);
    }

    #[test]
    fn test_complete_on_unvisited_module_creates_defaulted_record() {
        let mut store = store();
        store.mark_module_complete("password-security");
        let progress = store.module_progress("password-security").unwrap();
        assert!(progress.completed);
        assert_eq!(progress.last_position, "");
        assert_eq!(progress.time_spent, 0);
    }

    #[test]
    fn test_completed_count_over_catalog_ids() {
        let mut store = store();
        store.mark_module_complete("password-security");
        store.mark_module_complete("secure-auth");
        let ids = ["password-security", "secure-auth", "transaction-safety"];
        assert_eq!(store.completed_count(ids), 2);
    }

    #[test]
    fn test_state_survives_reload_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_path_buf();

        let mut store = ProgressStore::load(Box::new(FileStorage::new(dir.clone())));
        store.update_module_progress("phishing-prevention", "example-2");
        store.mark_module_complete("phishing-prevention");

        let reloaded = ProgressStore::load(Box::new(FileStorage::new(dir)));
        assert!(reloaded.is_module_completed("phishing-prevention"));
        let progress = reloaded.module_progress("phishing-prevention").unwrap();
        assert_eq!(progress.last_position, "example-2");
        assert_eq!(progress.time_spent, 1);
    }

    #[test]
    fn test_corrupt_data_loads_as_first_use() {
        let mut storage = MemoryStorage::default();
        storage.set(STORAGE_KEY, "not json at all").unwrap();
        let store = ProgressStore::load(Box::new(storage));
        assert!(store.progress().is_empty());
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut store = ProgressStore::load(Box::new(FailingStorage));
        store.update_module_progress("secure-auth", "exploring-mfa");
        store.mark_module_complete("secure-auth");
        assert!(store.is_module_completed("secure-auth"));
        assert_eq!(
            store.module_progress("secure-auth").unwrap().time_spent,
            1
        );
    }
}
