//! The persisted count of finished sessions.
//!
//! Named for "today" in the UI but never reset by the application; there is
//! no date rollover.

use std::fmt;

use super::preferences::PreferenceStore;
use crate::error::StorageError;

/// Preference key the count is stored under.
pub const COMPLETIONS_KEY: &str = "dailyCompletions";

type Observer = Box<dyn Fn(u64) + Send>;

pub struct CompletionCounter {
    store: Box<dyn PreferenceStore + Send>,
    observers: Vec<Observer>,
}

impl CompletionCounter {
    pub fn new(store: impl PreferenceStore + Send + 'static) -> Self {
        Self {
            store: Box::new(store),
            observers: Vec::new(),
        }
    }

    /// Last persisted value, or 0 if never set.
    pub fn read(&self) -> Result<u64, StorageError> {
        let raw = self.store.get_int(COMPLETIONS_KEY)?.unwrap_or(0);
        Ok(raw.max(0) as u64)
    }

    /// Read, write back one more, then notify observers with the new value.
    ///
    /// Not transactional: a crash between read and write loses the increment.
    pub fn increment(&mut self) -> Result<u64, StorageError> {
        let next = self.read()?.saturating_add(1);
        self.store
            .set_int(COMPLETIONS_KEY, i64::try_from(next).unwrap_or(i64::MAX))?;
        tracing::info!(total = next, "completion recorded");
        for observer in &self.observers {
            observer(next);
        }
        Ok(next)
    }

    /// Register a callback invoked after every increment.
    pub fn on_change(&mut self, observer: impl Fn(u64) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }
}

impl fmt::Debug for CompletionCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionCounter")
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Database, MemoryPreferences};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[test]
    fn fresh_store_reads_zero() {
        let counter = CompletionCounter::new(MemoryPreferences::new());
        assert_eq!(counter.read().unwrap(), 0);
    }

    #[test]
    fn increment_persists() {
        let mut counter = CompletionCounter::new(Database::open_memory().unwrap());
        assert_eq!(counter.increment().unwrap(), 1);
        assert_eq!(counter.increment().unwrap(), 2);
        assert_eq!(counter.read().unwrap(), 2);
    }

    #[test]
    fn observers_see_new_value() {
        let seen = Arc::new(AtomicU64::new(0));
        let mut counter = CompletionCounter::new(MemoryPreferences::new());
        let sink = Arc::clone(&seen);
        counter.on_change(move |n| sink.store(n, Ordering::SeqCst));
        counter.increment().unwrap();
        counter.increment().unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn negative_stored_value_reads_as_zero() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_int(COMPLETIONS_KEY, -4).unwrap();
        let mut counter = CompletionCounter::new(prefs);
        assert_eq!(counter.read().unwrap(), 0);
        assert_eq!(counter.increment().unwrap(), 1);
    }
}
