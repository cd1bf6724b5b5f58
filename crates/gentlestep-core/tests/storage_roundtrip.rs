//! The completion counter survives reopening its database file.

use gentlestep_core::{CompletionCounter, Database, Router};

#[test]
fn counter_persists_across_processes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gentlestep.db");

    {
        let mut router = Router::new(CompletionCounter::new(Database::open_at(&path).unwrap()));
        router.mark_complete().unwrap();
        router.mark_complete().unwrap();
    }

    let router = Router::new(CompletionCounter::new(Database::open_at(&path).unwrap()));
    assert_eq!(router.completions().unwrap(), 2);
}

#[test]
fn fresh_file_reads_zero() {
    let dir = tempfile::tempdir().unwrap();
    let counter = CompletionCounter::new(Database::open_at(dir.path().join("new.db")).unwrap());
    assert_eq!(counter.read().unwrap(), 0);
}
