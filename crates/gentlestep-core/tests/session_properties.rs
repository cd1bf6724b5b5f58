//! Property tests for the session timer, router and completion counter.

use std::time::Duration;

use gentlestep_core::catalog::{self, ExerciseType};
use gentlestep_core::{
    CompletionCounter, ExerciseVisit, ManualClock, MemoryPreferences, Route, Router, SessionPhase,
    SessionTimer,
};
use proptest::prelude::*;

fn timer(duration_ms: u64) -> (SessionTimer<ManualClock>, ManualClock) {
    let clock = ManualClock::starting_at(1_700_000_000_000);
    (
        SessionTimer::with_clock(Duration::from_millis(duration_ms), clock.clone()),
        clock,
    )
}

fn route_strategy() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::Selection),
        Just(Route::Completion),
        (0usize..4).prop_map(|i| Route::Exercise(catalog::all()[i].clone())),
    ]
}

proptest! {
    #[test]
    fn full_duration_always_finishes(duration_ms in 1u64..3_600_000) {
        let (mut t, clock) = timer(duration_ms);
        t.start();
        clock.advance(Duration::from_millis(duration_ms));
        t.tick();
        prop_assert_eq!(t.progress(), 1.0);
        prop_assert!(t.is_finished());
        prop_assert!(!t.is_running());
    }

    #[test]
    fn pause_resume_preserves_progress(
        duration_ms in 1_000u64..600_000,
        run_ms in 0u64..1_000,
        pause_ms in 0u64..1_000_000,
        after_ms in 0u64..1_000,
    ) {
        let (mut t, clock) = timer(duration_ms);
        t.start();
        clock.advance(Duration::from_millis(run_ms));
        t.tick();
        t.stop();
        let paused_at = t.progress();

        clock.advance(Duration::from_millis(pause_ms));
        t.start();
        prop_assert_eq!(t.progress(), paused_at);

        clock.advance(Duration::from_millis(after_ms));
        t.tick();
        let ceiling = paused_at + (after_ms as f64 + 1.0) / duration_ms as f64;
        prop_assert!(t.progress() >= paused_at);
        prop_assert!(t.progress() <= ceiling.min(1.0));
    }

    #[test]
    fn progress_never_decreases_while_running(
        duration_ms in 1u64..120_000,
        steps in prop::collection::vec((0u64..5_000, any::<bool>()), 1..40),
    ) {
        let (mut t, clock) = timer(duration_ms);
        t.start();
        let mut last = t.progress();
        for (advance, toggle) in steps {
            clock.advance(Duration::from_millis(advance));
            if toggle {
                t.toggle();
            }
            t.tick();
            prop_assert!(t.progress() >= last);
            prop_assert!((0.0..=1.0).contains(&t.progress()));
            last = t.progress();
        }
    }

    #[test]
    fn pop_to_root_always_empties(routes in prop::collection::vec(route_strategy(), 0..20)) {
        let mut router = Router::new(CompletionCounter::new(MemoryPreferences::new()));
        for route in routes {
            router.push(route);
        }
        router.pop_to_root();
        prop_assert!(router.path().is_empty());
    }

    #[test]
    fn counter_counts_increments(n in 0u64..200) {
        let mut counter = CompletionCounter::new(MemoryPreferences::new());
        for _ in 0..n {
            counter.increment().unwrap();
        }
        prop_assert_eq!(counter.read().unwrap(), n);
    }
}

#[test]
fn thirty_second_session_counts_once() {
    let exercise = catalog::get(ExerciseType::AnkleCircles).clone();
    let mut router = Router::new(CompletionCounter::new(MemoryPreferences::new()));
    router.push(Route::Selection);
    router.push(Route::Exercise(exercise.clone()));
    let mut visit = ExerciseVisit::new(exercise.clone());

    let clock = ManualClock::starting_at(0);
    let mut t = SessionTimer::with_clock(exercise.duration, clock.clone());
    t.start();
    for _ in 0..601 {
        clock.advance(Duration::from_millis(50));
        t.tick();
        visit.observe(&t.state(), &mut router).unwrap();
    }
    // 30.05 s simulated, then a few extra observations of the finished state.
    for _ in 0..3 {
        visit.observe(&t.state(), &mut router).unwrap();
    }

    assert_eq!(t.phase(), SessionPhase::Finished);
    assert_eq!(t.progress(), 1.0);
    assert!(!t.is_running());
    assert_eq!(router.completions().unwrap(), 1);
    assert_eq!(router.current(), Some(&Route::Completion));
}

#[test]
fn paused_time_is_not_counted() {
    let (mut t, clock) = timer(30_000);
    t.start();
    clock.advance(Duration::from_secs(10));
    t.tick();
    t.stop();
    clock.advance(Duration::from_secs(5));
    t.start();
    clock.advance(Duration::from_secs(20));
    t.tick();
    assert!(t.is_finished());
    assert!(!t.is_running());
    assert_eq!(t.progress(), 1.0);
}
