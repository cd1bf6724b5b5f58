//! Controller for one visit to an exercise screen.
//!
//! The visit watches published [`SessionState`]s and turns the first finished
//! state into exactly one counter increment followed by navigation to the
//! completion screen.

use crate::catalog::Exercise;
use crate::error::StorageError;
use crate::events::Event;
use crate::navigation::{Route, Router};
use crate::timer::SessionState;

/// Label and icon of the screen's single button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryAction {
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone)]
pub struct ExerciseVisit {
    exercise: Exercise,
    completion_recorded: bool,
}

impl ExerciseVisit {
    pub fn new(exercise: Exercise) -> Self {
        Self {
            exercise,
            completion_recorded: false,
        }
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn is_complete(&self) -> bool {
        self.completion_recorded
    }

    /// Feed a published state. Increment-then-navigate happens once, on the
    /// first finished state; later calls return no events.
    pub fn observe(
        &mut self,
        state: &SessionState,
        router: &mut Router,
    ) -> Result<Vec<Event>, StorageError> {
        if !state.is_finished || self.completion_recorded {
            return Ok(Vec::new());
        }
        let recorded = router.mark_complete()?;
        self.completion_recorded = true;
        let pushed = router.push(Route::Completion);
        tracing::info!(exercise = self.exercise.name(), "exercise finished");
        Ok(vec![recorded, pushed])
    }

    pub fn primary_action(state: &SessionState) -> PrimaryAction {
        if state.is_running {
            PrimaryAction { label: "Pause", icon: "pause.fill" }
        } else if state.progress > 0.0 {
            PrimaryAction { label: "Resume", icon: "play.fill" }
        } else {
            PrimaryAction { label: "Start Exercise", icon: "play.fill" }
        }
    }

    /// Time left as `MM:SS`, rounded up to the next whole second.
    pub fn remaining_label(&self, state: &SessionState) -> String {
        let secs = crate::timer::session_remaining_secs(self.exercise.duration, state.progress);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
