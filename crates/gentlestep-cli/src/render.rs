//! Terminal rendition of the four screens.

use gentlestep_core::visual::{step_cards, ProgressRing, RhythmFrame};
use gentlestep_core::{Exercise, ExerciseVisit, SessionState};

const TITLE: &str = "GentleStep";
const TAGLINE: &str = "Take a mindful moment for your mobility. Simple, clinically-inspired exercises designed to safely integrate into your daily routine.";

pub fn welcome_screen(completed: u64) -> String {
    let mut out = format!("{TITLE}\n\n{TAGLINE}\n");
    if completed > 0 {
        out.push_str(&format!("\nToday's Progress: {completed} Exercises\n"));
    }
    out.push_str("\nRun `gentlestep exercises list` to begin.\n");
    out
}

pub fn selection_screen(exercises: &[Exercise]) -> String {
    let mut out = String::from("Choose an exercise based on your comfort level today.\n\n");
    for exercise in exercises {
        out.push_str(&format!(
            "  {:<16} {:<20} {} Seconds\n",
            exercise.exercise_type.slug(),
            exercise.name(),
            exercise.duration.as_secs()
        ));
    }
    out
}

/// Exercise header; the step cards follow only when `show_steps` is set.
pub fn exercise_detail(exercise: &Exercise, show_steps: bool) -> String {
    let mut out = format!(
        "{}  ({} Seconds)\n\n{}\n",
        exercise.name(),
        exercise.duration.as_secs(),
        exercise.description
    );
    if !show_steps {
        return out;
    }
    for card in step_cards(exercise) {
        out.push_str(&format!("\n  {}  [{}]\n  {}\n", card.heading, card.icon, card.instruction));
    }
    out
}

/// Single status line redrawn on every tick.
pub fn session_line(
    visit: &ExerciseVisit,
    state: &SessionState,
    ring_width: usize,
    rhythm: Option<&RhythmFrame>,
) -> String {
    let ring = ProgressRing::new(state.progress);
    let action = ExerciseVisit::primary_action(state);
    let mut line = format!(
        "{} {:>3}%  {}",
        ring.render_bar(ring_width),
        ring.percent(),
        visit.remaining_label(state)
    );
    if let Some(frame) = rhythm {
        line.push_str("  ");
        line.push_str(&frame.glyph());
    }
    line.push_str(&format!("  <Enter> {}  <q> leave", action.label));
    line
}

pub fn completion_screen(completed: u64) -> String {
    let plural = if completed == 1 { "" } else { "s" };
    format!(
        "Brilliant!\n\nYou've completed {completed} exercise{plural} today.\nConsistency is the key to mobility.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gentlestep_core::catalog::{self, ExerciseType};

    #[test]
    fn welcome_hides_progress_until_first_completion() {
        assert!(!welcome_screen(0).contains("Today's Progress"));
        assert!(welcome_screen(3).contains("Today's Progress: 3 Exercises"));
    }

    #[test]
    fn completion_pluralizes() {
        assert!(completion_screen(1).contains("completed 1 exercise today."));
        assert!(completion_screen(2).contains("completed 2 exercises today."));
    }

    #[test]
    fn selection_lists_every_exercise() {
        let screen = selection_screen(catalog::all());
        assert!(screen.contains("Seated Calf Stretch"));
        assert!(screen.contains("45 Seconds"));
        assert_eq!(screen.lines().filter(|l| l.contains("Seconds")).count(), 4);
    }

    #[test]
    fn session_line_shows_ring_time_and_action() {
        let visit = ExerciseVisit::new(catalog::get(ExerciseType::HeelRaises).clone());
        let state = SessionState { progress: 0.5, is_running: true, is_finished: false };
        let line = session_line(&visit, &state, 10, None);
        assert!(line.starts_with("[#####.....]  50%  00:15"));
        assert!(line.contains("<Enter> Pause"));
    }

    #[test]
    fn detail_numbers_steps() {
        let detail = exercise_detail(catalog::get(ExerciseType::ToeFlex), true);
        assert!(detail.contains("STEP 1"));
        assert!(detail.contains("STEP 3"));
        assert!(detail.contains("Toe Flex & Point"));
    }

    #[test]
    fn detail_can_hide_steps() {
        let exercise = catalog::get(ExerciseType::ToeFlex);
        let detail = exercise_detail(exercise, false);
        assert!(!detail.contains("STEP"));
        assert!(detail.contains("Toe Flex & Point"));
        assert!(detail.contains(&exercise.description));
    }
}
