//! The built-in exercise catalog.
//!
//! Four exercises, fixed at compile time and materialized once per process.
//! Nothing in the application mutates them.

mod exercise;

pub use exercise::{Exercise, ExerciseType, InstructionStep};

use std::sync::OnceLock;

use crate::error::CatalogError;

static CATALOG: OnceLock<Vec<Exercise>> = OnceLock::new();

/// Every exercise, in selection-screen order.
pub fn all() -> &'static [Exercise] {
    CATALOG.get_or_init(build)
}

/// The catalog entry for an exercise type.
pub fn get(exercise_type: ExerciseType) -> &'static Exercise {
    all()
        .iter()
        .find(|e| e.exercise_type == exercise_type)
        .unwrap_or_else(|| unreachable!("catalog is missing {exercise_type:?}"))
}

/// Resolve a command-line name (slug or display name) to a catalog entry.
pub fn lookup(name: &str) -> Result<&'static Exercise, CatalogError> {
    let exercise_type: ExerciseType = name.parse()?;
    Ok(get(exercise_type))
}

fn build() -> Vec<Exercise> {
    vec![
        Exercise::new(
            ExerciseType::AnkleCircles,
            "Gently roll your ankle in a smooth, continuous circle. This lubricates the joint and reduces morning stiffness.",
            30.0,
            vec![
                InstructionStep::new("arrow.up.right.circle", "Lift your foot slightly off the floor."),
                InstructionStep::new("arrow.triangle.2.circlepath", "Slowly draw a large circle with your big toe."),
                InstructionStep::new("clock.arrow.2.circlepath", "Keep the movement smooth and continuous."),
            ],
        ),
        Exercise::new(
            ExerciseType::HeelRaises,
            "Keep your toes planted and lift your heel off the ground. Excellent for calf strength and Achilles flexibility.",
            30.0,
            vec![
                InstructionStep::new("shoeprints.fill", "Plant both feet flat on the ground."),
                InstructionStep::new("arrow.up", "Push down through your toes to lift your heel."),
                InstructionStep::new("arrow.down", "Slowly lower your heel back to the starting position."),
            ],
        ),
        Exercise::new(
            ExerciseType::ToeFlex,
            "Point your toes forward, then flex them back towards you. Helps relieve plantar tension.",
            30.0,
            vec![
                InstructionStep::new("arrow.right", "Point your toes forward as far as comfortable."),
                InstructionStep::new("pause.circle", "Hold the pointed position for one second."),
                InstructionStep::new("arrow.left", "Flex your toes back towards your shin and hold."),
            ],
        ),
        Exercise::new(
            ExerciseType::SeatedStretch,
            "Extend your leg and gently pull your toes back to stretch the calf muscle deeply.",
            45.0,
            vec![
                InstructionStep::new("figure.flexibility", "Sit comfortably and extend one leg straight out."),
                InstructionStep::new("hand.point.left.fill", "Flex your toes back towards your body."),
                InstructionStep::new("timer", "Hold the stretch steadily without bouncing."),
            ],
        ),
    ]
}
