use crate::catalog::Exercise;

/// One card of the horizontally scrolling instruction carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCard<'a> {
    /// Upper-cased ordinal, "STEP 1" onward.
    pub heading: String,
    pub icon: &'a str,
    pub instruction: &'a str,
}

pub fn step_cards(exercise: &Exercise) -> Vec<StepCard<'_>> {
    exercise
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| StepCard {
            heading: format!("STEP {}", i + 1),
            icon: &step.icon,
            instruction: &step.instruction,
        })
        .collect()
}
