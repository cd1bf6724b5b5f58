//! Render-independent models of the exercise screen's widgets.

mod carousel;
mod rhythm;
mod ring;

pub use carousel::{step_cards, StepCard};
pub use rhythm::{RhythmFrame, RhythmPattern, Ripple};
pub use ring::ProgressRing;
