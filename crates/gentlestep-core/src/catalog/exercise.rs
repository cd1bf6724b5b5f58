use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseType {
    AnkleCircles,
    HeelRaises,
    ToeFlex,
    SeatedStretch,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 4] = [
        ExerciseType::AnkleCircles,
        ExerciseType::HeelRaises,
        ExerciseType::ToeFlex,
        ExerciseType::SeatedStretch,
    ];

    /// Human-readable title shown on every screen.
    pub fn display_name(self) -> &'static str {
        match self {
            ExerciseType::AnkleCircles => "Ankle Circles",
            ExerciseType::HeelRaises => "Heel Raises",
            ExerciseType::ToeFlex => "Toe Flex & Point",
            ExerciseType::SeatedStretch => "Seated Calf Stretch",
        }
    }

    /// Command-line identifier.
    pub fn slug(self) -> &'static str {
        match self {
            ExerciseType::AnkleCircles => "ankle-circles",
            ExerciseType::HeelRaises => "heel-raises",
            ExerciseType::ToeFlex => "toe-flex",
            ExerciseType::SeatedStretch => "seated-stretch",
        }
    }

    /// Symbol used for the exercise on the selection screen.
    pub fn icon(self) -> &'static str {
        match self {
            ExerciseType::AnkleCircles => "arrow.triangle.2.circlepath",
            ExerciseType::HeelRaises => "arrow.up.and.down",
            ExerciseType::ToeFlex => "arrow.left.and.right",
            ExerciseType::SeatedStretch => "figure.flexibility",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExerciseType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ExerciseType::ALL
            .into_iter()
            .find(|t| t.slug() == needle || t.display_name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CatalogError::UnknownExercise(s.to_string()))
    }
}

/// One instruction in an exercise's step carousel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructionStep {
    pub id: Uuid,
    pub icon: String,
    pub instruction: String,
}

impl InstructionStep {
    pub fn new(icon: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            icon: icon.into(),
            instruction: instruction.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub description: String,
    /// Target session length; serialized as fractional seconds.
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    pub steps: Vec<InstructionStep>,
}

impl Exercise {
    /// Negative or non-finite durations collapse to zero.
    pub fn new(
        exercise_type: ExerciseType,
        description: impl Into<String>,
        duration_secs: f64,
        steps: Vec<InstructionStep>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_type,
            description: description.into(),
            duration: secs_to_duration(duration_secs),
            steps,
        }
    }

    pub fn name(&self) -> &'static str {
        self.exercise_type.display_name()
    }

    /// Copy of this exercise with a different session length.
    pub fn with_duration(&self, duration: Duration) -> Self {
        Self {
            duration,
            ..self.clone()
        }
    }
}

pub(crate) fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Ok(super::secs_to_duration(secs))
    }
}
