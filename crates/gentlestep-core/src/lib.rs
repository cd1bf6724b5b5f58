//! # GentleStep Core Library
//!
//! This library provides the core logic for GentleStep, a guided lower-leg
//! mobility routine. The terminal front-end in `gentlestep-cli` is a thin
//! presentation layer over the same core.
//!
//! ## Architecture
//!
//! - **Catalog**: the fixed, built-in list of exercises
//! - **Session Timer**: a wall-clock-based state machine driving a normalized
//!   progress value, plus [`ActiveSession`], the cancellable ticking task
//! - **Storage**: key-value preferences (SQLite) holding the completion
//!   counter, and TOML-based configuration
//! - **Navigation**: the forward route stack and the exercise screen controller
//! - **Visual**: progress ring, rhythm animation and step carousel models
//!
//! ## Key Components
//!
//! - [`SessionTimer`]: start/pause/resume/finish state machine
//! - [`CompletionCounter`]: persisted count of finished sessions
//! - [`Router`]: navigation path plus "mark complete"
//! - [`ExerciseVisit`]: ties one session to the router for a single screen visit

pub mod catalog;
pub mod error;
pub mod events;
pub mod navigation;
pub mod storage;
pub mod timer;
pub mod visit;
pub mod visual;

pub use catalog::{Exercise, ExerciseType, InstructionStep};
pub use error::{CatalogError, ConfigError, CoreError, StorageError};
pub use events::Event;
pub use navigation::{Route, Router};
pub use storage::{CompletionCounter, Config, Database, MemoryPreferences, PreferenceStore};
pub use timer::{ActiveSession, Clock, ManualClock, SessionPhase, SessionState, SessionTimer, SystemClock};
pub use visit::{ExerciseVisit, PrimaryAction};
pub use visual::{ProgressRing, RhythmFrame, RhythmPattern, StepCard};
